//! Pressure images: heat maps, heel paths and region crops.

use std::path::Path;

use anyhow::{Context, Result};
use image::{imageops, imageops::FilterType, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use ndarray::{s, Array2, Array3, ArrayView2, Axis};

use crate::{
    metrics::RunMetrics,
    models::{HeelPoint, Region, Run},
};

use super::palette::Palette;

const PATH_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const MARKER_RADIUS: i32 = 2;
const MARKER_SIZE: u32 = 2 * MARKER_RADIUS as u32 + 1;
const HEEL_PATH_SCALE: u32 = 8;

/// Render a matrix through `palette`, scaled so the largest reading maps to
/// the top of the scale. One pixel per cell.
pub fn heatmap(matrix: ArrayView2<f64>, palette: &Palette) -> RgbImage {
    let (rows, cols) = matrix.dim();
    let peak = matrix.iter().cloned().fold(0.0_f64, f64::max);
    RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        let value = matrix[[y as usize, x as usize]];
        palette.color(if peak > 0.0 { value / peak } else { 0.0 })
    })
}

/// Nearest-neighbour enlargement.
pub fn upscale(image: &RgbImage, factor: u32) -> RgbImage {
    let factor = factor.max(1);
    imageops::resize(
        image,
        image.width() * factor,
        image.height() * factor,
        FilterType::Nearest,
    )
}

/// Sum of every frame in the run.
pub fn run_footprint(volume: &Array3<f64>, run: &Run) -> Array2<f64> {
    let stop = run.frames.stop.min(volume.dim().0);
    let start = run.frames.start.min(stop);
    volume.slice(s![start..stop, .., ..]).sum_axis(Axis(0))
}

/// Run footprint with the heel points marked and joined in contact order.
pub fn heel_path(footprint: ArrayView2<f64>, heels: &[HeelPoint], palette: &Palette, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let mut image = upscale(&heatmap(footprint, palette), scale);
    let half = (scale / 2) as i32;
    let centers: Vec<(i32, i32)> = heels
        .iter()
        .map(|h| (h.col as i32 * scale as i32 + half, h.row as i32 * scale as i32 + half))
        .collect();

    for pair in centers.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        draw_line_segment_mut(
            &mut image,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            PATH_COLOR,
        );
    }
    for &(x, y) in &centers {
        let marker = Rect::at(x - MARKER_RADIUS, y - MARKER_RADIUS).of_size(MARKER_SIZE, MARKER_SIZE);
        draw_filled_rect_mut(&mut image, marker, PATH_COLOR);
    }
    image
}

/// Cells of `matrix` inside `region`.
pub fn crop(matrix: &Array2<f64>, region: &Region) -> Array2<f64> {
    matrix
        .slice(s![region.rows.start..region.rows.stop, region.cols.start..region.cols.stop])
        .to_owned()
}

pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write image {}", path.display()))
}

/// Write the heel path image of one analysed run.
pub fn write_heel_path(volume: &Array3<f64>, run: &RunMetrics, path: &Path) -> Result<()> {
    let footprint = run_footprint(volume, &run.run);
    let image = heel_path(
        footprint.view(),
        &run.stride.heels,
        &Palette::default(),
        HEEL_PATH_SCALE,
    );
    save_png(&image, path)
}
