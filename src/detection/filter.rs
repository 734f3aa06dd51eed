//! Uniform (box) smoothing over every axis of an n-dimensional array.
//!
//! Each axis is filtered independently with a `size`-tap moving average, so a
//! 3D call smooths across time as well as space. Window placement follows
//! the usual image-processing convention: taps at offsets
//! `-(size / 2) ..= size - 1 - size / 2`, with mirror-reflected borders
//! (`d c b a | a b c d | d c b a`).

use ndarray::{Array, ArrayView1, ArrayViewMut1, Axis, Dimension, Zip};

/// Smooth `input` with a box of `size` taps along every axis.
/// A size of 0 or 1 returns the input unchanged.
pub fn box_filter<D: Dimension>(input: &Array<f64, D>, size: usize) -> Array<f64, D> {
    let mut current = input.clone();
    if size <= 1 {
        return current;
    }

    for axis in 0..input.ndim() {
        let mut next = Array::<f64, D>::zeros(current.raw_dim());
        Zip::from(next.lanes_mut(Axis(axis)))
            .and(current.lanes(Axis(axis)))
            .for_each(|out, src| filter_lane(src, out, size));
        current = next;
    }
    current
}

fn filter_lane(src: ArrayView1<f64>, mut out: ArrayViewMut1<f64>, size: usize) {
    let n = src.len();
    if n == 0 {
        return;
    }
    let before = (size / 2) as isize;
    let scale = 1.0 / size as f64;

    for j in 0..n {
        let mut acc = 0.0;
        for k in 0..size as isize {
            acc += src[reflect(j as isize + k - before, n)];
        }
        out[j] = acc * scale;
    }
}

/// Map an out-of-range index back into `0..n` by half-sample mirroring.
fn reflect(index: isize, n: usize) -> usize {
    let period = 2 * n as isize;
    let m = index.rem_euclid(period);
    if m < n as isize {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}
