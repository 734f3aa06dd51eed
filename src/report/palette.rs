//! Pressure colour scale: black through blues and greens to yellow and red.

use image::Rgb;

use crate::error::{AnalysisError, Result};

const STOPS: [&str; 24] = [
    "#000000", "#222222", "#444444", "#555555", "#666666", "#777777", "#0052A2", "#00498D",
    "#00498D", "#205072", "#41a0ae", "#329D9C", "#4D8C57", "#78A161", "#A3B56B", "#CDCA74",
    "#F8DE7E", "#f5eb49", "#FEF001", "#FFCE03", "#FD9A01", "#FD6104", "#FF2C05", "#F00505",
];

fn parse_hex(hex: &str) -> Result<Rgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || AnalysisError::InvalidConfig(format!("bad colour {hex}"));
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Evenly spaced colour stops, linearly interpolated.
#[derive(Debug, Clone)]
pub struct Palette {
    stops: Vec<Rgb<u8>>,
}

impl Palette {
    pub fn from_hex(stops: &[&str]) -> Result<Self> {
        if stops.len() < 2 {
            return Err(AnalysisError::InvalidConfig(
                "a palette needs at least two colours".into(),
            ));
        }
        let stops = stops.iter().map(|s| parse_hex(s)).collect::<Result<Vec<_>>>()?;
        Ok(Self { stops })
    }

    /// Colour at `t` in `[0, 1]`; values outside are clamped.
    pub fn color(&self, t: f64) -> Rgb<u8> {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (self.stops.len() - 1) as f64;
        let low = (scaled.floor() as usize).min(self.stops.len() - 2);
        let frac = scaled - low as f64;
        let (a, b) = (self.stops[low].0, self.stops[low + 1].0);
        let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * frac).round() as u8;
        Rgb([mix(0), mix(1), mix(2)])
    }
}

impl Default for Palette {
    fn default() -> Self {
        let stops = STOPS
            .iter()
            .filter_map(|s| parse_hex(s).ok())
            .collect();
        Self { stops }
    }
}
