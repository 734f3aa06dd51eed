//! Raw-source orientation and low-value clamping.

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Which program produced the JSON recording. The two writers disagree on
/// the grid orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Multi-mat consolidator script; matrices are rotated a quarter turn.
    Consolidator,
    /// Vendor sensing-mat software; matrices are upside down.
    SensingMat,
}

impl SourceKind {
    /// Bring a raw matrix into the analysis orientation.
    pub fn orient(&self, raw: Array2<f64>) -> Array2<f64> {
        match self {
            // Quarter turn counter-clockwise: out[i][j] = raw[j][cols - 1 - i]
            SourceKind::Consolidator => {
                let mut view = raw.view().reversed_axes();
                view.invert_axis(Axis(0));
                view.to_owned()
            }
            SourceKind::SensingMat => {
                let mut view = raw.view();
                view.invert_axis(Axis(0));
                view.to_owned()
            }
        }
    }
}

/// Zero every reading strictly below `threshold`.
pub fn clamp_low(matrix: &mut Array2<f64>, threshold: f64) {
    matrix.mapv_inplace(|v| if v < threshold { 0.0 } else { v });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn consolidator_rotates_counter_clockwise() {
        let raw = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let out = SourceKind::Consolidator.orient(raw);
        assert_eq!(out, array![[3.0, 6.0], [2.0, 5.0], [1.0, 4.0]]);
    }

    #[test]
    fn sensing_mat_flips_vertically() {
        let raw = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let out = SourceKind::SensingMat.orient(raw);
        assert_eq!(out, array![[5.0, 6.0], [3.0, 4.0], [1.0, 2.0]]);
    }

    #[test]
    fn clamp_is_strict() {
        let mut m = array![[299.0, 300.0], [0.0, 1000.0]];
        clamp_low(&mut m, 300.0);
        assert_eq!(m, array![[0.0, 300.0], [0.0, 1000.0]]);
    }
}
