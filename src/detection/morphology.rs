//! Binary morphology on n-dimensional masks: hole filling and
//! connected-component labeling with bounding boxes.

use std::collections::VecDeque;

use ndarray::{Array, ArrayView, Dimension};

use crate::models::Span;

/// Neighbourhood used when walking a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Neighbours sharing a face (4 in 2D, 6 in 3D).
    Face,
    /// Every neighbour including diagonals (8 in 2D, 26 in 3D).
    Full,
}

/// Row-major index arithmetic over an n-dimensional shape.
struct Lattice {
    shape: Vec<usize>,
    strides: Vec<usize>,
    offsets: Vec<Vec<isize>>,
}

impl Lattice {
    fn new(shape: &[usize], connectivity: Connectivity) -> Self {
        let mut strides = vec![1; shape.len()];
        for axis in (0..shape.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * shape[axis + 1];
        }
        Self {
            shape: shape.to_vec(),
            strides,
            offsets: neighbour_offsets(shape.len(), connectivity),
        }
    }

    fn len(&self) -> usize {
        self.shape.iter().product()
    }

    fn decompose(&self, mut flat: usize, coords: &mut [usize]) {
        for (axis, stride) in self.strides.iter().enumerate() {
            coords[axis] = flat / stride;
            flat %= stride;
        }
    }

    fn on_border(&self, coords: &[usize]) -> bool {
        coords
            .iter()
            .zip(&self.shape)
            .any(|(&c, &extent)| c == 0 || c + 1 == extent)
    }

    /// Flat indices of the in-bounds neighbours of `coords`.
    fn neighbours<'a>(&'a self, coords: &'a [usize]) -> impl Iterator<Item = usize> + 'a {
        self.offsets.iter().filter_map(move |offset| {
            let mut flat = 0usize;
            for axis in 0..coords.len() {
                let c = coords[axis] as isize + offset[axis];
                if c < 0 || c >= self.shape[axis] as isize {
                    return None;
                }
                flat += c as usize * self.strides[axis];
            }
            Some(flat)
        })
    }
}

fn neighbour_offsets(ndim: usize, connectivity: Connectivity) -> Vec<Vec<isize>> {
    match connectivity {
        Connectivity::Face => (0..ndim)
            .flat_map(|axis| {
                [-1isize, 1].into_iter().map(move |step| {
                    let mut offset = vec![0isize; ndim];
                    offset[axis] = step;
                    offset
                })
            })
            .collect(),
        Connectivity::Full => {
            let mut offsets = vec![Vec::with_capacity(ndim)];
            for _ in 0..ndim {
                offsets = offsets
                    .into_iter()
                    .flat_map(|prefix| {
                        [-1isize, 0, 1].into_iter().map(move |step| {
                            let mut next = prefix.clone();
                            next.push(step);
                            next
                        })
                    })
                    .collect();
            }
            offsets.retain(|offset| offset.iter().any(|&step| step != 0));
            offsets
        }
    }
}

/// Set every background element that cannot reach the array border
/// through face-connected background to foreground.
pub fn fill_holes<D: Dimension>(mask: ArrayView<bool, D>) -> Array<bool, D> {
    let lattice = Lattice::new(mask.shape(), Connectivity::Face);
    let flat: Vec<bool> = mask.iter().copied().collect();
    let mut outside = vec![false; lattice.len()];
    let mut queue = VecDeque::new();
    let mut coords = vec![0usize; lattice.shape.len()];

    for index in 0..flat.len() {
        if flat[index] {
            continue;
        }
        lattice.decompose(index, &mut coords);
        if lattice.on_border(&coords) {
            outside[index] = true;
            queue.push_back(index);
        }
    }

    while let Some(index) = queue.pop_front() {
        lattice.decompose(index, &mut coords);
        for next in lattice.neighbours(&coords) {
            if !flat[next] && !outside[next] {
                outside[next] = true;
                queue.push_back(next);
            }
        }
    }

    let mut filled = mask.to_owned();
    for (value, &reachable) in filled.iter_mut().zip(&outside) {
        *value = !reachable;
    }
    filled
}

/// Label connected foreground components and return the bounding box of
/// each, one `Span` per axis, in order of each component's first element
/// in row-major scan.
pub fn label_components<D: Dimension>(
    mask: ArrayView<bool, D>,
    connectivity: Connectivity,
) -> Vec<Vec<Span>> {
    let lattice = Lattice::new(mask.shape(), connectivity);
    let ndim = lattice.shape.len();
    let flat: Vec<bool> = mask.iter().copied().collect();
    let mut seen = vec![false; flat.len()];
    let mut boxes = Vec::new();
    let mut queue = VecDeque::new();
    let mut coords = vec![0usize; ndim];

    for seed in 0..flat.len() {
        if !flat[seed] || seen[seed] {
            continue;
        }
        seen[seed] = true;
        queue.push_back(seed);
        let mut lo = vec![usize::MAX; ndim];
        let mut hi = vec![0usize; ndim];

        while let Some(index) = queue.pop_front() {
            lattice.decompose(index, &mut coords);
            for axis in 0..ndim {
                lo[axis] = lo[axis].min(coords[axis]);
                hi[axis] = hi[axis].max(coords[axis]);
            }
            for next in lattice.neighbours(&coords) {
                if flat[next] && !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }

        boxes.push(
            lo.iter()
                .zip(&hi)
                .map(|(&start, &end)| Span::new(start, end + 1))
                .collect(),
        );
    }

    boxes
}
