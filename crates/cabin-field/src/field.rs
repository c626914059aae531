//! Sampled concentration field.

use cabin_core::Point2;

use crate::{FieldError, FieldResult};

/// A scalar concentration sampled on a rectangular grid.
///
/// `values` is stored x-major: the sample at `(xs[i], ys[j])` is
/// `values[i * ys.len() + j]`.  A field is immutable once built; a refresh
/// replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcentrationField {
    timestamp: f64,
    xs:        Vec<f64>,
    ys:        Vec<f64>,
    values:    Vec<f64>,
}

impl ConcentrationField {
    /// Validate and wrap a grid.  Both axes must be non-empty and finite and
    /// `values.len()` must equal `xs.len() * ys.len()`.
    pub fn new(timestamp: f64, xs: Vec<f64>, ys: Vec<f64>, values: Vec<f64>) -> FieldResult<Self> {
        check_axis("x", &xs)?;
        check_axis("y", &ys)?;
        let expected = xs.len() * ys.len();
        if values.len() != expected {
            return Err(FieldError::ShapeMismatch { expected, got: values.len() });
        }
        Ok(Self { timestamp, xs, ys, values })
    }

    /// Evaluate `f(x, y)` at every grid point.
    pub fn from_fn(
        timestamp: f64,
        xs: Vec<f64>,
        ys: Vec<f64>,
        f: impl Fn(f64, f64) -> f64,
    ) -> FieldResult<Self> {
        let values = xs
            .iter()
            .flat_map(|&x| ys.iter().map(move |&y| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self::new(timestamp, xs, ys, values)
    }

    /// The same `value` everywhere on the grid.
    pub fn uniform(timestamp: f64, xs: Vec<f64>, ys: Vec<f64>, value: f64) -> FieldResult<Self> {
        let values = vec![value; xs.len() * ys.len()];
        Self::new(timestamp, xs, ys, values)
    }

    #[inline]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample at grid indices `(ix, iy)`.
    #[inline]
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[ix * self.ys.len() + iy]
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Concentration at `p`.
    ///
    /// Each axis is snapped independently to its closest coordinate, so the
    /// chosen grid point is the nearest along x and along y separately rather
    /// than the nearest in the plane.  On a regular grid the two agree.
    pub fn sample(&self, p: Point2) -> f64 {
        let ix = nearest_index(&self.xs, p.x);
        let iy = nearest_index(&self.ys, p.y);
        self.value(ix, iy)
    }
}

/// Index of the coordinate with the smallest absolute difference to `v`.
/// The lowest index wins ties.
fn nearest_index(axis: &[f64], v: f64) -> usize {
    let mut best = 0;
    let mut best_d = (axis[0] - v).abs();
    for (i, &a) in axis.iter().enumerate().skip(1) {
        let d = (a - v).abs();
        if d < best_d {
            best = i;
            best_d = d;
        }
    }
    best
}

fn check_axis(name: &'static str, axis: &[f64]) -> FieldResult<()> {
    if axis.is_empty() {
        return Err(FieldError::EmptyAxis(name));
    }
    if axis.iter().any(|a| !a.is_finite()) {
        return Err(FieldError::NonFiniteAxis(name));
    }
    Ok(())
}

/// `n` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            points[n - 1] = end;
            points
        }
    }
}
