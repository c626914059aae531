//! Gaussian plume fallback solver.
//!
//! Every infected passenger emits a stationary anisotropic Gaussian puff:
//!
//!   c(x, y) = Σ amplitude · exp(−½((x − sx)/σx)² − ½((y − sy)/σy)²)
//!
//! sampled on a regular grid spanning `[0, length] × [0, width]`.  σx is
//! larger than σy because the cabin is long and narrow.  No airflow, walls,
//! or time dependence are modelled.

use cabin_core::Point2;

use crate::{ConcentrationField, FieldError, FieldRequest, FieldResult, FieldSolver, linspace};

/// Shape of the fallback plume and its sampling grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlumeParams {
    /// Peak concentration contributed by one source.
    pub amplitude: f64,
    /// Longitudinal spread.
    pub sigma_x:   f64,
    /// Lateral spread.
    pub sigma_y:   f64,
    /// Grid points along the cabin.
    pub nx:        usize,
    /// Grid points across the cabin.
    pub ny:        usize,
}

impl Default for PlumeParams {
    fn default() -> Self {
        Self {
            amplitude: 10.0,
            sigma_x:   5.0,
            sigma_y:   2.0,
            nx:        50,
            ny:        20,
        }
    }
}

impl PlumeParams {
    /// Grid sizes of at least one point and finite, positive spreads.
    pub fn validate(&self) -> FieldResult<()> {
        for (name, n) in [("nx", self.nx), ("ny", self.ny)] {
            if n == 0 {
                return Err(FieldError::InvalidPlume { name, value: 0.0 });
            }
        }
        if !self.amplitude.is_finite() {
            return Err(FieldError::InvalidPlume { name: "amplitude", value: self.amplitude });
        }
        for (name, sigma) in [("sigma_x", self.sigma_x), ("sigma_y", self.sigma_y)] {
            if !(sigma.is_finite() && sigma > 0.0) {
                return Err(FieldError::InvalidPlume { name, value: sigma });
            }
        }
        Ok(())
    }
}

pub struct GaussianPlumeSolver {
    params:  PlumeParams,
    xs:      Vec<f64>,
    ys:      Vec<f64>,
    sources: Vec<Point2>,
}

impl GaussianPlumeSolver {
    /// A solver whose grid covers a `length × width` cabin.
    ///
    /// Rejects invalid [`PlumeParams`] and a non-finite or non-positive
    /// extent, so a bad grid fails here rather than on every refresh.
    pub fn new(length: f64, width: f64, params: PlumeParams) -> FieldResult<Self> {
        params.validate()?;
        for (name, extent) in [("length", length), ("width", width)] {
            if !(extent.is_finite() && extent > 0.0) {
                return Err(FieldError::InvalidPlume { name, value: extent });
            }
        }
        Ok(Self {
            xs: linspace(0.0, length, params.nx),
            ys: linspace(0.0, width, params.ny),
            params,
            sources: Vec::new(),
        })
    }

    pub fn sources(&self) -> &[Point2] {
        &self.sources
    }

    fn concentration(&self, x: f64, y: f64) -> f64 {
        let PlumeParams { amplitude, sigma_x, sigma_y, .. } = self.params;
        self.sources
            .iter()
            .map(|s| {
                let u = (x - s.x) / sigma_x;
                let v = (y - s.y) / sigma_y;
                amplitude * (-0.5 * u * u - 0.5 * v * v).exp()
            })
            .sum()
    }
}

impl FieldSolver for GaussianPlumeSolver {
    fn name(&self) -> &str {
        "gaussian-plume"
    }

    fn push_sources(&mut self, sources: &[Point2]) -> FieldResult<()> {
        self.sources.clear();
        self.sources.extend_from_slice(sources);
        Ok(())
    }

    fn compute_field(&mut self, request: &FieldRequest) -> FieldResult<ConcentrationField> {
        ConcentrationField::from_fn(request.time, self.xs.clone(), self.ys.clone(), |x, y| {
            self.concentration(x, y)
        })
    }

    fn release(&mut self) -> FieldResult<()> {
        self.sources.clear();
        Ok(())
    }
}
