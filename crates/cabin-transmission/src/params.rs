use crate::{TransmissionError, TransmissionResult};

/// Finest grouping resolution.  Beyond this, `10^n` scaling no longer keeps
/// cabin coordinates exactly representable as bucket keys.
pub const MAX_BUCKET_DECIMALS: i32 = 6;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransmissionParams {
    /// Airborne dose-response rate: `p = 1 − exp(−rate · c)`.
    pub airborne_rate: f64,

    /// Contact events younger than this (strictly) are considered.
    pub surface_window: f64,

    /// Per-entry infection probability in an exposed contact group.
    pub surface_probability: f64,

    /// Contact positions are rounded to this many decimal places to form
    /// groups.
    pub bucket_decimals: i32,
}

impl Default for TransmissionParams {
    fn default() -> Self {
        Self {
            airborne_rate:       0.1,
            surface_window:      60.0,
            surface_probability: 0.12,
            bucket_decimals:     1,
        }
    }
}

impl TransmissionParams {
    pub fn validate(&self) -> TransmissionResult<()> {
        if !(0.0..=1.0).contains(&self.surface_probability) {
            return Err(TransmissionError::InvalidProbability {
                name:  "surface_probability",
                value: self.surface_probability,
            });
        }
        for (name, value) in [("airborne_rate", self.airborne_rate), ("surface_window", self.surface_window)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TransmissionError::InvalidRate { name, value });
            }
        }
        if !(0..=MAX_BUCKET_DECIMALS).contains(&self.bucket_decimals) {
            return Err(TransmissionError::InvalidDecimals {
                value: self.bucket_decimals,
                max:   MAX_BUCKET_DECIMALS,
            });
        }
        Ok(())
    }
}
