use crate::PitchClusterError;

// Fixed scan range used once features are standardized to unit variance.
const STANDARDIZED_MIN: f64 = 0.05;
const STANDARDIZED_DEFAULT: f64 = 0.5;
const STANDARDIZED_MAX: f64 = 1.0;
const STANDARDIZED_STEP: f64 = 0.05;

// An unstandardized range is derived from the mean column standard deviation,
// split into this many steps.
const DISPERSION_STEPS: f64 = 20.0;

/// A valid scan range for the DBSCAN epsilon parameter, suitable for driving
/// a slider or any other range control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonRange {
    pub min: f64,
    pub default: f64,
    pub max: f64,
    pub step: f64,
}

impl EpsilonRange {
    /// The scan range for standardized data. Since every feature has unit
    /// variance, the range is fixed and independent of the data's scale.
    pub fn standardized() -> Self {
        EpsilonRange {
            min: STANDARDIZED_MIN,
            default: STANDARDIZED_DEFAULT,
            max: STANDARDIZED_MAX,
            step: STANDARDIZED_STEP,
        }
    }

    /// Derives a scan range from the mean of the per-column sample standard
    /// deviations, so that the reachable epsilon values are meaningful in the
    /// data's own units. The maximum is the mean standard deviation itself,
    /// the step is a twentieth of it and the default sits at the halfway
    /// point.
    ///
    /// Data with zero dispersion yields `PitchClusterError::DegenerateRange`
    /// rather than a zero-width range.
    pub fn from_dispersion(mean_std: f64) -> Result<Self, PitchClusterError> {
        if !mean_std.is_finite() || mean_std <= 0.0 {
            return Err(PitchClusterError::DegenerateRange);
        }
        let step = mean_std / DISPERSION_STEPS;
        Ok(EpsilonRange {
            min: step,
            default: step * 10.0,
            max: mean_std,
            step,
        })
    }
}
