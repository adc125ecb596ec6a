use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise from invalid clustering input or from data whose
/// dispersion cannot support a meaningful epsilon range.
#[derive(Debug, Clone, PartialEq)]
pub enum PitchClusterError {
    /// The measurement table is empty, either as provided or after rows with
    /// missing values were dropped.
    EmptyTable,
    /// Epsilon must be a positive, finite distance.
    InvalidEpsilon(String),
    /// Feature vectors have mismatched dimensions.
    WrongDimension(String),
    /// A feature value is infinite or NaN.
    NonFiniteCoordinate(String),
    /// The data has zero dispersion, so no epsilon scan range can be derived
    /// from it. Callers should fall back to a fixed range or report that the
    /// data cannot be clustered meaningfully.
    DegenerateRange,
}

impl Error for PitchClusterError {}

impl Display for PitchClusterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            PitchClusterError::EmptyTable => {
                String::from("The measurement table provided is empty")
            }
            PitchClusterError::InvalidEpsilon(msg) => format!("Invalid epsilon: {msg}"),
            PitchClusterError::WrongDimension(msg) => {
                format!("Input vectors have mismatched dimensions: {msg}")
            }
            PitchClusterError::NonFiniteCoordinate(msg) => {
                format!("Non finite coordinate: {msg}")
            }
            PitchClusterError::DegenerateRange => String::from(
                "The data has zero dispersion, so no epsilon range can be derived from it",
            ),
        };
        write!(f, "{message}")
    }
}
