//! Density-based clustering ("DBSCAN") of baseball pitch tracking data.
//!
//! Given a table of pitch measurements (release velocity, spin rate,
//! horizontal break and vertical break), this crate groups the pitches into
//! pitch types using the DBSCAN algorithm and derives a sensible scan range
//! for the epsilon parameter, so that an interactive caller (e.g. a dashboard
//! slider) only ever offers values that are meaningful for the data at hand:
//!  1. When the features are standardized to unit variance, a fixed range of
//!     0.05 to 1.0 covers all useful neighbourhood radii;
//!  2. Otherwise the range is derived from the mean of the per-column sample
//!     standard deviations, the natural distance scale of the raw data.
//!
//! Rows with missing measurements are dropped at the boundary before any
//! computation. Clustering is deterministic for a fixed table, epsilon and
//! hyper parameter configuration, and holds no state between calls.
//!
//! # Examples
//! ```
//!use pitchcluster::{Pitch, PitchClusterer};
//!
//!let table = vec![
//!    // Fastballs
//!    Pitch::new(92.1, 2401.0, 8.1, 14.2),
//!    Pitch::new(91.8, 2394.0, 7.9, 13.8),
//!    Pitch::new(92.4, 2412.0, 8.3, 14.0),
//!    Pitch::new(92.0, 2388.0, 7.7, 14.4),
//!    Pitch::new(91.6, 2405.0, 8.0, 13.9),
//!    Pitch::new(92.3, 2397.0, 8.2, 14.1),
//!    // Curveballs
//!    Pitch::new(78.2, 1603.0, -4.1, 2.1),
//!    Pitch::new(77.9, 1595.0, -3.8, 1.8),
//!    Pitch::new(78.4, 1610.0, -4.3, 2.3),
//!    Pitch::new(78.0, 1588.0, -4.0, 1.9),
//!    Pitch::new(77.7, 1601.0, -3.9, 2.2),
//!    Pitch::new(78.3, 1606.0, -4.2, 2.0),
//!    // A mistracked pitch
//!    Pitch::new(85.0, 3000.0, 20.0, -10.0),
//!];
//!let clusterer = PitchClusterer::new(&table);
//!let range = clusterer.epsilon_range(false).unwrap();
//!let labels = clusterer.assign_clusters(range.default, false).unwrap();
//!assert_eq!(labels, vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, -1]);
//! ```
//!
//! # References
//! * [Ester, M., Kriegel, H.P., Sander, J., Xu, X. A density-based algorithm for discovering clusters in large spatial databases with noise.](https://dl.acm.org/doi/10.5555/3001460.3001507)

pub use crate::clusterer::PitchClusterer;
pub use crate::dbscan::Dbscan;
pub use crate::epsilon::EpsilonRange;
pub use crate::error::PitchClusterError;
pub use crate::hyper_parameters::{DbscanHyperParams, HyperParamBuilder};
pub use crate::pitch::{drop_incomplete, Pitch, PitchRecord};
pub use crate::region_query::NnAlgorithm;
pub use crate::source::{load_table, PitchSource};
pub use crate::summary::{summarise, ClusterSummary};

mod clusterer;
mod dbscan;
mod distance;
mod epsilon;
mod error;
mod hyper_parameters;
mod pitch;
mod region_query;
mod scaling;
mod source;
mod summary;
