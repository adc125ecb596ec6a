use crate::dbscan::Dbscan;
use crate::epsilon::EpsilonRange;
use crate::pitch::Pitch;
use crate::scaling::{mean_sample_std, standardize};
use crate::{DbscanHyperParams, PitchClusterError};

/// Clusters a pitcher's tracked pitches by velocity, spin rate and break.
///
/// Wraps the generic DBSCAN engine with the two decisions an interactive
/// caller makes: whether to standardize the features before clustering, and
/// which epsilon to cluster at. Also derives the epsilon scan range a slider
/// should offer, so that every reachable value is meaningful for the data at
/// hand.
///
/// Holds no state between calls; clustering the same table twice with the
/// same arguments yields identical labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchClusterer<'a> {
    table: &'a [Pitch],
    hp: DbscanHyperParams,
}

impl<'a> PitchClusterer<'a> {
    /// Creates a clusterer over the given measurement table using the default
    /// DBSCAN hyper parameters. The table must already be free of missing
    /// values; see `drop_incomplete`.
    pub fn new(table: &'a [Pitch]) -> Self {
        PitchClusterer {
            table,
            hp: DbscanHyperParams::default(),
        }
    }

    /// Creates a clusterer with a custom hyper parameter configuration. The
    /// epsilon set on the configuration is ignored; `assign_clusters` always
    /// takes epsilon explicitly.
    pub fn with_hyper_params(table: &'a [Pitch], hyper_params: DbscanHyperParams) -> Self {
        PitchClusterer {
            table,
            hp: hyper_params,
        }
    }

    /// Derives the epsilon scan range for this table.
    ///
    /// With `normalize` set the range is fixed at (0.05, 0.5, 1.0, 0.05),
    /// since standardized features make 1.0 a generous neighbourhood radius
    /// regardless of the data's original units. Otherwise the range is driven
    /// by the mean of the per-column sample standard deviations, so the
    /// reachable epsilon values suit the data's own distance scale.
    ///
    /// # Returns
    /// * The scan range, or `EmptyTable` for an empty table, or
    ///   `DegenerateRange` when unstandardized data has zero dispersion.
    pub fn epsilon_range(&self, normalize: bool) -> Result<EpsilonRange, PitchClusterError> {
        if self.table.is_empty() {
            return Err(PitchClusterError::EmptyTable);
        }
        if normalize {
            Ok(EpsilonRange::standardized())
        } else {
            EpsilonRange::from_dispersion(mean_sample_std(&self.feature_matrix()))
        }
    }

    /// Clusters the table at the given epsilon, optionally standardizing each
    /// feature to zero mean and unit variance first.
    ///
    /// # Returns
    /// * One label per row, in row order. Non-negative labels are cluster
    ///   memberships; -1 is noise. Errors on an empty table or a non-positive
    ///   epsilon, before any clustering is attempted.
    pub fn assign_clusters(
        &self,
        epsilon: f64,
        normalize: bool,
    ) -> Result<Vec<i32>, PitchClusterError> {
        if self.table.is_empty() {
            return Err(PitchClusterError::EmptyTable);
        }
        let features = self.feature_matrix();
        let features = if normalize {
            standardize(&features)
        } else {
            features
        };
        Dbscan::new(&features, self.hp.with_epsilon(epsilon)).cluster()
    }

    fn feature_matrix(&self) -> Vec<Vec<f64>> {
        self.table.iter().map(Pitch::features).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pitch_type_table() -> Vec<Pitch> {
        vec![
            Pitch::new(92.1, 2401.0, 8.1, 14.2),
            Pitch::new(91.8, 2394.0, 7.9, 13.8),
            Pitch::new(92.4, 2412.0, 8.3, 14.0),
            Pitch::new(92.0, 2388.0, 7.7, 14.4),
            Pitch::new(91.6, 2405.0, 8.0, 13.9),
            Pitch::new(92.3, 2397.0, 8.2, 14.1),
            Pitch::new(78.2, 1603.0, -4.1, 2.1),
            Pitch::new(77.9, 1595.0, -3.8, 1.8),
            Pitch::new(78.4, 1610.0, -4.3, 2.3),
            Pitch::new(78.0, 1588.0, -4.0, 1.9),
            Pitch::new(77.7, 1601.0, -3.9, 2.2),
            Pitch::new(78.3, 1606.0, -4.2, 2.0),
            Pitch::new(85.0, 3000.0, 20.0, -10.0),
        ]
    }

    #[test]
    fn range_drives_clustering() {
        let table = two_pitch_type_table();
        let clusterer = PitchClusterer::new(&table);
        let range = clusterer.epsilon_range(false).unwrap();
        let labels = clusterer.assign_clusters(range.default, false).unwrap();
        assert_eq!(labels, vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, -1]);
    }

    #[test]
    fn standardized_clustering_keeps_row_order() {
        let table = two_pitch_type_table();
        let clusterer = PitchClusterer::new(&table);
        let range = clusterer.epsilon_range(true).unwrap();
        let labels = clusterer.assign_clusters(range.default, true).unwrap();
        assert_eq!(labels.len(), table.len());
        assert!(labels.iter().all(|&label| label >= -1));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let table = two_pitch_type_table();
        let clusterer = PitchClusterer::new(&table);
        let first = clusterer.assign_clusters(60.0, false).unwrap();
        let second = clusterer.assign_clusters(60.0, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_table() {
        let table: Vec<Pitch> = Vec::new();
        let clusterer = PitchClusterer::new(&table);
        assert_eq!(
            clusterer.epsilon_range(false),
            Err(PitchClusterError::EmptyTable)
        );
        assert_eq!(
            clusterer.assign_clusters(0.5, false),
            Err(PitchClusterError::EmptyTable)
        );
    }

    #[test]
    fn degenerate_dispersion() {
        let table = vec![Pitch::new(92.0, 2400.0, 8.0, 14.0); 5];
        let clusterer = PitchClusterer::new(&table);
        assert_eq!(
            clusterer.epsilon_range(false),
            Err(PitchClusterError::DegenerateRange)
        );
        // The fixed standardized range is still available
        assert!(clusterer.epsilon_range(true).is_ok());
    }
}
