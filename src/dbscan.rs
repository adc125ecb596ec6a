use crate::region_query::RegionQuery;
use crate::{DbscanHyperParams, PitchClusterError};
use num_traits::Float;
use std::collections::VecDeque;

const NOISE: i32 = -1;
const UNCLASSIFIED: i32 = -2;

/// The DBSCAN clustering algorithm. Generic over floating point numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct Dbscan<'a, T> {
    data: &'a [Vec<T>],
    n_samples: usize,
    hp: DbscanHyperParams,
}

impl<'a, T: Float> Dbscan<'a, T> {
    /// Creates an instance of the DBSCAN clustering model using a custom hyper
    /// parameter configuration.
    ///
    /// # Parameters
    /// * `data` - a reference to the data to cluster, a collection of vectors
    ///            of floating point numbers. The vectors must all be of the
    ///            same dimensionality and contain no infinite values.
    /// * `hyper_params` - the hyper parameter configuration.
    ///
    /// # Returns
    /// * The DBSCAN model instance.
    ///
    /// # Examples
    /// ```
    ///use pitchcluster::{Dbscan, DbscanHyperParams, NnAlgorithm};
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.3, 1.1],
    ///    vec![1.3, 1.2],
    ///    vec![1.0, 1.1],
    ///    vec![1.2, 1.2],
    ///    vec![3.7, 4.0],
    ///    vec![3.9, 3.9],
    ///];
    ///let config = DbscanHyperParams::builder()
    ///    .epsilon(0.5)
    ///    .min_samples(2)
    ///    .nn_algorithm(NnAlgorithm::BruteForce)
    ///    .build();
    ///let clusterer = Dbscan::new(&data, config);
    /// ```
    pub fn new(data: &'a [Vec<T>], hyper_params: DbscanHyperParams) -> Self {
        let n_samples = data.len();
        Dbscan {
            data,
            n_samples,
            hp: hyper_params,
        }
    }

    /// Creates an instance of the DBSCAN clustering model using the default
    /// hyper parameters. Note that the default epsilon of 0.5 is only a
    /// sensible neighbourhood radius for standardized data.
    ///
    /// # Parameters
    /// * `data` - a reference to the data to cluster, a collection of vectors
    ///            of floating point numbers. The vectors must all be of the
    ///            same dimensionality and contain no infinite values.
    ///
    /// # Returns
    /// * The DBSCAN model instance.
    pub fn default_hyper_params(data: &'a [Vec<T>]) -> Dbscan<'a, T> {
        let hyper_params = DbscanHyperParams::default();
        Dbscan::new(data, hyper_params)
    }

    /// Performs clustering on the list of vectors passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains a list of cluster labels, with
    ///   a length equal to the number of samples passed to the constructor.
    ///   Non-negative integers mean a data point belongs to a cluster of that
    ///   label. -1 labels mean that a data point is noise and does not belong
    ///   to any cluster. An error will be returned if the dimensionality of
    ///   the input vectors are mismatched, if any vector contains non-finite
    ///   coordinates, if the passed data set is empty, or if epsilon is not a
    ///   positive finite number.
    ///
    /// # Examples
    /// ```
    ///use pitchcluster::{Dbscan, DbscanHyperParams};
    ///
    ///let data: Vec<Vec<f32>> = vec![
    ///    vec![1.5, 2.2],
    ///    vec![1.0, 1.1],
    ///    vec![1.2, 1.4],
    ///    vec![0.8, 1.0],
    ///    vec![1.1, 1.0],
    ///    vec![3.7, 4.0],
    ///    vec![3.9, 3.9],
    ///    vec![3.6, 4.1],
    ///    vec![3.8, 3.9],
    ///    vec![4.0, 4.1],
    ///    vec![10.0, 10.0],
    ///];
    ///let hp = DbscanHyperParams::builder().epsilon(1.0).min_samples(4).build();
    ///let clusterer = Dbscan::new(&data, hp);
    ///let result = clusterer.cluster().unwrap();
    ///assert_eq!(result, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, -1]);
    /// ```
    pub fn cluster(&self) -> Result<Vec<i32>, PitchClusterError> {
        self.validate_input_data()?;
        let epsilon = T::from(self.hp.epsilon).ok_or_else(|| {
            PitchClusterError::InvalidEpsilon(format!(
                "{} is not representable in the data's numeric type",
                self.hp.epsilon
            ))
        })?;
        let region_query = RegionQuery::new(self.data, epsilon, &self.hp);

        let mut labels = vec![UNCLASSIFIED; self.n_samples];
        let mut current_cluster_id = 0;

        for point in 0..self.n_samples {
            if labels[point] != UNCLASSIFIED {
                continue;
            }
            let neighbours = region_query.neighbours_of(point);
            if neighbours.len() < self.hp.min_samples {
                // Too sparse to seed a cluster, though a later expansion may
                // still claim this point as a border point
                labels[point] = NOISE;
                continue;
            }
            self.expand_cluster(
                point,
                neighbours,
                current_cluster_id,
                &region_query,
                &mut labels,
            );
            current_cluster_id += 1;
        }
        Ok(labels)
    }

    fn expand_cluster(
        &self,
        core_point: usize,
        neighbours: Vec<usize>,
        cluster_id: i32,
        region_query: &RegionQuery<'a, T>,
        labels: &mut [i32],
    ) {
        labels[core_point] = cluster_id;
        let mut seeds = VecDeque::from(neighbours);

        while let Some(neighbour) = seeds.pop_front() {
            if labels[neighbour] == NOISE {
                // Previously considered noise, now reachable as a border point
                labels[neighbour] = cluster_id;
                continue;
            }
            if labels[neighbour] != UNCLASSIFIED {
                continue;
            }
            labels[neighbour] = cluster_id;

            let neighbour_neighbours = region_query.neighbours_of(neighbour);
            if neighbour_neighbours.len() >= self.hp.min_samples {
                seeds.extend(neighbour_neighbours);
            }
        }
    }

    fn validate_input_data(&self) -> Result<(), PitchClusterError> {
        if self.data.is_empty() {
            return Err(PitchClusterError::EmptyTable);
        }
        if !self.hp.epsilon.is_finite() || self.hp.epsilon <= 0.0 {
            return Err(PitchClusterError::InvalidEpsilon(format!(
                "epsilon must be a positive finite number, got {}",
                self.hp.epsilon
            )));
        }
        let dims_0th = self.data[0].len();
        for (n, datapoint) in self.data.iter().enumerate() {
            for element in datapoint {
                if !element.is_finite() {
                    return Err(PitchClusterError::NonFiniteCoordinate(format!(
                        "{n}th vector contains non-finite element(s)"
                    )));
                }
            }
            let dims_nth = datapoint.len();
            if dims_nth != dims_0th {
                return Err(PitchClusterError::WrongDimension(format!(
                    "0th data point has {dims_0th} dimensions, but {n}th has {dims_nth}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region_query::NnAlgorithm;

    fn two_cluster_data() -> Vec<Vec<f64>> {
        vec![
            vec![1.5, 2.2],
            vec![1.0, 1.1],
            vec![1.2, 1.4],
            vec![0.8, 1.0],
            vec![1.1, 1.0],
            vec![3.7, 4.0],
            vec![3.9, 3.9],
            vec![3.6, 4.1],
            vec![3.8, 3.9],
            vec![4.0, 4.1],
            vec![10.0, 10.0],
        ]
    }

    #[test]
    fn cluster() {
        let data = two_cluster_data();
        let hp = DbscanHyperParams::builder().epsilon(1.0).min_samples(4).build();
        let clusterer = Dbscan::new(&data, hp);
        let result = clusterer.cluster().unwrap();
        assert_eq!(result, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, -1]);
    }

    #[test]
    fn noise_promoted_to_border_point() {
        // The first point is not core (four neighbours within epsilon, five
        // needed) so it is marked noise on the first scan, then promoted to a
        // border point of the cluster around (1.0, 1.0)
        let data = vec![
            vec![2.0, 1.0],
            vec![1.0, 1.0],
            vec![1.1, 1.0],
            vec![1.0, 1.1],
            vec![1.1, 1.1],
        ];
        let hp = DbscanHyperParams::builder().epsilon(1.0).min_samples(5).build();
        let result = Dbscan::new(&data, hp).cluster().unwrap();
        assert_eq!(result, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn all_noise() {
        let data = vec![
            vec![0.0, 0.0],
            vec![10.0, 0.0],
            vec![0.0, 10.0],
            vec![10.0, 10.0],
        ];
        let hp = DbscanHyperParams::builder().epsilon(0.5).min_samples(3).build();
        let result = Dbscan::new(&data, hp).cluster().unwrap();
        assert_eq!(result, vec![-1, -1, -1, -1]);
    }

    #[test]
    fn chain_connects_into_one_cluster() {
        let data: Vec<Vec<f64>> = (0..10).map(|n| vec![n as f64 * 0.3, 0.0]).collect();
        let hp = DbscanHyperParams::builder().epsilon(0.5).min_samples(2).build();
        let result = Dbscan::new(&data, hp).cluster().unwrap();
        assert!(result.iter().all(|&label| label == 0));
    }

    #[test]
    fn empty_data() {
        let data: Vec<Vec<f64>> = Vec::new();
        let clusterer = Dbscan::default_hyper_params(&data);
        let result = clusterer.cluster();
        assert!(matches!(result, Err(PitchClusterError::EmptyTable)));
    }

    #[test]
    fn zero_epsilon() {
        let data = two_cluster_data();
        let hp = DbscanHyperParams::builder().epsilon(0.0).build();
        let result = Dbscan::new(&data, hp).cluster();
        assert!(matches!(result, Err(PitchClusterError::InvalidEpsilon(..))));
    }

    #[test]
    fn negative_epsilon() {
        let data = two_cluster_data();
        let hp = DbscanHyperParams::builder().epsilon(-1.0).build();
        let result = Dbscan::new(&data, hp).cluster();
        assert!(matches!(result, Err(PitchClusterError::InvalidEpsilon(..))));
    }

    #[test]
    fn non_finite_coordinate() {
        let data = vec![vec![1.5, f64::INFINITY]];
        let clusterer = Dbscan::default_hyper_params(&data);
        let result = clusterer.cluster();
        assert!(matches!(
            result,
            Err(PitchClusterError::NonFiniteCoordinate(..))
        ));
    }

    #[test]
    fn mismatched_dimensions() {
        let data = vec![vec![1.5, 2.2], vec![1.0, 1.1], vec![1.2]];
        let clusterer = Dbscan::default_hyper_params(&data);
        let result = clusterer.cluster();
        assert!(matches!(result, Err(PitchClusterError::WrongDimension(..))));
    }

    #[test]
    fn backends_label_identically() {
        let data = two_cluster_data();
        let brute_hp = DbscanHyperParams::builder()
            .epsilon(1.0)
            .min_samples(4)
            .nn_algorithm(NnAlgorithm::BruteForce)
            .build();
        let tree_hp = DbscanHyperParams::builder()
            .epsilon(1.0)
            .min_samples(4)
            .nn_algorithm(NnAlgorithm::KdTree)
            .build();
        let brute_labels = Dbscan::new(&data, brute_hp).cluster().unwrap();
        let tree_labels = Dbscan::new(&data, tree_hp).cluster().unwrap();
        assert_eq!(brute_labels, tree_labels);
    }
}
