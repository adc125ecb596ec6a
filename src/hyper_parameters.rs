use crate::region_query::NnAlgorithm;

// Defaults for parameters. Epsilon and min_samples match the standard
// defaults of reference DBSCAN implementations; min_samples counts the point
// itself.
const EPSILON_DEFAULT: f64 = 0.5;
const MIN_SAMPLES_DEFAULT: usize = 5;
const NN_ALGORITHM_DEFAULT: NnAlgorithm = NnAlgorithm::Auto;

// Valid minimums/left bounds of parameters
const MIN_SAMPLES_MINIMUM: usize = 1;

/// A wrapper around the hyper parameters used in DBSCAN clustering. Only use
/// if you want to tune hyper parameters. Otherwise use
/// `Dbscan::default_hyper_params` to instantiate the model with defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DbscanHyperParams {
    pub(crate) epsilon: f64,
    pub(crate) min_samples: usize,
    pub(crate) nn_algo: NnAlgorithm,
}

/// Builder object to set custom hyper parameters.
pub struct HyperParamBuilder {
    epsilon: Option<f64>,
    min_samples: Option<usize>,
    nn_algo: Option<NnAlgorithm>,
}

impl DbscanHyperParams {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing custom hyper parameters to be set
    /// using various setter methods.
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn builder() -> HyperParamBuilder {
        HyperParamBuilder {
            epsilon: None,
            min_samples: None,
            nn_algo: None,
        }
    }

    pub(crate) fn with_epsilon(&self, epsilon: f64) -> Self {
        DbscanHyperParams {
            epsilon,
            ..self.clone()
        }
    }
}

impl HyperParamBuilder {
    /// Sets epsilon - the neighbourhood radius. Two points are neighbours if
    /// the distance between them does not exceed this value. This is the main
    /// hyper parameter for changing the granularity of clustering, and its
    /// useful values depend entirely on the scale of the input data.
    /// Defaults to 0.5, which is only sensible for standardized data.
    ///
    /// # Parameters
    /// * epsilon - the neighbourhood radius
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn epsilon(mut self, epsilon: f64) -> HyperParamBuilder {
        self.epsilon = Some(epsilon);
        self
    }

    /// Sets min samples - the number of points (including the point itself)
    /// that must lie within epsilon of a point for it to be considered a core
    /// point. Groupings too sparse to contain a core point become noise.
    /// Defaults to 5.
    ///
    /// # Parameters
    /// * min_samples - the number of neighbourhood points needed for a core point
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn min_samples(mut self, min_samples: usize) -> HyperParamBuilder {
        let valid_min_samples = HyperParamBuilder::validate_input_left_bound(
            min_samples,
            MIN_SAMPLES_MINIMUM,
            "min_samples",
        );
        self.min_samples = Some(valid_min_samples);
        self
    }

    /// Sets the nearest neighbour algorithm used to answer region queries
    /// (all neighbours of a point within epsilon). The primary reason for
    /// changing this parameter is performance; BruteForce scans every pair of
    /// points, which works fine on small datasets but scales poorly.
    /// Defaults to Auto, whereby the algorithm is chosen internally based on
    /// the size of the input data.
    ///
    /// # Returns
    /// * the hyper parameter configuration builder
    pub fn nn_algorithm(mut self, nn_algorithm: NnAlgorithm) -> HyperParamBuilder {
        self.nn_algo = Some(nn_algorithm);
        self
    }

    /// Finishes the building of the hyper parameter configuration. A call to
    /// this method is required to exit the builder pattern and complete the
    /// construction of the hyper parameters.
    ///
    /// # Returns
    /// * The completed DBSCAN hyper parameter configuration.
    pub fn build(self) -> DbscanHyperParams {
        DbscanHyperParams {
            epsilon: self.epsilon.unwrap_or(EPSILON_DEFAULT),
            min_samples: self.min_samples.unwrap_or(MIN_SAMPLES_DEFAULT),
            nn_algo: self.nn_algo.unwrap_or(NN_ALGORITHM_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
        if input_param < left_bound {
            println!(
                "DBSCAN_WARNING: {param} ({input_param}) cannot be lower \
                than {left_bound}. Set to {left_bound}."
            );
            left_bound
        } else {
            input_param
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let hp = DbscanHyperParams::default();
        assert_eq!(hp.epsilon, 0.5);
        assert_eq!(hp.min_samples, 5);
        assert_eq!(hp.nn_algo, NnAlgorithm::Auto);
    }

    #[test]
    fn builder_overrides() {
        let hp = DbscanHyperParams::builder()
            .epsilon(2.5)
            .min_samples(3)
            .nn_algorithm(NnAlgorithm::BruteForce)
            .build();
        assert_eq!(hp.epsilon, 2.5);
        assert_eq!(hp.min_samples, 3);
        assert_eq!(hp.nn_algo, NnAlgorithm::BruteForce);
    }

    #[test]
    fn min_samples_clamped_to_left_bound() {
        let hp = DbscanHyperParams::builder().min_samples(0).build();
        assert_eq!(hp.min_samples, 1);
    }
}
