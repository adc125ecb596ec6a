use crate::distance::euclidean_distance;
use crate::DbscanHyperParams;
use num_traits::Float;

// Above this size a brute force scan per query becomes noticeably slower than
// a spatial index.
const BRUTE_FORCE_N_SAMPLES_LIMIT: usize = 500;

/// The nearest neighbour algorithm options used to answer region queries.
#[derive(Debug, Clone, PartialEq)]
pub enum NnAlgorithm {
    /// The algorithm is selected internally based on the size of the input data
    Auto,
    /// Scans every other point for each query
    BruteForce,
    /// K-dimensional tree algorithm.
    KdTree,
}

/// Answers epsilon-neighbourhood queries against a fixed dataset. The
/// neighbourhood of a point always includes the point itself.
pub(crate) struct RegionQuery<'a, T: Float> {
    data: &'a [Vec<T>],
    epsilon: T,
    backend: Backend<'a, T>,
}

enum Backend<'a, T: Float> {
    BruteForce,
    KdTree(kdtree::KdTree<T, usize, &'a Vec<T>>),
}

impl<'a, T: Float> RegionQuery<'a, T> {
    pub(crate) fn new(data: &'a [Vec<T>], epsilon: T, hp: &DbscanHyperParams) -> Self {
        let backend = match (&hp.nn_algo, data.len()) {
            (NnAlgorithm::Auto, usize::MIN..=BRUTE_FORCE_N_SAMPLES_LIMIT) => Backend::BruteForce,
            (NnAlgorithm::Auto, _) => Backend::KdTree(Self::build_tree(data)),
            (NnAlgorithm::BruteForce, _) => Backend::BruteForce,
            (NnAlgorithm::KdTree, _) => Backend::KdTree(Self::build_tree(data)),
        };
        RegionQuery {
            data,
            epsilon,
            backend,
        }
    }

    /// All indices whose points lie within epsilon of the point at `idx`,
    /// including `idx` itself.
    pub(crate) fn neighbours_of(&self, idx: usize) -> Vec<usize> {
        match &self.backend {
            Backend::BruteForce => self.brute_force_neighbours(idx),
            Backend::KdTree(tree) => self.kd_tree_neighbours(tree, idx),
        }
    }

    fn brute_force_neighbours(&self, idx: usize) -> Vec<usize> {
        let point = &self.data[idx];
        self.data
            .iter()
            .enumerate()
            .filter(|(_n, other)| euclidean_distance(point, other) <= self.epsilon)
            .map(|(n, _other)| n)
            .collect()
    }

    fn kd_tree_neighbours(
        &self,
        tree: &kdtree::KdTree<T, usize, &'a Vec<T>>,
        idx: usize,
    ) -> Vec<usize> {
        let result = tree
            .within(&self.data[idx], self.epsilon, &euclidean_distance)
            .expect("Failed to find neighbours");
        result.into_iter().map(|(_dist, n)| *n).collect()
    }

    fn build_tree(data: &'a [Vec<T>]) -> kdtree::KdTree<T, usize, &'a Vec<T>> {
        let mut tree = kdtree::KdTree::new(data[0].len());
        data.iter()
            .enumerate()
            // Should be safe due to data validation before clustering
            .for_each(|(n, datapoint)| tree.add(datapoint, n).expect("Failed to add to KdTree"));
        tree
    }
}
