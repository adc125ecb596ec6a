use num_traits::Float;

/// Sample standard deviation (n - 1 denominator) of each feature column.
/// Returns zeros for tables with fewer than two rows.
pub(crate) fn column_sample_stds<T: Float>(data: &[Vec<T>]) -> Vec<T> {
    let n_rows = data.len();
    let n_dims = data[0].len();
    if n_rows < 2 {
        return vec![T::zero(); n_dims];
    }
    let n = T::from(n_rows).unwrap_or_else(T::one);
    let means = column_means(data);
    (0..n_dims)
        .map(|dim| {
            let sum_sq = data
                .iter()
                .map(|row| (row[dim] - means[dim]) * (row[dim] - means[dim]))
                .fold(T::zero(), std::ops::Add::add);
            (sum_sq / (n - T::one())).sqrt()
        })
        .collect()
}

/// The mean of the per-column sample standard deviations. This is the natural
/// distance scale of unstandardized data and drives the epsilon scan range.
pub(crate) fn mean_sample_std<T: Float>(data: &[Vec<T>]) -> T {
    let stds = column_sample_stds(data);
    let n_dims = T::from(stds.len()).unwrap_or_else(T::one);
    stds.into_iter().fold(T::zero(), std::ops::Add::add) / n_dims
}

/// Rescales each feature column to zero mean and unit variance, so that all
/// features contribute comparably to Euclidean distances. Uses the population
/// variance (n denominator), matching the usual standard scaler. Columns with
/// zero variance are centred but left unscaled.
pub(crate) fn standardize<T: Float>(data: &[Vec<T>]) -> Vec<Vec<T>> {
    let n_dims = data[0].len();
    let n = T::from(data.len()).unwrap_or_else(T::one);
    let means = column_means(data);
    let scales: Vec<T> = (0..n_dims)
        .map(|dim| {
            let sum_sq = data
                .iter()
                .map(|row| (row[dim] - means[dim]) * (row[dim] - means[dim]))
                .fold(T::zero(), std::ops::Add::add);
            let std = (sum_sq / n).sqrt();
            if std > T::zero() {
                std
            } else {
                T::one()
            }
        })
        .collect();

    data.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(dim, &value)| (value - means[dim]) / scales[dim])
                .collect()
        })
        .collect()
}

fn column_means<T: Float>(data: &[Vec<T>]) -> Vec<T> {
    let n_dims = data[0].len();
    let n = T::from(data.len()).unwrap_or_else(T::one);
    (0..n_dims)
        .map(|dim| {
            data.iter()
                .map(|row| row[dim])
                .fold(T::zero(), std::ops::Add::add)
                / n
        })
        .collect()
}
