use crate::pitch::Pitch;
use std::collections::BTreeMap;

/// Aggregate statistics for one cluster of pitches. The noise group, if any,
/// carries the label -1.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    pub label: i32,
    pub count: usize,
    /// The element-wise mean of all pitches in the cluster. Not guaranteed to
    /// be an observed pitch.
    pub mean: Pitch,
}

/// Computes per-cluster counts and mean measurements, ordered by label, with
/// the noise group (-1) first when present. This is the deterministic half of
/// the per-cluster summary view a dashboard renders next to the scatterplots.
pub fn summarise(table: &[Pitch], labels: &[i32]) -> Vec<ClusterSummary> {
    assert_eq!(table.len(), labels.len());
    let mut groups: BTreeMap<i32, Vec<&Pitch>> = BTreeMap::new();
    for (pitch, &label) in table.iter().zip(labels) {
        groups.entry(label).or_default().push(pitch);
    }

    groups
        .into_iter()
        .map(|(label, pitches)| {
            let count = pitches.len();
            let n = count as f64;
            let mean = Pitch::new(
                pitches.iter().map(|p| p.velocity).sum::<f64>() / n,
                pitches.iter().map(|p| p.spin_rate).sum::<f64>() / n,
                pitches.iter().map(|p| p.horz_break).sum::<f64>() / n,
                pitches.iter().map(|p| p.vert_break).sum::<f64>() / n,
            );
            ClusterSummary { label, count, mean }
        })
        .collect()
}
