use crate::pitch::{drop_incomplete, Pitch, PitchRecord};

/// A source of pitch tracking records for a given pitcher. Implementations
/// wrap whatever backing store holds the data (a file, a relational database);
/// the clustering core only ever sees the records they yield.
pub trait PitchSource {
    /// Returns all tracked pitches thrown by the named pitcher, in source
    /// order. May contain records with missing measurements.
    fn pitches(&self, pitcher: &str) -> Vec<PitchRecord>;
}

/// Retrieves a pitcher's records from the source and drops any with missing
/// measurements, yielding a table ready for clustering.
pub fn load_table<S: PitchSource>(source: &S, pitcher: &str) -> Vec<Pitch> {
    drop_incomplete(&source.pitches(pitcher))
}
