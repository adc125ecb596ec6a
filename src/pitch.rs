/// A single pitch as read from an external tracking source. Any of the four
/// measurements may be missing, which is common in raw tracking exports.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PitchRecord {
    pub velocity: Option<f64>,
    pub spin_rate: Option<f64>,
    pub horz_break: Option<f64>,
    pub vert_break: Option<f64>,
}

impl PitchRecord {
    /// Returns the validated pitch if all four measurements are present.
    pub fn complete(&self) -> Option<Pitch> {
        Some(Pitch {
            velocity: self.velocity?,
            spin_rate: self.spin_rate?,
            horz_break: self.horz_break?,
            vert_break: self.vert_break?,
        })
    }
}

/// A fully-measured pitch. All clustering operates on these four features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch {
    /// Release velocity, mph.
    pub velocity: f64,
    /// Spin rate, rpm.
    pub spin_rate: f64,
    /// Horizontal break, inches.
    pub horz_break: f64,
    /// Vertical break, inches.
    pub vert_break: f64,
}

impl Pitch {
    pub fn new(velocity: f64, spin_rate: f64, horz_break: f64, vert_break: f64) -> Self {
        Pitch {
            velocity,
            spin_rate,
            horz_break,
            vert_break,
        }
    }

    pub(crate) fn features(&self) -> Vec<f64> {
        vec![self.velocity, self.spin_rate, self.horz_break, self.vert_break]
    }
}

/// Drops records with any missing measurement, preserving the order of the
/// rows that remain. Row identity is positional, so callers that need to map
/// labels back to an external identifier must re-derive that correspondence
/// against the filtered table.
pub fn drop_incomplete(records: &[PitchRecord]) -> Vec<Pitch> {
    records.iter().filter_map(PitchRecord::complete).collect()
}
