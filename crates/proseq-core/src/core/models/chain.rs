use super::residue::ResidueRecord;
use std::collections::HashSet;

/// The ordered residue records of a single chain.
///
/// A chain accepts at most one record per sequence number. The first record offered for a
/// sequence number wins and later ones are ignored, which collapses the many atom lines of
/// one residue into a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSequence {
    pub id: char,                           // Chain identifier (e.g., 'A', 'B')
    pub(crate) records: Vec<ResidueRecord>, // Accepted records, in insertion order until sorted
    seen: HashSet<isize>,                   // Sequence numbers already accepted
}

impl ChainSequence {
    pub(crate) fn new(id: char) -> Self {
        Self {
            id,
            records: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Accepts `record` unless its sequence number is already present.
    ///
    /// Returns `true` if the record was added.
    pub(crate) fn insert(&mut self, record: ResidueRecord) -> bool {
        if !self.seen.insert(record.sequence_number) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub(crate) fn sort_by_sequence_number(&mut self) {
        // Stable sort; ties are impossible since sequence numbers are unique.
        self.records.sort_by_key(|r| r.sequence_number);
    }

    pub fn records(&self) -> &[ResidueRecord] {
        &self.records
    }

    pub fn residue_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
