use super::chain::ChainSequence;
use super::document::Document;
use super::residue::ResidueRecord;
use std::collections::BTreeMap;

/// Incrementally collects residue records and produces a sorted [`Document`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    chains: BTreeMap<char, ChainSequence>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a residue for `chain_id`, keeping only the first record seen for each
    /// sequence number of that chain.
    ///
    /// Returns `true` if the record was accepted.
    pub fn add_residue(&mut self, chain_id: char, sequence_number: isize, name: &str) -> bool {
        self.chains
            .entry(chain_id)
            .or_insert_with(|| ChainSequence::new(chain_id))
            .insert(ResidueRecord::new(sequence_number, name))
    }

    pub fn build(mut self) -> Document {
        for chain in self.chains.values_mut() {
            chain.sort_by_sequence_number();
        }
        Document {
            chains: self.chains,
        }
    }
}
