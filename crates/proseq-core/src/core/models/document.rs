use super::chain::ChainSequence;
use std::collections::BTreeMap;

/// Residue sequences of every chain found in a structure file.
///
/// Chains are keyed by identifier and iterate in character-code order. Every chain's
/// records are sorted ascending by sequence number. Built once by
/// [`DocumentBuilder`](super::builder::DocumentBuilder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) chains: BTreeMap<char, ChainSequence>,
}

impl Document {
    pub fn chain(&self, id: char) -> Option<&ChainSequence> {
        self.chains.get(&id)
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = char> + '_ {
        self.chains.keys().copied()
    }

    /// All residue names, chain by chain in chain-identifier order.
    pub fn residue_names(&self) -> impl Iterator<Item = &str> {
        self.chains.values().flat_map(|c| c.residue_names())
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn residue_count(&self) -> usize {
        self.chains.values().map(ChainSequence::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.residue_count() == 0
    }
}
