/// One residue of a chain, collapsed from all atom records that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueRecord {
    pub sequence_number: isize, // Residue sequence number from source file
    pub name: String,           // Three-letter residue name (e.g., "ALA", "GLY")
}

impl ResidueRecord {
    pub fn new(sequence_number: isize, name: &str) -> Self {
        Self {
            sequence_number,
            name: name.to_string(),
        }
    }
}
