use phf::{Map, phf_map};

/// Symbol substituted for residue names absent from the code table.
pub const UNKNOWN_RESIDUE_CODE: char = 'X';

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLU" => 'E', "GLN" => 'Q', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

/// One-letter code of a standard residue name, or `None` if the name is not one of the
/// twenty standard amino acids. Lookup is exact and case-sensitive.
pub fn one_letter_code(residue_name: &str) -> Option<char> {
    THREE_TO_ONE.get(residue_name).copied()
}
