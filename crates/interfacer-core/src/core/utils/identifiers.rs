use crate::core::models::residue::AminoAcid;
use phf::{Map, Set, phf_map, phf_set};

static NONPOLAR_RESIDUE_CODES: Set<&'static str> = phf_set! {
    "ALA", "VAL", "LEU", "ILE", "MET", "PHE", "TRP", "PRO", "GLY",
};

static STANDARD_AMINO_ACIDS: Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Alanine,
    "ARG" => AminoAcid::Arginine,
    "ASN" => AminoAcid::Asparagine,
    "ASP" => AminoAcid::AsparticAcid,
    "CYS" => AminoAcid::Cysteine,
    "GLN" => AminoAcid::Glutamine,
    "GLU" => AminoAcid::GlutamicAcid,
    "GLY" => AminoAcid::Glycine,
    "HIS" => AminoAcid::Histidine,
    "ILE" => AminoAcid::Isoleucine,
    "LEU" => AminoAcid::Leucine,
    "LYS" => AminoAcid::Lysine,
    "MET" => AminoAcid::Methionine,
    "PHE" => AminoAcid::Phenylalanine,
    "PRO" => AminoAcid::Proline,
    "SER" => AminoAcid::Serine,
    "THR" => AminoAcid::Threonine,
    "TRP" => AminoAcid::Tryptophan,
    "TYR" => AminoAcid::Tyrosine,
    "VAL" => AminoAcid::Valine,
};

/// Non-standard codes (ligands, modified residues, water) are never non-polar.
pub fn is_nonpolar_residue(residue_code: &str) -> bool {
    NONPOLAR_RESIDUE_CODES.contains(residue_code.trim().to_ascii_uppercase().as_str())
}

pub fn standard_amino_acid(residue_code: &str) -> Option<AminoAcid> {
    STANDARD_AMINO_ACIDS
        .get(residue_code.trim().to_ascii_uppercase().as_str())
        .copied()
}
