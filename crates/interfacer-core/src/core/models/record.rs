use crate::core::utils::identifiers;

/// One atom whose solvent accessibility changed between its isolated chain and the complex.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaAtomRecord {
    pub chain_id: char,
    /// Kept verbatim so insertion codes such as `52A` survive.
    pub residue_number: String,
    /// Upper-cased three-letter code. May be non-standard.
    pub residue_type: String,
    /// Monomer area minus complex area. Negative values are kept.
    pub delta_area: f64,
}

/// Identifies one interface residue. Atoms sharing a key count as one residue
/// even if they disagree on residue type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceResidueKey {
    pub chain_id: char,
    pub residue_number: String,
}

impl DeltaAtomRecord {
    pub fn new(
        chain_id: char,
        residue_number: impl Into<String>,
        residue_type: &str,
        delta_area: f64,
    ) -> Self {
        Self {
            chain_id,
            residue_number: residue_number.into(),
            residue_type: residue_type.trim().to_ascii_uppercase(),
            delta_area,
        }
    }

    pub fn from_areas(
        chain_id: char,
        residue_number: impl Into<String>,
        residue_type: &str,
        monomer_area: f64,
        complex_area: f64,
    ) -> Self {
        Self::new(
            chain_id,
            residue_number,
            residue_type,
            monomer_area - complex_area,
        )
    }

    pub fn residue_key(&self) -> InterfaceResidueKey {
        InterfaceResidueKey {
            chain_id: self.chain_id,
            residue_number: self.residue_number.clone(),
        }
    }

    pub fn is_nonpolar(&self) -> bool {
        identifiers::is_nonpolar_residue(&self.residue_type)
    }
}
