use super::residue::AminoAcid;

/// Structure-level interface metrics for one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSummary {
    pub total_atoms: usize,
    pub total_residues: usize,
    /// Buried area in Å², rounded to 2 decimals.
    pub total_area: f64,
    pub local_density: f64,
    pub propensity_score: f64,
    /// Always 1.0: every parsed atom is already an interface atom.
    pub fraction_buried: f64,
    pub fraction_nonpolar: f64,
    pub nonpolar_area: f64,
}

/// Interface enrichment of one amino acid relative to the background.
#[derive(Debug, Clone, PartialEq)]
pub struct PropensityEntry {
    pub residue: AminoAcid,
    pub interface_count: usize,
    pub interface_frequency: f64,
    pub background_frequency: f64,
    /// Enrichment ratio rounded to 3 decimals; 0.0 when either frequency is zero.
    pub ratio: f64,
}
