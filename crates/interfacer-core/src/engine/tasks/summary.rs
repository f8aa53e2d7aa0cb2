use crate::core::models::record::DeltaAtomRecord;
use crate::core::models::report::InterfaceSummary;
use crate::core::utils::round_to;
use std::collections::HashSet;

const FRACTION_BURIED: f64 = 1.0;

/// Aggregates delta records into structure-level metrics.
///
/// `propensity_score` is passed through from the propensity scorer untouched.
pub fn run(records: &[DeltaAtomRecord], propensity_score: f64) -> InterfaceSummary {
    let total_atoms = records.len();
    let total_residues = records
        .iter()
        .map(|r| r.residue_key())
        .collect::<HashSet<_>>()
        .len();

    let raw_area: f64 = records.iter().map(|r| r.delta_area).sum();
    let total_area = round_to(raw_area, 2);
    let local_density = if total_area == 0.0 {
        0.0
    } else {
        round_to(total_atoms as f64 / total_area, 3)
    };

    let (nonpolar_atoms, nonpolar_area) = records
        .iter()
        .filter(|r| r.is_nonpolar())
        .fold((0usize, 0.0f64), |(n, area), r| (n + 1, area + r.delta_area));
    let fraction_nonpolar = if total_atoms == 0 {
        0.0
    } else {
        round_to(nonpolar_atoms as f64 / total_atoms as f64, 3)
    };

    InterfaceSummary {
        total_atoms,
        total_residues,
        total_area,
        local_density,
        propensity_score,
        fraction_buried: FRACTION_BURIED,
        fraction_nonpolar,
        nonpolar_area: round_to(nonpolar_area, 2),
    }
}
