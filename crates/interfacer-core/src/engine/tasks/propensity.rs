use crate::core::models::background::BackgroundFrequencyTable;
use crate::core::models::record::DeltaAtomRecord;
use crate::core::models::report::PropensityEntry;
use crate::core::models::residue::AminoAcid;
use crate::core::utils::round_to;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct PropensityScores {
    /// All twenty amino acids, highest ratio first.
    pub entries: Vec<PropensityEntry>,
    /// Sum of `max(0, ln(ratio) * count)` over residue types, rounded to 3 decimals.
    pub composite: f64,
}

/// Scores interface enrichment of each amino acid against `background`.
///
/// Residue types absent from either side get a ratio of 0.0 and contribute nothing.
/// Depleted types (ratio below 1) are floored at zero rather than lowering the composite.
pub fn run(records: &[DeltaAtomRecord], background: &BackgroundFrequencyTable) -> PropensityScores {
    let mut counts = [0usize; AminoAcid::COUNT];
    for record in records {
        if let Some(residue) = AminoAcid::from_code(&record.residue_type) {
            counts[residue.index()] += 1;
        }
    }
    let total = records.len();

    let mut composite = 0.0;
    let mut entries: Vec<PropensityEntry> = AminoAcid::ALL
        .iter()
        .map(|&residue| {
            let interface_count = counts[residue.index()];
            let interface_frequency = if total == 0 {
                0.0
            } else {
                interface_count as f64 / total as f64
            };
            let background_frequency = background.frequency(residue);

            let ratio = if interface_frequency == 0.0 || background_frequency == 0.0 {
                0.0
            } else {
                let ratio = interface_frequency / background_frequency;
                composite += (ratio.ln() * interface_count as f64).max(0.0);
                ratio
            };

            PropensityEntry {
                residue,
                interface_count,
                interface_frequency,
                background_frequency,
                ratio: round_to(ratio, 3),
            }
        })
        .collect();

    // Stable: ties keep the fixed amino acid order.
    entries.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));

    PropensityScores {
        entries,
        composite: round_to(composite, 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records_of(residues: &[(&str, usize)]) -> Vec<DeltaAtomRecord> {
        let mut records = Vec::new();
        let mut n = 0;
        for &(code, count) in residues {
            for _ in 0..count {
                n += 1;
                records.push(DeltaAtomRecord::new('A', n.to_string(), code, 1.0));
            }
        }
        records
    }

    fn entry(scores: &PropensityScores, residue: AminoAcid) -> &PropensityEntry {
        scores.entries.iter().find(|e| e.residue == residue).unwrap()
    }

    #[test]
    fn enrichment_ratio_is_interface_over_background_frequency() {
        let records = records_of(&[("ALA", 2), ("SER", 8)]);
        let background = BackgroundFrequencyTable::from_frequencies([
            (AminoAcid::Alanine, 0.1),
            (AminoAcid::Serine, 0.9),
        ]);
        let scores = run(&records, &background);
        assert_eq!(entry(&scores, AminoAcid::Alanine).ratio, 2.0);
        assert_eq!(entry(&scores, AminoAcid::Alanine).interface_count, 2);
        assert_eq!(entry(&scores, AminoAcid::Serine).ratio, 0.889);
    }

    #[test]
    fn composite_clamps_depleted_residues_to_zero() {
        let records = records_of(&[("ALA", 2), ("SER", 8)]);
        let background = BackgroundFrequencyTable::from_frequencies([
            (AminoAcid::Alanine, 0.1),
            (AminoAcid::Serine, 0.9),
        ]);
        let scores = run(&records, &background);
        // ln(2) * 2, serine's negative contribution is floored.
        assert_eq!(scores.composite, round_to(2.0f64.ln() * 2.0, 3));
        assert_eq!(scores.composite, 1.386);
    }

    #[test]
    fn always_reports_twenty_sorted_entries() {
        let records = records_of(&[("TRP", 1), ("GLY", 3)]);
        let background = BackgroundFrequencyTable::from_frequencies([
            (AminoAcid::Tryptophan, 0.05),
            (AminoAcid::Glycine, 0.25),
        ]);
        let scores = run(&records, &background);
        assert_eq!(scores.entries.len(), AminoAcid::COUNT);
        assert_eq!(scores.entries[0].residue, AminoAcid::Tryptophan);
        assert_eq!(scores.entries[0].ratio, 5.0);
        assert_eq!(scores.entries[1].residue, AminoAcid::Glycine);
        assert_eq!(scores.entries[1].ratio, 3.0);
        assert!(
            scores
                .entries
                .windows(2)
                .all(|pair| pair[0].ratio >= pair[1].ratio)
        );
    }

    #[test]
    fn ties_keep_fixed_amino_acid_order() {
        let records = records_of(&[("VAL", 1)]);
        let background = BackgroundFrequencyTable::from_frequencies([(AminoAcid::Valine, 0.5)]);
        let scores = run(&records, &background);
        assert_eq!(scores.entries[0].residue, AminoAcid::Valine);
        let rest: Vec<_> = scores.entries[1..].iter().map(|e| e.residue).collect();
        let expected: Vec<_> = AminoAcid::ALL
            .iter()
            .copied()
            .filter(|&aa| aa != AminoAcid::Valine)
            .collect();
        assert_eq!(rest, expected);
    }

    #[test]
    fn empty_background_zeroes_every_ratio() {
        let records = records_of(&[("ALA", 3), ("LYS", 1)]);
        let scores = run(&records, &BackgroundFrequencyTable::default());
        assert!(scores.entries.iter().all(|e| e.ratio == 0.0));
        assert_eq!(scores.composite, 0.0);
    }

    #[test]
    fn non_standard_residues_dilute_interface_frequency() {
        let records = records_of(&[("ALA", 1), ("HOH", 1)]);
        let background = BackgroundFrequencyTable::from_frequencies([(AminoAcid::Alanine, 0.25)]);
        let scores = run(&records, &background);
        let ala = entry(&scores, AminoAcid::Alanine);
        assert_eq!(ala.interface_frequency, 0.5);
        assert_eq!(ala.ratio, 2.0);
    }

    #[test]
    fn composite_is_never_negative() {
        let records = records_of(&[("ALA", 1), ("ARG", 1), ("ASN", 1)]);
        let background = BackgroundFrequencyTable::from_frequencies(
            AminoAcid::ALL.iter().map(|&aa| (aa, 0.05)),
        );
        let scores = run(&records, &background);
        assert!(scores.composite >= 0.0);
    }
}
