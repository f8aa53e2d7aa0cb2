use super::residue::AminoAcid;

/// Surface occurrence frequency of each standard amino acid.
///
/// Frequencies sum to 1.0 when the table was built from at least one observation and
/// are all zero otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundFrequencyTable {
    frequencies: [f64; AminoAcid::COUNT],
}

impl Default for BackgroundFrequencyTable {
    fn default() -> Self {
        Self {
            frequencies: [0.0; AminoAcid::COUNT],
        }
    }
}

impl BackgroundFrequencyTable {
    /// Builds a table from per-residue observation counts indexed by [`AminoAcid::index`].
    pub fn from_counts(counts: &[usize; AminoAcid::COUNT]) -> Self {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Self::default();
        }
        let mut frequencies = [0.0; AminoAcid::COUNT];
        for (freq, &count) in frequencies.iter_mut().zip(counts) {
            *freq = count as f64 / total as f64;
        }
        Self { frequencies }
    }

    /// Builds a table from explicit frequencies. Residues not listed stay at zero.
    pub fn from_frequencies(entries: impl IntoIterator<Item = (AminoAcid, f64)>) -> Self {
        let mut table = Self::default();
        for (residue, frequency) in entries {
            table.frequencies[residue.index()] = frequency;
        }
        table
    }

    pub fn frequency(&self, residue: AminoAcid) -> f64 {
        self.frequencies[residue.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, f64)> + '_ {
        AminoAcid::ALL
            .iter()
            .map(move |&residue| (residue, self.frequencies[residue.index()]))
    }

    pub fn total(&self) -> f64 {
        self.frequencies.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.iter().all(|&f| f == 0.0)
    }
}
