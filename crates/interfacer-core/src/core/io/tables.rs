use crate::core::models::background::BackgroundFrequencyTable;
use crate::core::models::report::{InterfaceSummary, PropensityEntry};
use crate::core::models::residue::AminoAcid;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unknown residue code '{0}' in frequency table")]
    UnknownResidue(String),
    #[error("Duplicate residue '{0}' in frequency table")]
    DuplicateResidue(AminoAcid),
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MetricValue {
    Count(usize),
    Decimal(f64),
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "Property")]
    property: &'static str,
    #[serde(rename = "Value")]
    value: MetricValue,
    #[serde(rename = "Notes")]
    notes: &'static str,
}

#[derive(Debug, Serialize)]
struct PropensityRow {
    #[serde(rename = "Residue")]
    residue: &'static str,
    #[serde(rename = "Propensity")]
    propensity: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct FrequencyRow {
    #[serde(rename = "Residue")]
    residue: String,
    #[serde(rename = "Frequency")]
    frequency: f64,
}

fn summary_rows(summary: &InterfaceSummary) -> [SummaryRow; 8] {
    use MetricValue::{Count, Decimal};
    [
        SummaryRow {
            property: "Total Interface Atoms",
            value: Count(summary.total_atoms),
            notes: "Atoms with a recorded ΔASA",
        },
        SummaryRow {
            property: "Total Interface Residues",
            value: Count(summary.total_residues),
            notes: "Distinct (chain, residue number) pairs",
        },
        SummaryRow {
            property: "Total Interface Area",
            value: Decimal(summary.total_area),
            notes: "ΔASA sum (Å²)",
        },
        SummaryRow {
            property: "Local Atomic Density",
            value: Decimal(summary.local_density),
            notes: "atoms / area",
        },
        SummaryRow {
            property: "Residue Propensity Score",
            value: Decimal(summary.propensity_score),
            notes: "Sum of count-weighted ln(propensity), floored at 0 per residue",
        },
        SummaryRow {
            property: "Fraction of Buried Atoms",
            value: Decimal(summary.fraction_buried),
            notes: "ΔASA atoms / total atoms",
        },
        SummaryRow {
            property: "Fraction of Non-Polar Atoms",
            value: Decimal(summary.fraction_nonpolar),
            notes: "Use residue types",
        },
        SummaryRow {
            property: "Non-Polar Interface Area",
            value: Decimal(summary.nonpolar_area),
            notes: "ΔASA only for non-polar residues",
        },
    ]
}

/// Writes the `Property,Value,Notes` summary table.
pub fn write_summary(summary: &InterfaceSummary, writer: impl Write) -> Result<(), TableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in summary_rows(summary) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the `Residue,Propensity` table in the order given.
pub fn write_propensities(
    entries: &[PropensityEntry],
    writer: impl Write,
) -> Result<(), TableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer.serialize(PropensityRow {
            residue: entry.residue.code(),
            propensity: entry.ratio,
        })?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the `Residue,Frequency` background table, one row per standard amino acid.
pub fn write_background(
    table: &BackgroundFrequencyTable,
    writer: impl Write,
) -> Result<(), TableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (residue, frequency) in table.iter() {
        csv_writer.serialize(FrequencyRow {
            residue: residue.code().to_string(),
            frequency,
        })?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Reads a table written by [`write_background`]. Missing residues read as zero.
pub fn read_background(reader: impl Read) -> Result<BackgroundFrequencyTable, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut seen = [false; AminoAcid::COUNT];
    let mut entries = Vec::with_capacity(AminoAcid::COUNT);
    for result in csv_reader.deserialize::<FrequencyRow>() {
        let row = result?;
        let residue = AminoAcid::from_code(&row.residue)
            .ok_or_else(|| TableError::UnknownResidue(row.residue.clone()))?;
        if std::mem::replace(&mut seen[residue.index()], true) {
            return Err(TableError::DuplicateResidue(residue));
        }
        entries.push((residue, row.frequency));
    }
    Ok(BackgroundFrequencyTable::from_frequencies(entries))
}
