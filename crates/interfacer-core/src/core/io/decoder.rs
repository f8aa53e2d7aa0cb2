use crate::core::models::record::DeltaAtomRecord;
use std::io::{self, BufRead};

/// Result of decoding a single line of an accessibility file.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Record(T),
    /// Not a data line (header, remark, blank).
    Skip,
    /// Starts with the record marker but its fields could not be read.
    Malformed,
}

/// Turns one whitespace-tokenized text line into a typed record.
pub trait LineDecoder {
    type Record;

    fn decode(&self, line: &str) -> Decoded<Self::Record>;
}

/// Decodes `ATOM` lines of per-chain delta files:
/// `ATOM <serial> <name> <resname> <chain> <resnum> ... <monomer asa> <complex asa>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaLineDecoder;

impl DeltaLineDecoder {
    pub const MARKER: &'static str = "ATOM";

    const RESIDUE_TYPE_FIELD: usize = 3;
    const CHAIN_FIELD: usize = 4;
    const RESIDUE_NUMBER_FIELD: usize = 5;
    // marker, serial, atom name, residue type, chain, residue number, two areas
    const MIN_FIELDS: usize = 8;
}

impl LineDecoder for DeltaLineDecoder {
    type Record = DeltaAtomRecord;

    fn decode(&self, line: &str) -> Decoded<DeltaAtomRecord> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() != Some(&Self::MARKER) {
            return Decoded::Skip;
        }
        if fields.len() < Self::MIN_FIELDS {
            return Decoded::Malformed;
        }

        let n = fields.len();
        let (Ok(monomer_area), Ok(complex_area)) =
            (fields[n - 2].parse::<f64>(), fields[n - 1].parse::<f64>())
        else {
            return Decoded::Malformed;
        };

        let mut chain_chars = fields[Self::CHAIN_FIELD].chars();
        let (Some(chain_id), None) = (chain_chars.next(), chain_chars.next()) else {
            return Decoded::Malformed;
        };

        Decoded::Record(DeltaAtomRecord::from_areas(
            chain_id,
            fields[Self::RESIDUE_NUMBER_FIELD],
            fields[Self::RESIDUE_TYPE_FIELD],
            monomer_area,
            complex_area,
        ))
    }
}

/// Decodes `RES` lines of per-residue accessibility files: `RES <resname> <chain> <resnum> ...`.
/// Yields the upper-cased residue code; classification is left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidueLineDecoder;

impl ResidueLineDecoder {
    pub const MARKER: &'static str = "RES";

    const RESIDUE_TYPE_FIELD: usize = 1;
}

impl LineDecoder for ResidueLineDecoder {
    type Record = String;

    fn decode(&self, line: &str) -> Decoded<String> {
        let mut fields = line.split_whitespace();
        if fields.next() != Some(Self::MARKER) {
            return Decoded::Skip;
        }
        match fields.nth(Self::RESIDUE_TYPE_FIELD - 1) {
            Some(code) => Decoded::Record(code.to_ascii_uppercase()),
            None => Decoded::Malformed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome<T> {
    pub records: Vec<T>,
    pub skipped: usize,
    pub malformed: usize,
}

impl<T> Default for ScanOutcome<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
            malformed: 0,
        }
    }
}

/// Decodes every line of `reader`, keeping records and tallying everything else.
///
/// Bytes that are not valid UTF-8 are replaced before decoding, so a stray byte only
/// affects the line it sits on.
pub fn scan<D: LineDecoder>(
    mut reader: impl BufRead,
    decoder: &D,
) -> io::Result<ScanOutcome<D::Record>> {
    let mut outcome = ScanOutcome::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        match decoder.decode(line.trim_end_matches(['\n', '\r'])) {
            Decoded::Record(record) => outcome.records.push(record),
            Decoded::Skip => outcome.skipped += 1,
            Decoded::Malformed => outcome.malformed += 1,
        }
    }
    Ok(outcome)
}
