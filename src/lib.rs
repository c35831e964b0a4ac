#![recursion_limit = "1024"]
use std::collections::{BTreeMap, HashMap};
use std::path;

use log::debug;

use crate::errors::*;

pub mod args;

pub mod errors {
    error_chain::error_chain! {}
}

/// Column names from the first line of the file, in file order.
pub type Header = Vec<String>;

/// One parsed data row, cells keyed by column name.
///
/// Rows shorter than the header simply omit the trailing keys; cells
/// beyond the header end up in `extra`, in file order. Records are
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub cells: HashMap<String, String>,
    pub extra: Vec<String>,
}

impl Record {
    fn from_row(header: &[String], row: &csv::StringRecord) -> Record {
        let mut cells = HashMap::new();
        let mut extra = Vec::new();

        for (i, cell) in row.iter().enumerate() {
            match header.get(i) {
                Some(name) => {
                    cells.insert(name.clone(), cell.to_owned());
                }
                None => extra.push(cell.to_owned()),
            }
        }

        Record { cells, extra }
    }
}

/// Everything read from one file: the header plus the stored data rows.
///
/// Rows are keyed by 1-based ordinal; the header line takes ordinal 0
/// and is never stored as a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub header: Header,
    pub records: BTreeMap<u64, Record>,
}

impl Scan {
    /// Number of stored data rows. A header-only file counts 0.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn column_names(&self) -> String {
        self.header.join(", ")
    }
}

pub struct Tally<'a> {
    pub path: &'a path::Path,
    delimiter: u8,
}

impl Tally<'_> {
    pub fn open(path: &path::Path, delimiter: char) -> Result<Tally> {
        if !delimiter.is_ascii() {
            error_chain::bail!("Delimiter '{}' is not a single ASCII character", delimiter)
        }
        if path.is_file() {
            Ok(Tally {
                path,
                delimiter: delimiter as u8,
            })
        } else {
            error_chain::bail!("Can't find input file {}", path.to_string_lossy())
        }
    }

    /// Read the whole file: header first, then each data row into a
    /// `Record` under the next 1-based ordinal. Any I/O or parse error
    /// surfaces; nothing is recovered here.
    pub fn scan(&self) -> Result<Scan> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(self.path)
            .chain_err(|| format!("Cannot open {}", self.path.to_string_lossy()))?;

        let header: Header = rdr
            .headers()
            .chain_err(|| "Can't get headers?")?
            .iter()
            .map(str::to_owned)
            .collect();

        let mut records = BTreeMap::new();
        let mut raw_record = csv::StringRecord::new();
        let mut line_count: u64 = 0;

        while rdr
            .read_record(&mut raw_record)
            .chain_err(|| "Csv not well formed")?
        {
            line_count += 1;
            let record = Record::from_row(&header, &raw_record);
            debug!(
                "row {}: {} cells, {} extra",
                line_count,
                record.cells.len(),
                record.extra.len()
            );
            records.insert(line_count, record);
        }

        Ok(Scan { header, records })
    }
}
