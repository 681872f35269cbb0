// data/store.rs
use crate::data::Table;
use crate::domain::apartment::{ApartmentRecord, CANONICAL_HEADERS};
use crate::domain::entry::NewEntry;
use crate::errors::DataError;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// The dashboard's view of `apartments_with_coordinates.csv`.
///
/// Reads always go back to disk. Within this process, loads share a read lock
/// and appends take the write lock; other processes writing the same file are
/// not coordinated.
pub struct ApartmentStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl ApartmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in file order. A missing file reads as empty so the first
    /// entry can be added from the dashboard.
    pub fn load(&self) -> Result<Vec<ApartmentRecord>, DataError> {
        let _guard = self
            .lock
            .read()
            .map_err(|_| DataError::Io("Store lock poisoned by an earlier failed write".into()))?;

        if !self.path.exists() {
            debug!("{} does not exist yet, treating as empty", self.path.display());
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.path)
            .map_err(|e| DataError::Io(format!("Failed to open {}: {e}", self.path.display())))?;
        read_records(file)
    }

    /// Appends one row, ordering the fields after the file's own header.
    ///
    /// A file without the Sankey columns (as written by `join`) first gets
    /// them added, with empty cells for the existing rows.
    pub fn append(&self, entry: &NewEntry) -> Result<(), DataError> {
        let _guard = self
            .lock
            .write()
            .map_err(|_| DataError::Io("Store lock poisoned by an earlier failed write".into()))?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| DataError::Io(format!("Failed to open {}: {e}", self.path.display())))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| DataError::Io(format!("Failed to read existing file: {e}")))?;

        if contents.trim().is_empty() {
            let header: Vec<String> = CANONICAL_HEADERS.iter().map(|h| h.to_string()).collect();
            write_rows(&mut file, &[header, entry.to_row(&CANONICAL_HEADERS)])?;
        } else {
            let mut table = Table::from_reader(contents.as_bytes())?;
            let missing: Vec<&str> = CANONICAL_HEADERS
                .into_iter()
                .filter(|h| table.column(h).is_none())
                .collect();

            if missing.is_empty() {
                if !contents.ends_with('\n') {
                    file.write_all(b"\n")
                        .map_err(|e| DataError::Io(format!("Failed to terminate last row: {e}")))?;
                }
                write_rows(&mut file, &[entry.to_row(&table.headers)])?;
            } else {
                drop(file);
                for column in &missing {
                    table.ensure_column(column);
                }
                table.rows.push(entry.to_row(&table.headers));
                table.write(&self.path)?;
                info!(
                    "Added columns {} to {}",
                    missing.join(", "),
                    self.path.display()
                );
            }
        }

        info!("Appended entry for '{}' to {}", entry.address, self.path.display());
        Ok(())
    }
}

fn write_rows(file: &mut std::fs::File, rows: &[Vec<String>]) -> Result<(), DataError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| DataError::Csv(format!("Failed to append row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| DataError::Io(format!("Failed to flush CSV: {e}")))
}

pub fn read_records<R: Read>(reader: R) -> Result<Vec<ApartmentRecord>, DataError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<ApartmentRecord>().enumerate() {
        let record = result
            .map_err(|e| DataError::Csv(format!("Failed to parse record {}: {e}", i + 1)))?;
        records.push(record);
    }
    Ok(records)
}
