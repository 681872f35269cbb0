// data/table.rs
use crate::errors::DataError;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

/// A CSV file held as strings and addressed by header name. Columns the
/// pipeline doesn't know about are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn read(path: &Path) -> Result<Self, DataError> {
        let file = std::fs::File::open(path)
            .map_err(|e| DataError::Io(format!("Failed to open {}: {e}", path.display())))?;
        Self::from_reader(file)
    }

    /// Short rows are padded with empty cells. A row with more cells than the
    /// header is an error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DataError::Csv(format!("Failed to read headers: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record =
                result.map_err(|e| DataError::Csv(format!("Failed to parse row {}: {e}", i + 1)))?;
            if record.len() > headers.len() {
                return Err(DataError::Csv(format!(
                    "Row {} has {} fields, header has {}",
                    i + 1,
                    record.len(),
                    headers.len()
                )));
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn write(&self, path: &Path) -> Result<(), DataError> {
        let file = std::fs::File::create(path)
            .map_err(|e| DataError::Io(format!("Failed to create {}: {e}", path.display())))?;
        self.to_writer(file)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), DataError> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer
            .write_record(&self.headers)
            .map_err(|e| DataError::Csv(format!("Failed to write headers: {e}")))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| DataError::Csv(format!("Failed to write row: {e}")))?;
        }
        writer
            .flush()
            .map_err(|e| DataError::Io(format!("Failed to flush CSV: {e}")))?;
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize, DataError> {
        self.column(name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// Index of `name`, appending it as an empty column when absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(i) = self.column(name) {
            return i;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Keeps the first row for each distinct value of `column`, preserving order.
    pub fn dedup_by(&self, column: &str) -> Result<Table, DataError> {
        let idx = self.require_column(column)?;
        let mut seen = HashSet::new();
        let rows = self
            .rows
            .iter()
            .filter(|row| seen.insert(row[idx].as_str()))
            .cloned()
            .collect();

        Ok(Table {
            headers: self.headers.clone(),
            rows,
        })
    }
}
