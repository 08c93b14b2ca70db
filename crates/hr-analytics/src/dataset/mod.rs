//! Seeding the employee store from the HR attrition CSV export.

mod parser;

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::workforce::{EmployeeRecord, EmployeeRepository, RepositoryError};

#[derive(Debug)]
pub enum DatasetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Store(RepositoryError),
}

impl std::fmt::Display for DatasetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetImportError::Io(err) => write!(f, "failed to read employee dataset: {}", err),
            DatasetImportError::Csv(err) => write!(f, "invalid employee CSV data: {}", err),
            DatasetImportError::Store(err) => {
                write!(f, "could not load employees into the store: {}", err)
            }
        }
    }
}

impl std::error::Error for DatasetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetImportError::Io(err) => Some(err),
            DatasetImportError::Csv(err) => Some(err),
            DatasetImportError::Store(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DatasetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DatasetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<RepositoryError> for DatasetImportError {
    fn from(err: RepositoryError) -> Self {
        Self::Store(err)
    }
}

/// Outcome of loading a batch of records into a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

pub struct EmployeeDatasetImporter;

impl EmployeeDatasetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<EmployeeRecord>, DatasetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a CSV export, keeping the first row for any repeated id.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<EmployeeRecord>, DatasetImportError> {
        let mut seen = BTreeSet::new();
        let mut records = Vec::new();

        for record in parser::parse_records(reader)? {
            if !seen.insert(record.id) {
                warn!(employee_id = %record.id, "duplicate employee id in dataset, row skipped");
                continue;
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Insert `records` into `repository`. Ids already present in the store are skipped.
    pub fn seed<R>(
        repository: &R,
        records: Vec<EmployeeRecord>,
    ) -> Result<ImportSummary, DatasetImportError>
    where
        R: EmployeeRepository + ?Sized,
    {
        let mut summary = ImportSummary::default();
        for record in records {
            let id = record.id;
            match repository.insert(record) {
                Ok(_) => summary.imported += 1,
                Err(RepositoryError::Conflict) => {
                    warn!(employee_id = %id, "employee already stored, row skipped");
                    summary.skipped += 1;
                }
                Err(other) => return Err(other.into()),
            }
        }

        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "employee dataset loaded"
        );
        Ok(summary)
    }
}
