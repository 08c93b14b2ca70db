use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{Department, EmployeeId, EmployeeRecord};

/// Narrow mutation channels for HR-assigned fields. Records are never bulk-edited.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Score(f64),
    EvaluationNote(f64),
    Comment(String),
}

impl FieldUpdate {
    pub const fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Score(_) => "score",
            FieldUpdate::EvaluationNote(_) => "evaluation_note",
            FieldUpdate::Comment(_) => "comment",
        }
    }

    fn apply(self, record: &mut EmployeeRecord) {
        match self {
            FieldUpdate::Score(score) => record.score = score,
            FieldUpdate::EvaluationNote(note) => record.evaluation_note = Some(note),
            FieldUpdate::Comment(comment) => record.comment = Some(comment),
        }
    }
}

/// Storage abstraction so the service can be exercised against any backend.
///
/// Implementations must apply `insert` and `update` atomically per row: either the whole
/// change is visible afterwards or none of it is.
pub trait EmployeeRepository: Send + Sync {
    fn insert(&self, record: EmployeeRecord) -> Result<EmployeeRecord, RepositoryError>;
    fn fetch(&self, id: EmployeeId) -> Result<Option<EmployeeRecord>, RepositoryError>;
    /// Full scan ordered by id.
    fn all(&self) -> Result<Vec<EmployeeRecord>, RepositoryError>;
    fn update(&self, id: EmployeeId, change: FieldUpdate)
        -> Result<EmployeeRecord, RepositoryError>;

    fn by_department(&self, department: Department) -> Result<Vec<EmployeeRecord>, RepositoryError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|record| record.works_in(department))
            .collect())
    }

    fn ids(&self) -> Result<Vec<EmployeeId>, RepositoryError> {
        Ok(self.all()?.into_iter().map(|record| record.id).collect())
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local store keyed by employee id.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeStore {
    records: Arc<Mutex<BTreeMap<EmployeeId, EmployeeRecord>>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<EmployeeId, EmployeeRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("employee store lock poisoned".to_string()))
    }
}

impl EmployeeRepository for InMemoryEmployeeStore {
    fn insert(&self, record: EmployeeRecord) -> Result<EmployeeRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: EmployeeId) -> Result<Option<EmployeeRecord>, RepositoryError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<EmployeeRecord>, RepositoryError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn update(
        &self,
        id: EmployeeId,
        change: FieldUpdate,
    ) -> Result<EmployeeRecord, RepositoryError> {
        let mut guard = self.lock()?;
        let record = guard.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        change.apply(record);
        Ok(record.clone())
    }

    fn ids(&self) -> Result<Vec<EmployeeId>, RepositoryError> {
        Ok(self.lock()?.keys().copied().collect())
    }
}
