use std::sync::Arc;

use tracing::{info, warn};

use super::admission::{admit, AdmissionError, RawEmployeeFields};
use super::analytics::{
    age_pyramid, aggregate, performance_by_department, project, score_risk, AgeBracket,
    DepartmentPerformance, DepartmentViewRow, EmptyDatasetError, Interventions, RiskAssessment,
    RiskInput, SimulationError, WhatIfProjection, WorkforceStats,
};
use super::domain::{evaluation_note_in_range, Department, EmployeeId, EmployeeRecord};
use super::repository::{EmployeeRepository, FieldUpdate, RepositoryError};

/// Read and write operations over the employee store, composed with the pure analytics.
pub struct WorkforceService<R> {
    repository: Arc<R>,
}

impl<R> WorkforceService<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Every stored employee, ordered by id.
    pub fn employees(&self) -> Result<Vec<EmployeeRecord>, WorkforceServiceError> {
        Ok(self.repository.all()?)
    }

    pub fn employee(&self, id: EmployeeId) -> Result<EmployeeRecord, WorkforceServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(WorkforceServiceError::EmployeeNotFound(id))
    }

    /// Department table, restricted to the fixed column subset.
    pub fn department_view(
        &self,
        department: Department,
    ) -> Result<Vec<DepartmentViewRow>, WorkforceServiceError> {
        let records = self.repository.by_department(department)?;
        Ok(records.iter().map(DepartmentViewRow::from).collect())
    }

    pub fn company_stats(&self) -> Result<WorkforceStats, WorkforceServiceError> {
        let records = self.repository.all()?;
        Ok(aggregate(&records)?)
    }

    pub fn department_stats(
        &self,
        department: Department,
    ) -> Result<WorkforceStats, WorkforceServiceError> {
        let records = self.repository.by_department(department)?;
        Ok(aggregate(&records)?)
    }

    /// Validate and persist a new employee.
    pub fn admit(
        &self,
        fields: RawEmployeeFields,
        auto_id: bool,
    ) -> Result<EmployeeRecord, WorkforceServiceError> {
        let existing = self.repository.ids()?;
        let record = match admit(fields, auto_id, &existing) {
            Ok(record) => record,
            Err(error) => {
                warn!(%error, auto_id, "employee admission rejected");
                return Err(error.into());
            }
        };

        let stored = self.repository.insert(record)?;
        info!(
            employee_id = %stored.id,
            department = ?stored.department,
            "employee registered"
        );
        Ok(stored)
    }

    pub fn update_score(
        &self,
        id: EmployeeId,
        score: f64,
    ) -> Result<EmployeeRecord, WorkforceServiceError> {
        if !score.is_finite() {
            return Err(WorkforceServiceError::InvalidUpdate(format!(
                "score must be a finite number (found {score})"
            )));
        }
        self.apply(id, FieldUpdate::Score(score))
    }

    pub fn update_evaluation_note(
        &self,
        id: EmployeeId,
        note: f64,
    ) -> Result<EmployeeRecord, WorkforceServiceError> {
        if !evaluation_note_in_range(note) {
            return Err(WorkforceServiceError::InvalidUpdate(format!(
                "evaluation note must be between 0 and 10 (found {note})"
            )));
        }
        self.apply(id, FieldUpdate::EvaluationNote(note))
    }

    pub fn update_comment(
        &self,
        id: EmployeeId,
        comment: String,
    ) -> Result<EmployeeRecord, WorkforceServiceError> {
        self.apply(id, FieldUpdate::Comment(comment))
    }

    pub fn risk(&self, id: EmployeeId) -> Result<RiskAssessment, WorkforceServiceError> {
        let record = self.employee(id)?;
        Ok(score_risk(&RiskInput::from(&record)))
    }

    pub fn simulate(
        &self,
        id: EmployeeId,
        interventions: &Interventions,
    ) -> Result<WhatIfProjection, WorkforceServiceError> {
        let record = self.employee(id)?;
        let assessment = score_risk(&RiskInput::from(&record));
        Ok(project(
            &assessment,
            record.over_time.unwrap_or_default(),
            interventions,
        )?)
    }

    pub fn performance_by_department(
        &self,
    ) -> Result<Vec<DepartmentPerformance>, WorkforceServiceError> {
        let records = self.repository.all()?;
        Ok(performance_by_department(&records))
    }

    pub fn age_pyramid(&self) -> Result<Vec<AgeBracket>, WorkforceServiceError> {
        let records = self.repository.all()?;
        Ok(age_pyramid(&records))
    }

    fn apply(
        &self,
        id: EmployeeId,
        change: FieldUpdate,
    ) -> Result<EmployeeRecord, WorkforceServiceError> {
        let field = change.field_name();
        match self.repository.update(id, change) {
            Ok(record) => {
                info!(employee_id = %id, field, "employee field updated");
                Ok(record)
            }
            Err(RepositoryError::NotFound) => Err(WorkforceServiceError::EmployeeNotFound(id)),
            Err(other) => Err(other.into()),
        }
    }
}

/// Error raised by the workforce service.
#[derive(Debug, thiserror::Error)]
pub enum WorkforceServiceError {
    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),
    #[error(transparent)]
    EmptyDataset(#[from] EmptyDatasetError),
    #[error(transparent)]
    Admission(#[from] AdmissionError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("{0}")]
    InvalidUpdate(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
