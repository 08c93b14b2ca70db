//! Employee records, their admission into the store, and the analytics served over them.

pub mod admission;
pub mod analytics;
pub mod domain;
pub mod labels;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use admission::{admit, AdmissionError, EmployeeSubmission, RawEmployeeFields};
pub use domain::{
    BusinessTravel, Department, EmployeeId, EmployeeRecord, SatisfactionLevel, UnknownDepartment,
    YesNo,
};
pub use labels::{IndicatorColor, Locale};
pub use repository::{EmployeeRepository, FieldUpdate, InMemoryEmployeeStore, RepositoryError};
pub use router::workforce_router;
pub use service::{WorkforceService, WorkforceServiceError};
