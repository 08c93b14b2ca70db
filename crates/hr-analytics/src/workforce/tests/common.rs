use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::workforce::domain::{
    BusinessTravel, Department, EmployeeId, EmployeeRecord, SatisfactionLevel, YesNo,
};
use crate::workforce::repository::{
    EmployeeRepository, FieldUpdate, InMemoryEmployeeStore, RepositoryError,
};
use crate::workforce::service::WorkforceService;

fn level(value: u8) -> SatisfactionLevel {
    SatisfactionLevel::new(value).expect("valid satisfaction level")
}

pub(super) fn employee(id: u32, department: Department) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId(id),
        age: Some(34),
        attrition: YesNo::No,
        business_travel: Some(BusinessTravel::Rarely),
        daily_rate: Some(1102),
        department: Some(department),
        distance_from_home: Some(4),
        education: Some(3),
        education_field: Some("Life Sciences".to_string()),
        environment_satisfaction: Some(level(3)),
        gender: Some("Female".to_string()),
        hourly_rate: Some(94),
        job_involvement: Some(level(3)),
        job_level: Some(2),
        job_role: Some("Sales Executive".to_string()),
        job_satisfaction: Some(level(3)),
        marital_status: Some("Single".to_string()),
        monthly_income: Some(5993),
        monthly_rate: Some(19479),
        num_companies_worked: Some(2),
        over_time: Some(YesNo::No),
        percent_salary_hike: Some(11),
        performance_rating: Some(level(3)),
        relationship_satisfaction: Some(level(2)),
        standard_hours: Some(80),
        stock_option_level: Some(0),
        total_working_years: Some(8),
        training_times_last_year: Some(2),
        work_life_balance: Some(level(3)),
        years_at_company: Some(6),
        years_in_current_role: Some(4),
        years_since_last_promotion: Some(0),
        years_with_curr_manager: Some(5),
        score: 0.0,
        evaluation_note: None,
        comment: None,
    }
}

/// Three Sales employees: attrition Yes/No/No, job satisfaction 2/3/4.
pub(super) fn sales_trio() -> Vec<EmployeeRecord> {
    [(1, YesNo::Yes, 2), (2, YesNo::No, 3), (3, YesNo::No, 4)]
        .into_iter()
        .map(|(id, attrition, satisfaction)| EmployeeRecord {
            attrition,
            job_satisfaction: Some(level(satisfaction)),
            ..employee(id, Department::Sales)
        })
        .collect()
}

/// High-risk profile: overtime, unhappy, stalled and underpaid.
pub(super) fn at_risk_employee(id: u32) -> EmployeeRecord {
    EmployeeRecord {
        over_time: Some(YesNo::Yes),
        job_satisfaction: Some(level(1)),
        years_since_last_promotion: Some(5),
        monthly_income: Some(3000),
        ..employee(id, Department::ResearchAndDevelopment)
    }
}

pub(super) fn seeded_store(records: Vec<EmployeeRecord>) -> InMemoryEmployeeStore {
    let store = InMemoryEmployeeStore::new();
    for record in records {
        store.insert(record).expect("seed record");
    }
    store
}

pub(super) fn build_service(
    records: Vec<EmployeeRecord>,
) -> Arc<WorkforceService<InMemoryEmployeeStore>> {
    Arc::new(WorkforceService::new(Arc::new(seeded_store(records))))
}

/// JSON body for a valid admission, without an id.
pub(super) fn submission_fields() -> Value {
    let record = employee(0, Department::HumanResources);
    let mut value = serde_json::to_value(record).expect("serialize record");
    let object = value.as_object_mut().expect("record object");
    object.remove("id");
    object.remove("score");
    object.remove("Attrition");
    object.remove("evaluation_note");
    object.remove("comment");
    value
}

pub(super) fn submission_with_id(id: Value) -> Value {
    let mut value = submission_fields();
    value
        .as_object_mut()
        .expect("submission object")
        .insert("id".to_string(), id);
    value
}

pub(super) fn auto_id_submission() -> Value {
    let mut value = submission_fields();
    value
        .as_object_mut()
        .expect("submission object")
        .insert("auto_id".to_string(), json!(true));
    value
}

pub(super) struct ConflictRepository;

impl EmployeeRepository for ConflictRepository {
    fn insert(&self, _record: EmployeeRecord) -> Result<EmployeeRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: EmployeeId) -> Result<Option<EmployeeRecord>, RepositoryError> {
        Ok(None)
    }

    fn all(&self) -> Result<Vec<EmployeeRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn update(
        &self,
        _id: EmployeeId,
        _change: FieldUpdate,
    ) -> Result<EmployeeRecord, RepositoryError> {
        Err(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl EmployeeRepository for UnavailableRepository {
    fn insert(&self, _record: EmployeeRecord) -> Result<EmployeeRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: EmployeeId) -> Result<Option<EmployeeRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<EmployeeRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn update(
        &self,
        _id: EmployeeId,
        _change: FieldUpdate,
    ) -> Result<EmployeeRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
