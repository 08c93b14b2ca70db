use std::sync::Arc;

use serde_json::{json, Value};

use super::common::*;
use crate::workforce::admission::AdmissionError;
use crate::workforce::analytics::{Interventions, RiskFactor, RiskLevel};
use crate::workforce::domain::{Department, EmployeeId, EmployeeRecord, YesNo};
use crate::workforce::repository::RepositoryError;
use crate::workforce::service::{WorkforceService, WorkforceServiceError};

fn fields(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().cloned().expect("object")
}

#[test]
fn company_stats_match_hand_computed_values() {
    let service = build_service(sales_trio());
    let stats = service.company_stats().expect("stats");

    assert_eq!(stats.total_count, 3);
    assert_eq!(stats.attrition_display(), "33.33%");
    assert_eq!(stats.satisfaction_display(), "3.00/4");
}

#[test]
fn department_stats_fail_for_empty_department() {
    let service = build_service(sales_trio());
    let error = service
        .department_stats(Department::HumanResources)
        .expect_err("no HR employees");
    assert!(matches!(error, WorkforceServiceError::EmptyDataset(_)));
}

#[test]
fn repeated_aggregation_is_stable() {
    let service = build_service(sales_trio());
    let first = service.department_stats(Department::Sales).expect("stats");
    let second = service.department_stats(Department::Sales).expect("stats");
    assert_eq!(first, second);
}

#[test]
fn department_view_keeps_only_matching_rows() {
    let mut records = sales_trio();
    records.push(employee(10, Department::ResearchAndDevelopment));
    let service = build_service(records);

    let rows = service
        .department_view(Department::ResearchAndDevelopment)
        .expect("view");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, EmployeeId(10));
}

#[test]
fn admission_persists_with_next_id() {
    let service = build_service(vec![employee(41, Department::Sales)]);
    let stored = service
        .admit(fields(submission_fields()), true)
        .expect("admitted");

    assert_eq!(stored.id, EmployeeId(42));
    assert_eq!(service.employee(EmployeeId(42)).expect("stored"), stored);
}

#[test]
fn rejected_admission_leaves_store_untouched() {
    let service = build_service(vec![employee(41, Department::Sales)]);
    let error = service
        .admit(fields(submission_with_id(json!(41))), false)
        .expect_err("duplicate");

    assert!(matches!(
        error,
        WorkforceServiceError::Admission(AdmissionError::DuplicateId(EmployeeId(41)))
    ));
    assert_eq!(service.repository().len().expect("len"), 1);
}

#[test]
fn store_failure_during_admission_is_surfaced() {
    let service = WorkforceService::new(Arc::new(UnavailableRepository));
    let error = service
        .admit(fields(submission_with_id(json!(3))), false)
        .expect_err("store offline");
    assert!(matches!(
        error,
        WorkforceServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}

#[test]
fn insert_conflict_is_reported() {
    let service = WorkforceService::new(Arc::new(ConflictRepository));
    let error = service
        .admit(fields(submission_with_id(json!(3))), false)
        .expect_err("conflict");
    assert!(matches!(
        error,
        WorkforceServiceError::Repository(RepositoryError::Conflict)
    ));
}

#[test]
fn updates_touch_only_their_field() {
    let service = build_service(sales_trio());
    let id = EmployeeId(2);

    service.update_score(id, 7.5).expect("score");
    service.update_evaluation_note(id, 8.0).expect("note");
    let updated = service
        .update_comment(id, "Strong quarter".to_string())
        .expect("comment");

    assert_eq!(updated.score, 7.5);
    assert_eq!(updated.evaluation_note, Some(8.0));
    assert_eq!(updated.comment.as_deref(), Some("Strong quarter"));
    assert_eq!(updated.monthly_income, employee(2, Department::Sales).monthly_income);
}

#[test]
fn invalid_updates_are_rejected_before_mutation() {
    let service = build_service(sales_trio());
    let id = EmployeeId(1);

    assert!(matches!(
        service.update_evaluation_note(id, 10.5),
        Err(WorkforceServiceError::InvalidUpdate(_))
    ));
    assert!(matches!(
        service.update_score(id, f64::NAN),
        Err(WorkforceServiceError::InvalidUpdate(_))
    ));
    assert_eq!(service.employee(id).expect("record").evaluation_note, None);
}

#[test]
fn updating_unknown_employee_is_not_found() {
    let service = build_service(sales_trio());
    let error = service
        .update_score(EmployeeId(99), 1.0)
        .expect_err("missing");
    assert!(matches!(
        error,
        WorkforceServiceError::EmployeeNotFound(EmployeeId(99))
    ));
}

#[test]
fn risk_for_stored_employee_uses_record_fields() {
    let service = build_service(vec![at_risk_employee(5)]);
    let assessment = service.risk(EmployeeId(5)).expect("risk");

    assert_eq!(assessment.score, 100);
    assert_eq!(assessment.level, RiskLevel::Critical);
    assert_eq!(
        assessment.factors,
        vec![
            RiskFactor::Overtime,
            RiskFactor::LowJobSatisfaction,
            RiskFactor::StalledPromotion,
            RiskFactor::LowIncome,
        ]
    );
}

#[test]
fn simulation_projects_from_current_risk() {
    let service = build_service(vec![at_risk_employee(5)]);
    let projection = service
        .simulate(
            EmployeeId(5),
            &Interventions {
                salary_increase: 1000.0,
                remote_work: true,
                remove_overtime: true,
            },
        )
        .expect("projection");

    // 100 - 16 - 10 - 15
    assert_eq!(projection.projected_score, 59.0);
    assert_eq!(projection.projected_level, RiskLevel::Moderate);
    assert!(projection.overtime_removal_applied);
}

#[test]
fn simulation_rejects_negative_salary_delta() {
    let service = build_service(vec![at_risk_employee(5)]);
    let error = service
        .simulate(
            EmployeeId(5),
            &Interventions {
                salary_increase: -100.0,
                ..Interventions::default()
            },
        )
        .expect_err("negative delta");
    assert!(matches!(error, WorkforceServiceError::Simulation(_)));
}

#[test]
fn breakdowns_cover_all_records() {
    let mut records = sales_trio();
    records.push(EmployeeRecord {
        age: Some(52),
        gender: Some("Male".to_string()),
        attrition: YesNo::No,
        ..employee(20, Department::HumanResources)
    });
    let service = build_service(records);

    let performance = service.performance_by_department().expect("performance");
    assert_eq!(performance.len(), 2);
    assert_eq!(performance[0].department, Department::Sales);
    assert_eq!(performance[0].employees, 3);
    assert_eq!(performance[1].department, Department::HumanResources);

    let pyramid = service.age_pyramid().expect("pyramid");
    let total: usize = pyramid.iter().map(|bracket| bracket.headcount).sum();
    assert_eq!(total, 4);
    assert_eq!(pyramid[0].bracket_start, 30);
    assert_eq!(pyramid[0].headcount, 3);
    assert_eq!(pyramid[1].bracket_start, 50);
    assert_eq!(pyramid[1].gender, "Male");
}

#[test]
fn sparse_records_are_skipped_by_breakdowns() {
    let mut records = sales_trio();
    records.push(EmployeeRecord {
        department: Some(Department::Sales),
        ..EmployeeRecord::bare(EmployeeId(30))
    });
    let service = build_service(records);

    let performance = service.performance_by_department().expect("performance");
    assert_eq!(performance.len(), 1);
    assert_eq!(performance[0].employees, 3);
    assert_eq!(performance[0].average_performance, 3.0);

    let pyramid = service.age_pyramid().expect("pyramid");
    let total: usize = pyramid.iter().map(|bracket| bracket.headcount).sum();
    assert_eq!(total, 3);

    let stats = service.department_stats(Department::Sales).expect("stats");
    assert_eq!(stats.total_count, 4);
    assert_eq!(stats.satisfaction_display(), "3.00/4");
    assert_eq!(stats.attrition_display(), "25.00%");
}

#[test]
fn minimal_admission_is_stored_with_defaults() {
    let service = build_service(sales_trio());
    let stored = service
        .admit(fields(json!({ "Department": "Sales" })), true)
        .expect("admitted");
    assert_eq!(stored.id, EmployeeId(4));
    assert_eq!(stored.attrition, YesNo::No);
    assert_eq!(stored.monthly_income, None);

    let assessment = service.risk(stored.id).expect("risk");
    assert_eq!(assessment.score, 0);
}
