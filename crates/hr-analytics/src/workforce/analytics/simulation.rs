use serde::{Deserialize, Serialize};

use super::super::domain::YesNo;
use super::risk::{RiskAssessment, RiskLevel};

const SALARY_STEP: f64 = 500.0;
const POINTS_PER_SALARY_STEP: f64 = 8.0;
const REMOTE_WORK_POINTS: f64 = 10.0;
const OVERTIME_REMOVAL_POINTS: f64 = 15.0;

/// Levers an HR evaluator can pull in a what-if projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Interventions {
    #[serde(default)]
    pub salary_increase: f64,
    #[serde(default)]
    pub remote_work: bool,
    #[serde(default)]
    pub remove_overtime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("salary increase must be a finite, non-negative amount (found {0})")]
    InvalidSalaryIncrease(f64),
    #[error("baseline score must be a finite number (found {0})")]
    InvalidBaseline(f64),
}

/// Projected risk score after applying `interventions` to `baseline`.
///
/// Each 500 of salary increase removes 8 points, remote work 10 and overtime removal 15.
/// The result is rounded to one decimal, ties to even, and floored at zero.
pub fn simulate(baseline: f64, interventions: &Interventions) -> Result<f64, SimulationError> {
    if !baseline.is_finite() {
        return Err(SimulationError::InvalidBaseline(baseline));
    }
    let increase = interventions.salary_increase;
    if !increase.is_finite() || increase < 0.0 {
        return Err(SimulationError::InvalidSalaryIncrease(increase));
    }

    let mut reduction = (increase / SALARY_STEP) * POINTS_PER_SALARY_STEP;
    if interventions.remote_work {
        reduction += REMOTE_WORK_POINTS;
    }
    if interventions.remove_overtime {
        reduction += OVERTIME_REMOVAL_POINTS;
    }

    let projected = ((baseline - reduction) * 10.0).round_ties_even() / 10.0;
    Ok(projected.max(0.0))
}

/// What-if outcome for a stored employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhatIfProjection {
    pub baseline_score: f64,
    pub projected_score: f64,
    pub baseline_level: RiskLevel,
    pub projected_level: RiskLevel,
    pub remote_work_applied: bool,
    /// False when removal was requested for someone who does not work overtime.
    pub overtime_removal_applied: bool,
}

/// Run [`simulate`] from an assessment, offering overtime removal only when the employee
/// currently works overtime.
pub fn project(
    assessment: &RiskAssessment,
    over_time: YesNo,
    interventions: &Interventions,
) -> Result<WhatIfProjection, SimulationError> {
    let effective = Interventions {
        remove_overtime: interventions.remove_overtime && over_time.is_yes(),
        ..*interventions
    };

    let baseline_score = f64::from(assessment.score);
    let projected_score = simulate(baseline_score, &effective)?;

    Ok(WhatIfProjection {
        baseline_score,
        projected_score,
        baseline_level: assessment.level,
        projected_level: RiskLevel::for_score(projected_score),
        remote_work_applied: effective.remote_work,
        overtime_removal_applied: effective.remove_overtime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workforce::analytics::risk::{score_risk, RiskInput};

    fn salary(amount: f64) -> Interventions {
        Interventions {
            salary_increase: amount,
            ..Interventions::default()
        }
    }

    #[test]
    fn one_salary_step_removes_eight_points() {
        assert_eq!(simulate(50.0, &salary(500.0)), Ok(42.0));
    }

    #[test]
    fn reductions_beyond_baseline_floor_at_zero() {
        let interventions = Interventions {
            salary_increase: 1000.0,
            remote_work: true,
            remove_overtime: false,
        };
        assert_eq!(simulate(10.0, &interventions), Ok(0.0));
    }

    #[test]
    fn partial_steps_round_to_one_decimal() {
        // 130 / 500 * 8 = 2.08
        assert_eq!(simulate(60.0, &salary(130.0)), Ok(57.9));
    }

    #[test]
    fn halfway_values_round_to_even() {
        // 46.875 / 500 * 8 = 0.75, leaving 49.25
        assert_eq!(simulate(50.0, &salary(46.875)), Ok(49.2));
        // 15.625 / 500 * 8 = 0.25, leaving 49.75
        assert_eq!(simulate(50.0, &salary(15.625)), Ok(49.8));
    }

    #[test]
    fn rejects_negative_or_non_finite_increase() {
        assert_eq!(
            simulate(50.0, &salary(-1.0)),
            Err(SimulationError::InvalidSalaryIncrease(-1.0))
        );
        assert!(simulate(50.0, &salary(f64::NAN)).is_err());
        assert!(simulate(f64::INFINITY, &salary(0.0)).is_err());
    }

    #[test]
    fn overtime_removal_only_offered_to_overtime_workers() {
        let interventions = Interventions {
            remove_overtime: true,
            ..Interventions::default()
        };

        let overtime = score_risk(&RiskInput {
            over_time: Some(YesNo::Yes),
            monthly_income: Some(3000),
            ..RiskInput::default()
        });
        let projection = project(&overtime, YesNo::Yes, &interventions).expect("projection");
        assert_eq!(projection.baseline_score, 60.0);
        assert_eq!(projection.projected_score, 45.0);
        assert!(projection.overtime_removal_applied);

        let no_overtime = score_risk(&RiskInput {
            monthly_income: Some(3000),
            ..RiskInput::default()
        });
        let projection = project(&no_overtime, YesNo::No, &interventions).expect("projection");
        assert_eq!(projection.projected_score, 25.0);
        assert!(!projection.overtime_removal_applied);
    }
}
