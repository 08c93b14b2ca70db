use serde::Serialize;

use super::super::domain::EmployeeRecord;

/// Raised when a statistic is requested over zero records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no employee records matched the requested scope")]
pub struct EmptyDatasetError;

/// Summary statistics over a set of employee records, kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkforceStats {
    pub total_count: usize,
    pub attrition_rate_percent: f64,
    /// `None` when no record in scope carries a job satisfaction answer.
    pub average_satisfaction: Option<f64>,
}

impl WorkforceStats {
    /// Attrition rounded to two decimals, e.g. `33.33%`.
    pub fn attrition_display(&self) -> String {
        format!("{:.2}%", self.attrition_rate_percent)
    }

    /// Mean job satisfaction on the four point scale, e.g. `3.00/4`, or `N/A`.
    pub fn satisfaction_display(&self) -> String {
        match self.average_satisfaction {
            Some(average) => format!("{:.2}/4", average),
            None => "N/A".to_string(),
        }
    }
}

/// Count, attrition rate and mean job satisfaction over `records`.
///
/// Works on any filtered subset (company, department or ad-hoc). Fails instead of
/// dividing by zero when the subset is empty. The satisfaction mean only counts
/// records that carry an answer.
pub fn aggregate<'a, I>(records: I) -> Result<WorkforceStats, EmptyDatasetError>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut total = 0usize;
    let mut departed = 0usize;
    let mut satisfaction_sum = 0u64;
    let mut answered = 0usize;

    for record in records {
        total += 1;
        if record.has_left() {
            departed += 1;
        }
        if let Some(level) = record.job_satisfaction {
            satisfaction_sum += u64::from(level.get());
            answered += 1;
        }
    }

    if total == 0 {
        return Err(EmptyDatasetError);
    }

    Ok(WorkforceStats {
        total_count: total,
        attrition_rate_percent: departed as f64 * 100.0 / total as f64,
        average_satisfaction: (answered > 0).then(|| satisfaction_sum as f64 / answered as f64),
    })
}
