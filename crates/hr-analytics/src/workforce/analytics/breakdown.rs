use std::collections::BTreeMap;

use serde::Serialize;

use super::super::domain::{Department, EmployeeRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentPerformance {
    pub department: Department,
    /// Employees with a performance rating on record.
    pub employees: usize,
    pub average_performance: f64,
}

/// Mean performance rating per department, in the fixed department order. Records
/// without a department or a rating are skipped, and departments left with no rated
/// employees are omitted.
pub fn performance_by_department<'a, I>(records: I) -> Vec<DepartmentPerformance>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut totals: BTreeMap<Department, (usize, u64)> = BTreeMap::new();
    for record in records {
        let (Some(department), Some(rating)) = (record.department, record.performance_rating)
        else {
            continue;
        };
        let entry = totals.entry(department).or_default();
        entry.0 += 1;
        entry.1 += u64::from(rating.get());
    }

    Department::ordered()
        .into_iter()
        .filter_map(|department| {
            totals
                .get(&department)
                .map(|(count, sum)| DepartmentPerformance {
                    department,
                    employees: *count,
                    average_performance: *sum as f64 / *count as f64,
                })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBracket {
    /// Lower bound of the ten-year bracket (20 covers ages 20..=29).
    pub bracket_start: u8,
    pub gender: String,
    pub headcount: usize,
}

/// Head-count per ten-year age bracket and gender, ordered by bracket then gender.
/// Records missing either the age or the gender are not counted.
pub fn age_pyramid<'a, I>(records: I) -> Vec<AgeBracket>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut counts: BTreeMap<(u8, &'a str), usize> = BTreeMap::new();
    for record in records {
        let (Some(age), Some(gender)) = (record.age, record.gender.as_deref()) else {
            continue;
        };
        *counts.entry(((age / 10) * 10, gender)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((bracket_start, gender), headcount)| AgeBracket {
            bracket_start,
            gender: gender.to_string(),
            headcount,
        })
        .collect()
}
