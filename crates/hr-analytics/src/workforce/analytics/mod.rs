//! Pure computations over employee snapshots: aggregation, risk scoring, what-if
//! projections and dashboard breakdowns. Nothing here touches the store.

mod aggregate;
mod breakdown;
mod risk;
mod simulation;
pub mod views;

pub use aggregate::{aggregate, EmptyDatasetError, WorkforceStats};
pub use breakdown::{age_pyramid, performance_by_department, AgeBracket, DepartmentPerformance};
pub use risk::{score_risk, RiskAssessment, RiskFactor, RiskInput, RiskLevel};
pub use simulation::{project, simulate, Interventions, SimulationError, WhatIfProjection};
pub use views::{DepartmentViewRow, RiskView, StatsView};
