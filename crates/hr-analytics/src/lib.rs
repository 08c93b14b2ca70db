//! Workforce analytics over HR employee records.
//!
//! The [`workforce`] module holds the employee model, the store abstraction and the
//! analytic core (aggregation, attrition-risk scoring, what-if projections and record
//! admission). [`dataset`] hydrates a store from the IBM attrition CSV export and
//! [`accounts`] gates access for HR users.

pub mod accounts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod telemetry;
pub mod workforce;
