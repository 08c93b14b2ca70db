use crate::infra::{parse_locale, workforce_service};
use clap::Args;
use hr_analytics::error::AppError;
use hr_analytics::workforce::analytics::{Interventions, WorkforceStats};
use hr_analytics::workforce::labels::{company_label, department_label};
use hr_analytics::workforce::{
    Department, EmployeeId, IndicatorColor, Locale, WorkforceServiceError,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    /// Employee CSV export to analyse
    #[arg(long)]
    pub(crate) dataset: PathBuf,
    /// Restrict the report to one department (name or slug: sales, rd, hr)
    #[arg(long)]
    pub(crate) department: Option<Department>,
    /// Label language (en or fr)
    #[arg(long, value_parser = parse_locale, default_value = "en")]
    pub(crate) lang: Locale,
}

#[derive(Args, Debug)]
pub(crate) struct RiskArgs {
    /// Employee CSV export to analyse
    #[arg(long)]
    pub(crate) dataset: PathBuf,
    /// Employee id to assess
    #[arg(long)]
    pub(crate) employee: u32,
    /// Monthly salary increase to simulate
    #[arg(long, default_value_t = 0.0)]
    pub(crate) salary_increase: f64,
    /// Simulate granting remote work
    #[arg(long)]
    pub(crate) remote_work: bool,
    /// Simulate removing overtime
    #[arg(long)]
    pub(crate) remove_overtime: bool,
    /// Label language (en or fr)
    #[arg(long, value_parser = parse_locale, default_value = "en")]
    pub(crate) lang: Locale,
}

pub(crate) fn run_stats_report(args: StatsArgs) -> Result<(), AppError> {
    let StatsArgs {
        dataset,
        department,
        lang,
    } = args;

    let service = workforce_service(Some(&dataset))?;
    println!("Workforce statistics ({})", dataset.display());

    if let Some(department) = department {
        let stats = service.department_stats(department)?;
        render_stats(department_label(department, lang), &stats);
        return Ok(());
    }

    let stats = service.company_stats()?;
    render_stats(company_label(lang), &stats);
    for department in Department::ordered() {
        match service.department_stats(department) {
            Ok(stats) => render_stats(department_label(department, lang), &stats),
            Err(WorkforceServiceError::EmptyDataset(_)) => {
                println!("- {}: no employees", department_label(department, lang));
            }
            Err(other) => return Err(other.into()),
        }
    }

    Ok(())
}

fn render_stats(scope: &'static str, stats: &WorkforceStats) {
    let view = stats.view(scope);
    println!(
        "- {}: {} employees | attrition {} ({}) | job satisfaction {} ({})",
        view.scope,
        view.total_employees,
        view.attrition_rate,
        view.attrition_indicator.as_str(),
        view.average_job_satisfaction,
        view.satisfaction_indicator.map_or("no answers", IndicatorColor::as_str)
    );
}

pub(crate) fn run_risk_report(args: RiskArgs) -> Result<(), AppError> {
    let RiskArgs {
        dataset,
        employee,
        salary_increase,
        remote_work,
        remove_overtime,
        lang,
    } = args;

    let service = workforce_service(Some(&dataset))?;
    let id = EmployeeId(employee);
    let record = service.employee(id)?;
    let assessment = service.risk(id)?;
    let view = assessment.view(id, lang);

    println!(
        "Employee {} ({}, {})",
        id,
        record.job_role.as_deref().unwrap_or("no role on record"),
        record
            .department
            .map_or("no department", |department| department_label(department, lang))
    );
    println!(
        "- Attrition risk: {}/100 {} ({})",
        view.score,
        view.level_label,
        view.color.as_str()
    );
    if view.factors.is_empty() {
        println!("  No risk factors");
    } else {
        for factor in &view.factors {
            println!("  - {}", factor);
        }
    }

    let interventions = Interventions {
        salary_increase,
        remote_work,
        remove_overtime,
    };
    if interventions == Interventions::default() {
        return Ok(());
    }

    let projection = service.simulate(id, &interventions)?;
    println!(
        "- What-if: {:.1} -> {:.1} ({})",
        projection.baseline_score,
        projection.projected_score,
        projection.projected_level.label(lang)
    );
    if remove_overtime && !projection.overtime_removal_applied {
        println!("  Overtime removal skipped: employee does not work overtime");
    }

    Ok(())
}
