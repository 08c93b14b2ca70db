use hr_analytics::dataset::EmployeeDatasetImporter;
use hr_analytics::error::AppError;
use hr_analytics::workforce::{InMemoryEmployeeStore, Locale, WorkforceService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) workforce: Arc<WorkforceService<InMemoryEmployeeStore>>,
}

/// Build an employee store, seeded from `dataset` when one is given.
pub(crate) fn load_store(dataset: Option<&Path>) -> Result<InMemoryEmployeeStore, AppError> {
    let store = InMemoryEmployeeStore::new();
    if let Some(path) = dataset {
        let records = EmployeeDatasetImporter::from_path(path)?;
        EmployeeDatasetImporter::seed(&store, records)?;
    }
    Ok(store)
}

pub(crate) fn workforce_service(
    dataset: Option<&Path>,
) -> Result<Arc<WorkforceService<InMemoryEmployeeStore>>, AppError> {
    let store = load_store(dataset)?;
    Ok(Arc::new(WorkforceService::new(Arc::new(store))))
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::from_code(raw).ok_or_else(|| format!("unsupported language '{raw}' (expected en or fr)"))
}
