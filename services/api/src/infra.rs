use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use placement_engine::assessment::{BankError, QuestionBank};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) started_at: DateTime<Utc>,
}

/// Load the CSV bank when one is given, otherwise fall back to the built-in bank.
pub(crate) fn load_bank(csv: Option<&Path>) -> Result<QuestionBank, BankError> {
    match csv {
        Some(path) => {
            let bank = QuestionBank::from_csv_path(path)?;
            info!(path = %path.display(), items = bank.len(), "loaded question bank from csv");
            Ok(bank)
        }
        None => Ok(QuestionBank::standard()),
    }
}
