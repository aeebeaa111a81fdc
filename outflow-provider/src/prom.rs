//! Provider metrics.

pub const METRIC_DATASOURCE_READS: &str = "outflow_datasource_reads_total";
pub const METRIC_DATASOURCE_READ_ERRORS: &str = "outflow_datasource_read_errors_total";
pub const METRIC_DATASOURCE_VALIDATIONS: &str = "outflow_datasource_validations_total";

/// Register the provider's metrics.
///
/// This function should be called only once, early in the lifetime of the process.
pub fn register_provider_metrics() {
    metrics::register_counter!(METRIC_DATASOURCE_READS, metrics::Unit::Count, "data source read operations handled");
    metrics::register_counter!(METRIC_DATASOURCE_READ_ERRORS, metrics::Unit::Count, "data source read operations rejected with error diagnostics");
    metrics::register_counter!(METRIC_DATASOURCE_VALIDATIONS, metrics::Unit::Count, "data source validate operations handled");
}
