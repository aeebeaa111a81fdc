//! The provider HTTP API.
//!
//! Diagnostics are part of the response payload, a config rejected by its
//! data source still answers `200`. Transport level statuses are reserved
//! for the transport, an unknown data source name answers `404`.

use anyhow::Result;
use axum::http::{header::HeaderName, HeaderMap, HeaderValue, StatusCode};
use axum::routing::{get, post, Router};
use axum::{extract, AddExtensionLayer};
use futures::prelude::*;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::datasource::{
    has_errors, DataSource, DataSourceInfo, DataSourceSchema, Diagnostic, ReadResponse,
};
use crate::get_metrics_recorder;
use crate::prom::{
    METRIC_DATASOURCE_READS, METRIC_DATASOURCE_READ_ERRORS, METRIC_DATASOURCE_VALIDATIONS,
};
use outflow_core::{API_GROUP, API_VERSION};

/// Spawns the provider API server, which uses the default global registry
/// for metrics.
pub fn spawn_http_server(config: &Config, mut shutdown: broadcast::Receiver<()>) -> JoinHandle<Result<()>> {
    let state = get_metrics_recorder().handle();
    let app = Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .route("/metrics", get(prometheus_scrape))
        .route("/v1/provider", get(provider_info))
        .route("/v1/datasources", get(list_datasources))
        .route("/v1/datasources/:name/schema", get(datasource_schema))
        .route("/v1/datasources/:name/validate", post(validate_datasource))
        .route("/v1/datasources/:name/read", post(read_datasource))
        .layer(AddExtensionLayer::new(state));
    let server = axum::Server::bind(&([0, 0, 0, 0], config.http_port).into())
        .serve(app.into_make_service())
        .with_graceful_shutdown(async move {
            let _res = shutdown.recv().await;
        });
    tracing::info!("provider API is listening at 0.0.0.0:{}", config.http_port);
    tokio::spawn(server.map_err(anyhow::Error::from))
}

/// Summary info of the provider build.
#[derive(Clone, Debug, Serialize)]
struct ProviderInfo {
    /// The name of the provider.
    name: &'static str,
    /// The version of the provider build.
    version: &'static str,
    /// The API group served by the provider.
    group: &'static str,
    /// The API version served by the provider.
    api_version: &'static str,
    /// The registered names of all data sources.
    datasources: Vec<String>,
}

/// The response payload of a validate call.
#[derive(Clone, Debug, Serialize)]
struct ValidateResponse {
    /// Diagnostics produced while checking the config.
    diagnostics: Vec<Diagnostic>,
}

/// Handle Prometheus metrics scraping.
async fn prometheus_scrape(extract::Extension(state): extract::Extension<PrometheusHandle>) -> (StatusCode, HeaderMap, String) {
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("content-type"), HeaderValue::from_static("text/plain; version=0.0.4"));
    (StatusCode::OK, headers, state.render())
}

/// Describe the provider and its registered data sources.
async fn provider_info() -> axum::Json<ProviderInfo> {
    axum::Json(ProviderInfo {
        name: "outflow",
        version: env!("CARGO_PKG_VERSION"),
        group: API_GROUP,
        api_version: API_VERSION,
        datasources: DataSource::ALL.iter().map(DataSource::name).collect(),
    })
}

/// List the registered data sources.
async fn list_datasources() -> axum::Json<Vec<DataSourceInfo>> {
    axum::Json(DataSource::ALL.iter().map(DataSource::info).collect())
}

/// Fetch the full schema of a data source.
async fn datasource_schema(extract::Path(name): extract::Path<String>) -> Result<axum::Json<&'static DataSourceSchema>, StatusCode> {
    let ds = DataSource::from_name(&name).ok_or(StatusCode::NOT_FOUND)?;
    Ok(axum::Json(ds.schema()))
}

/// Validate a config document against a data source.
#[tracing::instrument(level = "debug", skip(payload))]
async fn validate_datasource(
    name: extract::Path<String>, payload: extract::Json<Value>,
) -> Result<axum::Json<ValidateResponse>, StatusCode> {
    tracing::debug!("received validate request for data source {}", name.0);
    let ds = DataSource::from_name(&name.0).ok_or(StatusCode::NOT_FOUND)?;
    metrics::increment_counter!(METRIC_DATASOURCE_VALIDATIONS, "datasource" => name.0.clone());
    Ok(axum::Json(ValidateResponse { diagnostics: ds.validate(&payload.0) }))
}

/// Evaluate a config document against a data source and render its manifest.
#[tracing::instrument(level = "debug", skip(payload))]
async fn read_datasource(
    name: extract::Path<String>, payload: extract::Json<Value>,
) -> Result<axum::Json<ReadResponse>, StatusCode> {
    tracing::debug!("received read request for data source {}", name.0);
    let ds = DataSource::from_name(&name.0).ok_or(StatusCode::NOT_FOUND)?;
    metrics::increment_counter!(METRIC_DATASOURCE_READS, "datasource" => name.0.clone());
    let res = ds.read(&payload.0);
    if has_errors(&res.diagnostics) {
        metrics::increment_counter!(METRIC_DATASOURCE_READ_ERRORS, "datasource" => name.0.clone());
    }
    Ok(axum::Json(res))
}
