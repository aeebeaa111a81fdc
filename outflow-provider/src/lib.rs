//! The Outflow provider server.
//!
//! Exposes the logging operator's custom resources as read-only data
//! sources. Each data source derives its schema from the resource types in
//! `outflow-core`, validates config documents against that schema, and
//! renders accepted documents into Kubernetes YAML manifests.

pub mod app;
pub mod config;
#[cfg(test)]
mod config_test;
pub mod datasource;
pub mod prom;
pub mod server;

use std::mem::MaybeUninit;
use std::sync::Once;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusRecorder};

/// Get a handle to the metrics recorder, initializing it as needed.
pub fn get_metrics_recorder() -> &'static PrometheusRecorder {
    static mut RECORDER: MaybeUninit<PrometheusRecorder> = MaybeUninit::uninit();
    static ONCE: Once = Once::new();
    unsafe {
        ONCE.call_once(|| {
            RECORDER.write(PrometheusBuilder::new().build());
        });
        RECORDER.assume_init_ref()
    }
}
