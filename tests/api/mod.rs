//! HTTP API tests

mod cors_tests;
mod health_tests;
mod metrics_tests;
mod service_link_tests;
