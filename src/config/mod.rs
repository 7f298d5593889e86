//! Layered application configuration

mod app_config;

pub use app_config::{
    AnalyticsConfig, AppConfig, DatasetConfig, LogFormat, LoggingConfig, MetricsConfig,
    ModelConfig, ObservabilityConfig, ServerConfig, TracingConfig,
};
