// src/core/mod.rs
//! Backend access, configuration and preview rendering

pub mod backend;
pub mod config_manager;
pub mod service_client;
pub mod template_engine;

pub use backend::ResumeBackend;
pub use config_manager::{ClientConfig, ConfigManager, ConfigOverrides};
pub use service_client::ServiceClient;
