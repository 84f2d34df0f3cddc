//! HTTP collaborator clients for the socrange range: the risk-scoring
//! service, the anomaly-detection service, and the trigger endpoint.

pub mod anomaly;
pub mod factory;
pub mod http;
pub mod scoring;
pub mod services;
pub mod trigger;

pub use services::PluginServicesFactory;
