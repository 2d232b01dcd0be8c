//! Data module - Service models and the session's transaction store

mod models;
mod store;

pub use models::{AnalysisSummary, ForecastPoint, ForecastResponse, Transaction};
pub use store::TransactionStore;
