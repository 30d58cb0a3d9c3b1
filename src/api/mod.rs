pub mod client;

pub use client::{AnalysisEvent, ApiClient, ApiError, StartupEvent};
