//! Synthetic customer churn dataset generation.

pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod locale;
pub mod plan;
pub mod predict;
pub mod record;
pub mod rng;
pub mod scoring;
pub mod summary;
pub mod types;
