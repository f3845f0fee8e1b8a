//! tablechart: deterministic chart-data derivation for spreadsheet tables.
//!
//! This crate turns a read-only [`core::Table`] (parsed spreadsheet rows plus
//! column names) and a [`core::ChartRequest`] into a ready-to-render
//! [`core::ChartSeries`], or a tagged validation error. It is a pure,
//! synchronous computation: no I/O, no shared mutable state, identical inputs
//! give identical output.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartEngine, DerivationConfig};
pub use error::{ChartError, ChartResult};
