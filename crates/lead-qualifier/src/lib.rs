//! Lead qualification: enrich a signup with public profile data and score its fit.
//!
//! The [`scoring`] module is the core. It turns a [`profile::ProfileBundle`] into a 0-100 score,
//! a tier and a one-sentence explanation, driven by a hot-reloadable JSON document. [`pipeline`]
//! wires enrichment sources and the scorer together for batches of [`profile::Lead`]s.

pub mod config;
pub mod error;
pub mod leads;
pub mod pipeline;
pub mod profile;
pub mod scoring;
pub mod telemetry;
