//! `bioasq2squad` library crate.
//!
//! Converts a BioASQ question corpus into SQuAD-style train/dev files.
//! The binary is a thin wrapper around this library so the pipeline stages
//! can be tested without spawning processes:
//!
//! Loader (`io::bioasq`) -> Paragraph Builder (`convert`) -> Splitter (`split`)
//! -> Writer (`io::squad`) + Reporter (`report`)

pub mod app;
pub mod cli;
pub mod convert;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod split;
pub mod text;
