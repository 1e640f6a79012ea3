//! Input/output helpers.
//!
//! - BioASQ JSON loading (`bioasq`)
//! - SQuAD train/dev writing (`squad`)

pub mod bioasq;
pub mod squad;

pub use bioasq::*;
pub use squad::*;
