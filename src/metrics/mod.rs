//! Metrics module - Information Value and correlation ratio

pub mod columns;
pub mod contingency;
pub mod correlation_ratio;
pub mod error;
pub mod iv;
pub mod target;

pub use columns::*;
pub use contingency::*;
pub use correlation_ratio::*;
pub use error::AssocError;
pub use iv::*;
pub use target::*;
