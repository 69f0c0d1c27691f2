//! Pure domain models for the finance tracker core.
//!
//! No I/O, no UI, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod summary;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use summary::*;
pub use transaction::*;
