//! Domain primitives shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
