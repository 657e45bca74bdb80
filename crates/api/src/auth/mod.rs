//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed, time-bound admin tokens.

pub mod jwt;
pub mod password;
