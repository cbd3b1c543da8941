//! Shared utilities.
//!
//! - [`errors`]: application error type and HTTP rendering
//! - [`jwt`]: bearer token creation and verification
//! - [`password`]: bcrypt credential hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
