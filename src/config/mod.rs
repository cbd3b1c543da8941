//! Environment-driven configuration.
//!
//! Each submodule owns one configuration concern and loads it from
//! environment variables via a `from_env()` constructor:
//!
//! - [`cors`]: allowed origins for the browser front end
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: bearer token secret and expiry

pub mod cors;
pub mod database;
pub mod jwt;
