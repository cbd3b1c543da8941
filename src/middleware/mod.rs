//! Authentication and authorization middleware.
//!
//! - [`auth`]: the [`auth::AuthUser`] extractor — bearer token verification
//!   plus account resolution
//! - [`role`]: role/approval guards layered on top of it
//!
//! # Request flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `AuthUser` verifies the JWT and loads the account from the database
//! 3. Role guards check the account's role (and approval status where
//!    required)
//! 4. The handler runs only if every check passed

pub mod auth;
pub mod role;
