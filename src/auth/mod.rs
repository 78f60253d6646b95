//! # Auth Module
//!
//! Session handling for the profile endpoint:
//! - Session token issuing and validation (HS256 JWT)
//! - `Session` extractor carrying user id and role into handlers

pub mod extractors;
pub mod tokens;


pub use extractors::Session;
