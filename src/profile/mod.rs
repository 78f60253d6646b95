// src/profile/mod.rs

pub mod completion;
pub mod handlers;
pub mod models;
pub mod params;
pub mod routes;


pub use routes::profile_routes;
