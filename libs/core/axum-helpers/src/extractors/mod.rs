//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that reduce boilerplate and standardize error
//! handling across the API.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
