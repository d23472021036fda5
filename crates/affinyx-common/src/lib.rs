//! affinyx-common — Shared error types used across all Affinyx crates.

pub mod error;

pub use error::ApiError;
