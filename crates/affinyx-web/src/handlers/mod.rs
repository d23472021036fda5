//! HTTP handlers for the prediction API.

pub mod health;
pub mod predict;
