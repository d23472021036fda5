//! affinyx-web — HTTP surface for the Affinyx prediction service.
//! Provides:
//!   - POST /predict — mock binding-affinity prediction
//!   - GET /health — liveness probe

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
