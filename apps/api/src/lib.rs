//! Resume builder: section-form state, template rendering, PDF export and an
//! in-memory persistence API served over Axum.

pub mod builder;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod pdf;
pub mod render;
pub mod resumes;
pub mod routes;
pub mod state;
pub mod storage;
pub mod validation;
