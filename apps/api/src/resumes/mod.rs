// Resume records: persistence service plus the HTTP handlers for CRUD,
// preview and PDF export.

pub mod handlers;
pub mod service;
