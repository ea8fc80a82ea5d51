//! Editing-side state of the resume builder.
//!
//! Each resume section is edited through its own form (`SectionForm` for
//! repeated entries, `RecordForm` for single records). Forms report their whole
//! sub-state as a `SectionUpdate`, and `ResumeBuilder` shallow-merges it into
//! the aggregate document.

pub mod document;
pub mod section;

use thiserror::Error;

use crate::validation::{describe, FieldError};

pub use document::{ExportState, PdfExport, ResumeBuilder, SectionUpdate};
pub use section::{EditMode, RecordForm, SectionEntry, SectionForm};

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("{}", describe(.0))]
    Invalid(Vec<FieldError>),

    #[error("no entry at position {position} (section has {len})")]
    OutOfRange { position: usize, len: usize },

    #[error("a PDF export is already in progress")]
    ExportInProgress,

    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    #[error(transparent)]
    Pdf(#[from] crate::pdf::PdfError),
}

impl From<validator::ValidationErrors> for BuilderError {
    fn from(errors: validator::ValidationErrors) -> Self {
        BuilderError::Invalid(crate::validation::field_errors(&errors))
    }
}
