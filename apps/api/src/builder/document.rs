use bytes::Bytes;
use tracing::{debug, warn};
use validator::Validate;

use crate::builder::BuilderError;
use crate::models::resume::{
    Achievement, Certification, CreateResumeRequest, Education, Experience, Language,
    PersonalInfo, Project, ResumeDocument, Skills, Volunteer, DEFAULT_COLOR, DEFAULT_TEMPLATE,
};
use crate::pdf::PdfRenderer;
use crate::render::render_resume;
use crate::validation::{field_errors, FieldError};

/// One section's complete new value, as reported by its form.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    PersonalInfo(PersonalInfo),
    Experience(Vec<Experience>),
    Education(Vec<Education>),
    Skills(Skills),
    Projects(Vec<Project>),
    Certifications(Vec<Certification>),
    Achievements(Vec<Achievement>),
    Languages(Vec<Language>),
    Volunteer(Vec<Volunteer>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportState {
    #[default]
    Idle,
    Generating,
}

/// A finished export, ready to be offered as a download.
#[derive(Debug, Clone)]
pub struct PdfExport {
    pub filename: String,
    pub bytes: Bytes,
}

/// The document being edited plus its presentation choices.
#[derive(Debug, Clone)]
pub struct ResumeBuilder {
    document: ResumeDocument,
    template: String,
    color: String,
    export: ExportState,
}

impl Default for ResumeBuilder {
    fn default() -> Self {
        Self::new(ResumeDocument::default())
    }
}

impl ResumeBuilder {
    pub fn new(document: ResumeDocument) -> Self {
        Self {
            document,
            template: DEFAULT_TEMPLATE.to_string(),
            color: DEFAULT_COLOR.to_string(),
            export: ExportState::Idle,
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn export_state(&self) -> ExportState {
        self.export
    }

    /// Replaces exactly one section; every other section keeps its value.
    pub fn apply(&mut self, update: SectionUpdate) {
        let doc = &mut self.document;
        match update {
            SectionUpdate::PersonalInfo(info) => doc.personal_info = info,
            SectionUpdate::Experience(list) => doc.experience = list,
            SectionUpdate::Education(list) => doc.education = list,
            SectionUpdate::Skills(skills) => doc.skills = skills,
            SectionUpdate::Projects(list) => doc.projects = Some(list),
            SectionUpdate::Certifications(list) => doc.certifications = Some(list),
            SectionUpdate::Achievements(list) => doc.achievements = Some(list),
            SectionUpdate::Languages(list) => doc.languages = Some(list),
            SectionUpdate::Volunteer(list) => doc.volunteer = Some(list),
        }
    }

    pub fn select_template(&mut self, id: impl Into<String>) {
        self.template = id.into();
    }

    pub fn select_color(&mut self, id: impl Into<String>) {
        self.color = id.into();
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        self.document.validate().map_err(|e| field_errors(&e))
    }

    /// Current markup for the live preview.
    pub fn preview(&self) -> Result<String, BuilderError> {
        Ok(render_resume(&self.document, &self.template, &self.color)?)
    }

    /// Body for `POST /api/resumes`. Refuses an invalid document so nothing
    /// incomplete is sent.
    pub fn save_request(&self, user_id: Option<i64>) -> Result<CreateResumeRequest, BuilderError> {
        self.validate().map_err(BuilderError::Invalid)?;

        Ok(CreateResumeRequest {
            user_id,
            name: format!("{} Resume", self.document.personal_info.full_name()),
            template: Some(self.template.clone()),
            color: Some(self.color.clone()),
            data: self.document.clone(),
        })
    }

    pub fn pdf_filename(&self) -> String {
        self.document.personal_info.pdf_filename()
    }

    /// Snapshots the preview markup for export. Only one export may be in
    /// flight at a time.
    pub fn begin_export(&mut self) -> Result<String, BuilderError> {
        if self.export == ExportState::Generating {
            return Err(BuilderError::ExportInProgress);
        }
        let html = self.preview()?;
        self.export = ExportState::Generating;
        Ok(html)
    }

    pub fn finish_export(&mut self) {
        self.export = ExportState::Idle;
    }

    /// Full export round: snapshot, render, and return to idle whatever the outcome.
    pub async fn export_pdf(
        &mut self,
        renderer: &dyn PdfRenderer,
    ) -> Result<PdfExport, BuilderError> {
        let html = self.begin_export()?;
        debug!("Exporting resume ({} bytes of markup)", html.len());

        let result = renderer.render(&html).await;
        self.finish_export();

        let bytes = result.map_err(|e| {
            warn!("PDF export failed: {e}");
            e
        })?;

        Ok(PdfExport {
            filename: self.pdf_filename(),
            bytes,
        })
    }
}
