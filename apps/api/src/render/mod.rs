//! Template renderer: (document, template id, color id) → self-contained markup.
//!
//! Pure and deterministic. The output is a single `<div>` with inline styles so
//! the same block serves the on-screen preview and the PDF snapshot.

pub mod catalog;
pub mod format;
pub mod view;

use askama::Template;

use crate::models::resume::ResumeDocument;
use crate::render::catalog::{accent_for, TemplateId};
use crate::render::view::{build_view, ResumeView};

pub use catalog::{ColorScheme, TemplateInfo, COLORS};

#[derive(Template)]
#[template(path = "professional.html")]
struct ProfessionalTemplate<'a> {
    resume: &'a ResumeView,
}

#[derive(Template)]
#[template(path = "modern.html")]
struct ModernTemplate<'a> {
    resume: &'a ResumeView,
}

#[derive(Template)]
#[template(path = "minimalist.html")]
struct MinimalistTemplate<'a> {
    resume: &'a ResumeView,
}

/// Renders the resume with the given template and color scheme.
/// Unknown template ids render the default template; unknown colors use indigo.
pub fn render_resume(
    doc: &ResumeDocument,
    template_id: &str,
    color_id: &str,
) -> Result<String, askama::Error> {
    let view = build_view(doc, accent_for(color_id));
    match TemplateId::resolve(template_id) {
        TemplateId::Professional => ProfessionalTemplate { resume: &view }.render(),
        TemplateId::Modern => ModernTemplate { resume: &view }.render(),
        TemplateId::Minimalist => MinimalistTemplate { resume: &view }.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::document;
    use crate::models::resume::{Achievement, Language, Project, Volunteer};

    fn full_document() -> ResumeDocument {
        let mut doc = document();
        doc.projects = Some(vec![Project {
            id: Some("p1".to_string()),
            title: "Difference Engine".to_string(),
            technologies: "Brass, Steam".to_string(),
            description: "Tabulates polynomials".to_string(),
            ..Default::default()
        }]);
        doc.achievements = Some(vec![Achievement {
            id: Some("a1".to_string()),
            title: "First Programmer".to_string(),
            ..Default::default()
        }]);
        doc.languages = Some(vec![Language {
            id: Some("l1".to_string()),
            name: "French".to_string(),
            proficiency: "Fluent".to_string(),
        }]);
        doc.volunteer = Some(vec![Volunteer {
            id: Some("v1".to_string()),
            organization: "Royal Society".to_string(),
            role: "Translator".to_string(),
            ..Default::default()
        }]);
        doc
    }

    #[test]
    fn test_every_template_renders_core_sections() {
        for template in TemplateId::ALL {
            let html = render_resume(&document(), template.id(), "indigo").unwrap();
            assert!(html.contains(&format!("resume-{}", template.id())));
            assert!(html.contains("Ada Lovelace"));
            assert!(html.contains("Jan 2020 - Jun 2022"));
            assert!(html.contains("Analytical Engines"));
            assert!(html.contains("#4F46E5"));
        }
    }

    #[test]
    fn test_absent_optional_sections_render_nothing() {
        for template in TemplateId::ALL {
            let html = render_resume(&document(), template.id(), "gray").unwrap();
            assert!(!html.contains("section-projects"));
            assert!(!html.contains("section-certifications"));
            assert!(!html.contains("section-achievements"));
            assert!(!html.contains("section-languages"));
            assert!(!html.contains("section-volunteer"));
        }
    }

    #[test]
    fn test_present_optional_sections_render() {
        let html = render_resume(&full_document(), "modern", "rose").unwrap();
        assert!(html.contains("section-projects"));
        assert!(html.contains("Difference Engine"));
        assert!(html.contains("First Programmer"));
        assert!(html.contains("Fluent"));
        assert!(html.contains("Royal Society"));
        assert!(html.contains("#E11D48"));
    }

    #[test]
    fn test_unknown_color_uses_default_accent() {
        let html = render_resume(&document(), "professional", "neon").unwrap();
        assert!(html.contains("#4F46E5"));
    }

    #[test]
    fn test_unknown_template_uses_default_layout() {
        let html = render_resume(&document(), "baroque", "indigo").unwrap();
        assert!(html.contains("resume-professional"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc = full_document();
        assert_eq!(
            render_resume(&doc, "minimalist", "cyan").unwrap(),
            render_resume(&doc, "minimalist", "cyan").unwrap()
        );
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut doc = document();
        doc.personal_info.summary = "<script>alert(1)</script>".to_string();
        let html = render_resume(&doc, "professional", "indigo").unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_document_renders_without_error() {
        for template in TemplateId::ALL {
            assert!(render_resume(&ResumeDocument::default(), template.id(), "").is_ok());
        }
    }
}
