//! Flattened, pre-formatted view of a resume document.
//!
//! Templates only loop and print; all formatting and "is this section
//! present" decisions happen here. Empty strings and empty lists mean
//! "render nothing".

use crate::models::resume::ResumeDocument;
use crate::render::format::{
    bullet_points, format_date, format_date_range, non_empty, split_skills_string,
};

#[derive(Debug, Clone)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ExperienceView {
    pub position: String,
    pub company: String,
    pub location: String,
    pub date_range: String,
    pub bullets: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EducationView {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub date_range: String,
    pub description: String,
    pub gpa: String,
}

#[derive(Debug, Clone)]
pub struct ProjectView {
    pub title: String,
    pub link: String,
    pub date_range: String,
    pub technologies: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CertificationView {
    pub name: String,
    pub issuer: String,
    pub dates: String,
    pub credential_id: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct AchievementView {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct LanguageView {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone)]
pub struct VolunteerView {
    pub role: String,
    pub organization: String,
    pub date_range: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ResumeView {
    pub accent: &'static str,
    pub full_name: String,
    pub job_title: String,
    pub photo: String,
    pub contacts: Vec<ContactItem>,
    pub summary: String,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub projects: Vec<ProjectView>,
    pub certifications: Vec<CertificationView>,
    pub achievements: Vec<AchievementView>,
    pub languages: Vec<LanguageView>,
    pub volunteer: Vec<VolunteerView>,
}

impl ResumeView {
    pub fn has_skills(&self) -> bool {
        !self.technical_skills.is_empty() || !self.soft_skills.is_empty() || !self.tools.is_empty()
    }
}

fn text(value: Option<&str>) -> String {
    non_empty(value).unwrap_or_default().to_string()
}

fn optional_range(start: Option<&str>, end: Option<&str>) -> String {
    match non_empty(start) {
        Some(start) => format_date_range(start, end, false),
        None => non_empty(end).map(format_date).unwrap_or_default(),
    }
}

pub fn build_view(doc: &ResumeDocument, accent: &'static str) -> ResumeView {
    let info = &doc.personal_info;

    let contacts = [
        ("Email", Some(info.email.as_str())),
        ("Phone", Some(info.phone.as_str())),
        ("Location", Some(info.location.as_str())),
        ("LinkedIn", info.linkedin.as_deref()),
        ("GitHub", info.github.as_deref()),
        ("Website", info.website.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        non_empty(value).map(|v| ContactItem {
            label,
            value: v.to_string(),
        })
    })
    .collect();

    let experience = doc
        .experience
        .iter()
        .map(|exp| ExperienceView {
            position: exp.position.trim().to_string(),
            company: exp.company.trim().to_string(),
            location: text(exp.location.as_deref()),
            date_range: format_date_range(
                &exp.start_date,
                exp.end_date.as_deref(),
                exp.is_current(),
            ),
            bullets: bullet_points(Some(&exp.description)),
            achievements: bullet_points(exp.achievements.as_deref()),
        })
        .collect();

    let education = doc
        .education
        .iter()
        .map(|edu| EducationView {
            degree: edu.degree.trim().to_string(),
            institution: edu.institution.trim().to_string(),
            location: text(edu.location.as_deref()),
            date_range: format_date_range(&edu.start_date, edu.end_date.as_deref(), false),
            description: text(edu.description.as_deref()),
            gpa: text(edu.gpa.as_deref()),
        })
        .collect();

    let projects = doc
        .projects
        .iter()
        .flatten()
        .map(|p| ProjectView {
            title: p.title.trim().to_string(),
            link: text(p.link.as_deref()),
            date_range: optional_range(p.start_date.as_deref(), p.end_date.as_deref()),
            technologies: split_skills_string(Some(&p.technologies)),
            bullets: bullet_points(Some(&p.description)),
        })
        .collect();

    let certifications = doc
        .certifications
        .iter()
        .flatten()
        .map(|c| {
            let issued = non_empty(c.date.as_deref()).map(format_date);
            let expires = non_empty(c.expiry_date.as_deref()).map(format_date);
            let dates = match (issued, expires) {
                (Some(i), Some(e)) => format!("{i} - {e}"),
                (Some(i), None) => i,
                (None, Some(e)) => format!("Expires {e}"),
                (None, None) => String::new(),
            };
            CertificationView {
                name: c.name.trim().to_string(),
                issuer: c.issuer.trim().to_string(),
                dates,
                credential_id: text(c.credential_id.as_deref()),
                url: text(c.certificate_url.as_deref()),
            }
        })
        .collect();

    let achievements = doc
        .achievements
        .iter()
        .flatten()
        .map(|a| AchievementView {
            title: a.title.trim().to_string(),
            issuer: text(a.issuer.as_deref()),
            date: non_empty(a.date.as_deref())
                .map(format_date)
                .unwrap_or_default(),
            description: text(a.description.as_deref()),
        })
        .collect();

    let languages = doc
        .languages
        .iter()
        .flatten()
        .map(|l| LanguageView {
            name: l.name.trim().to_string(),
            proficiency: l.proficiency.trim().to_string(),
        })
        .collect();

    let volunteer = doc
        .volunteer
        .iter()
        .flatten()
        .map(|v| VolunteerView {
            role: v.role.trim().to_string(),
            organization: v.organization.trim().to_string(),
            date_range: optional_range(v.start_date.as_deref(), v.end_date.as_deref()),
            bullets: bullet_points(v.description.as_deref()),
        })
        .collect();

    ResumeView {
        accent,
        full_name: info.full_name(),
        job_title: info.job_title.trim().to_string(),
        photo: text(info.photo.as_deref()),
        contacts,
        summary: info.summary.trim().to_string(),
        experience,
        education,
        technical_skills: split_skills_string(Some(&doc.skills.technical)),
        soft_skills: split_skills_string(doc.skills.soft.as_deref()),
        tools: split_skills_string(doc.skills.tools.as_deref()),
        projects,
        certifications,
        achievements,
        languages,
        volunteer,
    }
}
