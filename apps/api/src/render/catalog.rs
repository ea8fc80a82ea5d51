use serde::Serialize;

use crate::models::resume::{DEFAULT_COLOR, DEFAULT_TEMPLATE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// Accent rule under the header, single column.
    Professional,
    /// Full-width colored header band.
    Modern,
    /// Sidebar with contacts and skills.
    Minimalist,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::Professional,
        TemplateId::Modern,
        TemplateId::Minimalist,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TemplateId::Professional => "professional",
            TemplateId::Modern => "modern",
            TemplateId::Minimalist => "minimalist",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Professional => "Professional",
            TemplateId::Modern => "Modern",
            TemplateId::Minimalist => "Minimalist",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id.trim())
    }

    /// Unknown ids fall back to the default template.
    pub fn resolve(id: &str) -> Self {
        Self::parse(id).unwrap_or(TemplateId::Professional)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub id: &'static str,
    pub name: &'static str,
    pub value: &'static str,
}

pub static COLORS: [ColorScheme; 5] = [
    ColorScheme {
        id: "indigo",
        name: "Indigo",
        value: "#4F46E5",
    },
    ColorScheme {
        id: "cyan",
        name: "Cyan",
        value: "#0891B2",
    },
    ColorScheme {
        id: "emerald",
        name: "Emerald",
        value: "#059669",
    },
    ColorScheme {
        id: "rose",
        name: "Rose",
        value: "#E11D48",
    },
    ColorScheme {
        id: "gray",
        name: "Gray",
        value: "#374151",
    },
];

pub fn find_color(id: &str) -> Option<&'static ColorScheme> {
    COLORS.iter().find(|c| c.id == id.trim())
}

/// Accent hex value for a color id; unknown ids fall back to indigo.
pub fn accent_for(id: &str) -> &'static str {
    find_color(id)
        .or_else(|| find_color(DEFAULT_COLOR))
        .map(|c| c.value)
        .unwrap_or("#4F46E5")
}

/// Catalog entry as served by `GET /api/templates`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub default: bool,
}

pub fn templates() -> Vec<TemplateInfo> {
    TemplateId::ALL
        .iter()
        .map(|t| TemplateInfo {
            id: t.id(),
            name: t.display_name(),
            default: t.id() == DEFAULT_TEMPLATE,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_color() {
        assert_eq!(accent_for("emerald"), "#059669");
    }

    #[test]
    fn test_unknown_color_falls_back_to_indigo() {
        assert_eq!(accent_for("chartreuse"), "#4F46E5");
        assert_eq!(accent_for(""), "#4F46E5");
    }

    #[test]
    fn test_template_resolve() {
        assert_eq!(TemplateId::resolve("modern"), TemplateId::Modern);
        assert_eq!(TemplateId::resolve("baroque"), TemplateId::Professional);
        assert_eq!(TemplateId::parse("baroque"), None);
    }

    #[test]
    fn test_catalog_marks_default() {
        let all = templates();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().filter(|t| t.default).count(), 1);
        assert!(all.iter().any(|t| t.id == "professional" && t.default));
    }
}
