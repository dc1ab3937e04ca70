//! Typed records for the remote content tables.
//!
//! Rows arrive from PostgREST as JSON and are deserialized into these types
//! at the client boundary. Bilingual text fields default to the empty string
//! when a translation is missing; a row whose shape is otherwise wrong fails
//! the whole query and the calling loader substitutes its empty fallback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// A pair of translations for one piece of content.
///
/// Both languages are always present on the type; a missing value in the
/// stored row becomes an empty string and renders blank. There is no
/// cross-language fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    #[serde(default)]
    pub no: String,
    #[serde(default)]
    pub en: String,
}

impl Bilingual {
    pub fn for_language(&self, language: Language) -> &str {
        match language.code() {
            "en" => &self.en,
            _ => &self.no,
        }
    }
}

/// A portfolio project. `featured` selects the subset shown on the home
/// route; `placement` is the explicit display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: Bilingual,
    pub description: Bilingual,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub placement: i64,
    #[serde(default)]
    pub featured: bool,
}

/// Partial update for a project row, written by the admin surface.
/// Absent fields are left untouched by PostgREST.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Bilingual>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Bilingual>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    #[serde(default)]
    pub title_no: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub date_no: String,
    #[serde(default)]
    pub date_en: String,
    #[serde(default)]
    pub description_no: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub placement: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    #[serde(default)]
    pub title_no: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub placement: i64,
}

/// A technology name mapped to its display color. The name is the unique
/// key; tags without an entry are candidates for the color suggestion
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechColor {
    pub name: String,
    pub color: String,
}

/// Singleton site settings row: bio, contact fields, profile links and
/// hero/footer text in both languages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub bio_no: String,
    #[serde(default)]
    pub bio_en: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub location_text: String,
    #[serde(default)]
    pub location_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub hero_title_no: String,
    #[serde(default)]
    pub hero_title_en: String,
    #[serde(default)]
    pub hero_subtitle_no: String,
    #[serde(default)]
    pub hero_subtitle_en: String,
    #[serde(default)]
    pub footer_description_no: String,
    #[serde(default)]
    pub footer_description_en: String,
    #[serde(default)]
    pub seo_description_no: String,
    #[serde(default)]
    pub seo_description_en: String,
    #[serde(default)]
    pub github_username: String,
    #[serde(default)]
    pub full_name: String,
}

/// The authenticated user reported by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

/// Opaque proof of authentication. Presence of a valid session gates the
/// admin routes; the token is forwarded on admin queries so row-level
/// security applies to them.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Bilingual Tests ====================

    #[test]
    fn test_bilingual_selects_language() {
        let text = Bilingual {
            no: "Hjem".to_string(),
            en: "Home".to_string(),
        };

        assert_eq!(text.for_language(Language::NORWEGIAN), "Hjem");
        assert_eq!(text.for_language(Language::ENGLISH), "Home");
    }

    #[test]
    fn test_bilingual_missing_translation_renders_blank() {
        let json = r#"{"no": "Bare norsk"}"#;
        let text: Bilingual = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(text.for_language(Language::NORWEGIAN), "Bare norsk");
        // No fallback to the other language
        assert_eq!(text.for_language(Language::ENGLISH), "");
    }

    #[test]
    fn test_bilingual_roundtrip() {
        let original = Bilingual {
            no: "Prosjekter".to_string(),
            en: "Projects".to_string(),
        };

        let json = serde_json::to_string(&original).expect("serialize");
        let restored: Bilingual = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(original, restored);
    }

    // ==================== Project Tests ====================

    #[test]
    fn test_project_deserialization() {
        let json = r#"{
            "id": 1,
            "title": {"no": "Nettbutikk", "en": "Web shop"},
            "description": {"no": "En butikk", "en": "A shop"},
            "technologies": ["Rust", "Svelte"],
            "image": "https://example.com/shop.png",
            "link": "https://github.com/example/shop",
            "placement": 2,
            "featured": true
        }"#;

        let project: Project = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(project.id, 1);
        assert_eq!(project.title.en, "Web shop");
        assert_eq!(project.technologies, vec!["Rust", "Svelte"]);
        assert_eq!(project.placement, 2);
        assert!(project.featured);
    }

    #[test]
    fn test_project_defaults_for_optional_columns() {
        let json = r#"{
            "id": 7,
            "title": {"no": "Test", "en": "Test"},
            "description": {}
        }"#;

        let project: Project = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(project.placement, 0);
        assert!(!project.featured);
        assert!(project.technologies.is_empty());
        assert_eq!(project.image, "");
    }

    #[test]
    fn test_project_missing_id_is_rejected() {
        let json = r#"{"title": {"no": "x", "en": "x"}, "description": {}}"#;
        let result: Result<Project, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_patch_skips_absent_fields() {
        let patch = ProjectPatch {
            placement: Some(5),
            ..Default::default()
        };

        let json = serde_json::to_string(&patch).expect("serialize");
        assert_eq!(json, r#"{"placement":5}"#);
    }

    // ==================== Experience/Education Tests ====================

    #[test]
    fn test_experience_deserialization() {
        let json = r#"{
            "id": 3,
            "title_no": "Utvikler",
            "title_en": "Developer",
            "company": "Acme",
            "date_no": "2022 - na",
            "date_en": "2022 - present",
            "description_no": "Jobbet med backend",
            "description_en": "Worked on backend",
            "placement": 1
        }"#;

        let experience: Experience = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(experience.company, "Acme");
        assert_eq!(experience.title_en, "Developer");
        assert_eq!(experience.placement, 1);
    }

    #[test]
    fn test_education_missing_translation_defaults_empty() {
        let json = r#"{"id": 1, "title_no": "Bachelor", "institution": "NTNU", "date": "2024", "placement": 1}"#;
        let education: Education = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(education.title_no, "Bachelor");
        assert_eq!(education.title_en, "");
    }

    // ==================== TechColor/SiteSettings Tests ====================

    #[test]
    fn test_tech_color_roundtrip() {
        let original = TechColor {
            name: "Rust".to_string(),
            color: "#CE422B".to_string(),
        };

        let json = serde_json::to_string(&original).expect("serialize");
        let restored: TechColor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(original, restored);
    }

    #[test]
    fn test_site_settings_tolerates_sparse_row() {
        let json = r#"{"id": 1, "full_name": "Daniel", "contact_email": "daniel@example.com"}"#;
        let settings: SiteSettings = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(settings.full_name, "Daniel");
        assert_eq!(settings.bio_no, "");
        assert_eq!(settings.github_url, "");
    }

    // ==================== Session Tests ====================

    #[test]
    fn test_session_user_deserialization() {
        let json = r#"{
            "id": "0b9f1c2e-aaaa-bbbb-cccc-1234567890ab",
            "email": "admin@example.com",
            "last_sign_in_at": "2025-05-01T10:30:00Z"
        }"#;

        let user: SessionUser = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(user.email.as_deref(), Some("admin@example.com"));
        assert!(user.last_sign_in_at.is_some());
    }

    #[test]
    fn test_session_user_minimal() {
        let json = r#"{"id": "abc"}"#;
        let user: SessionUser = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(user.id, "abc");
        assert!(user.email.is_none());
        assert!(user.last_sign_in_at.is_none());
    }
}
