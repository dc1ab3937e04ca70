//! Static translation tables.
//!
//! One `Translation` per language, nested by page section. Consumers either
//! take the section structs directly or resolve a dotted `section.key` path
//! via [`lookup`], which answers the empty string for unknown paths instead
//! of failing. Structural parity between the two tables is guaranteed by
//! the shared type.

use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct Translation {
    pub nav: Nav,
    pub hero: Hero,
    pub projects: Projects,
    pub about: About,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone)]
pub struct Nav {
    pub home: &'static str,
    pub projects: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone)]
pub struct Projects {
    pub title: &'static str,
    pub description: &'static str,
    pub view_project: &'static str,
}

#[derive(Debug, Clone)]
pub struct About {
    pub title: &'static str,
    pub background: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
}

#[derive(Debug, Clone)]
pub struct Contact {
    pub title: &'static str,
    pub description: &'static str,
    pub send: &'static str,
}

#[derive(Debug, Clone)]
pub struct Footer {
    pub rights: &'static str,
    pub email: &'static str,
    pub contact: &'static str,
    pub navigation: &'static str,
    pub description: &'static str,
}

impl Translation {
    /// Resolve a dotted `section.key` path. Unknown sections or keys answer
    /// the empty string; this must never panic on user-supplied paths.
    pub fn get(&self, path: &str) -> &'static str {
        let mut parts = path.splitn(2, '.');
        let (Some(section), Some(key)) = (parts.next(), parts.next()) else {
            return "";
        };

        match section {
            "nav" => match key {
                "home" => self.nav.home,
                "projects" => self.nav.projects,
                "about" => self.nav.about,
                "contact" => self.nav.contact,
                _ => "",
            },
            "hero" => match key {
                "title" => self.hero.title,
                "subtitle" => self.hero.subtitle,
                _ => "",
            },
            "projects" => match key {
                "title" => self.projects.title,
                "description" => self.projects.description,
                "viewProject" => self.projects.view_project,
                _ => "",
            },
            "about" => match key {
                "title" => self.about.title,
                "background" => self.about.background,
                "experience" => self.about.experience,
                "education" => self.about.education,
                _ => "",
            },
            "contact" => match key {
                "title" => self.contact.title,
                "description" => self.contact.description,
                "send" => self.contact.send,
                _ => "",
            },
            "footer" => match key {
                "rights" => self.footer.rights,
                "email" => self.footer.email,
                "contact" => self.footer.contact,
                "navigation" => self.footer.navigation,
                "description" => self.footer.description,
                _ => "",
            },
            _ => "",
        }
    }
}

/// The translation table for a language.
pub fn translations(language: Language) -> &'static Translation {
    match language.code() {
        "en" => &ENGLISH,
        _ => &NORWEGIAN,
    }
}

/// Resolve a dotted key path in the given language.
pub fn lookup(language: Language, path: &str) -> &'static str {
    translations(language).get(path)
}

// ==================== Norwegian (canonical) ====================

pub const NORWEGIAN: Translation = Translation {
    nav: Nav {
        home: "Hjem",
        projects: "Prosjekter",
        about: "Om meg",
        contact: "Kontakt",
    },
    hero: Hero {
        title: "Hei, jeg er Daniel",
        subtitle: "Full-Stack Utvikler & Designer",
    },
    projects: Projects {
        title: "Mine Prosjekter",
        description: "Her er noen av prosjektene jeg har jobbet med",
        view_project: "Se prosjekt",
    },
    about: About {
        title: "Om Meg",
        background: "Bakgrunn",
        experience: "Erfaring",
        education: "Utdanning",
    },
    contact: Contact {
        title: "Ta Kontakt",
        description: "Send meg en melding",
        send: "Send Melding",
    },
    footer: Footer {
        rights: "Alle rettigheter reservert.",
        email: "E-post",
        contact: "Kontakt",
        navigation: "Navigasjon",
        description:
            "Full-Stack Utvikler & Designer med fokus på moderne webteknologier og brukeropplevelse.",
    },
};

// ==================== English ====================

pub const ENGLISH: Translation = Translation {
    nav: Nav {
        home: "Home",
        projects: "Projects",
        about: "About",
        contact: "Contact",
    },
    hero: Hero {
        title: "Hi, I'm Daniel",
        subtitle: "Full-Stack Developer & Designer",
    },
    projects: Projects {
        title: "My Projects",
        description: "Here are some of the projects I've worked on",
        view_project: "View project",
    },
    about: About {
        title: "About Me",
        background: "Background",
        experience: "Experience",
        education: "Education",
    },
    contact: Contact {
        title: "Get in Touch",
        description: "Send me a message",
        send: "Send Message",
    },
    footer: Footer {
        rights: "All rights reserved.",
        email: "Email",
        contact: "Contact",
        navigation: "Navigation",
        description:
            "Full-Stack Developer & Designer focusing on modern web technologies and user experience.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Every dotted key path the tables expose.
    const ALL_KEYS: &[&str] = &[
        "nav.home",
        "nav.projects",
        "nav.about",
        "nav.contact",
        "hero.title",
        "hero.subtitle",
        "projects.title",
        "projects.description",
        "projects.viewProject",
        "about.title",
        "about.background",
        "about.experience",
        "about.education",
        "contact.title",
        "contact.description",
        "contact.send",
        "footer.rights",
        "footer.email",
        "footer.contact",
        "footer.navigation",
        "footer.description",
    ];

    // ==================== Parity Tests ====================

    #[test]
    fn test_every_key_present_in_both_languages() {
        for key in ALL_KEYS {
            assert!(
                !NORWEGIAN.get(key).is_empty(),
                "Norwegian is missing '{}'",
                key
            );
            assert!(!ENGLISH.get(key).is_empty(), "English is missing '{}'", key);
        }
    }

    #[test]
    fn test_languages_actually_differ() {
        // A translated table that equals the canonical one is a copy-paste
        // mistake, not a translation
        let differing = ALL_KEYS
            .iter()
            .filter(|key| NORWEGIAN.get(key) != ENGLISH.get(key))
            .count();
        assert!(differing > ALL_KEYS.len() / 2);
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(lookup(Language::NORWEGIAN, "nav.home"), "Hjem");
        assert_eq!(lookup(Language::ENGLISH, "nav.home"), "Home");
        assert_eq!(lookup(Language::NORWEGIAN, "about.education"), "Utdanning");
        assert_eq!(lookup(Language::ENGLISH, "about.education"), "Education");
    }

    #[test]
    fn test_unknown_key_is_empty_not_panic() {
        assert_eq!(lookup(Language::NORWEGIAN, "nav.missing"), "");
        assert_eq!(lookup(Language::ENGLISH, "bogus.key"), "");
    }

    #[test]
    fn test_path_without_dot_is_empty() {
        assert_eq!(lookup(Language::NORWEGIAN, "nav"), "");
        assert_eq!(lookup(Language::ENGLISH, ""), "");
    }

    #[test]
    fn test_extra_dots_resolve_against_first_section() {
        // "nav.home.extra" splits into ("nav", "home.extra"), an unknown key
        assert_eq!(lookup(Language::NORWEGIAN, "nav.home.extra"), "");
    }

    #[test]
    fn test_translations_selects_table() {
        assert_eq!(translations(Language::NORWEGIAN).hero.title, "Hei, jeg er Daniel");
        assert_eq!(translations(Language::ENGLISH).hero.title, "Hi, I'm Daniel");
    }
}
