use serde::{Deserialize, Serialize};

/// A portfolio project card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github: String,
    pub demo: String,
    pub image: String,
}

/// A labelled group of skills shown in the about section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// One entry in the work-history timeline, most recent first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// The five page regions. Each value is both a navigation target and the
/// anchor id of the rendered section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// Page order, which is also the navbar order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// The `id` attribute of the section element this value navigates to.
    pub fn anchor_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Display label for navigation entries.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ids_are_unique() {
        for (i, a) in SectionId::ALL.iter().enumerate() {
            for b in SectionId::ALL.iter().skip(i + 1) {
                assert_ne!(a.anchor_id(), b.anchor_id());
            }
        }
    }

    #[test]
    fn test_labels_match_anchor_ids() {
        for section in SectionId::ALL {
            assert_eq!(
                section.label().to_lowercase(),
                section.anchor_id(),
                "label and anchor id diverge for {section:?}"
            );
        }
    }

    #[test]
    fn test_home_is_first() {
        assert_eq!(SectionId::ALL[0], SectionId::Home);
    }
}
