//! Static content blocks revealed below the transcript.

use serde::{Deserialize, Serialize};

/// Which static content block is currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSection {
    #[default]
    None,
    Certs,
    Projects,
    Experience,
}

impl ActiveSection {
    /// True when no section is revealed.
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

/// One titled bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SectionContent {
    pub title: String,
    pub items: Vec<String>,
}

impl SectionContent {
    fn from_static(title: &str, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// The three revealable sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCatalog {
    pub certs: SectionContent,
    pub projects: SectionContent,
    pub experience: SectionContent,
}

impl SectionCatalog {
    /// Content for the active section, or `None` when nothing is revealed.
    pub fn get(&self, section: ActiveSection) -> Option<&SectionContent> {
        match section {
            ActiveSection::None => None,
            ActiveSection::Certs => Some(&self.certs),
            ActiveSection::Projects => Some(&self.projects),
            ActiveSection::Experience => Some(&self.experience),
        }
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self {
            certs: default_certs(),
            projects: default_projects(),
            experience: default_experience(),
        }
    }
}

pub(crate) fn default_certs() -> SectionContent {
    SectionContent::from_static(
        "Certifications",
        &[
            "AZ-305: Designing Microsoft Azure Infrastructure Solutions",
            "AZ-900: Microsoft Azure Fundamentals",
            "AWS Certified Cloud Practitioner",
        ],
    )
}

pub(crate) fn default_projects() -> SectionContent {
    SectionContent::from_static(
        "Projects",
        &[
            "Built internal fraud detection chain at BlockFi",
            "Created a clip automation system for livestream highlights",
            "Scaled a personal website into a terminal experience (this!)",
        ],
    )
}

pub(crate) fn default_experience() -> SectionContent {
    SectionContent::from_static(
        "Work Experience",
        &[
            "LGIMA: Quant support in $3.2T firm",
            "Hyatt: 99.9999% uptime marketing systems",
            "BlockFi: Observability, CI/CD, incident mgmt",
            "Medline: Infra automation + HIPAA compliance",
            "Founder: Repair business, GTA servers, branding agency",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_maps_each_section_to_its_block() {
        let catalog = SectionCatalog::default();
        assert!(catalog.get(ActiveSection::None).is_none());
        assert_eq!(
            catalog.get(ActiveSection::Certs).map(|s| s.title.as_str()),
            Some("Certifications")
        );
        assert_eq!(
            catalog.get(ActiveSection::Projects).map(|s| s.items.len()),
            Some(3)
        );
        assert_eq!(
            catalog
                .get(ActiveSection::Experience)
                .map(|s| s.title.as_str()),
            Some("Work Experience")
        );
    }

    #[test]
    fn active_section_serializes_lowercase() {
        let encoded = serde_json::to_string(&ActiveSection::Experience).unwrap();
        assert_eq!(encoded, "\"experience\"");
    }
}
