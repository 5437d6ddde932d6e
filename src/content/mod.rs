//! Résumé content model consumed by the template layer

use serde::{Deserialize, Serialize};

/// Unique identifier for a résumé section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(pub u32);

/// One dated entry inside a section (a job, a degree, a project)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Primary line, e.g. a role or degree name
    pub heading: String,
    /// Secondary line, e.g. employer and date range
    pub meta: String,
    /// Bullet points under the entry
    pub bullets: Vec<String>,
}

impl Entry {
    /// Create an entry with no bullets
    pub fn new(heading: impl Into<String>, meta: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            meta: meta.into(),
            bullets: Vec::new(),
        }
    }

    /// Add a bullet point
    pub fn with_bullet(mut self, text: impl Into<String>) -> Self {
        self.bullets.push(text.into());
        self
    }
}

/// A titled, identifiable section of the résumé
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSection {
    /// Stable id assigned by the hosting editor
    pub id: SectionId,
    /// Display title, e.g. "Experience"
    pub title: String,
    /// Entries in display order
    pub entries: Vec<Entry>,
}

impl ResumeSection {
    /// Create a section with no entries
    pub fn new(id: SectionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Add an entry
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }
}

/// The full résumé content handed to a template.
///
/// This is a plain value object: the engine replaces it wholesale on every
/// content change and never edits it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Candidate name shown in the header
    pub full_name: String,
    /// One-line professional headline
    pub headline: String,
    /// Contact fragments (email, phone, links), joined by the template
    pub contact: Vec<String>,
    /// Sections in display order
    pub sections: Vec<ResumeSection>,
}

impl Resume {
    /// Look up a section by id
    pub fn section(&self, id: SectionId) -> Option<&ResumeSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Check whether there is anything to render
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.headline.is_empty() && self.sections.is_empty()
    }
}
