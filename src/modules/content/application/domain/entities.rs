use serde::{Deserialize, Serialize};
use std::fmt;

//
// ──────────────────────────────────────────────────────────
// Collections
// ──────────────────────────────────────────────────────────
//

/// The seven content collections the portfolio site is built from.
///
/// Every collection shares the same storage shape (id, display order,
/// timestamps, field bag), so one CRUD implementation serves them all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    Profile,
    Projects,
    Experience,
    Education,
    Skills,
    Faqs,
    SideQuests,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Profile,
        Collection::Projects,
        Collection::Experience,
        Collection::Education,
        Collection::Skills,
        Collection::Faqs,
        Collection::SideQuests,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Collection::Profile => "profile",
            Collection::Projects => "projects",
            Collection::Experience => "experience",
            Collection::Education => "education",
            Collection::Skills => "skills",
            Collection::Faqs => "faqs",
            Collection::SideQuests => "side-quests",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Collections whose entries carry a `category` attribute.
    pub fn requires_category(&self) -> bool {
        matches!(self, Collection::Projects | Collection::Skills)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

//
// ──────────────────────────────────────────────────────────
// Categories
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    NoCode,
    Code,
    Ai,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::NoCode, Category::Code, Category::Ai];

    /// Group label for skills whose stored category is null or unknown.
    pub const FALLBACK: Category = Category::Code;

    pub fn slug(&self) -> &'static str {
        match self {
            Category::NoCode => "no-code",
            Category::Code => "code",
            Category::Ai => "ai",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    pub fn default_image_path(&self) -> &'static str {
        match self {
            Category::NoCode => "/images/defaults/no-code.svg",
            Category::Code => "/images/defaults/code.svg",
            Category::Ai => "/images/defaults/ai.svg",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Display image for entries with no category to derive a default from.
pub const DEFAULT_ENTRY_IMAGE: &str = "/images/defaults/project.svg";
