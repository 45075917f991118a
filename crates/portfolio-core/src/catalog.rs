//! The project catalog.
//!
//! Records are defined once at load time and never mutated. Lookup by id
//! goes through a hash index built alongside the ordered record list, so
//! both "in definition order" and "by slug" reads are cheap.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::CatalogError;
use crate::projects::PROJECTS;

/// Project category. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Frontend,
    FullStack,
    Mobile,
}

impl Category {
    /// Returns the display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::FullStack => "Full Stack",
            Category::Mobile => "Mobile",
        }
    }

    /// Parses a display label back into a category.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::all().iter().copied().find(|c| c.label() == label)
    }

    /// Returns all categories in tab order.
    pub fn all() -> &'static [Category] {
        &[Category::Frontend, Category::FullStack, Category::Mobile]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single project shown in the gallery and on its detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Unique slug, used in `/projects/:id`.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub category: Category,
    /// Display order matters; duplicates are allowed.
    pub technologies: &'static [&'static str],
    /// Local asset path or external URL.
    pub image: &'static str,
    pub live_link: Option<&'static str>,
    pub github_link: Option<&'static str>,
    pub features: &'static [&'static str],
    pub challenges_solved: &'static str,
    /// When false, live/source actions stay hidden even if links exist.
    pub show_external_links: bool,
    /// Shown in the home page's featured strip.
    pub featured: bool,
}

impl ProjectRecord {
    /// The live link, if present and allowed to be shown.
    pub fn visible_live_link(&self) -> Option<&'static str> {
        self.live_link.filter(|_| self.show_external_links)
    }

    /// The source link, if present and allowed to be shown.
    pub fn visible_github_link(&self) -> Option<&'static str> {
        self.github_link.filter(|_| self.show_external_links)
    }

    /// Path of this project's detail page.
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }

    /// Whether the image points at an external URL rather than a bundled asset.
    pub fn has_remote_image(&self) -> bool {
        self.image.starts_with("http://") || self.image.starts_with("https://")
    }
}

/// Immutable, ordered collection of project records indexed by id.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    index: HashMap<&'static str, usize>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_records(PROJECTS.to_vec()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Built-in project table is invalid, serving an empty catalog");
        Catalog::default()
    })
});

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.id, pos).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: record.id.to_string(),
                });
            }
        }
        Ok(Self { records, index })
    }

    /// The catalog compiled into the site.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All records in definition order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Result<&ProjectRecord, CatalogError> {
        match self.index.get(id) {
            Some(&pos) => Ok(&self.records[pos]),
            None => {
                tracing::debug!(id, "Project lookup missed");
                Err(CatalogError::NotFound { id: id.to_string() })
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Records flagged for the home page, in definition order.
    pub fn featured(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter().filter(|r| r.featured)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
