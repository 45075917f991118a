//! Category filtering for the projects page.

use std::fmt;

use crate::catalog::{Catalog, Category, ProjectRecord};

/// The category tab selected on the projects page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    /// Wildcard: every record passes.
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    /// Selections in tab order.
    pub fn options() -> [CategorySelection; 4] {
        [
            CategorySelection::All,
            CategorySelection::Only(Category::Frontend),
            CategorySelection::Only(Category::FullStack),
            CategorySelection::Only(Category::Mobile),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategorySelection::All => "All",
            CategorySelection::Only(category) => category.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<CategorySelection> {
        if label == "All" {
            return Some(CategorySelection::All);
        }
        Category::from_label(label).map(CategorySelection::Only)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Narrows `records` to the selected category, preserving order.
pub fn filter(records: &[ProjectRecord], selection: CategorySelection) -> Vec<&ProjectRecord> {
    let matched: Vec<&ProjectRecord> = records
        .iter()
        .filter(|r| selection.matches(r.category))
        .collect();
    tracing::debug!(
        selection = %selection,
        matched = matched.len(),
        total = records.len(),
        "Filtered projects"
    );
    matched
}

/// Page-local filter state: the selected tab and the mobile dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilterState {
    pub selected: CategorySelection,
    pub dropdown_open: bool,
}

impl ProjectFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a category. Closes the dropdown.
    pub fn select(&mut self, selection: CategorySelection) {
        self.selected = selection;
        self.dropdown_open = false;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn is_selected(&self, selection: CategorySelection) -> bool {
        self.selected == selection
    }

    /// Applies the current selection to a catalog.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProjectRecord> {
        filter(catalog.all(), self.selected)
    }

    /// "Showing N of M projects".
    pub fn summary(&self, catalog: &Catalog) -> String {
        format!(
            "Showing {} of {} projects",
            self.apply(catalog).len(),
            catalog.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&ProjectRecord]) -> Vec<&'static str> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let catalog = Catalog::builtin();
        let all = filter(catalog.all(), CategorySelection::All);
        assert_eq!(all.len(), catalog.len());
        for (filtered, original) in all.iter().zip(catalog.all()) {
            assert_eq!(*filtered, original);
        }
    }

    #[test]
    fn test_each_category() {
        let catalog = Catalog::builtin();
        for category in Category::all() {
            let matched = filter(catalog.all(), CategorySelection::Only(*category));
            assert!(matched.iter().all(|r| r.category == *category));

            let expected: Vec<_> = catalog
                .all()
                .iter()
                .filter(|r| r.category == *category)
                .map(|r| r.id)
                .collect();
            assert_eq!(ids(&matched), expected);
        }
    }

    #[test]
    fn test_full_stack_order() {
        let catalog = Catalog::builtin();
        let matched = filter(catalog.all(), CategorySelection::Only(Category::FullStack));
        assert_eq!(ids(&matched), ["job-portal", "event-booking", "lynkt-admin"]);
    }

    #[test]
    fn test_repeated_filter_is_stable() {
        let catalog = Catalog::builtin();
        let selection = CategorySelection::Only(Category::Frontend);
        let first = ids(&filter(catalog.all(), selection));
        let second = ids(&filter(catalog.all(), selection));
        assert_eq!(first, second);
        assert_eq!(first, ["portfolio"]);
    }

    #[test]
    fn test_selection_labels() {
        let labels: Vec<_> = CategorySelection::options().iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["All", "Frontend", "Full Stack", "Mobile"]);
        for option in CategorySelection::options() {
            assert_eq!(CategorySelection::from_label(option.label()), Some(option));
        }
        assert_eq!(CategorySelection::from_label("Desktop"), None);
    }

    #[test]
    fn test_filter_state() {
        let catalog = Catalog::builtin();
        let mut state = ProjectFilterState::new();
        assert_eq!(state.selected, CategorySelection::All);
        assert_eq!(state.summary(catalog), "Showing 5 of 5 projects");

        state.toggle_dropdown();
        assert!(state.dropdown_open);

        state.select(CategorySelection::Only(Category::Mobile));
        assert!(!state.dropdown_open);
        assert!(state.is_selected(CategorySelection::Only(Category::Mobile)));
        assert_eq!(state.summary(catalog), "Showing 1 of 5 projects");

        // Last selection wins
        state.select(CategorySelection::Only(Category::FullStack));
        state.select(CategorySelection::All);
        assert_eq!(state.apply(catalog).len(), 5);
    }
}
