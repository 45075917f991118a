//! Routes and project detail resolution.

use std::fmt;

use crate::catalog::{Catalog, ProjectRecord};
use crate::error::CatalogError;

/// A page of the site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    About,
    Projects,
    ProjectDetail { id: String },
    Contact,
    /// Any path that matches no page.
    NotFound { path: String },
}

impl Route {
    /// Parses a path like `/projects/job-portal`.
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        // Page names match case-insensitively; the project id is kept as typed
        match segments.as_slice() {
            [] => Route::Home,
            [page] if page.eq_ignore_ascii_case("about") => Route::About,
            [page] if page.eq_ignore_ascii_case("projects") => Route::Projects,
            [page, id] if page.eq_ignore_ascii_case("projects") => Route::ProjectDetail {
                id: id.to_string(),
            },
            [page] if page.eq_ignore_ascii_case("contact") => Route::Contact,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail { id } => format!("/projects/{id}"),
            Route::Contact => "/contact".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Short page title, used for the window title.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects | Route::ProjectDetail { .. } => "Projects",
            Route::Contact => "Contact",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Route::parse(path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Resolves a `/projects/:id` parameter to its record.
pub fn resolve<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a ProjectRecord, CatalogError> {
    catalog.get(id)
}

/// What the detail page renders for a given id.
///
/// A missing project is recovered here into a fallback view rather than
/// surfaced as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailView<'a> {
    Project(&'a ProjectRecord),
    Fallback {
        message: &'static str,
        back_label: &'static str,
        back_route: Route,
    },
}

impl<'a> DetailView<'a> {
    pub fn for_id(catalog: &'a Catalog, id: &str) -> Self {
        match resolve(catalog, id) {
            Ok(project) => DetailView::Project(project),
            Err(e) => {
                tracing::info!(error = %e, "Rendering project fallback");
                DetailView::Fallback {
                    message: "Project not found",
                    back_label: "Back to projects",
                    back_route: Route::Projects,
                }
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailView::Project(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
        assert_eq!(
            Route::parse("/projects/job-portal"),
            Route::ProjectDetail {
                id: "job-portal".to_string()
            }
        );
        assert_eq!(Route::parse("/contact?ref=footer#form"), Route::Contact);
    }

    #[test]
    fn test_parse_ignores_page_case() {
        assert_eq!(Route::parse("/About"), Route::About);
        assert_eq!(Route::parse("/CONTACT/"), Route::Contact);
        assert_eq!(
            Route::parse("/Projects/Job-Portal"),
            Route::ProjectDetail {
                id: "Job-Portal".to_string()
            }
        );
        assert_eq!(Route::parse("/About").path(), "/about");
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(
            Route::parse("/blog"),
            Route::NotFound {
                path: "/blog".to_string()
            }
        );
        assert!(matches!(
            Route::parse("/projects/a/b"),
            Route::NotFound { .. }
        ));
    }

    #[test]
    fn test_path_roundtrip() {
        for path in ["/", "/about", "/projects", "/projects/portfolio", "/contact"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_resolve() {
        let catalog = Catalog::builtin();
        for record in catalog.all() {
            assert_eq!(resolve(catalog, record.id), Ok(record));
        }
        assert!(matches!(
            resolve(catalog, "does-not-exist"),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn test_detail_view_fallback() {
        let catalog = Catalog::builtin();
        assert!(DetailView::for_id(catalog, "mobile-app").is_found());

        match DetailView::for_id(catalog, "nonexistent-slug") {
            DetailView::Fallback {
                message,
                back_route,
                ..
            } => {
                assert_eq!(message, "Project not found");
                assert_eq!(back_route, Route::Projects);
            }
            DetailView::Project(p) => panic!("unexpected project {}", p.id),
        }
    }
}
