//! Content and navigation model for the portfolio site.
//!
//! Everything the pages read or mutate lives here, independent of any
//! rendering backend:
//!
//! - [`Catalog`]: the fixed list of project records, indexed by id
//! - [`filter`]: category narrowing for the projects page
//! - [`Route`] and [`resolve`]: path parsing and detail lookup
//! - [`ThemeState`]: the light/dark preference, persisted through a
//!   [`PreferenceStore`]
//! - [`NavShell`]: current route, history and mobile menu state
//! - [`ContactForm`]: contact form validation and submission
//!
//! # Quick Start
//!
//! ```ignore
//! use portfolio_core::{Catalog, CategorySelection, Category, filter, resolve};
//!
//! let catalog = Catalog::builtin();
//! let mobile = filter(catalog.all(), CategorySelection::Only(Category::Mobile));
//! assert_eq!(mobile[0].id, "mobile-app");
//!
//! let project = resolve(catalog, "job-portal")?;
//! assert_eq!(project.title, "Job Portal");
//! ```

pub mod catalog;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod navigation;
mod projects;
pub mod route;
pub mod storage;
pub mod theme;

pub use catalog::{Catalog, Category, ProjectRecord};
pub use config::SiteConfig;
pub use contact::{ContactForm, ContactMessage, ContactSink, OutboxSink, SubmitStatus};
pub use content::{PROFILE, Profile};
pub use error::{CatalogError, ConfigError, ContactError, PortfolioError, Result, StorageError};
pub use filter::{CategorySelection, ProjectFilterState, filter};
pub use navigation::{NAV_LINKS, NavLink, NavShell};
pub use route::{DetailView, Route, resolve};
pub use storage::{FileStore, MemoryStore, PreferenceStore, UnavailableStore};
pub use theme::{THEME_KEY, ThemeMode, ThemeState};
