//! Shared UI components: shell, links, cards.

mod app;
mod footer;
mod header;
mod project_card;
mod route_link;
mod section;

pub use app::*;
pub use footer::*;
pub use header::*;
pub use project_card::*;
pub use route_link::*;
pub use section::*;
