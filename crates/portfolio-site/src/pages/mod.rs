//! One component per route.

mod about;
mod contact;
mod home;
mod not_found;
mod project_detail;
mod projects;

pub use about::*;
pub use contact::*;
pub use home::*;
pub use not_found::*;
pub use project_detail::*;
pub use projects::*;
