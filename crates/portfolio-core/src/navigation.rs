//! Navigation shell state: current route, history, mobile menu.

use crate::route::Route;

/// Maximum number of routes kept for `back()`.
const MAX_HISTORY: usize = 50;

/// An entry in the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Primary navigation, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", path: "/" },
    NavLink { label: "About", path: "/about" },
    NavLink { label: "Projects", path: "/projects" },
    NavLink { label: "Contact", path: "/contact" },
];

/// Header/menu state shared by every page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavShell {
    route: Route,
    menu_open: bool,
    history: Vec<Route>,
}

impl NavShell {
    pub fn new(initial: Route) -> Self {
        Self {
            route: initial,
            menu_open: false,
            history: Vec::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }

    /// Moves to `route`. The menu always closes.
    pub fn navigate(&mut self, route: Route) {
        self.menu_open = false;
        if route == self.route {
            return;
        }

        tracing::info!(from = %self.route, to = %route, "Navigating");
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
    }

    /// Parses `path` and navigates to it.
    pub fn navigate_to(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    /// Returns to the previous route. Returns false when there is none.
    pub fn back(&mut self) -> bool {
        self.menu_open = false;
        match self.history.pop() {
            Some(previous) => {
                tracing::info!(from = %self.route, to = %previous, "Navigating back");
                self.route = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Exact match between the current path and a link target.
    pub fn is_active(&self, target: &str) -> bool {
        self.route.path() == target
    }
}
