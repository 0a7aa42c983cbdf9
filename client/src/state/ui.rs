//! Local UI chrome state (menu, sidebar, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation toggles out of domain state so layouts can
//! evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the site menu, dashboard sidebar and dark mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Mobile navigation drawer on the public site.
    pub menu_open: bool,
    /// Dashboard sidebar; collapsed to icons when closed.
    pub sidebar_open: bool,
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { menu_open: false, sidebar_open: true, dark_mode: false }
    }
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Called on every navigation so the drawer never lingers over a new page.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
