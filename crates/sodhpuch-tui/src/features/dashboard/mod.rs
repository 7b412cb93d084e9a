//! Dashboard page slice.

mod render;
mod update;

pub use render::render_dashboard_page;
use sodhpuch_core::pages::dashboard::DashboardView;
pub use update::{DashboardAction, handle_key};

/// Dashboard page state.
///
/// `visit` increases every time the page is entered; results tagged with an
/// older visit are stale and get dropped.
#[derive(Debug, Clone, Default)]
pub struct DashboardPageState {
    pub view: DashboardView,
    pub visit: u64,
}

impl DashboardPageState {
    /// Starts a new visit and returns its id.
    pub fn start_visit(&mut self) -> u64 {
        self.visit += 1;
        self.view = DashboardView::Loading;
        self.visit
    }

    pub fn is_current(&self, visit: u64) -> bool {
        self.visit == visit
    }
}
