//! Landing page content.

use super::Route;

pub const PRODUCT_NAME: &str = "CollegeSodhpuch";
pub const TAGLINE: &str = "International university and visa guidance platform";

/// Static content of the home page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl HomePage {
    pub fn title(self) -> &'static str {
        PRODUCT_NAME
    }

    pub fn tagline(self) -> &'static str {
        TAGLINE
    }

    /// Introductory lines shown under the tagline.
    pub fn intro(self) -> [&'static str; 2] {
        [
            "Sign in to see your profile on the dashboard.",
            "New here? Register an account first, then log in.",
        ]
    }

    /// Links listed in the navigation bar, in display order.
    pub fn links(self) -> [Route; 3] {
        Route::ALL
    }
}
