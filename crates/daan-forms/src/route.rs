// File: src/route.rs
// Purpose: Page transitions a form may request

use serde::Serialize;
use std::fmt;

use crate::pages::PageKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Home,
    SignIn,
    SignupOptions,
    Signup(PageKind),
    Donors,
    Campaigns,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::SignupOptions => "/signup-options".to_string(),
            Route::Signup(PageKind::SignIn) => "/signin".to_string(),
            Route::Signup(page) => format!("/signup/{}", page),
            Route::Donors => "/donors".to_string(),
            Route::Campaigns => "/campaigns".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Whatever performs page transitions (router, terminal shell, test spy)
///
/// Forms only ask; they never change pages themselves.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::Signup(PageKind::Ngo).path(), "/signup/ngo");
        assert_eq!(Route::Signup(PageKind::SignIn).path(), "/signin");
    }
}
