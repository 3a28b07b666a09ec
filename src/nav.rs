//! Navigation
//!
//! Static route table, active-link matching and the mobile menu state
//! machine.

use crate::models::NavLink;

pub const HOME: &str = "/";
pub const WEBSITES: &str = "/websites";
pub const LOGO_DESIGN: &str = "/logo-design";
pub const POSTER_DESIGN: &str = "/poster-design";
pub const AI_REELS: &str = "/ai-reels";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: HOME },
    NavLink { name: "Websites", href: WEBSITES },
    NavLink { name: "Logo Design", href: LOGO_DESIGN },
    NavLink { name: "Poster Design", href: POSTER_DESIGN },
    NavLink { name: "AI Reels", href: AI_REELS },
];

/// Exact path match, no prefix or trailing-slash leniency
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

/// Index of the active link, if any
pub fn active_index(pathname: &str) -> Option<usize> {
    NAV_LINKS.iter().position(|link| is_active(pathname, link.href))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Link selection, Escape and route changes all close the menu
    pub fn dismiss(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_route_activates_exactly_one_link() {
        for link in NAV_LINKS {
            let active: Vec<_> = NAV_LINKS.iter().filter(|l| is_active(link.href, l.href)).collect();
            assert_eq!(active.len(), 1, "{}", link.href);
            assert_eq!(active[0].href, link.href);
        }
    }

    #[test]
    fn test_unknown_path_activates_nothing() {
        for path in ["/contact", "/websites/", "/Websites", "", "/websites/1"] {
            assert!(NAV_LINKS.iter().all(|l| !is_active(path, l.href)), "{}", path);
            assert_eq!(active_index(path), None);
        }
    }

    #[test]
    fn test_no_prefix_matching() {
        assert_eq!(active_index("/"), Some(0));
        assert_eq!(active_index("/ai-reels"), Some(4));
        assert!(!is_active("/websites", HOME));
        assert_eq!(active_index("/websites/x"), None);
        assert_eq!(active_index("/logo-design/1"), None);
    }

    #[test]
    fn test_menu_transitions() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), MenuState::Closed);
        assert_eq!(menu.dismiss(), MenuState::Closed);
        // Escape with the menu already closed changes nothing
        assert_eq!(MenuState::Closed.dismiss(), MenuState::Closed);
    }
}
