use askama::Template;
use axum::extract::Query;
use serde::Deserialize;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Real Estate",
        href: "/real-estate",
    },
    NavLink {
        label: "Construction",
        href: "/construction",
    },
    NavLink {
        label: "Property Management",
        href: "/property-management",
    },
    NavLink {
        label: "About",
        href: "/about",
    },
    NavLink {
        label: "Contact",
        href: "/contact",
    },
];

/// `?menu=open` keeps the mobile menu expanded across a navigation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub menu: Option<String>,
}

impl MenuQuery {
    pub fn is_open(&self) -> bool {
        self.menu.as_deref() == Some("open")
    }

    /// Menu state from an optional extractor. A query string that does not
    /// parse (such as a repeated `menu`) leaves the menu closed.
    pub fn open_from(query: Option<Query<MenuQuery>>) -> bool {
        query.is_some_and(|Query(menu)| menu.is_open())
    }
}

/// One rendered navigation entry.
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

impl NavItem {
    pub fn class(&self) -> &'static str {
        if self.active {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

/// Top navigation bar for one rendered path.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "partials/nav.html")]
pub struct Navigation {
    current_path: String,
    menu_open: bool,
}

impl Navigation {
    pub fn new(current_path: impl Into<String>, menu_open: bool) -> Self {
        Self {
            current_path: current_path.into(),
            menu_open,
        }
    }

    /// Exact match only; detail pages highlight nothing.
    pub fn is_active(&self, href: &str) -> bool {
        self.current_path == href
    }

    /// Same page with the menu flag flipped.
    pub fn toggle_href(&self) -> String {
        if self.menu_open {
            self.current_path.clone()
        } else {
            format!("{}?menu=open", self.current_path)
        }
    }

    pub fn links(&self) -> Vec<NavItem> {
        NAV_LINKS
            .iter()
            .map(|link| NavItem {
                label: link.label,
                href: link.href,
                active: self.is_active(link.href),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_requires_exact_path() {
        let nav = Navigation::new("/real-estate", false);
        assert!(nav.is_active("/real-estate"));
        assert!(!nav.is_active("/"));

        let detail = Navigation::new("/real-estate/abc", false);
        assert!(!detail.is_active("/real-estate"));
        assert!(detail.links().iter().all(|link| !link.active));
    }

    #[test]
    fn render_marks_only_current_link() {
        let html = Navigation::new("/about", false)
            .render()
            .expect("nav renders");
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains("<a class=\"nav-link active\" href=\"/about\">About</a>"));
    }

    #[test]
    fn toggle_flips_menu_flag() {
        let closed = Navigation::new("/contact", false);
        assert_eq!(closed.toggle_href(), "/contact?menu=open");
        let html = closed.render().expect("nav renders");
        assert!(!html.contains("nav-links mobile"));
        assert!(html.contains("aria-label=\"Open menu\""));

        let open = Navigation::new("/contact", true);
        assert_eq!(open.toggle_href(), "/contact");
        let html = open.render().expect("nav renders");
        assert!(html.contains("nav-links mobile"));
        assert!(html.contains("href=\"/contact\" aria-label=\"Close menu\""));
    }

    #[test]
    fn menu_query_only_opens_on_literal_flag() {
        assert!(MenuQuery {
            menu: Some("open".to_string())
        }
        .is_open());
        assert!(!MenuQuery {
            menu: Some("closed".to_string())
        }
        .is_open());
        assert!(!MenuQuery::default().is_open());
    }

    #[test]
    fn unparsable_menu_query_leaves_menu_closed() {
        assert!(!MenuQuery::open_from(None));
        assert!(MenuQuery::open_from(Some(Query(MenuQuery {
            menu: Some("open".to_string()),
        }))));
    }
}
