use askama::Template;
use chrono::{Datelike, Utc};

use super::content::{Company, COMPANY};
use super::nav::Navigation;
use crate::catalog::Category;

/// Per-request page furniture: the navigation state and the footer year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub nav: Navigation,
    pub year: i32,
}

impl Chrome {
    pub fn new(path: impl Into<String>, menu_open: bool) -> Self {
        Self {
            nav: Navigation::new(path, menu_open),
            year: Utc::now().year(),
        }
    }

    pub fn footer(&self) -> Footer {
        Footer {
            year: self.year,
            company: &COMPANY,
            services: Category::ALL,
        }
    }
}

#[derive(Template)]
#[template(path = "partials/footer.html")]
pub struct Footer {
    pub year: i32,
    pub company: &'static Company,
    pub services: [Category; 3],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::pages::not_found_page;

    fn chrome() -> Chrome {
        Chrome {
            nav: Navigation::new("/", false),
            year: 2031,
        }
    }

    #[test]
    fn document_wraps_page_with_chrome() {
        let html = not_found_page(chrome()).render().expect("page renders");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Page Not Found | Khoroush</title>"));
        assert!(html.contains("site-nav"));
        assert!(html.contains("site-footer"));
        assert!(html.contains("IntersectionObserver"));
    }

    #[test]
    fn footer_shows_given_year_and_service_links() {
        let html = chrome().footer().render().expect("footer renders");
        assert!(html.contains("&copy; 2031 Khoroush."));
        assert!(html.contains("href=\"/property-management\""));
        assert!(html.contains("mailto:info@khoroush.ca"));
    }

    #[test]
    fn reveal_sections_stay_visible_without_scripts() {
        let html = not_found_page(chrome()).render().expect("page renders");
        let hidden_rule = html
            .lines()
            .find(|line| line.contains("[data-reveal]{opacity:0"))
            .expect("reveal rule present");
        assert!(hidden_rule.starts_with(".js [data-reveal]"));
        assert!(html.contains("document.documentElement.classList.add('js')"));
        assert!(html.contains(
            "<noscript><style>[data-reveal]{opacity:1;transform:none}</style></noscript>"
        ));
    }
}
