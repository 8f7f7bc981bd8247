use askama::Template;

use super::cards::{Card, Carousel, CarouselSlot};
use super::content::{
    category_copy, CategoryCopy, Company, Feature, Stat, Testimonial, ABOUT_MISSION,
    ABOUT_STORY, ABOUT_TEAM, BUSINESS_HOURS, COMPANY, HOME_PILLARS, HOME_WHY_POINTS, STATS,
    TESTIMONIALS, VALUES,
};
use super::layout::Chrome;
use crate::catalog::{CatalogError, CatalogRecord, Category, Fact, StatusBadge};
use crate::contact::{ContactForm, ServiceInterest, Toast};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub chrome: Chrome,
    pub pillars: &'static [Feature],
    pub why_points: &'static [&'static str],
    pub stats: &'static [Stat],
    pub testimonials: &'static [Testimonial],
}

pub fn home_page(chrome: Chrome) -> HomePage {
    HomePage {
        chrome,
        pillars: HOME_PILLARS,
        why_points: HOME_WHY_POINTS,
        stats: STATS,
        testimonials: TESTIMONIALS,
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub chrome: Chrome,
    pub story: &'static [&'static str],
    pub stats: &'static [Stat],
    pub values: &'static [Feature],
    pub team: &'static [&'static str],
    pub mission: &'static [&'static str],
}

pub fn about_page(chrome: Chrome) -> AboutPage {
    AboutPage {
        chrome,
        story: ABOUT_STORY,
        stats: STATS,
        values: VALUES,
        team: ABOUT_TEAM,
        mission: ABOUT_MISSION,
    }
}

/// Category landing page: marketing sections around the record grid.
#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogPage {
    pub chrome: Chrome,
    pub category: Category,
    pub copy: &'static CategoryCopy,
    pub cards: Vec<Card>,
    pub failed: bool,
}

impl CatalogPage {
    pub fn plural_lowercase(&self) -> String {
        self.category.plural_noun().to_lowercase()
    }
}

/// A failed fetch renders an error panel in place of the grid.
pub fn catalog_page<R: CatalogRecord>(
    chrome: Chrome,
    records: Result<&[R], &CatalogError>,
) -> CatalogPage {
    let (cards, failed) = match records {
        Ok(records) => (records.iter().map(Card::from_record).collect(), false),
        Err(_) => (Vec::new(), true),
    };
    CatalogPage {
        chrome,
        category: R::CATEGORY,
        copy: category_copy(R::CATEGORY),
        cards,
        failed,
    }
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailPage {
    pub chrome: Chrome,
    pub category: Category,
    pub copy: &'static CategoryCopy,
    pub title: String,
    pub location: String,
    pub carousel: Carousel,
    pub badge: StatusBadge,
    pub featured: bool,
    pub headline: Option<String>,
    pub facts: Vec<Fact>,
    pub paragraphs: Vec<String>,
}

pub fn detail_page<R: CatalogRecord>(chrome: Chrome, record: &R) -> DetailPage {
    DetailPage {
        chrome,
        category: R::CATEGORY,
        copy: category_copy(R::CATEGORY),
        title: record.title().to_string(),
        location: record.location().to_string(),
        carousel: Carousel::for_record(record, CarouselSlot::Detail),
        badge: record.status_badge(),
        featured: record.featured(),
        headline: record.detail_headline(),
        facts: record.detail_facts(),
        paragraphs: paragraphs(record.description()),
    }
}

/// Non-blank lines of free text, one per paragraph.
fn paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Detail id that matched nothing, or a detail fetch that failed.
#[derive(Template)]
#[template(path = "record_missing.html")]
pub struct RecordMissingPage {
    pub chrome: Chrome,
    pub category: Category,
    pub unavailable: bool,
}

impl RecordMissingPage {
    pub fn heading_suffix(&self) -> &'static str {
        if self.unavailable {
            "Unavailable"
        } else {
            "Not Found"
        }
    }

    pub fn noun_lowercase(&self) -> String {
        self.category.noun().to_lowercase()
    }
}

pub fn record_not_found_page(chrome: Chrome, category: Category) -> RecordMissingPage {
    RecordMissingPage {
        chrome,
        category,
        unavailable: false,
    }
}

pub fn record_unavailable_page(chrome: Chrome, category: Category) -> RecordMissingPage {
    RecordMissingPage {
        chrome,
        category,
        unavailable: true,
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub chrome: Chrome,
}

pub fn not_found_page(chrome: Chrome) -> NotFoundPage {
    NotFoundPage { chrome }
}

pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub chrome: Chrome,
    pub company: &'static Company,
    pub hours: &'static [&'static str],
    pub form: ContactForm,
    pub services: Vec<ServiceOption>,
    pub toast: Option<Toast>,
}

/// Contact page with the inquiry form. `form` holds the values to pre-fill and
/// the request token the next post must carry.
pub fn contact_page(chrome: Chrome, form: ContactForm, toast: Option<Toast>) -> ContactPage {
    let selected = ServiceInterest::from_value(&form.service);
    let services = ServiceInterest::ALL
        .into_iter()
        .map(|service| ServiceOption {
            value: service.value(),
            label: service.label(),
            selected: selected == Some(service),
        })
        .collect();
    ContactPage {
        chrome,
        company: &COMPANY,
        hours: BUSINESS_HOURS,
        form,
        services,
        toast,
    }
}
