use askama::Template;

use crate::catalog::{CatalogRecord, Metric, StatusBadge};

/// Where a carousel is drawn; detail pages show a placeholder when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselSlot {
    Card,
    Detail,
}

/// Image slides for a record. Navigation controls appear only with two or
/// more images.
#[derive(Debug, Clone, Template)]
#[template(path = "partials/carousel.html")]
pub struct Carousel {
    pub alt: String,
    pub images: Vec<String>,
    pub slot: CarouselSlot,
}

impl Carousel {
    pub fn for_record<R: CatalogRecord>(record: &R, slot: CarouselSlot) -> Self {
        Self {
            alt: record.title().to_string(),
            images: record.image_urls().to_vec(),
            slot,
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.slot == CarouselSlot::Detail
    }
}

/// Summary card linking to the record's detail page.
#[derive(Debug, Clone, Template)]
#[template(path = "partials/card.html")]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub location: String,
    pub href: String,
    pub carousel: Carousel,
    pub badge: StatusBadge,
    pub featured: bool,
    pub metrics: Vec<Metric>,
    pub headline: Option<String>,
}

impl Card {
    pub fn from_record<R: CatalogRecord>(record: &R) -> Self {
        Self {
            id: record.id().to_string(),
            title: record.title().to_string(),
            description: record.description().to_string(),
            kind: record.kind().to_string(),
            location: record.location().to_string(),
            href: record.detail_path(),
            carousel: Carousel::for_record(record, CarouselSlot::Card),
            badge: record.status_badge(),
            featured: record.featured(),
            metrics: record.card_metrics(),
            headline: record.card_headline(),
        }
    }
}
