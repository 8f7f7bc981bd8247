use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::format;

/// The three record families the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    RealEstate,
    Construction,
    PropertyManagement,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::RealEstate,
        Category::Construction,
        Category::PropertyManagement,
    ];

    /// Backing table in the hosted data store.
    pub fn table(self) -> &'static str {
        match self {
            Category::RealEstate => "real_estate_listings",
            Category::Construction => "construction_projects",
            Category::PropertyManagement => "managed_properties",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::RealEstate => "real-estate",
            Category::Construction => "construction",
            Category::PropertyManagement => "property-management",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Category::RealEstate => "/real-estate",
            Category::Construction => "/construction",
            Category::PropertyManagement => "/property-management",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::RealEstate => "Real Estate",
            Category::Construction => "Construction",
            Category::PropertyManagement => "Property Management",
        }
    }

    /// Singular noun used in page copy ("Listing Not Found").
    pub fn noun(self) -> &'static str {
        match self {
            Category::RealEstate => "Listing",
            Category::Construction => "Project",
            Category::PropertyManagement => "Property",
        }
    }

    pub fn plural_noun(self) -> &'static str {
        match self {
            Category::RealEstate => "Listings",
            Category::Construction => "Projects",
            Category::PropertyManagement => "Properties",
        }
    }

    /// Badge text on a featured record's detail page.
    pub fn featured_label(self) -> &'static str {
        match self {
            Category::Construction => "Featured Project",
            Category::RealEstate | Category::PropertyManagement => "Featured Property",
        }
    }

    pub fn detail_path(self, id: &str) -> String {
        format!("{}/{}", self.path(), id)
    }

    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == raw.trim())
    }
}

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub variant: BadgeVariant,
}

/// Sale status of a real estate listing. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ListingStatus {
    Available,
    Pending,
    Other(String),
}

impl ListingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Pending => "pending",
            ListingStatus::Other(raw) => raw,
        }
    }

    pub fn badge(&self) -> StatusBadge {
        let variant = match self {
            ListingStatus::Available => BadgeVariant::Default,
            ListingStatus::Pending => BadgeVariant::Secondary,
            ListingStatus::Other(_) => BadgeVariant::Outline,
        };
        StatusBadge {
            label: self.as_str().to_string(),
            variant,
        }
    }
}

impl From<String> for ListingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => Self::Available,
            "pending" => Self::Pending,
            _ => Self::Other(value),
        }
    }
}

impl From<ListingStatus> for String {
    fn from(value: ListingStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Build status of a construction project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Other(raw) => raw,
        }
    }

    pub fn badge(&self) -> StatusBadge {
        let variant = match self {
            ProjectStatus::Completed => BadgeVariant::Default,
            ProjectStatus::InProgress => BadgeVariant::Secondary,
            ProjectStatus::Other(_) => BadgeVariant::Outline,
        };
        StatusBadge {
            label: self.as_str().replacen('_', " ", 1),
            variant,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => Self::Completed,
            "in_progress" => Self::InProgress,
            _ => Self::Other(value),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Whether a property is under active management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ManagementStatus {
    Active,
    Other(String),
}

impl ManagementStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ManagementStatus::Active => "active",
            ManagementStatus::Other(raw) => raw,
        }
    }

    pub fn badge(&self) -> StatusBadge {
        let variant = match self {
            ManagementStatus::Active => BadgeVariant::Default,
            ManagementStatus::Other(_) => BadgeVariant::Secondary,
        };
        StatusBadge {
            label: self.as_str().to_string(),
            variant,
        }
    }
}

impl From<String> for ManagementStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => Self::Active,
            _ => Self::Other(value),
        }
    }
}

impl From<ManagementStatus> for String {
    fn from(value: ManagementStatus) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricIcon {
    Bed,
    Bath,
    Area,
    Calendar,
    Units,
}

impl MetricIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricIcon::Bed => "bed",
            MetricIcon::Bath => "bath",
            MetricIcon::Area => "area",
            MetricIcon::Calendar => "calendar",
            MetricIcon::Units => "units",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            MetricIcon::Bed => "\u{1F6CF}",
            MetricIcon::Bath => "\u{1F6C1}",
            MetricIcon::Area => "\u{25A2}",
            MetricIcon::Calendar => "\u{1F4C5}",
            MetricIcon::Units => "\u{1F3E2}",
        }
    }
}

/// One short line in a card's metrics row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub icon: MetricIcon,
    pub text: String,
}

/// Labelled value in a detail page's facts grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

/// Shared display contract for every record family, so cards and detail pages
/// are rendered by one generic implementation.
pub trait CatalogRecord: DeserializeOwned + Serialize + Send + Sync + 'static {
    const CATEGORY: Category;

    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    /// Property or project type shown as an outline tag.
    fn kind(&self) -> &str;
    fn location(&self) -> &str;
    fn image_urls(&self) -> &[String];
    fn status_badge(&self) -> StatusBadge;
    fn featured(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
    fn card_metrics(&self) -> Vec<Metric>;
    /// Price, rent, or budget line at the foot of a card.
    fn card_headline(&self) -> Option<String>;

    fn detail_headline(&self) -> Option<String> {
        self.card_headline()
    }

    fn detail_facts(&self) -> Vec<Fact>;

    fn detail_path(&self) -> String {
        Self::CATEGORY.detail_path(self.id())
    }
}

/// Featured records first, then newest first. Stable for equal keys.
pub fn sort_for_display<R: CatalogRecord>(records: &mut [R]) {
    records.sort_by(|a, b| {
        b.featured()
            .cmp(&a.featured())
            .then_with(|| b.created_at().cmp(&a.created_at()))
    });
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let urls = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(urls.unwrap_or_default())
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn positive_u32(value: Option<u32>) -> Option<u32> {
    value.filter(|n| *n > 0)
}

fn positive_f64(value: Option<f64>) -> Option<f64> {
    value.filter(|n| *n > 0.0)
}

fn area_metric(square_feet: Option<u32>) -> Option<Metric> {
    positive_u32(square_feet).map(|area| Metric {
        icon: MetricIcon::Area,
        text: format!("{} sq ft", format::thousands(u64::from(area))),
    })
}

fn area_fact(square_feet: Option<u32>) -> Option<Fact> {
    positive_u32(square_feet).map(|area| Fact {
        label: "Square Feet",
        value: format::thousands(u64::from(area)),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealEstateListing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub location: String,
    pub property_type: String,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub square_feet: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_urls: Vec<String>,
    pub status: ListingStatus,
    #[serde(default, deserialize_with = "null_as_false")]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl CatalogRecord for RealEstateListing {
    const CATEGORY: Category = Category::RealEstate;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> &str {
        &self.property_type
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    fn status_badge(&self) -> StatusBadge {
        self.status.badge()
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn card_metrics(&self) -> Vec<Metric> {
        let mut metrics = Vec::new();
        if let Some(bedrooms) = positive_u32(self.bedrooms) {
            metrics.push(Metric {
                icon: MetricIcon::Bed,
                text: bedrooms.to_string(),
            });
        }
        if let Some(bathrooms) = positive_f64(self.bathrooms) {
            metrics.push(Metric {
                icon: MetricIcon::Bath,
                text: format::number(bathrooms),
            });
        }
        metrics.extend(area_metric(self.square_feet));
        metrics
    }

    fn card_headline(&self) -> Option<String> {
        Some(format::money(self.price))
    }

    fn detail_facts(&self) -> Vec<Fact> {
        let mut facts = vec![Fact {
            label: "Type",
            value: self.property_type.clone(),
        }];
        if let Some(bedrooms) = positive_u32(self.bedrooms) {
            facts.push(Fact {
                label: "Bedrooms",
                value: bedrooms.to_string(),
            });
        }
        if let Some(bathrooms) = positive_f64(self.bathrooms) {
            facts.push(Fact {
                label: "Bathrooms",
                value: format::number(bathrooms),
            });
        }
        facts.extend(area_fact(self.square_feet));
        facts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionProject {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub project_type: String,
    pub location: String,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub square_feet: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_urls: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "null_as_false")]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl ConstructionProject {
    fn budget(&self) -> Option<&str> {
        self.budget_range
            .as_deref()
            .map(str::trim)
            .filter(|budget| !budget.is_empty())
    }
}

impl CatalogRecord for ConstructionProject {
    const CATEGORY: Category = Category::Construction;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> &str {
        &self.project_type
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    fn status_badge(&self) -> StatusBadge {
        self.status.badge()
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn card_metrics(&self) -> Vec<Metric> {
        let mut metrics = Vec::new();
        if let Some(date) = self.completion_date {
            metrics.push(Metric {
                icon: MetricIcon::Calendar,
                text: format!("Completed: {}", format::short_date(date)),
            });
        }
        metrics.extend(area_metric(self.square_feet));
        metrics
    }

    fn card_headline(&self) -> Option<String> {
        self.budget().map(str::to_string)
    }

    // The budget already sits in the facts grid on the detail page.
    fn detail_headline(&self) -> Option<String> {
        None
    }

    fn detail_facts(&self) -> Vec<Fact> {
        let mut facts = vec![Fact {
            label: "Type",
            value: self.project_type.clone(),
        }];
        if let Some(date) = self.completion_date {
            facts.push(Fact {
                label: "Completion Date",
                value: format::short_date(date),
            });
        }
        facts.extend(area_fact(self.square_feet));
        if let Some(budget) = self.budget() {
            facts.push(Fact {
                label: "Budget Range",
                value: budget.to_string(),
            });
        }
        facts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedProperty {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub property_type: String,
    pub location: String,
    #[serde(default)]
    pub units: Option<u32>,
    #[serde(default)]
    pub monthly_rent: Option<f64>,
    #[serde(default)]
    pub square_feet: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_urls: Vec<String>,
    pub management_status: ManagementStatus,
    #[serde(default, deserialize_with = "null_as_false")]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl CatalogRecord for ManagedProperty {
    const CATEGORY: Category = Category::PropertyManagement;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> &str {
        &self.property_type
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    fn status_badge(&self) -> StatusBadge {
        self.management_status.badge()
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn card_metrics(&self) -> Vec<Metric> {
        let mut metrics = Vec::new();
        if let Some(units) = positive_u32(self.units) {
            let noun = if units == 1 { "unit" } else { "units" };
            metrics.push(Metric {
                icon: MetricIcon::Units,
                text: format!("{units} {noun}"),
            });
        }
        metrics.extend(area_metric(self.square_feet));
        metrics
    }

    fn card_headline(&self) -> Option<String> {
        positive_f64(self.monthly_rent).map(|rent| format!("{}/mo", format::money(rent)))
    }

    fn detail_facts(&self) -> Vec<Fact> {
        let mut facts = vec![Fact {
            label: "Type",
            value: self.property_type.clone(),
        }];
        if let Some(units) = positive_u32(self.units) {
            facts.push(Fact {
                label: "Units",
                value: units.to_string(),
            });
        }
        facts.extend(area_fact(self.square_feet));
        facts
    }
}
