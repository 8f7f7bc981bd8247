use crate::infra::{parse_category, site_state};
use clap::Args;
use khoroush::catalog::{
    CatalogRecord, CatalogService, Category, ConstructionProject, ManagedProperty,
    RealEstateListing,
};
use khoroush::config::AppConfig;
use khoroush::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct CatalogListArgs {
    /// Category slug: real-estate, construction, or property-management
    #[arg(value_parser = parse_category)]
    pub(crate) category: Category,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogShowArgs {
    /// Category slug: real-estate, construction, or property-management
    #[arg(value_parser = parse_category)]
    pub(crate) category: Category,
    /// Record id as stored in the data source
    pub(crate) id: String,
}

pub(crate) async fn run_catalog_list(args: CatalogListArgs) -> Result<(), AppError> {
    let catalog = load_catalog()?;
    let lines = match args.category {
        Category::RealEstate => list_lines::<RealEstateListing>(&catalog).await?,
        Category::Construction => list_lines::<ConstructionProject>(&catalog).await?,
        Category::PropertyManagement => list_lines::<ManagedProperty>(&catalog).await?,
    };

    println!("{} ({} records)", args.category.label(), lines.len());
    for line in lines {
        println!("  {line}");
    }
    Ok(())
}

pub(crate) async fn run_catalog_show(args: CatalogShowArgs) -> Result<(), AppError> {
    let catalog = load_catalog()?;
    let json = match args.category {
        Category::RealEstate => show_json::<RealEstateListing>(&catalog, &args.id).await?,
        Category::Construction => show_json::<ConstructionProject>(&catalog, &args.id).await?,
        Category::PropertyManagement => show_json::<ManagedProperty>(&catalog, &args.id).await?,
    };

    match json {
        Some(json) => {
            println!("{json}");
            Ok(())
        }
        None => Err(AppError::NotFound(format!(
            "{} '{}'",
            args.category.noun().to_lowercase(),
            args.id
        ))),
    }
}

fn load_catalog() -> Result<CatalogService, AppError> {
    let config = AppConfig::load()?;
    Ok(site_state(&config)?.catalog)
}

async fn list_lines<R: CatalogRecord>(catalog: &CatalogService) -> Result<Vec<String>, AppError> {
    let records = catalog.listings::<R>().await?;
    Ok(records.iter().map(summary_line).collect())
}

async fn show_json<R: CatalogRecord>(
    catalog: &CatalogService,
    id: &str,
) -> Result<Option<String>, AppError> {
    let Some(record) = catalog.detail::<R>(id).await? else {
        return Ok(None);
    };
    Ok(Some(serde_json::to_string_pretty(&record)?))
}

/// One line per record: id, status, featured marker, title, headline.
pub(crate) fn summary_line<R: CatalogRecord>(record: &R) -> String {
    let featured = if record.featured() { " *" } else { "" };
    let headline = record
        .card_headline()
        .map(|headline| format!(" ({headline})"))
        .unwrap_or_default();
    format!(
        "{} [{}]{} {}{}",
        record.id(),
        record.status_badge().label,
        featured,
        record.title(),
        headline
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_line_marks_featured_and_headline() {
        let property: ManagedProperty = serde_json::from_value(json!({
            "id": "mp-9",
            "title": "Riverside Commons",
            "description": "",
            "property_type": "Residential",
            "location": "Gatineau, QC",
            "units": 24,
            "monthly_rent": 1850,
            "management_status": "active",
            "featured": true,
            "created_at": "2024-05-01T00:00:00Z",
        }))
        .expect("property deserializes");

        assert_eq!(
            summary_line(&property),
            "mp-9 [active] * Riverside Commons ($1,850/mo)"
        );
    }
}
