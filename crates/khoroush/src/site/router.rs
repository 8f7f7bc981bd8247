use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use tracing::{info, warn};

use super::layout::Chrome;
use super::nav::MenuQuery;
use super::pages;
use crate::catalog::{
    CatalogRecord, CatalogService, Category, ConstructionProject, ManagedProperty,
    RealEstateListing,
};
use crate::contact::{ContactForm, ContactOutcome, ContactService};
use crate::error::AppError;

/// Services shared by every site handler.
#[derive(Clone)]
pub struct SiteState {
    pub catalog: CatalogService,
    pub contact: Arc<ContactService>,
}

/// Public pages, the contact form, and the read-only JSON catalog API.
pub fn site_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/contact", get(contact_handler).post(contact_submit_handler))
        .route("/real-estate", get(list_handler::<RealEstateListing>))
        .route("/real-estate/:id", get(detail_handler::<RealEstateListing>))
        .route("/construction", get(list_handler::<ConstructionProject>))
        .route(
            "/construction/:id",
            get(detail_handler::<ConstructionProject>),
        )
        .route("/property-management", get(list_handler::<ManagedProperty>))
        .route(
            "/property-management/:id",
            get(detail_handler::<ManagedProperty>),
        )
        .route("/api/v1/:category", get(api_list_handler))
        .route("/api/v1/:category/:id", get(api_detail_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

pub(crate) async fn home_handler(menu: Option<Query<MenuQuery>>) -> pages::HomePage {
    pages::home_page(Chrome::new("/", MenuQuery::open_from(menu)))
}

pub(crate) async fn about_handler(menu: Option<Query<MenuQuery>>) -> pages::AboutPage {
    pages::about_page(Chrome::new("/about", MenuQuery::open_from(menu)))
}

pub(crate) async fn list_handler<R: CatalogRecord>(
    State(state): State<SiteState>,
    menu: Option<Query<MenuQuery>>,
) -> Response {
    let chrome = Chrome::new(R::CATEGORY.path(), MenuQuery::open_from(menu));
    match state.catalog.listings::<R>().await {
        Ok(records) => pages::catalog_page(chrome, Ok(records.as_slice())).into_response(),
        Err(err) => {
            warn!(table = R::CATEGORY.table(), error = %err, "catalog listing fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                pages::catalog_page::<R>(chrome, Err(&err)),
            )
                .into_response()
        }
    }
}

pub(crate) async fn detail_handler<R: CatalogRecord>(
    State(state): State<SiteState>,
    Path(id): Path<String>,
    menu: Option<Query<MenuQuery>>,
) -> Response {
    let category = R::CATEGORY;
    let chrome = Chrome::new(category.detail_path(&id), MenuQuery::open_from(menu));
    match state.catalog.detail::<R>(&id).await {
        Ok(Some(record)) => pages::detail_page(chrome, &record).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            pages::record_not_found_page(chrome, category),
        )
            .into_response(),
        Err(err) => {
            warn!(table = category.table(), %id, error = %err, "catalog detail fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                pages::record_unavailable_page(chrome, category),
            )
                .into_response()
        }
    }
}

pub(crate) async fn contact_handler(menu: Option<Query<MenuQuery>>) -> pages::ContactPage {
    let chrome = Chrome::new("/contact", MenuQuery::open_from(menu));
    pages::contact_page(chrome, ContactForm::blank(), None)
}

pub(crate) async fn contact_submit_handler(
    State(state): State<SiteState>,
    Form(form): Form<ContactForm>,
) -> Response {
    let outcome = state.contact.submit(&form).await;
    let status = match &outcome {
        ContactOutcome::Sent | ContactOutcome::Ignored | ContactOutcome::Duplicate => {
            StatusCode::OK
        }
        ContactOutcome::Rejected(reason) => {
            info!(%reason, "contact submission rejected");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ContactOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
    };

    let next = if outcome.clears_form() {
        ContactForm::blank()
    } else {
        ContactForm {
            botcheck: String::new(),
            ..form
        }
    };
    let toast = outcome.toast();
    let chrome = Chrome::new("/contact", false);
    (status, pages::contact_page(chrome, next, toast)).into_response()
}

pub(crate) async fn api_list_handler(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    match parse_category(&slug)? {
        Category::RealEstate => json_listings::<RealEstateListing>(&state.catalog).await,
        Category::Construction => json_listings::<ConstructionProject>(&state.catalog).await,
        Category::PropertyManagement => json_listings::<ManagedProperty>(&state.catalog).await,
    }
}

pub(crate) async fn api_detail_handler(
    State(state): State<SiteState>,
    Path((slug, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    match parse_category(&slug)? {
        Category::RealEstate => json_detail::<RealEstateListing>(&state.catalog, &id).await,
        Category::Construction => json_detail::<ConstructionProject>(&state.catalog, &id).await,
        Category::PropertyManagement => json_detail::<ManagedProperty>(&state.catalog, &id).await,
    }
}

fn parse_category(slug: &str) -> Result<Category, AppError> {
    Category::from_slug(slug).ok_or_else(|| AppError::NotFound(format!("category '{slug}'")))
}

async fn json_listings<R: CatalogRecord>(catalog: &CatalogService) -> Result<Response, AppError> {
    let records = catalog.listings::<R>().await?;
    Ok(Json(records).into_response())
}

async fn json_detail<R: CatalogRecord>(
    catalog: &CatalogService,
    id: &str,
) -> Result<Response, AppError> {
    let record = catalog.detail::<R>(id).await?.ok_or_else(|| {
        AppError::NotFound(format!("{} '{id}'", R::CATEGORY.noun().to_lowercase()))
    })?;
    Ok(Json(record).into_response())
}

pub(crate) async fn not_found_handler(uri: Uri) -> Response {
    let chrome = Chrome::new(uri.path(), false);
    (StatusCode::NOT_FOUND, pages::not_found_page(chrome)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, InMemoryCatalog};
    use crate::contact::{FormRelay, Inquiry, RelayError, RelayReceipt};
    use async_trait::async_trait;

    struct NeverRelay;

    #[async_trait]
    impl FormRelay for NeverRelay {
        async fn deliver(&self, _inquiry: &Inquiry) -> Result<RelayReceipt, RelayError> {
            Err(RelayError::NotConfigured)
        }
    }

    fn state() -> SiteState {
        let relay: Arc<dyn FormRelay> = Arc::new(NeverRelay);
        let source: Arc<dyn CatalogSource> = Arc::new(InMemoryCatalog::default());
        SiteState {
            catalog: CatalogService::new(source),
            contact: Arc::new(ContactService::new(relay)),
        }
    }

    #[tokio::test]
    async fn unknown_detail_id_is_not_found() {
        let response = detail_handler::<ManagedProperty>(
            State(state()),
            Path("does-not-exist".to_string()),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_api_category_is_not_found() {
        let result = api_list_handler(State(state()), Path("interiors".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn failed_relay_keeps_fields_and_returns_bad_gateway() {
        let form = ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            service: "general".to_string(),
            message: "Please call me back about a duplex.".to_string(),
            request_token: "token-9".to_string(),
            ..ContactForm::default()
        };
        let response = contact_submit_handler(State(state()), Form(form)).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
