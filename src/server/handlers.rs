use crate::error::SiteError;
use crate::i18n::{Locale, Messages};
use crate::pages::Page;
use crate::render::{render_not_found, render_page, RenderContext};
use crate::seo::{ads_txt, render_sitemap, robots_txt, sitemap_entries, WebManifest};
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use tracing::{debug, error};

pub async fn home(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    uri: Uri,
) -> Response {
    page_response(&state, &locale, "", uri.path())
}

pub async fn subpage(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    page_response(&state, &locale, &slug, uri.path())
}

pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    not_found(&state, uri.path(), SiteError::PageNotFound(uri.path().to_string()))
}

fn page_response(state: &AppState, locale: &str, slug: &str, path: &str) -> Response {
    match render(state, locale, slug, path) {
        Ok(html) => Html(html).into_response(),
        Err(e) => not_found(state, path, e),
    }
}

fn render(state: &AppState, locale: &str, slug: &str, path: &str) -> Result<String, SiteError> {
    let locale =
        Locale::from_code(locale).map_err(|_| SiteError::UnsupportedLocale(locale.to_string()))?;
    let page = Page::from_slug(slug).ok_or_else(|| SiteError::PageNotFound(path.to_string()))?;
    let messages = state.catalog.get(locale)?;

    Ok(render_page(&context(state, locale, messages, path), page))
}

/// Localized 404 page. The locale comes from the path prefix when there is
/// one, otherwise the default.
fn not_found(state: &AppState, path: &str, cause: SiteError) -> Response {
    match &cause {
        SiteError::MessagesNotFound(_) => error!("Serving 404 for {}: {}", path, cause),
        _ => debug!("Serving 404 for {}: {}", path, cause),
    }

    let locale = Locale::from_path(path).unwrap_or_default();
    match state.catalog.get(locale) {
        Ok(messages) => {
            let html = render_not_found(&context(state, locale, messages, path));
            (StatusCode::NOT_FOUND, Html(html)).into_response()
        }
        Err(e) => {
            error!("Cannot render 404 page: {}", e);
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

fn context<'a>(
    state: &'a AppState,
    locale: Locale,
    messages: &'a Messages,
    path: &'a str,
) -> RenderContext<'a> {
    RenderContext {
        config: &state.config,
        locale,
        messages,
        path,
        today: Utc::now().date_naive(),
    }
}

pub async fn sitemap(State(state): State<AppState>) -> Response {
    let entries = sitemap_entries(&state.config.base_url, Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&entries),
    )
        .into_response()
}

pub async fn manifest() -> Response {
    match serde_json::to_string(&WebManifest::default()) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/manifest+json")], body).into_response(),
        Err(e) => {
            error!("Failed to serialize manifest: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn robots(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.config.base_url),
    )
        .into_response()
}

pub async fn ads(State(state): State<AppState>) -> Response {
    match &state.config.ads_publisher_id {
        Some(publisher) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            ads_txt(publisher),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// The calculator is hosted elsewhere; `/calculator` is a stable alias.
pub async fn calculator(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.config.calculator_url)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
