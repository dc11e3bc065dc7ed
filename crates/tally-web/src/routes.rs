// File: crates/tally-web/src/routes.rs
// Summary: HTTP routes: list/filter, add, delete, and the four PNG charts.

use std::collections::{BTreeSet, HashMap};

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use maud::Markup;
use tally_core::{render_chart, ChartKind, EntryForm, Uuid};
use tracing::{debug, info};

use crate::error::AppError;
use crate::page::{self, IndexView};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/add", post(add))
        .route("/delete/:id", get(delete));
    for kind in ChartKind::ALL {
        router = router.route(kind.route(), get(move |state: State<AppState>| chart(state, kind)));
    }
    router.with_state(state)
}

/// Run store (and render) work off the async executor.
async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Markup, AppError> {
    let store = state.store.clone();
    let all = blocking(move || Ok(store.list_all()?)).await?;

    let labels: Vec<String> = all
        .iter()
        .filter(|e| !e.label.is_empty())
        .map(|e| e.label.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let selected = query
        .get(state.domain.label_field)
        .map(String::as_str)
        .filter(|s| !s.is_empty());
    let entries: Vec<_> = match selected {
        Some(label) => all.into_iter().filter(|e| e.label == label).collect(),
        None => all,
    };

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    Ok(page::index(&IndexView {
        domain: &state.domain,
        entries: &entries,
        labels: &labels,
        selected,
        today: &today,
    }))
}

async fn add(
    State(state): State<AppState>,
    Form(mut fields): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let d = state.domain;
    let form = EntryForm {
        name: fields.remove(d.name_field).unwrap_or_default(),
        value: fields.remove(d.value_field).unwrap_or_default(),
        label: fields.remove(d.label_field).unwrap_or_default(),
        date: fields.remove("date").unwrap_or_default(),
    };

    // Skipped submissions answer exactly like successful ones.
    if let Some(entry) = form.into_entry() {
        let store = state.store.clone();
        let id = entry.id;
        blocking(move || Ok(store.insert(&entry)?)).await?;
        info!(%id, domain = d.key, "entry added");
    }
    Ok(Redirect::to("/"))
}

async fn delete(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Response, AppError> {
    let Ok(id) = Uuid::parse_str(&raw) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    let store = state.store.clone();
    let removed = blocking(move || Ok(store.delete_by_id(id)?)).await?;
    info!(%id, removed, "entry delete");
    Ok(Redirect::to("/").into_response())
}

async fn chart(State(state): State<AppState>, kind: ChartKind) -> Result<Response, AppError> {
    let bytes = blocking(move || {
        let entries = state.store.list_all()?;
        debug!(kind = kind.name(), entries = entries.len(), "rendering chart");
        Ok(render_chart(kind, &entries, &state.domain, &state.render)?)
    })
    .await?;
    Ok((
        [(header::CONTENT_TYPE, "image/png"), (header::CACHE_CONTROL, "no-store")],
        bytes,
    )
        .into_response())
}
