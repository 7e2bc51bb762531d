use axum::Form;
use axum::extract::{Path, State};
use axum::response::Redirect;
use maud::Markup;

use crate::db::models::ItemFields;
use crate::error::DeskError;
use crate::middleware::auth::AuthSession;
use crate::render::render_certificate;
use crate::router::DeskState;
use crate::views;

/// GET / -> full listing, embedded certificate images included.
pub async fn list_items(
    _auth: AuthSession,
    State(state): State<DeskState>,
) -> Result<Markup, DeskError> {
    let items = state.storage.list_items().await?;
    Ok(views::items::list_page(&items))
}

pub async fn add_item_form(_auth: AuthSession) -> Markup {
    views::items::add_page()
}

/// POST /add-item -> render the certificate, persist, redirect home.
/// Render and persist are two steps with no transaction between them.
pub async fn add_item(
    _auth: AuthSession,
    State(state): State<DeskState>,
    Form(fields): Form<ItemFields>,
) -> Result<Redirect, DeskError> {
    let image = render_certificate(&fields)?;
    state.storage.insert_item(&fields, &image).await?;
    Ok(Redirect::to("/"))
}

/// GET /edit-item/{id} -> form pre-filled from the stored item.
/// A missing id is 404 here, matching the delete route.
pub async fn edit_item_form(
    _auth: AuthSession,
    State(state): State<DeskState>,
    Path(id): Path<i64>,
) -> Result<Markup, DeskError> {
    let item = state
        .storage
        .get_item(id)
        .await?
        .ok_or(DeskError::ItemNotFound)?;
    Ok(views::items::edit_page(&item))
}

/// POST /edit-item/{id} -> replace every field and the regenerated image.
pub async fn edit_item(
    _auth: AuthSession,
    State(state): State<DeskState>,
    Path(id): Path<i64>,
    Form(fields): Form<ItemFields>,
) -> Result<Redirect, DeskError> {
    let image = render_certificate(&fields)?;
    state.storage.update_item(id, &fields, &image).await?;
    Ok(Redirect::to("/"))
}

/// DELETE /delete-item/{id}
pub async fn delete_item(
    _auth: AuthSession,
    State(state): State<DeskState>,
    Path(id): Path<i64>,
) -> Result<&'static str, DeskError> {
    state.storage.delete_item(id).await?;
    Ok("Item deleted successfully")
}
