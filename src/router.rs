use axum::Router;
use axum::extract::FromRef;
use axum::routing::{delete, get};
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use tower_http::services::ServeDir;

use crate::db::DeskStorage;
use crate::handlers::{auth, items};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct DeskState {
    pub storage: DeskStorage,
    pub sessions: SessionStore,
    cookie_key: Key,
}

impl DeskState {
    /// `session_secret` may be any non-empty string; it is stretched to the
    /// 64 bytes the cookie `Key` requires.
    pub fn new(storage: DeskStorage, sessions: SessionStore, session_secret: &str) -> Self {
        let digest = Sha512::digest(session_secret.as_bytes());
        Self {
            storage,
            sessions,
            cookie_key: Key::from(digest.as_slice()),
        }
    }
}

impl FromRef<DeskState> for Key {
    fn from_ref(state: &DeskState) -> Key {
        state.cookie_key.clone()
    }
}

pub fn desk_router(state: DeskState) -> Router {
    Router::new()
        .route("/", get(items::list_items))
        .route("/add-item", get(items::add_item_form).post(items::add_item))
        .route(
            "/edit-item/{id}",
            get(items::edit_item_form).post(items::edit_item),
        )
        .route("/delete-item/{id}", delete(items::delete_item))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .nest_service("/uploads", ServeDir::new("uploads"))
        .with_state(state)
}
