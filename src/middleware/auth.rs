use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};

use crate::router::DeskState;

/// Name of the private cookie holding the session token.
pub const SESSION_COOKIE: &str = "certdesk_session";

/// Session guard for all item routes.
///
/// Resolves the session cookie to a server-side session row and yields the
/// authenticated user id. Missing cookie, unknown token, or expired session
/// all reject with a redirect to `/login`. The guard does not re-verify the
/// user row, so a stale session for a deleted user is still accepted.
#[derive(Debug, Clone, Copy)]
pub struct AuthSession {
    pub user_id: i64,
}

impl FromRequestParts<DeskState> for AuthSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &DeskState,
    ) -> Result<Self, Self::Rejection> {
        let jar: PrivateCookieJar<Key> = match PrivateCookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };

        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return Err(Redirect::to("/login").into_response());
        };
        match state.sessions.resolve(cookie.value()).await {
            Ok(Some(user_id)) => Ok(Self { user_id }),
            Ok(None) => Err(Redirect::to("/login").into_response()),
            Err(err) => Err(err.into_response()),
        }
    }
}
