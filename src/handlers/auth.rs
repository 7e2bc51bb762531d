use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use maud::Markup;
use serde::Deserialize;
use time::Duration;
use tracing::info;

use crate::error::{AuthError, DeskError};
use crate::middleware::auth::SESSION_COOKIE;
use crate::router::DeskState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login_form() -> Markup {
    views::login::login_page()
}

/// POST /login -> verify credentials, establish a session, redirect home.
pub async fn login(
    State(state): State<DeskState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, DeskError> {
    let user = state
        .storage
        .find_user_by_username(&form.username)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    verify_password(&form.password, &user.password_hash)?;

    let token = state.sessions.create(user.id).await?;
    let jar = jar.add(session_cookie(token, state.sessions.ttl_hours()));
    info!(username = %user.username, "login");
    Ok((jar, Redirect::to("/")))
}

/// GET /logout -> destroy the session (if any) and clear the cookie.
pub async fn logout(
    State(state): State<DeskState>,
    jar: PrivateCookieJar,
) -> Result<impl IntoResponse, DeskError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value()).await?;
        info!("logout");
    }
    let jar = jar.remove(clear_cookie());
    Ok((jar, Redirect::to("/login")))
}

/// One linear credential check: parse the stored hash, then verify.
/// A mismatch and an infrastructure failure are distinct outcomes.
fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::HashCheckFailed)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|err| match err {
            argon2::password_hash::Error::Password => AuthError::InvalidPassword,
            _ => AuthError::HashCheckFailed,
        })
}

fn session_cookie(token: String, ttl_hours: i64) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(ttl_hours))
        .build()
}

fn clear_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordHasher;
    use argon2::password_hash::{SaltString, rand_core::OsRng};

    fn hash(password: &str) -> String {
        Argon2::default()
            .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))
            .unwrap()
            .to_string()
    }

    #[test]
    fn correct_password_verifies() {
        let stored = hash("open sesame");
        assert!(verify_password("open sesame", &stored).is_ok());
    }

    #[test]
    fn wrong_password_is_a_mismatch_not_an_infra_error() {
        let stored = hash("open sesame");
        assert!(matches!(
            verify_password("wrong", &stored),
            Err(AuthError::InvalidPassword)
        ));
    }

    #[test]
    fn garbage_stored_hash_is_an_infra_error() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::HashCheckFailed)
        ));
    }
}
