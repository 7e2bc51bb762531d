pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod session;
pub mod views;

pub use error::{AuthError, DeskError};
pub use render::render_certificate;
