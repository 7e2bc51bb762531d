//! Provision a user directly in the store. There is no registration route;
//! this is the only way accounts come into existence.
//!
//! Usage: `seed-user <username> <password>` (reads `DATABASE_URL` / `.env`).

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};

use certdesk::db::{DeskStorage, connect};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(username), Some(password)) = (args.next(), args.next()) else {
        eprintln!("usage: seed-user <username> <password>");
        std::process::exit(2);
    };

    let cfg = &certdesk::config::CONFIG;
    let pool = connect(&cfg.database_url).await?;
    let storage = DeskStorage::new(pool);
    storage.init_schema().await?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))
        .map_err(|e| format!("password hashing failed: {e}"))?
        .to_string();

    let id = storage.upsert_user(&username, &hash).await?;
    println!("user {username:?} provisioned (id {id})");
    Ok(())
}
