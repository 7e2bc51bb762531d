use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The six user-supplied fields of an item. Doubles as the form payload for
/// add/edit and as the renderer input, so the declared types are the
/// validation boundary: non-numeric `age`/`salary` never make it past the
/// form extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub age: i64,
    pub salary: i64,
    pub gender: String,
    pub profession: String,
    pub jadagam: String,
}

/// A persisted item row, generated image included.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbItem {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub salary: i64,
    pub gender: String,
    pub profession: String,
    pub jadagam: String,
    pub image: Vec<u8>,
    pub image_content_type: String,
}

impl DbItem {
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            age: self.age,
            salary: self.salary,
            gender: self.gender.clone(),
            profession: self.profession.clone(),
            jadagam: self.jadagam.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    /// Argon2id PHC string; opaque to everything but the verifier.
    pub password_hash: String,
}
