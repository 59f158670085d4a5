use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub special_interest: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_names(first_name: &str, last_name: &str) -> Result<(), ModelError> {
    errors::require_non_empty("first_name", first_name)?;
    errors::require_non_empty("last_name", last_name)
}

// email is the only unique column on this table
fn classify(e: DbErr) -> ModelError {
    match ModelError::from(e) {
        ModelError::Conflict(_) => ModelError::Conflict("a doctor with this email already exists".into()),
        other => other,
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    first_name: &str,
    last_name: &str,
    special_interest: Option<&str>,
    email: &str,
) -> Result<Model, ModelError> {
    validate_names(first_name, last_name)?;
    let am = ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        special_interest: Set(special_interest.map(str::to_string)),
        email: Set(email.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(classify)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Overwrite every column of an existing row; `Ok(None)` when `id` has no row.
pub async fn replace<C: ConnectionTrait>(
    db: &C,
    id: i32,
    first_name: &str,
    last_name: &str,
    special_interest: Option<&str>,
    email: &str,
) -> Result<Option<Model>, ModelError> {
    validate_names(first_name, last_name)?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: ActiveModel = existing.into();
    am.first_name = Set(first_name.to_string());
    am.last_name = Set(last_name.to_string());
    am.special_interest = Set(special_interest.map(str::to_string));
    am.email = Set(email.to_string());
    errors::updated_or_gone(am.update(db).await, classify)
}

/// Returns true if a row was deleted.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
