use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_names(first_name: &str, last_name: &str) -> Result<(), ModelError> {
    errors::require_non_empty("first_name", first_name)?;
    errors::require_non_empty("last_name", last_name)
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    first_name: &str,
    last_name: &str,
    date_of_birth: Date,
) -> Result<Model, ModelError> {
    validate_names(first_name, last_name)?;
    let am = ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        date_of_birth: Set(date_of_birth),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn replace<C: ConnectionTrait>(
    db: &C,
    id: i32,
    first_name: &str,
    last_name: &str,
    date_of_birth: Date,
) -> Result<Option<Model>, ModelError> {
    validate_names(first_name, last_name)?;
    let Some(existing) = Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: ActiveModel = existing.into();
    am.first_name = Set(first_name.to_string());
    am.last_name = Set(last_name.to_string());
    am.date_of_birth = Set(date_of_birth);
    errors::updated_or_gone(am.update(db).await, ModelError::from)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
