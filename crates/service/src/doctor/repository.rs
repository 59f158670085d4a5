use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use models::doctor;

use super::domain::{DoctorCreate, DoctorRead, DoctorUpdate};
use crate::errors::ServiceError;

/// Repository abstraction for doctor persistence.
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<DoctorRead>, ServiceError>;
    async fn create(&self, input: &DoctorCreate) -> Result<DoctorRead, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<DoctorRead>, ServiceError>;
    async fn replace(&self, id: i32, input: &DoctorUpdate) -> Result<Option<DoctorRead>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
///
/// Writes run in their own transaction; an early return drops the
/// transaction, which rolls it back and hands the connection back to the pool.
#[derive(Clone)]
pub struct SeaOrmDoctorRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmDoctorRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl DoctorRepository for SeaOrmDoctorRepository {
    async fn list(&self) -> Result<Vec<DoctorRead>, ServiceError> {
        let rows = doctor::list(&self.db).await?;
        Ok(rows.into_iter().map(DoctorRead::from).collect())
    }

    async fn create(&self, input: &DoctorCreate) -> Result<DoctorRead, ServiceError> {
        let txn = self.db.begin().await?;
        let row = doctor::create(
            &txn,
            &input.first_name,
            &input.last_name,
            input.special_interest.as_deref(),
            &input.email,
        )
        .await?;
        txn.commit().await?;
        Ok(row.into())
    }

    async fn get(&self, id: i32) -> Result<Option<DoctorRead>, ServiceError> {
        Ok(doctor::find(&self.db, id).await?.map(DoctorRead::from))
    }

    async fn replace(&self, id: i32, input: &DoctorUpdate) -> Result<Option<DoctorRead>, ServiceError> {
        let txn = self.db.begin().await?;
        let updated = doctor::replace(
            &txn,
            id,
            &input.first_name,
            &input.last_name,
            input.special_interest.as_deref(),
            &input.email,
        )
        .await?;
        let Some(row) = updated else { return Ok(None); };
        txn.commit().await?;
        Ok(Some(row.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let deleted = doctor::delete(&txn, id).await?;
        txn.commit().await?;
        Ok(deleted)
    }
}
