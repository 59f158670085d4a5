use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use models::patient;

use super::domain::{PatientCreate, PatientRead, PatientUpdate};
use crate::errors::ServiceError;

#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<PatientRead>, ServiceError>;
    async fn create(&self, input: &PatientCreate) -> Result<PatientRead, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<PatientRead>, ServiceError>;
    async fn replace(&self, id: i32, input: &PatientUpdate) -> Result<Option<PatientRead>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

#[derive(Clone)]
pub struct SeaOrmPatientRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPatientRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl PatientRepository for SeaOrmPatientRepository {
    async fn list(&self) -> Result<Vec<PatientRead>, ServiceError> {
        let rows = patient::list(&self.db).await?;
        Ok(rows.into_iter().map(PatientRead::from).collect())
    }

    async fn create(&self, input: &PatientCreate) -> Result<PatientRead, ServiceError> {
        let txn = self.db.begin().await?;
        let row = patient::create(&txn, &input.first_name, &input.last_name, input.date_of_birth).await?;
        txn.commit().await?;
        Ok(row.into())
    }

    async fn get(&self, id: i32) -> Result<Option<PatientRead>, ServiceError> {
        Ok(patient::find(&self.db, id).await?.map(PatientRead::from))
    }

    async fn replace(&self, id: i32, input: &PatientUpdate) -> Result<Option<PatientRead>, ServiceError> {
        let txn = self.db.begin().await?;
        let updated = patient::replace(&txn, id, &input.first_name, &input.last_name, input.date_of_birth).await?;
        let Some(row) = updated else { return Ok(None); };
        txn.commit().await?;
        Ok(Some(row.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let deleted = patient::delete(&txn, id).await?;
        txn.commit().await?;
        Ok(deleted)
    }
}
