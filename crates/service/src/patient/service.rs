use std::sync::Arc;
use tracing::{info, instrument};

use super::domain::{PatientCreate, PatientRead, PatientUpdate};
use super::repository::PatientRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "Patient";

pub struct PatientService<R: PatientRepository> {
    repo: Arc<R>,
}

impl<R: PatientRepository> PatientService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<PatientRead>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: &PatientCreate) -> Result<PatientRead, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "patient created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<PatientRead, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i32, input: &PatientUpdate) -> Result<PatientRead, ServiceError> {
        let updated = self.repo.replace(id, input).await?.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(id, "patient updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(id, "patient deleted");
        Ok(())
    }
}
