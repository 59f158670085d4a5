use std::sync::Arc;
use tracing::{info, instrument};

use super::domain::{DoctorCreate, DoctorRead, DoctorUpdate};
use super::repository::DoctorRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "Doctor";

/// Doctor operations as seen by the HTTP layer.
/// Missing rows come back as `ServiceError::NotFound`.
pub struct DoctorService<R: DoctorRepository> {
    repo: Arc<R>,
}

impl<R: DoctorRepository> DoctorService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<DoctorRead>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: &DoctorCreate) -> Result<DoctorRead, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "doctor created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<DoctorRead, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i32, input: &DoctorUpdate) -> Result<DoctorRead, ServiceError> {
        let updated = self.repo.replace(id, input).await?.ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(id, "doctor updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            info!(id, "no doctor to delete");
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(id, "doctor deleted");
        Ok(())
    }
}
