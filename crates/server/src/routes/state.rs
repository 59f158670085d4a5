use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::doctor::{repository::SeaOrmDoctorRepository, DoctorService};
use service::patient::{repository::SeaOrmPatientRepository, PatientService};

pub type Doctors = DoctorService<SeaOrmDoctorRepository>;
pub type Patients = PatientService<SeaOrmPatientRepository>;

/// Handles shared by every request. Built once at startup from a single
/// connection pool; each request leases its own session from it.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub doctors: Arc<Doctors>,
    pub patients: Arc<Patients>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let doctors = DoctorService::new(Arc::new(SeaOrmDoctorRepository::new(db.clone())));
        let patients = PatientService::new(Arc::new(SeaOrmPatientRepository::new(db.clone())));
        Self { db, doctors: Arc::new(doctors), patients: Arc::new(patients) }
    }
}
