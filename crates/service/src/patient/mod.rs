//! Patient records, laid out like `doctor`.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::PatientService;
