//! Doctor records: wire payloads (domain), persistence (repository) and the
//! operations exposed to the HTTP layer (service).

pub mod domain;
pub mod repository;
pub mod service;

pub use service::DoctorService;
