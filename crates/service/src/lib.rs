//! Service layer providing the clinic CRUD operations on top of models.
//! - Wire payload types live next to each entity's repository and service.
//! - Repositories own the store session: one transaction per mutating call.
//! - Store outcomes are classified into `ServiceError` before leaving this crate.

pub mod errors;
pub mod doctor;
pub mod patient;
#[cfg(test)]
pub mod test_support;
