//! Persisted row shapes for the clinic tables, plus connection setup and
//! classification of store errors.

pub mod errors;
pub mod db;
pub mod doctor;
pub mod patient;

#[cfg(test)]
mod tests;
