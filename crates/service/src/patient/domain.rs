use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use models::patient;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatientCreate {
    pub first_name: String,
    pub last_name: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
}

pub type PatientUpdate = PatientCreate;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatientRead {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl From<patient::Model> for PatientRead {
    fn from(m: patient::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, date_of_birth: m.date_of_birth }
    }
}

#[cfg(test)]
impl PatientRead {
    pub(crate) fn fields(&self) -> PatientCreate {
        PatientCreate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
        }
    }
}
