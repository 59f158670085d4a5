use serde::{Deserialize, Serialize};

use models::doctor;

/// Request body for creating a doctor. `special_interest` may be omitted or null.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DoctorCreate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub special_interest: Option<String>,
    pub email: String,
}

/// Replacement body for `PUT`; every field is overwritten, so the shape is the create shape.
pub type DoctorUpdate = DoctorCreate;

/// Response body: the stored row including its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DoctorRead {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub special_interest: Option<String>,
    pub email: String,
}

impl From<doctor::Model> for DoctorRead {
    fn from(m: doctor::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            special_interest: m.special_interest,
            email: m.email,
        }
    }
}

#[cfg(test)]
impl DoctorRead {
    /// The payload fields without the id, e.g. to compare against what was sent.
    pub(crate) fn fields(&self) -> DoctorCreate {
        DoctorCreate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            special_interest: self.special_interest.clone(),
            email: self.email.clone(),
        }
    }
}
