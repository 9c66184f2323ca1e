use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Represents the owner renting out a property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Landlord {
    pub id: Uuid,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Landlord {
    /// Creates a new landlord with the provided full name.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            phone: None,
            email: None,
            notes: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl Identifiable for Landlord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Landlord {
    fn name(&self) -> &str {
        &self.full_name
    }
}

impl Displayable for Landlord {
    fn display_label(&self) -> String {
        format!("{} ({})", self.full_name, self.id)
    }
}
