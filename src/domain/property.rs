use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Represents a rentable property with its advertised monthly price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub area: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Property {
    /// Creates a new property listing.
    pub fn new(title: impl Into<String>, area: f64, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            address: None,
            area,
            price,
            notes: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl Identifiable for Property {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Property {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Displayable for Property {
    fn display_label(&self) -> String {
        format!("{} ({})", self.title, self.id)
    }
}
