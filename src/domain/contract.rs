use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// A rental agreement binding a tenant, a landlord, and a property for a
/// period at a fixed monthly rent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub landlord_id: Uuid,
    pub property_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: f64,
    pub status: ContractStatus,
}

impl Contract {
    /// Creates a new contract. Status starts out [`ContractStatus::Active`];
    /// it is re-derived by the status policy afterwards, never set by hand.
    pub fn new(
        tenant_id: Uuid,
        landlord_id: Uuid,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            landlord_id,
            property_id,
            start_date,
            end_date,
            monthly_rent,
            status: ContractStatus::Active,
        }
    }
}

impl Identifiable for Contract {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Contract {
    fn display_label(&self) -> String {
        format!(
            "{} — {} ({})",
            self.start_date.format("%d.%m.%Y"),
            self.end_date.format("%d.%m.%Y"),
            self.status
        )
    }
}

/// Lifecycle state of a contract. `Completed` is terminal: once entered it is
/// never left, regardless of later payment activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ContractStatus {
    Active,
    Completed,
    PaidInFull,
    Debt(f64),
}

impl ContractStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, ContractStatus::Completed)
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractStatus::Active => write!(f, "Active"),
            ContractStatus::Completed => write!(f, "Completed"),
            ContractStatus::PaidInFull => write!(f, "Paid in full"),
            ContractStatus::Debt(amount) => write!(f, "Debt: {amount:.2}"),
        }
    }
}
