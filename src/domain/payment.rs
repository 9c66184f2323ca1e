use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::errors::RentError;

/// A single recorded payment. Payments may reference a contract or stand on
/// their own; only the caller decides how orphans are presented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<Uuid>,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: PaymentCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Payment {
    /// Creates a new payment record.
    pub fn new(
        contract_id: Option<Uuid>,
        date: NaiveDate,
        amount: f64,
        category: PaymentCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            contract_id,
            date,
            amount,
            category,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Identifiable for Payment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Payment {
    fn display_label(&self) -> String {
        format!("{} • {} • {}", self.date, self.amount, self.category)
    }
}

/// Enumerates the supported payment categories. Only `Rent` entries count
/// toward paid-rent totals and the contract balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentCategory {
    Rent,
    Utilities,
    Penalty,
    Deposit,
}

impl PaymentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentCategory::Rent => "Rent",
            PaymentCategory::Utilities => "Utilities",
            PaymentCategory::Penalty => "Penalty",
            PaymentCategory::Deposit => "Deposit",
        }
    }
}

impl fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentCategory {
    type Err = RentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rent" => Ok(PaymentCategory::Rent),
            "utilities" => Ok(PaymentCategory::Utilities),
            "penalty" => Ok(PaymentCategory::Penalty),
            "deposit" => Ok(PaymentCategory::Deposit),
            other => Err(RentError::Validation(format!(
                "Unknown payment category `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(
            "rent".parse::<PaymentCategory>().unwrap(),
            PaymentCategory::Rent
        );
        assert_eq!(
            " Deposit ".parse::<PaymentCategory>().unwrap(),
            PaymentCategory::Deposit
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "fees".parse::<PaymentCategory>().expect_err("must fail");
        assert!(
            matches!(err, RentError::Validation(ref message) if message.contains("fees")),
            "unexpected error: {err:?}"
        );
    }
}
