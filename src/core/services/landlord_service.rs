use uuid::Uuid;

use crate::domain::common::Displayable;
use crate::domain::landlord::Landlord;
use crate::errors::RentError;
use crate::ledger::RentLedger;

use super::{ContractService, ServiceResult};

/// Validated CRUD and search over landlord records.
pub struct LandlordService;

impl LandlordService {
    pub fn add(ledger: &mut RentLedger, landlord: Landlord) -> ServiceResult<Uuid> {
        Self::validate(&landlord)?;
        let label = landlord.display_label();
        let id = ledger.add_landlord(landlord);
        tracing::info!("Added landlord {label}");
        Ok(id)
    }

    pub fn update(ledger: &mut RentLedger, id: Uuid, changes: Landlord) -> ServiceResult<()> {
        Self::validate(&changes)?;
        let landlord = ledger
            .landlord_mut(id)
            .ok_or_else(|| RentError::NotFound(format!("landlord {id}")))?;
        landlord.full_name = changes.full_name;
        landlord.phone = changes.phone;
        landlord.email = changes.email;
        landlord.notes = changes.notes;
        ledger.touch();
        tracing::info!("Updated landlord {id}");
        Ok(())
    }

    /// Removes a landlord. Fails while any contract still references them.
    pub fn remove(ledger: &mut RentLedger, id: Uuid) -> ServiceResult<()> {
        if ContractService::references_landlord(ledger, id) {
            return Err(RentError::Validation(
                "Landlord is referenced by a contract".into(),
            ));
        }
        let before = ledger.landlords.len();
        ledger.landlords.retain(|landlord| landlord.id != id);
        if ledger.landlords.len() == before {
            return Err(RentError::NotFound(format!("landlord {id}")));
        }
        ledger.touch();
        tracing::info!("Removed landlord {id}");
        Ok(())
    }

    pub fn list(ledger: &RentLedger) -> Vec<&Landlord> {
        ledger.landlords.iter().collect()
    }

    /// Case-insensitive substring search over name, phone, and email.
    pub fn search<'a>(ledger: &'a RentLedger, query: &str) -> Vec<&'a Landlord> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Self::list(ledger);
        }
        let needle = trimmed.to_lowercase();
        ledger
            .landlords
            .iter()
            .filter(|landlord| {
                landlord.full_name.to_lowercase().contains(&needle)
                    || field_contains(&landlord.phone, &needle)
                    || field_contains(&landlord.email, &needle)
            })
            .collect()
    }

    fn validate(landlord: &Landlord) -> ServiceResult<()> {
        if landlord.full_name.trim().is_empty() {
            return Err(RentError::Validation(
                "Landlord name cannot be blank".into(),
            ));
        }
        Ok(())
    }
}

fn field_contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_covers_phone_and_email() {
        let mut ledger = RentLedger::new();
        LandlordService::add(
            &mut ledger,
            Landlord::new("Pavel Orlov").with_phone("+7 900 123-45-67"),
        )
        .unwrap();
        LandlordService::add(
            &mut ledger,
            Landlord::new("Marta Lind").with_email("marta@rentals.example"),
        )
        .unwrap();

        assert_eq!(LandlordService::search(&ledger, "123-45").len(), 1);
        assert_eq!(LandlordService::search(&ledger, "RENTALS").len(), 1);
        assert_eq!(LandlordService::search(&ledger, "nobody").len(), 0);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut ledger = RentLedger::new();
        let err = LandlordService::add(&mut ledger, Landlord::new("")).expect_err("must fail");
        assert!(
            matches!(err, RentError::Validation(_)),
            "unexpected error: {err:?}"
        );
    }
}
