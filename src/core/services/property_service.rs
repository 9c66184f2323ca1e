use uuid::Uuid;

use crate::domain::common::Displayable;
use crate::domain::property::Property;
use crate::errors::RentError;
use crate::ledger::RentLedger;

use super::{ContractService, ServiceResult};

/// Validated CRUD and search over property listings.
pub struct PropertyService;

impl PropertyService {
    pub fn add(ledger: &mut RentLedger, property: Property) -> ServiceResult<Uuid> {
        Self::validate(&property)?;
        let label = property.display_label();
        let id = ledger.add_property(property);
        tracing::info!("Added property {label}");
        Ok(id)
    }

    pub fn update(ledger: &mut RentLedger, id: Uuid, changes: Property) -> ServiceResult<()> {
        Self::validate(&changes)?;
        let property = ledger
            .property_mut(id)
            .ok_or_else(|| RentError::NotFound(format!("property {id}")))?;
        property.title = changes.title;
        property.address = changes.address;
        property.area = changes.area;
        property.price = changes.price;
        property.notes = changes.notes;
        ledger.touch();
        tracing::info!("Updated property {id}");
        Ok(())
    }

    /// Removes a property. Fails while any contract still references it.
    pub fn remove(ledger: &mut RentLedger, id: Uuid) -> ServiceResult<()> {
        if ContractService::references_property(ledger, id) {
            return Err(RentError::Validation(
                "Property is referenced by a contract".into(),
            ));
        }
        let before = ledger.properties.len();
        ledger.properties.retain(|property| property.id != id);
        if ledger.properties.len() == before {
            return Err(RentError::NotFound(format!("property {id}")));
        }
        ledger.touch();
        tracing::info!("Removed property {id}");
        Ok(())
    }

    pub fn list(ledger: &RentLedger) -> Vec<&Property> {
        ledger.properties.iter().collect()
    }

    /// Case-insensitive substring search over title and address.
    pub fn search<'a>(ledger: &'a RentLedger, query: &str) -> Vec<&'a Property> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Self::list(ledger);
        }
        let needle = trimmed.to_lowercase();
        ledger
            .properties
            .iter()
            .filter(|property| {
                property.title.to_lowercase().contains(&needle)
                    || property
                        .address
                        .as_deref()
                        .is_some_and(|address| address.to_lowercase().contains(&needle))
            })
            .collect()
    }

    fn validate(property: &Property) -> ServiceResult<()> {
        if property.title.trim().is_empty() {
            return Err(RentError::Validation(
                "Property title cannot be blank".into(),
            ));
        }
        if property.price <= 0.0 {
            return Err(RentError::Validation(
                "Property price must be greater than zero".into(),
            ));
        }
        if property.area <= 0.0 {
            return Err(RentError::Validation(
                "Property area must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
