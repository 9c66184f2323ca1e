use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::contract::Contract;
use crate::errors::RentError;
use crate::ledger::{RentLedger, StatusPolicy};

use super::ServiceResult;

/// Validated CRUD over rental contracts, plus the reference queries the other
/// entity services consult before deleting their records.
pub struct ContractService;

impl ContractService {
    /// Adds a contract after validating its references and period. The status
    /// starts `Active` and is immediately run through the expiry check, so a
    /// back-dated contract is stored as `Completed` from the start.
    pub fn add(
        ledger: &mut RentLedger,
        contract: Contract,
        today: NaiveDate,
    ) -> ServiceResult<Uuid> {
        Self::validate(ledger, &contract)?;
        let mut contract = contract;
        contract.status = StatusPolicy::on_structural_change(&contract, today);
        let id = ledger.add_contract(contract);
        tracing::info!("Added contract {id}");
        Ok(id)
    }

    /// Overwrites a contract's fields and re-runs the expiry check. Paid/debt
    /// standing is not re-evaluated here; that happens on payment events.
    pub fn update(
        ledger: &mut RentLedger,
        id: Uuid,
        changes: Contract,
        today: NaiveDate,
    ) -> ServiceResult<()> {
        Self::validate(ledger, &changes)?;
        let contract = ledger
            .contract_mut(id)
            .ok_or_else(|| RentError::NotFound(format!("contract {id}")))?;
        contract.tenant_id = changes.tenant_id;
        contract.landlord_id = changes.landlord_id;
        contract.property_id = changes.property_id;
        contract.start_date = changes.start_date;
        contract.end_date = changes.end_date;
        contract.monthly_rent = changes.monthly_rent;
        contract.status = changes.status;
        contract.status = StatusPolicy::on_structural_change(contract, today);
        ledger.touch();
        tracing::info!("Updated contract {id}");
        Ok(())
    }

    /// Removes a contract. Payments keep their reference; resolving it just
    /// stops matching a contract.
    pub fn remove(ledger: &mut RentLedger, id: Uuid) -> ServiceResult<()> {
        let before = ledger.contracts.len();
        ledger.contracts.retain(|contract| contract.id != id);
        if ledger.contracts.len() == before {
            return Err(RentError::NotFound(format!("contract {id}")));
        }
        ledger.touch();
        tracing::info!("Removed contract {id}");
        Ok(())
    }

    pub fn list(ledger: &RentLedger) -> Vec<&Contract> {
        ledger.contracts.iter().collect()
    }

    pub fn references_tenant(ledger: &RentLedger, tenant_id: Uuid) -> bool {
        ledger
            .contracts
            .iter()
            .any(|contract| contract.tenant_id == tenant_id)
    }

    pub fn references_landlord(ledger: &RentLedger, landlord_id: Uuid) -> bool {
        ledger
            .contracts
            .iter()
            .any(|contract| contract.landlord_id == landlord_id)
    }

    pub fn references_property(ledger: &RentLedger, property_id: Uuid) -> bool {
        ledger
            .contracts
            .iter()
            .any(|contract| contract.property_id == property_id)
    }

    fn validate(ledger: &RentLedger, contract: &Contract) -> ServiceResult<()> {
        if ledger.tenant(contract.tenant_id).is_none() {
            return Err(RentError::NotFound(format!(
                "tenant {}",
                contract.tenant_id
            )));
        }
        if ledger.landlord(contract.landlord_id).is_none() {
            return Err(RentError::NotFound(format!(
                "landlord {}",
                contract.landlord_id
            )));
        }
        if ledger.property(contract.property_id).is_none() {
            return Err(RentError::NotFound(format!(
                "property {}",
                contract.property_id
            )));
        }
        if contract.monthly_rent <= 0.0 {
            return Err(RentError::Validation(
                "Monthly rent must be greater than zero".into(),
            ));
        }
        if contract.end_date < contract.start_date {
            return Err(RentError::Validation(
                "Contract end date cannot precede its start date".into(),
            ));
        }
        Ok(())
    }
}
