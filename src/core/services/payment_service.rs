use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::payment::Payment;
use crate::errors::RentError;
use crate::ledger::{RentLedger, StatusPolicy};

use super::ServiceResult;

/// Validated CRUD and search over payments. Every successful mutation
/// re-derives the linked contract's status through the payment-triggered
/// policy entry point; payments without a contract trigger nothing.
pub struct PaymentService;

impl PaymentService {
    pub fn add(ledger: &mut RentLedger, payment: Payment, today: NaiveDate) -> ServiceResult<Uuid> {
        Self::validate(ledger, &payment)?;
        let contract_id = payment.contract_id;
        let id = ledger.add_payment(payment);
        Self::refresh_contract_status(ledger, contract_id, today);
        tracing::info!("Added payment {id}");
        Ok(id)
    }

    pub fn update(
        ledger: &mut RentLedger,
        id: Uuid,
        changes: Payment,
        today: NaiveDate,
    ) -> ServiceResult<()> {
        Self::validate(ledger, &changes)?;
        let payment = ledger
            .payment_mut(id)
            .ok_or_else(|| RentError::NotFound(format!("payment {id}")))?;
        payment.contract_id = changes.contract_id;
        payment.date = changes.date;
        payment.amount = changes.amount;
        payment.category = changes.category;
        payment.notes = changes.notes;
        let contract_id = payment.contract_id;
        ledger.touch();
        Self::refresh_contract_status(ledger, contract_id, today);
        tracing::info!("Updated payment {id}");
        Ok(())
    }

    pub fn remove(ledger: &mut RentLedger, id: Uuid, today: NaiveDate) -> ServiceResult<()> {
        let contract_id = ledger
            .payment(id)
            .ok_or_else(|| RentError::NotFound(format!("payment {id}")))?
            .contract_id;
        ledger.payments.retain(|payment| payment.id != id);
        ledger.touch();
        Self::refresh_contract_status(ledger, contract_id, today);
        tracing::info!("Removed payment {id}");
        Ok(())
    }

    /// All payments, ordered by date ascending.
    pub fn list(ledger: &RentLedger) -> Vec<&Payment> {
        let mut all: Vec<&Payment> = ledger.payments.iter().collect();
        all.sort_by_key(|payment| payment.date);
        all
    }

    /// The given contract's payments, ordered by date ascending.
    pub fn payments_for_contract(ledger: &RentLedger, contract_id: Uuid) -> Vec<&Payment> {
        ledger.payments_for_contract(contract_id)
    }

    /// Case-insensitive substring search over category label, notes, linked
    /// tenant name, and linked property title. A blank query returns
    /// everything.
    pub fn search<'a>(ledger: &'a RentLedger, query: &str) -> Vec<&'a Payment> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Self::list(ledger);
        }
        let needle = trimmed.to_lowercase();
        Self::list(ledger)
            .into_iter()
            .filter(|payment| Self::matches(ledger, payment, &needle))
            .collect()
    }

    fn matches(ledger: &RentLedger, payment: &Payment, needle: &str) -> bool {
        if payment.category.label().to_lowercase().contains(needle) {
            return true;
        }
        if let Some(notes) = payment.notes.as_deref() {
            if notes.to_lowercase().contains(needle) {
                return true;
            }
        }
        if let Some(contract) = payment.contract_id.and_then(|id| ledger.contract(id)) {
            if let Some(tenant) = ledger.tenant(contract.tenant_id) {
                if tenant.full_name.to_lowercase().contains(needle) {
                    return true;
                }
            }
            if let Some(property) = ledger.property(contract.property_id) {
                if property.title.to_lowercase().contains(needle) {
                    return true;
                }
            }
        }
        false
    }

    fn validate(ledger: &RentLedger, payment: &Payment) -> ServiceResult<()> {
        if payment.amount <= 0.0 {
            return Err(RentError::Validation(
                "Payment amount must be greater than zero".into(),
            ));
        }
        if let Some(contract_id) = payment.contract_id {
            if ledger.contract(contract_id).is_none() {
                return Err(RentError::NotFound(format!("contract {contract_id}")));
            }
        }
        Ok(())
    }

    fn refresh_contract_status(
        ledger: &mut RentLedger,
        contract_id: Option<Uuid>,
        today: NaiveDate,
    ) {
        let contract_id = match contract_id {
            Some(id) => id,
            None => return,
        };
        let status = {
            let contract = match ledger.contract(contract_id) {
                Some(contract) => contract,
                None => return,
            };
            let payments = ledger.payments_for_contract(contract_id);
            StatusPolicy::on_payment_change(contract, &payments, today)
        };
        if let Some(contract) = ledger.contract_mut(contract_id) {
            contract.status = status;
        }
    }
}
