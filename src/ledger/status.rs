use chrono::NaiveDate;

use crate::domain::contract::{Contract, ContractStatus};
use crate::domain::payment::Payment;

use super::rent_sum;

/// Derives a contract's lifecycle status. Both entry points are pure: the
/// reference date is an explicit input and the caller owns writing the
/// returned status back to the contract.
///
/// The two entry points apply different rule sets. A structural edit only
/// checks expiry, so a non-expired contract keeps whatever paid/debt value it
/// had until the next payment event re-derives it.
pub struct StatusPolicy;

impl StatusPolicy {
    /// Applied after a contract is created or structurally edited. Expired
    /// contracts become [`ContractStatus::Completed`]; everything else keeps
    /// its current status untouched.
    pub fn on_structural_change(contract: &Contract, today: NaiveDate) -> ContractStatus {
        if contract.end_date < today {
            ContractStatus::Completed
        } else {
            contract.status.clone()
        }
    }

    /// Applied after a payment linked to the contract is added, edited, or
    /// deleted. `Completed` is sticky. Otherwise the all-time rent-category
    /// total decides between [`ContractStatus::PaidInFull`] and
    /// [`ContractStatus::Debt`]; the supplied payments are expected to be the
    /// contract's own, and only rent-category entries are counted.
    pub fn on_payment_change(
        contract: &Contract,
        payments: &[&Payment],
        today: NaiveDate,
    ) -> ContractStatus {
        if contract.status.is_completed() {
            return ContractStatus::Completed;
        }

        if contract.end_date < today {
            return ContractStatus::Completed;
        }

        let paid = rent_sum(payments);
        if paid >= contract.monthly_rent {
            ContractStatus::PaidInFull
        } else {
            ContractStatus::Debt(contract.monthly_rent - paid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentCategory;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(end: NaiveDate, monthly_rent: f64) -> Contract {
        Contract::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            date(2024, 1, 1),
            end,
            monthly_rent,
        )
    }

    fn rent_payment(contract_id: Uuid, amount: f64) -> Payment {
        Payment::new(
            Some(contract_id),
            date(2024, 1, 5),
            amount,
            PaymentCategory::Rent,
        )
    }

    #[test]
    fn structural_change_completes_expired_contracts() {
        let contract = contract(date(2024, 2, 29), 50000.0);
        let status = StatusPolicy::on_structural_change(&contract, date(2024, 3, 1));
        assert_eq!(status, ContractStatus::Completed);
    }

    #[test]
    fn structural_change_keeps_stale_debt_on_live_contracts() {
        let mut contract = contract(date(2024, 12, 31), 50000.0);
        contract.status = ContractStatus::Debt(30000.0);

        // No paid/debt evaluation on this path: the stale value survives even
        // though the rent amount may have just changed.
        let status = StatusPolicy::on_structural_change(&contract, date(2024, 3, 1));
        assert_eq!(status, ContractStatus::Debt(30000.0));
    }

    #[test]
    fn payment_change_reports_debt_then_paid_in_full() {
        let contract = contract(date(2024, 12, 31), 50000.0);
        let first = rent_payment(contract.id, 20000.0);

        let status = StatusPolicy::on_payment_change(&contract, &[&first], date(2024, 3, 1));
        assert_eq!(status, ContractStatus::Debt(30000.0));

        let second = rent_payment(contract.id, 30000.0);
        let status =
            StatusPolicy::on_payment_change(&contract, &[&first, &second], date(2024, 3, 1));
        assert_eq!(status, ContractStatus::PaidInFull);
    }

    #[test]
    fn payment_change_counts_only_rent_entries() {
        let contract = contract(date(2024, 12, 31), 50000.0);
        let rent = rent_payment(contract.id, 20000.0);
        let utilities = Payment::new(
            Some(contract.id),
            date(2024, 1, 6),
            100000.0,
            PaymentCategory::Utilities,
        );

        let status =
            StatusPolicy::on_payment_change(&contract, &[&rent, &utilities], date(2024, 3, 1));
        assert_eq!(status, ContractStatus::Debt(30000.0));
    }

    #[test]
    fn completed_is_sticky_regardless_of_payment_activity() {
        let mut contract = contract(date(2024, 12, 31), 50000.0);
        contract.status = ContractStatus::Completed;

        let status = StatusPolicy::on_payment_change(&contract, &[], date(2024, 3, 1));
        assert_eq!(status, ContractStatus::Completed);

        let generous = rent_payment(contract.id, 500000.0);
        let status = StatusPolicy::on_payment_change(&contract, &[&generous], date(2024, 3, 1));
        assert_eq!(status, ContractStatus::Completed);
    }

    #[test]
    fn payment_change_completes_expired_contracts() {
        let contract = contract(date(2024, 2, 29), 50000.0);
        let paid = rent_payment(contract.id, 50000.0);

        let status = StatusPolicy::on_payment_change(&contract, &[&paid], date(2024, 3, 1));
        assert_eq!(status, ContractStatus::Completed);
    }
}
