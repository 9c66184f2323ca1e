pub mod balance;
pub mod ledger;
pub mod proration;
pub mod status;

pub use balance::balance;
pub use ledger::RentLedger;
pub use proration::{compute_schedule, PaymentSchedule, ScheduleRow};
pub use status::StatusPolicy;

use crate::domain::payment::{Payment, PaymentCategory};

/// Sums the rent-category entries in a payment slice. Other categories never
/// count toward paid-rent totals.
pub(crate) fn rent_sum(payments: &[&Payment]) -> f64 {
    payments
        .iter()
        .filter(|payment| payment.category == PaymentCategory::Rent)
        .map(|payment| payment.amount)
        .sum()
}
