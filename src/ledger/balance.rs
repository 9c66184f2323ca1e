use crate::domain::contract::Contract;
use crate::domain::payment::Payment;

use super::rent_sum;

/// Outstanding amount for a contract: all-time rent-category payments minus
/// one month's rent. Negative values mean the tenant still owes money.
///
/// The comparison base is a single month's rent, not the obligation accrued
/// since the contract started, so a long-running contract reads as settled
/// once one month has been covered.
pub fn balance(contract: &Contract, payments: &[&Payment]) -> f64 {
    rent_sum(payments) - contract.monthly_rent
}
