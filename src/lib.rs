#![doc(test(attr(deny(warnings))))]

//! Rent Core offers the record-keeping and rent-ledger primitives behind a
//! rental management workflow: tenants, landlords, properties, contracts,
//! payments, proration schedules, and contract status derivation.

pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Rent Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
