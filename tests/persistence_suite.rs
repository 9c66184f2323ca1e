mod common;

use chrono::NaiveDate;

use rent_core::core::services::{
    ContractService, LandlordService, PaymentService, PropertyService, TenantService,
};
use rent_core::domain::{Contract, ContractStatus, Landlord, Payment, PaymentCategory, Property, Tenant};
use rent_core::ledger::RentLedger;
use rent_core::storage::StorageBackend;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fresh_store_starts_with_an_empty_ledger() {
    let storage = common::setup_storage();
    let ledger = storage.load_or_default().expect("empty ledger");
    assert!(ledger.contracts.is_empty());
    assert!(ledger.payments.is_empty());
}

#[test]
fn derived_status_survives_a_reload() {
    let today = date(2024, 3, 1);
    let storage = common::setup_storage();
    let mut ledger = RentLedger::new();

    let tenant = TenantService::add(&mut ledger, Tenant::new("Anna Keller")).unwrap();
    let landlord = LandlordService::add(&mut ledger, Landlord::new("Pavel Orlov")).unwrap();
    let property =
        PropertyService::add(&mut ledger, Property::new("Maple Flat", 54.0, 50000.0)).unwrap();
    let contract = ContractService::add(
        &mut ledger,
        Contract::new(
            tenant,
            landlord,
            property,
            date(2024, 1, 1),
            date(2024, 12, 31),
            50000.0,
        ),
        today,
    )
    .unwrap();
    PaymentService::add(
        &mut ledger,
        Payment::new(
            Some(contract),
            date(2024, 1, 10),
            20000.0,
            PaymentCategory::Rent,
        )
        .with_notes("first installment"),
        today,
    )
    .unwrap();

    storage.save(&ledger).expect("save ledger");
    let reloaded = storage.load().expect("load ledger");

    assert_eq!(reloaded.tenants.len(), 1);
    assert_eq!(reloaded.payments.len(), 1);
    let contract = reloaded.contract(contract).expect("contract persisted");
    assert_eq!(contract.status, ContractStatus::Debt(30000.0));
    assert_eq!(reloaded.rent_total_for_contract(contract.id), 20000.0);
}

#[test]
fn saving_twice_keeps_the_latest_snapshot() {
    let storage = common::setup_storage();
    let mut ledger = RentLedger::new();
    TenantService::add(&mut ledger, Tenant::new("Anna Keller")).unwrap();
    storage.save(&ledger).expect("first save");

    TenantService::add(&mut ledger, Tenant::new("Boris Ivanov")).unwrap();
    storage.save(&ledger).expect("second save");

    let reloaded = storage.load().expect("load ledger");
    assert_eq!(reloaded.tenants.len(), 2);
}
