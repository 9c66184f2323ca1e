use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    contract::Contract,
    landlord::Landlord,
    payment::{Payment, PaymentCategory},
    property::Property,
    tenant::Tenant,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Authoritative in-memory snapshot of all rental records. Pure storage plus
/// lookup; status and balance derivation live in the policy modules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentLedger {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub landlords: Vec<Landlord>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "RentLedger::schema_version_default")]
    pub schema_version: u8,
}

impl RentLedger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            tenants: Vec::new(),
            landlords: Vec::new(),
            properties: Vec::new(),
            contracts: Vec::new(),
            payments: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_tenant(&mut self, tenant: Tenant) -> Uuid {
        let id = tenant.id;
        self.tenants.push(tenant);
        self.touch();
        id
    }

    pub fn add_landlord(&mut self, landlord: Landlord) -> Uuid {
        let id = landlord.id;
        self.landlords.push(landlord);
        self.touch();
        id
    }

    pub fn add_property(&mut self, property: Property) -> Uuid {
        let id = property.id;
        self.properties.push(property);
        self.touch();
        id
    }

    pub fn add_contract(&mut self, contract: Contract) -> Uuid {
        let id = contract.id;
        self.contracts.push(contract);
        self.touch();
        id
    }

    pub fn add_payment(&mut self, payment: Payment) -> Uuid {
        let id = payment.id;
        self.payments.push(payment);
        self.touch();
        id
    }

    pub fn tenant(&self, id: Uuid) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| tenant.id == id)
    }

    pub fn tenant_mut(&mut self, id: Uuid) -> Option<&mut Tenant> {
        self.tenants.iter_mut().find(|tenant| tenant.id == id)
    }

    pub fn landlord(&self, id: Uuid) -> Option<&Landlord> {
        self.landlords.iter().find(|landlord| landlord.id == id)
    }

    pub fn landlord_mut(&mut self, id: Uuid) -> Option<&mut Landlord> {
        self.landlords.iter_mut().find(|landlord| landlord.id == id)
    }

    pub fn property(&self, id: Uuid) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    pub fn property_mut(&mut self, id: Uuid) -> Option<&mut Property> {
        self.properties.iter_mut().find(|property| property.id == id)
    }

    pub fn contract(&self, id: Uuid) -> Option<&Contract> {
        self.contracts.iter().find(|contract| contract.id == id)
    }

    pub fn contract_mut(&mut self, id: Uuid) -> Option<&mut Contract> {
        self.contracts.iter_mut().find(|contract| contract.id == id)
    }

    pub fn payment(&self, id: Uuid) -> Option<&Payment> {
        self.payments.iter().find(|payment| payment.id == id)
    }

    pub fn payment_mut(&mut self, id: Uuid) -> Option<&mut Payment> {
        self.payments.iter_mut().find(|payment| payment.id == id)
    }

    /// All payments linked to the given contract, ordered by date ascending.
    /// Orphan payments are never included.
    pub fn payments_for_contract(&self, contract_id: Uuid) -> Vec<&Payment> {
        let mut linked: Vec<&Payment> = self
            .payments
            .iter()
            .filter(|payment| payment.contract_id == Some(contract_id))
            .collect();
        linked.sort_by_key(|payment| payment.date);
        linked
    }

    /// Subtotal of rent-category payments linked to the given contract.
    pub fn rent_total_for_contract(&self, contract_id: Uuid) -> f64 {
        self.payments
            .iter()
            .filter(|payment| {
                payment.contract_id == Some(contract_id)
                    && payment.category == PaymentCategory::Rent
            })
            .map(|payment| payment.amount)
            .sum()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for RentLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_with_contract() -> (RentLedger, Uuid) {
        let mut ledger = RentLedger::new();
        let tenant = ledger.add_tenant(Tenant::new("Anna Keller"));
        let landlord = ledger.add_landlord(Landlord::new("Pavel Orlov"));
        let property = ledger.add_property(Property::new("Maple Flat", 54.0, 30000.0));
        let contract = ledger.add_contract(Contract::new(
            tenant,
            landlord,
            property,
            date(2024, 1, 1),
            date(2024, 12, 31),
            30000.0,
        ));
        (ledger, contract)
    }

    #[test]
    fn payments_for_contract_are_date_ordered_and_exclude_orphans() {
        let (mut ledger, contract) = ledger_with_contract();
        ledger.add_payment(Payment::new(
            Some(contract),
            date(2024, 3, 5),
            10000.0,
            PaymentCategory::Rent,
        ));
        ledger.add_payment(Payment::new(
            Some(contract),
            date(2024, 1, 5),
            10000.0,
            PaymentCategory::Rent,
        ));
        ledger.add_payment(Payment::new(
            None,
            date(2024, 2, 5),
            999.0,
            PaymentCategory::Deposit,
        ));

        let linked = ledger.payments_for_contract(contract);
        assert_eq!(linked.len(), 2);
        assert_eq!(linked[0].date, date(2024, 1, 5));
        assert_eq!(linked[1].date, date(2024, 3, 5));
    }

    #[test]
    fn rent_total_ignores_other_categories() {
        let (mut ledger, contract) = ledger_with_contract();
        ledger.add_payment(Payment::new(
            Some(contract),
            date(2024, 1, 5),
            12000.0,
            PaymentCategory::Rent,
        ));
        ledger.add_payment(Payment::new(
            Some(contract),
            date(2024, 1, 6),
            5000.0,
            PaymentCategory::Utilities,
        ));
        ledger.add_payment(Payment::new(
            Some(contract),
            date(2024, 1, 7),
            8000.0,
            PaymentCategory::Rent,
        ));

        assert_eq!(ledger.rent_total_for_contract(contract), 20000.0);
    }

    #[test]
    fn lookup_by_id_round_trips() {
        let (ledger, contract) = ledger_with_contract();
        assert!(ledger.contract(contract).is_some());
        assert!(ledger.contract(Uuid::new_v4()).is_none());
    }
}
