use uuid::Uuid;

use crate::domain::common::Displayable;
use crate::domain::tenant::Tenant;
use crate::errors::RentError;
use crate::ledger::RentLedger;

use super::{ContractService, ServiceResult};

/// Validated CRUD and search over tenant records.
pub struct TenantService;

impl TenantService {
    pub fn add(ledger: &mut RentLedger, tenant: Tenant) -> ServiceResult<Uuid> {
        Self::validate(&tenant)?;
        let label = tenant.display_label();
        let id = ledger.add_tenant(tenant);
        tracing::info!("Added tenant {label}");
        Ok(id)
    }

    pub fn update(ledger: &mut RentLedger, id: Uuid, changes: Tenant) -> ServiceResult<()> {
        Self::validate(&changes)?;
        let tenant = ledger
            .tenant_mut(id)
            .ok_or_else(|| RentError::NotFound(format!("tenant {id}")))?;
        tenant.full_name = changes.full_name;
        tenant.phone = changes.phone;
        tenant.email = changes.email;
        tenant.notes = changes.notes;
        ledger.touch();
        tracing::info!("Updated tenant {id}");
        Ok(())
    }

    /// Removes a tenant. Fails while any contract still references them.
    pub fn remove(ledger: &mut RentLedger, id: Uuid) -> ServiceResult<()> {
        if ContractService::references_tenant(ledger, id) {
            return Err(RentError::Validation(
                "Tenant is referenced by a contract".into(),
            ));
        }
        let before = ledger.tenants.len();
        ledger.tenants.retain(|tenant| tenant.id != id);
        if ledger.tenants.len() == before {
            return Err(RentError::NotFound(format!("tenant {id}")));
        }
        ledger.touch();
        tracing::info!("Removed tenant {id}");
        Ok(())
    }

    pub fn list(ledger: &RentLedger) -> Vec<&Tenant> {
        ledger.tenants.iter().collect()
    }

    /// Case-insensitive substring search over full names. A blank query
    /// returns everything.
    pub fn search<'a>(ledger: &'a RentLedger, query: &str) -> Vec<&'a Tenant> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Self::list(ledger);
        }
        let needle = trimmed.to_lowercase();
        ledger
            .tenants
            .iter()
            .filter(|tenant| tenant.full_name.to_lowercase().contains(&needle))
            .collect()
    }

    fn validate(tenant: &Tenant) -> ServiceResult<()> {
        if tenant.full_name.trim().is_empty() {
            return Err(RentError::Validation("Tenant name cannot be blank".into()));
        }
        Ok(())
    }
}
