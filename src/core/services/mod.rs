pub mod contract_service;
pub mod landlord_service;
pub mod payment_service;
pub mod property_service;
pub mod tenant_service;

pub use contract_service::ContractService;
pub use landlord_service::LandlordService;
pub use payment_service::PaymentService;
pub use property_service::PropertyService;
pub use tenant_service::TenantService;

pub type ServiceResult<T> = crate::errors::Result<T>;
