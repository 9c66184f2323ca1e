pub mod common;
pub mod contract;
pub mod landlord;
pub mod payment;
pub mod property;
pub mod tenant;

pub use contract::{Contract, ContractStatus};
pub use landlord::Landlord;
pub use payment::{Payment, PaymentCategory};
pub use property::Property;
pub use tenant::Tenant;
