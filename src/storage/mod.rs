pub mod json_backend;

pub use json_backend::JsonStorage;

use crate::errors::Result;
use crate::ledger::RentLedger;

/// Persists the whole ledger snapshot. The engine never performs I/O itself;
/// callers decide when to load and save.
pub trait StorageBackend {
    fn save(&self, ledger: &RentLedger) -> Result<()>;
    fn load(&self) -> Result<RentLedger>;

    /// Loads the ledger, falling back to an empty one when nothing has been
    /// saved yet.
    fn load_or_default(&self) -> Result<RentLedger>;
}
