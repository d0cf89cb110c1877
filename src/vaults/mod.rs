pub mod collection;
pub mod entry;

pub use collection::{VaultCollection, VaultCollectionEvent};
pub use entry::{LockState, Vault, VaultEvent, VaultId};
