use crate::vaults::Vault;
use anyhow::Result;

/// The I/O side of locking and unlocking. Implementations run on worker
/// threads and may block; they must not touch lock state themselves - the
/// workflow layer owns the state machine.
pub trait VaultBackend: Send + Sync {
    fn unlock(&self, vault: &Vault) -> Result<()>;
    fn lock(&self, vault: &Vault, force: bool) -> Result<()>;
}

/// Minimal backend that gates unlocking on the vault storage being present.
pub struct MountPointBackend;

impl VaultBackend for MountPointBackend {
    fn unlock(&self, vault: &Vault) -> Result<()> {
        anyhow::ensure!(
            vault.path().is_dir(),
            "Vault storage not found at {:?}",
            vault.path()
        );
        Ok(())
    }

    fn lock(&self, _vault: &Vault, _force: bool) -> Result<()> {
        Ok(())
    }
}
