pub mod backend;
pub mod workflows;

pub use backend::{MountPointBackend, VaultBackend};
pub use workflows::{WindowRequest, Workflows};

use crate::vaults::Vault;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Preferences pane to focus when the preferences window opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesTab {
    Any,
    General,
    Updates,
    Contribute,
}

/// Window-level operations. Unlock and lock go through here because they open
/// interactive workflows (passphrase prompt, forced-lock confirmation).
pub trait AppWindows: Send + Sync {
    fn show_main_window(&self);
    fn show_preferences_window(&self, tab: PreferencesTab);
    fn start_unlock_workflow(&self, vault: Arc<Vault>);
    fn start_lock_workflow(&self, vault: Arc<Vault>);
}

/// Vault operations without their own window.
pub trait VaultOperations: Send + Sync {
    fn lock_all(&self, vaults: Vec<Arc<Vault>>, force: bool);
    fn reveal(&self, vault: Arc<Vault>);
}

pub trait AppTerminator: Send + Sync {
    fn terminate(&self);
}

/// Terminates by signalling the process-wide shutdown broadcast.
pub struct BroadcastTerminator {
    tx: broadcast::Sender<()>,
}

impl BroadcastTerminator {
    pub fn new(tx: broadcast::Sender<()>) -> Self {
        Self { tx }
    }
}

impl AppTerminator for BroadcastTerminator {
    fn terminate(&self) {
        log::info!("Termination requested");
        let _ = self.tx.send(());
    }
}
