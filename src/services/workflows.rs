use crate::dispatch::UiDispatcher;
use crate::services::{AppWindows, PreferencesTab, VaultBackend, VaultOperations};
use crate::vaults::{LockState, Vault};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Requests for the embedding application's window layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    MainWindow,
    Preferences(PreferencesTab),
}

/// Concrete window/vault service. Lock and unlock run on worker threads
/// against the [`VaultBackend`]; every lock-state write is marshalled onto the
/// UI thread so change notifications fire where the menu lives.
pub struct Workflows {
    backend: Arc<dyn VaultBackend>,
    ui: UiDispatcher,
    windows_tx: broadcast::Sender<WindowRequest>,
}

impl Workflows {
    pub fn new(backend: Arc<dyn VaultBackend>, ui: UiDispatcher) -> Self {
        let (windows_tx, _) = broadcast::channel(16);
        Self {
            backend,
            ui,
            windows_tx,
        }
    }

    /// The embedding UI listens here for show-window requests.
    pub fn subscribe_windows(&self) -> broadcast::Receiver<WindowRequest> {
        self.windows_tx.subscribe()
    }

    fn spawn_transition(
        &self,
        vault: Arc<Vault>,
        expect: fn(LockState) -> bool,
        during: LockState,
        target: LockState,
        io: impl FnOnce(&dyn VaultBackend, &Vault) -> anyhow::Result<()> + Send + 'static,
    ) {
        let backend = self.backend.clone();
        let ui = self.ui.clone();
        // Guard and transition on the UI thread so two clicks cannot race.
        self.ui.dispatch(move || {
            let before = vault.lock_state();
            if !expect(before) {
                log::debug!("Ignoring {:?} request for vault '{}' in state {:?}", during, vault.id(), before);
                return;
            }
            vault.set_lock_state(during);

            std::thread::spawn(move || {
                let outcome = io(backend.as_ref(), &vault);
                let next = match outcome {
                    Ok(()) => target,
                    Err(e) => {
                        log::error!("Vault '{}' {:?} failed: {:#}", vault.id(), during, e);
                        before
                    }
                };
                ui.dispatch(move || vault.set_lock_state(next));
            });
        });
    }
}

impl AppWindows for Workflows {
    fn show_main_window(&self) {
        log::debug!("Show main window requested");
        let _ = self.windows_tx.send(WindowRequest::MainWindow);
    }

    fn show_preferences_window(&self, tab: PreferencesTab) {
        log::debug!("Show preferences requested ({:?})", tab);
        let _ = self.windows_tx.send(WindowRequest::Preferences(tab));
    }

    fn start_unlock_workflow(&self, vault: Arc<Vault>) {
        self.spawn_transition(
            vault,
            LockState::is_locked,
            LockState::Unlocking,
            LockState::Unlocked,
            |backend, vault| backend.unlock(vault),
        );
    }

    fn start_lock_workflow(&self, vault: Arc<Vault>) {
        self.spawn_transition(
            vault,
            LockState::is_unlocked,
            LockState::Locking,
            LockState::Locked,
            |backend, vault| backend.lock(vault, false),
        );
    }
}

impl VaultOperations for Workflows {
    fn lock_all(&self, vaults: Vec<Arc<Vault>>, force: bool) {
        for vault in vaults.into_iter().filter(|v| v.is_unlocked()) {
            self.spawn_transition(
                vault,
                LockState::is_unlocked,
                LockState::Locking,
                LockState::Locked,
                move |backend, vault| backend.lock(vault, force),
            );
        }
    }

    fn reveal(&self, vault: Arc<Vault>) {
        std::thread::spawn(move || {
            if let Err(e) = open::that(vault.path()) {
                log::error!("Failed to reveal vault '{}': {}", vault.id(), e);
            }
        });
    }
}
