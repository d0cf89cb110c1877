use crate::observe::{Observers, Subscription};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Stable identity of a vault, independent of its display name or position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VaultId(String);

impl VaultId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocking,
    Unlocked,
    Locking,
}

impl LockState {
    pub fn is_locked(self) -> bool {
        self == LockState::Locked
    }

    pub fn is_unlocked(self) -> bool {
        self == LockState::Unlocked
    }

    /// True while a lock or unlock operation is in flight.
    pub fn in_transition(self) -> bool {
        matches!(self, LockState::Unlocking | LockState::Locking)
    }
}

#[derive(Debug, Clone)]
pub enum VaultEvent {
    Renamed(VaultId),
    StateChanged(VaultId, LockState),
}

/// A user-managed encrypted storage unit. Display name and lock state are
/// observable; mutations fire [`VaultEvent`]s on the caller's thread.
pub struct Vault {
    id: VaultId,
    path: PathBuf,
    display_name: RwLock<String>,
    state: RwLock<LockState>,
    changed: Observers<VaultEvent>,
}

impl Vault {
    pub fn new(id: VaultId, display_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            path: path.into(),
            display_name: RwLock::new(display_name.into()),
            state: RwLock::new(LockState::Locked),
            changed: Observers::new(),
        }
    }

    pub fn id(&self) -> &VaultId {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> String {
        self.display_name.read().expect("vault name lock poisoned").clone()
    }

    pub fn set_display_name(&self, name: impl Into<String>) {
        let name = name.into();
        {
            let mut guard = self.display_name.write().expect("vault name lock poisoned");
            if *guard == name {
                return;
            }
            *guard = name;
        }
        self.changed.notify(&VaultEvent::Renamed(self.id.clone()));
    }

    pub fn lock_state(&self) -> LockState {
        *self.state.read().expect("vault state lock poisoned")
    }

    pub fn set_lock_state(&self, state: LockState) {
        {
            let mut guard = self.state.write().expect("vault state lock poisoned");
            if *guard == state {
                return;
            }
            *guard = state;
        }
        log::debug!("Vault '{}' is now {:?}", self.id, state);
        self.changed.notify(&VaultEvent::StateChanged(self.id.clone(), state));
    }

    pub fn is_locked(&self) -> bool {
        self.lock_state().is_locked()
    }

    pub fn is_unlocked(&self) -> bool {
        self.lock_state().is_unlocked()
    }

    pub fn subscribe(&self, callback: impl Fn(&VaultEvent) + Send + Sync + 'static) -> Subscription {
        self.changed.subscribe(callback)
    }
}

impl fmt::Debug for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vault")
            .field("id", &self.id)
            .field("display_name", &self.display_name())
            .field("state", &self.lock_state())
            .finish()
    }
}
