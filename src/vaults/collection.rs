use crate::observe::{Observers, Subscription};
use crate::vaults::{Vault, VaultEvent, VaultId};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub enum VaultCollectionEvent {
    Added(Arc<Vault>),
    Removed(Arc<Vault>),
    /// A member vault changed its lock state. Forwarded through the
    /// collection's change source so subscribers see lock transitions without
    /// tracking every vault themselves.
    VaultStateChanged(VaultId),
}

/// Ordered, shared set of vaults. Insertion order is display order. May be
/// mutated from any thread; events fire on the mutating thread.
pub struct VaultCollection {
    vaults: Mutex<Vec<Arc<Vault>>>,
    changed: Arc<Observers<VaultCollectionEvent>>,
    state_forwards: Mutex<HashMap<VaultId, Subscription>>,
}

impl VaultCollection {
    pub fn new() -> Self {
        Self {
            vaults: Mutex::new(Vec::new()),
            changed: Arc::new(Observers::new()),
            state_forwards: Mutex::new(HashMap::new()),
        }
    }

    /// Appends a vault. Duplicate identities are rejected.
    pub fn insert(&self, vault: Vault) -> Result<Arc<Vault>> {
        let vault = Arc::new(vault);
        {
            let mut vaults = self.vaults.lock().expect("vault list poisoned");
            if vaults.iter().any(|v| v.id() == vault.id()) {
                anyhow::bail!("Vault with id '{}' already present", vault.id());
            }
            vaults.push(vault.clone());
        }

        let changed = self.changed.clone();
        let forward = vault.subscribe(move |event| {
            if let VaultEvent::StateChanged(id, _) = event {
                changed.notify(&VaultCollectionEvent::VaultStateChanged(id.clone()));
            }
        });
        self.state_forwards
            .lock()
            .expect("state forward map poisoned")
            .insert(vault.id().clone(), forward);

        log::info!("Vault '{}' added to collection", vault.id());
        self.changed.notify(&VaultCollectionEvent::Added(vault.clone()));
        Ok(vault)
    }

    pub fn remove(&self, id: &VaultId) -> Option<Arc<Vault>> {
        let removed = {
            let mut vaults = self.vaults.lock().expect("vault list poisoned");
            let position = vaults.iter().position(|v| v.id() == id)?;
            vaults.remove(position)
        };

        // Stop forwarding state changes of a vault that is no longer ours.
        self.state_forwards
            .lock()
            .expect("state forward map poisoned")
            .remove(id);

        log::info!("Vault '{}' removed from collection", id);
        self.changed.notify(&VaultCollectionEvent::Removed(removed.clone()));
        Some(removed)
    }

    pub fn get(&self, id: &VaultId) -> Option<Arc<Vault>> {
        self.vaults
            .lock()
            .expect("vault list poisoned")
            .iter()
            .find(|v| v.id() == id)
            .cloned()
    }

    /// Current members in display order.
    pub fn snapshot(&self) -> Vec<Arc<Vault>> {
        self.vaults.lock().expect("vault list poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.vaults.lock().expect("vault list poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn any_unlocked(&self) -> bool {
        self.snapshot().iter().any(|v| v.is_unlocked())
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(&VaultCollectionEvent) + Send + Sync + 'static,
    ) -> Subscription {
        self.changed.subscribe(callback)
    }
}

impl Default for VaultCollection {
    fn default() -> Self {
        Self::new()
    }
}
