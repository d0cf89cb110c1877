use std::sync::Arc;

/// A passphrase storage backend. The `id` is the stable key persisted in
/// settings; display names are for the preferences UI only.
pub trait KeychainAccess: Send + Sync {
    fn id(&self) -> &'static str;
    fn display_name(&self) -> String;
}

/// Resolves the persisted provider id to a registered provider. An unknown id
/// (provider uninstalled, settings from another machine) resolves to `None`.
pub struct KeychainRegistry {
    providers: Vec<Arc<dyn KeychainAccess>>,
}

impl KeychainRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn register(&mut self, provider: Arc<dyn KeychainAccess>) {
        self.providers.push(provider);
    }

    pub fn providers(&self) -> &[Arc<dyn KeychainAccess>] {
        &self.providers
    }

    pub fn by_id(&self, id: &str) -> Option<Arc<dyn KeychainAccess>> {
        self.providers.iter().find(|p| p.id() == id).cloned()
    }

    pub fn selected(&self, persisted_id: Option<&str>) -> Option<Arc<dyn KeychainAccess>> {
        persisted_id.and_then(|id| self.by_id(id))
    }
}

impl Default for KeychainRegistry {
    fn default() -> Self {
        Self::new()
    }
}
