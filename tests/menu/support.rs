#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use vault_tray::menu::{MenuActions, MenuModel, MenuSink};
use vault_tray::services::{AppTerminator, AppWindows, PreferencesTab, VaultOperations};
use vault_tray::vaults::{Vault, VaultId};

/// Records every downstream service call as a readable tag.
#[derive(Default)]
pub struct CallLog {
    calls: Mutex<Vec<String>>,
}

impl CallLog {
    pub fn push(&self, tag: impl Into<String>) {
        self.calls.lock().unwrap().push(tag.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub struct FakeServices {
    log: Arc<CallLog>,
}

impl AppWindows for FakeServices {
    fn show_main_window(&self) {
        self.log.push("show_main");
    }

    fn show_preferences_window(&self, tab: PreferencesTab) {
        self.log.push(format!("show_preferences:{:?}", tab));
    }

    fn start_unlock_workflow(&self, vault: Arc<Vault>) {
        self.log.push(format!("unlock:{}", vault.id()));
    }

    fn start_lock_workflow(&self, vault: Arc<Vault>) {
        self.log.push(format!("lock:{}", vault.id()));
    }
}

impl VaultOperations for FakeServices {
    fn lock_all(&self, vaults: Vec<Arc<Vault>>, force: bool) {
        let ids: Vec<String> = vaults.iter().map(|v| v.id().to_string()).collect();
        self.log.push(format!("lock_all:[{}]:{}", ids.join(","), force));
    }

    fn reveal(&self, vault: Arc<Vault>) {
        self.log.push(format!("reveal:{}", vault.id()));
    }
}

impl AppTerminator for FakeServices {
    fn terminate(&self) {
        self.log.push("terminate");
    }
}

pub fn fake_actions() -> (MenuActions, Arc<CallLog>) {
    let log = Arc::new(CallLog::default());
    let services = Arc::new(FakeServices { log: log.clone() });
    let actions = MenuActions {
        windows: services.clone(),
        vault_ops: services.clone(),
        terminator: services,
    };
    (actions, log)
}

/// Menu sink that keeps every applied model for inspection.
pub struct RecordingSink {
    pub models: Arc<Mutex<Vec<MenuModel>>>,
}

impl RecordingSink {
    pub fn new() -> (Self, Arc<Mutex<Vec<MenuModel>>>) {
        let models = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                models: models.clone(),
            },
            models,
        )
    }
}

impl MenuSink for RecordingSink {
    fn replace(&mut self, model: &MenuModel) -> anyhow::Result<()> {
        self.models.lock().unwrap().push(model.clone());
        Ok(())
    }
}

pub fn vault(id: &str, name: &str) -> Vault {
    Vault::new(VaultId::new(id), name, format!("/vaults/{}", id))
}
