//! Keeps the tray menu consistent with the shared vault collection.
//!
//! The synchronizer lives on the UI thread and owns the menu sink. Vault and
//! collection observers only forward events into the refresh channel; the UI
//! loop drains that channel via [`TrayMenuSynchronizer::pump`], so every
//! rebuild happens on the thread that owns the native menu.

use crate::i18n::Localizer;
use crate::menu::builder::{build_menu, MenuActions};
use crate::menu::model::MenuModel;
use crate::menu::router::EventRouter;
use crate::observe::Subscription;
use crate::vaults::{Vault, VaultCollection, VaultCollectionEvent, VaultEvent, VaultId};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::thread::{self, ThreadId};
use tokio::sync::mpsc;

/// Where the rebuilt menu structure goes. The tray layer lowers the model to
/// the native popup menu; tests record it.
pub trait MenuSink {
    fn replace(&mut self, model: &MenuModel) -> Result<()>;
}

enum RefreshEvent {
    Collection(VaultCollectionEvent),
    Renamed(VaultId),
}

pub struct TrayMenuSynchronizer<S: MenuSink> {
    vaults: Arc<VaultCollection>,
    strings: Arc<Localizer>,
    actions: MenuActions,
    sink: S,
    router: Arc<RwLock<EventRouter>>,
    ui_thread: ThreadId,
    refresh_tx: mpsc::UnboundedSender<RefreshEvent>,
    refresh_rx: mpsc::UnboundedReceiver<RefreshEvent>,
    collection_sub: Option<Subscription>,
    rename_subs: HashMap<VaultId, Subscription>,
}

impl<S: MenuSink> TrayMenuSynchronizer<S> {
    /// Must be constructed on the UI thread; `rebuild` asserts against the
    /// thread identity captured here.
    pub fn new(
        vaults: Arc<VaultCollection>,
        strings: Arc<Localizer>,
        actions: MenuActions,
        sink: S,
        router: Arc<RwLock<EventRouter>>,
    ) -> Self {
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        Self {
            vaults,
            strings,
            actions,
            sink,
            router,
            ui_thread: thread::current().id(),
            refresh_tx,
            refresh_rx,
            collection_sub: None,
            rename_subs: HashMap::new(),
        }
    }

    /// Registers the collection listener plus a rename listener per current
    /// vault and performs the initial rebuild. Calling twice would duplicate
    /// listeners, so a second call is refused.
    pub fn initialize(&mut self) -> Result<()> {
        if self.collection_sub.is_some() {
            anyhow::bail!("Tray menu synchronizer already initialized");
        }

        let tx = self.refresh_tx.clone();
        self.collection_sub = Some(self.vaults.subscribe(move |event| {
            let _ = tx.send(RefreshEvent::Collection(event.clone()));
        }));

        for vault in self.vaults.snapshot() {
            self.track_renames(&vault);
        }

        self.rebuild();
        Ok(())
    }

    /// Drains pending refresh events. Called from the UI loop.
    pub fn pump(&mut self) {
        loop {
            let event = match self.refresh_rx.try_recv() {
                Ok(event) => event,
                Err(_) => break,
            };
            self.handle(event);
        }
    }

    fn handle(&mut self, event: RefreshEvent) {
        match event {
            RefreshEvent::Collection(VaultCollectionEvent::Added(vault)) => {
                self.track_renames(&vault);
                self.rebuild();
            }
            RefreshEvent::Collection(VaultCollectionEvent::Removed(vault)) => {
                // Drop the rename subscription so the departed vault cannot
                // keep triggering rebuilds.
                self.rename_subs.remove(vault.id());
                self.rebuild();
            }
            RefreshEvent::Collection(VaultCollectionEvent::VaultStateChanged(_)) => {
                self.rebuild();
            }
            RefreshEvent::Renamed(id) => {
                if self.rename_subs.contains_key(&id) {
                    self.rebuild();
                } else {
                    log::debug!("Ignoring rename of untracked vault '{}'", id);
                }
            }
        }
    }

    fn track_renames(&mut self, vault: &Arc<Vault>) {
        let tx = self.refresh_tx.clone();
        let sub = vault.subscribe(move |event| {
            if let VaultEvent::Renamed(id) = event {
                let _ = tx.send(RefreshEvent::Renamed(id.clone()));
            }
        });
        self.rename_subs.insert(vault.id().clone(), sub);
    }

    /// Full reconstruction of the menu from the current vault snapshot.
    ///
    /// UI thread only. The native menu toolkit is not thread-safe, so calling
    /// this anywhere else is a caller bug and aborts loudly instead of
    /// corrupting menu state.
    pub fn rebuild(&mut self) {
        assert_eq!(
            thread::current().id(),
            self.ui_thread,
            "tray menu must only be rebuilt on the UI thread"
        );

        let snapshot = self.vaults.snapshot();
        let (model, routes) = build_menu(&snapshot, &self.strings, &self.actions);
        *self.router.write().expect("event router poisoned") = routes;

        if let Err(e) = self.sink.replace(&model) {
            log::error!("Failed to apply rebuilt tray menu: {:#}", e);
        } else {
            log::debug!("Tray menu rebuilt for {} vault(s)", snapshot.len());
        }
    }

    pub fn tracked_vaults(&self) -> usize {
        self.rename_subs.len()
    }
}
