pub mod icon;
pub mod menu_sink;
pub mod platform;

pub use menu_sink::NativeMenuSink;

use crate::dispatch::UiTaskQueue;
use crate::i18n::Localizer;
use crate::menu::builder::MenuActions;
use crate::vaults::VaultCollection;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast;

pub struct TrayDeps {
    pub vaults: Arc<VaultCollection>,
    pub strings: Arc<Localizer>,
    pub actions: MenuActions,
    pub shutdown_tx: broadcast::Sender<()>,
    pub ui_tasks: UiTaskQueue,
}

/// Spawns the dedicated UI thread that owns the tray icon and its menu. The
/// thread drains marshalled UI tasks, pumps the menu synchronizer and routes
/// menu events until quit or shutdown.
pub fn spawn(deps: TrayDeps) -> Result<()> {
    platform::spawn_ui_thread(deps)
}
