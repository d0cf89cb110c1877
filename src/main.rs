use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast;
use vault_tray::dispatch;
use vault_tray::i18n::Localizer;
use vault_tray::menu::MenuActions;
use vault_tray::paths;
use vault_tray::services::{BroadcastTerminator, MountPointBackend, Workflows};
use vault_tray::settings::{Settings, SettingsStore};
use vault_tray::tray::{self, TrayDeps};
use vault_tray::vaults::{Vault, VaultCollection, VaultId};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = load_settings();
    let default_filter = if settings.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("Starting vault tray...");

    let vaults = Arc::new(VaultCollection::new());
    for entry in &settings.vaults {
        let vault = Vault::new(VaultId::new(&entry.id), &entry.display_name, &entry.path);
        if let Err(e) = vaults.insert(vault) {
            log::warn!("Skipping vault from settings: {:#}", e);
        }
    }
    log::info!("Loaded {} vault(s) from settings", vaults.len());

    let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);
    let (ui, ui_tasks) = dispatch::ui_channel();

    let workflows = Arc::new(Workflows::new(Arc::new(MountPointBackend), ui));

    // The embedding UI would raise windows here; standalone we only log.
    let mut window_rx = workflows.subscribe_windows();
    tokio::spawn(async move {
        while let Ok(request) = window_rx.recv().await {
            log::info!("Window request: {:?}", request);
        }
    });

    let actions = MenuActions {
        windows: workflows.clone(),
        vault_ops: workflows.clone(),
        terminator: Arc::new(BroadcastTerminator::new(shutdown_tx.clone())),
    };

    let strings = Arc::new(load_strings());

    if settings.show_tray_icon {
        tray::spawn(TrayDeps {
            vaults: vaults.clone(),
            strings,
            actions,
            shutdown_tx: shutdown_tx.clone(),
            ui_tasks,
        })?;
    } else {
        log::info!("Tray icon disabled in settings");
    }

    shutdown_rx.recv().await.ok();
    log::info!("Shutdown signal received, exiting...");
    Ok(())
}

fn load_settings() -> Settings {
    let store = match SettingsStore::new() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Could not locate settings: {:#}", e);
            return Settings::default();
        }
    };
    match store.load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Could not read settings, using defaults: {:#}", e);
            Settings::default()
        }
    }
}

fn load_strings() -> Localizer {
    let path = match paths::strings_path() {
        Ok(path) => path,
        Err(_) => return Localizer::with_defaults(),
    };
    match Localizer::from_file(&path) {
        Ok(strings) => strings,
        Err(e) => {
            log::warn!("Could not read string overrides: {:#}", e);
            Localizer::with_defaults()
        }
    }
}
