use crate::i18n::Localizer;
use crate::menu::model::{MenuEntry, MenuModel};
use crate::menu::router::{EventPattern, EventRoute, EventRouter, HandlerResult};
use crate::services::{AppTerminator, AppWindows, PreferencesTab, VaultOperations};
use crate::vaults::{LockState, Vault};
use std::sync::Arc;

pub const SHOW_MAIN_ID: &str = "app::show_main";
pub const PREFERENCES_ID: &str = "app::preferences";
pub const LOCK_ALL_ID: &str = "app::lock_all";
pub const QUIT_ID: &str = "app::quit";

/// Marker prefixed to the submenu label of an unlocked vault.
const UNLOCK_MARKER: &str = "* ";

/// Downstream services the menu actions delegate to.
#[derive(Clone)]
pub struct MenuActions {
    pub windows: Arc<dyn AppWindows>,
    pub vault_ops: Arc<dyn VaultOperations>,
    pub terminator: Arc<dyn AppTerminator>,
}

/// Builds the complete menu for the given vault snapshot, in fixed order:
/// show-main, preferences, separator, one submenu per vault, separator,
/// lock-all (enabled iff any vault is unlocked), quit.
///
/// Every vault handler captures its `Arc<Vault>` here, at build time; a click
/// always targets the vault that was live when the menu was built, even if
/// the collection has changed since.
pub fn build_menu(
    vaults: &[Arc<Vault>],
    strings: &Localizer,
    actions: &MenuActions,
) -> (MenuModel, EventRouter) {
    let mut entries = Vec::with_capacity(vaults.len() + 6);
    let mut routes = Vec::with_capacity(vaults.len() + 4);

    entries.push(MenuEntry::action(
        SHOW_MAIN_ID,
        strings.get("traymenu.showMainWindow"),
    ));
    let windows = actions.windows.clone();
    routes.push(EventRoute {
        pattern: EventPattern::Exact(SHOW_MAIN_ID.to_string()),
        handler: Box::new(move |_| {
            windows.show_main_window();
            Ok(HandlerResult::Continue)
        }),
    });

    entries.push(MenuEntry::action(
        PREFERENCES_ID,
        strings.get("traymenu.showPreferencesWindow"),
    ));
    let windows = actions.windows.clone();
    routes.push(EventRoute {
        pattern: EventPattern::Exact(PREFERENCES_ID.to_string()),
        handler: Box::new(move |_| {
            windows.show_preferences_window(PreferencesTab::Any);
            Ok(HandlerResult::Continue)
        }),
    });

    entries.push(MenuEntry::Separator);

    for vault in vaults {
        entries.push(vault_submenu(vault, strings));
        routes.push(vault_route(vault.clone(), actions));
    }

    entries.push(MenuEntry::Separator);

    let lock_all_label = strings.get("traymenu.lockAllVaults");
    let any_unlocked = vaults.iter().any(|v| v.is_unlocked());
    entries.push(if any_unlocked {
        MenuEntry::action(LOCK_ALL_ID, lock_all_label)
    } else {
        MenuEntry::action_disabled(LOCK_ALL_ID, lock_all_label)
    });
    let vault_ops = actions.vault_ops.clone();
    let snapshot: Vec<Arc<Vault>> = vaults.to_vec();
    routes.push(EventRoute {
        pattern: EventPattern::Exact(LOCK_ALL_ID.to_string()),
        handler: Box::new(move |_| {
            let unlocked: Vec<Arc<Vault>> = snapshot
                .iter()
                .filter(|v| v.is_unlocked())
                .cloned()
                .collect();
            vault_ops.lock_all(unlocked, false);
            Ok(HandlerResult::Continue)
        }),
    });

    entries.push(MenuEntry::action(
        QUIT_ID,
        strings.get("traymenu.quitApplication"),
    ));
    let terminator = actions.terminator.clone();
    routes.push(EventRoute {
        pattern: EventPattern::Exact(QUIT_ID.to_string()),
        handler: Box::new(move |_| {
            terminator.terminate();
            Ok(HandlerResult::Quit)
        }),
    });

    (MenuModel::new(entries), EventRouter::new(routes))
}

pub fn vault_item_id(vault: &Vault, action: &str) -> String {
    format!("vault::{}::{}", vault.id(), action)
}

fn vault_submenu(vault: &Vault, strings: &Localizer) -> MenuEntry {
    let state = vault.lock_state();
    let name = vault.display_name();

    let (label, items) = match state {
        LockState::Locked => (
            name,
            vec![MenuEntry::action(
                vault_item_id(vault, "unlock"),
                strings.get("traymenu.vault.unlock"),
            )],
        ),
        LockState::Unlocked => (
            format!("{}{}", UNLOCK_MARKER, name),
            vec![
                MenuEntry::action(
                    vault_item_id(vault, "lock"),
                    strings.get("traymenu.vault.lock"),
                ),
                MenuEntry::action(
                    vault_item_id(vault, "reveal"),
                    strings.get("traymenu.vault.reveal"),
                ),
            ],
        ),
        // A lock or unlock is in flight; offering actions here would allow
        // duplicate operations on the same vault.
        LockState::Unlocking | LockState::Locking => (name, Vec::new()),
    };

    MenuEntry::Submenu { label, items }
}

fn vault_route(vault: Arc<Vault>, actions: &MenuActions) -> EventRoute {
    let prefix = format!("vault::{}::", vault.id());
    let windows = actions.windows.clone();
    let vault_ops = actions.vault_ops.clone();

    EventRoute {
        pattern: EventPattern::Prefix(prefix),
        handler: Box::new(move |event_id| {
            let action = event_id.rsplit("::").next().unwrap_or_default();
            match action {
                "unlock" => windows.start_unlock_workflow(vault.clone()),
                "lock" => windows.start_lock_workflow(vault.clone()),
                "reveal" => vault_ops.reveal(vault.clone()),
                other => log::warn!("Unknown vault action '{}' for '{}'", other, vault.id()),
            }
            Ok(HandlerResult::Continue)
        }),
    }
}
