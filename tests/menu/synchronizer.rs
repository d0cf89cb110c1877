use crate::support::{fake_actions, vault, CallLog, RecordingSink};
use std::sync::{Arc, Mutex, RwLock};
use vault_tray::i18n::Localizer;
use vault_tray::menu::{EventRouter, MenuEntry, MenuModel, TrayMenuSynchronizer};
use vault_tray::vaults::{LockState, VaultCollection, VaultId};

type Models = Arc<Mutex<Vec<MenuModel>>>;

fn synchronizer(
    vaults: Arc<VaultCollection>,
) -> (
    TrayMenuSynchronizer<RecordingSink>,
    Models,
    Arc<RwLock<EventRouter>>,
    Arc<CallLog>,
) {
    let (sink, models) = RecordingSink::new();
    let router = Arc::new(RwLock::new(EventRouter::empty()));
    let (actions, log) = fake_actions();
    let sync = TrayMenuSynchronizer::new(
        vaults,
        Arc::new(Localizer::with_defaults()),
        actions,
        sink,
        router.clone(),
    );
    (sync, models, router, log)
}

fn submenu_labels(model: &MenuModel) -> Vec<String> {
    model
        .submenus()
        .map(|(label, _)| label.to_string())
        .collect()
}

#[test]
fn initialize_performs_the_initial_rebuild() {
    // Arrange
    let vaults = Arc::new(VaultCollection::new());
    vaults.insert(vault("work", "Work")).unwrap();
    let (mut sync, models, _router, _log) = synchronizer(vaults);

    // Act
    sync.initialize().unwrap();

    // Assert
    let models = models.lock().unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(submenu_labels(&models[0]), vec!["Work"]);
    assert_eq!(sync.tracked_vaults(), 1);
}

#[test]
fn second_initialize_is_refused() {
    let vaults = Arc::new(VaultCollection::new());
    let (mut sync, models, _router, _log) = synchronizer(vaults);
    sync.initialize().unwrap();

    let result = sync.initialize();

    assert!(result.is_err());
    assert_eq!(models.lock().unwrap().len(), 1);
}

#[test]
fn added_vault_rebuilds_on_pump() {
    let vaults = Arc::new(VaultCollection::new());
    let (mut sync, models, _router, _log) = synchronizer(vaults.clone());
    sync.initialize().unwrap();

    vaults.insert(vault("work", "Work")).unwrap();
    sync.pump();

    let models = models.lock().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(submenu_labels(models.last().unwrap()), vec!["Work"]);
    assert_eq!(sync.tracked_vaults(), 1);
}

#[test]
fn events_are_deferred_until_pump() {
    let vaults = Arc::new(VaultCollection::new());
    let (mut sync, models, _router, _log) = synchronizer(vaults.clone());
    sync.initialize().unwrap();

    vaults.insert(vault("work", "Work")).unwrap();

    // Mutation happened off the UI loop; nothing rebuilt yet.
    assert_eq!(models.lock().unwrap().len(), 1);
    sync.pump();
    assert_eq!(models.lock().unwrap().len(), 2);
}

#[test]
fn removed_vault_rebuilds_and_stops_rename_tracking() {
    let vaults = Arc::new(VaultCollection::new());
    vaults.insert(vault("work", "Work")).unwrap();
    let (mut sync, models, _router, _log) = synchronizer(vaults.clone());
    sync.initialize().unwrap();

    vaults.remove(&VaultId::new("work")).unwrap();
    sync.pump();

    let models = models.lock().unwrap();
    assert_eq!(models.len(), 2);
    assert!(submenu_labels(models.last().unwrap()).is_empty());
    assert_eq!(sync.tracked_vaults(), 0);
}

#[test]
fn rename_of_tracked_vault_rebuilds_with_new_label() {
    let vaults = Arc::new(VaultCollection::new());
    let v = vaults.insert(vault("work", "Work")).unwrap();
    let (mut sync, models, _router, _log) = synchronizer(vaults);
    sync.initialize().unwrap();

    v.set_display_name("Work (renamed)");
    sync.pump();

    let models = models.lock().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(
        submenu_labels(models.last().unwrap()),
        vec!["Work (renamed)"]
    );
}

#[test]
fn rename_of_removed_vault_does_not_rebuild() {
    let vaults = Arc::new(VaultCollection::new());
    vaults.insert(vault("work", "Work")).unwrap();
    let (mut sync, models, _router, _log) = synchronizer(vaults.clone());
    sync.initialize().unwrap();

    let v = vaults.remove(&VaultId::new("work")).unwrap();
    sync.pump();
    let rebuilds_after_removal = models.lock().unwrap().len();

    v.set_display_name("Ghost");
    sync.pump();

    assert_eq!(models.lock().unwrap().len(), rebuilds_after_removal);
}

#[test]
fn lock_state_change_rebuilds_via_collection_forwarding() {
    let vaults = Arc::new(VaultCollection::new());
    let v = vaults.insert(vault("work", "Work")).unwrap();
    let (mut sync, models, _router, _log) = synchronizer(vaults);
    sync.initialize().unwrap();

    v.set_lock_state(LockState::Unlocked);
    sync.pump();

    let models = models.lock().unwrap();
    assert_eq!(models.len(), 2);
    let latest = models.last().unwrap();
    assert_eq!(submenu_labels(latest), vec!["* Work"]);
    assert!(matches!(
        &latest.entries[5],
        MenuEntry::Action { id, enabled: true, .. } if id == "app::lock_all"
    ));
}

#[test]
fn rebuild_swaps_the_shared_router() {
    let vaults = Arc::new(VaultCollection::new());
    let (mut sync, _models, router, log) = synchronizer(vaults.clone());
    sync.initialize().unwrap();

    vaults.insert(vault("work", "Work")).unwrap();
    sync.pump();

    let result = router
        .read()
        .unwrap()
        .route("vault::work::unlock")
        .unwrap();

    assert!(matches!(result, vault_tray::menu::HandlerResult::Continue));
    assert_eq!(log.entries(), vec!["unlock:work"]);
}

#[test]
fn rebuild_off_the_ui_thread_panics() {
    let vaults = Arc::new(VaultCollection::new());
    let (mut sync, _models, _router, _log) = synchronizer(vaults);
    sync.initialize().unwrap();

    let handle = std::thread::spawn(move || {
        sync.rebuild();
    });

    assert!(handle.join().is_err());
}
