use crate::menu::{EventRouter, TrayMenuSynchronizer};
use crate::tray::{icon, NativeMenuSink, TrayDeps};
use anyhow::Result;
use gtk::{self, glib};
use std::sync::{Arc, RwLock};
use tray_icon::TrayIconBuilder;

pub fn spawn(deps: TrayDeps) -> Result<()> {
    std::thread::spawn(move || {
        if gtk::init().is_err() {
            log::error!("Failed to initialize GTK");
            return;
        }

        let TrayDeps {
            vaults,
            strings,
            actions,
            shutdown_tx,
            mut ui_tasks,
        } = deps;
        let tooltip = strings.get("app.name");

        let sink = NativeMenuSink::new();
        let menu = sink.menu_handle();
        let router = Arc::new(RwLock::new(EventRouter::empty()));
        let mut sync = TrayMenuSynchronizer::new(vaults, strings, actions, sink, router.clone());
        if let Err(e) = sync.initialize() {
            log::error!("Failed to initialize tray menu: {:#}", e);
            return;
        }

        let tray_icon = match TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(&tooltip)
            .with_icon(icon::create_icon())
            .build()
        {
            Ok(tray_icon) => tray_icon,
            Err(e) => {
                log::error!("Failed to create tray icon: {}", e);
                return;
            }
        };

        let menu_receiver = tray_icon::menu::MenuEvent::receiver();
        let mut shutdown_rx = shutdown_tx.subscribe();

        glib::timeout_add_local(std::time::Duration::from_millis(50), move || {
            ui_tasks.drain();
            sync.pump();

            while let Ok(event) = menu_receiver.try_recv() {
                if super::handle_menu_event(&event.id.0, &router) {
                    gtk::main_quit();
                    return glib::ControlFlow::Break;
                }
            }

            if super::shutdown_requested(&mut shutdown_rx) {
                gtk::main_quit();
                return glib::ControlFlow::Break;
            }

            glib::ControlFlow::Continue
        });

        std::mem::forget(tray_icon);
        gtk::main();
    });

    Ok(())
}
