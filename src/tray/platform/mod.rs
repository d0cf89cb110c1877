#[cfg(target_os = "linux")]
mod linux;

#[cfg(not(target_os = "linux"))]
mod standard;

use super::TrayDeps;
use crate::menu::{EventRouter, HandlerResult};
use anyhow::Result;
use std::sync::RwLock;
use tokio::sync::broadcast;

pub fn spawn_ui_thread(deps: TrayDeps) -> Result<()> {
    #[cfg(target_os = "linux")]
    {
        linux::spawn(deps)
    }
    #[cfg(not(target_os = "linux"))]
    {
        standard::spawn(deps)
    }
}

/// Routes one menu event. Returns true when the application should quit.
fn handle_menu_event(event_id: &str, router: &RwLock<EventRouter>) -> bool {
    log::debug!("Menu event: {}", event_id);

    let result = router.read().expect("event router poisoned").route(event_id);
    match result {
        Err(e) => {
            log::error!("Error handling menu event: {}", e);
            false
        }
        Ok(HandlerResult::Quit) => {
            log::info!("Quitting application");
            true
        }
        Ok(HandlerResult::Continue) => false,
    }
}

/// Non-blocking check of the shutdown broadcast.
fn shutdown_requested(rx: &mut broadcast::Receiver<()>) -> bool {
    use broadcast::error::TryRecvError;
    match rx.try_recv() {
        Ok(()) => true,
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Closed) => true,
        Err(TryRecvError::Lagged(_)) => true,
    }
}
