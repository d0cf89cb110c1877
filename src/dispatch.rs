//! Marshals closures onto the UI thread.
//!
//! Background workers never touch vault state directly; they hand a task to
//! the [`UiDispatcher`] and the tray event loop drains the queue on the thread
//! that owns the menu. Change notifications therefore always fire there.

use tokio::sync::mpsc;

pub type UiTask = Box<dyn FnOnce() + Send>;

#[derive(Clone)]
pub struct UiDispatcher {
    tx: mpsc::UnboundedSender<UiTask>,
}

impl UiDispatcher {
    pub fn dispatch(&self, task: impl FnOnce() + Send + 'static) {
        if self.tx.send(Box::new(task)).is_err() {
            log::warn!("UI task dropped: tray event loop is gone");
        }
    }
}

pub struct UiTaskQueue {
    rx: mpsc::UnboundedReceiver<UiTask>,
}

impl UiTaskQueue {
    /// Runs every queued task. Called from the UI loop only.
    pub fn drain(&mut self) {
        while let Ok(task) = self.rx.try_recv() {
            task();
        }
    }
}

pub fn ui_channel() -> (UiDispatcher, UiTaskQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiDispatcher { tx }, UiTaskQueue { rx })
}
