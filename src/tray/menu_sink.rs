use crate::menu::{MenuEntry, MenuModel, MenuSink};
use anyhow::Result;
use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem, Submenu};

/// Lowers a [`MenuModel`] into the native popup menu. Lives on the UI thread;
/// the native menu handle is not thread-safe.
pub struct NativeMenuSink {
    menu: Menu,
}

impl NativeMenuSink {
    pub fn new() -> Self {
        Self { menu: Menu::new() }
    }

    /// Shared handle for the tray icon builder.
    pub fn menu_handle(&self) -> Menu {
        self.menu.clone()
    }
}

impl Default for NativeMenuSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuSink for NativeMenuSink {
    fn replace(&mut self, model: &MenuModel) -> Result<()> {
        while self.menu.remove_at(0).is_some() {}
        for entry in &model.entries {
            append_entry(&self.menu, entry)?;
        }
        Ok(())
    }
}

fn append_entry(menu: &Menu, entry: &MenuEntry) -> Result<()> {
    match entry {
        MenuEntry::Action { id, label, enabled } => {
            menu.append(&MenuItem::with_id(id.clone(), label, *enabled, None))?;
        }
        MenuEntry::Separator => {
            menu.append(&PredefinedMenuItem::separator())?;
        }
        MenuEntry::Submenu { label, items } => {
            let submenu = Submenu::new(label, true);
            for item in items {
                append_sub_entry(&submenu, item)?;
            }
            menu.append(&submenu)?;
        }
    }
    Ok(())
}

fn append_sub_entry(parent: &Submenu, entry: &MenuEntry) -> Result<()> {
    match entry {
        MenuEntry::Action { id, label, enabled } => {
            parent.append(&MenuItem::with_id(id.clone(), label, *enabled, None))?;
        }
        MenuEntry::Separator => {
            parent.append(&PredefinedMenuItem::separator())?;
        }
        MenuEntry::Submenu { label, items } => {
            let submenu = Submenu::new(label, true);
            for item in items {
                append_sub_entry(&submenu, item)?;
            }
            parent.append(&submenu)?;
        }
    }
    Ok(())
}
