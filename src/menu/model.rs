/// Menu structure as plain data, one lowering step away from the native menu.
/// Rebuilds produce a fresh model every time; nothing is patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action {
        id: String,
        label: String,
        enabled: bool,
    },
    Separator,
    Submenu {
        label: String,
        items: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn action(id: impl Into<String>, label: impl Into<String>) -> Self {
        MenuEntry::Action {
            id: id.into(),
            label: label.into(),
            enabled: true,
        }
    }

    pub fn action_disabled(id: impl Into<String>, label: impl Into<String>) -> Self {
        MenuEntry::Action {
            id: id.into(),
            label: label.into(),
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuModel {
    pub entries: Vec<MenuEntry>,
}

impl MenuModel {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn submenus(&self) -> impl Iterator<Item = (&str, &[MenuEntry])> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Submenu { label, items } => Some((label.as_str(), items.as_slice())),
            _ => None,
        })
    }
}
