pub mod dispatch;
pub mod i18n;
pub mod menu;
pub mod observe;
pub mod paths;
pub mod services;
pub mod settings;
pub mod tray;
pub mod vaults;
