pub mod builder;
pub mod model;
pub mod router;
pub mod sync;

pub use builder::{build_menu, MenuActions};
pub use model::{MenuEntry, MenuModel};
pub use router::{EventPattern, EventRoute, EventRouter, HandlerResult};
pub use sync::{MenuSink, TrayMenuSynchronizer};
