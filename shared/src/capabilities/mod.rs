mod notify;

pub use self::notify::{Notify, NotifyOperation, ToastKind};

// Crux's built-in Render capability covers view updates as-is.
pub use crux_core::render::Render;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub notify: Notify<Event>,
}
