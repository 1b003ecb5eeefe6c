//! The weak subscription bridge itself

use super::*;

mod handler;
mod weak_bridge;

pub use handler::{FreeHandlerFn, Handler, HandlerFn};
pub use weak_bridge::{BridgeHandle, WeakBridge};
