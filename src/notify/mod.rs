//! The publisher/subscriber contract the bridge is built on, plus a minimal reference publisher

use super::*;

mod change_source;
mod event;
mod publisher;
mod subscriber;
mod subscriber_list;

pub use change_source::ChangeSource;
pub use event::PropertyChanged;
pub use publisher::{Publisher, SubscriptionToken};
pub use subscriber::Subscriber;
pub use subscriber_list::{SubscribeReport, SubscriberList, UnsubscribeReport};
