//! Immutable value objects.

mod email;
mod group;
mod message;

pub use email::Email;
pub use group::Group;
pub use message::Message;
