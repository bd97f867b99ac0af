//! Outbound email.

use super::{Group, Message};
use groupmail_smtp::Address;

/// An outbound email: envelope addresses plus the message to deliver.
///
/// Built from a [`Group`] and a chosen [`Message`]; immutable; consumed by
/// one [`Mailer::send`](crate::service::Mailer::send) call.
#[derive(Debug, Clone)]
pub struct Email {
    sender: Address,
    receivers: Vec<Address>,
    message: Message,
}

impl Email {
    /// Builds the email for a group: the group's sender mails the group's
    /// receivers.
    #[must_use]
    pub fn for_group(group: &Group, message: Message) -> Self {
        Self {
            sender: group.sender().clone(),
            receivers: group.receivers().to_vec(),
            message,
        }
    }

    /// Returns the sender address.
    #[must_use]
    pub const fn sender(&self) -> &Address {
        &self.sender
    }

    /// Returns the receiver addresses.
    #[must_use]
    pub fn receivers(&self) -> &[Address] {
        &self.receivers
    }

    /// Returns the message subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.subject()
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        self.message.body()
    }
}
