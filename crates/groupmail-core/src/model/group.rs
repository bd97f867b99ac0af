//! Recipient group.

use groupmail_smtp::Address;

/// A partition cell: one sender plus the remaining members as receivers.
///
/// Constructed only by the
/// [`Partitioner`](crate::partition::Partitioner), which guarantees the
/// invariants: receivers never contain the sender, and total membership
/// (sender + receivers) stays within the configured bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: u32,
    sender: Address,
    receivers: Vec<Address>,
}

impl Group {
    pub(crate) const fn new(id: u32, sender: Address, receivers: Vec<Address>) -> Self {
        Self {
            id,
            sender,
            receivers,
        }
    }

    /// Returns the group identifier, monotonic across one partitioner run.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
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

    /// Total membership: sender plus receivers.
    #[must_use]
    pub fn member_count(&self) -> usize {
        1 + self.receivers.len()
    }
}
