//! Group partitioning.
//!
//! Splits a flat address list into a requested number of groups with
//! balanced sizes. The first member of each contiguous chunk becomes the
//! group's sender, the rest its receivers.

use crate::error::{Error, Result};
use crate::model::Group;
use groupmail_smtp::Address;
use rand::seq::SliceRandom;

/// Smallest legal group: one sender plus one receiver.
pub const MIN_GROUP_SIZE: usize = 2;
/// Largest legal group.
pub const MAX_GROUP_SIZE: usize = 5;

/// Explicit group-id sequence.
///
/// Owned by the partitioner instead of living in ambient global state, so
/// tests can inject a fixed starting value and runs stay deterministic.
#[derive(Debug, Default)]
pub struct IdSequence(u32);

impl IdSequence {
    /// Creates a sequence starting at the given id.
    #[must_use]
    pub const fn starting_at(start: u32) -> Self {
        Self(start)
    }

    fn next(&mut self) -> u32 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// Partitions address lists into groups.
#[derive(Debug, Default)]
pub struct Partitioner {
    ids: IdSequence,
    shuffle: bool,
}

impl Partitioner {
    /// Creates a partitioner with ids starting at zero and no shuffling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a partitioner with an injected id sequence.
    #[must_use]
    pub const fn with_ids(ids: IdSequence) -> Self {
        Self {
            ids,
            shuffle: false,
        }
    }

    /// Enables or disables shuffling the addresses before slicing.
    ///
    /// Shuffling avoids a deterministic sender bias across runs; it is off
    /// by default so tests and repeated runs see stable group assignments.
    #[must_use]
    pub const fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Partitions `addresses` into exactly `group_count` groups.
    ///
    /// Sizes are balanced: with `base = len / group_count` and
    /// `extra = len % group_count`, the first `extra` groups get `base + 1`
    /// members and the rest `base`. Every input address lands in exactly
    /// one group; the first address of each chunk is the sender.
    ///
    /// # Errors
    ///
    /// Returns a distinct [`Error::Config`] when `group_count` is zero,
    /// when there are fewer than `2 * group_count` addresses, or more than
    /// `5 * group_count`. No partial result is ever returned.
    pub fn partition(&mut self, addresses: &[Address], group_count: usize) -> Result<Vec<Group>> {
        if group_count < 1 {
            return Err(Error::Config(
                "number of groups must be at least 1".to_string(),
            ));
        }
        if addresses.len() < group_count * MIN_GROUP_SIZE {
            return Err(Error::Config(format!(
                "not enough addresses ({}) to form {group_count} groups of at least {MIN_GROUP_SIZE}",
                addresses.len()
            )));
        }
        if addresses.len() > group_count * MAX_GROUP_SIZE {
            return Err(Error::Config(format!(
                "too many addresses ({}) to form {group_count} groups of at most {MAX_GROUP_SIZE}",
                addresses.len()
            )));
        }

        let mut pool = addresses.to_vec();
        if self.shuffle {
            pool.shuffle(&mut rand::rng());
        }

        let base = pool.len() / group_count;
        let extra = pool.len() % group_count;

        let mut groups = Vec::with_capacity(group_count);
        let mut rest = pool.as_slice();
        for i in 0..group_count {
            let size = base + usize::from(i < extra);
            let (chunk, tail) = rest.split_at(size);
            rest = tail;

            let sender = chunk[0].clone();
            let receivers = chunk[1..].to_vec();
            groups.push(Group::new(self.ids.next(), sender, receivers));
        }

        Ok(groups)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn addresses(n: usize) -> Vec<Address> {
        (0..n)
            .map(|i| Address::new(format!("user{i}@example.com")).unwrap())
            .collect()
    }

    fn members(group: &Group) -> Vec<Address> {
        let mut all = vec![group.sender().clone()];
        all.extend_from_slice(group.receivers());
        all
    }

    #[test]
    fn rejects_zero_groups() {
        let err = Partitioner::new().partition(&addresses(4), 0).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_too_few_addresses() {
        let err = Partitioner::new().partition(&addresses(5), 3).unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains("not enough")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_too_many_addresses() {
        let err = Partitioner::new().partition(&addresses(16), 3).unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains("too many")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ten_addresses_in_three_groups() {
        let input = addresses(10);
        let groups = Partitioner::new().partition(&input, 3).unwrap();

        let sizes: Vec<usize> = groups.iter().map(Group::member_count).collect();
        assert_eq!(sizes, vec![4, 3, 3]);

        // Contiguous slicing without shuffle: membership in input order.
        let flattened: Vec<Address> = groups.iter().flat_map(|g| members(g)).collect();
        assert_eq!(flattened, input);
    }

    #[test]
    fn sender_is_first_and_excluded_from_receivers() {
        let input = addresses(6);
        let groups = Partitioner::new().partition(&input, 2).unwrap();

        for group in &groups {
            assert!(!group.receivers().contains(group.sender()));
            assert!(!group.receivers().is_empty());
        }
        assert_eq!(groups[0].sender(), &input[0]);
        assert_eq!(groups[1].sender(), &input[3]);
    }

    #[test]
    fn ids_are_monotonic_from_injected_start() {
        let mut partitioner = Partitioner::with_ids(IdSequence::starting_at(7));
        let groups = partitioner.partition(&addresses(4), 2).unwrap();
        assert_eq!(groups[0].id(), 7);
        assert_eq!(groups[1].id(), 8);

        // The counter carries across partition calls, never resetting.
        let more = partitioner.partition(&addresses(4), 2).unwrap();
        assert_eq!(more[0].id(), 9);
        assert_eq!(more[1].id(), 10);
    }

    #[test]
    fn shuffle_preserves_membership() {
        let input = addresses(10);
        let groups = Partitioner::new().shuffle(true).partition(&input, 3).unwrap();

        let got: BTreeSet<String> = groups
            .iter()
            .flat_map(|g| members(g))
            .map(|a| a.as_str().to_string())
            .collect();
        let want: BTreeSet<String> = input.iter().map(|a| a.as_str().to_string()).collect();
        assert_eq!(got, want);
    }

    proptest! {
        #[test]
        fn partition_laws(group_count in 1usize..12, fill in 0usize..=100) {
            // Address count anywhere in the legal band [2g, 5g].
            let span = group_count * (MAX_GROUP_SIZE - MIN_GROUP_SIZE);
            let count = group_count * MIN_GROUP_SIZE + (fill * span) / 100;
            let input = addresses(count);

            let groups = Partitioner::new().partition(&input, group_count).unwrap();

            prop_assert_eq!(groups.len(), group_count);
            for group in &groups {
                prop_assert!(group.member_count() >= MIN_GROUP_SIZE);
                prop_assert!(group.member_count() <= MAX_GROUP_SIZE);
                prop_assert!(!group.receivers().contains(group.sender()));
            }

            // Exact membership preservation: no duplicates or omissions.
            let mut flattened: Vec<String> = groups
                .iter()
                .flat_map(|g| members(g))
                .map(|a| a.as_str().to_string())
                .collect();
            flattened.sort();
            let mut expected: Vec<String> =
                input.iter().map(|a| a.as_str().to_string()).collect();
            expected.sort();
            prop_assert_eq!(flattened, expected);
        }
    }
}
