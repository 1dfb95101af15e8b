// Path: crates/api/src/state/overlay.rs

//! A copy-on-write state overlay for atomic transaction execution.

use crate::state::{StateAccess, StateKVPair, StateScanIter};
use ae_types::error::StateError;
use std::cmp::Ordering;
use std::collections::{btree_map, BTreeMap};
use std::iter::Peekable;
use std::ops::Bound;
use std::sync::Arc;

/// Upserted key-value pairs, in key order.
pub type StateInserts = Vec<(Vec<u8>, Vec<u8>)>;

/// Deleted keys, in key order.
pub type StateDeletes = Vec<Vec<u8>>;

/// Everything a transaction wrote: `(inserts, deletes)`.
pub type StateChangeSet = (StateInserts, StateDeletes);

/// The first key past every key that starts with `prefix`: the prefix with its
/// trailing `0xFF` bytes dropped and the last remaining byte incremented.
/// `None` when no such key exists (empty or all-`0xFF` prefix).
fn prefix_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let last = prefix.iter().rposition(|b| *b != 0xFF)?;
    let mut bound = prefix.get(..=last)?.to_vec();
    if let Some(b) = bound.last_mut() {
        *b += 1;
    }
    Some(bound)
}

/// The `BTreeMap` range covering exactly the keys that start with `prefix`.
pub(crate) fn prefix_bounds(prefix: &[u8]) -> (Bound<Vec<u8>>, Bound<Vec<u8>>) {
    let upper = prefix_upper_bound(prefix).map_or(Bound::Unbounded, Bound::Excluded);
    (Bound::Included(prefix.to_vec()), upper)
}

type PendingRange<'a> = Peekable<btree_map::Range<'a, Vec<u8>, Option<Vec<u8>>>>;

/// A key-ordered scan of the base state with the overlay's pending writes
/// laid over it. Pending deletes hide base entries; pending inserts replace them.
struct OverlayScan<'a> {
    base: Peekable<StateScanIter<'a>>,
    pending: PendingRange<'a>,
    base_done: bool,
}

impl OverlayScan<'_> {
    /// Order of the next base key relative to the next pending key. A base
    /// error sorts first so it is surfaced immediately.
    fn next_source(&mut self) -> Option<Ordering> {
        let base = if self.base_done {
            None
        } else {
            match self.base.peek() {
                Some(Ok((k, _))) => Some(Some(k.as_ref())),
                Some(Err(_)) => Some(None),
                None => None,
            }
        };
        let pending = self.pending.peek().map(|(k, _)| k.as_slice());
        match (base, pending) {
            (Some(None), _) => Some(Ordering::Less),
            (Some(Some(b)), Some(p)) => Some(b.cmp(p)),
            (Some(Some(_)), None) => Some(Ordering::Less),
            (None, Some(_)) => Some(Ordering::Greater),
            (None, None) => None,
        }
    }

    fn take_pending(&mut self) -> Option<StateKVPair> {
        match self.pending.next()? {
            (key, Some(value)) => Some((Arc::from(key.as_slice()), Arc::from(value.as_slice()))),
            (_, None) => None,
        }
    }
}

impl Iterator for OverlayScan<'_> {
    type Item = Result<StateKVPair, StateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_source()? {
                Ordering::Less => {
                    let item = self.base.next();
                    if !matches!(item, Some(Ok(_))) {
                        self.base_done = true;
                    }
                    return item;
                }
                Ordering::Equal => {
                    self.base.next();
                    if let Some(pair) = self.take_pending() {
                        return Some(Ok(pair));
                    }
                }
                Ordering::Greater => {
                    if let Some(pair) = self.take_pending() {
                        return Some(Ok(pair));
                    }
                }
            }
        }
    }
}

/// A copy-on-write layer over any `StateAccess`.
///
/// Writes land in a sorted pending map (`None` marks a delete) and reads
/// consult it before falling through to `base`. Nothing reaches `base` until
/// the caller applies the change set from `into_ordered_batch`; dropping the
/// overlay discards every write.
#[derive(Clone)]
pub struct StateOverlay<'a> {
    base: &'a dyn StateAccess,
    pending: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> StateOverlay<'a> {
    /// An empty overlay on top of `base`.
    pub fn new(base: &'a dyn StateAccess) -> Self {
        Self {
            base,
            pending: BTreeMap::new(),
        }
    }

    /// Keys written (inserted or deleted) through this overlay, in order.
    pub fn written_keys(&self) -> impl Iterator<Item = &[u8]> {
        self.pending.keys().map(Vec::as_slice)
    }

    /// Splits the pending writes into key-ordered inserts and deletes.
    pub fn into_ordered_batch(self) -> StateChangeSet {
        let mut inserts = Vec::new();
        let mut deletes = Vec::new();
        for (key, value) in self.pending {
            match value {
                Some(value) => inserts.push((key, value)),
                None => deletes.push(key),
            }
        }
        (inserts, deletes)
    }
}

impl StateAccess for StateOverlay<'_> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        match self.pending.get(key) {
            Some(value) => Ok(value.clone()),
            None => self.base.get(key),
        }
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.pending.insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.pending.insert(key.to_vec(), None);
        Ok(())
    }

    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError> {
        for key in deletes {
            self.pending.insert(key.clone(), None);
        }
        for (key, value) in inserts {
            self.pending.insert(key.clone(), Some(value.clone()));
        }
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        Ok(Box::new(OverlayScan {
            base: self.base.prefix_scan(prefix)?.peekable(),
            pending: self.pending.range(prefix_bounds(prefix)).peekable(),
            base_done: false,
        }))
    }
}
