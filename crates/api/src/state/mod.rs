// Path: crates/api/src/state/mod.rs
//! Core traits for state management.
//!
//! - `StateAccess`: basic key-value store operations.
//! - `StateOverlay`: a copy-on-write layer used to make transactions atomic.
//! - `MemoryState`: the in-memory backend of the local chain.
//! - `AccountStore`: typed `AccountInfo` access on top of any `StateAccess`.

use ae_types::error::StateError;
use std::sync::Arc;

// --- Type Aliases for common state patterns ---
/// An atomically reference-counted, owned key slice.
pub type StateKey = Arc<[u8]>;
/// An atomically reference-counted, owned value slice.
pub type StateVal = Arc<[u8]>;
/// An owned key-value pair from the state, using cheap-to-clone Arcs.
pub type StateKVPair = (StateKey, StateVal);
/// A streaming iterator over key-value pairs from the state.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = Result<StateKVPair, StateError>> + Send + 'a>;

mod accessor;
mod accounts;
mod memory;
mod overlay;

pub use accessor::*;
pub use accounts::*;
pub use memory::*;
pub use overlay::*;
