// Path: crates/api/src/program/directory.rs

//! Read-only lookup of registered programs.

use crate::program::OnChainProgram;
use ae_types::app::Address;
use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A read-only, type-safe program locator.
#[derive(Clone, Default)]
pub struct ProgramDirectory {
    /// Programs keyed by id, which also gives a deterministic iteration order.
    by_id: Arc<BTreeMap<Address, Arc<dyn OnChainProgram>>>,
    /// A map for fast, type-based lookups.
    by_type: Arc<HashMap<TypeId, Arc<dyn OnChainProgram>>>,
}

impl fmt::Debug for ProgramDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgramDirectory")
            .field("program_count", &self.by_id.len())
            .finish()
    }
}

impl ProgramDirectory {
    /// Creates a directory from a list of programs.
    /// A later program with the same id replaces an earlier one.
    pub fn new(programs: Vec<Arc<dyn OnChainProgram>>) -> Self {
        let mut by_id = BTreeMap::new();
        let mut by_type = HashMap::new();
        for p in programs {
            by_type.insert(p.as_any().type_id(), p.clone());
            by_id.insert(p.program_id(), p);
        }
        Self {
            by_id: Arc::new(by_id),
            by_type: Arc::new(by_type),
        }
    }

    /// Looks up a program by its address.
    pub fn get_by_id(&self, program_id: &Address) -> Option<&Arc<dyn OnChainProgram>> {
        self.by_id.get(program_id)
    }

    /// Gets a program by its concrete type.
    pub fn get<T: OnChainProgram + 'static>(&self) -> Option<&T> {
        self.by_type
            .get(&TypeId::of::<T>())
            .and_then(|p| p.as_any().downcast_ref::<T>())
    }

    /// Returns a deterministically ordered iterator over all programs.
    pub fn programs(&self) -> impl Iterator<Item = &Arc<dyn OnChainProgram>> {
        self.by_id.values()
    }

    /// True if a program is registered at `program_id`.
    pub fn contains(&self, program_id: &Address) -> bool {
        self.by_id.contains_key(program_id)
    }
}
