//! Name to index registry for every function in a module.

use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::compiler::function::{FunctionDefinition, FunctionId};
use crate::compiler::symbols::SymbolTable;
use crate::error::{Error, Result};

/// Function names interned to dense ids, each with an optional body.
///
/// A name is *referenced* once a call to it is compiled and *defined* once
/// its declaration is. Both may happen in either order.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    names: SymbolTable,
    bodies: Vec<Option<FunctionDefinition>>,
}

impl FunctionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `name`, reserving one without a body on first use.
    pub fn reference(&mut self, name: &str) -> FunctionId {
        let (id, fresh) = self.names.intern_new(name);
        if fresh {
            self.bodies.push(None);
            debug!(name, id, "reserved function id");
        }
        id
    }

    /// Attaches a new, empty body to `name`.
    pub fn define(&mut self, name: &str, outer: Option<FunctionId>) -> Result<FunctionId> {
        let id = self.reference(name);
        let slot = &mut self.bodies[id as usize];
        if slot.is_some() {
            return Err(Error::DuplicateFunctionDefinition(name.to_string()));
        }
        *slot = Some(FunctionDefinition::new(outer));
        debug!(name, id, ?outer, "defined function");
        Ok(id)
    }

    /// Id of `name`, without reserving.
    pub fn lookup(&self, name: &str) -> Option<FunctionId> {
        self.names.lookup(name)
    }

    /// Name of the function with `id`.
    pub fn name(&self, id: FunctionId) -> Option<&str> {
        self.names.name(id)
    }

    /// Body of the function with `id`, if defined.
    pub fn get(&self, id: FunctionId) -> Option<&FunctionDefinition> {
        self.bodies.get(id as usize).and_then(Option::as_ref)
    }

    /// Mutable body of the function with `id`, if defined.
    pub fn get_mut(&mut self, id: FunctionId) -> Option<&mut FunctionDefinition> {
        self.bodies.get_mut(id as usize).and_then(Option::as_mut)
    }

    /// Whether `id` has a body.
    pub fn is_defined(&self, id: FunctionId) -> bool {
        self.get(id).is_some()
    }

    /// Number of ids handed out.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether no function was referenced or defined.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// `(id, name, body)` triples in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (FunctionId, &str, Option<&FunctionDefinition>)> + '_ {
        self.names
            .iter()
            .map(move |(name, id)| (id, name, self.get(id)))
    }

    /// Fails on the first referenced but undefined function, then finalizes
    /// every body.
    pub fn resolve_all(&mut self) -> Result<()> {
        if let Some((_, name, _)) = self.iter().find(|(_, _, body)| body.is_none()) {
            return Err(Error::UndefinedFunctionReference(name.to_string()));
        }
        self.finalize_bodies()
    }

    #[cfg(feature = "parallel")]
    fn finalize_bodies(&mut self) -> Result<()> {
        use rayon::prelude::*;

        let results: Vec<Result<()>> = self
            .bodies
            .par_iter_mut()
            .map(|body| match body {
                Some(body) => body.finalize(),
                None => Ok(()),
            })
            .collect();
        results.into_iter().collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn finalize_bodies(&mut self) -> Result<()> {
        self.bodies
            .iter_mut()
            .flatten()
            .try_for_each(FunctionDefinition::finalize)
    }
}

impl Index<FunctionId> for FunctionTable {
    type Output = FunctionDefinition;

    fn index(&self, id: FunctionId) -> &Self::Output {
        match self.get(id) {
            Some(body) => body,
            None => panic!("function {id} has no body"),
        }
    }
}

impl IndexMut<FunctionId> for FunctionTable {
    fn index_mut(&mut self, id: FunctionId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(body) => body,
            None => panic!("function {id} has no body"),
        }
    }
}
