//! Name interning.
//!
//! One table type serves argument names, local names, function names and
//! string constants. Ids are handed out from 0 in first-use order and are
//! never reused or reassigned, so they are always dense over `[0, len)`.

use rustc_hash::FxHashMap;

/// Maps names to dense ids.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// name -> id
    ids: FxHashMap<String, u32>,
    /// id -> name
    names: Vec<String>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a name up without interning it.
    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }

    /// Returns the id of `name`, assigning the next id on first use.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(id) = self.lookup(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        id
    }

    /// Like [`intern`](Self::intern), also reporting whether the name is new.
    pub fn intern_new(&mut self, name: &str) -> (u32, bool) {
        let before = self.names.len();
        let id = self.intern(name);
        (id, self.names.len() != before)
    }

    /// The name interned under `id`.
    pub fn name(&self, id: u32) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(name, id)` pairs in ascending id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, u32)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id as u32))
    }
}
