//! Per-function jump targets.
//!
//! Jumps reference a [`Label`] at emission time. Offsets are only read when
//! the owning function is finalized, so forward and backward jumps go
//! through the same single resolution step.

use std::fmt;

use crate::error::{Error, Result};

/// An instruction offset inside one function, possibly not yet known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(u32);

impl Label {
    /// The label's id within its table.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Allocates labels and records where they are placed.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    offsets: Vec<Option<u32>>,
}

impl LabelTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, unplaced label.
    pub fn create(&mut self) -> Label {
        let label = Label(self.offsets.len() as u32);
        self.offsets.push(None);
        label
    }

    /// Places `label` at `offset`.
    pub fn place(&mut self, label: Label, offset: u32) -> Result<()> {
        let slot = self
            .offsets
            .get_mut(label.0 as usize)
            .ok_or(Error::UnplacedLabel(label))?;
        if slot.is_some() {
            return Err(Error::DoubleLabelPlacement(label));
        }
        *slot = Some(offset);
        Ok(())
    }

    /// The offset `label` was placed at.
    pub fn offset_of(&self, label: Label) -> Result<u32> {
        self.offsets
            .get(label.0 as usize)
            .copied()
            .flatten()
            .ok_or(Error::UnplacedLabel(label))
    }

    /// Whether any label is placed at `offset`.
    pub fn is_target(&self, offset: u32) -> bool {
        self.offsets.contains(&Some(offset))
    }

    /// Fails with the first label that was created but never placed.
    pub fn ensure_all_placed(&self) -> Result<()> {
        match self.offsets.iter().position(Option::is_none) {
            Some(index) => Err(Error::UnplacedLabel(Label(index as u32))),
            None => Ok(()),
        }
    }

    /// Number of labels created.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether no label was created.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
