//! A single function under construction.
//!
//! Arguments occupy the low slot range `[0, nargs)`, locals follow at
//! `[nargs, nargs + nregs)`.

use tracing::debug;

use crate::compiler::bytecode::{Instruction, OpCode, Operand, Word};
use crate::compiler::labels::{Label, LabelTable};
use crate::compiler::symbols::SymbolTable;
use crate::error::{Error, Result};

/// Index of a function in its module's function table.
pub type FunctionId = u32;

/// Argument scope, local scope, labels and the linear instruction stream
/// of one function.
#[derive(Debug, Clone, Default)]
pub struct FunctionDefinition {
    /// Lexically enclosing function (`None` for top level)
    outer: Option<FunctionId>,
    args: SymbolTable,
    regs: SymbolTable,
    labels: LabelTable,
    instructions: Vec<Instruction>,
    finalized: Option<Finalized>,
}

#[derive(Debug, Clone)]
struct Finalized {
    nargs: u32,
    nregs: u32,
    code: Vec<Word>,
}

impl FunctionDefinition {
    /// Creates an empty definition nested in `outer`.
    pub fn new(outer: Option<FunctionId>) -> Self {
        Self {
            outer,
            ..Self::default()
        }
    }

    /// The lexically enclosing function.
    pub fn outer(&self) -> Option<FunctionId> {
        self.outer
    }

    /// Binds a parameter name, returning its argument slot.
    ///
    /// Each parameter takes its own slot, so a repeated name is rejected.
    pub fn bind_argument(&mut self, name: &str) -> Result<u32> {
        match self.args.intern_new(name) {
            (slot, true) => Ok(slot),
            (_, false) => Err(Error::UnsupportedSyntax(format!("duplicate parameter `{name}`"))),
        }
    }

    /// Declares a local, returning its slot (offset past the arguments).
    pub fn declare_local(&mut self, name: &str) -> u32 {
        self.regs.intern(name) + self.args.len() as u32
    }

    /// Resolves a variable to its slot, locals first, then arguments.
    pub fn slot_of(&self, name: &str) -> Option<u32> {
        if let Some(id) = self.regs.lookup(name) {
            return Some(id + self.args.len() as u32);
        }
        self.args.lookup(name)
    }

    /// The argument names.
    pub fn args(&self) -> &SymbolTable {
        &self.args
    }

    /// The local names.
    pub fn locals(&self) -> &SymbolTable {
        &self.regs
    }

    /// Creates a label in this function.
    pub fn create_label(&mut self) -> Label {
        self.labels.create()
    }

    /// Places `label` at the next instruction offset.
    pub fn place_label(&mut self, label: Label) -> Result<()> {
        let offset = self.offset();
        self.labels.place(label, offset)
    }

    /// The label table.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Appends an instruction and returns its offset.
    pub fn emit(&mut self, instruction: Instruction) -> usize {
        debug_assert!(self.finalized.is_none(), "emit into a finalized function");
        let offset = self.instructions.len();
        self.instructions.push(instruction);
        offset
    }

    /// Offset the next emitted instruction will get.
    pub fn offset(&self) -> u32 {
        self.instructions.len() as u32
    }

    /// The emitted instructions.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Opcode of the most recently emitted instruction.
    pub fn last_opcode(&self) -> Option<OpCode> {
        self.instructions.last().map(|instruction| instruction.opcode)
    }

    /// Whether control cannot fall through to the next offset: the last
    /// instruction is a return and no label targets the next offset.
    pub fn ends_with_return(&self) -> bool {
        self.last_opcode() == Some(OpCode::FunctionReturn) && !self.labels.is_target(self.offset())
    }

    /// Lowers every instruction to a [`Word`], replacing label operands with
    /// `target - source - 1`, and freezes the argument and local counts.
    ///
    /// A second call is a no-op.
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized.is_some() {
            return Ok(());
        }
        self.labels.ensure_all_placed()?;

        let mut code = Vec::with_capacity(self.instructions.len());
        for (source, instruction) in self.instructions.iter().enumerate() {
            let operand = match instruction.operand {
                Operand::None => 0,
                Operand::Int(value) => i64::from(value),
                Operand::Index(index) => i64::from(index),
                Operand::Label(label) => {
                    let target = i64::from(self.labels.offset_of(label)?);
                    target - source as i64 - 1
                }
            };
            code.push(Word::encode(instruction.opcode, operand)?);
        }

        let finalized = Finalized {
            nargs: self.args.len() as u32,
            nregs: self.regs.len() as u32,
            code,
        };
        debug!(
            nargs = finalized.nargs,
            nregs = finalized.nregs,
            words = finalized.code.len(),
            "finalized function body"
        );
        self.finalized = Some(finalized);
        Ok(())
    }

    /// Whether [`finalize`](Self::finalize) has succeeded.
    pub fn is_finalized(&self) -> bool {
        self.finalized.is_some()
    }

    /// Argument count (frozen once finalized).
    pub fn nargs(&self) -> u32 {
        self.finalized
            .as_ref()
            .map_or(self.args.len() as u32, |f| f.nargs)
    }

    /// Local count (frozen once finalized).
    pub fn nregs(&self) -> u32 {
        self.finalized
            .as_ref()
            .map_or(self.regs.len() as u32, |f| f.nregs)
    }

    /// The encoded body, available after finalization.
    pub fn code(&self) -> Option<&[Word]> {
        self.finalized.as_ref().map(|f| f.code.as_slice())
    }
}
