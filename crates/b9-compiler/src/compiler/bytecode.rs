//! Bytecode definitions.
//!
//! Instructions are built with symbolic operands ([`Operand::Label`]) and
//! lowered to 32-bit [`Word`]s once their function is finalized:
//!
//! ```text
//!  31        24 23                          0
//! +------------+-----------------------------+
//! |   opcode   |     operand (24 bits)       |
//! +------------+-----------------------------+
//! ```

use std::fmt;

use b9_macros::opcodes;

use crate::compiler::labels::Label;
use crate::error::{Error, Result};

/// Width of the operand field.
pub const OPERAND_BITS: u32 = 24;

const OPERAND_MASK: u32 = (1 << OPERAND_BITS) - 1;

/// Largest unsigned operand (slots, ids, primitive codes).
pub const MAX_UNSIGNED_OPERAND: i64 = (1 << OPERAND_BITS) - 1;

/// Largest signed operand (int constants, jump deltas).
pub const MAX_SIGNED_OPERAND: i64 = (1 << (OPERAND_BITS - 1)) - 1;

/// Smallest signed operand (int constants, jump deltas).
pub const MIN_SIGNED_OPERAND: i64 = -(1 << (OPERAND_BITS - 1));

opcodes! {
    /// Operation codes of the b9 virtual machine.
    pub enum OpCode: u8 {
        /// Terminates a function body
        EndSection = 0 => "end_section",
        /// Call the function with the operand's id
        FunctionCall = 1 => "function_call",
        /// Return the top of stack
        FunctionReturn = 2 => "function_return",
        /// Call the VM builtin with the operand's code
        PrimitiveCall = 3 => "primitive_call",
        /// Unconditional relative jump
        Jmp = 4 => "jmp",
        /// Duplicate the top of stack
        Duplicate = 5 => "duplicate",
        /// Discard the top of stack
        Drop = 6 => "drop",
        /// Push the variable in the operand's slot
        PushFromVar = 7 => "push_from_var",
        /// Pop into the variable in the operand's slot
        PopIntoVar = 8 => "pop_into_var",
        /// Integer addition
        IntAdd = 9 => "int_add",
        /// Integer subtraction
        IntSub = 10 => "int_sub",
        /// Integer multiplication
        IntMul = 11 => "int_mul",
        /// Integer division
        IntDiv = 12 => "int_div",
        /// Push a signed integer constant
        IntPushConstant = 13 => "int_push_constant",
        /// Logical not (zero becomes one, anything else zero)
        IntNot = 14 => "int_not",
        /// Pop two ints, jump if equal
        IntJmpEq = 15 => "int_jmp_eq",
        /// Pop two ints, jump if not equal
        IntJmpNeq = 16 => "int_jmp_neq",
        /// Pop two ints, jump if left > right
        IntJmpGt = 17 => "int_jmp_gt",
        /// Pop two ints, jump if left >= right
        IntJmpGe = 18 => "int_jmp_ge",
        /// Pop two ints, jump if left < right
        IntJmpLt = 19 => "int_jmp_lt",
        /// Pop two ints, jump if left <= right
        IntJmpLe = 20 => "int_jmp_le",
        /// Push the module string with the operand's id
        StrPushConstant = 21 => "str_push_constant",
        /// Pop two strings, jump if equal
        StrJmpEq = 22 => "str_jmp_eq",
        /// Pop two strings, jump if not equal
        StrJmpNeq = 23 => "str_jmp_neq",
    }
}

impl OpCode {
    /// Whether the operand is a relative jump delta.
    pub fn is_jump(self) -> bool {
        matches!(
            self,
            OpCode::Jmp
                | OpCode::IntJmpEq
                | OpCode::IntJmpNeq
                | OpCode::IntJmpGt
                | OpCode::IntJmpGe
                | OpCode::IntJmpLt
                | OpCode::IntJmpLe
                | OpCode::StrJmpEq
                | OpCode::StrJmpNeq
        )
    }

    /// Whether the operand field holds a two's-complement value.
    pub fn has_signed_operand(self) -> bool {
        self == OpCode::IntPushConstant || self.is_jump()
    }
}

opcodes! {
    /// Builtins reachable through [`OpCode::PrimitiveCall`].
    pub enum Primitive: u32 {
        /// Print the string on top of the stack
        PrintString = 0 => "print_string",
        /// Print the number on top of the stack
        PrintNumber = 1 => "print_number",
    }
}

/// Instruction operands, before finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (encoded as zero)
    None,
    /// Signed integer constant
    Int(i32),
    /// Variable slot, function id, string id or primitive code
    Index(u32),
    /// Jump target, lowered to a relative delta
    Label(Label),
}

/// A single instruction as emitted by the code generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation code
    pub opcode: OpCode,
    /// The operand, possibly symbolic
    pub operand: Operand,
}

impl Instruction {
    /// Creates a new instruction with no operand.
    pub fn simple(opcode: OpCode) -> Self {
        Self {
            opcode,
            operand: Operand::None,
        }
    }

    /// Creates a new instruction with an operand.
    pub fn with_operand(opcode: OpCode, operand: Operand) -> Self {
        Self { opcode, operand }
    }

    /// Creates a jump to `target`.
    pub fn jump(opcode: OpCode, target: Label) -> Self {
        Self::with_operand(opcode, Operand::Label(target))
    }
}

/// An encoded 32-bit instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word(u32);

impl Word {
    /// Encodes `opcode` with a concrete operand.
    ///
    /// Signed operands must lie in `[-2^23, 2^23)`, unsigned ones in `[0, 2^24)`.
    pub fn encode(opcode: OpCode, operand: i64) -> Result<Self> {
        let in_range = if opcode.has_signed_operand() {
            (MIN_SIGNED_OPERAND..=MAX_SIGNED_OPERAND).contains(&operand)
        } else {
            (0..=MAX_UNSIGNED_OPERAND).contains(&operand)
        };
        if !in_range {
            return Err(Error::OperandOverflow(operand));
        }
        let field = (operand as u32) & OPERAND_MASK;
        Ok(Self(((opcode as u32) << OPERAND_BITS) | field))
    }

    /// Wraps a raw word read from a module.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw 32-bit value.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The opcode byte, assigned or not.
    pub fn opcode_byte(self) -> u8 {
        (self.0 >> OPERAND_BITS) as u8
    }

    /// The opcode, failing for unassigned values.
    pub fn opcode(self) -> Result<OpCode> {
        let byte = self.opcode_byte();
        OpCode::try_from(byte)
            .map_err(|()| Error::MalformedModule(format!("unassigned opcode {byte}")))
    }

    /// The operand, sign-extended when the opcode takes a signed operand.
    pub fn operand(self) -> i32 {
        let field = self.0 & OPERAND_MASK;
        match self.opcode() {
            Ok(opcode) if opcode.has_signed_operand() => ((field << 8) as i32) >> 8,
            _ => field as i32,
        }
    }

    /// Splits the word into opcode and operand.
    pub fn decode(self) -> Result<(OpCode, i32)> {
        Ok((self.opcode()?, self.operand()))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode() {
            Ok(opcode) => write!(f, "{:<18} {}", opcode, self.operand()),
            Err(_) => write!(f, "<op {:#04x}>{:12} {}", self.opcode_byte(), "", self.operand()),
        }
    }
}
