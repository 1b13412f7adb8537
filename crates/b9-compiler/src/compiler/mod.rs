//! The compilation pipeline.
//!
//! Leaves first: [`symbols`] and [`labels`] back every [`function`]
//! definition, [`functions`] registers them by name, [`module`] owns the
//! result, and [`codegen`] drives all of it from the syntax tree.
//! [`writer`] and [`reader`] implement the binary format.

pub mod bytecode;
pub mod codegen;
pub mod function;
pub mod functions;
pub mod labels;
pub mod module;
pub mod reader;
pub mod symbols;
pub mod writer;

pub use bytecode::{Instruction, OpCode, Operand, Word};
pub use codegen::Compiler;
pub use function::{FunctionDefinition, FunctionId};
pub use functions::FunctionTable;
pub use labels::{Label, LabelTable};
pub use module::Module;
pub use symbols::SymbolTable;
