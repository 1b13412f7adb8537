// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # b9-compiler
//!
//! Compiles a small JavaScript subset into binary modules for the b9
//! stack virtual machine.
//!
//! ## Overview
//!
//! - [`ast`]: the ESTree-shaped input tree (parsing is done elsewhere)
//! - [`compiler`]: interning, labels, function tables, code generation
//! - [`Module`]: resolution and the `b9module` binary format
//! - [`ModuleImage`]: decoding and disassembly of binary modules
//!
//! ## Quick Start
//!
//! ```rust
//! use b9_compiler::ast::build::*;
//! use b9_compiler::ast::BinaryOperator;
//! use b9_compiler::{CompileOptions, ModuleImage};
//!
//! let program = program(vec![
//!     function("add1", &["x"], vec![return_stmt(Some(binary(
//!         BinaryOperator::Add,
//!         var("x"),
//!         num(1.0),
//!     )))]),
//!     expr_stmt(call("add1", vec![num(3.0)])),
//! ]);
//!
//! let bytes = b9_compiler::compile_to_bytes(&program, &CompileOptions::default())?;
//! let image = ModuleImage::parse(&bytes)?;
//! assert_eq!(image.functions[0].name, "add1");
//! # Ok::<(), b9_compiler::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod compiler;
pub mod error;
pub mod options;

#[cfg(feature = "async")]
pub mod async_writer;

pub use compiler::bytecode::{Instruction, OpCode, Operand, Primitive, Word};
pub use compiler::codegen::Compiler;
pub use compiler::module::Module;
pub use compiler::reader::{FunctionImage, ModuleImage};
pub use error::{Error, Result};
pub use options::CompileOptions;

/// Compiles and resolves `program`.
pub fn compile(program: &ast::Program, options: &CompileOptions) -> Result<Module> {
    let mut module = Compiler::with_options(options.clone()).compile(program)?;
    module.resolve()?;
    Ok(module)
}

/// Compiles `program` straight to the binary module format.
pub fn compile_to_bytes(program: &ast::Program, options: &CompileOptions) -> Result<Vec<u8>> {
    compile(program, options)?.to_bytes()
}
