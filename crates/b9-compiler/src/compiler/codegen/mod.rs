//! Code generation from the syntax tree to a [`Module`].
//!
//! The [`Compiler`] walks statements and expressions with an exhaustive
//! match, emitting into the function currently being compiled. Function
//! ids and jump targets are symbolic until [`Module::resolve`].

mod context;
mod expressions;
mod statements;

#[cfg(test)]
mod tests;

use context::{LoopStack, Usage};
use tracing::info;

use crate::ast::Program;
use crate::compiler::bytecode::{Instruction, OpCode, Operand};
use crate::compiler::function::{FunctionDefinition, FunctionId};
use crate::compiler::module::Module;
use crate::error::{Error, Result};
use crate::options::CompileOptions;

/// Compiles a syntax tree into a module.
pub struct Compiler {
    options: CompileOptions,
    /// The module being generated
    module: Module,
    /// Functions being compiled, innermost last; empty means the initializer
    frames: Vec<FunctionId>,
    /// Loops enclosing the current statement in the current function
    loops: LoopStack,
}

impl Compiler {
    /// Creates a new compiler with default options.
    pub fn new() -> Self {
        Self::with_options(CompileOptions::default())
    }

    /// Creates a new compiler.
    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            options,
            module: Module::new(),
            frames: Vec::new(),
            loops: LoopStack::default(),
        }
    }

    /// The options in effect.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Lowers `program` into a new, unresolved module.
    pub fn compile(&mut self, program: &Program) -> Result<Module> {
        self.module = Module::new();
        self.frames.clear();
        self.loops = LoopStack::default();

        if let Some(name) = self.options.script_function.clone() {
            let id = self.module.functions_mut().define(&name, None)?;
            self.frames.push(id);
        }

        for stmt in &program.body {
            self.compile_statement(stmt)?;
        }

        if self.frames.pop().is_some() {
            self.finish_function_body();
        } else {
            self.emit_op(OpCode::EndSection);
        }

        let module = std::mem::take(&mut self.module);
        info!(
            functions = module.functions().len(),
            strings = module.strings().len(),
            "compiled program"
        );
        Ok(module)
    }

    /// Appends the implicit `return 0` unless control cannot reach the end,
    /// then the terminator.
    fn finish_function_body(&mut self) {
        if !self.current().ends_with_return() {
            self.emit_with(OpCode::IntPushConstant, Operand::Int(0));
            self.emit_op(OpCode::FunctionReturn);
        }
        self.emit_op(OpCode::EndSection);
    }

    fn current(&self) -> &FunctionDefinition {
        match self.frames.last() {
            Some(&id) => &self.module.functions()[id],
            None => self.module.initializer(),
        }
    }

    fn current_mut(&mut self) -> &mut FunctionDefinition {
        match self.frames.last() {
            Some(&id) => &mut self.module.functions_mut()[id],
            None => self.module.initializer_mut(),
        }
    }

    /// Resolves `name` to a slot of the current function.
    ///
    /// Enclosing functions are not captured from. A name that only they
    /// declare is still undefined, and the error names the owner.
    fn resolve_slot(&self, name: &str) -> Result<u32> {
        if let Some(slot) = self.current().slot_of(name) {
            return Ok(slot);
        }
        let functions = self.module.functions();
        let mut outer = self.current().outer();
        while let Some(id) = outer {
            let Some(func) = functions.get(id) else {
                break;
            };
            if func.slot_of(name).is_some() {
                let owner = functions.name(id).unwrap_or("<anonymous>");
                return Err(Error::UndefinedVariableReference(format!(
                    "{name} (declared in enclosing function {owner})"
                )));
            }
            outer = func.outer();
        }
        Err(Error::UndefinedVariableReference(name.to_string()))
    }

    fn emit(&mut self, instruction: Instruction) -> usize {
        self.current_mut().emit(instruction)
    }

    fn emit_op(&mut self, opcode: OpCode) -> usize {
        self.emit(Instruction::simple(opcode))
    }

    fn emit_with(&mut self, opcode: OpCode, operand: Operand) -> usize {
        self.emit(Instruction::with_operand(opcode, operand))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
