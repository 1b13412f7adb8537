//! Statement lowering.
//!
//! | Statement | Shape |
//! |-----------|-------|
//! | `if` | test, `jmp_if_false else/end`, consequent, [`jmp end`, else:, alternate], end: |
//! | `while` | test:, test, `jmp_if_false end`, body, continue:, `jmp test`, end: |
//! | `for` | init, test:, [test, `jmp_if_false end`], body, continue:, update, `jmp test`, end: |
//! | `return` | value (or `0`), `function_return` |
//! | `break` / `continue` | `jmp` to the innermost loop's end / continue label |
//!
//! `jmp_if_false` is the inverted comparison jump returned by
//! `compile_condition`.

use tracing::{debug, trace};

use super::{Compiler, Usage};
use crate::ast::*;
use crate::compiler::bytecode::{Instruction, OpCode, Operand};
use crate::error::{Error, Result};

impl Compiler {
    pub(super) fn compile_statement(&mut self, stmt: &Statement) -> Result<()> {
        trace!(kind = stmt.kind(), "compile statement");
        match stmt {
            Statement::VariableDeclaration(decl) => self.compile_variable_declaration(decl),
            Statement::FunctionDeclaration(decl) => self.compile_function_declaration(decl),
            Statement::Expression(expr_stmt) => {
                self.compile_expression(&expr_stmt.expression, Usage::Discard)
            }
            Statement::Block(block) => {
                for inner in &block.body {
                    self.compile_statement(inner)?;
                }
                Ok(())
            }
            Statement::If(if_stmt) => self.compile_if_statement(if_stmt),
            Statement::While(while_stmt) => self.compile_while_statement(while_stmt),
            Statement::For(for_stmt) => self.compile_for_statement(for_stmt),
            Statement::Return(ret) => self.compile_return_statement(ret),
            Statement::Break => {
                let target = self
                    .loops
                    .innermost()
                    .ok_or(Error::InvalidBreakOrContinue("break"))?;
                self.emit(Instruction::jump(OpCode::Jmp, target.break_label));
                Ok(())
            }
            Statement::Continue => {
                let target = self
                    .loops
                    .innermost()
                    .ok_or(Error::InvalidBreakOrContinue("continue"))?;
                self.emit(Instruction::jump(OpCode::Jmp, target.continue_label));
                Ok(())
            }
            Statement::Empty => Ok(()),
            Statement::BreakLabel(label) | Statement::ContinueLabel(label) => Err(
                Error::UnsupportedSyntax(format!("{} with label `{label}`", stmt.kind())),
            ),
            Statement::DoWhile(_) | Statement::Throw(_) | Statement::Debugger => {
                Err(Error::UnsupportedSyntax(stmt.kind().to_string()))
            }
        }
    }

    pub(super) fn compile_variable_declaration(&mut self, decl: &VariableDeclaration) -> Result<()> {
        for declarator in &decl.declarations {
            let slot = self.current_mut().declare_local(&declarator.id.name);
            if let Some(init) = &declarator.init {
                self.compile_expression(init, Usage::Value)?;
                self.emit_with(OpCode::PopIntoVar, Operand::Index(slot));
            }
        }
        Ok(())
    }

    fn compile_function_declaration(&mut self, decl: &FunctionDeclaration) -> Result<()> {
        let outer = self.frames.last().copied();
        let id = self.module.functions_mut().define(&decl.id.name, outer)?;
        self.frames.push(id);
        let enclosing_loops = std::mem::take(&mut self.loops);

        let func = self.current_mut();
        for param in &decl.params {
            func.bind_argument(&param.name)?;
        }
        for stmt in &decl.body {
            self.compile_statement(stmt)?;
        }
        self.finish_function_body();

        self.loops = enclosing_loops;
        self.frames.pop();
        Ok(())
    }

    fn compile_if_statement(&mut self, if_stmt: &IfStatement) -> Result<()> {
        let end_label = self.current_mut().create_label();
        let else_label = match if_stmt.alternate {
            Some(_) => Some(self.current_mut().create_label()),
            None => None,
        };

        let jump = self.compile_condition(&if_stmt.test)?;
        self.emit(Instruction::jump(jump, else_label.unwrap_or(end_label)));

        self.compile_statement(&if_stmt.consequent)?;

        if let (Some(alternate), Some(else_label)) = (&if_stmt.alternate, else_label) {
            if !self.current().ends_with_return() {
                self.emit(Instruction::jump(OpCode::Jmp, end_label));
            }
            self.current_mut().place_label(else_label)?;
            self.compile_statement(alternate)?;
        }

        self.current_mut().place_label(end_label)
    }

    fn compile_while_statement(&mut self, while_stmt: &WhileStatement) -> Result<()> {
        let test_label = self.current_mut().create_label();
        let continue_label = self.current_mut().create_label();
        let end_label = self.current_mut().create_label();

        self.current_mut().place_label(test_label)?;
        let jump = self.compile_condition(&while_stmt.test)?;
        self.emit(Instruction::jump(jump, end_label));

        self.loops.push(end_label, continue_label);
        self.compile_statement(&while_stmt.body)?;
        self.loops.pop();

        self.current_mut().place_label(continue_label)?;
        self.emit(Instruction::jump(OpCode::Jmp, test_label));
        self.current_mut().place_label(end_label)
    }

    fn compile_for_statement(&mut self, for_stmt: &ForStatement) -> Result<()> {
        match &for_stmt.init {
            Some(ForInit::Declaration(decl)) => self.compile_variable_declaration(decl)?,
            Some(ForInit::Expression(expr)) => self.compile_expression(expr, Usage::Discard)?,
            None => {}
        }

        let test_label = self.current_mut().create_label();
        let continue_label = self.current_mut().create_label();
        let end_label = self.current_mut().create_label();

        self.current_mut().place_label(test_label)?;
        if let Some(test) = &for_stmt.test {
            let jump = self.compile_condition(test)?;
            self.emit(Instruction::jump(jump, end_label));
        }

        self.loops.push(end_label, continue_label);
        self.compile_statement(&for_stmt.body)?;
        self.loops.pop();

        self.current_mut().place_label(continue_label)?;
        if let Some(update) = &for_stmt.update {
            self.compile_expression(update, Usage::Discard)?;
        }
        self.emit(Instruction::jump(OpCode::Jmp, test_label));
        self.current_mut().place_label(end_label)
    }

    fn compile_return_statement(&mut self, ret: &ReturnStatement) -> Result<()> {
        if self.current().ends_with_return() {
            debug!("skipping unreachable return");
            return Ok(());
        }
        match &ret.argument {
            Some(argument) => self.compile_expression(argument, Usage::Value)?,
            None => {
                self.emit_with(OpCode::IntPushConstant, Operand::Int(0));
            }
        }
        self.emit_op(OpCode::FunctionReturn);
        Ok(())
    }
}
