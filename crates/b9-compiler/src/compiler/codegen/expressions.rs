//! Expression lowering.
//!
//! Every expression compiled with [`Usage::Value`] leaves exactly one value
//! on the stack, and nothing with [`Usage::Discard`]. Comparisons never
//! produce a value; they only appear as the test of a control construct
//! (see `compile_condition`).

use b9_macros::bail;
use tracing::trace;

use super::{Compiler, Usage};
use crate::ast::*;
use crate::compiler::bytecode::{MAX_SIGNED_OPERAND, MIN_SIGNED_OPERAND, OpCode, Operand, Primitive};
use crate::error::{Error, Result};

impl Compiler {
    pub(super) fn compile_expression(&mut self, expr: &Expression, usage: Usage) -> Result<()> {
        trace!(kind = expr.kind(), ?usage, "compile expression");
        match expr {
            Expression::Assignment(assign) => return self.compile_assignment(assign, usage),
            Expression::Update(update) => return self.compile_update(update, usage),
            Expression::Sequence(seq) => return self.compile_sequence(seq, usage),
            Expression::Literal(lit) => self.compile_literal(lit)?,
            Expression::Identifier(id) => {
                let slot = self.resolve_slot(&id.name)?;
                self.emit_with(OpCode::PushFromVar, Operand::Index(slot));
            }
            Expression::Binary(bin) if bin.operator.is_logical() => {
                return Err(Error::UnsupportedSyntax(expr.kind().to_string()));
            }
            Expression::Binary(bin) => self.compile_binary(bin)?,
            Expression::Unary(un) => self.compile_unary(un)?,
            Expression::Call(call) => self.compile_call(call)?,
            Expression::This
            | Expression::Member(_)
            | Expression::Conditional(_)
            | Expression::Function(_) => {
                return Err(Error::UnsupportedSyntax(expr.kind().to_string()));
            }
        }
        if usage == Usage::Discard {
            self.emit_op(OpCode::Drop);
        }
        Ok(())
    }

    /// Compiles `test` and returns the jump to take when it is false.
    ///
    /// A comparison pushes both operands and maps to the inverted
    /// conditional jump. Anything else is compared against zero.
    pub(super) fn compile_condition(&mut self, test: &Expression) -> Result<OpCode> {
        match test {
            Expression::Binary(bin) if bin.operator.is_comparison() => {
                let jump = inverted_jump(bin)?;
                self.compile_expression(&bin.left, Usage::Value)?;
                self.compile_expression(&bin.right, Usage::Value)?;
                Ok(jump)
            }
            _ => {
                self.compile_expression(test, Usage::Value)?;
                self.emit_with(OpCode::IntPushConstant, Operand::Int(0));
                Ok(OpCode::IntJmpEq)
            }
        }
    }

    fn compile_literal(&mut self, lit: &Literal) -> Result<()> {
        match lit {
            Literal::Number(n) => {
                let value = int_constant(*n)?;
                self.emit_with(OpCode::IntPushConstant, Operand::Int(value));
            }
            Literal::String(s) => {
                let id = self.module.intern_string(s);
                self.emit_with(OpCode::StrPushConstant, Operand::Index(id));
            }
            Literal::Boolean(b) => {
                self.emit_with(OpCode::IntPushConstant, Operand::Int(i32::from(*b)));
            }
            Literal::Null => return Err(Error::UnsupportedSyntax("null literal".to_string())),
        }
        Ok(())
    }

    fn compile_binary(&mut self, bin: &BinaryExpression) -> Result<()> {
        let opcode = match bin.operator {
            BinaryOperator::Add => OpCode::IntAdd,
            BinaryOperator::Subtract => OpCode::IntSub,
            BinaryOperator::Multiply => OpCode::IntMul,
            BinaryOperator::Divide => OpCode::IntDiv,
            op => bail!(Error::UnsupportedOperator(op.as_str().to_string())),
        };
        self.compile_expression(&bin.left, Usage::Value)?;
        self.compile_expression(&bin.right, Usage::Value)?;
        self.emit_op(opcode);
        Ok(())
    }

    fn compile_unary(&mut self, un: &UnaryExpression) -> Result<()> {
        match (un.operator, &*un.argument) {
            (UnaryOperator::Minus, Expression::Literal(Literal::Number(n))) => {
                let value = int_constant(-*n)?;
                self.emit_with(OpCode::IntPushConstant, Operand::Int(value));
            }
            (UnaryOperator::Minus, argument) => {
                self.emit_with(OpCode::IntPushConstant, Operand::Int(0));
                self.compile_expression(argument, Usage::Value)?;
                self.emit_op(OpCode::IntSub);
            }
            (UnaryOperator::Plus, argument) => {
                self.compile_expression(argument, Usage::Value)?;
            }
            (UnaryOperator::LogicalNot, argument) => {
                self.compile_expression(argument, Usage::Value)?;
                self.emit_op(OpCode::IntNot);
            }
            (op, _) => bail!(Error::UnsupportedOperator(op.as_str().to_string())),
        }
        Ok(())
    }

    fn compile_assignment(&mut self, assign: &AssignmentExpression, usage: Usage) -> Result<()> {
        let slot = self.assignment_target(&assign.left)?;
        let opcode = match assign.operator {
            AssignmentOperator::Assign => None,
            AssignmentOperator::AddAssign => Some(OpCode::IntAdd),
            AssignmentOperator::SubtractAssign => Some(OpCode::IntSub),
            AssignmentOperator::MultiplyAssign => Some(OpCode::IntMul),
            AssignmentOperator::DivideAssign => Some(OpCode::IntDiv),
            op => bail!(Error::UnsupportedOperator(op.as_str().to_string())),
        };

        match opcode {
            Some(opcode) => {
                self.emit_with(OpCode::PushFromVar, Operand::Index(slot));
                self.compile_expression(&assign.right, Usage::Value)?;
                self.emit_op(opcode);
            }
            None => self.compile_expression(&assign.right, Usage::Value)?,
        }
        if usage == Usage::Value {
            self.emit_op(OpCode::Duplicate);
        }
        self.emit_with(OpCode::PopIntoVar, Operand::Index(slot));
        Ok(())
    }

    fn compile_update(&mut self, update: &UpdateExpression, usage: Usage) -> Result<()> {
        let slot = self.assignment_target(&update.argument)?;
        let opcode = match update.operator {
            UpdateOperator::Increment => OpCode::IntAdd,
            UpdateOperator::Decrement => OpCode::IntSub,
        };
        let keep = usage == Usage::Value;

        self.emit_with(OpCode::PushFromVar, Operand::Index(slot));
        if keep && !update.prefix {
            self.emit_op(OpCode::Duplicate);
        }
        self.emit_with(OpCode::IntPushConstant, Operand::Int(1));
        self.emit_op(opcode);
        if keep && update.prefix {
            self.emit_op(OpCode::Duplicate);
        }
        self.emit_with(OpCode::PopIntoVar, Operand::Index(slot));
        Ok(())
    }

    fn compile_sequence(&mut self, seq: &SequenceExpression, usage: Usage) -> Result<()> {
        let Some((last, init)) = seq.expressions.split_last() else {
            return Err(Error::UnsupportedSyntax("empty SequenceExpression".to_string()));
        };
        for expr in init {
            self.compile_expression(expr, Usage::Discard)?;
        }
        self.compile_expression(last, usage)
    }

    fn compile_call(&mut self, call: &CallExpression) -> Result<()> {
        let callee = match &*call.callee {
            Expression::Identifier(id) => id.name.as_str(),
            other => {
                return Err(Error::UnsupportedSyntax(format!(
                    "call through {}",
                    other.kind()
                )));
            }
        };
        if callee == self.options.primitive_callee {
            return self.compile_primitive_call(call);
        }

        for argument in &call.arguments {
            self.compile_expression(argument, Usage::Value)?;
        }
        let id = self.module.functions_mut().reference(callee);
        self.emit_with(OpCode::FunctionCall, Operand::Index(id));
        Ok(())
    }

    /// `b9_primitive("print_number", n)` style calls.
    fn compile_primitive_call(&mut self, call: &CallExpression) -> Result<()> {
        let Some((selector, arguments)) = call.arguments.split_first() else {
            return Err(Error::UnsupportedSyntax(format!(
                "`{}` call without a primitive name",
                self.options.primitive_callee
            )));
        };
        let name = match selector {
            Expression::Literal(Literal::String(name)) => name,
            other => {
                return Err(Error::UnsupportedSyntax(format!(
                    "primitive name must be a string literal, found {}",
                    other.kind()
                )));
            }
        };
        let primitive =
            Primitive::from_mnemonic(name).ok_or_else(|| Error::UnknownPrimitive(name.clone()))?;

        for argument in arguments {
            self.compile_expression(argument, Usage::Value)?;
        }
        self.emit_with(OpCode::PrimitiveCall, Operand::Index(primitive as u32));
        Ok(())
    }

    fn assignment_target(&self, target: &Expression) -> Result<u32> {
        match target {
            Expression::Identifier(id) => self.resolve_slot(&id.name),
            other => Err(Error::UnsupportedSyntax(format!(
                "assignment to {}",
                other.kind()
            ))),
        }
    }
}

/// The jump taken when `bin` is false.
fn inverted_jump(bin: &BinaryExpression) -> Result<OpCode> {
    use BinaryOperator::*;

    let strings = is_string_literal(&bin.left) || is_string_literal(&bin.right);
    let jump = match (bin.operator, strings) {
        (Equal | StrictEqual, false) => OpCode::IntJmpNeq,
        (NotEqual | StrictNotEqual, false) => OpCode::IntJmpEq,
        (LessThan, false) => OpCode::IntJmpGe,
        (LessThanEqual, false) => OpCode::IntJmpGt,
        (GreaterThan, false) => OpCode::IntJmpLe,
        (GreaterThanEqual, false) => OpCode::IntJmpLt,
        (Equal | StrictEqual, true) => OpCode::StrJmpNeq,
        (NotEqual | StrictNotEqual, true) => OpCode::StrJmpEq,
        (op, _) => bail!(Error::UnsupportedOperator(op.as_str().to_string())),
    };
    Ok(jump)
}

fn is_string_literal(expr: &Expression) -> bool {
    matches!(expr, Expression::Literal(Literal::String(_)))
}

/// Converts a numeric literal to a push-constant operand.
fn int_constant(n: f64) -> Result<i32> {
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(Error::UnsupportedSyntax(format!("non-integer literal {n}")));
    }
    let value = n as i64;
    if !(MIN_SIGNED_OPERAND..=MAX_SIGNED_OPERAND).contains(&value) {
        return Err(Error::OperandOverflow(value));
    }
    Ok(value as i32)
}
