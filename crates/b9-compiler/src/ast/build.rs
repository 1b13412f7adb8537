//! Shorthand constructors for building trees in code.
//!
//! ```
//! use b9_compiler::ast::build::*;
//! use b9_compiler::ast::BinaryOperator;
//!
//! let program = program(vec![
//!     function("inc", &["x"], vec![return_stmt(Some(binary(
//!         BinaryOperator::Add,
//!         var("x"),
//!         num(1.0),
//!     )))]),
//!     expr_stmt(call("inc", vec![num(3.0)])),
//! ]);
//! assert_eq!(program.body.len(), 2);
//! ```

use super::*;

/// A program.
pub fn program(body: Vec<Statement>) -> Program {
    Program { body }
}

/// An identifier node.
pub fn ident(name: &str) -> Identifier {
    Identifier {
        name: name.to_string(),
    }
}

/// A variable read.
pub fn var(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

/// A numeric literal.
pub fn num(value: f64) -> Expression {
    Expression::Literal(Literal::Number(value))
}

/// A string literal.
pub fn string(value: &str) -> Expression {
    Expression::Literal(Literal::String(value.to_string()))
}

/// A boolean literal.
pub fn boolean(value: bool) -> Expression {
    Expression::Literal(Literal::Boolean(value))
}

/// `left <op> right`
pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::Binary(BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `<op> argument`
pub fn unary(operator: UnaryOperator, argument: Expression) -> Expression {
    Expression::Unary(UnaryExpression {
        operator,
        argument: Box::new(argument),
    })
}

/// `target <op> value`
pub fn assign(operator: AssignmentOperator, target: &str, value: Expression) -> Expression {
    Expression::Assignment(AssignmentExpression {
        operator,
        left: Box::new(var(target)),
        right: Box::new(value),
    })
}

/// `++target`, `target--`, ...
pub fn update(operator: UpdateOperator, prefix: bool, target: &str) -> Expression {
    Expression::Update(UpdateExpression {
        operator,
        argument: Box::new(var(target)),
        prefix,
    })
}

/// A call to a named function.
pub fn call(callee: &str, arguments: Vec<Expression>) -> Expression {
    Expression::Call(CallExpression {
        callee: Box::new(var(callee)),
        arguments,
    })
}

/// `a, b, c`
pub fn sequence(expressions: Vec<Expression>) -> Expression {
    Expression::Sequence(SequenceExpression { expressions })
}

/// An expression statement.
pub fn expr_stmt(expression: Expression) -> Statement {
    Statement::Expression(ExpressionStatement { expression })
}

/// `var a = ..., b;`
pub fn var_decl(declarations: Vec<(&str, Option<Expression>)>) -> Statement {
    Statement::VariableDeclaration(var_declaration(declarations))
}

fn var_declaration(declarations: Vec<(&str, Option<Expression>)>) -> VariableDeclaration {
    VariableDeclaration {
        kind: VariableKind::Var,
        declarations: declarations
            .into_iter()
            .map(|(name, init)| VariableDeclarator {
                id: ident(name),
                init,
            })
            .collect(),
    }
}

/// A function declaration.
pub fn function(name: &str, params: &[&str], body: Vec<Statement>) -> Statement {
    Statement::FunctionDeclaration(FunctionDeclaration {
        id: ident(name),
        params: params.iter().map(|p| ident(p)).collect(),
        body,
    })
}

/// `{ ... }`
pub fn block(body: Vec<Statement>) -> Statement {
    Statement::Block(BlockStatement { body })
}

/// `if (test) consequent else alternate`
pub fn if_stmt(test: Expression, consequent: Statement, alternate: Option<Statement>) -> Statement {
    Statement::If(IfStatement {
        test,
        consequent: Box::new(consequent),
        alternate: alternate.map(Box::new),
    })
}

/// `while (test) body`
pub fn while_stmt(test: Expression, body: Statement) -> Statement {
    Statement::While(WhileStatement {
        test,
        body: Box::new(body),
    })
}

/// `for (init; test; update) body`
pub fn for_stmt(
    init: Option<ForInit>,
    test: Option<Expression>,
    update: Option<Expression>,
    body: Statement,
) -> Statement {
    Statement::For(ForStatement {
        init,
        test,
        update,
        body: Box::new(body),
    })
}

/// A `var` declaration used as a `for` initializer.
pub fn for_var(declarations: Vec<(&str, Option<Expression>)>) -> ForInit {
    ForInit::Declaration(Box::new(var_declaration(declarations)))
}

/// `return argument;`
pub fn return_stmt(argument: Option<Expression>) -> Statement {
    Statement::Return(ReturnStatement { argument })
}
