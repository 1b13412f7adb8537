//! Tests for the code generator.

use b9_macros::{assert_err, assert_matches, assert_ok};

use super::*;
use crate::ast::build::*;
use crate::ast::*;
use crate::compiler::bytecode::OpCode as Op;

fn compile_with(options: CompileOptions, body: Vec<Statement>) -> Result<Module> {
    let mut module = Compiler::with_options(options).compile(&program(body))?;
    module.resolve()?;
    Ok(module)
}

fn compile_source(body: Vec<Statement>) -> Result<Module> {
    compile_with(CompileOptions::default(), body)
}

fn compile_ok(body: Vec<Statement>) -> Module {
    compile_source(body).expect("Compilation should succeed")
}

fn decode(func: &FunctionDefinition) -> Vec<(Op, i32)> {
    let code = func.code().expect("function is finalized");
    code.iter().map(|word| word.decode().unwrap()).collect()
}

fn code_of(module: &Module, name: &str) -> Vec<(Op, i32)> {
    let id = module.functions().lookup(name).expect("function exists");
    decode(&module.functions()[id])
}

/// Compiles `function f(a, b, c, d, ...) { <body> }` and returns f's code.
fn function_code(body: Vec<Statement>) -> Vec<(Op, i32)> {
    let module = compile_ok(vec![function("f", &["a", "b", "c", "d"], body)]);
    code_of(&module, "f")
}

#[test]
fn test_compiler_default() {
    let compiler = Compiler::default();
    assert_eq!(compiler.options(), &CompileOptions::default());
}

#[test]
fn test_compile_empty_program() {
    let module = compile_ok(vec![]);
    assert!(module.functions().is_empty());
    assert_eq!(decode(module.initializer()), vec![(Op::EndSection, 0)]);
}

#[test]
fn test_function_with_call_site() {
    let module = compile_ok(vec![
        function("f", &["x"], vec![return_stmt(Some(binary(
            BinaryOperator::Add,
            var("x"),
            num(1.0),
        )))]),
        expr_stmt(call("f", vec![num(3.0)])),
    ]);

    let f = &module.functions()[0];
    assert_eq!((f.nargs(), f.nregs()), (1, 0));
    assert_eq!(
        decode(f),
        vec![
            (Op::PushFromVar, 0),
            (Op::IntPushConstant, 1),
            (Op::IntAdd, 0),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
    assert_eq!(
        decode(module.initializer()),
        vec![
            (Op::IntPushConstant, 3),
            (Op::FunctionCall, 0),
            (Op::Drop, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_if_else_with_equality() {
    let code = function_code(vec![if_stmt(
        binary(BinaryOperator::Equal, var("a"), var("b")),
        block(vec![expr_stmt(var("c"))]),
        Some(block(vec![expr_stmt(var("d"))])),
    )]);
    assert_eq!(
        code,
        vec![
            (Op::PushFromVar, 0),
            (Op::PushFromVar, 1),
            (Op::IntJmpNeq, 3), // -> 6 (else)
            (Op::PushFromVar, 2),
            (Op::Drop, 0),
            (Op::Jmp, 2), // -> 8 (end)
            (Op::PushFromVar, 3),
            (Op::Drop, 0),
            (Op::IntPushConstant, 0),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_if_without_else_jumps_to_end() {
    let code = function_code(vec![if_stmt(var("a"), expr_stmt(var("b")), None)]);
    assert_eq!(
        &code[..5],
        &[
            (Op::PushFromVar, 0),
            (Op::IntPushConstant, 0),
            (Op::IntJmpEq, 2),
            (Op::PushFromVar, 1),
            (Op::Drop, 0),
        ]
    );
}

#[test]
fn test_if_else_both_returning() {
    let code = function_code(vec![if_stmt(
        var("a"),
        return_stmt(Some(num(1.0))),
        Some(return_stmt(Some(num(2.0)))),
    )]);
    assert_eq!(
        code,
        vec![
            (Op::PushFromVar, 0),
            (Op::IntPushConstant, 0),
            (Op::IntJmpEq, 2), // -> 5 (else)
            (Op::IntPushConstant, 1),
            (Op::FunctionReturn, 0),
            (Op::IntPushConstant, 2),
            (Op::FunctionReturn, 0),
            (Op::IntPushConstant, 0),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_return_inside_if_still_gets_default_return() {
    let code = function_code(vec![if_stmt(var("a"), return_stmt(Some(num(1.0))), None)]);
    assert_eq!(
        code,
        vec![
            (Op::PushFromVar, 0),
            (Op::IntPushConstant, 0),
            (Op::IntJmpEq, 2),
            (Op::IntPushConstant, 1),
            (Op::FunctionReturn, 0),
            (Op::IntPushConstant, 0),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_comparison_jumps_are_inverted() {
    let cases = [
        (BinaryOperator::Equal, Op::IntJmpNeq),
        (BinaryOperator::NotEqual, Op::IntJmpEq),
        (BinaryOperator::StrictEqual, Op::IntJmpNeq),
        (BinaryOperator::StrictNotEqual, Op::IntJmpEq),
        (BinaryOperator::LessThan, Op::IntJmpGe),
        (BinaryOperator::LessThanEqual, Op::IntJmpGt),
        (BinaryOperator::GreaterThan, Op::IntJmpLe),
        (BinaryOperator::GreaterThanEqual, Op::IntJmpLt),
    ];
    for (operator, jump) in cases {
        let code = function_code(vec![if_stmt(
            binary(operator, var("a"), var("b")),
            block(vec![]),
            None,
        )]);
        assert_eq!(code[2], (jump, 0), "operator {}", operator.as_str());
    }
}

#[test]
fn test_string_equality_uses_string_jumps() {
    let code = function_code(vec![if_stmt(
        binary(BinaryOperator::Equal, var("a"), string("yes")),
        block(vec![]),
        None,
    )]);
    assert_eq!(&code[..3], &[(Op::PushFromVar, 0), (Op::StrPushConstant, 0), (Op::StrJmpNeq, 0)]);

    let code = function_code(vec![if_stmt(
        binary(BinaryOperator::NotEqual, string("no"), var("a")),
        block(vec![]),
        None,
    )]);
    assert_eq!(code[2].0, Op::StrJmpEq);
}

#[test]
fn test_string_ordering_is_unsupported() {
    let err = assert_err!(compile_source(vec![function(
        "f",
        &["a"],
        vec![if_stmt(binary(BinaryOperator::LessThan, var("a"), string("m")), block(vec![]), None)],
    )]));
    assert_matches!(err, Error::UnsupportedOperator(op) if op == "<");
}

#[test]
fn test_comparison_as_value_is_unsupported() {
    let err = assert_err!(compile_source(vec![var_decl(vec![(
        "c",
        Some(binary(BinaryOperator::GreaterThan, num(1.0), num(2.0))),
    )])]));
    assert_matches!(err, Error::UnsupportedOperator(op) if op == ">");
}

#[test]
fn test_while_with_empty_body() {
    let code = function_code(vec![while_stmt(var("a"), block(vec![]))]);
    assert_eq!(
        code,
        vec![
            (Op::PushFromVar, 0),
            (Op::IntPushConstant, 0),
            (Op::IntJmpEq, 1), // -> 4 (end)
            (Op::Jmp, -4),     // -> 0 (test)
            (Op::IntPushConstant, 0),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_while_continue_and_break() {
    let code = function_code(vec![while_stmt(
        binary(BinaryOperator::LessThan, var("a"), var("b")),
        block(vec![
            if_stmt(var("c"), Statement::Break, None),
            Statement::Continue,
        ]),
    )]);
    assert_eq!(
        &code[..10],
        &[
            (Op::PushFromVar, 0),
            (Op::PushFromVar, 1),
            (Op::IntJmpGe, 6), // -> 9 (end)
            (Op::PushFromVar, 2),
            (Op::IntPushConstant, 0),
            (Op::IntJmpEq, 1), // -> 7 (if end)
            (Op::Jmp, 2),      // break -> 9
            (Op::Jmp, 0),      // continue -> 8
            (Op::Jmp, -9),     // -> 0 (test)
            (Op::IntPushConstant, 0),
        ]
    );
}

#[test]
fn test_for_loop() {
    let module = compile_ok(vec![function(
        "sum",
        &[],
        vec![
            var_decl(vec![("s", Some(num(0.0)))]),
            for_stmt(
                Some(for_var(vec![("i", Some(num(0.0)))])),
                Some(binary(BinaryOperator::LessThan, var("i"), num(3.0))),
                Some(update(UpdateOperator::Increment, false, "i")),
                block(vec![expr_stmt(assign(AssignmentOperator::AddAssign, "s", var("i")))]),
            ),
            return_stmt(Some(var("s"))),
        ],
    )]);
    let sum = &module.functions()[0];
    assert_eq!((sum.nargs(), sum.nregs()), (0, 2));
    assert_eq!(
        decode(sum),
        vec![
            (Op::IntPushConstant, 0),
            (Op::PopIntoVar, 0),
            (Op::IntPushConstant, 0),
            (Op::PopIntoVar, 1),
            (Op::PushFromVar, 1), // test
            (Op::IntPushConstant, 3),
            (Op::IntJmpGe, 9), // -> 16 (end)
            (Op::PushFromVar, 0),
            (Op::PushFromVar, 1),
            (Op::IntAdd, 0),
            (Op::PopIntoVar, 0),
            (Op::PushFromVar, 1), // continue
            (Op::IntPushConstant, 1),
            (Op::IntAdd, 0),
            (Op::PopIntoVar, 1),
            (Op::Jmp, -12), // -> 4 (test)
            (Op::PushFromVar, 0),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_for_without_test_or_update() {
    let code = function_code(vec![for_stmt(None, None, None, Statement::Break)]);
    assert_eq!(&code[..2], &[(Op::Jmp, 1), (Op::Jmp, -2)]);
}

#[test]
fn test_break_outside_loop() {
    let err = assert_err!(compile_source(vec![Statement::Break]));
    assert_matches!(err, Error::InvalidBreakOrContinue("break"));
    let err = assert_err!(compile_source(vec![function("f", &[], vec![Statement::Continue])]));
    assert_matches!(err, Error::InvalidBreakOrContinue("continue"));
}

#[test]
fn test_break_does_not_cross_function_boundary() {
    let err = assert_err!(compile_source(vec![while_stmt(
        num(1.0),
        function("inner", &[], vec![Statement::Break]),
    )]));
    assert_matches!(err, Error::InvalidBreakOrContinue("break"));
}

#[test]
fn test_implicit_and_bare_returns() {
    let expected = vec![
        (Op::IntPushConstant, 0),
        (Op::FunctionReturn, 0),
        (Op::EndSection, 0),
    ];
    assert_eq!(function_code(vec![]), expected);
    assert_eq!(function_code(vec![return_stmt(None)]), expected);
}

#[test]
fn test_consecutive_returns_are_collapsed() {
    let code = function_code(vec![
        return_stmt(Some(num(1.0))),
        return_stmt(Some(num(2.0))),
    ]);
    assert_eq!(
        code,
        vec![
            (Op::IntPushConstant, 1),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_locals_follow_arguments() {
    let module = compile_ok(vec![function(
        "f",
        &["x"],
        vec![
            var_decl(vec![("y", Some(var("x"))), ("z", None)]),
            return_stmt(Some(var("y"))),
        ],
    )]);
    let f = &module.functions()[0];
    assert_eq!((f.nargs(), f.nregs()), (1, 2));
    assert_eq!(
        decode(f),
        vec![
            (Op::PushFromVar, 0),
            (Op::PopIntoVar, 1),
            (Op::PushFromVar, 1),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_assignment_value_is_duplicated_when_used() {
    let code = function_code(vec![return_stmt(Some(assign(
        AssignmentOperator::Assign,
        "a",
        var("b"),
    )))]);
    assert_eq!(
        &code[..4],
        &[
            (Op::PushFromVar, 1),
            (Op::Duplicate, 0),
            (Op::PopIntoVar, 0),
            (Op::FunctionReturn, 0),
        ]
    );
}

#[test]
fn test_compound_assignments() {
    let cases = [
        (AssignmentOperator::AddAssign, Op::IntAdd),
        (AssignmentOperator::SubtractAssign, Op::IntSub),
        (AssignmentOperator::MultiplyAssign, Op::IntMul),
        (AssignmentOperator::DivideAssign, Op::IntDiv),
    ];
    for (operator, opcode) in cases {
        let code = function_code(vec![expr_stmt(assign(operator, "a", num(2.0)))]);
        assert_eq!(
            &code[..4],
            &[
                (Op::PushFromVar, 0),
                (Op::IntPushConstant, 2),
                (opcode, 0),
                (Op::PopIntoVar, 0),
            ]
        );
    }
    let err = assert_err!(compile_source(vec![function(
        "f",
        &["a"],
        vec![expr_stmt(assign(AssignmentOperator::ModuloAssign, "a", num(2.0)))],
    )]));
    assert_matches!(err, Error::UnsupportedOperator(op) if op == "%=");
}

#[test]
fn test_assignment_to_member_is_unsupported() {
    let target = Expression::Member(MemberExpression {
        object: Box::new(var("a")),
        property: MemberProperty::Identifier(ident("x")),
        computed: false,
    });
    let assignment = Expression::Assignment(AssignmentExpression {
        operator: AssignmentOperator::Assign,
        left: Box::new(target),
        right: Box::new(num(1.0)),
    });
    let err = assert_err!(compile_source(vec![function("f", &["a"], vec![expr_stmt(assignment)])]));
    assert_matches!(err, Error::UnsupportedSyntax(kind) if kind == "assignment to MemberExpression");
}

#[test]
fn test_update_expressions() {
    let postfix = function_code(vec![return_stmt(Some(update(UpdateOperator::Increment, false, "a")))]);
    assert_eq!(
        &postfix[..6],
        &[
            (Op::PushFromVar, 0),
            (Op::Duplicate, 0),
            (Op::IntPushConstant, 1),
            (Op::IntAdd, 0),
            (Op::PopIntoVar, 0),
            (Op::FunctionReturn, 0),
        ]
    );

    let prefix = function_code(vec![return_stmt(Some(update(UpdateOperator::Decrement, true, "a")))]);
    assert_eq!(
        &prefix[..6],
        &[
            (Op::PushFromVar, 0),
            (Op::IntPushConstant, 1),
            (Op::IntSub, 0),
            (Op::Duplicate, 0),
            (Op::PopIntoVar, 0),
            (Op::FunctionReturn, 0),
        ]
    );

    let discarded = function_code(vec![expr_stmt(update(UpdateOperator::Increment, true, "a"))]);
    assert_eq!(
        &discarded[..5],
        &[
            (Op::PushFromVar, 0),
            (Op::IntPushConstant, 1),
            (Op::IntAdd, 0),
            (Op::PopIntoVar, 0),
            (Op::IntPushConstant, 0),
        ]
    );
}

#[test]
fn test_sequence_expressions() {
    let discarded = function_code(vec![expr_stmt(sequence(vec![var("a"), var("b")]))]);
    assert_eq!(
        &discarded[..4],
        &[
            (Op::PushFromVar, 0),
            (Op::Drop, 0),
            (Op::PushFromVar, 1),
            (Op::Drop, 0),
        ]
    );

    let used = function_code(vec![return_stmt(Some(sequence(vec![var("a"), var("b")])))]);
    assert_eq!(
        &used[..4],
        &[
            (Op::PushFromVar, 0),
            (Op::Drop, 0),
            (Op::PushFromVar, 1),
            (Op::FunctionReturn, 0),
        ]
    );
}

#[test]
fn test_unary_expressions() {
    let code = function_code(vec![
        expr_stmt(unary(UnaryOperator::Minus, num(5.0))),
        expr_stmt(unary(UnaryOperator::Minus, var("a"))),
        expr_stmt(unary(UnaryOperator::Plus, var("b"))),
        expr_stmt(unary(UnaryOperator::LogicalNot, var("c"))),
    ]);
    assert_eq!(
        &code[..11],
        &[
            (Op::IntPushConstant, -5),
            (Op::Drop, 0),
            (Op::IntPushConstant, 0),
            (Op::PushFromVar, 0),
            (Op::IntSub, 0),
            (Op::Drop, 0),
            (Op::PushFromVar, 1),
            (Op::Drop, 0),
            (Op::PushFromVar, 2),
            (Op::IntNot, 0),
            (Op::Drop, 0),
        ]
    );

    let err = assert_err!(compile_source(vec![expr_stmt(unary(UnaryOperator::Typeof, num(1.0)))]));
    assert_matches!(err, Error::UnsupportedOperator(op) if op == "typeof");
}

#[test]
fn test_literals() {
    let module = compile_ok(vec![
        expr_stmt(boolean(true)),
        expr_stmt(boolean(false)),
        expr_stmt(unary(UnaryOperator::Minus, num(8_388_608.0))),
    ]);
    assert_eq!(
        decode(module.initializer()),
        vec![
            (Op::IntPushConstant, 1),
            (Op::Drop, 0),
            (Op::IntPushConstant, 0),
            (Op::Drop, 0),
            (Op::IntPushConstant, -8_388_608),
            (Op::Drop, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_literal_errors() {
    let err = assert_err!(compile_source(vec![expr_stmt(num(1.5))]));
    assert_matches!(err, Error::UnsupportedSyntax(_));
    let err = assert_err!(compile_source(vec![expr_stmt(num(10_000_000.0))]));
    assert_matches!(err, Error::OperandOverflow(10_000_000));
    let err = assert_err!(compile_source(vec![expr_stmt(Expression::Literal(Literal::Null))]));
    assert_matches!(err, Error::UnsupportedSyntax(_));
}

#[test]
fn test_identical_strings_share_an_id() {
    let print = |s: &str| expr_stmt(call("b9_primitive", vec![string("print_string"), string(s)]));
    let module = compile_ok(vec![print("hi"), print("there"), print("hi")]);
    let strings: Vec<_> = module.strings().iter().collect();
    assert_eq!(strings, vec![("hi", 0), ("there", 1)]);
    let pushes: Vec<_> = decode(module.initializer())
        .into_iter()
        .filter(|(op, _)| *op == Op::StrPushConstant)
        .map(|(_, id)| id)
        .collect();
    assert_eq!(pushes, vec![0, 1, 0]);
}

#[test]
fn test_primitive_calls() {
    let module = compile_ok(vec![expr_stmt(call(
        "b9_primitive",
        vec![string("print_number"), num(5.0)],
    ))]);
    assert_eq!(
        decode(module.initializer()),
        vec![
            (Op::IntPushConstant, 5),
            (Op::PrimitiveCall, 1),
            (Op::Drop, 0),
            (Op::EndSection, 0),
        ]
    );
    assert!(module.strings().is_empty());
    assert!(module.functions().is_empty());
}

#[test]
fn test_primitive_call_errors() {
    let err = assert_err!(compile_source(vec![expr_stmt(call("b9_primitive", vec![string("exit")]))]));
    assert_matches!(err, Error::UnknownPrimitive(name) if name == "exit");
    let err = assert_err!(compile_source(vec![expr_stmt(call("b9_primitive", vec![num(0.0)]))]));
    assert_matches!(err, Error::UnsupportedSyntax(_));
    let err = assert_err!(compile_source(vec![expr_stmt(call("b9_primitive", vec![]))]));
    assert_matches!(err, Error::UnsupportedSyntax(_));
}

#[test]
fn test_custom_primitive_callee() {
    let options = CompileOptions::new().with_primitive_callee("native");
    let module = assert_ok!(compile_with(
        options,
        vec![expr_stmt(call("native", vec![string("print_string"), string("x")]))],
    ));
    assert_eq!(decode(module.initializer())[1], (Op::PrimitiveCall, 0));

    // the default name is an ordinary function again
    let err = assert_err!(compile_with(
        CompileOptions::new().with_primitive_callee("native"),
        vec![expr_stmt(call("b9_primitive", vec![string("print_string")]))],
    ));
    assert_matches!(err, Error::UndefinedFunctionReference(name) if name == "b9_primitive");
}

#[test]
fn test_forward_reference() {
    let module = compile_ok(vec![
        function("a", &[], vec![return_stmt(Some(call("b", vec![])))]),
        function("b", &[], vec![return_stmt(Some(num(1.0)))]),
    ]);
    assert_eq!(code_of(&module, "a")[0], (Op::FunctionCall, 1));
    assert_eq!(module.functions().name(1), Some("b"));
}

#[test]
fn test_mutual_recursion() {
    let module = compile_ok(vec![
        function("even", &["n"], vec![return_stmt(Some(call("odd", vec![var("n")])))]),
        function("odd", &["n"], vec![return_stmt(Some(call("even", vec![var("n")])))]),
    ]);
    assert_eq!(code_of(&module, "even")[1], (Op::FunctionCall, 1));
    assert_eq!(code_of(&module, "odd")[1], (Op::FunctionCall, 0));
}

#[test]
fn test_undefined_function_fails_at_resolve() {
    let mut compiler = Compiler::new();
    let mut module = assert_ok!(compiler.compile(&program(vec![expr_stmt(call("missing", vec![]))])));
    let err = assert_err!(module.resolve());
    assert_matches!(err, Error::UndefinedFunctionReference(name) if name == "missing");
}

#[test]
fn test_duplicate_function_definition() {
    let err = assert_err!(compile_source(vec![
        function("f", &[], vec![]),
        function("f", &[], vec![]),
    ]));
    assert_matches!(err, Error::DuplicateFunctionDefinition(name) if name == "f");
}

#[test]
fn test_undefined_variable() {
    let err = assert_err!(compile_source(vec![function("f", &[], vec![return_stmt(Some(var("y")))])]));
    assert_matches!(err, Error::UndefinedVariableReference(name) if name == "y");
}

#[test]
fn test_nested_function_does_not_see_outer_locals() {
    let err = assert_err!(compile_source(vec![function(
        "outer",
        &["a"],
        vec![function("inner", &[], vec![return_stmt(Some(var("a")))])],
    )]));
    assert_matches!(
        err,
        Error::UndefinedVariableReference(name) if name == "a (declared in enclosing function outer)"
    );
}

#[test]
fn test_nested_function_records_outer() {
    let module = compile_ok(vec![function(
        "outer",
        &[],
        vec![function("inner", &["x"], vec![return_stmt(Some(var("x")))])],
    )]);
    let outer = module.functions().lookup("outer").unwrap();
    let inner = module.functions().lookup("inner").unwrap();
    assert_eq!(module.functions()[inner].outer(), Some(outer));
    assert_eq!(code_of(&module, "outer").len(), 3);
}

#[test]
fn test_script_function() {
    let options = CompileOptions::new().with_script_function("<script>");
    let module = assert_ok!(compile_with(
        options,
        vec![
            var_decl(vec![("x", Some(num(2.0)))]),
            function("f", &[], vec![]),
            expr_stmt(call("f", vec![])),
        ],
    ));
    assert_eq!(module.functions().name(0), Some("<script>"));
    assert_eq!(module.functions()[1].outer(), Some(0));
    let script = &module.functions()[0];
    assert_eq!(script.nregs(), 1);
    assert_eq!(
        decode(script),
        vec![
            (Op::IntPushConstant, 2),
            (Op::PopIntoVar, 0),
            (Op::FunctionCall, 1),
            (Op::Drop, 0),
            (Op::IntPushConstant, 0),
            (Op::FunctionReturn, 0),
            (Op::EndSection, 0),
        ]
    );
}

#[test]
fn test_unsupported_syntax_names_the_kind() {
    let do_while = Statement::DoWhile(DoWhileStatement {
        body: Box::new(block(vec![])),
        test: num(1.0),
    });
    let err = assert_err!(compile_source(vec![do_while]));
    assert_matches!(err, Error::UnsupportedSyntax(kind) if kind == "DoWhileStatement");

    let err = assert_err!(compile_source(vec![expr_stmt(Expression::This)]));
    assert_matches!(err, Error::UnsupportedSyntax(kind) if kind == "ThisExpression");

    let err = assert_err!(compile_source(vec![Statement::BreakLabel("outer".into())]));
    assert_matches!(err, Error::UnsupportedSyntax(kind) if kind == "BreakStatement with label `outer`");

    let err = assert_err!(compile_source(vec![expr_stmt(binary(
        BinaryOperator::LogicalAnd,
        num(1.0),
        num(0.0),
    ))]));
    assert_matches!(err, Error::UnsupportedSyntax(kind) if kind == "LogicalExpression");
}

#[test]
fn test_duplicate_parameter_is_rejected() {
    let err = assert_err!(compile_source(vec![
        function("f", &["a", "a"], vec![return_stmt(Some(var("a")))]),
        expr_stmt(call("f", vec![num(1.0), num(2.0)])),
    ]));
    assert_matches!(err, Error::UnsupportedSyntax(msg) if msg == "duplicate parameter `a`");
}

#[test]
fn test_logical_operators_are_unsupported_syntax() {
    let err = assert_err!(compile_source(vec![expr_stmt(binary(
        BinaryOperator::LogicalOr,
        num(1.0),
        num(0.0),
    ))]));
    assert_matches!(err, Error::UnsupportedSyntax(kind) if kind == "LogicalExpression");

    let guarded = function(
        "f",
        &["a", "b"],
        vec![if_stmt(binary(BinaryOperator::LogicalAnd, var("a"), var("b")), block(vec![]), None)],
    );
    let err = assert_err!(compile_source(vec![guarded]));
    assert_matches!(err, Error::UnsupportedSyntax(kind) if kind == "LogicalExpression");
}

#[test]
fn test_compiler_is_reusable() {
    let mut compiler = Compiler::new();
    let first = assert_ok!(compiler.compile(&program(vec![function("f", &[], vec![])])));
    let second = assert_ok!(compiler.compile(&program(vec![function("f", &[], vec![])])));
    assert_eq!(first.functions().len(), 1);
    assert_eq!(second.functions().len(), 1);
}
