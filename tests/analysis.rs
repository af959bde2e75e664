use pretty_assertions::assert_eq;
use setlang::{
    ast::{BinaryOperator, ParseTree},
    error::Fault,
    interpreter::{
        diagnostics::RecordingSink,
        evaluator::core::Context,
        value::core::{Value, ValueKind},
    },
    parse_source,
};

#[test]
fn queries_on_a_hand_built_addition() {
    let tree = ParseTree::BinaryOp { op:    BinaryOperator::Add,
                                     left:  Box::new(ParseTree::IntConst { value: 1,
                                                                           line:  1, }),
                                     right: Box::new(ParseTree::IntConst { value: 2,
                                                                           line:  1, }),
                                     line:  1, };

    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.op_count(), 1);
    assert_eq!(tree.ident_count(), 0);
    assert_eq!(tree.string_count(), 0);
    assert_eq!(tree.max_depth(), 2);
}

#[test]
fn a_single_leaf_has_depth_one() {
    let leaf = ParseTree::StrConst { value: "x".to_string(),
                                     line:  1, };

    assert_eq!(leaf.node_count(), 1);
    assert_eq!(leaf.leaf_count(), 1);
    assert_eq!(leaf.string_count(), 1);
    assert_eq!(leaf.max_depth(), 1);
}

#[test]
fn queries_on_a_parsed_program() {
    // set x 2;                 StmtList -> Set -> IntConst
    // print x + "s";           StmtList -> Print -> BinaryOp -> Ident, StrConst
    let tree = parse_source("set x 2; print x + \"s\";").unwrap().unwrap();

    assert_eq!(tree.node_count(), 8);
    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.ident_count(), 1);
    assert_eq!(tree.string_count(), 1);
    assert_eq!(tree.op_count(), 1);
    assert_eq!(tree.max_depth(), 5);
}

#[test]
fn statement_lists_nest_to_the_right() {
    let tree = parse_source("print 1; print 2; print 3;").unwrap().unwrap();

    // Three StmtList nodes, three Print nodes, three IntConst leaves.
    assert_eq!(tree.node_count(), 9);
    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.max_depth(), 5);

    let ParseTree::StmtList { rest, .. } = &tree else {
        panic!("Program root is not a statement list");
    };
    assert!(matches!(rest.as_deref(), Some(ParseTree::StmtList { .. })));
}

#[test]
fn nodes_remember_their_source_line() {
    let tree = parse_source("set x 1;\n\nprint x;").unwrap().unwrap();

    assert_eq!(tree.line_number(), 1);

    let ParseTree::StmtList { rest, .. } = &tree else {
        panic!("Program root is not a statement list");
    };
    assert_eq!(rest.as_deref().unwrap().line_number(), 3);
}

#[test]
fn non_integer_loop_condition_is_a_fault() {
    let tree = parse_source("loop \"s\" do print 1; end").unwrap().unwrap();

    let mut out = Vec::new();
    let mut diagnostics = RecordingSink::default();
    let mut context = Context::new(&mut out, &mut diagnostics);

    let fault = context.eval(&tree).unwrap_err();
    assert!(matches!(fault,
                     Fault::TypeMismatch { expected: ValueKind::Integer,
                                           found:    ValueKind::Str, }));

    // The fault aborts evaluation; nothing is printed or reported.
    assert!(out.is_empty());
    assert!(diagnostics.reports.is_empty());
}

struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_write_failure_is_a_fault() {
    let tree = parse_source("print 1; print 2;").unwrap().unwrap();

    let mut out = ClosedPipe;
    let mut diagnostics = RecordingSink::default();
    let mut context = Context::new(&mut out, &mut diagnostics);

    let fault = context.eval(&tree).unwrap_err();
    assert!(matches!(fault, Fault::Output(_)));

    // The write failure aborts evaluation; it is not a reportable runtime
    // error.
    drop(context);
    assert!(diagnostics.reports.is_empty());
}

#[test]
fn payload_extraction_faults_on_the_wrong_variant() {
    assert_eq!(Value::Integer(42).as_integer().unwrap(), 42);
    assert_eq!(Value::Str("x".to_string()).as_str().unwrap(), "x");

    let fault = Value::Str("x".to_string()).as_integer().unwrap_err();
    assert!(matches!(fault,
                     Fault::TypeMismatch { expected: ValueKind::Integer,
                                           found:    ValueKind::Str, }));

    let fault = Value::default().as_str().unwrap_err();
    assert!(matches!(fault,
                     Fault::TypeMismatch { expected: ValueKind::Str,
                                           found:    ValueKind::Error, }));
}
