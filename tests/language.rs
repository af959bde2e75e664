use std::fs;

use pretty_assertions::assert_eq;
use setlang::{
    error::RuntimeError,
    interpreter::{diagnostics::RecordingSink, evaluator::core::Context},
    parse_source,
};

fn run(src: &str) -> (String, Vec<RuntimeError>) {
    let tree = parse_source(src).unwrap_or_else(|e| panic!("Script failed to parse: {e}"))
                                .expect("Script is empty");

    let mut out = Vec::new();
    let mut diagnostics = RecordingSink::default();
    let mut context = Context::new(&mut out, &mut diagnostics);

    context.eval(&tree)
           .unwrap_or_else(|e| panic!("Script faulted: {e}"));

    (String::from_utf8(out).expect("Output is not UTF-8"), diagnostics.reports)
}

fn assert_output(src: &str, expected: &str) {
    let (output, reports) = run(src);
    assert!(reports.is_empty(), "Unexpected diagnostics: {reports:?}");
    assert_eq!(output, expected);
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("set x 1 + 2; print x;", "3");
    assert_output("set x 7 * 9; print x;", "63");
    assert_output("set x 8 - 5; print x;", "3");
    assert_output("set x 10 / 2; print x;", "5");
}

#[test]
fn division_truncates_towards_zero() {
    assert_output("print 7 / 2;", "3");
    assert_output("print 0 - 7 / 2;", "-3");
}

#[test]
fn integer_arithmetic_wraps_on_overflow() {
    assert_output("print 9223372036854775807 + 1;", "-9223372036854775808");
    assert_output("print 0 - 9223372036854775807 - 2;", "9223372036854775807");
    assert_output("print (0 - 9223372036854775807 - 1) * 2;", "0");
    assert_output("print (0 - 9223372036854775807 - 1) / (0 - 1);",
                  "-9223372036854775808");
}

#[test]
fn precedence_and_grouping() {
    assert_output("print 2 + 3 * 4;", "14");
    assert_output("print (2 + 3) * 4;", "20");
    assert_output("print 10 - 3 - 2;", "5");
    assert_output("print 100 / 10 / 2;", "5");
}

#[test]
fn string_concatenation() {
    assert_output("print \"foo\" + \"bar\";", "foobar");
    assert_output("set greeting \"hello\" + \" \" + \"world\"; print greeting;",
                  "hello world");
}

#[test]
fn string_repetition_works_in_both_orders() {
    assert_output("print 3 * \"ab\";", "ababab");
    assert_output("print \"ab\" * 3;", "ababab");
    assert_output("set x 5; set y \"ab\"; print y * x;", "ababababab");
}

#[test]
fn zero_repetition_yields_empty_string() {
    assert_output("print 0 * \"ab\"; print \"|\";", "|");
    assert_output("print \"ab\" * 0; print \"|\";", "|");
}

#[test]
fn negative_repetition_is_reported_in_both_orders() {
    for src in ["print (0 - 1) * \"ab\";", "print \"ab\" * (0 - 1);"] {
        let (output, reports) = run(src);
        assert_eq!(output, "");
        assert_eq!(reports, vec![RuntimeError::NegativeRepetition { line: 1 }]);
    }
}

#[test]
fn divide_by_zero_is_reported_and_prints_nothing() {
    let (output, reports) = run("print 4 / 0;");
    assert_eq!(output, "");
    assert_eq!(reports, vec![RuntimeError::DivideByZero { line: 1 }]);
}

#[test]
fn non_integer_division_is_silent() {
    // Unlike every other operator, division over non-integers yields an
    // error value without any diagnostic.
    let (output, reports) = run("print \"a\" / 2;");
    assert_eq!(output, "");
    assert!(reports.is_empty(), "Unexpected diagnostics: {reports:?}");

    let (output, reports) = run("print 2 / \"a\";");
    assert_eq!(output, "");
    assert!(reports.is_empty(), "Unexpected diagnostics: {reports:?}");
}

#[test]
fn type_mismatches_are_reported() {
    use setlang::ast::BinaryOperator;

    let (output, reports) = run("print 1 + \"a\";");
    assert_eq!(output, "");
    assert_eq!(reports,
               vec![RuntimeError::TypeMismatch { op:   BinaryOperator::Add,
                                                 line: 1, }]);

    let (_, reports) = run("print \"a\" - \"b\";");
    assert_eq!(reports,
               vec![RuntimeError::TypeMismatch { op:   BinaryOperator::Sub,
                                                 line: 1, }]);

    let (_, reports) = run("print \"a\" * \"b\";");
    assert_eq!(reports,
               vec![RuntimeError::TypeMismatch { op:   BinaryOperator::Mul,
                                                 line: 1, }]);
}

#[test]
fn undefined_symbol_is_reported_and_execution_continues() {
    let (output, reports) = run("print foo; print 2;");
    assert_eq!(output, "2");
    assert_eq!(reports,
               vec![RuntimeError::UndefinedSymbol { name: "foo".to_string(),
                                                    line: 1, }]);
}

#[test]
fn error_values_propagate_without_extra_reports() {
    // The undefined symbol is reported once; the addition consuming the
    // error value reports its own mismatch, and printing the result is
    // silent.
    let (output, reports) = run("print foo + 1; print \"|\";");
    assert_eq!(output, "|");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0],
               RuntimeError::UndefinedSymbol { name: "foo".to_string(),
                                               line: 1, });
}

#[test]
fn assignment_overwrites_previous_binding() {
    assert_output("set x 1; set x x + 1; set x x * 10; print x;", "20");
}

#[test]
fn conditional_runs_body_on_nonzero() {
    assert_output("set x 1; if x then print \"yes\"; end", "yes");
    assert_output("if 0 - 5 then print \"yes\"; end", "yes");
}

#[test]
fn conditional_skips_body_on_zero() {
    assert_output("set x 0; if x then print \"yes\"; end print \"done\";",
                  "done");
}

#[test]
fn non_integer_conditional_is_reported_and_skips_body() {
    let (output, reports) = run("if \"s\" then print \"yes\"; end");
    assert_eq!(output, "");
    assert_eq!(reports, vec![RuntimeError::NonIntegerConditional { line: 1 }]);
}

#[test]
fn loop_counts_down_to_zero() {
    let src = "set n 3; loop n do print n; set n n - 1; end";
    let tree = parse_source(src).unwrap().unwrap();

    let mut out = Vec::new();
    let mut diagnostics = RecordingSink::default();
    let mut context = Context::new(&mut out, &mut diagnostics);
    context.eval(&tree).unwrap();

    use setlang::interpreter::value::core::Value;
    assert_eq!(context.get_variable("n"), Some(&Value::Integer(0)));

    // The context borrows the output buffer and the sink; release it before
    // inspecting them.
    drop(context);
    assert_eq!(String::from_utf8(out).unwrap(), "321");
    assert!(diagnostics.reports.is_empty());
}

#[test]
fn loop_body_never_runs_on_zero_condition() {
    assert_output("loop 0 do print \"never\"; end print \"done\";", "done");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_output("// a comment\n\nprint 1; // trailing\nprint 2;", "12");
}

#[test]
fn diagnostics_carry_the_source_line() {
    let (_, reports) = run("print 1;\nprint 4 / 0;\nprint foo;");
    assert_eq!(reports,
               vec![RuntimeError::DivideByZero { line: 2 },
                    RuntimeError::UndefinedSymbol { name: "foo".to_string(),
                                                    line: 3, }]);
}

#[test]
fn malformed_scripts_fail_to_parse() {
    assert!(parse_source("set 5 x;").is_err());
    assert!(parse_source("print 1").is_err());
    assert!(parse_source("if 1 then end").is_err());
    assert!(parse_source("loop 1 do print 1;").is_err());
    assert!(parse_source("print 1 @ 2;").is_err());
}

#[test]
fn empty_source_parses_to_no_program() {
    assert!(parse_source("").unwrap().is_none());
    assert!(parse_source("// only a comment\n").unwrap().is_none());
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.set").expect("missing file");
    let (output, reports) = run(&contents);
    assert!(reports.is_empty(), "Unexpected diagnostics: {reports:?}");
    assert_eq!(output, "*** 42");
}
