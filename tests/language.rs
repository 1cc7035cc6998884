use std::{error::Error, fs};

use minic::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context,
        lexer::{tokenize, Position, Token},
        parser::core::parse_program,
    },
    run_with,
};
use walkdir::WalkDir;

fn run_capture(source: &str) -> Result<String, Box<dyn Error>> {
    let mut output = Vec::new();
    {
        let mut context = Context::with_output(Box::new(&mut output));
        run_with(source, &mut context)?;
    }
    Ok(String::from_utf8(output).expect("program output is UTF-8"))
}

fn assert_output(source: &str, expected: &str) {
    match run_capture(source) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn run_err(source: &str) -> Box<dyn Error> {
    match run_capture(source) {
        Ok(output) => panic!("Script succeeded but was expected to fail. Output: {output:?}"),
        Err(e) => e,
    }
}

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "mc")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_capture(&source) {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn lexing_classifies_tokens() {
    let tokens = tokenize("if(n<1){return 1;}").unwrap();
    let kinds: Vec<_> = tokens.into_iter().map(|(tok, _)| tok).collect();

    assert_eq!(kinds,
               vec![Token::If,
                    Token::LParen,
                    Token::Identifier("n".to_string()),
                    Token::Less,
                    Token::Number(1),
                    Token::RParen,
                    Token::LBrace,
                    Token::Return,
                    Token::Number(1),
                    Token::Semicolon,
                    Token::RBrace]);
}

#[test]
fn lexing_tracks_lines_and_columns() {
    let tokens = tokenize("if\n  x(1);").unwrap();

    let (_, if_pos) = &tokens[0];
    assert_eq!((if_pos.line, if_pos.column), (1, 1));

    let (_, x_pos) = &tokens[1];
    assert_eq!((x_pos.line, x_pos.column), (2, 3));

    let (_, semi_pos) = &tokens[5];
    assert_eq!((semi_pos.line, semi_pos.column), (2, 7));
}

#[test]
fn lexing_rejects_unknown_characters() {
    let err = tokenize("void main() { print(1 + 2); }").unwrap_err();
    assert!(matches!(err, LexError::UnexpectedCharacter { .. }));
}

#[test]
fn lexing_rejects_oversized_numbers() {
    let err = tokenize("void main() { print(99999999999999999999); }").unwrap_err();
    assert!(matches!(err, LexError::NumberOutOfRange { .. }));
}

#[test]
fn parse_errors_name_the_production() {
    let tokens = tokenize("int main) {").unwrap();
    let err = parse_program(&mut tokens.iter().peekable()).unwrap_err();

    match err {
        ParseError::UnexpectedToken { context, .. } => assert_eq!(context, "function definition"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_type_names_are_rejected() {
    let tokens = tokenize("float main() { return 1; }").unwrap();
    let err = parse_program(&mut tokens.iter().peekable()).unwrap_err();

    assert!(matches!(err, ParseError::UnknownTypeName { .. }));
}

#[test]
fn empty_input_is_rejected() {
    let tokens = tokenize("  \n  ").unwrap();
    let err = parse_program(&mut tokens.iter().peekable()).unwrap_err();

    assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn pretty_printing_round_trips() {
    let source = r"
int fact(int n) {
    if (n < 1) { return 1; }
    return n * fact(n - 1);
}
void main() { print(fact(5)); }
";
    let tokens = tokenize(source).unwrap();
    let program = parse_program(&mut tokens.iter().peekable()).unwrap();

    let rendered = program.to_string();
    let tokens = tokenize(&rendered).unwrap();
    let reparsed = parse_program(&mut tokens.iter().peekable()).unwrap();

    // Positions differ between the two parses, so structural identity is
    // checked through a second rendering.
    assert_eq!(rendered, reparsed.to_string());
    assert_eq!(program.functions.len(), reparsed.functions.len());
}

#[test]
fn factorial_recursion() {
    let source = r"
int fact(int n) {
    if (n < 1) {
        return 1;
    }
    return n * fact(n - 1);
}

void main() {
    print(fact(5));
}
";
    assert_output(source, "120\n");
}

#[test]
fn print_runs_in_call_order() {
    assert_output("void main() { print(1); print(2); print(3); }", "1\n2\n3\n");
}

#[test]
fn lookahead_is_not_fooled_by_whitespace() {
    assert_output("void main ( ) {\n    print (\n        3 * 4 ) ;\n}", "12\n");
}

#[test]
fn binary_right_sides_nest() {
    // '-' associates to the right: 10 - (2 - 1).
    assert_output("void main() { print(10 - 2 - 1); }", "9\n");
    assert_output("int same(int n) { return n; }\nvoid main() { print(2 * same(21)); }",
                  "42\n");
}

#[test]
fn comparison_yields_a_boolean_condition() {
    assert_output("void main() { if (1 < 2) { print(7); } if (2 < 1) { print(8); } }", "7\n");
}

#[test]
fn if_condition_must_be_boolean() {
    let err = run_err("void main() { if (1 - 1) { print(1); } }");
    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn bool_argument_to_int_parameter_fails() {
    let source = "int same(int n) { return n; }\nvoid main() { print(same(1 < 2)); }";
    let err = run_err(source);

    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::ArgumentMismatch { .. })));
}

#[test]
fn arity_mismatches_fail_in_both_directions() {
    let with_extra = "int zero() { return 0; }\nvoid main() { print(zero(1)); }";
    assert!(matches!(run_err(with_extra).downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::ArgumentMismatch { .. })));

    let with_missing = "int same(int n) { return n; }\nvoid main() { print(same()); }";
    assert!(matches!(run_err(with_missing).downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::ArgumentMismatch { .. })));
}

#[test]
fn missing_main_fails_before_any_output() {
    let mut output = Vec::new();
    let err = {
        let mut context = Context::with_output(Box::new(&mut output));
        run_with("void start() { print(1); }", &mut context).unwrap_err()
    };
    assert!(output.is_empty());

    // The entry call is synthesized, so its diagnostic points at the start
    // of the source rather than at a position that exists nowhere.
    match err.downcast_ref::<RuntimeError>() {
        Some(RuntimeError::UnboundName { name, position }) => {
            assert_eq!(name, "main");
            assert_eq!(*position, Position::new(1, 1));
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unbound_names_are_errors() {
    assert!(matches!(run_err("void main() { missing(); }").downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::UnboundName { .. })));
    assert!(matches!(run_err("void main() { print(x); }").downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::UnboundName { .. })));
}

#[test]
fn calling_a_plain_value_fails() {
    let source = "int f(int x) { return x(1); }\nvoid main() { print(f(2)); }";
    assert!(matches!(run_err(source).downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::NotCallable { .. })));
}

#[test]
fn function_names_are_not_values() {
    let err = run_err("void main() { print(main); }");
    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn void_calls_produce_no_value() {
    let source = "void noise() { print(1); }\nvoid main() { print(noise()); }";
    assert!(matches!(run_err(source).downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::MissingValue { .. })));
}

#[test]
fn parameters_are_scoped_per_call() {
    let source = r"
int square(int x) {
    return x * x;
}

int observe(int x) {
    print(square(3));
    print(x);
    return 0;
}

void main() {
    print(observe(5));
}
";
    // The inner call binds its own x; the caller's x is untouched after it
    // returns.
    assert_output(source, "9\n5\n0\n");
}

#[test]
fn callee_scopes_do_not_see_caller_parameters() {
    let source = r"
int g() {
    return x;
}

int f(int x) {
    return g();
}

void main() {
    print(f(7));
}
";
    // g's scope is parented to the root, not to f's activation, so the
    // caller's x must not resolve.
    match run_err(source).downcast_ref::<RuntimeError>() {
        Some(RuntimeError::UnboundName { name, .. }) => assert_eq!(name, "x"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn return_short_circuits_nested_bodies() {
    let source = r"
int classify(int n) {
    if (n < 10) {
        if (n < 5) {
            return 1;
        }
        return 2;
    }
    return 3;
}

void main() {
    print(classify(3));
    print(classify(7));
    print(classify(12));
}
";
    assert_output(source, "1\n2\n3\n");
}

#[test]
fn later_definitions_overwrite_earlier_ones() {
    let source = "int f() { return 1; }\nint f() { return 2; }\nvoid main() { print(f()); }";
    assert_output(source, "2\n");
}

#[test]
fn unbounded_recursion_is_detected() {
    let source = "int f(int n) { return f(n); }\nvoid main() { print(f(1)); }";
    assert!(matches!(run_err(source).downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::RecursionLimit { .. })));
}

#[test]
fn expression_nesting_is_capped() {
    let mut source = String::from("void main() { print(");
    source.push_str(&"1 - ".repeat(4096));
    source.push_str("1); }");

    let err = run_err(&source);
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::ExpressionTooDeep { .. })));
}

#[test]
fn arithmetic_is_checked() {
    let err = run_err("void main() { print(9223372036854775807 * 2); }");
    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::Overflow { .. })));
}
