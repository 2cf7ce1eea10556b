use treelox::{
    Observer,
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Diagnostic, Diagnostics, LexErrorKind},
    get_result,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, TokenKind, scan},
        parser::core::{GROUP_COST, MAX_DEPTH, Parser, parse_expression},
        value::core::Value,
    },
    run, run_with,
};

fn assert_value(src: &str, expected: impl Into<Value>) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected.into(), "wrong value for `{src}`"),
        Err(e) => panic!("Script `{src}` failed: {e}"),
    }
}

fn assert_output(src: &str, expected: &str) {
    match get_result(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "wrong output for `{src}`"),
        Err(e) => panic!("Script `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &str) {
    match get_result(src) {
        Ok(value) => panic!("Script `{src}` succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), expected),
    }
}

fn parse(src: &str) -> Expr {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(src, &mut diagnostics);
    assert!(diagnostics.is_empty(), "unexpected lex errors: {diagnostics}");
    parse_expression(&tokens).unwrap_or_else(|e| panic!("Parse of `{src}` failed: {e}"))
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("16 / 4 / 2", 2.0);
    assert_value("-2 * -3", 6.0);
    assert_value("--5", 5.0);
    assert_value("1 < 2 == true", true);
    assert_value("2 + 2 == 4 != false", true);
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(parse("1 - 2 - 3").to_string(), "(- (- 1 2) 3)");
    assert_eq!(parse("1 + 2 * 3").to_string(), "(+ 1 (* 2 3))");
    assert_eq!(parse("!!true").to_string(), "(! (! true))");
    assert_eq!(parse("-123 * (45.67)").to_string(), "(* (- 123) (group 45.67))");
}

#[test]
fn string_concatenation() {
    assert_value("\"foo\" + \"bar\"", "foobar");
    assert_value("\"\" + \"\"", "");
    assert_output("\"a\" + \"b\" + \"c\"", "abc");
}

#[test]
fn truthiness() {
    assert_value("!nil", true);
    assert_value("!false", true);
    assert_value("!true", false);
    assert_value("!0", false);
    assert_value("!\"\"", false);
    assert_value("!!\"x\"", true);
}

#[test]
fn equality_never_fails() {
    assert_value("1 == 1", true);
    assert_value("1 == \"1\"", false);
    assert_value("nil == nil", true);
    assert_value("nil == false", false);
    assert_value("\"a\" == \"a\"", true);
    assert_value("\"a\" != \"b\"", true);
    assert_value("true != true", false);
    assert_value("0 / 0 == 0 / 0", false);
}

#[test]
fn comparisons() {
    assert_value("3 < 5", true);
    assert_value("5 <= 5", true);
    assert_value("5 > 5", false);
    assert_value("5 >= 4.5", true);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);

    match get_result("0 / 0") {
        Ok(Value::Number(n)) => assert!(n.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }
}

#[test]
fn numbers_print_without_trailing_zero() {
    assert_output("6.0", "6");
    assert_output("6.5", "6.5");
    assert_output("3 * 2", "6");
    assert_output("7 / 2", "3.5");
    assert_output("-0.5", "-0.5");
    assert_output("nil", "nil");
    assert_output("true", "true");
}

#[test]
fn type_errors_name_the_operator_line() {
    assert_failure("\"1\" + 2", "Operands must be two numbers or two strings.\n[line 1]");
    assert_failure("true - 1", "Operands must be numbers.\n[line 1]");
    assert_failure("1 < \"2\"", "Operands must be numbers.\n[line 1]");
    assert_failure("-\"muffin\"", "Operand must be a number.\n[line 1]");
    assert_failure("1 +\n\n nil * 2", "Operands must be numbers.\n[line 3]");
}

#[test]
fn first_runtime_error_wins() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(run("(-nil) + (true * 1)", &mut diagnostics), None);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.to_string(), "Operand must be a number.\n[line 1]");
}

#[test]
fn syntax_errors() {
    assert_failure("(1 + 2", "[line 1] Error at end: Expect ')' after expression.");
    assert_failure("1 +", "[line 1] Error at end: Expect expression.");
    assert_failure("* 3", "[line 1] Error at '*': Expect expression.");
    assert_failure("(1 2)", "[line 1] Error at '2': Expect ')' after expression.");
    assert_failure("1 2", "[line 1] Error at '2': Expect end of expression.");
    assert_failure("", "[line 1] Error at end: Expect expression.");
    assert_failure("\n\nvar", "[line 3] Error at 'var': Expect expression.");
}

#[test]
fn lex_errors_are_collected_and_block_evaluation() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(run("1 @ + # 2", &mut diagnostics), None);
    assert!(diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
    assert_eq!(diagnostics.to_string(),
               "[line 1] Error: Unexpected character.\n[line 1] Error: Unexpected character.");
    assert!(diagnostics.iter().all(|d| d.is_static() && d.line() == 1));
}

#[test]
fn lex_and_parse_errors_are_both_reported() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(run("1 | 2", &mut diagnostics), None);
    assert_eq!(diagnostics.len(), 2);

    let reports: Vec<_> = diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(reports,
               ["[line 1] Error: Unexpected character.",
                "[line 1] Error at '2': Expect end of expression."]);
    assert!(matches!(diagnostics.iter().next(), Some(Diagnostic::Lex(_))));
    assert!(matches!(diagnostics.iter().nth(1), Some(Diagnostic::Parse(_))));
}

#[test]
fn static_errors_suppress_runtime_errors() {
    let mut diagnostics = Diagnostics::new();

    assert_eq!(run("-\"a\" @", &mut diagnostics), None);
    assert!(diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn scanning_strings() {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan("\"s\"", &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Value::from("s")));
    assert_eq!(tokens[0].to_string(), "STRING \"s\" s");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn multi_line_strings_advance_the_line() {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan("\"a\nb\" +", &mut diagnostics);

    assert_eq!(tokens[0].literal, Some(Value::from("a\nb")));
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn unterminated_string() {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan("\"abc", &mut diagnostics);

    assert!(tokens.iter().all(|t| t.kind != TokenKind::String));
    assert_eq!(diagnostics.len(), 1);

    let Some(Diagnostic::Lex(error)) = diagnostics.iter().next() else {
        panic!("expected a lex error, got {diagnostics:?}");
    };
    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
    assert_eq!(error.to_string(), "[line 1] Error: Unterminated string.");
}

#[test]
fn token_text() {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan("12.5 >= nil // trailing", &mut diagnostics);
    let text: Vec<_> = tokens.iter().map(ToString::to_string).collect();

    assert_eq!(text, ["NUMBER 12.5 12.5", "GREATER_EQUAL >= ", "NIL nil ", "EOF  "]);
}

#[test]
fn keywords_and_identifiers_scan_but_do_not_parse() {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan("orchid or _x1", &mut diagnostics);
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               [TokenKind::Identifier, TokenKind::Or, TokenKind::Identifier, TokenKind::Eof]);

    assert_failure("orchid", "[line 1] Error at 'orchid': Expect expression.");
}

#[test]
fn number_lexemes_need_digits_after_the_dot() {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan("123.", &mut diagnostics);
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds, [TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
    assert_eq!(tokens[0].lexeme, "123");
}

fn nested_groups(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_limit() {
    let negations = format!("{}1", "-".repeat(300));
    assert_failure(&negations, "[line 1] Error at '-': Expression nesting is too deep.");

    let even = format!("{}1", "-".repeat(MAX_DEPTH));
    assert_value(&even, 1.0);

    let mut diagnostics = Diagnostics::new();
    let tokens = scan(&nested_groups(300), &mut diagnostics);
    let error = Parser::new(&tokens).with_max_depth(64).parse().unwrap_err();
    assert_eq!(error.to_string(),
               "[line 1] Error at '(': Expression nesting is too deep.");

    let mut diagnostics = Diagnostics::new();
    let tokens = scan("((1))", &mut diagnostics);
    assert!(Parser::new(&tokens).with_max_depth(2 * GROUP_COST - 1).parse().is_err());
    assert!(Parser::new(&tokens).with_max_depth(2 * GROUP_COST).parse().is_ok());
}

#[test]
fn deepest_accepted_groups_fit_the_default_stack() {
    let deepest = MAX_DEPTH / GROUP_COST;

    assert_value(&nested_groups(deepest), 1.0);
    assert_failure(&nested_groups(deepest + 1),
                   "[line 1] Error at '(': Expression nesting is too deep.");

    let mut diagnostics = Diagnostics::new();
    assert_eq!(run(&nested_groups(MAX_DEPTH - 1), &mut diagnostics), None);
    assert!(diagnostics.had_error());
}

#[test]
fn groups_and_prefix_operators_share_the_budget() {
    let groups = MAX_DEPTH / GROUP_COST - 1;
    let fits = format!("{}{}1{}",
                       "(".repeat(groups),
                       "-".repeat(GROUP_COST),
                       ")".repeat(groups));
    assert_value(&fits, 1.0);

    let too_deep = format!("{}{}1{}",
                           "(".repeat(groups),
                           "-".repeat(GROUP_COST + 1),
                           ")".repeat(groups));
    assert_failure(&too_deep, "[line 1] Error at '-': Expression nesting is too deep.");
}

#[test]
fn long_binary_chains_are_bounded() {
    let sum = ["1"; 200].join(" + ");
    assert_value(&sum, 200.0);

    let too_long = ["1"; 400].join(" + ");
    assert_failure(&too_long, "[line 1] Error at '+': Expression nesting is too deep.");
}

#[test]
fn source_round_trip() {
    let trees = [Expr::binary(Expr::literal(-3.5),
                              BinaryOperator::Mul,
                              Expr::grouping(Expr::literal(2.0)),
                              1),
                 Expr::unary(UnaryOperator::Not,
                             Expr::binary(Expr::literal("a"),
                                          BinaryOperator::Equal,
                                          Expr::literal(Value::Nil),
                                          1),
                             1),
                 Expr::binary(Expr::literal(1.0),
                              BinaryOperator::Sub,
                              Expr::binary(Expr::literal(2.0),
                                           BinaryOperator::Sub,
                                           Expr::literal(3.0),
                                           1),
                              1),
                 Expr::unary(UnaryOperator::Negate,
                             Expr::unary(UnaryOperator::Negate, Expr::literal(0.1), 1),
                             1),
                 Expr::binary(Expr::literal("x"), BinaryOperator::Add, Expr::literal("y"), 1),
                 Expr::binary(Expr::literal(true),
                              BinaryOperator::NotEqual,
                              Expr::literal(false),
                              1)];

    let interpreter = Interpreter::new();
    for tree in trees {
        let source = tree.to_source();
        let reparsed = parse(&source);

        assert_eq!(interpreter.evaluate(&reparsed).unwrap(),
                   interpreter.evaluate(&tree).unwrap(),
                   "round trip through `{source}` changed the value");
    }
}

#[test]
fn round_trip_keeps_failures() {
    let tree = Expr::binary(Expr::literal("1"), BinaryOperator::Add, Expr::literal(2.0), 1);
    let reparsed = parse(&tree.to_source());

    assert!(Interpreter::new().evaluate(&tree).is_err());
    assert!(Interpreter::new().evaluate(&reparsed).is_err());
}

#[test]
fn runtime_error_points_at_operator_token() {
    let expr = parse("1 +\n\"a\"");
    let error = Interpreter::new().evaluate(&expr).unwrap_err();

    assert_eq!(error.operator().kind, TokenKind::Plus);
    assert_eq!(error.line(), 1);
}


#[derive(Default)]
struct Recorder {
    tokens: Vec<String>,
    trees:  Vec<String>,
}

impl Observer for Recorder {
    fn scanned(&mut self, tokens: &[Token]) {
        self.tokens = tokens.iter().map(ToString::to_string).collect();
    }

    fn parsed(&mut self, expr: &Expr) {
        self.trees.push(expr.to_string());
    }
}

#[test]
fn observer_sees_tokens_and_tree() {
    let mut recorder = Recorder::default();
    let mut diagnostics = Diagnostics::new();

    let value = run_with("-1 + 2", MAX_DEPTH, &mut recorder, &mut diagnostics);

    assert_eq!(value, Some(Value::Number(1.0)));
    assert_eq!(recorder.tokens,
               ["MINUS - ", "NUMBER 1 1", "PLUS + ", "NUMBER 2 2", "EOF  "]);
    assert_eq!(recorder.trees, ["(+ (- 1) 2)"]);
}

#[test]
fn observer_never_sees_a_tree_with_static_errors() {
    let mut recorder = Recorder::default();
    let mut diagnostics = Diagnostics::new();

    assert_eq!(run_with("1 + $", MAX_DEPTH, &mut recorder, &mut diagnostics), None);
    assert_eq!(recorder.tokens.len(), 3);
    assert!(recorder.trees.is_empty());

    let mut diagnostics = Diagnostics::new();
    assert_eq!(run_with("((1))", GROUP_COST, &mut recorder, &mut diagnostics), None);
    assert!(recorder.trees.is_empty());
}
