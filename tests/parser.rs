use lekhmuji::{
    ast::{Expr, InfixOperator, LiteralValue, PrefixOperator, Program, Stmt},
    interpreter::{lexer::Lexer, parser::Parser},
};

fn parse(input: &str) -> Program {
    lekhmuji::parse(input).unwrap_or_else(|errors| panic!("parse errors for {input:?}: {errors:?}"))
}

fn parse_errors(input: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(input));
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

fn single_expression(input: &str) -> Expr {
    let mut program = parse(input);
    assert_eq!(program.statements.len(), 1, "program {input:?}");
    match program.statements.remove(0) {
        Stmt::Expression { expr } => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn variable_declarations() {
    let program = parse("thoos_muji x = 4;
                         thoos_muji y = x;
                         thoos_muji foobar = 234543;");
    assert_eq!(program.statements.len(), 3);

    let names: Vec<_> = program.statements
                               .iter()
                               .map(|statement| match statement {
                                   Stmt::VariableDeclaration { name, .. } => name.as_str(),
                                   other => panic!("expected a declaration, got {other:?}"),
                               })
                               .collect();
    assert_eq!(names, ["x", "y", "foobar"]);
}

#[test]
fn return_statements() {
    let program = parse("patha_muji 2; patha_muji a; patha_muji x + y;");
    assert_eq!(program.statements.len(), 3);
    for statement in &program.statements {
        assert!(matches!(statement, Stmt::Return { .. }), "got {statement:?}");
    }
}

#[test]
fn identifier_expression() {
    assert_eq!(single_expression("foobar;"),
               Expr::Variable { name: "foobar".to_string() });
}

#[test]
fn literal_expressions() {
    assert_eq!(single_expression("555;"),
               Expr::Literal { value: LiteralValue::Integer(555) });
    assert_eq!(single_expression("3.25;"),
               Expr::Literal { value: LiteralValue::Float(3.25) });
    assert_eq!(single_expression("jhut_muji;"),
               Expr::Literal { value: LiteralValue::Bool(false) });
    assert_eq!(single_expression("\"thik cha\";"),
               Expr::Literal { value: LiteralValue::Str("thik cha".to_string()) });
}

#[test]
fn prefix_expressions() {
    let tests = [("!5;", PrefixOperator::Not, "5"),
                 ("-15;", PrefixOperator::Negate, "15"),
                 ("!jhut_muji;", PrefixOperator::Not, "jhut_muji"),
                 ("!sacho_muji;", PrefixOperator::Not, "sacho_muji")];

    for (input, want_op, want_right) in tests {
        match single_expression(input) {
            Expr::Prefix { operator, right } => {
                assert_eq!(operator, want_op, "{input}");
                assert_eq!(right.to_string(), want_right, "{input}");
            },
            other => panic!("expected a prefix expression for {input}, got {other:?}"),
        }
    }
}

#[test]
fn infix_expressions() {
    let tests = [("5 + 5;", InfixOperator::Add),
                 ("5 - 5;", InfixOperator::Sub),
                 ("5 * 5;", InfixOperator::Mul),
                 ("5 / 5;", InfixOperator::Div),
                 ("5 % 5;", InfixOperator::Mod),
                 ("5 > 5;", InfixOperator::Greater),
                 ("5 < 5;", InfixOperator::Less),
                 ("5 <= 5;", InfixOperator::LessEqual),
                 ("5 >= 5;", InfixOperator::GreaterEqual),
                 ("5 == 5;", InfixOperator::Equal),
                 ("5 != 5;", InfixOperator::NotEqual)];

    for (input, want_op) in tests {
        match single_expression(input) {
            Expr::Infix { left, operator, right } => {
                assert_eq!(*left,
                           Expr::Literal { value: LiteralValue::Integer(5) },
                           "{input}");
                assert_eq!(operator, want_op, "{input}");
                assert_eq!(*right,
                           Expr::Literal { value: LiteralValue::Integer(5) },
                           "{input}");
            },
            other => panic!("expected an infix expression for {input}, got {other:?}"),
        }
    }
}

#[test]
fn operator_precedence() {
    let tests = [("1 + (2 + 3) + 4;", "((1 + (2 + 3)) + 4);"),
                 ("-a * b;", "((-a) * b);"),
                 ("!-a;", "(!(-a));"),
                 ("a + b + c;", "((a + b) + c);"),
                 ("a + b - c;", "((a + b) - c);"),
                 ("a * b * c;", "((a * b) * c);"),
                 ("a * b / c;", "((a * b) / c);"),
                 ("a + b / c;", "(a + (b / c));"),
                 ("a + b % c;", "(a + (b % c));"),
                 ("5 % 2 + 1;", "((5 % 2) + 1);"),
                 ("a + b * c + d / e - f;", "(((a + (b * c)) + (d / e)) - f);"),
                 ("3 + 4; -5 * 5;", "(3 + 4);((-5) * 5);"),
                 ("5 > 4 == 3 < 4;", "((5 > 4) == (3 < 4));"),
                 ("5 < 4 != 3 > 4;", "((5 < 4) != (3 > 4));"),
                 ("5 >= 4 == 3 <= 4;", "((5 >= 4) == (3 <= 4));"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5;", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
                 ("sacho_muji;", "sacho_muji;"),
                 ("3 < 5 == jhut_muji;", "((3 < 5) == jhut_muji);"),
                 ("a + add(b * c) + d;", "((a + add((b * c))) + d);"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8));",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));"),
                 ("add(a + b + c * d / f + g);", "add((((a + b) + ((c * d) / f)) + g));"),
                 ("a * xs[1] * b;", "((a * (xs[1])) * b);"),
                 ("x = y = z;", "(x = (y = z));"),
                 ("x = 1 + 2;", "(x = (1 + 2));"),
                 ("xs[0] = 5;", "((xs[0]) = 5);")];

    for (input, expected) in tests {
        assert_eq!(parse(input).to_string(), expected, "{input}");
    }
}

#[test]
fn if_expression() {
    match single_expression("yedi_muji (x < y) { x; };") {
        Expr::If { condition, consequent, alternative } => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequent.statements.len(), 1);
            assert!(alternative.is_none());
        },
        other => panic!("expected a conditional, got {other:?}"),
    }
}

#[test]
fn if_else_expression() {
    match single_expression("yedi_muji (sacho_muji) { 23; } nabhae_chikne { 43; };") {
        Expr::If { alternative, .. } => {
            let alternative = alternative.expect("missing alternative block");
            assert_eq!(alternative.statements.len(), 1);
        },
        other => panic!("expected a conditional, got {other:?}"),
    }
}

#[test]
fn while_expression() {
    match single_expression("jaba_samma_muji (x < 10) { x = x + 1; }") {
        Expr::While { condition, body } => {
            assert_eq!(condition.to_string(), "(x < 10)");
            assert_eq!(body.statements.len(), 1);
        },
        other => panic!("expected a while loop, got {other:?}"),
    }
}

#[test]
fn for_expression() {
    match single_expression("ghuma_muji (thoos_muji i = 0; i < 100; i = i + 1) { sacho_muji; }") {
        Expr::For { init, condition, update, body } => {
            assert!(matches!(*init, Stmt::VariableDeclaration { .. }));
            assert_eq!(condition.to_string(), "(i < 100);");
            assert_eq!(update.to_string(), "(i = (i + 1))");
            assert_eq!(body.statements.len(), 1);
        },
        other => panic!("expected a for loop, got {other:?}"),
    }
}

#[test]
fn function_literal_parameters() {
    let tests: [(&str, &[&str]); 3] =
        [("kaam_gar_muji(x, y) { patha_muji x + y; };", &["x", "y"]),
         ("kaam_gar_muji() { patha_muji 3; };", &[]),
         ("kaam_gar_muji(a, b, c) { patha_muji a + b + c; };", &["a", "b", "c"])];

    for (input, want) in tests {
        match single_expression(input) {
            Expr::Function { parameters, .. } => assert_eq!(parameters, want, "{input}"),
            other => panic!("expected a function literal for {input}, got {other:?}"),
        }
    }
}

#[test]
fn call_with_function_literal_callee() {
    match single_expression("kaam_gar_muji(x) { x; }(5)") {
        Expr::Call { callee, arguments } => {
            assert!(matches!(*callee, Expr::Function { .. }));
            assert_eq!(arguments.len(), 1);
        },
        other => panic!("expected a call, got {other:?}"),
    }
}

#[test]
fn array_literals() {
    match single_expression("[1, 2 * 2, 3 + 3];") {
        Expr::Array { elements } => {
            assert_eq!(elements.len(), 3);
            assert_eq!(elements[1].to_string(), "(2 * 2)");
        },
        other => panic!("expected an array literal, got {other:?}"),
    }
    assert_eq!(single_expression("[];"), Expr::Array { elements: Vec::new() });
}

#[test]
fn hash_literals() {
    match single_expression("{\"foo\" : 2, \"bar\" : 45};") {
        Expr::Hash { pairs } => {
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs[0].0.to_string(), "\"foo\"");
            assert_eq!(pairs[1].1.to_string(), "45");
        },
        other => panic!("expected a hash literal, got {other:?}"),
    }
    assert_eq!(single_expression("{};"), Expr::Hash { pairs: Vec::new() });
}

#[test]
fn index_expression() {
    match single_expression("xs[1 + 1];") {
        Expr::Index { operand, index } => {
            assert_eq!(operand.to_string(), "xs");
            assert_eq!(index.to_string(), "(1 + 1)");
        },
        other => panic!("expected an index expression, got {other:?}"),
    }
}

#[test]
fn printed_programs_reparse_to_the_same_tree() {
    let inputs = ["thoos_muji x = kaam_gar_muji(x) { patha_muji x; };",
                  "thoos_muji pi = 3.0;",
                  "patha_muji a + b * c;",
                  "yedi_muji (x == 0) { patha_muji 1; } nabhae_chikne { patha_muji x; };",
                  "jaba_samma_muji (i < 10) { i = i + 1; }",
                  "ghuma_muji (thoos_muji i = 0; i < 3; i = i + 1) { bhan_muji(i); }",
                  "{\"a\" : [1, 2], \"b\" : {\"c\" : 3}};",
                  "udaa_muji(xs, lambai_muji(xs) - 1);",
                  "xs[0] = xs[1] + -2;",
                  "!sacho_muji == jhut_muji;"];

    for input in inputs {
        let program = parse(input);
        let printed = program.to_string();
        let reparsed = parse(&printed);
        assert_eq!(program, reparsed, "printed form {printed:?} of {input:?}");
        assert_eq!(printed, reparsed.to_string(), "{input:?}");
    }
}

#[test]
fn declaration_errors() {
    assert_eq!(parse_errors("thoos_muji x 5;"),
               ["expected next token to be =, got INT instead"]);
    assert_eq!(parse_errors("thoos_muji = 5;"),
               ["expected next token to be IDENTIFIER, got = instead"]);
    assert_eq!(parse_errors("thoos_muji x = 5"),
               ["expected semicolon at the end of statement"]);
}

#[test]
fn expression_errors() {
    assert_eq!(parse_errors(";"), ["no prefix parse function for (;) found"]);
    assert_eq!(parse_errors("@;"), ["no prefix parse function for (ILLEGAL) found"]);
    assert_eq!(parse_errors("kaam_gar_muji(1) { 2; };")[0], "parameters must be identifiers");
    assert_eq!(parse_errors("9999999999999999999999;"),
               ["could not parse \"9999999999999999999999\" as integer"]);
}

#[test]
fn parser_resynchronizes_after_an_error() {
    let mut parser = Parser::new(Lexer::new("thoos_muji x 5; thoos_muji y = 2;"));
    let program = parser.parse_program();
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(&program.statements[0], Stmt::VariableDeclaration { name, .. } if name == "y"));
}
