use super::{expr_grammar, expr_parse_table, ExprParser, ExprSymbol};
use crate::analyzer::{GrammarAnalyzer, GrammarClasses};
use crate::lexer::{Lexer, Source, Token, TokenType};

fn tokenize(text: &str) -> Vec<Token> {
    let sources = vec![Source::new("expr.cw", text)];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    let mut tokens = Vec::new();
    loop {
        let token = lexer.token(0).clone();
        if token.ty == TokenType::Eos {
            break tokens;
        }
        tokens.push(token);
        lexer.advance();
    }
}

#[test]
fn expression_grammar_is_slr_but_not_lr0() {
    let ga = GrammarAnalyzer::analyze(
        expr_grammar().unwrap(),
        GrammarClasses::LR0 | GrammarClasses::SLR,
    )
    .unwrap();

    assert!(!ga.is_lr0());
    assert!(ga.is_slr());
}

#[test]
fn parse_table_is_shared_by_reference() {
    assert!(std::ptr::eq(expr_parse_table(), expr_parse_table()));
    assert!(expr_parse_table().num_states() > 0);
}

#[test]
fn parses_precedence_layers() {
    let mut parser = ExprParser::new().unwrap();
    let tree = parser.parse(&tokenize("a + b * c")).unwrap();

    assert_eq!(tree.symbol, ExprSymbol::Expr as usize);

    // the additive node binds an identifier chain and a multiplicative node
    let additive = tree.find(ExprSymbol::T6 as usize).unwrap();
    assert_eq!(additive.children.len(), 3);
    assert_eq!(additive.children[1].symbol, ExprSymbol::Plus as usize);

    let multiplicative = additive.children[2].find(ExprSymbol::T5 as usize).unwrap();
    assert!(multiplicative.contains(ExprSymbol::Star as usize));

    // leaves keep their tokens
    let id = tree.find(ExprSymbol::Identifier as usize).unwrap();
    assert_eq!(id.leaf.as_ref().unwrap().ty, TokenType::Identifier);
}

#[test]
fn parses_calls_and_scope_resolution() {
    let mut parser = ExprParser::new().unwrap();

    let tree = parser.parse(&tokenize("ns::f(x, y + 1)")).unwrap();
    assert!(tree.contains(ExprSymbol::FuncArgs as usize));
    assert!(tree.contains(ExprSymbol::ColonColon as usize));

    let tree = parser.parse(&tokenize("f()")).unwrap();
    assert!(!tree.contains(ExprSymbol::FuncArgs as usize));
}

#[test]
fn parses_right_associative_assignment() {
    let mut parser = ExprParser::new().unwrap();
    let tree = parser.parse(&tokenize("a = b = c")).unwrap();

    // T16 → T15 = T16 nests to the right
    let outer = tree.find(ExprSymbol::T16 as usize).unwrap();
    assert_eq!(outer.children.len(), 3);
    assert_eq!(outer.children[1].symbol, ExprSymbol::Equal as usize);
    assert!(outer.children[2].contains(ExprSymbol::Equal as usize));
}

#[test]
fn rejects_truncated_expression() {
    let mut parser = ExprParser::new().unwrap();
    let err = parser.parse(&tokenize("a +")).unwrap_err();
    assert!(err.token.is_none());

    let err = parser.parse(&tokenize("a + + ")).unwrap_err();
    assert!(err.token.is_none());
}

#[test]
fn rejects_non_expression_tokens() {
    let mut parser = ExprParser::new().unwrap();
    let err = parser.parse(&tokenize("struct")).unwrap_err();
    assert_eq!(err.token.unwrap().ty, TokenType::Struct);
}

#[test]
fn recovers_between_parses() {
    let mut parser = ExprParser::new().unwrap();
    assert!(parser.parse(&tokenize("a +")).is_err());
    // a failed parse leaves no residue for the next one
    assert!(parser.parse(&tokenize("a + b")).is_ok());
}
