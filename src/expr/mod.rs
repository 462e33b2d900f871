//! The bundled expression grammar.
//!
//! A stratified operator-precedence grammar: each layer `T..T17` owns one
//! precedence level, from primary expressions up to the comma operator.
//! Associativity is encoded structurally; left-associative operators recurse
//! on their own layer to the left of the operator, right-associative ones to
//! the right.
//! The grammar is SLR but not LR(0).
//!
//! Terminal ids of [ExprSymbol] are shared with the lexer token types
//! ([TokenType](crate::lexer::TokenType)), so a token stream feeds the
//! generated table directly.

mod parser;

#[cfg(test)]
mod __tests__;

pub use parser::{ExprParseError, ExprParser};

use crate::analyzer::{GrammarAnalyzer, GrammarClasses, LRParseTable};
use crate::grammar::{Grammar, ProductionSet, SymbolId, SymbolImpl};
use crate::GrammarError;
use once_cell::sync::Lazy;

/// Number of symbol ids of the expression grammar, excluding `S'`.
pub const NUM_EXPR_SYMBOLS: usize = ExprSymbol::End as usize + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[rustfmt::skip]
/// Symbols of the expression grammar.
///
/// `Epsilon` through `Id` are the non-terminals; `Identifier` through `End`
/// are the terminals, with ids shared by the lexer token types.
pub enum ExprSymbol {
    Epsilon,
    Expr,
    T,
    T1, T2, T3, T4, T5, T6, T7, T8, T9,
    T10, T11, T12, T13, T14, T15, T16, T17,
    FuncArgs,
    StringLiterals,
    Id,

    // Identifiers
    Identifier,

    // Constants
    Bool,
    Integer,
    Float,
    StringLiteral,

    // Operators
    Period,
    Arrow,
    Amp,
    AmpAmp,
    Star,
    Plus,
    PlusPlus,
    Minus,
    MinusMinus,
    Tilde,
    Exclaim,
    ExclaimEqual,
    Slash,
    Percent,
    Less,
    LessEqual,
    LessLess,
    Greater,
    GreaterEqual,
    GreaterGreater,
    Caret,
    Pipe,
    PipePipe,
    Question,
    Colon,
    ColonColon,
    Equal,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    LessLessEqual,
    GreaterGreaterEqual,
    AmpEqual,
    CaretEqual,
    PipeEqual,
    EqualEqual,
    Comma,

    // Separators
    Semi,
    LSquare,
    RSquare,
    LParen,
    RParen,
    LBrace,
    RBrace,

    End,
}

#[rustfmt::skip]
static EXPR_SYMBOL_NAMES: [&str; NUM_EXPR_SYMBOLS] = [
    "ε",
    "Expr",
    "T",
    "T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8", "T9",
    "T10", "T11", "T12", "T13", "T14", "T15", "T16", "T17",
    "FuncArgs",
    "StringLiterals",
    "ID",
    "identifier",
    "bool",
    "integer",
    "float",
    "string_literal",
    ".", "->", "&", "&&", "*", "+", "++", "-", "--", "~",
    "!", "!=", "/", "%", "<", "<=", "<<", ">", ">=", ">>",
    "^", "|", "||", "?", ":", "::", "=", "+=", "-=", "*=",
    "/=", "%=", "<<=", ">>=", "&=", "^=", "|=", "==", ",",
    ";", "[", "]", "(", ")", "{", "}",
    "$",
];

impl SymbolImpl for ExprSymbol {
    fn num_symbols() -> usize {
        NUM_EXPR_SYMBOLS
    }

    fn symbol_name(id: SymbolId) -> &'static str {
        EXPR_SYMBOL_NAMES.get(id).copied().unwrap_or("")
    }

    fn is_terminal(id: SymbolId) -> bool {
        ExprSymbol::Identifier as usize <= id && id <= ExprSymbol::End as usize
    }
}

/// The production list of the expression grammar.
pub fn expr_productions() -> ProductionSet {
    let mut p = ProductionSet::new();
    p.add("Expr", &["T17"]);
    p.add("StringLiterals", &["string_literal"]);
    p.add("StringLiterals", &["string_literal", "string_literal"]);
    p.add("FuncArgs", &["FuncArgs", ",", "T16"]);
    p.add("FuncArgs", &["T16"]);

    p.add("ID", &["identifier"]);
    p.add("ID", &["ID", "::", "identifier"]); // left associative

    p.add("T", &["ID"]);
    p.add("T", &["integer"]);
    p.add("T", &["float"]);
    p.add("T", &["bool"]);
    p.add("T", &["string_literal"]);
    p.add("T", &["T", "(", "FuncArgs", ")"]);
    p.add("T", &["T", "(", ")"]);

    p.add("T1", &["T"]);

    p.add("T2", &["T"]);
    p.add("T2", &["T2", ".", "identifier"]); // left associative
    p.add("T2", &["T2", "->", "identifier"]); // left associative
    p.add("T2", &["(", "T17", ")"]);
    p.add("T2", &["T2", "[", "T17", "]"]); // left associative
    p.add("T2", &["T2", "++"]); // left associative
    p.add("T2", &["T2", "--"]); // left associative

    p.add("T3", &["T2"]);
    p.add("T3", &["++", "T3"]); // right associative
    p.add("T3", &["--", "T3"]); // right associative
    p.add("T3", &["+", "T3"]); // right associative
    p.add("T3", &["-", "T3"]); // right associative
    p.add("T3", &["!", "T3"]); // right associative
    p.add("T3", &["~", "T3"]); // right associative
    p.add("T3", &["*", "T3"]); // right associative
    p.add("T3", &["&", "T3"]); // right associative

    p.add("T4", &["T3"]);

    p.add("T5", &["T4"]);
    p.add("T5", &["T5", "*", "T4"]); // left associative
    p.add("T5", &["T5", "/", "T4"]); // left associative
    p.add("T5", &["T5", "%", "T4"]); // left associative

    p.add("T6", &["T5"]);
    p.add("T6", &["T6", "+", "T5"]); // left associative
    p.add("T6", &["T6", "-", "T5"]); // left associative

    p.add("T7", &["T6"]);
    p.add("T7", &["T7", "<<", "T6"]); // left associative
    p.add("T7", &["T7", ">>", "T6"]); // left associative

    p.add("T8", &["T7"]);

    p.add("T9", &["T8"]);
    p.add("T9", &["T9", "<", "T8"]); // left associative
    p.add("T9", &["T9", "<=", "T8"]); // left associative
    p.add("T9", &["T9", ">", "T8"]); // left associative
    p.add("T9", &["T9", ">=", "T8"]); // left associative

    p.add("T10", &["T9"]);
    p.add("T10", &["T10", "==", "T9"]); // left associative
    p.add("T10", &["T10", "!=", "T9"]); // left associative

    p.add("T11", &["T10"]);
    p.add("T11", &["T11", "&", "T10"]); // left associative

    p.add("T12", &["T11"]);
    p.add("T12", &["T12", "^", "T11"]); // left associative

    p.add("T13", &["T12"]);
    p.add("T13", &["T13", "|", "T12"]); // left associative

    p.add("T14", &["T13"]);
    p.add("T14", &["T14", "&&", "T13"]); // left associative

    p.add("T15", &["T14"]);
    p.add("T15", &["T15", "||", "T14"]); // left associative

    p.add("T16", &["T15"]);
    p.add("T16", &["T15", "?", "T16", ":", "T16"]); // right associative
    p.add("T16", &["T15", "=", "T16"]); // right associative
    p.add("T16", &["T15", "+=", "T16"]); // right associative
    p.add("T16", &["T15", "-=", "T16"]); // right associative
    p.add("T16", &["T15", "*=", "T16"]); // right associative
    p.add("T16", &["T15", "/=", "T16"]); // right associative
    p.add("T16", &["T15", "%=", "T16"]); // right associative
    p.add("T16", &["T15", "<<=", "T16"]); // right associative
    p.add("T16", &["T15", ">>=", "T16"]); // right associative
    p.add("T16", &["T15", "&=", "T16"]); // right associative
    p.add("T16", &["T15", "^=", "T16"]); // right associative
    p.add("T16", &["T15", "|=", "T16"]); // right associative

    p.add("T17", &["T16"]);
    p.add("T17", &["T17", ",", "T16"]); // left associative

    p
}

/// Build the expression grammar.
pub fn expr_grammar() -> Result<Grammar, GrammarError> {
    Grammar::build::<ExprSymbol>(&expr_productions(), "Expr", "ε", "$")
}

static EXPR_PARSE_TABLE: Lazy<LRParseTable> = Lazy::new(|| {
    let grammar = expr_grammar().expect("the bundled expression grammar is well formed");
    let ga = GrammarAnalyzer::analyze(grammar, GrammarClasses::SLR)
        .expect("the bundled expression grammar analyzes");
    ga.create_slr_parse_table()
        .expect("the bundled expression grammar is SLR")
});

/// The precomputed SLR parse table of the expression grammar, built once per
/// process and shared by reference.
pub fn expr_parse_table() -> &'static LRParseTable {
    &EXPR_PARSE_TABLE
}
