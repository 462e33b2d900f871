//! Language parsing tool (lang_lr) is a library to analyze context-free grammars and
//! generate bottom-up LR parsers driven by precomputed parse tables.
//!
//! # Overview
//!
//! A parser generator compiles a grammar ahead of time into tables which a small
//! runtime interpreter walks while consuming tokens.
//! This library implements the front half of that pipeline for the LR family:
//! given a grammar over a user-defined symbol enumeration it computes the classical
//! FIRST/FOLLOW/SELECT sets, enumerates the LR(0) items, builds the canonical
//! collection of item sets, and fills LR(0) and SLR(1) parse tables.
//! Conflicting cells are reported with their state, symbol and the competing
//! actions, so a grammar can be classified as LR(0), SLR or neither.
//!
//! The runtime half is a generic shift-reduce state machine ([LRStateMachine])
//! whose behavior is customized through the [ILRParseCallback] trait.
//! Shift, goto, reduce, accept and error events are all surfaced to the callback,
//! which makes the machine usable both for plain recognition and for building
//! parse trees ([ParseTree]).
//!
//! # Design
//!
//! Grammars are defined in plain Rust instead of a generator DSL.
//! The consumer supplies a symbol enumeration through the [SymbolImpl] trait and
//! collects productions by name into a [ProductionSet]; [Grammar::build] resolves
//! the names, partitions the alphabet into terminals and non-terminals and appends
//! the augmented start symbol `S'`.
//! All cross references inside the analyzer are plain indices into owning vectors:
//! items refer to their successor item by index, states are sets of item indices,
//! and tables refer to states and productions by index.
//!
//! # Example
//!
//! ```
//! use lang_lr::{Grammar, GrammarAnalyzer, GrammarClasses, ProductionSet, SymbolImpl};
//!
//! struct AbSymbols;
//!
//! impl SymbolImpl for AbSymbols {
//!     fn num_symbols() -> usize {
//!         6
//!     }
//!     fn symbol_name(id: usize) -> &'static str {
//!         ["ε", "S", "B", "a", "b", "$"].get(id).copied().unwrap_or("")
//!     }
//!     fn is_terminal(id: usize) -> bool {
//!         id >= 3
//!     }
//! }
//!
//! let mut p = ProductionSet::new();
//! p.add("S", &["B", "B"]);
//! p.add("B", &["a", "B"]);
//! p.add("B", &["b"]);
//!
//! let grammar = Grammar::build::<AbSymbols>(&p, "S", "ε", "$").unwrap();
//! let analyzer =
//!     GrammarAnalyzer::analyze(grammar, GrammarClasses::LR0 | GrammarClasses::SLR).unwrap();
//!
//! assert!(analyzer.is_lr0());
//! let table = analyzer.create_lr0_parse_table().unwrap();
//! assert!(table.num_states() > 0);
//! ```
//!
//! The bundled [expr] module defines a stratified operator-precedence expression
//! grammar whose terminal ids are shared with the [lexer] token types, so the
//! lexer output feeds the generated table directly.

mod codegen;
mod diagnostics;
mod error;
mod machine;
mod tree;

pub mod analyzer;
pub mod expr;
pub mod grammar;
pub mod lexer;
pub mod util;

pub use analyzer::{
    ActionTable, CanonicalCollection, GrammarAnalyzer, GrammarClasses, LRAction, LRItem,
    LRParseTable, MultiActionTable,
};
pub use codegen::{read_table, write_table};
pub use diagnostics::render_error;
pub use grammar::{
    Grammar, Production, ProductionRef, ProductionSet, SymbolId, SymbolImpl, MAX_PRODUCTION_LEN,
};
pub use machine::{ILRParseCallback, LRStateMachine};
pub use tree::ParseTree;

#[derive(Debug)]
/// An error raised while constructing a [Grammar] or filling its parse tables.
///
/// Construction-time errors are fatal to the invocation; the library never
/// attempts to repair a malformed grammar.
pub enum GrammarError {
    /// A production or special symbol referred to a name that is not part of
    /// the symbol enumeration.
    UnknownSymbol(String),
    /// A production left side resolved to a symbol that is not a non-terminal.
    InvalidLeftSymbol(String),
    /// A production right side exceeded [MAX_PRODUCTION_LEN].
    ProductionTooLong { left: String, len: usize },
    /// Table construction required a GOTO transition the canonical collection
    /// does not contain.
    MissingGoto { state: usize, symbol: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A parse table cell holding more than one action.
pub struct Conflict {
    pub state: usize,
    pub symbol: SymbolId,
    pub symbol_name: String,
    pub actions: Vec<LRAction>,
}

#[derive(Debug)]
/// An error returned when a multi-action table cannot be collapsed into a
/// single-action [LRParseTable] because at least one cell is ambiguous.
pub struct ConflictError {
    pub conflicts: Vec<Conflict>,
}

#[derive(Debug)]
/// An error returned when a serialized parse table cannot be read back.
pub struct TableReadError {
    pub line: usize,
    pub message: String,
}
