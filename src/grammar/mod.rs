//! A module consist of the symbol and grammar model for the analyzer.
//!
//! A grammar is defined over a user symbol enumeration implemented through the
//! [SymbolImpl] trait and a list of productions collected by name into a
//! [ProductionSet].
//! [Grammar::build] resolves the names into plain integer symbol ids, partitions
//! the valid symbols into terminals and non-terminals, appends the augmented
//! start symbol `S'` and indexes productions by their left non-terminal.
//!
//! # Example
//!
//! ```
//! use lang_lr::{Grammar, ProductionSet, SymbolImpl};
//!
//! struct ArithSymbols;
//!
//! impl SymbolImpl for ArithSymbols {
//!     fn num_symbols() -> usize {
//!         10
//!     }
//!     fn symbol_name(id: usize) -> &'static str {
//!         ["ε", "E", "T", "F", "+", "*", "(", ")", "id", "$"]
//!             .get(id)
//!             .copied()
//!             .unwrap_or("")
//!     }
//!     fn is_terminal(id: usize) -> bool {
//!         id >= 4
//!     }
//! }
//!
//! let mut p = ProductionSet::new();
//! p.add("E", &["E", "+", "T"]);
//! p.add("E", &["T"]);
//! p.add("T", &["T", "*", "F"]);
//! p.add("T", &["F"]);
//! p.add("F", &["(", "E", ")"]);
//! p.add("F", &["id"]);
//!
//! let grammar = Grammar::build::<ArithSymbols>(&p, "E", "ε", "$").unwrap();
//! assert_eq!(grammar.v_t().len(), 6);
//! assert_eq!(grammar.v_n().len(), 3);
//! assert_eq!(grammar.symbol_name(grammar.augmented_start()), "S'");
//! ```

mod builder;
mod display;

#[cfg(test)]
mod __tests__;

/// Upper bound for the number of symbols on a production right side.
pub const MAX_PRODUCTION_LEN: usize = 10;

/// A grammar symbol id.
///
/// Ids index the symbol-info table of the owning [Grammar]; the last id is
/// reserved for the augmented start symbol `S'`.
pub type SymbolId = usize;

/// A trait implementation describing a user symbol enumeration to the grammar
/// builder.
///
/// Ids run from `0` to `num_symbols() - 1`; a reserved placeholder id reports an
/// empty name and is excluded from the grammar alphabet.
/// The names `"ε"`, `"$"` and `"S'"` are reserved for the empty-string marker,
/// the end-of-input marker and the augmented start symbol.
pub trait SymbolImpl {
    fn num_symbols() -> usize;
    fn symbol_name(id: SymbolId) -> &'static str;
    fn is_terminal(id: SymbolId) -> bool;
    fn id_of(name: &str) -> Option<SymbolId> {
        (0..Self::num_symbols()).find(|&id| Self::symbol_name(id) == name)
    }
}

#[derive(Debug, Clone)]
/// Descriptor of a single symbol id inside a [Grammar].
pub struct SymbolInfo {
    pub id: SymbolId,
    pub name: &'static str,
    pub is_terminal: bool,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A production `left → right` over resolved symbol ids.
///
/// An empty production is encoded with a right side holding the single ε
/// symbol.
pub struct Production {
    pub left: SymbolId,
    pub right: Vec<SymbolId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Reference to a production of a [Grammar].
///
/// User productions are addressed by their positional index; the augmented
/// production `S' → S` sits outside the user list.
pub enum ProductionRef {
    Augmented,
    User(usize),
}

#[derive(Debug, Clone, Default)]
/// An ordered list of productions collected by symbol name before resolution.
pub struct ProductionSet {
    rules: Vec<(String, Vec<String>)>,
}

/// A context-free grammar over an integer symbol alphabet.
///
/// Built once by [Grammar::build] and immutable afterwards.
#[derive(Debug)]
pub struct Grammar {
    symbol_infos: Vec<SymbolInfo>,
    v: Vec<SymbolId>,
    v_t: Vec<SymbolId>,
    v_n: Vec<SymbolId>,
    productions: Vec<Production>,
    augmented: Production,
    productions_of: Vec<Vec<usize>>,
    start: SymbolId,
    augmented_start: SymbolId,
    epsilon: SymbolId,
    end_marker: SymbolId,
}

impl ProductionSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a production given by the left symbol name and the right symbol
    /// names.
    /// Names are resolved against the symbol enumeration by [Grammar::build].
    pub fn add(&mut self, left: &str, right: &[&str]) -> &mut Self {
        self.rules.push((
            left.to_string(),
            right.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn rules(&self) -> &[(String, Vec<String>)] {
        &self.rules
    }
}

impl Grammar {
    /// Number of symbol ids including the reserved `S'` slot.
    /// Parse tables are sized by this value.
    pub fn num_symbol_ids(&self) -> usize {
        self.symbol_infos.len()
    }

    pub fn is_valid_symbol(&self, id: SymbolId) -> bool {
        id < self.symbol_infos.len() && self.symbol_infos[id].valid
    }

    pub fn is_terminal(&self, id: SymbolId) -> bool {
        self.is_valid_symbol(id) && self.symbol_infos[id].is_terminal
    }

    pub fn is_non_terminal(&self, id: SymbolId) -> bool {
        self.is_valid_symbol(id) && !self.symbol_infos[id].is_terminal
    }

    /// Name of a symbol id, or an empty string for invalid ids.
    pub fn symbol_name(&self, id: SymbolId) -> &'static str {
        if self.is_valid_symbol(id) {
            self.symbol_infos[id].name
        } else {
            ""
        }
    }

    /// All valid symbols excluding `S'`, in enumeration order.
    pub fn v(&self) -> &[SymbolId] {
        &self.v
    }

    /// Terminal symbols, in enumeration order.
    pub fn v_t(&self) -> &[SymbolId] {
        &self.v_t
    }

    /// Non-terminal symbols excluding ε and `S'`, in enumeration order.
    pub fn v_n(&self) -> &[SymbolId] {
        &self.v_n
    }

    pub fn num_productions(&self) -> usize {
        self.productions.len()
    }

    pub fn production(&self, index: ProductionRef) -> &Production {
        match index {
            ProductionRef::Augmented => &self.augmented,
            ProductionRef::User(i) => &self.productions[i],
        }
    }

    pub fn user_production(&self, index: usize) -> &Production {
        &self.productions[index]
    }

    /// The augmented production `S' → S`.
    pub fn augmented_production(&self) -> &Production {
        &self.augmented
    }

    /// Indices of the productions headed by the given non-terminal.
    pub fn productions_of(&self, left: SymbolId) -> &[usize] {
        &self.productions_of[left]
    }

    pub fn is_empty_production(&self, index: usize) -> bool {
        let p = &self.productions[index];
        p.right.len() == 1 && p.right[0] == self.epsilon
    }

    pub fn start(&self) -> SymbolId {
        self.start
    }

    pub fn augmented_start(&self) -> SymbolId {
        self.augmented_start
    }

    pub fn epsilon(&self) -> SymbolId {
        self.epsilon
    }

    pub fn end_marker(&self) -> SymbolId {
        self.end_marker
    }
}
