//! A module consist of the grammar analysis pipeline: FIRST/FOLLOW/SELECT set
//! computation, LR(0) item enumeration, the canonical collection of item sets
//! and the LR(0)/SLR(1) parse tables.
//!
//! [GrammarAnalyzer::analyze] runs the pipeline eagerly for the requested
//! [GrammarClasses] and stores every intermediate artifact, so a caller can
//! inspect the sets, the item list, the collection and both multi-action
//! tables afterwards.
//! A grammar belongs to a class when the corresponding multi-action table has
//! no cell with more than one action; [GrammarAnalyzer::create_lr0_parse_table]
//! and [GrammarAnalyzer::create_slr_parse_table] collapse a conflict-free
//! multi-action table into the runtime [LRParseTable].
//!
//! # Example
//!
//! ```
//! use lang_lr::{Grammar, GrammarAnalyzer, GrammarClasses, ProductionSet, SymbolImpl};
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
//! let g = Grammar::build::<ArithSymbols>(&p, "E", "ε", "$").unwrap();
//! let ga = GrammarAnalyzer::analyze(g, GrammarClasses::ALL).unwrap();
//!
//! // The arithmetic grammar is the classic SLR-but-not-LR(0) example.
//! assert!(!ga.is_lr0());
//! assert!(ga.is_slr());
//! assert!(!ga.lr0_conflicts().is_empty());
//! ```

mod collection;
mod display;
mod items;
mod sets;
mod table;

#[cfg(test)]
mod __tests__;

use crate::grammar::{Grammar, ProductionRef, SymbolId};
use crate::{Conflict, ConflictError, GrammarError};
use std::collections::{BTreeSet, HashMap};
use std::ops::BitOr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Selection of grammar classes for [GrammarAnalyzer::analyze].
///
/// Classes combine with `|`.
/// LR(1) is scaffolded but not constructed; requesting it only reserves the
/// empty artifacts.
pub struct GrammarClasses(u32);

impl GrammarClasses {
    pub const NONE: GrammarClasses = GrammarClasses(0);
    pub const LR0: GrammarClasses = GrammarClasses(0x1);
    pub const SLR: GrammarClasses = GrammarClasses(0x2);
    pub const LR1: GrammarClasses = GrammarClasses(0x4);
    pub const ALL: GrammarClasses = GrammarClasses(0x7);

    pub fn contains(&self, other: GrammarClasses) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for GrammarClasses {
    type Output = GrammarClasses;

    fn bitor(self, rhs: GrammarClasses) -> GrammarClasses {
        GrammarClasses(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A dotted item of the augmented grammar.
///
/// All items are enumerated once into a flat list; `next_item` is the index of
/// the item with the dot advanced by one position, `None` for reduce items.
/// `lookahead` is reserved for the LR(1) extension and stays `None` for LR(0)
/// and SLR analysis.
pub struct LRItem {
    pub production: ProductionRef,
    pub dot: usize,
    pub next_item: Option<usize>,
    pub lookahead: Option<SymbolId>,
}

impl LRItem {
    /// Whether the dot sits before the first right-side symbol.
    pub fn at_start(&self) -> bool {
        self.dot == 0
    }

    /// Whether the dot sits past the last right-side symbol.
    pub fn is_reduce(&self) -> bool {
        self.next_item.is_none()
    }

    /// The symbol immediately right of the dot, when the dot is not at the end.
    pub fn next_symbol(&self, grammar: &Grammar) -> Option<SymbolId> {
        grammar.production(self.production).right.get(self.dot).copied()
    }

    pub fn left_symbol(&self, grammar: &Grammar) -> SymbolId {
        grammar.production(self.production).left
    }
}

/// The canonical collection of LR item sets.
///
/// States are sets of item indices kept in insertion order; structural
/// equality on the sorted set deduplicates states, and GOTO transitions are
/// recorded per `(state, symbol)` pair.
pub struct CanonicalCollection {
    states: Vec<BTreeSet<usize>>,
    state_ids: HashMap<BTreeSet<usize>, usize>,
    gotos: HashMap<(usize, SymbolId), usize>,
}

impl CanonicalCollection {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            state_ids: HashMap::new(),
            gotos: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, id: usize) -> &BTreeSet<usize> {
        &self.states[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BTreeSet<usize>> {
        self.states.iter()
    }

    /// Id of a state with this exact item set, if present.
    pub fn index_of(&self, set: &BTreeSet<usize>) -> Option<usize> {
        self.state_ids.get(set).copied()
    }

    /// Insert a state, reusing the id of a structurally equal existing state.
    /// Returns the id and whether the set was new.
    pub fn insert(&mut self, set: BTreeSet<usize>) -> (usize, bool) {
        if let Some(&id) = self.state_ids.get(&set) {
            return (id, false);
        }
        let id = self.states.len();
        self.state_ids.insert(set.clone(), id);
        self.states.push(set);
        (id, true)
    }

    pub fn goto(&self, state: usize, symbol: SymbolId) -> Option<usize> {
        self.gotos.get(&(state, symbol)).copied()
    }

    pub fn set_goto(&mut self, state: usize, symbol: SymbolId, next_state: usize) {
        self.gotos.insert((state, symbol), next_state);
    }
}

impl Default for CanonicalCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A parse table action.
pub enum LRAction {
    Error,
    Shift(usize),
    Reduce(usize),
    Goto(usize),
    Accept,
}

impl Default for LRAction {
    fn default() -> Self {
        LRAction::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A flat `num_states × num_symbols` action grid.
pub struct ActionTable<A> {
    num_states: usize,
    num_symbols: usize,
    cells: Vec<A>,
}

/// Table shape used during construction and conflict detection: every cell
/// holds the set of competing actions.
pub type MultiActionTable = ActionTable<BTreeSet<LRAction>>;

/// Runtime table shape: one action per cell, [LRAction::Error] in empty cells.
pub type LRParseTable = ActionTable<LRAction>;

impl<A: Clone + Default> ActionTable<A> {
    pub fn new(num_states: usize, num_symbols: usize) -> Self {
        Self {
            num_states,
            num_symbols,
            cells: vec![A::default(); num_states * num_symbols],
        }
    }

    pub fn empty() -> Self {
        Self {
            num_states: 0,
            num_symbols: 0,
            cells: Vec::new(),
        }
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn num_symbols(&self) -> usize {
        self.num_symbols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, state: usize, symbol: SymbolId) -> &A {
        &self.cells[state * self.num_symbols + symbol]
    }

    pub fn cell_mut(&mut self, state: usize, symbol: SymbolId) -> &mut A {
        &mut self.cells[state * self.num_symbols + symbol]
    }
}

impl LRParseTable {
    /// Action for a state/symbol pair; out-of-range symbols map to
    /// [LRAction::Error].
    pub fn action(&self, state: usize, symbol: SymbolId) -> LRAction {
        if state < self.num_states && symbol < self.num_symbols {
            self.cells[state * self.num_symbols + symbol]
        } else {
            LRAction::Error
        }
    }

    pub(crate) fn set_action(&mut self, state: usize, symbol: SymbolId, action: LRAction) {
        self.cells[state * self.num_symbols + symbol] = action;
    }
}

/// The analysis result for one grammar: derived sets, items, the canonical
/// collection and the requested parse tables.
///
/// Artifacts are allocated once and stay immutable; drop the analyzer to
/// release all of them together.
pub struct GrammarAnalyzer {
    grammar: Grammar,
    firsts: Vec<BTreeSet<SymbolId>>,
    follows: Vec<BTreeSet<SymbolId>>,
    selects: Vec<BTreeSet<SymbolId>>,
    lr0_items: Vec<LRItem>,
    lr0_canonical_collection: CanonicalCollection,
    lr0_parse_table: MultiActionTable,
    slr_parse_table: MultiActionTable,
    // LR(1) scaffolding; construction is a recognized future extension.
    lr1_items: Vec<LRItem>,
    lr1_canonical_collection: CanonicalCollection,
    lr1_parse_table: MultiActionTable,
}

impl GrammarAnalyzer {
    /// Analyze a grammar for the requested classes.
    ///
    /// FIRST/FOLLOW/SELECT are always computed; items, the canonical
    /// collection and the multi-action tables are computed when LR(0) or SLR
    /// analysis is requested.
    pub fn analyze(grammar: Grammar, classes: GrammarClasses) -> Result<Self, GrammarError> {
        let firsts = sets::firsts(&grammar);
        let follows = sets::follows(&grammar, &firsts);
        let selects = sets::selects(&grammar, &firsts, &follows);

        let mut ga = GrammarAnalyzer {
            grammar,
            firsts,
            follows,
            selects,
            lr0_items: Vec::new(),
            lr0_canonical_collection: CanonicalCollection::new(),
            lr0_parse_table: MultiActionTable::empty(),
            slr_parse_table: MultiActionTable::empty(),
            lr1_items: Vec::new(),
            lr1_canonical_collection: CanonicalCollection::new(),
            lr1_parse_table: MultiActionTable::empty(),
        };

        if classes.contains(GrammarClasses::LR0 | GrammarClasses::SLR) {
            ga.lr0_items = items::enumerate_items(&ga.grammar);
            ga.lr0_canonical_collection =
                collection::canonical_collection(&ga.grammar, &ga.lr0_items);
        }

        if classes.contains(GrammarClasses::LR0) {
            ga.lr0_parse_table = table::build_multi_table(
                &ga.grammar,
                &ga.lr0_items,
                &ga.lr0_canonical_collection,
                table::ReduceStrategy::AllTerminals,
            )?;
        }

        if classes.contains(GrammarClasses::SLR) {
            ga.slr_parse_table = table::build_multi_table(
                &ga.grammar,
                &ga.lr0_items,
                &ga.lr0_canonical_collection,
                table::ReduceStrategy::Follow(&ga.follows),
            )?;
        }

        Ok(ga)
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// FIRST set of a symbol.
    pub fn first(&self, symbol: SymbolId) -> &BTreeSet<SymbolId> {
        &self.firsts[symbol]
    }

    /// FOLLOW set of a symbol.
    pub fn follow(&self, symbol: SymbolId) -> &BTreeSet<SymbolId> {
        &self.follows[symbol]
    }

    /// SELECT set of a user production.
    pub fn select(&self, production: usize) -> &BTreeSet<SymbolId> {
        &self.selects[production]
    }

    pub fn lr0_items(&self) -> &[LRItem] {
        &self.lr0_items
    }

    pub fn lr0_canonical_collection(&self) -> &CanonicalCollection {
        &self.lr0_canonical_collection
    }

    pub fn lr0_parse_table(&self) -> &MultiActionTable {
        &self.lr0_parse_table
    }

    pub fn slr_parse_table(&self) -> &MultiActionTable {
        &self.slr_parse_table
    }

    /// Whether the grammar is LR(0): the LR(0) multi-action table exists and
    /// has no ambiguous cell.
    pub fn is_lr0(&self) -> bool {
        !self.lr0_parse_table.is_empty() && !table::has_conflict(&self.lr0_parse_table)
    }

    /// Whether the grammar is SLR(1): the SLR multi-action table exists and
    /// has no ambiguous cell.
    pub fn is_slr(&self) -> bool {
        !self.slr_parse_table.is_empty() && !table::has_conflict(&self.slr_parse_table)
    }

    /// LR(1) classification is not constructed yet; an unbuilt collection
    /// never claims membership.
    pub fn is_lr1(&self) -> bool {
        !self.lr1_items.is_empty()
            && !self.lr1_canonical_collection.is_empty()
            && !table::has_conflict(&self.lr1_parse_table)
    }

    pub fn lr0_conflicts(&self) -> Vec<Conflict> {
        table::conflicts(&self.grammar, &self.lr0_parse_table)
    }

    pub fn slr_conflicts(&self) -> Vec<Conflict> {
        table::conflicts(&self.grammar, &self.slr_parse_table)
    }

    /// Collapse the LR(0) multi-action table into a runtime table.
    pub fn create_lr0_parse_table(&self) -> Result<LRParseTable, ConflictError> {
        table::collapse(&self.grammar, &self.lr0_parse_table)
    }

    /// Collapse the SLR multi-action table into a runtime table.
    pub fn create_slr_parse_table(&self) -> Result<LRParseTable, ConflictError> {
        table::collapse(&self.grammar, &self.slr_parse_table)
    }
}
