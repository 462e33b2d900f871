//! Multi-action parse table construction, conflict detection and the collapse
//! into the runtime single-action table.

use super::{CanonicalCollection, LRAction, LRItem, LRParseTable, MultiActionTable};
use crate::grammar::{Grammar, ProductionRef, SymbolId};
use crate::{Conflict, ConflictError, GrammarError};
use std::collections::BTreeSet;

/// How reduce actions spread over the terminal columns.
pub(crate) enum ReduceStrategy<'a> {
    /// LR(0): a reduce item fills every terminal column.
    AllTerminals,
    /// SLR(1): a reduce item fills the FOLLOW set of its left symbol.
    Follow(&'a [BTreeSet<SymbolId>]),
}

pub(crate) fn build_multi_table(
    grammar: &Grammar,
    items: &[LRItem],
    collection: &CanonicalCollection,
    reduce: ReduceStrategy,
) -> Result<MultiActionTable, GrammarError> {
    let mut table = MultiActionTable::new(collection.len(), grammar.num_symbol_ids());

    for state in 0..collection.len() {
        for &ii in collection.state(state) {
            let item = &items[ii];
            if item.is_reduce() {
                if item.left_symbol(grammar) == grammar.augmented_start() {
                    table
                        .cell_mut(state, grammar.end_marker())
                        .insert(LRAction::Accept);
                } else if let ProductionRef::User(pi) = item.production {
                    match &reduce {
                        ReduceStrategy::AllTerminals => {
                            for &a in grammar.v_t() {
                                table.cell_mut(state, a).insert(LRAction::Reduce(pi));
                            }
                        }
                        ReduceStrategy::Follow(follows) => {
                            for &a in &follows[item.left_symbol(grammar)] {
                                table.cell_mut(state, a).insert(LRAction::Reduce(pi));
                            }
                        }
                    }
                }
            } else if let Some(x) = item.next_symbol(grammar) {
                let j = collection
                    .goto(state, x)
                    .ok_or_else(|| GrammarError::MissingGoto {
                        state,
                        symbol: grammar.symbol_name(x).to_string(),
                    })?;
                if grammar.is_terminal(x) {
                    table.cell_mut(state, x).insert(LRAction::Shift(j));
                } else if grammar.is_non_terminal(x) {
                    table.cell_mut(state, x).insert(LRAction::Goto(j));
                } else {
                    return Err(GrammarError::UnknownSymbol(
                        grammar.symbol_name(x).to_string(),
                    ));
                }
            }
        }
    }

    Ok(table)
}

pub(crate) fn has_conflict(table: &MultiActionTable) -> bool {
    for state in 0..table.num_states() {
        for symbol in 0..table.num_symbols() {
            if table.cell(state, symbol).len() > 1 {
                return true;
            }
        }
    }
    false
}

pub(crate) fn conflicts(grammar: &Grammar, table: &MultiActionTable) -> Vec<Conflict> {
    let mut found = Vec::new();
    for state in 0..table.num_states() {
        for symbol in 0..table.num_symbols() {
            let actions = table.cell(state, symbol);
            if actions.len() > 1 {
                found.push(Conflict {
                    state,
                    symbol,
                    symbol_name: grammar.symbol_name(symbol).to_string(),
                    actions: actions.iter().copied().collect(),
                });
            }
        }
    }
    found
}

/// Collapse every singleton cell into its action and every empty cell into
/// [LRAction::Error]; any ambiguous cell fails with the full conflict report.
pub(crate) fn collapse(
    grammar: &Grammar,
    table: &MultiActionTable,
) -> Result<LRParseTable, ConflictError> {
    let ambiguous = conflicts(grammar, table);
    if !ambiguous.is_empty() {
        return Err(ConflictError::new(ambiguous));
    }

    let mut collapsed = LRParseTable::new(table.num_states(), table.num_symbols());
    for state in 0..table.num_states() {
        for symbol in 0..table.num_symbols() {
            if let Some(&action) = table.cell(state, symbol).iter().next() {
                collapsed.set_action(state, symbol, action);
            }
        }
    }
    Ok(collapsed)
}
