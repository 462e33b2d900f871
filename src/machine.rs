//! A generic stack-based shift-reduce interpreter over a precomputed
//! [LRParseTable].

use crate::analyzer::{LRAction, LRParseTable};
use crate::grammar::{Grammar, SymbolId};
use crate::util::Log;
use once_cell::unsync::OnceCell;

/// Callback surface of the [LRStateMachine].
///
/// Every action of the machine is reported through one of these methods; a
/// zero return continues the machine, a non-zero return aborts
/// [LRStateMachine::step] with that status.
/// All methods are required so that every implementation states its behavior
/// explicitly.
///
/// `on_errored` receives the state and the offending symbol; returning zero
/// resumes with the next input, any further recovery is up to the caller.
pub trait ILRParseCallback {
    fn on_shifted(&mut self, state: usize, symbol: SymbolId) -> i32;
    fn on_went_to(&mut self, state: usize, symbol: SymbolId) -> i32;
    fn on_reduced(&mut self, production: usize, n_symbols: usize) -> i32;
    fn on_accepted(&mut self) -> i32;
    fn on_errored(&mut self, state: usize, symbol: SymbolId) -> i32;
}

/// The LR parsing state machine.
///
/// The machine holds two parallel stacks of states and symbols; the top of
/// the state stack (or state 0 when empty) is the current LR state.
/// One [step](LRStateMachine::step) consumes one symbol: a reduce pops the
/// production's right side from both stacks and re-enters with the reduced
/// non-terminal, so a single input token may drive several reductions before
/// the next shift.
/// A shift is the only outcome that consumes the input symbol; callers track
/// shifts through the callback and re-feed the symbol after a reduce chain.
///
/// Multiple machines may share one immutable table; each machine owns its
/// stacks exclusively.
pub struct LRStateMachine {
    grammar: Grammar,
    parse_table: LRParseTable,
    state_stack: Vec<usize>,
    symbol_stack: Vec<SymbolId>,
    log: OnceCell<Log<&'static str>>,
}

impl LRStateMachine {
    pub fn new(grammar: Grammar, parse_table: LRParseTable) -> Self {
        Self {
            grammar,
            parse_table,
            state_stack: Vec::new(),
            symbol_stack: Vec::new(),
            log: OnceCell::new(),
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn state_stack(&self) -> &[usize] {
        &self.state_stack
    }

    pub fn symbol_stack(&self) -> &[SymbolId] {
        &self.symbol_stack
    }

    /// Set a log label to debug the machine actions.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }

    /// Empty both stacks.
    pub fn reset(&mut self) {
        self.state_stack.clear();
        self.symbol_stack.clear();
    }

    /// Consume one symbol and dispatch the table action for it.
    ///
    /// Returns `0` to continue or the first non-zero status produced by a
    /// callback.
    pub fn step(&mut self, symbol: SymbolId, callback: &mut dyn ILRParseCallback) -> i32 {
        let state = self.state_stack.last().copied().unwrap_or(0);
        let action = self.parse_table.action(state, symbol);

        #[cfg(debug_assertions)]
        if let Some(log) = self.log.get() {
            if log.order() >= Log::Verbose(()).order() {
                println!(
                    "[{}; LRStateMachine]: state {} symbol {}({}) -> {:?}",
                    log,
                    state,
                    self.grammar.symbol_name(symbol),
                    symbol,
                    action
                );
            }
        }

        match action {
            LRAction::Error => callback.on_errored(state, symbol),
            LRAction::Shift(next_state) => {
                self.state_stack.push(next_state);
                self.symbol_stack.push(symbol);
                callback.on_shifted(next_state, symbol)
            }
            LRAction::Reduce(pi) => {
                let p = self.grammar.user_production(pi);
                let left = p.left;
                // an empty production materialized nothing on the stacks
                let n_symbols = if self.grammar.is_empty_production(pi) {
                    0
                } else {
                    p.right.len()
                };
                for _ in 0..n_symbols {
                    self.state_stack.pop();
                    self.symbol_stack.pop();
                }
                let status = callback.on_reduced(pi, n_symbols);
                if status != 0 {
                    status
                } else {
                    self.step(left, callback)
                }
            }
            LRAction::Goto(next_state) => {
                self.symbol_stack.push(symbol);
                self.state_stack.push(next_state);
                callback.on_went_to(next_state, symbol)
            }
            LRAction::Accept => callback.on_accepted(),
        }
    }
}
