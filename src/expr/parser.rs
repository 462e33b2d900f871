use super::{expr_grammar, expr_parse_table, ExprSymbol};
use crate::grammar::{SymbolId, SymbolImpl};
use crate::lexer::{Token, TokenType};
use crate::machine::{ILRParseCallback, LRStateMachine};
use crate::tree::ParseTree;
use crate::GrammarError;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
/// An error returned when the expression parser rejects the token stream.
pub struct ExprParseError {
    pub state: usize,
    pub symbol: SymbolId,
    pub token: Option<Token>,
}

impl Display for ExprParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.token {
            Some(token) => write!(
                f,
                "ExprParseError: unexpected token {:?} in state {}",
                token.ty, self.state
            ),
            None => write!(
                f,
                "ExprParseError: unexpected '{}' in state {}",
                ExprSymbol::symbol_name(self.symbol),
                self.state
            ),
        }
    }
}

impl std::error::Error for ExprParseError {}

struct TreeBuilder {
    // left symbol and its name per user production
    productions: Vec<(SymbolId, &'static str)>,
    current: Option<Token>,
    stack: Vec<ParseTree<Token>>,
    shifted: bool,
    accepted: bool,
    error: Option<(usize, SymbolId)>,
}

impl TreeBuilder {
    fn reset(&mut self) {
        self.current = None;
        self.stack.clear();
        self.shifted = false;
        self.accepted = false;
        self.error = None;
    }
}

impl ILRParseCallback for TreeBuilder {
    fn on_shifted(&mut self, _state: usize, symbol: SymbolId) -> i32 {
        self.shifted = true;
        self.stack.push(ParseTree::leaf(
            symbol,
            ExprSymbol::symbol_name(symbol),
            self.current.take(),
        ));
        0
    }

    fn on_went_to(&mut self, _state: usize, _symbol: SymbolId) -> i32 {
        0
    }

    fn on_reduced(&mut self, production: usize, n_symbols: usize) -> i32 {
        let (left, name) = self.productions[production];
        let at = self.stack.len().saturating_sub(n_symbols);
        let children = self.stack.split_off(at);
        self.stack.push(ParseTree::node(left, name, children));
        0
    }

    fn on_accepted(&mut self) -> i32 {
        self.accepted = true;
        0
    }

    fn on_errored(&mut self, state: usize, symbol: SymbolId) -> i32 {
        self.error = Some((state, symbol));
        1
    }
}

/// A parser for the bundled expression grammar.
///
/// Wires the [LRStateMachine] to the precomputed SLR table and folds the
/// shift/reduce events into a [ParseTree] whose leaves carry the shifted
/// tokens.
pub struct ExprParser {
    machine: LRStateMachine,
    builder: TreeBuilder,
}

impl ExprParser {
    pub fn new() -> Result<Self, GrammarError> {
        let grammar = expr_grammar()?;
        let productions = (0..grammar.num_productions())
            .map(|pi| {
                let left = grammar.user_production(pi).left;
                (left, ExprSymbol::symbol_name(left))
            })
            .collect();
        let machine = LRStateMachine::new(grammar, expr_parse_table().clone());
        Ok(Self {
            machine,
            builder: TreeBuilder {
                productions,
                current: None,
                stack: Vec::new(),
                shifted: false,
                accepted: false,
                error: None,
            },
        })
    }

    /// Parse one expression from a token slice.
    ///
    /// Tokens must be expression terminals; the stream may end with an
    /// [TokenType::Eos] token, anything after it is ignored.
    pub fn parse(&mut self, tokens: &[Token]) -> Result<ParseTree<Token>, ExprParseError> {
        self.machine.reset();
        self.builder.reset();

        for token in tokens {
            if token.ty == TokenType::Eos {
                break;
            }
            if !token.ty.is_expr_terminal() {
                return Err(ExprParseError {
                    state: self.machine.state_stack().last().copied().unwrap_or(0),
                    symbol: token.ty.symbol(),
                    token: Some(token.clone()),
                });
            }
            self.builder.current = Some(token.clone());
            if self.feed(token.ty.symbol()) != 0 {
                return Err(self.take_error(Some(token.clone())));
            }
        }

        self.builder.current = None;
        if self.feed_end() != 0 || !self.builder.accepted {
            return Err(self.take_error(None));
        }

        match self.builder.stack.pop() {
            Some(tree) if self.builder.stack.is_empty() => Ok(tree),
            _ => Err(self.take_error(None)),
        }
    }

    /// Step the machine until the symbol is actually shifted; a reduce chain
    /// leaves the input symbol unconsumed.
    fn feed(&mut self, symbol: SymbolId) -> i32 {
        loop {
            self.builder.shifted = false;
            let status = self.machine.step(symbol, &mut self.builder);
            if status != 0 || self.builder.shifted {
                return status;
            }
        }
    }

    /// Feed the end marker until the final reductions drain into accept.
    fn feed_end(&mut self) -> i32 {
        let end = ExprSymbol::End as SymbolId;
        loop {
            let status = self.machine.step(end, &mut self.builder);
            if status != 0 || self.builder.accepted {
                return status;
            }
        }
    }

    fn take_error(&mut self, token: Option<Token>) -> ExprParseError {
        let (state, symbol) = self
            .builder
            .error
            .take()
            .unwrap_or((0, ExprSymbol::End as SymbolId));
        ExprParseError {
            state,
            symbol,
            token,
        }
    }
}
