use crate::{Conflict, ConflictError, GrammarError, TableReadError};
use std::fmt::{Display, Formatter};

impl Display for GrammarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarError::UnknownSymbol(name) => {
                write!(f, "GrammarError: unknown symbol '{}'", name)
            }
            GrammarError::InvalidLeftSymbol(name) => {
                write!(
                    f,
                    "GrammarError: production left side '{}' is not a non-terminal",
                    name
                )
            }
            GrammarError::ProductionTooLong { left, len } => {
                write!(
                    f,
                    "GrammarError: production of '{}' has {} symbols, at most {} are supported",
                    left,
                    len,
                    crate::MAX_PRODUCTION_LEN
                )
            }
            GrammarError::MissingGoto { state, symbol } => {
                write!(
                    f,
                    "GrammarError: no GOTO from state {} on symbol '{}'",
                    state, symbol
                )
            }
        }
    }
}

impl std::error::Error for GrammarError {}

impl Display for Conflict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "state {}, symbol '{}': ", self.state, self.symbol_name)?;
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl ConflictError {
    pub fn new(conflicts: Vec<Conflict>) -> Self {
        Self { conflicts }
    }
}

impl Display for ConflictError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ConflictError: the grammar is ambiguous for this table")?;
        for conflict in &self.conflicts {
            writeln!(f, "  {}", conflict)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConflictError {}

impl TableReadError {
    pub fn new(line: usize, message: String) -> Self {
        Self { line, message }
    }
}

impl Display for TableReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TableReadError: line {}: {}", self.line + 1, self.message)
    }
}

impl std::error::Error for TableReadError {}
