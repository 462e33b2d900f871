//! Serialization of a single-action parse table as an offline-built artifact.
//!
//! The format is a plain text grid: a header line `num_states <TAB>
//! num_symbols`, then one line per state holding `num_symbols` tab-separated
//! cells.
//! Cells read `s<state>` for a shift, `r<production>` for a reduce,
//! `g<state>` for a goto, `acc` for accept and stay empty for error, so a
//! table written by [write_table] is read back by [read_table] without
//! re-running the analyzer.

use crate::analyzer::{LRAction, LRParseTable};
use crate::TableReadError;
use std::fmt::Write;

/// Write a table in the machine readable grid format.
pub fn write_table(w: &mut dyn Write, table: &LRParseTable) -> std::fmt::Result {
    writeln!(w, "{}\t{}", table.num_states(), table.num_symbols())?;
    for state in 0..table.num_states() {
        for symbol in 0..table.num_symbols() {
            if symbol > 0 {
                w.write_char('\t')?;
            }
            match table.action(state, symbol) {
                LRAction::Error => {}
                LRAction::Shift(next) => write!(w, "s{}", next)?,
                LRAction::Reduce(production) => write!(w, "r{}", production)?,
                LRAction::Goto(next) => write!(w, "g{}", next)?,
                LRAction::Accept => w.write_str("acc")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

fn parse_cell(cell: &str, line: usize) -> Result<LRAction, TableReadError> {
    if cell.is_empty() {
        return Ok(LRAction::Error);
    }
    if cell == "acc" {
        return Ok(LRAction::Accept);
    }
    if !cell.is_ascii() {
        return Err(TableReadError::new(
            line,
            format!("malformed action '{}'", cell),
        ));
    }
    let (kind, payload) = cell.split_at(1);
    let value: usize = payload
        .parse()
        .map_err(|_| TableReadError::new(line, format!("malformed action '{}'", cell)))?;
    match kind {
        "s" => Ok(LRAction::Shift(value)),
        "r" => Ok(LRAction::Reduce(value)),
        "g" => Ok(LRAction::Goto(value)),
        _ => Err(TableReadError::new(
            line,
            format!("unknown action kind '{}'", cell),
        )),
    }
}

/// Read a table previously written by [write_table].
pub fn read_table(text: &str) -> Result<LRParseTable, TableReadError> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| TableReadError::new(0, "missing header".to_string()))?;
    let mut parts = header.split('\t');
    let num_states: usize = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| TableReadError::new(0, "malformed state count".to_string()))?;
    let num_symbols: usize = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| TableReadError::new(0, "malformed symbol count".to_string()))?;

    let mut table = LRParseTable::new(num_states, num_symbols);
    for state in 0..num_states {
        let row = lines.next().ok_or_else(|| {
            TableReadError::new(state + 1, format!("missing row for state {}", state))
        })?;
        let cells: Vec<&str> = row.split('\t').collect();
        if cells.len() != num_symbols {
            return Err(TableReadError::new(
                state + 1,
                format!("expected {} cells, found {}", num_symbols, cells.len()),
            ));
        }
        for (symbol, cell) in cells.iter().enumerate() {
            let action = parse_cell(cell, state + 1)?;
            if action != LRAction::Error {
                table.set_action(state, symbol, action);
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grammar, GrammarAnalyzer, GrammarClasses, ProductionSet, SymbolImpl};

    struct ArithSymbols;

    impl SymbolImpl for ArithSymbols {
        fn num_symbols() -> usize {
            10
        }
        fn symbol_name(id: usize) -> &'static str {
            ["ε", "E", "T", "F", "+", "*", "(", ")", "id", "$"]
                .get(id)
                .copied()
                .unwrap_or("")
        }
        fn is_terminal(id: usize) -> bool {
            id >= 4
        }
    }

    fn arith_table() -> LRParseTable {
        let mut p = ProductionSet::new();
        p.add("E", &["E", "+", "T"]);
        p.add("E", &["T"]);
        p.add("T", &["T", "*", "F"]);
        p.add("T", &["F"]);
        p.add("F", &["(", "E", ")"]);
        p.add("F", &["id"]);
        let g = Grammar::build::<ArithSymbols>(&p, "E", "ε", "$").unwrap();
        let ga = GrammarAnalyzer::analyze(g, GrammarClasses::SLR).unwrap();
        ga.create_slr_parse_table().unwrap()
    }

    #[test]
    fn round_trip_preserves_the_table() {
        let table = arith_table();

        let mut text = String::new();
        write_table(&mut text, &table).unwrap();
        let read_back = read_table(&text).unwrap();

        assert_eq!(table, read_back);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(read_table("").is_err());
        assert!(read_table("not a header\n").is_err());
        assert!(read_table("2\t2\ns1\tacc\n").is_err()); // missing second row
        assert!(read_table("1\t2\ns1\tsX\n").is_err()); // malformed payload
        assert!(read_table("1\t2\nq1\t\n").is_err()); // unknown action kind
        assert!(read_table("1\t3\ns1\tacc\n").is_err()); // wrong cell count
    }

    #[test]
    fn format_is_line_per_state() {
        let table = arith_table();
        let mut text = String::new();
        write_table(&mut text, &table).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), table.num_states() + 1);
        assert_eq!(
            lines[0],
            format!("{}\t{}", table.num_states(), table.num_symbols())
        );
        assert!(lines[1..]
            .iter()
            .all(|l| l.split('\t').count() == table.num_symbols()));
    }
}
