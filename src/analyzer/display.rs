use super::{GrammarAnalyzer, LRAction, MultiActionTable};
use std::fmt::{Display, Formatter, Write};

const ITEM_DOT: &str = "·";

impl Display for LRAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LRAction::Error => Ok(()),
            LRAction::Shift(state) => write!(f, "s{}", state),
            LRAction::Reduce(production) => write!(f, "r{}", production),
            LRAction::Goto(state) => write!(f, "{}", state),
            LRAction::Accept => write!(f, "acc"),
        }
    }
}

impl GrammarAnalyzer {
    /// Render one item as `A -> α · β (next: i)`.
    pub fn render_item(&self, item_index: usize) -> String {
        let g = self.grammar();
        let item = &self.lr0_items()[item_index];
        let p = g.production(item.production);

        let mut s = format!("{} -> ", g.symbol_name(p.left));
        for (i, &r) in p.right.iter().enumerate() {
            if i == item.dot {
                s.push_str(ITEM_DOT);
                s.push(' ');
            }
            s.push_str(g.symbol_name(r));
            s.push(' ');
        }
        if item.dot == p.right.len() {
            s.push_str(ITEM_DOT);
        }
        match item.next_item {
            Some(next) => {
                let _ = write!(s, " (next: {})", next);
            }
            None => s.push_str(" (next: -)"),
        }
        s
    }

    pub fn dump_firsts(&self, w: &mut dyn Write) -> std::fmt::Result {
        let g = self.grammar();
        for &a in g.v_n() {
            if self.first(a).is_empty() {
                continue;
            }
            write!(w, "FIRST( {} ) = {{ ", g.symbol_name(a))?;
            for &x in self.first(a) {
                write!(w, "{} ", g.symbol_name(x))?;
            }
            writeln!(w, "}}")?;
        }
        Ok(())
    }

    pub fn dump_follows(&self, w: &mut dyn Write) -> std::fmt::Result {
        let g = self.grammar();
        for &a in g.v_n() {
            if self.follow(a).is_empty() {
                continue;
            }
            write!(w, "FOLLOW( {} ) = {{ ", g.symbol_name(a))?;
            for &x in self.follow(a) {
                write!(w, "{} ", g.symbol_name(x))?;
            }
            writeln!(w, "}}")?;
        }
        Ok(())
    }

    pub fn dump_selects(&self, w: &mut dyn Write) -> std::fmt::Result {
        let g = self.grammar();
        for pi in 0..g.num_productions() {
            write!(
                w,
                "SELECT( {} ) = {{ ",
                g.render_production(crate::ProductionRef::User(pi))
            )?;
            for &x in self.select(pi) {
                write!(w, "{} ", g.symbol_name(x))?;
            }
            writeln!(w, "}}")?;
        }
        Ok(())
    }

    pub fn dump_items(&self, w: &mut dyn Write) -> std::fmt::Result {
        for ii in 0..self.lr0_items().len() {
            writeln!(w, "item {}: {}", ii, self.render_item(ii))?;
        }
        Ok(())
    }

    pub fn dump_canonical_collection(&self, w: &mut dyn Write) -> std::fmt::Result {
        let c = self.lr0_canonical_collection();
        for i in 0..c.len() {
            writeln!(w, "I{}:", i)?;
            for &ii in c.state(i) {
                writeln!(w, "  {}", self.render_item(ii))?;
            }
        }
        for i in 0..c.len() {
            for &x in self.grammar().v() {
                if let Some(j) = c.goto(i, x) {
                    writeln!(
                        w,
                        "GOTO( I{}, {} ) = I{}",
                        i,
                        self.grammar().symbol_name(x),
                        j
                    )?;
                }
            }
        }
        Ok(())
    }

    pub fn dump_lr0_parse_table(&self, w: &mut dyn Write) -> std::fmt::Result {
        self.dump_parse_table(w, self.lr0_parse_table())
    }

    pub fn dump_slr_parse_table(&self, w: &mut dyn Write) -> std::fmt::Result {
        self.dump_parse_table(w, self.slr_parse_table())
    }

    fn dump_parse_table(&self, w: &mut dyn Write, table: &MultiActionTable) -> std::fmt::Result {
        let g = self.grammar();

        write!(w, "state/action/symbol\t")?;
        for &a in g.v_t() {
            write!(w, "{}\t", g.symbol_name(a))?;
        }
        for &a in g.v_n() {
            write!(w, "{}\t", g.symbol_name(a))?;
        }
        writeln!(w)?;

        for state in 0..table.num_states() {
            write!(w, "{}\t", state)?;
            for &a in g.v_t().iter().chain(g.v_n().iter()) {
                let mut first = true;
                for action in table.cell(state, a) {
                    if !first {
                        write!(w, "/")?;
                    }
                    write!(w, "{}", action)?;
                    first = false;
                }
                write!(w, "\t")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}
