use super::{Grammar, ProductionRef};
use std::fmt::{Display, Formatter};

impl Grammar {
    /// Render a production as `left -> right ...`.
    pub fn render_production(&self, index: ProductionRef) -> String {
        let p = self.production(index);
        let mut s = format!("{} ->", self.symbol_name(p.left));
        for &r in &p.right {
            s.push(' ');
            s.push_str(self.symbol_name(r));
        }
        s
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "G:")?;
        writeln!(
            f,
            "  S: {}({})",
            self.symbol_name(self.start()),
            self.start()
        )?;
        writeln!(
            f,
            "  ε: {}({})",
            self.symbol_name(self.epsilon()),
            self.epsilon()
        )?;
        writeln!(
            f,
            "  $: {}({})",
            self.symbol_name(self.end_marker()),
            self.end_marker()
        )?;

        write!(f, "  V_T:")?;
        for &s in self.v_t() {
            write!(f, " {}({})", self.symbol_name(s), s)?;
        }
        writeln!(f)?;

        write!(f, "  V_N:")?;
        for &s in self.v_n() {
            write!(f, " {}({})", self.symbol_name(s), s)?;
        }
        writeln!(f)?;

        writeln!(f, "  P:")?;
        for pi in 0..self.num_productions() {
            writeln!(
                f,
                "    {} ({})",
                self.render_production(ProductionRef::User(pi)),
                pi
            )?;
        }
        Ok(())
    }
}
