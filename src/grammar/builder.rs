use super::{Grammar, Production, ProductionSet, SymbolId, SymbolImpl, SymbolInfo};
use crate::{GrammarError, MAX_PRODUCTION_LEN};

fn resolve<S: SymbolImpl>(name: &str) -> Result<SymbolId, GrammarError> {
    if name.is_empty() {
        return Err(GrammarError::UnknownSymbol(name.to_string()));
    }
    S::id_of(name).ok_or_else(|| GrammarError::UnknownSymbol(name.to_string()))
}

impl Grammar {
    /// Build a grammar from a production list over the symbol enumeration `S`.
    ///
    /// The symbol-info table is sized to `S::num_symbols() + 1`; the extra slot
    /// holds the augmented start symbol `S'`, a fresh non-terminal heading the
    /// production `S' → start`.
    /// Symbols whose name is empty are placeholders and stay out of the
    /// alphabet.
    ///
    /// Fails fast on unknown names, on a production left side that is not a
    /// non-terminal and on right sides longer than [MAX_PRODUCTION_LEN].
    pub fn build<S: SymbolImpl>(
        productions: &ProductionSet,
        start: &str,
        epsilon: &str,
        end_marker: &str,
    ) -> Result<Grammar, GrammarError> {
        let num_symbols = S::num_symbols();

        let start = resolve::<S>(start)?;
        let epsilon = resolve::<S>(epsilon)?;
        let end_marker = resolve::<S>(end_marker)?;

        let mut symbol_infos: Vec<SymbolInfo> = (0..num_symbols)
            .map(|id| {
                let name = S::symbol_name(id);
                SymbolInfo {
                    id,
                    name,
                    is_terminal: S::is_terminal(id),
                    valid: !name.is_empty(),
                }
            })
            .collect();

        let mut v = Vec::new();
        let mut v_t = Vec::new();
        let mut v_n = Vec::new();
        for info in &symbol_infos {
            if !info.valid {
                continue;
            }
            v.push(info.id);
            if info.id == epsilon {
                // ε belongs to V only
            } else if info.is_terminal {
                v_t.push(info.id);
            } else {
                v_n.push(info.id);
            }
        }

        let augmented_start = num_symbols;
        symbol_infos.push(SymbolInfo {
            id: augmented_start,
            name: "S'",
            is_terminal: false,
            valid: true,
        });

        let mut resolved = Vec::with_capacity(productions.len());
        for (left, right) in productions.rules() {
            let left_id = resolve::<S>(left)?;
            if S::is_terminal(left_id) || left_id == epsilon {
                return Err(GrammarError::InvalidLeftSymbol(left.clone()));
            }
            if right.len() > MAX_PRODUCTION_LEN {
                return Err(GrammarError::ProductionTooLong {
                    left: left.clone(),
                    len: right.len(),
                });
            }
            let right_ids = right
                .iter()
                .map(|name| resolve::<S>(name))
                .collect::<Result<Vec<_>, _>>()?;
            resolved.push(Production {
                left: left_id,
                right: right_ids,
            });
        }

        let mut productions_of = vec![Vec::new(); num_symbols + 1];
        for (pi, p) in resolved.iter().enumerate() {
            productions_of[p.left].push(pi);
        }

        let augmented = Production {
            left: augmented_start,
            right: vec![start],
        };

        Ok(Grammar {
            symbol_infos,
            v,
            v_t,
            v_n,
            productions: resolved,
            augmented,
            productions_of,
            start,
            augmented_start,
            epsilon,
            end_marker,
        })
    }
}
