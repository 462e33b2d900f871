//! Fixed-point computation of the FIRST, FOLLOW and SELECT sets.

use crate::grammar::{Grammar, SymbolId};
use std::collections::BTreeSet;

/// FIRST of a symbol sequence α given the per-symbol FIRST sets computed so
/// far.
///
/// An empty α and the sequence `[ε]` both yield `{ε}`; otherwise symbols are
/// scanned left to right, terminals end the scan and non-terminals contribute
/// their FIRST set without ε, continuing only while ε is derivable.
pub(crate) fn first_of(
    grammar: &Grammar,
    firsts: &[BTreeSet<SymbolId>],
    alpha: &[SymbolId],
) -> BTreeSet<SymbolId> {
    let mut set = BTreeSet::new();
    let epsilon = grammar.epsilon();

    if alpha.is_empty() || (alpha.len() == 1 && alpha[0] == epsilon) {
        set.insert(epsilon);
        return set;
    }

    let mut nullable_count = 0;
    for &x in alpha {
        if grammar.is_terminal(x) {
            set.insert(x);
            break;
        }
        let first_x = &firsts[x];
        if first_x.is_empty() {
            break;
        }
        set.extend(first_x.iter().copied().filter(|&s| s != epsilon));
        if first_x.contains(&epsilon) {
            nullable_count += 1;
            continue;
        }
        break;
    }

    if nullable_count == alpha.len() {
        set.insert(epsilon);
    }

    set
}

pub(crate) fn firsts(grammar: &Grammar) -> Vec<BTreeSet<SymbolId>> {
    let mut db = vec![BTreeSet::new(); grammar.num_symbol_ids()];

    // FIRST(a) = {a} for terminals
    for &a in grammar.v_t() {
        db[a].insert(a);
    }

    // seed ε for every non-terminal heading an empty production
    for &a in grammar.v_n() {
        for &pi in grammar.productions_of(a) {
            if grammar.is_empty_production(pi) {
                db[a].insert(grammar.epsilon());
            }
        }
    }

    loop {
        let mut grew = false;
        for &a in grammar.v_n() {
            for &pi in grammar.productions_of(a) {
                let fs = first_of(grammar, &db, &grammar.user_production(pi).right);
                for f in fs {
                    grew |= db[a].insert(f);
                }
            }
        }
        if !grew {
            break;
        }
    }

    db
}

pub(crate) fn follows(
    grammar: &Grammar,
    firsts: &[BTreeSet<SymbolId>],
) -> Vec<BTreeSet<SymbolId>> {
    let mut db = vec![BTreeSet::new(); grammar.num_symbol_ids()];
    let epsilon = grammar.epsilon();

    db[grammar.start()].insert(grammar.end_marker());

    loop {
        let mut grew = false;
        for pi in 0..grammar.num_productions() {
            let p = grammar.user_production(pi);
            let a = p.left;
            for (k, &b) in p.right.iter().enumerate() {
                if !grammar.is_non_terminal(b) || b == epsilon {
                    continue;
                }

                // for A → α B β, FIRST(β) \ {ε} ⊆ FOLLOW(B)
                let first_beta = first_of(grammar, firsts, &p.right[k + 1..]);
                let beta_nullable = first_beta.contains(&epsilon);
                for f in first_beta {
                    if f != epsilon {
                        grew |= db[b].insert(f);
                    }
                }

                // if ε ∈ FIRST(β), FOLLOW(A) ⊆ FOLLOW(B)
                if beta_nullable {
                    let follow_a: Vec<SymbolId> = db[a].iter().copied().collect();
                    for f in follow_a {
                        grew |= db[b].insert(f);
                    }
                }
            }
        }
        if !grew {
            break;
        }
    }

    db
}

pub(crate) fn selects(
    grammar: &Grammar,
    firsts: &[BTreeSet<SymbolId>],
    follows: &[BTreeSet<SymbolId>],
) -> Vec<BTreeSet<SymbolId>> {
    let epsilon = grammar.epsilon();
    (0..grammar.num_productions())
        .map(|pi| {
            let p = grammar.user_production(pi);
            let first_alpha = first_of(grammar, firsts, &p.right);
            if !first_alpha.contains(&epsilon) {
                first_alpha
            } else {
                let mut select: BTreeSet<SymbolId> = first_alpha
                    .into_iter()
                    .filter(|&s| s != epsilon)
                    .collect();
                select.extend(follows[p.left].iter().copied());
                select
            }
        })
        .collect()
}
