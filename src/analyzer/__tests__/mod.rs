use super::collection::{closure, goto_set};
use crate::{
    Grammar, GrammarAnalyzer, GrammarClasses, LRAction, MultiActionTable, ProductionSet, SymbolImpl,
};
use std::collections::BTreeSet;

struct AbSymbols;

impl SymbolImpl for AbSymbols {
    fn num_symbols() -> usize {
        6
    }
    fn symbol_name(id: usize) -> &'static str {
        ["ε", "S", "B", "a", "b", "$"].get(id).copied().unwrap_or("")
    }
    fn is_terminal(id: usize) -> bool {
        id >= 3
    }
}

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

struct AssignSymbols;

impl SymbolImpl for AssignSymbols {
    fn num_symbols() -> usize {
        9
    }
    fn symbol_name(id: usize) -> &'static str {
        ["ε", "S", "L", "R", "*", "+", "=", "id", "$"]
            .get(id)
            .copied()
            .unwrap_or("")
    }
    fn is_terminal(id: usize) -> bool {
        id >= 4
    }
}

struct NullableSymbols;

impl SymbolImpl for NullableSymbols {
    fn num_symbols() -> usize {
        6
    }
    fn symbol_name(id: usize) -> &'static str {
        ["ε", "S", "A", "x", "y", "$"].get(id).copied().unwrap_or("")
    }
    fn is_terminal(id: usize) -> bool {
        id >= 3
    }
}

fn ab_grammar() -> Grammar {
    let mut p = ProductionSet::new();
    p.add("S", &["B", "B"]);
    p.add("B", &["a", "B"]);
    p.add("B", &["b"]);
    Grammar::build::<AbSymbols>(&p, "S", "ε", "$").unwrap()
}

fn arith_grammar() -> Grammar {
    let mut p = ProductionSet::new();
    p.add("E", &["E", "+", "T"]);
    p.add("E", &["T"]);
    p.add("T", &["T", "*", "F"]);
    p.add("T", &["F"]);
    p.add("F", &["(", "E", ")"]);
    p.add("F", &["id"]);
    Grammar::build::<ArithSymbols>(&p, "E", "ε", "$").unwrap()
}

fn assign_grammar() -> Grammar {
    let mut p = ProductionSet::new();
    p.add("S", &["L", "=", "R"]);
    p.add("S", &["R"]);
    p.add("L", &["*", "R"]);
    p.add("L", &["id"]);
    p.add("R", &["L"]);
    Grammar::build::<AssignSymbols>(&p, "S", "ε", "$").unwrap()
}

fn set(ids: &[usize]) -> BTreeSet<usize> {
    ids.iter().copied().collect()
}

#[test]
fn arith_first_and_follow_sets() {
    let ga = GrammarAnalyzer::analyze(arith_grammar(), GrammarClasses::NONE).unwrap();

    // ids: E=1 T=2 F=3 +=4 *=5 (=6 )=7 id=8 $=9
    assert_eq!(ga.first(1), &set(&[6, 8]));
    assert_eq!(ga.first(2), &set(&[6, 8]));
    assert_eq!(ga.first(3), &set(&[6, 8]));

    assert_eq!(ga.follow(1), &set(&[4, 7, 9]));
    assert_eq!(ga.follow(2), &set(&[4, 5, 7, 9]));
    assert_eq!(ga.follow(3), &set(&[4, 5, 7, 9]));

    assert_eq!(ga.select(0), &set(&[6, 8]));
    assert_eq!(ga.select(5), &set(&[8]));
}

#[test]
fn follow_of_start_contains_end_marker() {
    for ga in [
        GrammarAnalyzer::analyze(ab_grammar(), GrammarClasses::NONE).unwrap(),
        GrammarAnalyzer::analyze(arith_grammar(), GrammarClasses::NONE).unwrap(),
        GrammarAnalyzer::analyze(assign_grammar(), GrammarClasses::NONE).unwrap(),
    ] {
        let g = ga.grammar();
        assert!(ga.follow(g.start()).contains(&g.end_marker()));
    }
}

#[test]
fn select_is_bounded_and_epsilon_free() {
    let mut p = ProductionSet::new();
    p.add("S", &["A", "x"]);
    p.add("A", &["y"]);
    p.add("A", &["ε"]);
    let g = Grammar::build::<NullableSymbols>(&p, "S", "ε", "$").unwrap();
    let ga = GrammarAnalyzer::analyze(g, GrammarClasses::NONE).unwrap();
    let g = ga.grammar();

    // ε ∈ FIRST(A) through the empty production
    assert!(ga.first(2).contains(&g.epsilon()));
    // SELECT(A → ε) = FOLLOW(A) = {x}
    assert_eq!(ga.select(2), &set(&[3]));

    for pi in 0..g.num_productions() {
        let select = ga.select(pi);
        assert!(!select.contains(&g.epsilon()));
        let p = g.user_production(pi);
        let bound: BTreeSet<usize> = ga.first(p.left).union(ga.follow(p.left)).copied().collect();
        assert!(select.iter().all(|s| bound.contains(s)));
    }
}

#[test]
fn ab_item_enumeration() {
    let ga = GrammarAnalyzer::analyze(ab_grammar(), GrammarClasses::LR0).unwrap();
    let items = ga.lr0_items();

    // S' → S contributes 2 items, then 3 + 3 + 2 user items
    assert_eq!(items.len(), 10);
    assert!(items[0].at_start());
    assert_eq!(items[0].next_item, Some(1));
    assert!(items[1].is_reduce());
    assert_eq!(items[1].lookahead, None);
    assert_eq!(ga.render_item(0), "S' -> · S  (next: 1)");

    // every non-reduce item links to the dot advanced by one
    for (ii, item) in items.iter().enumerate() {
        match item.next_item {
            Some(next) => {
                assert_eq!(items[next].production, item.production);
                assert_eq!(items[next].dot, item.dot + 1);
                assert_eq!(next, ii + 1);
            }
            None => assert_eq!(item.next_symbol(ga.grammar()), None),
        }
    }
}

#[test]
fn state_zero_is_closure_of_initial_item() {
    let ga = GrammarAnalyzer::analyze(ab_grammar(), GrammarClasses::LR0).unwrap();
    let c = ga.lr0_canonical_collection();

    let mut initial = BTreeSet::new();
    initial.insert(0);
    let expected = closure(ga.grammar(), ga.lr0_items(), initial);
    assert_eq!(c.state(0), &expected);
    // kernel items of S → •BB, B → •aB, B → •b join the augmented item
    assert_eq!(c.state(0), &set(&[0, 2, 5, 8]));
}

#[test]
fn goto_transitions_match_goto_sets() {
    let ga = GrammarAnalyzer::analyze(arith_grammar(), GrammarClasses::LR0).unwrap();
    let g = ga.grammar();
    let c = ga.lr0_canonical_collection();

    for i in 0..c.len() {
        for &x in g.v() {
            let j_set = goto_set(g, ga.lr0_items(), c.state(i), x);
            match c.goto(i, x) {
                Some(j) => {
                    assert_eq!(c.state(j), &j_set);
                    assert_eq!(c.index_of(&j_set), Some(j));
                }
                None => assert!(j_set.is_empty()),
            }
        }
    }
}

#[test]
fn ab_grammar_is_lr0_and_slr() {
    let ga = GrammarAnalyzer::analyze(ab_grammar(), GrammarClasses::ALL).unwrap();

    assert!(ga.is_lr0());
    assert!(ga.is_slr());
    assert!(ga.lr0_conflicts().is_empty());
    assert!(ga.slr_conflicts().is_empty());

    let lr0 = ga.create_lr0_parse_table().unwrap();
    let slr = ga.create_slr_parse_table().unwrap();
    assert_eq!(lr0.num_states(), slr.num_states());
    assert_eq!(lr0.num_symbols(), ga.grammar().num_symbol_ids());
}

#[test]
fn arith_grammar_is_slr_but_not_lr0() {
    let ga = GrammarAnalyzer::analyze(arith_grammar(), GrammarClasses::LR0 | GrammarClasses::SLR)
        .unwrap();

    assert!(!ga.is_lr0());
    assert!(ga.is_slr());

    let conflicts = ga.lr0_conflicts();
    assert!(!conflicts.is_empty());
    // every LR(0) conflict of this grammar is a shift/reduce pair on a terminal
    for conflict in &conflicts {
        assert!(ga.grammar().is_terminal(conflict.symbol));
        assert!(conflict.actions.len() > 1);
    }

    let err = ga.create_lr0_parse_table().unwrap_err();
    assert_eq!(err.conflicts, conflicts);
    assert!(ga.create_slr_parse_table().is_ok());
}

#[test]
fn assign_grammar_is_neither_lr0_nor_slr() {
    let ga = GrammarAnalyzer::analyze(assign_grammar(), GrammarClasses::ALL).unwrap();

    assert!(!ga.is_lr0());
    assert!(!ga.is_slr());
    assert!(!ga.is_lr1());

    // the classic S → L•=R / R → L• conflict on '='
    let conflicts = ga.slr_conflicts();
    assert!(conflicts
        .iter()
        .any(|c| c.symbol_name == "=" && c.actions.iter().any(|a| matches!(a, LRAction::Reduce(4)))));
}

#[test]
fn collapse_round_trip_is_stable() {
    let ga = GrammarAnalyzer::analyze(arith_grammar(), GrammarClasses::SLR).unwrap();
    let single = ga.create_slr_parse_table().unwrap();

    // lift the collapsed table back into a multi-action table and collapse again
    let mut lifted = MultiActionTable::new(single.num_states(), single.num_symbols());
    for state in 0..single.num_states() {
        for symbol in 0..single.num_symbols() {
            match single.action(state, symbol) {
                LRAction::Error => {}
                action => {
                    lifted.cell_mut(state, symbol).insert(action);
                }
            }
        }
    }
    let again = super::table::collapse(ga.grammar(), &lifted).unwrap();
    assert_eq!(single, again);
}

#[test]
fn dump_renders_every_state() {
    let ga = GrammarAnalyzer::analyze(ab_grammar(), GrammarClasses::ALL).unwrap();

    let mut out = String::new();
    ga.dump_canonical_collection(&mut out).unwrap();
    for i in 0..ga.lr0_canonical_collection().len() {
        assert!(out.contains(&format!("I{}:", i)));
    }

    let mut table = String::new();
    ga.dump_slr_parse_table(&mut table).unwrap();
    assert!(table.starts_with("state/action/symbol"));
    assert!(table.contains("acc"));
}
