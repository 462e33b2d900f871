use crate::{Grammar, GrammarError, ProductionRef, ProductionSet, SymbolImpl};

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

struct GapSymbols;

// Holds an invalid placeholder slot at id 3.
impl SymbolImpl for GapSymbols {
    fn num_symbols() -> usize {
        7
    }
    fn symbol_name(id: usize) -> &'static str {
        ["ε", "S", "A", "", "x", "y", "$"]
            .get(id)
            .copied()
            .unwrap_or("")
    }
    fn is_terminal(id: usize) -> bool {
        id >= 4
    }
}

fn ab_productions() -> ProductionSet {
    let mut p = ProductionSet::new();
    p.add("S", &["B", "B"]);
    p.add("B", &["a", "B"]);
    p.add("B", &["b"]);
    p
}

#[test]
fn symbol_partition() {
    let g = Grammar::build::<AbSymbols>(&ab_productions(), "S", "ε", "$").unwrap();

    assert_eq!(g.num_symbol_ids(), 7);
    assert_eq!(g.v(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(g.v_t(), &[3, 4, 5]);
    assert_eq!(g.v_n(), &[1, 2]);

    // ε is valid but neither terminal nor non-terminal list member
    assert!(g.is_valid_symbol(g.epsilon()));
    assert!(!g.v_t().contains(&g.epsilon()));
    assert!(!g.v_n().contains(&g.epsilon()));

    assert!(g.is_terminal(g.end_marker()));
    assert_eq!(g.symbol_name(3), "a");
    assert_eq!(g.symbol_name(100), "");
}

#[test]
fn augmented_start_is_appended() {
    let g = Grammar::build::<AbSymbols>(&ab_productions(), "S", "ε", "$").unwrap();

    assert_eq!(g.augmented_start(), AbSymbols::num_symbols());
    assert_eq!(g.symbol_name(g.augmented_start()), "S'");
    assert!(g.is_non_terminal(g.augmented_start()));
    assert!(!g.v().contains(&g.augmented_start()));

    let augmented = g.augmented_production();
    assert_eq!(augmented.left, g.augmented_start());
    assert_eq!(augmented.right, vec![g.start()]);
    assert_eq!(
        g.production(ProductionRef::Augmented).left,
        g.augmented_start()
    );
}

#[test]
fn productions_are_indexed_by_left() {
    let g = Grammar::build::<AbSymbols>(&ab_productions(), "S", "ε", "$").unwrap();

    assert_eq!(g.num_productions(), 3);
    assert_eq!(g.productions_of(1), &[0]);
    assert_eq!(g.productions_of(2), &[1, 2]);
    assert_eq!(g.productions_of(3), &[] as &[usize]);

    assert_eq!(g.render_production(ProductionRef::User(1)), "B -> a B");
    assert_eq!(g.render_production(ProductionRef::Augmented), "S' -> S");
}

#[test]
fn invalid_placeholder_is_excluded() {
    let mut p = ProductionSet::new();
    p.add("S", &["A", "x"]);
    p.add("A", &["y"]);
    let g = Grammar::build::<GapSymbols>(&p, "S", "ε", "$").unwrap();

    assert!(!g.is_valid_symbol(3));
    assert!(!g.v().contains(&3));
    assert_eq!(g.v_t(), &[4, 5, 6]);
}

#[test]
fn empty_production_is_single_epsilon() {
    let mut p = ProductionSet::new();
    p.add("S", &["A", "x"]);
    p.add("A", &["y"]);
    p.add("A", &["ε"]);
    let g = Grammar::build::<GapSymbols>(&p, "S", "ε", "$").unwrap();

    assert!(!g.is_empty_production(1));
    assert!(g.is_empty_production(2));
}

#[test]
fn unknown_symbol_fails() {
    let mut p = ab_productions();
    p.add("B", &["c"]);
    let err = Grammar::build::<AbSymbols>(&p, "S", "ε", "$").unwrap_err();
    assert!(matches!(err, GrammarError::UnknownSymbol(name) if name == "c"));

    let err = Grammar::build::<AbSymbols>(&ab_productions(), "Q", "ε", "$").unwrap_err();
    assert!(matches!(err, GrammarError::UnknownSymbol(_)));
}

#[test]
fn terminal_left_fails() {
    let mut p = ab_productions();
    p.add("a", &["b"]);
    let err = Grammar::build::<AbSymbols>(&p, "S", "ε", "$").unwrap_err();
    assert!(matches!(err, GrammarError::InvalidLeftSymbol(name) if name == "a"));
}

#[test]
fn over_long_production_fails() {
    let mut p = ab_productions();
    p.add(
        "S",
        &["b", "b", "b", "b", "b", "b", "b", "b", "b", "b", "b"],
    );
    let err = Grammar::build::<AbSymbols>(&p, "S", "ε", "$").unwrap_err();
    assert!(matches!(err, GrammarError::ProductionTooLong { len: 11, .. }));
}
