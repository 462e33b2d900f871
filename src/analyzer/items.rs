//! Flat enumeration of the LR(0) items of an augmented grammar.

use super::LRItem;
use crate::grammar::{Grammar, ProductionRef};

/// Enumerate every item of the augmented grammar into one flat list: the
/// items of `S' → S` first, then the items of each user production in index
/// order.
///
/// A production with `r` right-side symbols contributes `r + 1` items with
/// dot positions `0..=r`; each non-reduce item links to the immediately
/// following entry, which is the same item with the dot advanced by one.
pub(crate) fn enumerate_items(grammar: &Grammar) -> Vec<LRItem> {
    let mut items = Vec::new();

    let mut create_items = |items: &mut Vec<LRItem>, production: ProductionRef| {
        let right_len = grammar.production(production).right.len();
        for dot in 0..=right_len {
            let next_item = if dot < right_len {
                Some(items.len() + 1)
            } else {
                None
            };
            items.push(LRItem {
                production,
                dot,
                next_item,
                lookahead: None,
            });
        }
    };

    create_items(&mut items, ProductionRef::Augmented);
    for pi in 0..grammar.num_productions() {
        create_items(&mut items, ProductionRef::User(pi));
    }

    items
}
