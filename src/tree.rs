//! A concrete parse tree built from the reduce events of the state machine.

use crate::grammar::SymbolId;
use ptree::TreeItem;
use std::fmt::{Debug, Formatter};

#[derive(Clone)]
/// One node of a parse tree.
///
/// Leaves carry the payload of the shifted terminal (for the bundled
/// expression parser, the token); interior nodes carry the reduced
/// non-terminal and its children in production order.
pub struct ParseTree<TLeaf> {
    pub symbol: SymbolId,
    pub name: &'static str,
    pub leaf: Option<TLeaf>,
    pub children: Vec<ParseTree<TLeaf>>,
}

impl<TLeaf> ParseTree<TLeaf> {
    pub fn node(symbol: SymbolId, name: &'static str, children: Vec<ParseTree<TLeaf>>) -> Self {
        Self {
            symbol,
            name,
            leaf: None,
            children,
        }
    }

    pub fn leaf(symbol: SymbolId, name: &'static str, leaf: Option<TLeaf>) -> Self {
        Self {
            symbol,
            name,
            leaf,
            children: Vec::with_capacity(0),
        }
    }

    /// Whether this tree or any nested child carries the given symbol.
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbol == symbol || self.children.iter().any(|c| c.contains(symbol))
    }

    /// Find the first nested node carrying the given symbol.
    pub fn find(&self, symbol: SymbolId) -> Option<&ParseTree<TLeaf>> {
        if self.symbol == symbol {
            Some(self)
        } else {
            self.children.iter().find_map(|c| c.find(symbol))
        }
    }
}

impl<TLeaf: Debug> Debug for ParseTree<TLeaf> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ParseTree");
        debug_struct.field("symbol", &self.name);
        if let Some(leaf) = &self.leaf {
            debug_struct.field("leaf", leaf);
        }
        if !self.children.is_empty() {
            debug_struct.field("children", &self.children);
        }
        debug_struct.finish()
    }
}

impl<TLeaf: Debug + Clone> TreeItem for ParseTree<TLeaf> {
    type Child = Self;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        match &self.leaf {
            Some(leaf) => write!(f, "{} # {:?}", self.name, leaf),
            None => write!(f, "{}", self.name),
        }
    }

    fn children(&self) -> std::borrow::Cow<[Self::Child]> {
        std::borrow::Cow::from(&self.children)
    }
}

impl<TLeaf: Debug + Clone> ParseTree<TLeaf> {
    pub fn print(&self) -> Result<(), std::io::Error> {
        ptree::print_tree(self)
    }
}
