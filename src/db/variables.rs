//! The variable database: a bijection between timed nodes and DIMACS variables.
//!
//! A *node* is a (signal name, timeframe) pair, the atomic unit of the unrolled circuit.
//! Variables are dense positive integers from 1, assigned in first-reference order.
//! That order is part of the observable contract of a translation: it determines the numbering
//! written to the variable dictionary, and must be reproducible given identical input and
//! traversal order.

use std::collections::{hash_map::Entry, HashMap};

use crate::structures::clause::Var;

/// An injective, lazily-populated map from (signal name, timeframe) nodes to variables, with
/// reverse lookup for the dictionary artifact.
///
/// ```rust
/// # use reachcnf::db::variables::VariableMap;
/// let mut map = VariableMap::default();
///
/// assert_eq!(map.var_of("S0", 0), 1);
/// assert_eq!(map.var_of("NS0", 0), 2);
/// assert_eq!(map.var_of("S0", 0), 1);
///
/// assert_eq!(map.node_of(2), Some(("NS0", 0)));
/// assert_eq!(map.count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VariableMap {
    /// Nodes in allocation order, so the variable of `nodes[i]` is `i + 1`.
    nodes: Vec<(String, u32)>,

    /// The inverse of `nodes`.
    ids: HashMap<(String, u32), Var>,
}

impl VariableMap {
    /// The variable of the given node, allocated fresh if the node has not been referenced before.
    pub fn var_of(&mut self, name: &str, frame: u32) -> Var {
        match self.ids.entry((name.to_owned(), frame)) {
            Entry::Occupied(entry) => *entry.get(),

            Entry::Vacant(entry) => {
                let fresh = (self.nodes.len() + 1) as Var;
                entry.insert(fresh);
                self.nodes.push((name.to_owned(), frame));
                fresh
            }
        }
    }

    /// The node of the given variable, if the variable has been allocated.
    pub fn node_of(&self, var: Var) -> Option<(&str, u32)> {
        let index = (var as usize).checked_sub(1)?;
        self.nodes
            .get(index)
            .map(|(name, frame)| (name.as_str(), *frame))
    }

    /// The number of variables allocated.
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// All (variable, name, timeframe) triples in ascending variable order.
    pub fn nodes(&self) -> impl Iterator<Item = (Var, &str, u32)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, (name, frame))| ((index + 1) as Var, name.as_str(), *frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_is_first_reference_order() {
        let mut map = VariableMap::default();

        let a = map.var_of("a", 0);
        let b = map.var_of("b", 3);
        let a_again = map.var_of("a", 0);
        let a_later = map.var_of("a", 1);

        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(a_again, 1);
        assert_eq!(a_later, 3);

        let nodes: Vec<_> = map.nodes().collect();
        assert_eq!(nodes, vec![(1, "a", 0), (2, "b", 3), (3, "a", 1)]);
    }

    #[test]
    fn unallocated_lookup_is_none() {
        let map = VariableMap::default();
        assert_eq!(map.node_of(0), None);
        assert_eq!(map.node_of(1), None);
    }
}
