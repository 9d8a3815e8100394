use std::{collections::BTreeMap, iter::FusedIterator};

use crate::{
    symbol::{DENSE_LIMIT, Symbol},
    trie::{NODE_NONE, NodeId},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    Dense,
    #[default]
    Sparse,
}

impl Strategy {
    pub(crate) fn resolve<S: Symbol>(self) -> Option<usize> {
        match self {
            Self::Dense => S::DENSE_DOMAIN.filter(|&domain| domain <= DENSE_LIMIT),
            Self::Sparse => None,
        }
    }
}

#[derive(Debug)]
pub(crate) enum EdgeMap<S> {
    Dense(Box<[NodeId]>),
    Sparse(BTreeMap<S, NodeId>),
}

impl<S: Symbol> EdgeMap<S> {
    pub fn new(dense_domain: Option<usize>) -> Self {
        match dense_domain {
            Some(domain) => Self::Dense(vec![NODE_NONE; domain].into()),
            None => Self::Sparse(BTreeMap::new()),
        }
    }

    #[inline(always)]
    pub fn get(&self, sym: S) -> Option<NodeId> {
        match self {
            Self::Dense(slots) => {
                let node = slots[sym.dense_slot()];
                (node != NODE_NONE).then_some(node)
            }
            Self::Sparse(map) => map.get(&sym).copied(),
        }
    }

    pub fn insert(&mut self, sym: S, node: NodeId) {
        match self {
            Self::Dense(slots) => slots[sym.dense_slot()] = node,
            Self::Sparse(map) => {
                map.insert(sym, node);
            }
        }
    }

    pub fn iter(&self) -> EdgeIter<'_, S> {
        match self {
            Self::Dense(slots) => EdgeIter::Dense(slots.iter().enumerate()),
            Self::Sparse(map) => EdgeIter::Sparse(map.iter()),
        }
    }
}

#[derive(Debug)]
pub(crate) enum EdgeIter<'t, S> {
    Dense(std::iter::Enumerate<std::slice::Iter<'t, NodeId>>),
    Sparse(std::collections::btree_map::Iter<'t, S, NodeId>),
}

impl<S: Symbol> Iterator for EdgeIter<'_, S> {
    type Item = (S, NodeId);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Dense(slots) => slots.find_map(|(slot, &node)| {
                (node != NODE_NONE).then(|| (S::from_dense_slot(slot), node))
            }),
            Self::Sparse(map) => map.next().map(|(&sym, &node)| (sym, node)),
        }
    }
}

impl<S: Symbol> FusedIterator for EdgeIter<'_, S> {}
