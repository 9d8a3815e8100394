use crate::{
    automaton::Automaton,
    patterns::PatternId,
    symbol::Symbol,
    trie::{NODE_NONE, NODE_ROOT, NodeId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'a, S> {
    pub start: usize,
    pub pattern: PatternId,
    pub content: &'a [S],
}

#[derive(Debug)]
pub struct Scanner<'a, S: Symbol> {
    automaton: &'a Automaton<S>,
    node: NodeId,
    offset: usize,
}

impl<'a, S: Symbol> Scanner<'a, S> {
    pub(crate) fn new(automaton: &'a Automaton<S>) -> Self {
        Self {
            automaton,
            node: NODE_ROOT,
            offset: 0,
        }
    }

    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn feed<I, F>(&mut self, input: I, mut sink: F) -> bool
    where
        I: IntoIterator<Item = S>,
        F: FnMut(Match<'_, S>) -> bool,
    {
        for sym in input {
            if !self.step(sym, &mut sink) {
                return false;
            }
        }
        true
    }

    fn step<F>(&mut self, sym: S, sink: &mut F) -> bool
    where
        F: FnMut(Match<'_, S>) -> bool,
    {
        let automaton = self.automaton;

        let mut cursor = self.node;
        self.node = loop {
            if let Some(next) = automaton.trie.get(cursor, sym) {
                break next;
            }
            if cursor == NODE_ROOT {
                // nothing ends at this position, start over
                break NODE_ROOT;
            }
            cursor = automaton.suffix[cursor];
        };

        let offset = self.offset;
        self.offset += 1;

        let mut chain = self.node;
        loop {
            if let Some(id) = automaton.pattern_of[chain] {
                let content = &automaton.patterns[id];
                let found = Match {
                    start: offset + 1 - content.len(),
                    pattern: id,
                    content,
                };
                if !sink(found) {
                    return false;
                }
            }
            chain = automaton.next_match[chain];
            if chain == NODE_NONE {
                break;
            }
        }
        true
    }
}
