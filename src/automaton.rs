use thiserror::Error;

use crate::{
    edges::Strategy,
    links::{LinkTables, build_links},
    patterns::{PatternBuf, PatternId, Patterns},
    scan::{Match, Scanner},
    symbol::Symbol,
    trie::{NODE_ROOT, NodeId, Trie},
    typed_vec::TypedVec,
};

#[derive(Debug)]
pub struct Automaton<S: Symbol> {
    pub(crate) trie: Trie<S>,
    pub(crate) patterns: Patterns<S>,
    pub(crate) pattern_of: TypedVec<NodeId, Option<PatternId>>,
    pub(crate) suffix: TypedVec<NodeId, NodeId>,
    pub(crate) next_match: TypedVec<NodeId, NodeId>,
}

#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("the pattern at position {pos} is empty")]
    EmptyPattern { pos: usize },
    #[error("the pattern at position {pos} duplicates pattern {prev}")]
    DuplicatePattern { pos: usize, prev: PatternId },
}

struct Builder<S: Symbol> {
    trie: Trie<S>,
    patterns: Patterns<S>,
    pattern_of: TypedVec<NodeId, Option<PatternId>>,
}

enum Inserted {
    Added,
    Empty,
    Duplicate(PatternId),
}

impl<S: Symbol> Builder<S> {
    fn new(strategy: Strategy) -> Self {
        Self {
            trie: Trie::new(strategy),
            patterns: Patterns::new(),
            pattern_of: vec![None].into(),
        }
    }

    fn insert<P: IntoIterator<Item = S>>(&mut self, pattern: P) -> Inserted {
        let content: PatternBuf<S> = pattern.into_iter().collect();
        if content.is_empty() {
            return Inserted::Empty;
        }
        let mut node = NODE_ROOT;
        for &sym in &content {
            node = self.trie.get_or_add(node, sym);
        }
        self.pattern_of.resize(self.trie.len(), None);
        if let Some(prev) = self.pattern_of[node] {
            return Inserted::Duplicate(prev);
        }
        self.pattern_of[node] = Some(self.patterns.push(content));
        Inserted::Added
    }

    fn finish(self) -> Automaton<S> {
        let Self {
            trie,
            patterns,
            pattern_of,
        } = self;
        let LinkTables { suffix, next_match } = build_links(&trie, &pattern_of);
        Automaton {
            trie,
            patterns,
            pattern_of,
            suffix,
            next_match,
        }
    }
}

impl<S: Symbol> Automaton<S> {
    pub fn build<P, I>(patterns: I, strategy: Strategy) -> Self
    where
        P: IntoIterator<Item = S>,
        I: IntoIterator<Item = P>,
    {
        let mut builder = Builder::new(strategy);
        for pattern in patterns {
            let _ = builder.insert(pattern);
        }
        builder.finish()
    }

    pub fn try_build<P, I>(patterns: I, strategy: Strategy) -> Result<Self, BuildError>
    where
        P: IntoIterator<Item = S>,
        I: IntoIterator<Item = P>,
    {
        let mut builder = Builder::new(strategy);
        for (pos, pattern) in patterns.into_iter().enumerate() {
            match builder.insert(pattern) {
                Inserted::Added => {}
                Inserted::Empty => return Err(BuildError::EmptyPattern { pos }),
                Inserted::Duplicate(prev) => {
                    return Err(BuildError::DuplicatePattern { pos, prev });
                }
            }
        }
        Ok(builder.finish())
    }

    #[inline(always)]
    pub fn patterns(&self) -> &Patterns<S> {
        &self.patterns
    }

    #[inline(always)]
    pub fn pattern(&self, id: PatternId) -> Option<&[S]> {
        self.patterns.get(id)
    }

    #[inline(always)]
    pub fn num_of_patterns(&self) -> PatternId {
        self.patterns.len()
    }

    #[inline(always)]
    pub fn applied_strategy(&self) -> Strategy {
        self.trie.applied_strategy()
    }

    pub fn pattern_id_of<P: IntoIterator<Item = S>>(&self, pattern: P) -> Option<PatternId> {
        let mut node = NODE_ROOT;
        for sym in pattern {
            node = self.trie.get(node, sym)?;
        }
        self.pattern_of[node]
    }

    pub fn scanner(&self) -> Scanner<'_, S> {
        Scanner::new(self)
    }

    pub fn scan<I, F>(&self, input: I, sink: F) -> bool
    where
        I: IntoIterator<Item = S>,
        F: FnMut(Match<'_, S>) -> bool,
    {
        self.scanner().feed(input, sink)
    }

    pub fn scan_chunks<C, I, F>(&self, chunks: C, mut sink: F) -> bool
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        F: FnMut(Match<'_, S>) -> bool,
    {
        let mut scanner = self.scanner();
        for chunk in chunks {
            if !scanner.feed(chunk, &mut sink) {
                return false;
            }
        }
        true
    }
}
