use crate::{
    patterns::PatternId,
    symbol::Symbol,
    trie::{NODE_NONE, NODE_ROOT, NodeId, Trie},
    typed_vec::TypedVec,
};

#[derive(Debug)]
pub(crate) struct LinkTables {
    pub suffix: TypedVec<NodeId, NodeId>,
    pub next_match: TypedVec<NodeId, NodeId>,
}

pub(crate) fn build_links<S: Symbol>(
    trie: &Trie<S>,
    pattern_of: &TypedVec<NodeId, Option<PatternId>>,
) -> LinkTables {
    let len = trie.len();
    let mut suffix = TypedVec::new_with(NODE_ROOT, len);
    let mut next_match = TypedVec::new_with(NODE_NONE, len);

    for node in trie.bfs() {
        if node == NODE_ROOT {
            // depth-1 nodes keep the initialized root link
            continue;
        }
        for (sym, child) in trie.children(node) {
            let mut cursor = suffix[node];
            while cursor != NODE_ROOT && trie.get(cursor, sym).is_none() {
                cursor = suffix[cursor];
            }
            let link = trie.get(cursor, sym).unwrap_or(NODE_ROOT);
            suffix[child] = link;
            next_match[child] = if pattern_of[link].is_some() {
                link
            } else {
                next_match[link]
            };
        }
    }

    LinkTables { suffix, next_match }
}

#[cfg(test)]
mod tests {
    use crate::{
        Strategy,
        automaton::Automaton,
        trie::{NODE_NONE, NODE_ROOT, NodeId},
    };

    fn node_of(automaton: &Automaton<u8>, path: &str) -> NodeId {
        let mut node = NODE_ROOT;
        for &byte in path.as_bytes() {
            node = automaton.trie.get(node, byte).unwrap();
        }
        node
    }

    #[test]
    fn test_suffix_links() {
        let automaton = Automaton::build(
            ["he", "she", "hers", "his"].map(str::bytes),
            Strategy::Sparse,
        );

        let suffix_of = |path: &str| automaton.suffix[node_of(&automaton, path)];

        assert_eq!(suffix_of("h"), NODE_ROOT);
        assert_eq!(suffix_of("s"), NODE_ROOT);
        assert_eq!(suffix_of("sh"), node_of(&automaton, "h"));
        assert_eq!(suffix_of("she"), node_of(&automaton, "he"));
        assert_eq!(suffix_of("her"), NODE_ROOT);
        assert_eq!(suffix_of("hers"), node_of(&automaton, "s"));
        assert_eq!(suffix_of("hi"), NODE_ROOT);
        assert_eq!(suffix_of("his"), node_of(&automaton, "s"));
    }

    #[test]
    fn test_next_match_chains() {
        let automaton = Automaton::build(
            ["he", "she", "hers", "his"].map(str::bytes),
            Strategy::Sparse,
        );

        let next_match_of = |path: &str| automaton.next_match[node_of(&automaton, path)];

        // "she" ends where "he" also ends; everything else has no shorter match
        assert_eq!(next_match_of("she"), node_of(&automaton, "he"));
        assert_eq!(next_match_of("he"), NODE_NONE);
        assert_eq!(next_match_of("hers"), NODE_NONE);
        assert_eq!(next_match_of("his"), NODE_NONE);
        assert_eq!(next_match_of("sh"), NODE_NONE);
    }

    #[test]
    fn test_transitive_next_match() {
        let automaton = Automaton::build(["a", "aa", "aaa"].map(str::bytes), Strategy::Sparse);

        let a = node_of(&automaton, "a");
        let aa = node_of(&automaton, "aa");
        let aaa = node_of(&automaton, "aaa");

        assert_eq!(automaton.next_match[aaa], aa);
        assert_eq!(automaton.next_match[aa], a);
        assert_eq!(automaton.next_match[a], NODE_NONE);
    }
}
