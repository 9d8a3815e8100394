use rand::{Rng, rngs::StdRng};

use crate::{automaton::Automaton, patterns::PatternId, symbol::Symbol};

pub(crate) fn naive_matches<S: Symbol>(
    automaton: &Automaton<S>,
    text: &[S],
) -> Vec<(usize, PatternId)> {
    let mut found = Vec::new();
    for start in 0..text.len() {
        for (id, pattern) in automaton.patterns().enumerate() {
            if text[start..].starts_with(pattern) {
                found.push((start, id));
            }
        }
    }
    found
}

pub(crate) fn random_patterns(rng: &mut StdRng) -> Vec<Vec<u8>> {
    let count = rng.random_range(1..12);
    (0..count)
        .map(|_| {
            // zero-length patterns exercise the silent-skip policy
            let len = rng.random_range(0..5);
            (0..len).map(|_| rng.random_range(b'a'..=b'd')).collect()
        })
        .collect()
}

pub(crate) fn random_text(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.random_range(0..200);
    (0..len).map(|_| rng.random_range(b'a'..=b'd')).collect()
}
