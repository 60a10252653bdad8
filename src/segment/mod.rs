//! Memoized phrase-to-token segmentation.
//!
//! A phrase is split into element tiles and leftover letters by a recursive
//! optimal-substructure search over 1- and 2-character leading units (the
//! maximum symbol length in the periodic table). The chosen segmentation
//! minimizes the number of leftover [`Token::Literal`] tokens; element
//! tokens are free regardless of how many characters they consume.

use rustc_hash::FxHashMap;

use crate::catalog::ElementCatalog;

/// Smallest unit of a segmented phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A matched catalog element, by atomic number.
    Element(u32),
    /// A character no element symbol accounts for, stored lowercased.
    Literal(char),
}

impl Token {
    /// Whether this token is a leftover literal character.
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// Ordered token sequence for one phrase.
pub type Assignment = Vec<Token>;

/// Number of literal tokens in an assignment (the segmentation cost).
#[must_use]
pub fn literal_count(assignment: &[Token]) -> usize {
    assignment.iter().filter(|t| t.is_literal()).count()
}

/// Recursive segmenter with a private, append-only memoization cache.
///
/// The cache is keyed by exact suffix string and never invalidated, so one
/// segmenter instance can serve any number of sequential calls. It is not
/// meant to be shared across threads; build one per presentation pipeline.
pub struct PhraseSegmenter {
    /// Lowercase symbol -> atomic number, snapshotted from the catalog.
    symbols: FxHashMap<String, u32>,
    /// Suffix string -> best assignment for that suffix.
    memo: FxHashMap<String, Assignment>,
}

impl PhraseSegmenter {
    /// Build a segmenter over the given catalog's symbols.
    #[must_use]
    pub fn new(catalog: &ElementCatalog) -> Self {
        let symbols = catalog
            .records()
            .iter()
            .map(|record| (record.symbol.to_lowercase(), record.atomic_number))
            .collect();
        Self {
            symbols,
            memo: FxHashMap::default(),
        }
    }

    /// Segment a phrase into element and literal tokens.
    ///
    /// Never fails: unrecognized text degenerates to all-literal tokens and
    /// the empty phrase yields an empty assignment. Calling twice with the
    /// same phrase returns structurally equal results.
    pub fn segment(&mut self, phrase: &str) -> Assignment {
        let assignment = self.best(phrase);
        log::debug!(
            "segmented {phrase:?} into {} tokens ({} literals, {} suffixes cached)",
            assignment.len(),
            literal_count(&assignment),
            self.memo.len()
        );
        assignment
    }

    /// Number of cached suffix entries.
    #[must_use]
    pub fn cached_suffixes(&self) -> usize {
        self.memo.len()
    }

    /// Recursive search. Results for every non-empty suffix are memoized
    /// under the exact suffix string before returning.
    fn best(&mut self, phrase: &str) -> Assignment {
        if phrase.is_empty() {
            return Vec::new();
        }
        if let Some(hit) = self.memo.get(phrase) {
            return hit.clone();
        }

        let Some(first) = phrase.chars().next() else {
            return Vec::new();
        };
        let after_one = &phrase[first.len_utf8()..];

        let chosen = if after_one.is_empty() {
            let (unit, _) = self.head_tokens(phrase);
            unit
        } else {
            self.best_split(phrase, first, after_one)
        };

        let _ = self.memo.insert(phrase.to_owned(), chosen.clone());
        chosen
    }

    /// Compare the 1-character and 2-character leading splits; ties favor
    /// the single-character split.
    fn best_split(
        &mut self,
        phrase: &str,
        first: char,
        after_one: &str,
    ) -> Assignment {
        let Some(second) = after_one.chars().next() else {
            return Vec::new();
        };
        let head_two_len = first.len_utf8() + second.len_utf8();
        let after_two = &phrase[head_two_len..];

        let tail_one = self.best(after_one);
        let tail_two = self.best(after_two);

        let (head_one, head_one_cost) =
            self.head_tokens(&phrase[..first.len_utf8()]);
        let (head_two, head_two_cost) = self.head_tokens(&phrase[..head_two_len]);

        let cost_one = head_one_cost + literal_count(&tail_one);
        let cost_two = head_two_cost + literal_count(&tail_two);

        let (mut assignment, tail) = if cost_one <= cost_two {
            (head_one, tail_one)
        } else {
            (head_two, tail_two)
        };
        assignment.extend(tail);
        assignment
    }

    /// Tokens and literal cost for a 1- or 2-character leading unit: a
    /// symbol match costs nothing, anything else costs one literal per
    /// character.
    fn head_tokens(&self, head: &str) -> (Assignment, usize) {
        let lower = head.to_lowercase();
        if let Some(&z) = self.symbols.get(lower.as_str()) {
            (vec![Token::Element(z)], 0)
        } else {
            let literals: Assignment =
                lower.chars().map(Token::Literal).collect();
            let cost = literals.len();
            (literals, cost)
        }
    }
}

impl std::fmt::Debug for PhraseSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseSegmenter")
            .field("symbols", &self.symbols.len())
            .field("cached_suffixes", &self.memo.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElementCatalog;

    fn segmenter() -> PhraseSegmenter {
        PhraseSegmenter::new(&ElementCatalog::builtin().unwrap())
    }

    /// Characters a token accounts for, given the catalog.
    fn token_width(catalog: &ElementCatalog, token: Token) -> usize {
        match token {
            Token::Element(z) => {
                catalog.by_atomic_number(z).unwrap().symbol.len()
            }
            Token::Literal(_) => 1,
        }
    }

    #[test]
    fn test_empty_phrase_yields_empty_assignment() {
        assert!(segmenter().segment("").is_empty());
    }

    #[test]
    fn test_single_symbol_matches() {
        // "o" is Oxygen (8).
        assert_eq!(segmenter().segment("o"), vec![Token::Element(8)]);
    }

    #[test]
    fn test_two_letter_symbol_matches() {
        // "ba" is Barium (56).
        assert_eq!(segmenter().segment("ba"), vec![Token::Element(56)]);
    }

    #[test]
    fn test_unmatched_pair_becomes_two_literals() {
        // Neither "x" nor "xx" is a symbol.
        assert_eq!(
            segmenter().segment("xx"),
            vec![Token::Literal('x'), Token::Literal('x')]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut s = segmenter();
        assert_eq!(s.segment("BA"), vec![Token::Element(56)]);
        assert_eq!(s.segment("Ba"), s.segment("ba"));
    }

    #[test]
    fn test_literals_are_stored_lowercase() {
        assert_eq!(segmenter().segment("X"), vec![Token::Literal('x')]);
    }

    #[test]
    fn test_every_character_is_accounted_for() {
        let catalog = ElementCatalog::builtin().unwrap();
        let mut s = PhraseSegmenter::new(&catalog);
        for phrase in ["bacon", "chemistry", "qqq", "he was number one", ""] {
            let total: usize = s
                .segment(phrase)
                .iter()
                .map(|&t| token_width(&catalog, t))
                .sum();
            assert_eq!(total, phrase.chars().count(), "phrase {phrase:?}");
        }
    }

    #[test]
    fn test_memoized_calls_are_idempotent() {
        let mut s = segmenter();
        let first = s.segment("chemistry");
        let cached = s.cached_suffixes();
        let second = s.segment("chemistry");
        assert_eq!(first, second);
        assert_eq!(s.cached_suffixes(), cached);
    }

    #[test]
    fn test_prefers_fewer_literals() {
        let mut s = segmenter();
        // "bacon" = Ba C O N with zero literals.
        let assignment = s.segment("bacon");
        assert_eq!(literal_count(&assignment), 0);
        assert_eq!(
            assignment,
            vec![
                Token::Element(56),
                Token::Element(6),
                Token::Element(8),
                Token::Element(7),
            ]
        );
    }

    #[test]
    fn test_ties_favor_single_character_split() {
        // "co" can be [Co] or [C, O]; both cost zero literals, so the
        // single-character split wins.
        assert_eq!(
            segmenter().segment("co"),
            vec![Token::Element(6), Token::Element(8)]
        );
    }

    /// Minimum literal count over every segmentation built from 1- and
    /// 2-character unit choices, by exhaustive enumeration.
    fn brute_force_cost(catalog: &ElementCatalog, phrase: &[char]) -> usize {
        if phrase.is_empty() {
            return 0;
        }
        let unit_cost = |chars: &[char]| {
            let unit: String = chars.iter().collect::<String>().to_lowercase();
            if catalog.symbol_to_atomic_number(&unit).is_some() {
                0
            } else {
                chars.len()
            }
        };
        let mut best = unit_cost(&phrase[..1]) + brute_force_cost(catalog, &phrase[1..]);
        if phrase.len() >= 2 {
            let two = unit_cost(&phrase[..2]) + brute_force_cost(catalog, &phrase[2..]);
            best = best.min(two);
        }
        best
    }

    #[test]
    fn test_matches_brute_force_minimum_on_short_phrases() {
        let catalog = ElementCatalog::builtin().unwrap();
        let mut s = PhraseSegmenter::new(&catalog);
        // Alphabet mixing 1-letter symbols, 2-letter symbol fragments, and
        // a letter that matches nothing on its own.
        let alphabet = ['b', 'a', 'c', 'o', 'n', 'e', 'q'];
        let mut phrases = vec![String::new()];
        for _ in 0..4 {
            phrases = phrases
                .iter()
                .flat_map(|p| {
                    alphabet.iter().map(move |c| {
                        let mut next = p.clone();
                        next.push(*c);
                        next
                    })
                })
                .collect();
            for phrase in &phrases {
                let chars: Vec<char> = phrase.chars().collect();
                assert_eq!(
                    literal_count(&s.segment(phrase)),
                    brute_force_cost(&catalog, &chars),
                    "phrase {phrase:?}"
                );
            }
        }
        // A few length-6 spot checks past the exhaustive sweep.
        for phrase in ["baconq", "cacaco", "qqneon", "oxygen"] {
            let chars: Vec<char> = phrase.chars().collect();
            assert_eq!(
                literal_count(&s.segment(phrase)),
                brute_force_cost(&catalog, &chars),
                "phrase {phrase:?}"
            );
        }
    }
}
