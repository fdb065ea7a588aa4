//! Independent entity matchers.
//!
//! Each matcher proposes token spans; the recognizer runs them in priority
//! order and lets earlier matchers claim tokens first.

use super::brands::BrandTable;
use super::entity::MatchSource;
use super::tokens::{is_capitalized, join, Token};

/// A proposed entity: `tokens[start..end]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub start: usize,
    pub end: usize,
    pub name: String,
}

impl Candidate {
    fn from_span(tokens: &[Token], start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            name: join(tokens, start, end),
        }
    }
}

/// One heuristic for spotting named entities
pub trait EntityMatcher: Send + Sync {
    /// Source tag (and therefore confidence) of this matcher's entities
    fn source(&self) -> MatchSource;

    /// Candidate spans, in query order
    fn find(&self, tokens: &[Token]) -> Vec<Candidate>;
}

/// Greedy longest-match of brand names and aliases, case-insensitive.
///
/// Brands whose name is an ordinary word (`common_word`) only match by
/// canonical name when written capitalized; their aliases match in any case.
pub struct KnownBrandMatcher<'a> {
    table: &'a BrandTable,
}

impl<'a> KnownBrandMatcher<'a> {
    pub fn new(table: &'a BrandTable) -> Self {
        Self { table }
    }

    fn matches(&self, phrase: &str, first: &Token) -> bool {
        match self.table.lookup(phrase) {
            Some(entry) if entry.common_word && !is_capitalized(&first.text) => {
                self.table.is_alias(phrase)
            }
            Some(_) => true,
            None => false,
        }
    }
}

impl EntityMatcher for KnownBrandMatcher<'_> {
    fn source(&self) -> MatchSource {
        MatchSource::KnownBrand
    }

    fn find(&self, tokens: &[Token]) -> Vec<Candidate> {
        let max_words = self.table.max_name_words();
        let mut candidates = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let longest = max_words.min(tokens.len() - i);
            let matched = (1..=longest).rev().find(|&len| {
                let phrase = tokens[i..i + len]
                    .iter()
                    .map(|t| t.lower.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                self.matches(&phrase, &tokens[i])
            });

            match matched {
                Some(len) => {
                    candidates.push(Candidate::from_span(tokens, i, i + len));
                    i += len;
                }
                None => i += 1,
            }
        }

        candidates
    }
}

/// Words that introduce a competitor when followed by "to"
const TO_CUES: &[&str] = &[
    "alternative",
    "alternatives",
    "competitor",
    "competitors",
    "compared",
    "comparable",
    "similar",
    "switch",
    "switched",
    "switching",
    "migrate",
    "migrated",
    "migrating",
    "moved",
    "moving",
];

/// Words that introduce a competitor when followed by "from"
const FROM_CUES: &[&str] = &["switch", "switched", "switching", "migrate", "migrated", "migrating", "moving"];

/// Words that refer back to the competitor right before them ("Trello alternatives")
const TRAILING_CUES: &[&str] = &["alternative", "alternatives", "competitor", "competitors", "clone", "killer"];

/// Any word that sets up a comparison
fn is_comparison_cue(word: &str) -> bool {
    matches!(word, "vs" | "versus" | "instead" | "like" | "replacement" | "replacements")
        || TO_CUES.contains(&word)
        || TRAILING_CUES.contains(&word)
}

/// Participants of comparison phrases.
pub struct ComparisonMatcher;

impl ComparisonMatcher {
    /// Run of proper nouns starting at `start`
    fn run_after(tokens: &[Token], start: usize) -> Option<(usize, usize)> {
        let end = tokens[start.min(tokens.len())..]
            .iter()
            .take_while(|t| t.is_proper_noun())
            .count()
            + start;
        (end > start).then_some((start, end))
    }

    /// Run of proper nouns ending just before `end`
    fn run_before(tokens: &[Token], end: usize) -> Option<(usize, usize)> {
        let start = end
            - tokens[..end]
                .iter()
                .rev()
                .take_while(|t| t.is_proper_noun())
                .count();
        (start < end).then_some((start, end))
    }

    fn word_at<'t>(tokens: &'t [Token], idx: usize) -> Option<&'t str> {
        tokens.get(idx).map(|t| t.lower.as_str())
    }
}

impl EntityMatcher for ComparisonMatcher {
    fn source(&self) -> MatchSource {
        MatchSource::Comparison
    }

    fn find(&self, tokens: &[Token]) -> Vec<Candidate> {
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let word = token.lower.as_str();
            let next = Self::word_at(tokens, i + 1);

            // X vs Y
            if matches!(word, "vs" | "versus") {
                spans.extend(Self::run_before(tokens, i));
                spans.extend(Self::run_after(tokens, i + 1));
            }

            // alternative to X, switched from X to Y
            if next == Some("to") && TO_CUES.contains(&word) {
                spans.extend(Self::run_after(tokens, i + 2));
            }
            if next == Some("from") && FROM_CUES.contains(&word) {
                if let Some((start, end)) = Self::run_after(tokens, i + 2) {
                    spans.push((start, end));
                    if Self::word_at(tokens, end) == Some("to") {
                        spans.extend(Self::run_after(tokens, end + 1));
                    }
                }
            }

            // instead of X, replacement for X, apps like X
            let two_word_cue = matches!(
                (word, next),
                ("instead", Some("of")) | ("replacement", Some("for")) | ("replacements", Some("for"))
            );
            if two_word_cue {
                spans.extend(Self::run_after(tokens, i + 2));
            }
            if word == "like" {
                spans.extend(Self::run_after(tokens, i + 1));
            }

            // X alternatives
            if TRAILING_CUES.contains(&word) {
                spans.extend(Self::run_before(tokens, i));
            }
        }

        spans.sort_unstable();
        spans.dedup();
        spans
            .into_iter()
            .map(|(start, end)| Candidate::from_span(tokens, start, end))
            .collect()
    }
}

/// Runs of proper nouns as `(start, end)` spans, minus audience runs.
///
/// In "alternatives to X for Agencies" the run after `for` names who the
/// product is for, not a competitor, so it is dropped whenever a comparison
/// cue appears earlier in the same sentence.
fn proper_noun_runs(tokens: &[Token]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if !tokens[i].is_proper_noun() {
            i += 1;
            continue;
        }

        let start = i;
        while i < tokens.len() && tokens[i].is_proper_noun() {
            i += 1;
        }

        if !is_audience(tokens, start) {
            runs.push((start, i));
        }
    }

    runs
}

fn is_audience(tokens: &[Token], start: usize) -> bool {
    if start == 0 || tokens[start - 1].lower != "for" {
        return false;
    }

    let before = &tokens[..start - 1];
    let sentence = before.iter().rposition(|t| t.sentence_start).unwrap_or(0);
    before[sentence..].iter().any(|t| is_comparison_cue(&t.lower))
}

fn is_sentence_initial_single(tokens: &[Token], (start, end): (usize, usize)) -> bool {
    tokens[start].sentence_start && end - start == 1
}

/// Bare runs of capitalized, non-generic words.
///
/// A single capitalized word opening a sentence is left to
/// `SentenceStartMatcher`.
pub struct CapitalizationMatcher;

impl EntityMatcher for CapitalizationMatcher {
    fn source(&self) -> MatchSource {
        MatchSource::Capitalization
    }

    fn find(&self, tokens: &[Token]) -> Vec<Candidate> {
        proper_noun_runs(tokens)
            .into_iter()
            .filter(|run| !is_sentence_initial_single(tokens, *run))
            .map(|(start, end)| Candidate::from_span(tokens, start, end))
            .collect()
    }
}

/// Lone capitalized, non-generic words opening a sentence ("Zentrix pricing").
pub struct SentenceStartMatcher;

impl EntityMatcher for SentenceStartMatcher {
    fn source(&self) -> MatchSource {
        MatchSource::SentenceStart
    }

    fn find(&self, tokens: &[Token]) -> Vec<Candidate> {
        proper_noun_runs(tokens)
            .into_iter()
            .filter(|run| is_sentence_initial_single(tokens, *run))
            .map(|(start, end)| Candidate::from_span(tokens, start, end))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::tokens::tokenize;

    fn names(candidates: Vec<Candidate>) -> Vec<String> {
        candidates.into_iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_brand_matcher_longest_match() {
        let matcher = KnownBrandMatcher::new(BrandTable::builtin());
        let tokens = tokenize("moving from quickbooks online to google sheets");
        assert_eq!(names(matcher.find(&tokens)), vec!["quickbooks online", "google sheets"]);
    }

    #[test]
    fn test_vs_chain() {
        let tokens = tokenize("Asana vs Trello vs ClickUp");
        assert_eq!(names(ComparisonMatcher.find(&tokens)), vec!["Asana", "Trello", "ClickUp"]);
    }

    #[test]
    fn test_alternative_to() {
        let tokens = tokenize("alternatives to Acmeflow for small teams");
        assert_eq!(names(ComparisonMatcher.find(&tokens)), vec!["Acmeflow"]);

        let tokens = tokenize("cheap Acmeflow alternatives");
        assert_eq!(names(ComparisonMatcher.find(&tokens)), vec!["Acmeflow"]);
    }

    #[test]
    fn test_switch_from_to() {
        let tokens = tokenize("we switched from Acmeflow to Widgetly last year");
        assert_eq!(names(ComparisonMatcher.find(&tokens)), vec!["Acmeflow", "Widgetly"]);
    }

    #[test]
    fn test_capitalization_skips_sentence_start() {
        let tokens = tokenize("Invoicing with Acmeflow and Widgetly Pro");
        assert_eq!(names(CapitalizationMatcher.find(&tokens)), vec!["Acmeflow", "Widgetly Pro"]);
    }

    #[test]
    fn test_sentence_start_matcher() {
        let tokens = tokenize("Zentrix pricing. Is Acmeflow any good?");
        assert_eq!(names(SentenceStartMatcher.find(&tokens)), vec!["Zentrix"]);
        assert!(CapitalizationMatcher.find(&tokens).iter().all(|c| c.name != "Zentrix"));

        // Longer runs at a sentence start belong to the capitalization matcher.
        let tokens = tokenize("Zentrix Cloud pricing");
        assert!(SentenceStartMatcher.find(&tokens).is_empty());
        assert_eq!(names(CapitalizationMatcher.find(&tokens)), vec!["Zentrix Cloud"]);
    }

    #[test]
    fn test_audience_after_comparison_is_skipped() {
        let tokens = tokenize("alternatives to Zentrix for Agencies");
        assert!(CapitalizationMatcher.find(&tokens).iter().all(|c| c.name != "Agencies"));

        // Without a comparison cue, "for X" may still name a product.
        let tokens = tokenize("thinking of paying for Zentrix Cloud");
        assert_eq!(names(CapitalizationMatcher.find(&tokens)), vec!["Zentrix Cloud"]);
    }

    #[test]
    fn test_common_word_brands_need_capitals() {
        let matcher = KnownBrandMatcher::new(BrandTable::builtin());

        assert!(matcher.find(&tokenize("I have a notion to zoom out")).is_empty());
        assert!(matcher.find(&tokenize("how to stripe a wall")).is_empty());
        assert_eq!(names(matcher.find(&tokenize("moving from Slack to discord"))), vec!["Slack"]);
        assert_eq!(names(matcher.find(&tokenize("recording zoom meetings"))), vec!["zoom meetings"]);
        assert_eq!(names(matcher.find(&tokenize("trello or asana"))), vec!["trello", "asana"]);
    }

    #[test]
    fn test_nothing_found() {
        let tokens = tokenize("project management software");
        assert!(KnownBrandMatcher::new(BrandTable::builtin()).find(&tokens).is_empty());
        assert!(ComparisonMatcher.find(&tokens).is_empty());
        assert!(CapitalizationMatcher.find(&tokens).is_empty());
        assert!(SentenceStartMatcher.find(&tokens).is_empty());
    }
}
