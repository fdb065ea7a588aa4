//! Query tokenization for entity recognition.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Generic words that never name a product on their own, even when
/// capitalized (title case, sentence starts, acronyms).
const GENERIC_WORDS: &[&str] = &[
    // Function words
    "the", "a", "an", "and", "or", "but", "for", "to", "of", "in", "on", "at", "by", "with",
    "from", "into", "like", "than", "as", "is", "are", "was", "be", "it", "its", "this", "that",
    "i", "we", "you", "my", "our", "your", "me", "us", "any", "some", "all", "no", "not", "vs",
    "versus", "instead",
    // Question words
    "how", "what", "why", "which", "who", "where", "when", "does", "do", "can", "should", "is",
    // Comparison and buying vocabulary
    "best", "top", "free", "cheap", "cheapest", "alternative", "alternatives", "competitor",
    "competitors", "replacement", "review", "reviews", "pricing", "price", "compare",
    "comparison", "guide", "tutorial", "tips", "help", "new", "good", "better", "easy",
    // Generic product nouns
    "software", "app", "apps", "tool", "tools", "platform", "service", "services", "system",
    "solution", "solutions", "online", "project", "management", "business", "small", "startup",
    "startups", "team", "company", "companies", "template", "templates", "plugin", "extension",
    // Acronyms
    "crm", "erp", "saas", "seo", "ai", "api", "b2b", "b2c", "diy", "faq", "pdf", "usa", "uk", "eu",
    "ios", "mvp", "roi", "ui", "ux",
    // Audiences ("for Agencies")
    "agency", "agencies", "freelancer", "freelancers", "creator", "creators", "developer",
    "developers", "designer", "designers", "marketer", "marketers", "beginner", "beginners",
    "student", "students", "nonprofit", "nonprofits", "consultant", "consultants", "contractor",
    "contractors", "enterprise", "enterprises",
    // Conversational openers
    "looking", "need", "anyone", "has", "have", "just", "thinking", "hey", "hi", "hello", "thanks",
    "so", "also", "if", "there", "here", "still", "honestly",
    // Calendar
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december",
];

static GENERIC_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| GENERIC_WORDS.iter().copied().collect());

/// A single word of the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Word with surrounding punctuation stripped
    pub text: String,
    /// Lower-cased `text`
    pub lower: String,
    /// First word of the query or of a sentence
    pub sentence_start: bool,
}

impl Token {
    /// Capitalized and not a generic word
    pub fn is_proper_noun(&self) -> bool {
        self.text.chars().count() >= 2 && is_capitalized(&self.text) && !is_generic(&self.lower)
    }
}

/// Starts with an uppercase letter, or has one right after a lowercase
/// letter (`iPhone`, `eBay`).
pub fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => true,
        Some(first) => {
            let mut prev = first;
            for c in chars {
                if c.is_uppercase() && prev.is_lowercase() {
                    return true;
                }
                prev = c;
            }
            false
        }
        None => false,
    }
}

pub fn is_generic(lower: &str) -> bool {
    GENERIC_SET.contains(lower)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '/' | '|' | '(' | ')' | '[' | ']')
}

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &["vs", "etc", "e.g", "i.e", "inc", "co"];

fn ends_sentence(raw: &str, lower: &str) -> bool {
    raw.ends_with(['.', '!', '?', ':']) && !(raw.ends_with('.') && ABBREVIATIONS.contains(&lower))
}

/// Drop a possessive `'s` (straight or curly apostrophe).
fn strip_possessive(text: &str) -> &str {
    ["'s", "'S", "\u{2019}s", "\u{2019}S"]
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(text)
}

/// Split a query into words, keeping inner punctuation (`Monday.com`).
pub fn tokenize(query: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut sentence_start = true;

    for raw in query.split(is_separator).filter(|s| !s.is_empty()) {
        let text = strip_possessive(raw.trim_matches(|c: char| !c.is_alphanumeric()));
        let next_starts_sentence = ends_sentence(raw, &text.to_lowercase());

        if !text.is_empty() {
            tokens.push(Token {
                text: text.to_string(),
                lower: text.to_lowercase(),
                sentence_start,
            });
            sentence_start = false;
        }

        if next_starts_sentence {
            sentence_start = true;
        }
    }

    tokens
}

/// Join `tokens[start..end]` back into a display name.
pub fn join(tokens: &[Token], start: usize, end: usize) -> String {
    tokens[start..end]
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
