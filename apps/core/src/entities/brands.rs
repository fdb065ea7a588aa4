//! Known-brand reference table.
//!
//! The table is immutable once built. The built-in table is created on first
//! access and shared for the life of the process; custom tables (loaded from
//! JSON) are owned by the caller and lent to the recognizer and linker.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;
use validator::Validate;

use crate::error::EngineError;

/// One known brand with its category and alternate spellings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KnownBrandEntry {
    #[validate(length(min = 1))]
    pub canonical_name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub aliases: BTreeSet<String>,
    /// Canonical name is also an ordinary word ("notion", "zoom"); it only
    /// matches free text when written capitalized.
    #[serde(default)]
    pub common_word: bool,
}

impl KnownBrandEntry {
    pub fn new(canonical_name: &str, category: &str, aliases: &[&str]) -> Self {
        Self {
            canonical_name: canonical_name.to_string(),
            category: category.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            common_word: false,
        }
    }

    pub fn with_common_word(mut self, common_word: bool) -> Self {
        self.common_word = common_word;
        self
    }

    /// Copy with surrounding whitespace removed everywhere
    fn trimmed(&self) -> Self {
        Self {
            canonical_name: self.canonical_name.trim().to_string(),
            category: self.category.trim().to_string(),
            aliases: self
                .aliases
                .iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            common_word: self.common_word,
        }
    }
}

/// (canonical name, category, aliases)
const BUILTIN_BRANDS: &[(&str, &str, &[&str])] = &[
    // Project management and productivity
    ("Notion", "productivity", &["notion.so"]),
    ("Asana", "project management", &[]),
    ("Trello", "project management", &[]),
    ("ClickUp", "project management", &["click up"]),
    ("Monday.com", "project management", &["monday work os"]),
    ("Jira", "project management", &["jira software"]),
    ("Basecamp", "project management", &[]),
    ("Wrike", "project management", &[]),
    ("Todoist", "productivity", &[]),
    ("Evernote", "productivity", &[]),
    ("Obsidian", "productivity", &["obsidian.md"]),
    ("Coda", "productivity", &["coda.io"]),
    ("Airtable", "database", &[]),
    // Communication
    ("Slack", "communication", &[]),
    ("Microsoft Teams", "communication", &["ms teams"]),
    ("Discord", "communication", &[]),
    ("Zoom", "video conferencing", &["zoom meetings"]),
    ("Loom", "video messaging", &[]),
    // CRM and support
    ("HubSpot", "crm", &["hubspot crm", "hub spot"]),
    ("Salesforce", "crm", &["sfdc", "sales cloud"]),
    ("Pipedrive", "crm", &[]),
    ("Zoho CRM", "crm", &["zoho"]),
    ("Intercom", "customer support", &[]),
    ("Zendesk", "customer support", &[]),
    ("Freshdesk", "customer support", &[]),
    // Accounting, payments, payroll
    ("QuickBooks", "accounting", &["quickbooks online", "qbo", "intuit quickbooks"]),
    ("Xero", "accounting", &[]),
    ("FreshBooks", "accounting", &["fresh books"]),
    ("Stripe", "payments", &[]),
    ("Gusto", "payroll", &[]),
    // E-commerce and websites
    ("Shopify", "ecommerce", &[]),
    ("WooCommerce", "ecommerce", &["woo commerce"]),
    ("BigCommerce", "ecommerce", &[]),
    ("Etsy", "marketplace", &[]),
    ("Webflow", "website builder", &[]),
    ("Wix", "website builder", &[]),
    ("Squarespace", "website builder", &[]),
    ("WordPress", "website builder", &["wp", "wordpress.com"]),
    // Design, marketing, scheduling, automation
    ("Canva", "design", &[]),
    ("Figma", "design", &[]),
    ("Mailchimp", "email marketing", &["mail chimp"]),
    ("ConvertKit", "email marketing", &["kit.com"]),
    ("Klaviyo", "email marketing", &[]),
    ("Hootsuite", "social media management", &[]),
    ("Calendly", "scheduling", &[]),
    ("Zapier", "automation", &[]),
    ("Typeform", "forms", &[]),
    ("DocuSign", "e-signature", &["docu sign"]),
    ("Grammarly", "writing", &[]),
    ("Toggl", "time tracking", &["toggl track"]),
    // Spreadsheets
    ("Google Sheets", "spreadsheet", &["gsheets"]),
    ("Microsoft Excel", "spreadsheet", &["ms excel"]),
];

/// Built-in brands whose name doubles as an everyday English word
const COMMON_WORD_BRANDS: &[&str] = &[
    "Notion", "Zoom", "Slack", "Stripe", "Loom", "Discord", "Obsidian", "Coda", "Gusto", "Intercom",
    "Basecamp",
];

static BUILTIN_TABLE: LazyLock<BrandTable> = LazyLock::new(|| {
    let entries = BUILTIN_BRANDS
        .iter()
        .map(|(name, category, aliases)| {
            KnownBrandEntry::new(name, category, aliases).with_common_word(COMMON_WORD_BRANDS.contains(name))
        })
        .collect();
    BrandTable::index(entries)
});

/// Normalize a lookup key: lower case, single spaces.
fn lookup_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Read-only lookup structure over known brands
#[derive(Debug, Clone)]
pub struct BrandTable {
    entries: Vec<KnownBrandEntry>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
    max_words: usize,
}

impl BrandTable {
    /// Shared built-in table, built on first use
    pub fn builtin() -> &'static BrandTable {
        &BUILTIN_TABLE
    }

    /// Build a table from caller-supplied entries.
    ///
    /// Entries are trimmed and validated; a canonical name that appears twice
    /// (ignoring case) is rejected.
    pub fn from_entries(entries: Vec<KnownBrandEntry>) -> Result<Self, EngineError> {
        let mut seen = HashSet::new();
        let mut cleaned = Vec::with_capacity(entries.len());

        for entry in &entries {
            let entry = entry.trimmed();
            entry.validate()?;
            if !seen.insert(lookup_key(&entry.canonical_name)) {
                return Err(EngineError::Validation(format!(
                    "Duplicate brand: {}",
                    entry.canonical_name
                )));
            }
            cleaned.push(entry);
        }

        Ok(Self::index(cleaned))
    }

    /// Parse a JSON array of entries
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let entries: Vec<KnownBrandEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a JSON array of entries from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        info!("Loaded {} known brands from {:?}", table.len(), path);
        Ok(table)
    }

    fn index(entries: Vec<KnownBrandEntry>) -> Self {
        let mut by_name = HashMap::new();
        let mut by_alias = HashMap::new();
        let mut max_words = 0;

        for (idx, entry) in entries.iter().enumerate() {
            let key = lookup_key(&entry.canonical_name);
            max_words = max_words.max(key.split(' ').count());
            by_name.entry(key).or_insert(idx);

            for alias in &entry.aliases {
                let key = lookup_key(alias);
                max_words = max_words.max(key.split(' ').count());
                by_alias.entry(key).or_insert(idx);
            }
        }

        Self {
            entries,
            by_name,
            by_alias,
            max_words,
        }
    }

    /// Case-insensitive lookup: canonical names first, then aliases
    pub fn lookup(&self, name: &str) -> Option<&KnownBrandEntry> {
        let key = lookup_key(name);
        if key.is_empty() {
            return None;
        }
        self.by_name
            .get(&key)
            .or_else(|| self.by_alias.get(&key))
            .map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Whether `name` is a registered alias (case-insensitive)
    pub fn is_alias(&self, name: &str) -> bool {
        self.by_alias.contains_key(&lookup_key(name))
    }

    /// Longest name or alias, in words
    pub fn max_name_words(&self) -> usize {
        self.max_words
    }

    pub fn entries(&self) -> &[KnownBrandEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = BrandTable::builtin();

        let notion = table.lookup("notion").unwrap();
        assert_eq!(notion.canonical_name, "Notion");
        assert_eq!(notion.category, "productivity");

        assert_eq!(table.lookup("QBO").unwrap().canonical_name, "QuickBooks");
        assert_eq!(table.lookup("  Google   sheets ").unwrap().canonical_name, "Google Sheets");
        assert!(table.lookup("Unknown Startup").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_builtin_is_valid() {
        let entries = BrandTable::builtin().entries().to_vec();
        let rebuilt = BrandTable::from_entries(entries).unwrap();
        assert_eq!(rebuilt.len(), BrandTable::builtin().len());
        assert_eq!(rebuilt.max_name_words(), 3);
    }

    #[test]
    fn test_common_word_flags() {
        let table = BrandTable::builtin();
        assert!(table.lookup("zoom").unwrap().common_word);
        assert!(table.lookup("Stripe").unwrap().common_word);
        assert!(!table.lookup("Trello").unwrap().common_word);
        assert!(table.is_alias("Zoom Meetings"));
        assert!(!table.is_alias("zoom"));

        let json = r#"[{"canonicalName": "Beacon", "category": "analytics", "commonWord": true}]"#;
        assert!(BrandTable::from_json_str(json).unwrap().lookup("beacon").unwrap().common_word);
    }

    #[test]
    fn test_canonical_beats_alias() {
        let table = BrandTable::from_entries(vec![
            KnownBrandEntry::new("Acme", "tools", &["beta"]),
            KnownBrandEntry::new("Beta", "analytics", &[]),
        ])
        .unwrap();

        assert_eq!(table.lookup("beta").unwrap().category, "analytics");
    }

    #[test]
    fn test_rejects_duplicates_and_blanks() {
        let dup = BrandTable::from_entries(vec![
            KnownBrandEntry::new("Acme", "tools", &[]),
            KnownBrandEntry::new("ACME", "tools", &[]),
        ]);
        assert!(matches!(dup, Err(EngineError::Validation(_))));

        let blank = BrandTable::from_entries(vec![KnownBrandEntry::new("  ", "tools", &[])]);
        assert!(matches!(blank, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"canonicalName": "Acme CRM", "category": "crm", "aliases": ["acme"]},
            {"canonicalName": "Widgetly", "category": "analytics"}
        ]"#;
        let table = BrandTable::from_json_str(json).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("ACME").unwrap().canonical_name, "Acme CRM");
        assert!(table.lookup("widgetly").unwrap().aliases.is_empty());

        assert!(matches!(BrandTable::from_json_str("{}"), Err(EngineError::Json(_))));
    }
}
