//! Name normalization rules.
//!
//! Derives canonical domain names from raw table/column names: strips the
//! module prefixes (`ms_`, `app_`, `tr_`) or a trailing `_id` suffix, and
//! rewrites trailing single-digit tokens (`_1` .. `_8`) into a fixed lexical
//! spelling so names differing only by a digit still normalize predictably.
//!
//! The prefix list and the digit→word table are configuration data; a custom
//! [`NamingRules`] can be supplied without touching the inference algorithm.

pub mod inflect;

use std::sync::LazyLock;

use regex::Regex;

/// Module prefixes stripped by the default rule set.
pub const DEFAULT_PREFIXES: &[&str] = &["ms", "app", "tr"];

/// Fixed spelling for trailing digit tokens 1-8. Digits outside the table
/// (and multi-digit suffixes) are left untouched.
pub const DEFAULT_DIGIT_WORDS: &[(char, &str)] = &[
    ('1', "satu"),
    ('2', "dua"),
    ('3', "tiga"),
    ('4', "empat"),
    ('5', "lima"),
    ('6', "enam"),
    ('7', "tujuh"),
    ('8', "delapan"),
];

static ID_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)_id$").unwrap());
static DIGIT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(\d)$").unwrap());

/// Naming convention rule set.
#[derive(Debug, Clone)]
pub struct NamingRules {
    digit_words: Vec<(char, String)>,
    strip_pattern: Regex,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_PREFIXES.iter().map(|p| p.to_string()),
            DEFAULT_DIGIT_WORDS
                .iter()
                .map(|(d, w)| (*d, w.to_string())),
        )
    }
}

impl NamingRules {
    /// Build a rule set from a prefix list and a digit→word table.
    pub fn new(
        prefixes: impl IntoIterator<Item = String>,
        digit_words: impl IntoIterator<Item = (char, String)>,
    ) -> Self {
        let escaped: Vec<String> = prefixes.into_iter().map(|p| regex::escape(&p)).collect();
        let pattern = if escaped.is_empty() {
            "(?i)(_id)$".to_string()
        } else {
            format!("(?i)(_id)$|^({})_", escaped.join("|"))
        };
        // Built from escaped literals, so compilation cannot fail.
        let strip_pattern = Regex::new(&pattern).expect("prefix pattern from escaped literals");
        Self {
            digit_words: digit_words.into_iter().collect(),
            strip_pattern,
        }
    }

    /// Rewrite a trailing `_<digit>` token to its configured word.
    ///
    /// `stage_1` becomes `stage_satu`; `stage_9` (not in the table) and
    /// `stage_12` (multi-digit) are returned unchanged.
    pub fn rewrite_digit_suffix(&self, name: &str) -> String {
        if let Some(caps) = DIGIT_SUFFIX.captures(name) {
            let digit = caps[1].chars().next().unwrap_or_default();
            if let Some((_, word)) = self.digit_words.iter().find(|(d, _)| *d == digit) {
                return format!("{}_{}", &name[..name.len() - 2], word);
            }
        }
        name.to_string()
    }

    /// Canonical domain name for a raw table/column name.
    ///
    /// Applies the digit-token rewrite, then a single match-and-remove of the
    /// combined prefix/suffix pattern: only the leftmost of prefix-strip or
    /// `_id`-strip fires per call. Idempotent on already-normalized names.
    pub fn normalize(&self, name: &str) -> String {
        let rewritten = self.rewrite_digit_suffix(name);
        self.strip_pattern.replace(&rewritten, "").into_owned()
    }

    /// True iff the name ends in `_id` (case-insensitive).
    pub fn is_column_id(&self, name: &str) -> bool {
        ID_SUFFIX.is_match(name)
    }

    /// The name with a trailing `_id` removed.
    pub fn strip_id_suffix(&self, name: &str) -> String {
        ID_SUFFIX.replace(name, "").into_owned()
    }
}
