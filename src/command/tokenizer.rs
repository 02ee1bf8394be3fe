//! Leading keyword detection.

use tracing::warn;

use super::types::CommandKind;
use crate::core::tokens;

/// Result of splitting the keyword off a token run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    /// Canonical keyword, or `None` when the run does not start with one.
    pub keyword: Option<String>,
    /// Remaining tokens. The untouched input when no keyword matched.
    pub args: Vec<String>,
}

/// Matches leading tokens against the keyword table.
#[derive(Debug, Clone)]
pub struct CommandTokenizer {
    /// (alias tokens, canonical keyword), longest alias first.
    entries: Vec<(Vec<String>, String)>,
}

impl Default for CommandTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTokenizer {
    /// Tokenizer that knows the built-in keywords and their aliases.
    #[must_use]
    pub fn new() -> Self {
        let entries = CommandKind::ALL
            .into_iter()
            .flat_map(|kind| {
                kind.aliases()
                    .iter()
                    .map(move |alias| (vec![(*alias).to_string()], kind.keyword().to_string()))
            })
            .collect();
        Self { entries }
    }

    /// Add user-defined aliases. An alias may span several words.
    ///
    /// Aliases that collide with a built-in keyword are ignored.
    #[must_use]
    pub fn with_aliases<'a, I>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (alias, keyword) in aliases {
            let alias_tokens = tokens::split(alias, " ");
            if alias_tokens.is_empty() {
                continue;
            }
            if self.entries.iter().any(|(existing, _)| *existing == alias_tokens) {
                warn!(%alias, "alias shadows an existing keyword, ignoring");
                continue;
            }
            self.entries.push((alias_tokens, keyword.clone()));
        }
        // Stable sort keeps built-ins ahead of aliases of equal length.
        self.entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));
        self
    }

    /// Split the leading keyword off `tokens`.
    #[must_use]
    pub fn tokenize(&self, tokens: &[String]) -> Tokenized {
        self.entries
            .iter()
            .find(|(alias, _)| tokens.starts_with(alias))
            .map_or_else(
                || Tokenized {
                    keyword: None,
                    args: tokens.to_vec(),
                },
                |(alias, keyword)| Tokenized {
                    keyword: Some(keyword.clone()),
                    args: tokens[alias.len()..].to_vec(),
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn words(input: &str) -> Vec<String> {
        tokens::split(input, " ")
    }

    #[test]
    fn test_keyword_is_pruned() {
        let result = CommandTokenizer::new().tokenize(&words("done 3"));
        assert_eq!(result.keyword.as_deref(), Some("done"));
        assert_eq!(result.args, vec!["3"]);
    }

    #[test]
    fn test_alias_maps_to_canonical_keyword() {
        let result = CommandTokenizer::new().tokenize(&words("del 5"));
        assert_eq!(result.keyword.as_deref(), Some("delete"));
        assert_eq!(result.args, vec!["5"]);
    }

    #[test]
    fn test_no_keyword_leaves_tokens_untouched() {
        let input = words("buy milk by friday");
        let result = CommandTokenizer::new().tokenize(&input);
        assert_eq!(result.keyword, None);
        assert_eq!(result.args, input);
    }

    #[test]
    fn test_keyword_only_at_front() {
        let result = CommandTokenizer::new().tokenize(&words("buy milk done"));
        assert_eq!(result.keyword, None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let result = CommandTokenizer::new().tokenize(&words("Done 3"));
        assert_eq!(result.keyword, None);
    }

    #[test]
    fn test_empty_input() {
        let result = CommandTokenizer::new().tokenize(&[]);
        assert_eq!(result.keyword, None);
        assert!(result.args.is_empty());
    }

    #[test]
    fn test_multi_word_alias() {
        let aliases = BTreeMap::from([
            ("mark".to_string(), "search".to_string()),
            ("mark done".to_string(), "done".to_string()),
        ]);
        let tokenizer = CommandTokenizer::new().with_aliases(&aliases);

        let result = tokenizer.tokenize(&words("mark done 2"));
        assert_eq!(result.keyword.as_deref(), Some("done"));
        assert_eq!(result.args, vec!["2"]);

        let result = tokenizer.tokenize(&words("mark urgent"));
        assert_eq!(result.keyword.as_deref(), Some("search"));
        assert_eq!(result.args, vec!["urgent"]);
    }

    #[test]
    fn test_alias_cannot_shadow_builtin() {
        let aliases = BTreeMap::from([("del".to_string(), "undo".to_string())]);
        let tokenizer = CommandTokenizer::new().with_aliases(&aliases);
        let result = tokenizer.tokenize(&words("del 5"));
        assert_eq!(result.keyword.as_deref(), Some("delete"));
    }
}
