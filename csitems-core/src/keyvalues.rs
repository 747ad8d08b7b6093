//! Parser for the Valve key-value text format used by `items_game.txt` and
//! the localization files.
//!
//! ```text
//! "items_game"
//! {
//!     "items"
//!     {
//!         "7"   { "name" "weapon_ak47" "prefab" "weapon_ak47_prefab" }
//!     }
//! }
//! ```
//!
//! Documents are converted into a `serde_json::Value` tree. Objects keep
//! source order. A block key that appears more than once in the same object
//! becomes an array holding every block in order, while a repeated string
//! key keeps the last value.

use crate::error::{CatalogError, Result};
use serde_json::{Map, Value};

/// Parse a key-value document into a JSON object.
pub fn parse(text: &str) -> Result<Value> {
    let mut parser = Parser::new(text);
    let root = parser.parse_pairs(false)?;
    Ok(Value::Object(root))
}

#[derive(Debug, PartialEq)]
enum Token {
    Str(String),
    Open,
    Close,
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn error(&self, message: impl Into<String>) -> CatalogError {
        CatalogError::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    /// Parse `key value` pairs until end of input (top level) or a closing brace.
    fn parse_pairs(&mut self, nested: bool) -> Result<Map<String, Value>> {
        let mut map = Map::new();

        loop {
            let key = match self.next_token()? {
                None if nested => return Err(self.error("Unclosed block")),
                None => return Ok(map),
                Some(Token::Close) if nested => return Ok(map),
                Some(Token::Close) => return Err(self.error("Unexpected '}'")),
                Some(Token::Open) => return Err(self.error("Expected key, found '{'")),
                Some(Token::Str(key)) => key,
            };

            let value = match self.next_token()? {
                Some(Token::Str(value)) => Value::String(value),
                Some(Token::Open) => Value::Object(self.parse_pairs(true)?),
                Some(Token::Close) | None => {
                    return Err(self.error(format!("Missing value for key \"{}\"", key)));
                }
            };
            self.skip_conditional();

            insert(&mut map, key, value);
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_trivia();
        let Some(&c) = self.chars.get(self.pos) else {
            return Ok(None);
        };

        match c {
            '{' => {
                self.pos += 1;
                Ok(Some(Token::Open))
            }
            '}' => {
                self.pos += 1;
                Ok(Some(Token::Close))
            }
            '"' => self.quoted().map(|s| Some(Token::Str(s))),
            _ => Ok(Some(Token::Str(self.bare()))),
        }
    }

    fn quoted(&mut self) -> Result<String> {
        let start_line = self.line;
        self.pos += 1;
        let mut value = String::new();

        while let Some(&c) = self.chars.get(self.pos) {
            self.pos += 1;
            match c {
                '"' => return Ok(value),
                '\\' => {
                    let Some(&escaped) = self.chars.get(self.pos) else {
                        break;
                    };
                    self.pos += 1;
                    match escaped {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        '\\' => value.push('\\'),
                        '"' => value.push('"'),
                        other => {
                            value.push('\\');
                            value.push(other);
                        }
                    }
                }
                '\n' => {
                    self.line += 1;
                    value.push(c);
                }
                _ => value.push(c),
            }
        }

        Err(CatalogError::Parse {
            line: start_line,
            message: "Unterminated string".to_string(),
        })
    }

    fn bare(&mut self) -> String {
        let start = self.pos;
        while let Some(&c) = self.chars.get(self.pos) {
            if c.is_whitespace() || c == '{' || c == '}' || c == '"' {
                break;
            }
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Skip whitespace and `//` comments.
    fn skip_trivia(&mut self) {
        while let Some(&c) = self.chars.get(self.pos) {
            if c == '\n' {
                self.line += 1;
                self.pos += 1;
            } else if c.is_whitespace() {
                self.pos += 1;
            } else if c == '/' && self.chars.get(self.pos + 1) == Some(&'/') {
                while let Some(&c) = self.chars.get(self.pos) {
                    if c == '\n' {
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    /// Skip a platform conditional such as `[$WIN32]` trailing a value.
    fn skip_conditional(&mut self) {
        let saved = (self.pos, self.line);
        self.skip_trivia();
        if self.chars.get(self.pos) != Some(&'[') {
            (self.pos, self.line) = saved;
            return;
        }
        while let Some(&c) = self.chars.get(self.pos) {
            self.pos += 1;
            if c == ']' {
                return;
            }
        }
    }
}

fn insert(map: &mut Map<String, Value>, key: String, value: Value) {
    match map.get_mut(&key) {
        Some(Value::Array(blocks)) if value.is_object() => blocks.push(value),
        Some(existing) if existing.is_object() && value.is_object() => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        Some(existing) => *existing = value,
        None => {
            map.insert(key, value);
        }
    }
}

/// Canonical array-index keys: `0` or digits without a leading zero, below `u32::MAX`.
fn index_key(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

/// Entries of one block: index keys ascending, then the remaining keys in
/// source order.
fn ordered_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let (mut indexed, named): (Vec<_>, Vec<_>) =
        map.iter().partition(|(key, _)| index_key(key).is_some());
    indexed.sort_by_key(|(key, _)| index_key(key));
    indexed.extend(named);
    indexed
}

/// Iterate the entries of a section that may be a single object or a list
/// of object fragments. Fragments keep their source order; within a
/// fragment, numeric keys come first in ascending order.
pub fn fragment_entries(section: &Value) -> impl Iterator<Item = (&String, &Value)> {
    let fragments: Vec<&Map<String, Value>> = match section {
        Value::Object(map) => vec![map],
        Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    };
    fragments.into_iter().flat_map(ordered_entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nested_document() {
        let text = r#"
"items_game"
{
    "items"
    {
        "7"
        {
            "name"      "weapon_ak47"
            "prefab"    "weapon_ak47_prefab"
        }
    }
}
"#;
        let tree = parse(text).unwrap();
        assert_eq!(tree["items_game"]["items"]["7"]["name"], "weapon_ak47");
        assert_eq!(tree["items_game"]["items"]["7"]["prefab"], "weapon_ak47_prefab");
    }

    #[test]
    fn test_parse_comments_and_bare_tokens() {
        let text = "// header comment\nroot { key value // trailing\n other \"x y\" }";
        let tree = parse(text).unwrap();
        assert_eq!(tree, json!({ "root": { "key": "value", "other": "x y" } }));
    }

    #[test]
    fn test_parse_escapes() {
        let text = r#""Tokens" { "Quote" "say \"hi\"\nnow" "Slash" "a\\b" }"#;
        let tree = parse(text).unwrap();
        assert_eq!(tree["Tokens"]["Quote"], "say \"hi\"\nnow");
        assert_eq!(tree["Tokens"]["Slash"], "a\\b");
    }

    #[test]
    fn test_parse_skips_conditionals() {
        let text = r#""root" { "a" "1" [$WIN32] "b" "2" [!$X360] }"#;
        let tree = parse(text).unwrap();
        assert_eq!(tree, json!({ "root": { "a": "1", "b": "2" } }));
    }

    #[test]
    fn test_duplicate_blocks_become_array() {
        let text = r#""g" { "items" { "1" { "name" "a" } } "items" { "2" { "name" "b" } } "items" { "3" {} } }"#;
        let tree = parse(text).unwrap();
        let items = tree["g"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["1"]["name"], "a");
        assert_eq!(items[1]["2"]["name"], "b");
    }

    #[test]
    fn test_duplicate_strings_last_wins() {
        let tree = parse(r#""t" { "k" "first" "k" "second" }"#).unwrap();
        assert_eq!(tree["t"]["k"], "second");
    }

    #[test]
    fn test_preserves_key_order() {
        let text = r#""used_by_classes" { "terrorists" "1" "counter-terrorists" "1" }"#;
        let tree = parse(text).unwrap();
        let keys: Vec<&String> = tree["used_by_classes"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["terrorists", "counter-terrorists"]);
    }

    #[test]
    fn test_unterminated_string_reports_line() {
        let err = parse("\"root\"\n{\n\"key\" \"oops\n}").unwrap_err();
        match err {
            CatalogError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("Unterminated"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unclosed_block() {
        assert!(parse("\"root\" { \"a\" \"b\"").is_err());
    }

    #[test]
    fn test_unexpected_close() {
        assert!(parse("\"a\" \"b\" }").is_err());
    }

    #[test]
    fn test_missing_value() {
        assert!(parse("\"root\" { \"a\" }").is_err());
    }

    #[test]
    fn test_fragment_entries_handles_object_and_array() {
        let single = json!({ "a": 1, "b": 2 });
        let keys: Vec<&String> = fragment_entries(&single).map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);

        let many = json!([{ "a": 1 }, { "b": 2, "c": 3 }]);
        let keys: Vec<&String> = fragment_entries(&many).map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);

        assert_eq!(fragment_entries(&Value::Null).count(), 0);
    }

    #[test]
    fn test_fragment_entries_numeric_keys_first_ascending() {
        let text = r#""items" { "name" "x" "500" {} "042" {} "42" {} "7" {} "default" {} }"#;
        let tree = parse(text).unwrap();
        let keys: Vec<&String> = fragment_entries(&tree["items"]).map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["7", "42", "500", "name", "042", "default"]);
    }

    #[test]
    fn test_fragment_entries_orders_within_each_fragment() {
        let many = json!([{ "9": 1, "3": 2 }, { "1": 3 }]);
        let keys: Vec<&String> = fragment_entries(&many).map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["3", "9", "1"]);
    }

    #[test]
    fn test_index_key() {
        assert_eq!(index_key("0"), Some(0));
        assert_eq!(index_key("4294967294"), Some(u32::MAX - 1));
        assert_eq!(index_key("4294967295"), None);
        assert_eq!(index_key("01"), None);
        assert_eq!(index_key("-1"), None);
        assert_eq!(index_key(""), None);
    }
}
