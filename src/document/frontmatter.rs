/*!
 * Lightweight frontmatter codec.
 *
 * A frontmatter block is a run of `key: value` lines between two standalone
 * `---` lines at the very start of a document. Nested structures are not
 * interpreted: indented continuation lines (YAML lists, nested maps) are kept
 * verbatim under the key that precedes them and written back unchanged.
 * When nested values are needed, `Frontmatter::structured` hands the block to
 * a YAML parser; callers fall back to the line codec's scalars when that fails.
 */

use serde_yaml::{Mapping, Value};

use crate::errors::ContentError;

const DELIMITER: &str = "---";

/// First characters that give a plain YAML scalar another meaning
const YAML_INDICATORS: &[char] = &[
    '{', '[', ']', '}', '*', '&', '!', '|', '>', '%', '@', '`', '#', ',', '?', '-', ':',
];

/// One `key: value` line plus any indented lines that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterEntry {
    pub key: String,
    pub value: String,
    /// Raw continuation lines, emitted as-is after the key line
    pub nested: Vec<String>,
}

/// Ordered mapping of frontmatter keys to scalar values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<FrontmatterEntry>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Set a value, keeping the key's position if it already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(FrontmatterEntry {
                key,
                value,
                nested: Vec::new(),
            }),
        }
    }

    pub fn entries(&self) -> &[FrontmatterEntry] {
        &self.entries
    }

    /// The block's lines as `encode` writes them, without delimiters
    pub fn to_yaml(&self) -> String {
        let mut out = String::with_capacity(64 * self.entries.len());
        for entry in &self.entries {
            out.push_str(&entry.key);
            out.push(':');
            if !entry.value.is_empty() {
                out.push(' ');
                out.push_str(&quote(&entry.value));
            }
            out.push('\n');
            for line in &entry.nested {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    /// Parse the block with a YAML parser so nested lists and maps can be read
    pub fn structured(&self) -> Result<Mapping, ContentError> {
        if self.is_empty() {
            return Ok(Mapping::new());
        }
        match serde_yaml::from_str::<Value>(&self.to_yaml()) {
            Ok(Value::Mapping(map)) => Ok(map),
            Ok(other) => Err(ContentError::InvalidYaml(format!(
                "expected a mapping, found {:?}",
                other
            ))),
            Err(e) => Err(ContentError::InvalidYaml(e.to_string())),
        }
    }

    /// Value of `key` as YAML, or the plain scalar when the block does not parse
    pub fn yaml_value(&self, key: &str) -> Option<Value> {
        match self.structured() {
            Ok(map) => map.get(key).cloned(),
            Err(e) => {
                log::debug!("{}; reading '{}' as a plain scalar", e, key);
                self.get(key).map(|v| Value::String(v.to_string()))
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fm = Frontmatter::new();
        for (k, v) in iter {
            fm.insert(k, v);
        }
        fm
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim() == DELIMITER
}

/// Split a document into frontmatter and body.
///
/// Fails only when an opening delimiter has no closing one.
pub fn try_decode(text: &str) -> Result<(Frontmatter, String), ContentError> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.first().is_none_or(|first| !is_delimiter(first)) {
        return Ok((Frontmatter::new(), text.to_string()));
    }

    let close = lines
        .iter()
        .skip(1)
        .position(|line| is_delimiter(line))
        .map(|i| i + 1)
        .ok_or(ContentError::FrontmatterParse)?;

    let mut fm = Frontmatter::new();
    for line in &lines[1..close] {
        let line = line.trim_end_matches('\r');
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indented = line.starts_with(' ') || line.starts_with('\t') || trimmed.starts_with("- ");
        if indented {
            if let Some(last) = fm.entries.last_mut() {
                last.nested.push(line.to_string());
                continue;
            }
        }

        if let Some((key, value)) = line.split_once(':') {
            fm.entries.push(FrontmatterEntry {
                key: key.trim().to_string(),
                value: unquote(value.trim()),
                nested: Vec::new(),
            });
        }
    }

    // One blank separator line after the closing delimiter belongs to the block
    let mut body_start = close + 1;
    if lines.get(body_start).is_some_and(|l| l.trim().is_empty()) {
        body_start += 1;
    }
    let body = if body_start < lines.len() {
        lines[body_start..].join("\n")
    } else {
        String::new()
    };

    Ok((fm, body))
}

/// Split a document into frontmatter and body.
///
/// An unterminated block degrades to "no frontmatter, whole text is body".
pub fn decode(text: &str) -> (Frontmatter, String) {
    match try_decode(text) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("{}; treating whole file as body", e);
            (Frontmatter::new(), text.to_string())
        }
    }
}

/// Write a frontmatter block followed by a blank line and the body
pub fn encode(fm: &Frontmatter, body: &str) -> String {
    let yaml = fm.to_yaml();
    let mut out = String::with_capacity(body.len() + yaml.len() + 16);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(&yaml);
    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out.push_str(body);
    out
}

fn needs_quoting(value: &str) -> bool {
    value.contains('"')
        || value.contains('\'')
        || value.contains('\\')
        || value.trim() != value
        || value.starts_with(YAML_INDICATORS)
        || value.ends_with(':')
        || value.contains(": ")
        || value.contains(" #")
}

/// Double-quote values that would not survive a bare round trip or would
/// read differently as plain YAML
fn quote(value: &str) -> String {
    if !needs_quoting(value) {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

fn unquote(value: &str) -> String {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        let inner = &value[1..value.len() - 1];
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(next) => out.push(next),
                    None => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        return out;
    }
    if bytes.len() >= 2 && bytes[0] == b'\'' && bytes[bytes.len() - 1] == b'\'' {
        return value[1..value.len() - 1].replace("''", "'");
    }
    value.to_string()
}
