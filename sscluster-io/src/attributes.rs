//! Parsing of the ninth (attributes) column of GTF and GFF3 files.
//!
//! GTF writes attributes as `key "value"; key "value";` while GFF3 uses
//! `key=value;key=value`. Both are reduced to an ordered list of key/value
//! pairs so a feature id can be looked up by key name.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeStyle {
    /// `key "value";`
    Gtf,
    /// `key=value;`
    Gff3,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    pub fn parse(column: &str, style: AttributeStyle) -> Self {
        let pairs = column
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let split = match style {
                    AttributeStyle::Gtf => entry.split_once(char::is_whitespace),
                    AttributeStyle::Gff3 => entry.split_once('='),
                };
                match split {
                    Some((key, value)) => (key.trim().to_string(), unquote(value.trim())),
                    None => (entry.to_string(), String::new()),
                }
            })
            .collect();

        Attributes { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn first(&self) -> Option<&str> {
        self.pairs.first().map(|(_, v)| v.as_str())
    }

    ///
    /// The feature id: the value stored under `key`, or the value of the first
    /// attribute when that key is absent.
    ///
    pub fn feature_id(&self, key: &str) -> Option<&str> {
        self.get(key)
            .or_else(|| self.first())
            .filter(|id| !id.is_empty())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}
