//! In-memory model of a parsed configuration file.

/// A parsed configuration file: an ordered sequence of top-level sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub sections: Vec<Section>,
}

/// A named section holding ordered entries and ordered subsections.
///
/// Top-level sections may contain subsections; subsections may not nest
/// further.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub name: String,
    pub entries: Vec<Entry>,
    pub subsections: Vec<Section>,
}

/// One `key = value` line.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

/// An entry value: a scalar string or a comma-separated list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Document {
    /// Look up a top-level section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            entries: Vec::new(),
            subsections: Vec::new(),
        }
    }

    /// Look up a subsection by name.
    pub fn subsection(&self, name: &str) -> Option<&Section> {
        self.subsections.iter().find(|s| s.name == name)
    }

    /// Look up an entry value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    /// Look up a scalar entry by key. List values return `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Value::Scalar(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Look up a boolean entry by key.
    ///
    /// Accepts `True`/`False` in any case, matching the format's
    /// convention for seeded flags. Anything else reads as absent.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get_str(key)?.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    pub fn push_scalar(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Entry {
            key: key.into(),
            value: Value::Scalar(value.into()),
        });
    }

    pub fn push_list(&mut self, key: impl Into<String>, items: Vec<String>) {
        self.entries.push(Entry {
            key: key.into(),
            value: Value::List(items),
        });
    }
}
