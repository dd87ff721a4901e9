/// Parsed `.skin` document: widget placements split by screen orientation.
///
/// Either section may be empty; consumers fall back to the other section
/// when resolving positions for a viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinDocument {
    pub portrait: Vec<Placement>,
    pub landscape: Vec<Placement>,
}

/// One widget placement node: `compass { anchor: right_top  offset: -28 92 }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Widget name as written in the document (e.g. `compass`, `scale_label`).
    pub widget: String,
    pub props: Vec<Prop>,
}

impl Placement {
    /// Returns the value of `key`, if present. Later duplicates shadow
    /// earlier ones, so lookup scans from the back.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Returns `key` as a single number, if present with that shape.
    pub fn number(&self, key: &str) -> Option<f32> {
        match self.prop(key) {
            Some(Value::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns `key` as a number pair, if present with that shape.
    pub fn pair(&self, key: &str) -> Option<(f32, f32)> {
        match self.prop(key) {
            Some(Value::Pair(x, y)) => Some((*x, *y)),
            _ => None,
        }
    }

    /// Returns `key` as an identifier, if present with that shape.
    pub fn ident(&self, key: &str) -> Option<&str> {
        match self.prop(key) {
            Some(Value::Ident(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// `key: value` property inside a placement block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
}

/// Property value shapes the placement grammar allows.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Single number: `min_width: 60`.
    Number(f32),
    /// Number pair: `offset: -28 92`.
    Pair(f32, f32),
    /// Bare identifier: `anchor: right_top`.
    Ident(String),
}
