//! Ordered PowerShell parameter directives.
//!
//! Directives are collected as `(flag, value)` pairs and rendered once, so
//! token order and spacing are decided in a single place.

use std::fmt;

/// A parameter value as it appears on a PowerShell command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue {
    /// Rendered verbatim: `40`.
    Integer(i64),
    /// Rendered single-quoted with embedded quotes doubled: `'it''s'`.
    Quoted(String),
    /// Rendered as a variable reference: `$VMHost`.
    Variable(String),
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Quoted(s) => write!(f, "{}", quote(s)),
            Self::Variable(name) => write!(f, "${}", name),
        }
    }
}

/// Single-quotes a string for PowerShell, doubling embedded single quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// An ordered list of `-Flag value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    params: Vec<(String, DirectiveValue)>,
}

impl Directive {
    /// Returns the collected pairs in insertion order.
    pub fn params(&self) -> &[(String, DirectiveValue)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders every pair as `-Flag value ` (one trailing space each).
    ///
    /// An empty directive renders as the empty string.
    pub fn render(&self) -> String {
        self.params
            .iter()
            .map(|(flag, value)| format!("-{} {} ", flag, value))
            .collect()
    }
}

/// Builder for assembling directives consistently across compilers.
#[derive(Debug, Default)]
pub struct DirectiveBuilder {
    params: Vec<(String, DirectiveValue)>,
}

impl DirectiveBuilder {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Append a flag with a value.
    pub fn push(&mut self, flag: &str, value: DirectiveValue) {
        self.params.push((flag.to_string(), value));
    }

    /// Append an integer flag if the value is present.
    pub fn push_integer(&mut self, flag: &str, value: Option<i64>) {
        if let Some(n) = value {
            self.push(flag, DirectiveValue::Integer(n));
        }
    }

    /// Append an integer flag if the value is present and differs from `sentinel`.
    ///
    /// Used for settings where a specific value means "not configured".
    pub fn push_integer_unless(&mut self, flag: &str, value: Option<i64>, sentinel: i64) {
        self.push_integer(flag, value.filter(|n| *n != sentinel));
    }

    /// Append a quoted string flag if the value is present and not empty.
    pub fn push_quoted(&mut self, flag: &str, value: Option<&str>) {
        if let Some(s) = value.filter(|s| !s.is_empty()) {
            self.push(flag, DirectiveValue::Quoted(s.to_string()));
        }
    }

    /// Append a variable reference flag.
    pub fn push_variable(&mut self, flag: &str, name: &str) {
        self.push(flag, DirectiveValue::Variable(name.to_string()));
    }

    /// Return the collected directive.
    pub fn into_directive(self) -> Directive {
        Directive {
            params: self.params,
        }
    }
}
