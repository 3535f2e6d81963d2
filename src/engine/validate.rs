//! Declarative validation of a single form value.
//!
//! A [`Validatable`] bundles one value with the optional rules it must
//! satisfy. Rules that are absent are skipped; rules that do not apply to the
//! value's kind (length rules on numbers, range rules on text) are skipped too.

use serde::Serialize;
use std::fmt;

/// Runtime kind of a value under validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// A rule that can reject a value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Every present rule the value breaks, in rule order
    pub fn failures(&self) -> Vec<Rule> {
        let mut failed = Vec::new();
        let value = &self.value;

        if self.required && value.to_string().trim().is_empty() {
            failed.push(Rule::Required);
        }

        if let Value::Text(text) = value {
            let len = text_length(text);
            if let Some(min_len) = self.min_length {
                if len < min_len {
                    failed.push(Rule::MinLength(min_len));
                }
            }
            if let Some(max_len) = self.max_length {
                if len > max_len {
                    failed.push(Rule::MaxLength(max_len));
                }
            }
        }

        if let Value::Number(n) = value {
            // NaN fails any bound that is present
            if let Some(min) = self.min {
                if n.is_nan() || *n < min {
                    failed.push(Rule::Min(min));
                }
            }
            if let Some(max) = self.max {
                if n.is_nan() || *n > max {
                    failed.push(Rule::Max(max));
                }
            }
        }

        failed
    }
}

/// Length as a form field reports it: UTF-16 code units, so characters
/// outside the Basic Multilingual Plane count twice.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Check a value against all of its present rules.
pub fn validate(input: &Validatable) -> bool {
    input.failures().is_empty()
}
