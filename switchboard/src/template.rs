//! URL templates (the RFC 6570 subset used by generated request builders).
//!
//! Supported expressions:
//!
//! | Expression   | Expansion                                         |
//! |--------------|---------------------------------------------------|
//! | `{name}`     | percent-encoded value                             |
//! | `{+name}`    | value with reserved characters kept (base URLs)   |
//! | `{?a,b}`     | `?a=1&b=2`, skipping undefined variables          |
//! | `{&a,b}`     | `&a=1&b=2`                                        |
//!
//! Variable names are matched literally, so a template may name a variable
//! `call%2Did` or `%24top` and the parameter map uses the same key. Query
//! expansion emits those names unchanged, which is how `$top` reaches the wire
//! as `%24top`.

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ConfigError;

/// Characters left alone in simple and query expansion.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters left alone in reserved (`+`) expansion.
const RESERVED: &AsciiSet = &UNRESERVED
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b'%');

/// A value bound to a template variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    /// A single string value.
    String(String),
    /// An integer, rendered in decimal.
    Integer(i64),
    /// A boolean, rendered as `true`/`false`.
    Boolean(bool),
    /// A list of values; empty lists count as undefined.
    List(Vec<String>),
}

impl TemplateValue {
    fn is_defined(&self) -> bool {
        !matches!(self, Self::List(items) if items.is_empty())
    }

    fn items(&self) -> Vec<String> {
        match self {
            Self::String(s) => vec![s.clone()],
            Self::Integer(i) => vec![i.to_string()],
            Self::Boolean(b) => vec![b.to_string()],
            Self::List(items) => items.clone(),
        }
    }
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.items().join(","))
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&String> for TemplateValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i32> for TemplateValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for TemplateValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for TemplateValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Simple,
    Reserved,
    Query,
    QueryContinuation,
}

impl Operator {
    fn encode_set(self) -> &'static AsciiSet {
        match self {
            Self::Reserved => RESERVED,
            _ => UNRESERVED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct VarSpec {
    name: String,
    explode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Expression {
        operator: Operator,
        variables: Vec<VarSpec>,
    },
}

/// A parsed URL template.
///
/// ## Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use switchboard::{TemplateValue, UrlTemplate};
///
/// let template = UrlTemplate::parse("{+baseurl}/calls/{call%2Did}{?%24select}").unwrap();
/// let mut values = BTreeMap::new();
/// values.insert("baseurl".to_string(), TemplateValue::from("https://graph.microsoft.com/v1.0"));
/// values.insert("call%2Did".to_string(), TemplateValue::from("a b"));
/// values.insert("%24select".to_string(), TemplateValue::List(vec!["id".into(), "state".into()]));
///
/// assert_eq!(
///     template.expand(&values),
///     "https://graph.microsoft.com/v1.0/calls/a%20b?%24select=id,state"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    raw: String,
    parts: Vec<Part>,
}

impl UrlTemplate {
    /// Parses a template.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidPathTemplate`] for unbalanced braces,
    /// empty expressions, empty variable names or prefix modifiers.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut parts = Vec::new();
        let mut rest = raw;

        while !rest.is_empty() {
            match rest.find(['{', '}']) {
                None => {
                    parts.push(Part::Literal(rest.to_string()));
                    break;
                }
                Some(idx) if rest.as_bytes()[idx] == b'}' => {
                    return Err(ConfigError::invalid_template(format!(
                        "unexpected '}}' in {raw}"
                    )));
                }
                Some(idx) => {
                    if idx > 0 {
                        parts.push(Part::Literal(rest[..idx].to_string()));
                    }
                    let after = &rest[idx + 1..];
                    let close = after.find('}').ok_or_else(|| {
                        ConfigError::invalid_template(format!("unclosed expression in {raw}"))
                    })?;
                    parts.push(parse_expression(&after[..close], raw)?);
                    rest = &after[close + 1..];
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            parts,
        })
    }

    /// Returns the template text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns every variable name in order of appearance.
    pub fn variables(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Expression { variables, .. } => Some(variables),
                Part::Literal(_) => None,
            })
            .flatten()
            .map(|var| var.name.as_str())
            .collect()
    }

    /// Expands the template. Variables missing from `values` are undefined
    /// and produce nothing.
    pub fn expand(&self, values: &BTreeMap<String, TemplateValue>) -> String {
        let mut out = String::with_capacity(self.raw.len());
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Expression {
                    operator,
                    variables,
                } => expand_expression(&mut out, *operator, variables, values),
            }
        }
        out
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_expression(body: &str, raw: &str) -> Result<Part, ConfigError> {
    let (operator, list) = match body.chars().next() {
        Some('+') => (Operator::Reserved, &body[1..]),
        Some('?') => (Operator::Query, &body[1..]),
        Some('&') => (Operator::QueryContinuation, &body[1..]),
        Some(_) => (Operator::Simple, body),
        None => {
            return Err(ConfigError::invalid_template(format!(
                "empty expression in {raw}"
            )))
        }
    };

    let variables = list
        .split(',')
        .map(|varspec| {
            let (name, explode) = match varspec.strip_suffix('*') {
                Some(name) => (name, true),
                None => (varspec, false),
            };
            if name.is_empty() {
                return Err(ConfigError::invalid_template(format!(
                    "empty variable name in {raw}"
                )));
            }
            if name.contains(':') {
                return Err(ConfigError::invalid_template(format!(
                    "prefix modifier on '{name}' is not supported"
                )));
            }
            Ok(VarSpec {
                name: name.to_string(),
                explode,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Part::Expression {
        operator,
        variables,
    })
}

fn expand_expression(
    out: &mut String,
    operator: Operator,
    variables: &[VarSpec],
    values: &BTreeMap<String, TemplateValue>,
) {
    let set = operator.encode_set();
    let encode = |s: &str| utf8_percent_encode(s, set).to_string();

    let defined = variables
        .iter()
        .filter_map(|var| values.get(&var.name).map(|value| (var, value)))
        .filter(|(_, value)| value.is_defined());

    match operator {
        Operator::Simple | Operator::Reserved => {
            let rendered: Vec<String> = defined
                .flat_map(|(_, value)| value.items())
                .map(|item| encode(&item))
                .collect();
            out.push_str(&rendered.join(","));
        }
        Operator::Query | Operator::QueryContinuation => {
            let mut pairs = Vec::new();
            for (var, value) in defined {
                let items: Vec<String> = value.items().iter().map(|i| encode(i)).collect();
                if var.explode {
                    pairs.extend(items.into_iter().map(|item| format!("{}={item}", var.name)));
                } else {
                    pairs.push(format!("{}={}", var.name, items.join(",")));
                }
            }
            if !pairs.is_empty() {
                out.push(if operator == Operator::Query { '?' } else { '&' });
                out.push_str(&pairs.join("&"));
            }
        }
    }
}
