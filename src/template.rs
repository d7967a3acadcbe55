//! A tiny output template language with three fields:
//!
//! - `{value}`: the truncated count, e.g. `2`
//! - `{shortUnit}`: the unit symbol, e.g. `d`
//! - `{longUnit}`: the unit word, pluralized when the value is above one, e.g. `days`
//!
//! `{{` and `}}` produce literal braces. Templates are checked when parsed,
//! so rendering never fails.

use std::fmt;
use std::str::FromStr;

use crate::error::TemplateError;
use crate::units::Unit;

/// What a template is rendered from: the chosen bucket and its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringerData {
    pub value: u128,
    pub unit: Unit,
}

impl StringerData {
    pub fn short_unit(&self) -> &'static str {
        self.unit.short()
    }

    pub fn long_unit(&self) -> String {
        self.unit.long_for(self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value,
    ShortUnit,
    LongUnit,
}

/// A compiled output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub const DEFAULT_SOURCE: &'static str = "{value}{shortUnit}";

    pub fn parse(source: &str) -> Result<Template, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().map(|&(_, c)| c) == Some('{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().map(|&(_, c)| c) == Some('}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::UnexpectedClosingBrace { offset }),
                '{' => {
                    let start = offset + 1;
                    let end = source[start..]
                        .find('}')
                        .map(|i| start + i)
                        .ok_or(TemplateError::UnclosedBrace { offset })?;
                    let field = match source[start..end].trim() {
                        "value" => Segment::Value,
                        "shortUnit" => Segment::ShortUnit,
                        "longUnit" => Segment::LongUnit,
                        name => {
                            return Err(TemplateError::UnknownField {
                                name: name.to_string(),
                            })
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(field);
                    while chars.next_if(|&(i, _)| i <= end).is_some() {}
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template {
            source: source.to_string(),
            segments,
        })
    }

    /// The text this template was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render(&self, data: &StringerData) -> String {
        Rendered {
            template: self,
            data,
        }
        .to_string()
    }

    pub(crate) fn render_to<W: fmt::Write>(&self, out: &mut W, data: &StringerData) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.write_str(text)?,
                Segment::Value => write!(out, "{}", data.value)?,
                Segment::ShortUnit => out.write_str(data.short_unit())?,
                Segment::LongUnit => out.write_str(&data.long_unit())?,
            }
        }
        Ok(())
    }
}

struct Rendered<'a> {
    template: &'a Template,
    data: &'a StringerData,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.template.render_to(f, self.data)
    }
}

impl Default for Template {
    fn default() -> Self {
        Template {
            source: Template::DEFAULT_SOURCE.to_string(),
            segments: vec![Segment::Value, Segment::ShortUnit],
        }
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Template {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Template {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = <String as serde::Deserialize>::deserialize(deserializer)?;
        Template::parse(&source).map_err(serde::de::Error::custom)
    }
}
