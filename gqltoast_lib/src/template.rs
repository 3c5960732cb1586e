//! `{name}` string templates and the three toast message templates.

use regex::Regex;
use thiserror::Error;

use crate::classify::Category;

/// Placeholder every message template may use for the error detail.
pub const MESSAGE_PLACEHOLDER: &str = "message";

pub const DEFAULT_NETWORK_PREFIX: &str = "Network error: ";
pub const DEFAULT_GRAPHQL_PREFIX: &str = "GraphQL error: ";
pub const DEFAULT_GENERAL_PREFIX: &str = "Error: ";

const TOKEN_PATTERN: &str = r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unbalanced brace at byte {offset}")]
    UnbalancedBrace { offset: usize },
    #[error("No value for placeholder '{0}'")]
    MissingValue(String),
    #[error("Unknown placeholder '{0}'")]
    UnknownPlaceholder(String),
    #[error("Invalid placeholder pattern: {0}")]
    Pattern(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template. `{name}` is a placeholder, `{{` and `}}` are literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let re = Regex::new(TOKEN_PATTERN).map_err(|e| TemplateError::Pattern(e.to_string()))?;

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;
        for caps in re.captures_iter(source) {
            let Some(token) = caps.get(0) else { continue };
            push_literal(&mut literal, source, last, token.start())?;
            match (token.as_str(), caps.get(1)) {
                ("{{", _) => literal.push('{'),
                ("}}", _) => literal.push('}'),
                (_, Some(name)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name.as_str().to_string()));
                }
                _ => {}
            }
            last = token.end();
        }
        push_literal(&mut literal, source, last, source.len())?;
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// `prefix` followed by the `{message}` placeholder. `prefix` is taken
    /// literally.
    pub fn prefixed(prefix: &str) -> Self {
        let escaped = prefix.replace('{', "{{").replace('}', "}}");
        let mut segments = Vec::with_capacity(2);
        if !prefix.is_empty() {
            segments.push(Segment::Literal(prefix.to_string()));
        }
        segments.push(Segment::Placeholder(MESSAGE_PLACEHOLDER.to_string()));
        Self {
            source: format!("{}{{{}}}", escaped, MESSAGE_PLACEHOLDER),
            segments,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in order of appearance, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitutes each placeholder with the value of the same name.
    pub fn render<'a, I>(&self, vars: I) -> Result<String, TemplateError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let vars: Vec<(&str, &str)> = vars.into_iter().collect();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = vars
                        .iter()
                        .rev()
                        .find(|(key, _)| *key == name.as_str())
                        .map(|(_, value)| *value)
                        .ok_or_else(|| TemplateError::MissingValue(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }

    /// Renders with every placeholder replaced by `value`.
    pub(crate) fn fill(&self, value: &str) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(text) => text.as_str(),
                Segment::Placeholder(_) => value,
            })
            .collect()
    }
}

fn push_literal(
    literal: &mut String,
    source: &str,
    start: usize,
    end: usize,
) -> Result<(), TemplateError> {
    let gap = &source[start..end];
    if let Some(pos) = gap.find(['{', '}']) {
        return Err(TemplateError::UnbalancedBrace { offset: start + pos });
    }
    literal.push_str(gap);
    Ok(())
}

/// Convenience for one-off rendering.
pub fn render_str<'a, I>(template: &str, vars: I) -> Result<String, TemplateError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    Template::parse(template)?.render(vars)
}

/// One template per category. Only `{message}` is allowed in each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    network: Template,
    graphql: Template,
    general: Template,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            network: Template::prefixed(DEFAULT_NETWORK_PREFIX),
            graphql: Template::prefixed(DEFAULT_GRAPHQL_PREFIX),
            general: Template::prefixed(DEFAULT_GENERAL_PREFIX),
        }
    }
}

impl MessageTemplates {
    pub fn new(network: &str, graphql: &str, general: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            network: message_template(network)?,
            graphql: message_template(graphql)?,
            general: message_template(general)?,
        })
    }

    pub fn for_category(&self, category: Category) -> &Template {
        match category {
            Category::Network => &self.network,
            Category::GraphQl => &self.graphql,
            Category::General => &self.general,
        }
    }
}

fn message_template(source: &str) -> Result<Template, TemplateError> {
    let template = Template::parse(source)?;
    if let Some(name) = template.placeholders().find(|n| *n != MESSAGE_PLACEHOLDER) {
        return Err(TemplateError::UnknownPlaceholder(name.to_string()));
    }
    Ok(template)
}
