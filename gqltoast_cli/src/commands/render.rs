use anyhow::Result;
use clap::Args;
use gqltoast_lib::Template;
use serde::Serialize;

use crate::output::{print_fields_table, print_json, OutputFormat};

#[derive(Args)]
pub struct RenderArgs {
    /// Template text, e.g. "Hello {name}". Use {{ and }} for literal braces
    #[arg(long)]
    pub template: String,

    /// Placeholder value as key=value (repeatable)
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
}

#[derive(Serialize)]
struct Rendered<'a> {
    template: &'a str,
    placeholders: Vec<&'a str>,
    rendered: String,
}

pub fn run(args: &RenderArgs, format: &OutputFormat) -> Result<()> {
    let template = Template::parse(&args.template)?;
    let rendered = template.render(args.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;

    match format {
        OutputFormat::Text => println!("{}", rendered),
        OutputFormat::Table => print_fields_table(&[
            ("Template".to_string(), template.source().to_string()),
            ("Rendered".to_string(), rendered),
        ]),
        OutputFormat::Json => print_json(&Rendered {
            template: template.source(),
            placeholders: template.placeholders().collect(),
            rendered,
        }),
    }
    Ok(())
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_splits_on_first_equals() {
        assert_eq!(
            parse_var("query=a=b").unwrap(),
            ("query".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn parse_var_allows_empty_value() {
        assert_eq!(parse_var("x=").unwrap(), ("x".to_string(), String::new()));
    }

    #[test]
    fn parse_var_rejects_missing_equals() {
        assert!(parse_var("novalue").is_err());
        assert!(parse_var(" =v").is_err());
    }
}
