use gqltoast_lib::config::TemplateConfig;
use gqltoast_lib::{EntityDecoder, ToastConfig};
use serde::Serialize;

use super::ConfigSource;
use crate::output::{print_fields_table, print_json, OutputFormat};

const DECODER_PROBE: &str = "bad query &amp; stop";
const DECODER_EXPECTED: &str = "bad query & stop";

#[derive(Serialize)]
struct Diagnostics {
    version: &'static str,
    config_source: String,
    decode_entities: bool,
    templates: TemplateConfig,
    decoder_check: DecoderCheck,
}

#[derive(Serialize)]
struct DecoderCheck {
    input: &'static str,
    output: String,
    passed: bool,
}

fn collect(config: &ToastConfig, source: &ConfigSource) -> Diagnostics {
    let output = config.decoder().decode(DECODER_PROBE).into_owned();
    let expected = if config.decode_entities {
        DECODER_EXPECTED
    } else {
        DECODER_PROBE
    };
    Diagnostics {
        version: env!("CARGO_PKG_VERSION"),
        config_source: source.to_string(),
        decode_entities: config.decode_entities,
        templates: config.templates.clone(),
        decoder_check: DecoderCheck {
            input: DECODER_PROBE,
            passed: output == expected,
            output,
        },
    }
}

fn fields(diag: &Diagnostics) -> Vec<(String, String)> {
    vec![
        ("version".to_string(), diag.version.to_string()),
        ("config".to_string(), diag.config_source.clone()),
        ("decode_entities".to_string(), diag.decode_entities.to_string()),
        ("template.network".to_string(), diag.templates.network.clone()),
        ("template.graphql".to_string(), diag.templates.graphql.clone()),
        ("template.general".to_string(), diag.templates.general.clone()),
        (
            "decoder_check".to_string(),
            format!(
                "{} ({:?} -> {:?})",
                if diag.decoder_check.passed { "ok" } else { "FAILED" },
                diag.decoder_check.input,
                diag.decoder_check.output
            ),
        ),
    ]
}

pub fn run(config: &ToastConfig, source: &ConfigSource, format: &OutputFormat) {
    let diag = collect(config, source);
    if !diag.decoder_check.passed {
        tracing::warn!("decoder self-check failed: {:?}", diag.decoder_check.output);
    }
    match format {
        OutputFormat::Text => {
            for (key, value) in fields(&diag) {
                println!("{}: {}", key, value);
            }
        }
        OutputFormat::Table => print_fields_table(&fields(&diag)),
        OutputFormat::Json => print_json(&diag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_decoder_check() {
        let diag = collect(&ToastConfig::default(), &ConfigSource::Defaults);
        assert!(diag.decoder_check.passed);
        assert_eq!(diag.decoder_check.output, "bad query & stop");
        assert_eq!(diag.config_source, "built-in defaults");
    }

    #[test]
    fn disabled_decoding_still_passes() {
        let config = ToastConfig {
            decode_entities: false,
            ..ToastConfig::default()
        };
        let diag = collect(&config, &ConfigSource::Defaults);
        assert!(diag.decoder_check.passed);
        assert_eq!(diag.decoder_check.output, DECODER_PROBE);
    }

    #[test]
    fn fields_list_every_template() {
        let diag = collect(&ToastConfig::default(), &ConfigSource::Defaults);
        let fields = fields(&diag);
        assert_eq!(fields.len(), 7);
        assert_eq!(
            fields[3],
            (
                "template.network".to_string(),
                "Network error: {message}".to_string()
            )
        );
        assert!(fields[6].1.starts_with("ok "));
    }

    #[test]
    fn json_shape() {
        let diag = collect(&ToastConfig::default(), &ConfigSource::Defaults);
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["decode_entities"], true);
        assert_eq!(value["templates"]["general"], "Error: {message}");
        assert_eq!(value["decoder_check"]["passed"], true);
    }
}
