//! Three-way classification of error envelopes.

use std::borrow::Cow;
use std::fmt;

use gqltoast_envelope::ErrorEnvelope;
use serde::Serialize;

use crate::decode::EntityDecoder;
use crate::template::MessageTemplates;

/// Which part of the envelope the user is told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Network,
    #[serde(rename = "graphql")]
    GraphQl,
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Network => "network",
            Self::GraphQl => "graphql",
            Self::General => "general",
        };
        f.write_str(s)
    }
}

/// The notification computed for one envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub text: String,
}

/// Network failure, then non-empty graph errors, then the summary.
pub fn classify(envelope: &ErrorEnvelope) -> Category {
    if envelope.network_failure().is_some() {
        Category::Network
    } else if !envelope.graph_errors().is_empty() {
        Category::GraphQl
    } else {
        Category::General
    }
}

/// Classifies `envelope` and renders the matching template.
///
/// Network failure text is shown as-is; the summary is entity-decoded first.
pub fn build_classification<D: EntityDecoder + ?Sized>(
    envelope: &ErrorEnvelope,
    decoder: &D,
    templates: &MessageTemplates,
) -> Classification {
    let category = classify(envelope);
    let detail: Cow<'_, str> = match envelope.network_failure() {
        Some(failure) => failure.display_text(),
        None => decoder.decode(envelope.summary()),
    };
    let text = templates.for_category(category).fill(&detail);
    tracing::debug!(%category, "classified error envelope");
    Classification { category, text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{HtmlEntityDecoder, PlainDecoder};
    use gqltoast_envelope::{GraphError, NetworkFailure};

    fn build(envelope: &ErrorEnvelope) -> Classification {
        build_classification(envelope, &HtmlEntityDecoder, &MessageTemplates::default())
    }

    #[test]
    fn network_failure_scenario() {
        let envelope = ErrorEnvelope::new(Some(NetworkFailure::new("timeout")), vec![], "timeout");
        let result = build(&envelope);
        assert_eq!(result.category, Category::Network);
        assert_eq!(result.text, "Network error: timeout");
    }

    #[test]
    fn graphql_error_scenario() {
        let envelope = ErrorEnvelope::new(None, vec![GraphError::new("bad query")], "bad query &amp; stop");
        let result = build(&envelope);
        assert_eq!(result.category, Category::GraphQl);
        assert_eq!(result.text, "GraphQL error: bad query & stop");
    }

    #[test]
    fn general_error_scenario() {
        let envelope = ErrorEnvelope::new(None, vec![], "oops");
        let result = build(&envelope);
        assert_eq!(result.category, Category::General);
        assert_eq!(result.text, "Error: oops");
    }

    #[test]
    fn network_wins_over_graph_errors() {
        let graph_sets = [
            vec![],
            vec![GraphError::new("a")],
            vec![GraphError::new("a"), GraphError::new("b")],
        ];
        for graph_errors in graph_sets {
            let envelope = ErrorEnvelope::new(
                Some(NetworkFailure::new("offline")),
                graph_errors,
                "summary &amp; more",
            );
            let result = build(&envelope);
            assert_eq!(result.category, Category::Network);
            assert!(result.text.starts_with("Network error: "));
            assert_eq!(result.text, "Network error: offline");
        }
    }

    #[test]
    fn graph_errors_use_summary_not_error_messages() {
        let summaries = ["plain", "a &lt; b", "&quot;q&quot;", ""];
        for summary in summaries {
            let envelope = ErrorEnvelope::new(None, vec![GraphError::new("ignored")], summary);
            let result = build(&envelope);
            assert!(result.text.starts_with("GraphQL error: "));
            assert!(result.text.ends_with(HtmlEntityDecoder.decode(summary).as_ref()));
            assert!(!result.text.contains("ignored"));
        }
    }

    #[test]
    fn general_errors_decode_summary() {
        let envelope = ErrorEnvelope::new(None, vec![], "it&#39;s &lt;broken&gt;");
        assert_eq!(build(&envelope).text, "Error: it's <broken>");
    }

    #[test]
    fn network_text_is_not_decoded() {
        let envelope = ErrorEnvelope::from_network_failure(NetworkFailure::new("a &amp; b"));
        assert_eq!(build(&envelope).text, "Network error: a &amp; b");
    }

    #[test]
    fn plain_decoder_keeps_entities() {
        let envelope = ErrorEnvelope::new(None, vec![], "x &amp; y");
        let result = build_classification(&envelope, &PlainDecoder, &MessageTemplates::default());
        assert_eq!(result.text, "Error: x &amp; y");
    }

    #[test]
    fn custom_templates_are_used() {
        let templates = MessageTemplates::new(
            "Offline ({message})",
            "Query failed: {message}",
            "{message}",
        )
        .unwrap();
        let envelope = ErrorEnvelope::new(None, vec![], "oops");
        let result = build_classification(&envelope, &HtmlEntityDecoder, &templates);
        assert_eq!(result.text, "oops");

        let envelope = ErrorEnvelope::from_network_failure(NetworkFailure::new("dns"));
        let result = build_classification(&envelope, &HtmlEntityDecoder, &templates);
        assert_eq!(result.text, "Offline (dns)");
    }

    #[test]
    fn category_display_and_serde_agree() {
        for category in [Category::Network, Category::GraphQl, Category::General] {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json.as_str(), Some(category.to_string().as_str()));
        }
    }
}
