use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use super::{GraphError, NetworkFailure};
use crate::Error;

/// The structured error a GraphQL data layer hands to the UI.
///
/// Built once at the boundary and read-only afterwards. At most one of the
/// three parts decides how the error is presented: a network failure wins
/// over graph errors, which win over the summary message.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEnvelope {
    network_failure: Option<NetworkFailure>,
    graph_errors: Vec<GraphError>,
    summary: String,
}

/// Wire shape as produced by the GraphQL client. Every field is loose here
/// and checked in `from_wire`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEnvelope {
    #[serde(default)]
    network_error: Option<Value>,

    #[serde(default, rename = "graphQLErrors")]
    graphql_errors: Option<Vec<Value>>,

    #[serde(default)]
    message: Option<Value>,
}

impl ErrorEnvelope {
    pub fn new(
        network_failure: Option<NetworkFailure>,
        graph_errors: Vec<GraphError>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            network_failure,
            graph_errors,
            summary: summary.into(),
        }
    }

    /// Envelope for a transport failure; the summary is the failure's text.
    pub fn from_network_failure(failure: NetworkFailure) -> Self {
        let summary = failure.display_text().into_owned();
        Self::new(Some(failure), Vec::new(), summary)
    }

    /// Envelope for a failed response; the summary joins the error messages
    /// one per line.
    pub fn from_graph_errors(graph_errors: Vec<GraphError>) -> Self {
        let summary = graph_errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(None, graph_errors, summary)
    }

    /// Parses and validates the GraphQL client's JSON error shape.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let wire: WireEnvelope = serde_json::from_str(json).map_err(|e| {
            tracing::warn!("Failed to parse error envelope: {}", e);
            Error::Malformed(e)
        })?;
        Self::from_wire(wire)
    }

    /// Validates an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        let wire: WireEnvelope = serde_json::from_value(value).map_err(|e| {
            tracing::warn!("Failed to read error envelope: {}", e);
            Error::Malformed(e)
        })?;
        Self::from_wire(wire)
    }

    pub fn network_failure(&self) -> Option<&NetworkFailure> {
        self.network_failure.as_ref()
    }

    pub fn graph_errors(&self) -> &[GraphError] {
        &self.graph_errors
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl ErrorEnvelope {
    fn from_wire(wire: WireEnvelope) -> Result<Self, Error> {
        let summary = match wire.message {
            Some(Value::String(s)) => s,
            _ => {
                tracing::warn!("Error envelope rejected: no summary message");
                return Err(Error::MissingSummary);
            }
        };

        let graph_errors = wire
            .graphql_errors
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<GraphError>(value).map_err(|e| {
                    tracing::warn!("Invalid GraphQL error at index {}: {}", index, e);
                    Error::InvalidGraphError {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            network_failure: wire.network_error.map(NetworkFailure::from_value),
            graph_errors,
            summary,
        })
    }
}

impl FromStr for ErrorEnvelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
