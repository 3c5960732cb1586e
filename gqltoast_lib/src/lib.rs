//! Library layer for gqltoast: turns GraphQL client errors into toast notifications.
//!
//! Wraps the `gqltoast_envelope` boundary types with HTML entity decoding,
//! three-way classification, message templates and a notifier abstraction.

pub mod classify;
pub mod config;
pub mod decode;
pub mod error;
pub mod notifier;
pub mod reporter;
pub mod template;

pub use gqltoast_envelope;
pub use gqltoast_envelope::{ErrorEnvelope, GraphError, NetworkFailure};

pub use classify::{classify, Category, Classification};
pub use config::ToastConfig;
pub use decode::{decode_entities, EntityDecoder, HtmlEntityDecoder, PlainDecoder};
pub use error::ToastError;
pub use notifier::{MemoryNotifier, Notifier, Severity, Toast, ToastId, TracingNotifier};
pub use reporter::{notify_error, ErrorReporter, Report};
pub use template::{MessageTemplates, Template, TemplateError};
