//! Classifies error envelopes and shows exactly one error toast for each.

use gqltoast_envelope::ErrorEnvelope;
use serde::Serialize;

use crate::classify::{build_classification, Classification};
use crate::decode::{EntityDecoder, HtmlEntityDecoder};
use crate::notifier::Notifier;
use crate::template::MessageTemplates;

/// Outcome of a report: what was shown and the notifier's handle for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<H> {
    pub classification: Classification,
    pub handle: H,
}

/// Routes error envelopes to a notifier.
///
/// Holds no per-call state; every `report` is independent and makes one
/// `Notifier::error` call.
pub struct ErrorReporter<N, D = HtmlEntityDecoder> {
    notifier: N,
    decoder: D,
    templates: MessageTemplates,
}

impl<N: Notifier> ErrorReporter<N> {
    /// Reporter with HTML entity decoding and the default messages.
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            decoder: HtmlEntityDecoder,
            templates: MessageTemplates::default(),
        }
    }
}

impl<N: Notifier, D: EntityDecoder> ErrorReporter<N, D> {
    pub fn with_decoder<D2: EntityDecoder>(self, decoder: D2) -> ErrorReporter<N, D2> {
        ErrorReporter {
            notifier: self.notifier,
            decoder,
            templates: self.templates,
        }
    }

    pub fn with_templates(mut self, templates: MessageTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    /// Computes the toast without showing it.
    pub fn classify(&self, envelope: &ErrorEnvelope) -> Classification {
        build_classification(envelope, &self.decoder, &self.templates)
    }

    pub fn report_detailed(&self, envelope: &ErrorEnvelope) -> Report<N::Handle> {
        let classification = self.classify(envelope);
        let handle = self.notifier.error(&classification.text);
        Report {
            classification,
            handle,
        }
    }

    /// Shows the toast for `envelope` and returns the notifier's handle.
    pub fn report(&self, envelope: &ErrorEnvelope) -> N::Handle {
        self.report_detailed(envelope).handle
    }
}

/// One-shot report with the default decoder and messages.
pub fn notify_error<N: Notifier + ?Sized>(envelope: &ErrorEnvelope, notifier: &N) -> N::Handle {
    let classification =
        build_classification(envelope, &HtmlEntityDecoder, &MessageTemplates::default());
    notifier.error(&classification.text)
}
