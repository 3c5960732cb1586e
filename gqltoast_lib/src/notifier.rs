//! Notification sinks the reporter hands finished messages to.

use std::cell::{Cell, RefCell};
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Sequential identifier handed back for each toast, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub severity: Severity,
    pub text: String,
}

/// Anything that can show an error toast.
///
/// `Handle` is whatever the sink returns for a shown toast; the reporter
/// passes it back untouched.
pub trait Notifier {
    type Handle;

    fn error(&self, text: &str) -> Self::Handle;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    type Handle = N::Handle;

    fn error(&self, text: &str) -> Self::Handle {
        (**self).error(text)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    type Handle = N::Handle;

    fn error(&self, text: &str) -> Self::Handle {
        (**self).error(text)
    }
}

#[derive(Debug, Default)]
struct IdSequence(Cell<u64>);

impl IdSequence {
    fn next(&self) -> ToastId {
        let id = self.0.get() + 1;
        self.0.set(id);
        ToastId(id)
    }
}

/// Writes toasts as `tracing` events at the level matching their severity.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    ids: IdSequence,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&self, severity: Severity, text: &str) -> ToastId {
        let id = self.ids.next();
        match severity {
            Severity::Error => tracing::error!(toast_id = id.0, "{}", text),
            Severity::Warning => tracing::warn!(toast_id = id.0, "{}", text),
            Severity::Info | Severity::Success => {
                tracing::info!(toast_id = id.0, %severity, "{}", text)
            }
        }
        id
    }
}

impl Notifier for TracingNotifier {
    type Handle = ToastId;

    fn error(&self, text: &str) -> ToastId {
        self.notify(Severity::Error, text)
    }
}

/// Keeps every toast in memory, in the order shown.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    ids: IdSequence,
    toasts: RefCell<Vec<Toast>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&self, severity: Severity, text: &str) -> ToastId {
        let id = self.ids.next();
        self.toasts.borrow_mut().push(Toast {
            id,
            severity,
            text: text.to_string(),
        });
        id
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    /// Removes and returns everything recorded so far. Ids keep counting.
    pub fn take(&self) -> Vec<Toast> {
        self.toasts.take()
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

impl Notifier for MemoryNotifier {
    type Handle = ToastId;

    fn error(&self, text: &str) -> ToastId {
        self.notify(Severity::Error, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        assert!(notifier.is_empty());

        let first = notifier.error("one");
        let second = notifier.notify(Severity::Warning, "two");
        assert_eq!(first, ToastId(1));
        assert_eq!(second, ToastId(2));

        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].severity, Severity::Error);
        assert_eq!(toasts[0].text, "one");
        assert_eq!(toasts[1].severity, Severity::Warning);
    }

    #[test]
    fn take_drains_but_ids_continue() {
        let notifier = MemoryNotifier::new();
        notifier.error("a");
        assert_eq!(notifier.take().len(), 1);
        assert!(notifier.is_empty());
        assert_eq!(notifier.error("b"), ToastId(2));
        assert_eq!(notifier.len(), 1);
    }

    #[test]
    fn tracing_notifier_returns_sequential_ids() {
        let notifier = TracingNotifier::new();
        assert_eq!(notifier.error("boom"), ToastId(1));
        assert_eq!(notifier.notify(Severity::Info, "fyi"), ToastId(2));
    }

    #[test]
    fn references_and_boxes_forward() {
        let notifier = MemoryNotifier::new();
        let by_ref = &notifier;
        by_ref.error("via ref");
        let boxed: Box<dyn Notifier<Handle = ToastId>> = Box::new(MemoryNotifier::new());
        assert_eq!(boxed.error("via box"), ToastId(1));
        assert_eq!(notifier.toasts()[0].text, "via ref");
    }

    #[test]
    fn toast_serializes_flat() {
        let toast = Toast {
            id: ToastId(7),
            severity: Severity::Error,
            text: "Error: oops".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&toast).unwrap(),
            serde_json::json!({"id": 7, "severity": "error", "text": "Error: oops"})
        );
    }
}
