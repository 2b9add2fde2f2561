//! Where boundary views send the errors they display.
//!
//! The sink is looked up from the Leptos context so the server, the browser and
//! tests can each install their own. Without one, [`TracingSink`] is used.

use std::sync::Arc;

use leptos::prelude::*;

use crate::types::RenderError;

#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink: Send + Sync {
    /// Receives the error exactly as the host produced it.
    fn report(&self, error: &RenderError);
}

/// Logs through `tracing` on the server and the browser console otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, error: &RenderError) {
        cfg_if::cfg_if! {
            if #[cfg(feature = "ssr")] {
                tracing::error!(
                    error.message = %error.message,
                    error.digest = ?error.digest,
                    "Unhandled render error"
                );
            } else {
                leptos::logging::error!("Unhandled render error: {:?}", error);
            }
        }
    }
}

#[derive(Clone)]
struct SharedSink(Arc<dyn ErrorSink>);

/// Installs `sink` for every boundary view rendered under the current owner.
pub fn provide_error_sink(sink: Arc<dyn ErrorSink>) {
    provide_context(SharedSink(sink));
}

#[must_use]
pub fn use_error_sink() -> Arc<dyn ErrorSink> {
    use_context::<SharedSink>().map_or_else(|| Arc::new(TracingSink) as Arc<dyn ErrorSink>, |shared| shared.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_tracing_sink_accepts_errors_without_subscriber() {
        TracingSink.report(&RenderError::new("boom").with_digest("d1"));
    }

    #[test]
    fn test_default_sink_without_context() {
        let owner = Owner::new();
        owner.with(|| {
            let sink = use_error_sink();
            sink.report(&RenderError::new("falls back to tracing"));
        });
    }

    #[test]
    fn test_provided_sink_is_used() {
        let mut mock = MockErrorSink::new();
        mock.expect_report()
            .withf(|error| error.message == "boom")
            .times(1)
            .return_const(());

        let owner = Owner::new();
        owner.with(|| {
            provide_error_sink(Arc::new(mock));
            use_error_sink().report(&RenderError::new("boom"));
        });
    }
}
