//! Server-side rendering tests for the route boundary views.
//!
//! Each view is rendered to an HTML string inside a fresh reactive owner, the
//! same way the server renders them into a response body.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use app::boundary::{ErrorProps, ErrorView, LoadingView, NotFoundView, Renders};
use app::components::{error_view, not_found_view};
use app::sink::{ErrorSink, provide_error_sink};
use app::types::{RenderError, Reset};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml as _;

fn render_html(render: impl FnOnce() -> AnyView) -> String {
    let owner = Owner::new();
    owner.with(|| render().to_html())
}

#[cfg(test)]
mod error_view_tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink(std::sync::Mutex<Vec<RenderError>>);

    impl ErrorSink for RecordingSink {
        fn report(&self, error: &RenderError) {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(error.clone());
            }
        }
    }

    #[test]
    fn test_boom_is_rendered_and_reported_once() {
        let sink = Arc::new(RecordingSink::default());

        let owner = Owner::new();
        let html = owner.with(|| {
            provide_error_sink(Arc::clone(&sink) as Arc<dyn ErrorSink>);
            ErrorView::render(ErrorProps::fixed(RenderError::new("boom"), Reset::noop())).to_html()
        });

        assert!(html.contains("Something went wrong!"));
        assert!(html.contains("Try again"));
        let seen = sink.0.lock().map(|seen| seen.clone()).unwrap_or_default();
        assert_eq!(seen, vec![RenderError::new("boom")]);
    }

    #[test]
    fn test_try_again_increments_reset_count_by_one() {
        let calls = Arc::new(AtomicUsize::new(0));
        let reset = Reset::new({
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        });

        let before = calls.load(Ordering::SeqCst);
        error_view::retry(&reset);
        assert_eq!(calls.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_error_card_has_heading_and_retry() {
        let html = render_html(|| {
            ErrorView::render(ErrorProps::fixed(RenderError::new("boom"), Reset::noop()))
        });

        assert!(html.contains(error_view::HEADING), "missing heading in {html}");
        assert!(html.contains(error_view::RETRY_LABEL), "missing retry label in {html}");
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("class=\"card\""));
    }

    #[test]
    fn test_error_message_is_not_shown_to_user() {
        let html = render_html(|| {
            ErrorView::render(ErrorProps::fixed(
                RenderError::new("database password rejected"),
                Reset::noop(),
            ))
        });

        assert!(!html.contains("database password rejected"));
    }

    #[test]
    fn test_rendering_does_not_trigger_reset() {
        let calls = Arc::new(AtomicUsize::new(0));
        let reset = Reset::new({
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        });

        let _html = render_html(|| {
            let props = ErrorProps::fixed(RenderError::new("boom"), reset.clone());
            ErrorView::render(props)
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        reset.trigger();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

#[cfg(test)]
mod loading_view_tests {
    use super::*;

    #[test]
    fn test_two_placeholder_blocks_and_no_controls() {
        let html = render_html(|| LoadingView::render(()));

        assert!(html.contains("animate-pulse"));
        assert_eq!(html.matches("bg-gray-300").count(), 2);
        assert!(!html.contains("<button"));
        assert!(!html.contains("<a "));
        assert!(!html.contains("<input"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = render_html(|| LoadingView::render(()));
        let second = render_html(|| LoadingView::render(()));
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod not_found_view_tests {
    use super::*;

    #[test]
    fn test_heading_and_message() {
        let html = render_html(|| NotFoundView::render(()));

        assert!(html.contains("Page Not Found"));
        assert!(html.contains("Could not find requested resource"));
        assert_eq!(not_found_view::HEADING, "Page Not Found");
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = render_html(|| NotFoundView::render(()));
        let second = render_html(|| NotFoundView::render(()));
        assert_eq!(first, second);
    }
}
