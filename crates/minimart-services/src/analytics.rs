//! # Analytics
//!
//! Page rendering with view tracking.
//!
//! Tracking is fire-and-forget: a lost page view must never break a page.
//! The tracker is therefore a plain synchronous seam the renderer calls
//! before returning.

use tracing::debug;

/// Path recorded for the home page.
pub const HOME_PATH: &str = "/home";

// =============================================================================
// Tracker Seam
// =============================================================================

/// External page-view collector.
pub trait PageViewTracker {
    /// Records one view of `path`.
    fn page_view(&self, path: &str);
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the home page and records the view.
///
/// ## Example
/// ```rust
/// use minimart_services::analytics::{render_home_page, PageViewTracker};
///
/// struct NullTracker;
/// impl PageViewTracker for NullTracker {
///     fn page_view(&self, _path: &str) {}
/// }
///
/// # async fn demo() {
/// let html = render_home_page(&NullTracker).await;
/// assert!(html.contains("content"));
/// # }
/// ```
pub async fn render_home_page<T: PageViewTracker>(tracker: &T) -> String {
    tracker.page_view(HOME_PATH);
    debug!(path = HOME_PATH, "rendered home page");
    "<div>content</div>".to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Tracker stand-in recording every view.
    #[derive(Default)]
    struct RecordingTracker {
        views: Mutex<Vec<String>>,
    }

    impl PageViewTracker for RecordingTracker {
        fn page_view(&self, path: &str) {
            self.views.lock().unwrap().push(path.to_string());
        }
    }

    #[tokio::test]
    async fn test_renders_content() {
        let tracker = RecordingTracker::default();
        let html = render_home_page(&tracker).await;
        assert!(html.to_lowercase().contains("content"));
    }

    #[tokio::test]
    async fn test_records_home_page_view() {
        let tracker = RecordingTracker::default();
        render_home_page(&tracker).await;

        let views = tracker.views.lock().unwrap();
        assert_eq!(views.as_slice(), &[HOME_PATH.to_string()]);
    }
}
