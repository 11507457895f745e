//! Share-link copying through the async Clipboard API

/// Outcome indicator shown next to the share button. `Idle` is the resting
/// label; the page resets back to it two seconds after a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Share",
            Self::Copied => "Link copied!",
            Self::Failed => "Copy failed",
        }
    }
}

/// How long copy feedback stays visible before reverting.
pub const FEEDBACK_RESET_MS: u32 = 2000;

/// Write the current page URL to the clipboard.
///
/// A denied or unsupported clipboard degrades to [`CopyFeedback::Failed`];
/// it never blocks anything else on the page.
#[allow(clippy::future_not_send)] // Wasm futures are single-threaded.
pub async fn copy_page_url() -> CopyFeedback {
    if !cfg!(target_arch = "wasm32") {
        return CopyFeedback::Failed;
    }
    let Some(win) = web_sys::window() else {
        return CopyFeedback::Failed;
    };
    let Ok(href) = win.location().href() else {
        return CopyFeedback::Failed;
    };
    let promise = win.navigator().clipboard().write_text(&href);
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(_) => CopyFeedback::Copied,
        Err(err) => {
            crate::dom::console_error(&format!(
                "clipboard write rejected: {}",
                crate::dom::js_error_message(&err)
            ));
            CopyFeedback::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_labels() {
        assert_eq!(CopyFeedback::Idle.label(), "Share");
        assert_eq!(CopyFeedback::Copied.label(), "Link copied!");
        assert_eq!(CopyFeedback::Failed.label(), "Copy failed");
    }
}
