//! Overlay mutual-exclusion state machine
//!
//! One authoritative current-overlay variable replaces scattered visibility
//! conditionals: opening any overlay closes whichever one was open, and the
//! global cancel action peels overlays in a fixed precedence order.

/// Every full-page panel that layers over the main content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Nav,
    Cart,
    Filters,
    QuickView,
    Auth,
    Zoom,
}

impl Overlay {
    /// Closing precedence for the global cancel action: the zoom overlay
    /// closes before the auth modal, which closes before the quick-view
    /// modal, which closes before any sidebar.
    pub const ESCAPE_ORDER: [Self; 6] = [
        Self::Zoom,
        Self::Auth,
        Self::QuickView,
        Self::Nav,
        Self::Cart,
        Self::Filters,
    ];
}

/// Tracks which single overlay is active and where keyboard focus should
/// return when it closes. Transitions happen only from explicit user
/// actions; there are no timed transitions here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayCoordinator {
    current: Option<Overlay>,
    last_focus: Option<String>,
}

impl OverlayCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> Option<Overlay> {
        self.current
    }

    #[must_use]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.current == Some(overlay)
    }

    /// The underlying page is scroll-locked whenever any overlay is open.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.current.is_some()
    }

    /// Open an overlay, closing any other first, and remember the element
    /// that held focus so it can be restored on close.
    pub fn open(&mut self, overlay: Overlay, focused_element: Option<String>) {
        if self.current == Some(overlay) {
            return;
        }
        self.current = Some(overlay);
        self.last_focus = focused_element;
    }

    /// Close the given overlay if it is the one currently open. Returns the
    /// remembered focus target; the caller falls back to its own trigger
    /// element when none was recorded.
    pub fn close(&mut self, overlay: Overlay) -> Option<String> {
        if self.current != Some(overlay) {
            return None;
        }
        self.current = None;
        self.last_focus.take()
    }

    /// Close whichever overlay wins the precedence order (zoom, then auth,
    /// then quick view, then any sidebar). Drives the Escape key.
    pub fn close_topmost(&mut self) -> Option<Overlay> {
        let overlay = Overlay::ESCAPE_ORDER
            .into_iter()
            .find(|candidate| self.is_open(*candidate))?;
        self.current = None;
        self.last_focus = None;
        Some(overlay)
    }

    /// Toggle helper for header buttons: open when closed, close when open.
    /// Returns the focus target when the action closed the overlay.
    pub fn toggle(&mut self, overlay: Overlay, focused_element: Option<String>) -> Option<String> {
        if self.is_open(overlay) {
            self.close(overlay)
        } else {
            self.open(overlay, focused_element);
            None
        }
    }
}
