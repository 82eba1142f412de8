//! Present/absent state of the post popup.

/// What happened to the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    /// A preview card for the post at this index was clicked.
    Open(usize),
    /// The close control was clicked.
    Close,
    /// A click reached the overlay. `on_background` is true only when the
    /// overlay itself was the click target, not something inside the panel.
    OverlayClick {
        /// Target was the overlay background.
        on_background: bool,
    },
}

/// At most one popup exists: opening while one is showing is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopupSlot {
    /// No popup in the document.
    #[default]
    Empty,
    /// Popup for the post at this index.
    Showing(usize),
}

impl PopupSlot {
    /// Next state after `action`.
    pub fn apply(self, action: PopupAction) -> Self {
        match (self, action) {
            (PopupSlot::Empty, PopupAction::Open(index)) => PopupSlot::Showing(index),
            (showing @ PopupSlot::Showing(_), PopupAction::Open(_)) => showing,
            (_, PopupAction::Close) => PopupSlot::Empty,
            (
                _,
                PopupAction::OverlayClick {
                    on_background: true,
                },
            ) => PopupSlot::Empty,
            (
                slot,
                PopupAction::OverlayClick {
                    on_background: false,
                },
            ) => slot,
        }
    }

    /// Index of the post being shown.
    pub fn showing(self) -> Option<usize> {
        match self {
            PopupSlot::Empty => None,
            PopupSlot::Showing(index) => Some(index),
        }
    }
}
