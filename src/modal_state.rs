//! Modal State Machine
//!
//! Closed, or Open on one item with a selected image. `F` is whatever
//! handle the caller uses to give focus back on close.

use crate::models::ItemId;

/// Why the modal closed (logged)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Backdrop,
    Escape,
    CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenModal<F> {
    pub item_id: ItemId,
    pub image_index: usize,
    pub image_count: usize,
    pub return_focus: Option<F>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState<F> {
    Closed,
    Open(OpenModal<F>),
}

impl<F> Default for ModalState<F> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<F> ModalState<F> {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn open_item_id(&self) -> Option<&ItemId> {
        match self {
            ModalState::Open(open) => Some(&open.item_id),
            ModalState::Closed => None,
        }
    }

    pub fn image_index(&self) -> Option<usize> {
        match self {
            ModalState::Open(open) => Some(open.image_index),
            ModalState::Closed => None,
        }
    }

    /// Show `item_id`. An already-open modal has its content replaced and
    /// keeps the focus target saved when it was first opened.
    pub fn open(&mut self, item_id: ItemId, image_count: usize, trigger: Option<F>) {
        let return_focus = match std::mem::take(self) {
            ModalState::Open(prev) => prev.return_focus.or(trigger),
            ModalState::Closed => trigger,
        };
        *self = ModalState::Open(OpenModal {
            item_id,
            image_index: 0,
            image_count,
            return_focus,
        });
    }

    /// Close and hand back the element that should regain focus.
    /// Closing a closed modal does nothing.
    pub fn close(&mut self) -> Option<F> {
        match std::mem::take(self) {
            ModalState::Open(open) => open.return_focus,
            ModalState::Closed => None,
        }
    }

    /// Select an image by index; out-of-range indexes are ignored
    pub fn select_image(&mut self, index: usize) -> bool {
        match self {
            ModalState::Open(open) if index < open.image_count => {
                open.image_index = index;
                true
            }
            _ => false,
        }
    }

    pub fn next_image(&mut self) -> bool {
        self.step_image(1)
    }

    pub fn previous_image(&mut self) -> bool {
        self.step_image(-1)
    }

    fn step_image(&mut self, delta: isize) -> bool {
        match self {
            ModalState::Open(open) if open.image_count > 1 => {
                let count = open.image_count as isize;
                open.image_index = ((open.image_index as isize + delta).rem_euclid(count)) as usize;
                true
            }
            _ => false,
        }
    }
}
