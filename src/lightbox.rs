//! Lightbox controller for the gallery.
//!
//! Holds which image (if any) is shown full screen and applies navigation
//! with wraparound. Kept free of DOM types so it can be driven from both
//! pointer and keyboard handlers and tested on the host.

use std::rc::Rc;

use thiserror::Error;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageItem {
    pub source: &'static str,
    pub alt_text: &'static str,
}

/// Display order is navigation order.
pub const GALLERY_IMAGES: &[ImageItem] = &[
    ImageItem {
        source: "/assets/gallery-1.jpg",
        alt_text: "Wedding ceremony setup",
    },
    ImageItem {
        source: "/assets/gallery-2.jpg",
        alt_text: "Corporate event",
    },
    ImageItem {
        source: "/assets/gallery-3.jpg",
        alt_text: "Birthday celebration",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            Self::Open(index) => Some(*index),
            Self::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LightboxError {
    #[error("image index {index} out of range for gallery of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Advance(Direction),
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" => Some(Self::Advance(Direction::Forward)),
            "ArrowLeft" => Some(Self::Advance(Direction::Backward)),
            _ => None,
        }
    }
}

/// Clickable regions of the gallery and overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Thumbnail(usize),
    Backdrop,
    Image,
    CloseControl,
    PreviousControl,
    NextControl,
}

impl PointerTarget {
    pub fn action(self) -> Option<LightboxAction> {
        match self {
            Self::Thumbnail(index) => Some(LightboxAction::OpenAt(index)),
            Self::Backdrop | Self::CloseControl => Some(LightboxAction::Close),
            Self::PreviousControl => Some(LightboxAction::Advance(Direction::Backward)),
            Self::NextControl => Some(LightboxAction::Advance(Direction::Forward)),
            Self::Image => None,
        }
    }

    /// Clicks on these must not reach the backdrop underneath.
    pub fn stops_propagation(self) -> bool {
        matches!(self, Self::Image | Self::PreviousControl | Self::NextControl)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    state: LightboxState,
    len: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            state: LightboxState::Closed,
            len,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    /// Opens the overlay on `index`. Rejects the call without touching the
    /// state if `index` does not name an image.
    pub fn open_at(&mut self, index: usize) -> Result<(), LightboxError> {
        if index >= self.len {
            return Err(LightboxError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.state = LightboxState::Open(index);
        Ok(())
    }

    /// Steps to the neighbouring image, wrapping at both ends. No-op while closed.
    pub fn advance(&mut self, direction: Direction) {
        if let LightboxState::Open(index) = self.state {
            let next = match direction {
                Direction::Forward => (index + 1) % self.len,
                Direction::Backward => (index + self.len - 1) % self.len,
            };
            self.state = LightboxState::Open(next);
        }
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Applies a `KeyboardEvent::key()` value. Returns whether the key was
    /// consumed; nothing is consumed while closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.state.is_open() {
            return false;
        }
        match KeyCommand::from_key(key) {
            Some(KeyCommand::Close) => {
                self.close();
                true
            }
            Some(KeyCommand::Advance(direction)) => {
                self.advance(direction);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxAction {
    OpenAt(usize),
    Advance(Direction),
    Close,
    Key(String),
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LightboxAction::OpenAt(index) => {
                if let Err(e) = next.open_at(index) {
                    log::warn!("Ignoring lightbox open: {}", e);
                    return self;
                }
            }
            LightboxAction::Advance(direction) => next.advance(direction),
            LightboxAction::Close => next.close(),
            LightboxAction::Key(key) => {
                if !next.handle_key(&key) {
                    return self;
                }
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(len: usize, index: usize) -> Lightbox {
        let mut lightbox = Lightbox::new(len);
        lightbox.open_at(index).unwrap();
        lightbox
    }

    #[test]
    fn starts_closed() {
        let lightbox = Lightbox::new(3);
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert_eq!(lightbox.state().current_index(), None);
    }

    #[test]
    fn open_at_every_valid_index() {
        for len in 1..6 {
            for index in 0..len {
                let lightbox = opened(len, index);
                assert!(lightbox.state().is_open());
                assert_eq!(lightbox.state().current_index(), Some(index));
            }
        }
    }

    #[test]
    fn open_at_out_of_range_leaves_state_untouched() {
        let mut lightbox = opened(3, 1);
        let err = lightbox.open_at(3).unwrap_err();
        assert_eq!(err, LightboxError::OutOfRange { index: 3, len: 3 });
        assert_eq!(lightbox.state(), LightboxState::Open(1));

        let mut closed = Lightbox::new(3);
        assert!(closed.open_at(7).is_err());
        assert_eq!(closed.state(), LightboxState::Closed);
    }

    #[test]
    fn empty_gallery_cannot_open() {
        let mut lightbox = Lightbox::new(0);
        assert_eq!(
            lightbox.open_at(0),
            Err(LightboxError::OutOfRange { index: 0, len: 0 })
        );
        lightbox.advance(Direction::Forward);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn forward_cycle_returns_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut lightbox = opened(len, start);
                lightbox.advance(Direction::Forward);
                assert_eq!(lightbox.state(), LightboxState::Open((start + 1) % len));
                for _ in 1..len {
                    lightbox.advance(Direction::Forward);
                }
                assert_eq!(lightbox.state(), LightboxState::Open(start));
            }
        }
    }

    #[test]
    fn backward_cycle_returns_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut lightbox = opened(len, start);
                lightbox.advance(Direction::Backward);
                assert_eq!(
                    lightbox.state(),
                    LightboxState::Open((start + len - 1) % len)
                );
                for _ in 1..len {
                    lightbox.advance(Direction::Backward);
                }
                assert_eq!(lightbox.state(), LightboxState::Open(start));
            }
        }
    }

    #[test]
    fn single_image_wraps_onto_itself() {
        let mut lightbox = opened(1, 0);
        lightbox.advance(Direction::Forward);
        assert_eq!(lightbox.state(), LightboxState::Open(0));
        lightbox.advance(Direction::Backward);
        assert_eq!(lightbox.state(), LightboxState::Open(0));
    }

    #[test]
    fn advance_while_closed_is_noop() {
        let mut lightbox = Lightbox::new(3);
        lightbox.advance(Direction::Forward);
        lightbox.advance(Direction::Backward);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut lightbox = opened(3, 2);
        lightbox.close();
        lightbox.close();
        assert_eq!(lightbox.state(), LightboxState::Closed);

        let mut never_opened = Lightbox::new(3);
        never_opened.close();
        never_opened.close();
        assert_eq!(never_opened.state(), LightboxState::Closed);
    }

    #[test]
    fn keys_while_closed_change_nothing() {
        let mut lightbox = Lightbox::new(3);
        for key in ["Escape", "ArrowRight", "ArrowLeft", "Enter"] {
            assert!(!lightbox.handle_key(key));
            assert_eq!(lightbox.state(), LightboxState::Closed);
        }
    }

    #[test]
    fn unrelated_key_is_not_consumed() {
        let mut lightbox = opened(3, 1);
        assert!(!lightbox.handle_key("a"));
        assert_eq!(lightbox.state(), LightboxState::Open(1));
    }

    #[test]
    fn three_image_walkthrough() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open_at(2).unwrap();
        assert_eq!(lightbox.state(), LightboxState::Open(2));
        lightbox.advance(Direction::Forward);
        assert_eq!(lightbox.state(), LightboxState::Open(0));
        lightbox.advance(Direction::Backward);
        assert_eq!(lightbox.state(), LightboxState::Open(2));
        lightbox.close();
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn arrow_left_from_first_wraps_to_last() {
        let mut lightbox = opened(3, 0);
        assert!(lightbox.handle_key("ArrowLeft"));
        assert_eq!(lightbox.state(), LightboxState::Open(2));
    }

    #[test]
    fn escape_closes() {
        let mut lightbox = opened(3, 1);
        assert!(lightbox.handle_key("Escape"));
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn image_click_keeps_lightbox_open() {
        assert_eq!(PointerTarget::Image.action(), None);
        assert!(PointerTarget::Image.stops_propagation());

        let lightbox = Rc::new(opened(3, 1));
        let lightbox = match PointerTarget::Image.action() {
            Some(action) => lightbox.reduce(action),
            None => lightbox,
        };
        assert_eq!(lightbox.state(), LightboxState::Open(1));
    }

    #[test]
    fn pointer_targets_map_to_transitions() {
        assert_eq!(
            PointerTarget::Thumbnail(2).action(),
            Some(LightboxAction::OpenAt(2))
        );
        assert_eq!(PointerTarget::Backdrop.action(), Some(LightboxAction::Close));
        assert_eq!(PointerTarget::CloseControl.action(), Some(LightboxAction::Close));
        assert_eq!(
            PointerTarget::PreviousControl.action(),
            Some(LightboxAction::Advance(Direction::Backward))
        );
        assert_eq!(
            PointerTarget::NextControl.action(),
            Some(LightboxAction::Advance(Direction::Forward))
        );
        assert!(PointerTarget::PreviousControl.stops_propagation());
        assert!(PointerTarget::NextControl.stops_propagation());
        assert!(!PointerTarget::Backdrop.stops_propagation());
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let lightbox = Rc::new(Lightbox::new(GALLERY_IMAGES.len()));
        let lightbox = lightbox.reduce(LightboxAction::OpenAt(0));
        let lightbox = lightbox.reduce(LightboxAction::Key("ArrowLeft".to_string()));
        assert_eq!(lightbox.state(), LightboxState::Open(GALLERY_IMAGES.len() - 1));
        let lightbox = lightbox.reduce(LightboxAction::Advance(Direction::Forward));
        assert_eq!(lightbox.state(), LightboxState::Open(0));
        let lightbox = lightbox.reduce(LightboxAction::Close);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let lightbox = Rc::new(Lightbox::new(3));
        let after_key = lightbox.clone().reduce(LightboxAction::Key("ArrowRight".to_string()));
        assert!(Rc::ptr_eq(&lightbox, &after_key));

        let after_bad_open = lightbox.clone().reduce(LightboxAction::OpenAt(10));
        assert!(Rc::ptr_eq(&lightbox, &after_bad_open));
    }
}
