//! Active style tracking
//!
//! [`ActiveStyleTracker`] holds the style that newly typed text should get.
//! Toolbar toggles change it directly; caret movement resynchronizes it with
//! the style of the text under the caret. Observers are called synchronously
//! whenever the active style changes, with the typing attributes re-derived
//! from the registry.

use tracing::{debug, warn};

use crate::markdown::{Attributes, Markdown, StyleRegistry};
use crate::text::StyledText;

/// Notification sent to observers when the active style changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleChange<'a> {
    pub previous: Markdown,
    pub active: Markdown,
    /// Attributes the host should use for newly typed text
    pub typing_attributes: &'a Attributes,
}

/// How a toolbar button for one style should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    /// The style is part of the active style
    pub selected: bool,
    /// Selecting the style would merge or replace without discarding it
    pub enabled: bool,
}

type Observer<'r> = Box<dyn FnMut(&StyleChange<'_>) + 'r>;

/// State machine for the active style of one editing session
pub struct ActiveStyleTracker<'r> {
    registry: &'r StyleRegistry,
    active: Markdown,
    observers: Vec<Observer<'r>>,
}

impl<'r> ActiveStyleTracker<'r> {
    pub fn new(registry: &'r StyleRegistry) -> Self {
        Self {
            registry,
            active: Markdown::NONE,
            observers: Vec::new(),
        }
    }

    /// Register a callback invoked on every change of the active style
    pub fn subscribe(&mut self, observer: impl FnMut(&StyleChange<'_>) + 'r) {
        self.observers.push(Box::new(observer));
    }

    pub fn active(&self) -> Markdown {
        self.active
    }

    /// Attributes for text typed now
    pub fn typing_attributes(&self) -> &'r Attributes {
        let registry = self.registry;
        registry.attributes_for(self.active)
    }

    /// Select a style. Merges with the active style when the result is
    /// valid, otherwise replaces it. Invalid candidates are ignored.
    pub fn toggle_on(&mut self, candidate: Markdown) -> Markdown {
        let combined = self.active.union(candidate);
        if combined.is_valid() {
            self.set_active(combined);
        } else if candidate.is_valid() {
            self.set_active(candidate);
        } else {
            warn!(candidate = %candidate, "ignoring toggle to invalid style");
        }
        self.active
    }

    /// Deselect a style
    pub fn toggle_off(&mut self, candidate: Markdown) -> Markdown {
        self.set_active(self.active.subtract(candidate));
        self.active
    }

    /// Deselect if any part of the style is active, otherwise select it
    pub fn toggle(&mut self, candidate: Markdown) -> Markdown {
        if self.button_state(candidate).selected {
            self.toggle_off(candidate)
        } else {
            self.toggle_on(candidate)
        }
    }

    /// Resynchronize with the style of the text at the caret
    pub fn caret_moved(&mut self, text: &StyledText, location: usize) -> Markdown {
        let style = text.style_at(location);
        // Text styled with an invalid combination must not leak into typing
        let style = if style.is_valid() { style } else { Markdown::NONE };
        self.set_active(style);
        self.active
    }

    /// Back to plain text, as when the host clears its buffer
    pub fn reset(&mut self) {
        self.set_active(Markdown::NONE);
    }

    /// Toolbar state for a style given the current active style
    pub fn button_state(&self, candidate: Markdown) -> ButtonState {
        let selected = !candidate.is_empty() && !self.active.is_disjoint(candidate);
        let enabled = selected || self.active.union(candidate).is_valid();
        ButtonState { selected, enabled }
    }

    fn set_active(&mut self, active: Markdown) {
        if active == self.active {
            return;
        }
        let previous = self.active;
        self.active = active;
        debug!(from = %previous, to = %active, "active style changed");

        let registry = self.registry;
        let change = StyleChange {
            previous,
            active,
            typing_attributes: registry.attributes_for(active),
        };
        for observer in &mut self.observers {
            observer(&change);
        }
    }
}
