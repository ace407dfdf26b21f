//! Infinite-loop slide index for the insights carousel.
//!
//! The track holds seven slots: a clone of the last card, the five real
//! cards, and a clone of the first card. Landing on a clone is only allowed
//! while the slide animation runs; once the browser reports the end of the
//! transition the index jumps back onto the matching real card with the
//! transition disabled, so the jump is invisible.

use std::rc::Rc;

use yew::Reducible;

/// Number of real cards in the carousel.
pub const REAL_CARDS: usize = 5;
/// Slot of the leading clone (a copy of the last card).
pub const LEADING_CLONE: usize = 0;
/// Slot of the trailing clone (a copy of the first card).
pub const TRAILING_CLONE: usize = REAL_CARDS + 1;
/// Horizontal distance between two card slots.
pub const CARD_WIDTH_PX: f64 = 612.0;
/// Delay before the eased transition is switched back on after a reset.
pub const RESUME_DELAY_MS: u32 = 50;

const ANIMATED_TRANSITION: &str = "transform 0.5s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackTransition {
    Animated,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Advance(Step),
    JumpTo(usize),
    TransitionEnd,
    ResumeTransition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    transition: TrackTransition,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            index: 1,
            transition: TrackTransition::Animated,
        }
    }
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn transition(&self) -> TrackTransition {
        self.transition
    }

    /// Moves one slot. Moving outward from a clone is ignored: the clone is
    /// the last slot on that side and must settle before anything else
    /// happens in that direction.
    ///
    /// While the transition is suspended no `transitionend` will follow, so
    /// landing on a clone wraps to its real card at once.
    pub fn advance(&mut self, step: Step) {
        self.index = match step {
            Step::Forward if self.index < TRAILING_CLONE => self.index + 1,
            Step::Backward if self.index > LEADING_CLONE => self.index - 1,
            _ => self.index,
        };
        if self.transition == TrackTransition::Suspended {
            self.on_transition_end();
        }
    }

    /// Dot navigation. Returns false and leaves the index alone for slots
    /// outside the real cards.
    pub fn jump_to(&mut self, slot: usize) -> bool {
        if !(1..=REAL_CARDS).contains(&slot) {
            return false;
        }
        self.index = slot;
        true
    }

    /// Handles the end of the slide animation. Returns true when the index
    /// was reset from a clone onto its real card.
    pub fn on_transition_end(&mut self) -> bool {
        let target = match self.index {
            TRAILING_CLONE => 1,
            LEADING_CLONE => REAL_CARDS,
            _ => return false,
        };
        self.transition = TrackTransition::Suspended;
        self.index = target;
        true
    }

    pub fn resume_transition(&mut self) {
        self.transition = TrackTransition::Animated;
    }

    pub fn is_settled(&self) -> bool {
        (1..=REAL_CARDS).contains(&self.index)
    }

    pub fn translate_x(&self) -> f64 {
        self.index as f64 * CARD_WIDTH_PX
    }

    pub fn transition_css(&self) -> &'static str {
        match self.transition {
            TrackTransition::Animated => ANIMATED_TRANSITION,
            TrackTransition::Suspended => "none",
        }
    }

    pub fn track_style(&self) -> String {
        format!(
            "transform: translateX(-{}px); transition: {};",
            self.translate_x(),
            self.transition_css()
        )
    }

    pub fn is_active_dot(&self, slot: usize) -> bool {
        self.index == slot
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Advance(step) => self.advance(step),
            CarouselAction::JumpTo(slot) => {
                self.jump_to(slot);
            }
            CarouselAction::TransitionEnd => {
                if self.on_transition_end() {
                    log::debug!("carousel wrapped to slot {}", self.index);
                }
            }
            CarouselAction::ResumeTransition => self.resume_transition(),
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
