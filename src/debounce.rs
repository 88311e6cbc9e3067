//! Per-gesture hysteresis: open/close tracking with minimum-hold gating.
//!
//! Raw classifier output flickers; a gesture only becomes an event when its
//! activation was held longer than the configured duration and then
//! released. Each gesture kind runs the same two-state machine, so the
//! debounce logic exists exactly once.

use log::debug;
use std::collections::HashMap;

/// Gesture kinds tracked by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Left-eye closure (left click)
    LeftEye,
    /// Right-eye closure (right click)
    RightEye,
    /// Mouth opening (double click)
    Mouth,
}

/// Debounce state for one gesture kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// Gesture not currently active
    Inactive,
    /// Gesture active since the recorded timestamp (seconds)
    Active {
        /// Activation timestamp in seconds
        since: f64,
    },
}

/// Emitted when an activation held past its threshold is released
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    /// Which gesture completed
    pub kind: GestureKind,
    /// How long the gesture was held, in seconds
    pub held_s: f64,
}

/// Two-state debouncer shared by all gesture kinds.
///
/// Transitions per frame:
/// - Inactive → Active when the raw classifier turns true; records `since`.
/// - Active → Inactive when it turns false; emits a [`GestureEvent`] iff the
///   hold exceeded the kind's threshold. Shorter activations are noise.
/// - Same-state frames neither transition nor emit.
///
/// At most one event is produced per Active cycle.
pub struct GestureDebouncer {
    states: HashMap<GestureKind, GestureState>,
    thresholds: HashMap<GestureKind, f64>,
}

impl GestureDebouncer {
    /// Create a debouncer with per-gesture hold thresholds in seconds
    #[must_use]
    pub fn new(blink_duration: f64, mouth_open_duration: f64) -> Self {
        let thresholds = HashMap::from([
            (GestureKind::LeftEye, blink_duration),
            (GestureKind::RightEye, blink_duration),
            (GestureKind::Mouth, mouth_open_duration),
        ]);
        Self {
            states: HashMap::new(),
            thresholds,
        }
    }

    /// Current state for a gesture kind
    #[must_use]
    pub fn state(&self, kind: GestureKind) -> GestureState {
        self.states
            .get(&kind)
            .copied()
            .unwrap_or(GestureState::Inactive)
    }

    /// Feed one frame's raw classifier output for `kind`.
    ///
    /// `now_s` is the frame timestamp in seconds from an arbitrary but
    /// monotonic origin.
    pub fn update(&mut self, kind: GestureKind, raw_active: bool, now_s: f64) -> Option<GestureEvent> {
        let threshold = self.thresholds.get(&kind).copied().unwrap_or(0.0);
        let state = self.states.entry(kind).or_insert(GestureState::Inactive);

        match (*state, raw_active) {
            (GestureState::Inactive, true) => {
                *state = GestureState::Active { since: now_s };
                debug!("{kind:?} activated at {now_s:.3}s");
                None
            }
            (GestureState::Active { since }, false) => {
                *state = GestureState::Inactive;
                let held_s = now_s - since;
                if held_s > threshold {
                    debug!("{kind:?} released after {held_s:.3}s");
                    Some(GestureEvent { kind, held_s })
                } else {
                    debug!("{kind:?} flicker suppressed ({held_s:.3}s)");
                    None
                }
            }
            _ => None,
        }
    }

    /// Return every gesture to Inactive, as at stream start
    pub fn reset(&mut self) {
        self.states.clear();
    }
}
