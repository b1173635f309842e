//=========================================================================
// Input Buffer
//
// Collects converted input events between two redraws, split into:
// - discrete: key and button transitions, order preserved
// - continuous: pointer movement, only the latest position kept
//
// Notes:
// The buffer is drained on every RedrawRequested and reused, so its
// allocations survive across frames.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Transient event store for one platform frame.
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // Replaces any earlier event of the same kind (MouseMoved equality
    // ignores coordinates, so the newest position wins).
    //
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    //--- Discrete Event Handling -----------------------------------------
    //
    // Drops an event identical to the one just before it (key repeat).
    //
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Hands out both lists and empties the buffer; `None` when nothing
    // was buffered.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = self.discrete.drain(..).collect();
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
