use serde::Serialize;

use crate::capabilities::{CLICK_TONE, RESET_TONE, ToneSpec};
use crate::content::Formula;

/// Markers per cycle. The active formula advances each time the tally lands
/// on a multiple of this.
pub const CYCLE_LEN: u32 = 33;

/// Incrementing past this wraps the tally back to zero.
pub const UPPER_BOUND: u32 = 99;

/// One bead in the counter grid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Marker {
    pub position: u32,
    pub active: bool,
    pub emphasized: bool,
}

/// The tasbih counter: a bounded tally plus the rotating dhikr formula.
/// Owns its whole state; the host constructs one instance and routes every
/// user action through it.
pub struct TasbihCounter {
    formulas: &'static [Formula],
    tally: u32,
    formula_index: usize,
}

impl TasbihCounter {
    /// `formulas` must be non-empty.
    pub fn new(formulas: &'static [Formula]) -> Self {
        Self {
            formulas,
            tally: 0,
            formula_index: 0,
        }
    }

    pub fn tally(&self) -> u32 {
        self.tally
    }

    pub fn formula_index(&self) -> usize {
        self.formula_index
    }

    pub fn formulas(&self) -> &'static [Formula] {
        self.formulas
    }

    pub fn active_formula(&self) -> &Formula {
        &self.formulas[self.formula_index]
    }

    /// Advance the tally by one, wrapping to zero past [`UPPER_BOUND`].
    /// Returns the tone to play for the click.
    pub fn increment(&mut self) -> ToneSpec {
        self.tally += 1;
        if self.tally > UPPER_BOUND {
            self.tally = 0;
        }
        self.sync_formula();
        CLICK_TONE
    }

    /// Back to an empty strand and the first formula.
    pub fn reset(&mut self) -> ToneSpec {
        self.tally = 0;
        self.formula_index = 0;
        RESET_TONE
    }

    /// Jump straight to a marker position (1-based).
    pub fn set_tally(&mut self, position: u32) {
        self.tally = position;
        self.sync_formula();
    }

    /// Pick a formula directly, leaving the tally alone. An index outside the
    /// formula list is ignored.
    pub fn select_formula(&mut self, index: usize) {
        if index < self.formulas.len() {
            self.formula_index = index;
        }
    }

    // The formula only advances at cycle boundaries, never in between.
    fn sync_formula(&mut self) {
        if self.tally > 0 && self.tally % CYCLE_LEN == 0 {
            self.formula_index = (self.tally / CYCLE_LEN) as usize % self.formulas.len();
        }
    }

    /// The bead grid as the page should draw it: one marker per position in
    /// the cycle, active up to the tally, the tally's own bead emphasized.
    pub fn markers(&self) -> Vec<Marker> {
        (1..=CYCLE_LEN)
            .map(|position| Marker {
                position,
                active: position <= self.tally,
                emphasized: position == self.tally,
            })
            .collect()
    }
}
