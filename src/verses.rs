use rand::Rng;

use crate::capabilities::{ShareCapability, ShareOutcome, SharePlatform, share_with_fallback};
use crate::content::Verse;

/// The verse-of-the-day card: a fixed catalog plus the index currently on
/// display. Selection is uniform over the catalog; repeats are allowed.
pub struct VerseOfDay {
    catalog: &'static [Verse],
    current: usize,
}

impl VerseOfDay {
    /// Picks the opening verse at random. `catalog` must be non-empty.
    pub fn new(catalog: &'static [Verse], rng: &mut impl Rng) -> Self {
        let current = rng.random_range(0..catalog.len());
        Self { catalog, current }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Verse {
        &self.catalog[self.current]
    }

    pub fn show_random(&mut self, rng: &mut impl Rng) -> &Verse {
        self.current = rng.random_range(0..self.catalog.len());
        self.current()
    }

    /// The text block a share hands to the platform, composed from the verse
    /// as displayed (the translation keeps its surrounding quotes).
    pub fn share_text(&self) -> String {
        let verse = self.current();
        format!(
            "📖 Verso del Corán del Día:\n\n{}\n\n\"{}\"\n\nCompartido desde Al-Misbah",
            verse.arabic, verse.translation
        )
    }

    /// Best-effort share of the current verse through the injected platform.
    pub fn share(
        &self,
        capability: ShareCapability,
        platform: &mut dyn SharePlatform,
    ) -> ShareOutcome {
        share_with_fallback(capability, platform, &self.share_text())
    }
}
