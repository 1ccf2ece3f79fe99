use crate::content::NameEntry;

/// Wildcard tag: every entry stays visible.
pub const ALL_CATEGORIES: &str = "all";

/// Visibility filter over the Names list. One tag is selected at a time;
/// visibility is a pure function of (selected tag, entry category).
pub struct NameFilter {
    entries: &'static [NameEntry],
    selected: String,
}

impl NameFilter {
    pub fn new(entries: &'static [NameEntry]) -> Self {
        Self {
            entries,
            selected: ALL_CATEGORIES.to_string(),
        }
    }

    pub fn entries(&self) -> &'static [NameEntry] {
        self.entries
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Distinct category tags, in first-appearance order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for entry in self.entries {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        seen
    }

    /// Make `tag` the single active selection. Exact match: an unknown tag
    /// hides every entry.
    pub fn select_category(&mut self, tag: &str) {
        self.selected = tag.to_string();
    }

    pub fn is_visible(&self, entry: &NameEntry) -> bool {
        self.selected == ALL_CATEGORIES || entry.category == self.selected
    }

    pub fn visible_entries(&self) -> Vec<&'static NameEntry> {
        self.entries
            .iter()
            .filter(|entry| self.is_visible(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAMES;

    const SAMPLE: &[NameEntry] = &[
        NameEntry {
            arabic: "الْوَدُودُ",
            latin: "Al-Wadud",
            meaning: "El Amoroso",
            category: "amor",
        },
        NameEntry {
            arabic: "اللَّطِيفُ",
            latin: "Al-Latif",
            meaning: "El Sutil",
            category: "amor",
        },
        NameEntry {
            arabic: "السَّلَامُ",
            latin: "As-Salam",
            meaning: "La Fuente de Paz",
            category: "paz",
        },
    ];

    #[test]
    fn starts_with_everything_visible() {
        let filter = NameFilter::new(NAMES);
        assert_eq!(filter.selected(), ALL_CATEGORIES);
        assert_eq!(filter.visible_entries().len(), NAMES.len());
    }

    #[test]
    fn known_tag_shows_exactly_its_entries() {
        let mut filter = NameFilter::new(SAMPLE);
        filter.select_category("amor");

        let visible = filter.visible_entries();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|entry| entry.category == "amor"));
    }

    #[test]
    fn unknown_tag_hides_everything() {
        let mut filter = NameFilter::new(SAMPLE);
        filter.select_category("sabiduria");
        assert!(filter.visible_entries().is_empty());
    }

    #[test]
    fn reselecting_the_same_tag_is_idempotent() {
        let mut filter = NameFilter::new(SAMPLE);
        filter.select_category("paz");
        let first: Vec<_> = filter.visible_entries();
        filter.select_category("paz");
        let second: Vec<_> = filter.visible_entries();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].latin, second[0].latin);
    }

    #[test]
    fn all_restores_full_visibility() {
        let mut filter = NameFilter::new(SAMPLE);
        filter.select_category("amor");
        filter.select_category(ALL_CATEGORIES);
        assert_eq!(filter.visible_entries().len(), SAMPLE.len());
    }

    #[test]
    fn categories_are_unique_in_first_appearance_order() {
        let filter = NameFilter::new(SAMPLE);
        assert_eq!(filter.categories(), vec!["amor", "paz"]);
    }
}
