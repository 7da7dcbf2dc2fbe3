// src/model/selection.rs

use std::collections::HashMap;

/// How one element is reported in the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Elemental,
    Oxide,
}

/// Per-element session inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionEntry {
    /// Measured solution concentration in mg/mL. Never negative.
    pub concentration: f64,
    pub display_mode: DisplayMode,
}

impl Default for SelectionEntry {
    fn default() -> Self {
        Self {
            concentration: 0.0,
            display_mode: DisplayMode::Elemental,
        }
    }
}

/// The set of elements currently being worked on, in display order.
/// Newest selections go to the front, matching how analysts add the
/// element they just measured.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    order: Vec<String>,
    entries: HashMap<String, SelectionEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element with default inputs. Re-selecting an element that
    /// is already present leaves its entry untouched.
    pub fn select(&mut self, element: &str) {
        if self.entries.contains_key(element) {
            return;
        }
        self.order.insert(0, element.to_string());
        self.entries
            .insert(element.to_string(), SelectionEntry::default());
    }

    /// Overwrites the inputs of a selected element. Unknown elements are
    /// ignored. Concentration is clamped to zero from below; non-finite
    /// values collapse to zero.
    pub fn update(&mut self, element: &str, concentration: f64, display_mode: DisplayMode) {
        if let Some(entry) = self.entries.get_mut(element) {
            entry.concentration = if concentration.is_finite() {
                concentration.max(0.0)
            } else {
                0.0
            };
            entry.display_mode = display_mode;
        }
    }

    /// Drops an element from the session. Removing an absent element is a no-op.
    pub fn remove(&mut self, element: &str) {
        if self.entries.remove(element).is_some() {
            self.order.retain(|e| e != element);
        }
    }

    pub fn entry(&self, element: &str) -> Option<&SelectionEntry> {
        self.entries.get(element)
    }

    /// Iterates entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SelectionEntry)> {
        self.order
            .iter()
            .filter_map(move |element| self.entries.get(element).map(|e| (element.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_idempotent() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.update("Fe", 5.0, DisplayMode::Oxide);
        sel.select("Fe");

        assert_eq!(sel.len(), 1);
        let entry = sel.entry("Fe").unwrap();
        assert_eq!(entry.concentration, 5.0);
        assert_eq!(entry.display_mode, DisplayMode::Oxide);
    }

    #[test]
    fn new_selections_go_to_the_front() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.select("Ca");
        sel.select("Si");

        let order: Vec<&str> = sel.iter().map(|(e, _)| e).collect();
        assert_eq!(order, vec!["Si", "Ca", "Fe"]);
    }

    #[test]
    fn update_clamps_concentration_at_zero() {
        let mut sel = Selection::new();
        sel.select("Zn");
        sel.update("Zn", -3.5, DisplayMode::Elemental);
        assert_eq!(sel.entry("Zn").unwrap().concentration, 0.0);

        sel.update("Zn", f64::NAN, DisplayMode::Elemental);
        assert_eq!(sel.entry("Zn").unwrap().concentration, 0.0);

        sel.update("Zn", 2.25, DisplayMode::Elemental);
        assert_eq!(sel.entry("Zn").unwrap().concentration, 2.25);
    }

    #[test]
    fn update_on_unselected_element_is_ignored() {
        let mut sel = Selection::new();
        sel.update("Fe", 1.0, DisplayMode::Oxide);
        assert!(sel.is_empty());
        assert!(sel.entry("Fe").is_none());
    }

    #[test]
    fn remove_then_reselect_resets_inputs() {
        let mut sel = Selection::new();
        sel.select("Cu");
        sel.update("Cu", 4.0, DisplayMode::Oxide);
        sel.remove("Cu");
        assert!(sel.is_empty());

        // Removing again is harmless.
        sel.remove("Cu");

        sel.select("Cu");
        let entry = sel.entry("Cu").unwrap();
        assert_eq!(entry.concentration, 0.0);
        assert_eq!(entry.display_mode, DisplayMode::Elemental);
    }
}
