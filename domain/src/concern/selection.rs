//! Selection state entity

use super::tag::ConcernTag;
use std::collections::BTreeSet;

/// The set of concerns the user currently has toggled on (Entity)
///
/// Created empty per session and never persisted. Iteration order follows
/// [`ConcernTag`] declaration order, independent of the order of toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<ConcernTag>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `tag`. Returns `true` if the tag is now selected.
    pub fn toggle(&mut self, tag: ConcernTag) -> bool {
        if self.selected.remove(&tag) {
            false
        } else {
            self.selected.insert(tag);
            true
        }
    }

    /// Remove `tag` if present. Returns `true` if it was selected.
    pub fn remove(&mut self, tag: ConcernTag) -> bool {
        self.selected.remove(&tag)
    }

    pub fn contains(&self, tag: ConcernTag) -> bool {
        self.selected.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ConcernTag> + '_ {
        self.selected.iter().copied()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl FromIterator<ConcernTag> for SelectionState {
    fn from_iter<I: IntoIterator<Item = ConcernTag>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = SelectionState::new();
        assert!(state.toggle(ConcernTag::Diabetes));
        assert!(state.contains(ConcernTag::Diabetes));
        assert!(!state.toggle(ConcernTag::Diabetes));
        assert!(!state.contains(ConcernTag::Diabetes));
    }

    #[test]
    fn test_toggle_parity() {
        for count in 0..9 {
            let mut state = SelectionState::new();
            for _ in 0..count {
                state.toggle(ConcernTag::Heart);
            }
            assert_eq!(state.contains(ConcernTag::Heart), count % 2 == 1, "count={}", count);
        }
    }

    #[test]
    fn test_toggle_parity_interleaved_with_other_tags() {
        let mut state = SelectionState::new();
        let sequence = [
            ConcernTag::Heart,
            ConcernTag::Bones,
            ConcernTag::Heart,
            ConcernTag::Anemia,
            ConcernTag::Heart,
            ConcernTag::Bones,
        ];
        for tag in sequence {
            state.toggle(tag);
        }
        assert!(state.contains(ConcernTag::Heart));
        assert!(!state.contains(ConcernTag::Bones));
        assert!(state.contains(ConcernTag::Anemia));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut state: SelectionState = [ConcernTag::Weight].into_iter().collect();
        assert!(state.remove(ConcernTag::Weight));
        assert!(!state.remove(ConcernTag::Weight));
        assert!(state.is_empty());
    }

    #[test]
    fn test_iteration_order_is_insertion_independent() {
        let mut a = SelectionState::new();
        a.toggle(ConcernTag::Gluten);
        a.toggle(ConcernTag::Diabetes);
        let mut b = SelectionState::new();
        b.toggle(ConcernTag::Diabetes);
        b.toggle(ConcernTag::Gluten);

        let order_a: Vec<_> = a.iter().collect();
        let order_b: Vec<_> = b.iter().collect();
        assert_eq!(order_a, order_b);
        assert_eq!(order_a, vec![ConcernTag::Diabetes, ConcernTag::Gluten]);
    }
}
