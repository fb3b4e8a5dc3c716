//! Cursor and selection over the flat session sequence
//!
//! The cursor is an index into the flat sequence; the selection is a set of
//! session ids, so it survives re-sorting for every id still present.

use std::collections::BTreeSet;

use tutordesk_core::{is_markable, SessionId, SessionRecord};

/// Rows moved by PageUp / PageDown
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSelection {
    cursor: usize,
    selected: BTreeSet<SessionId>,
}

impl SessionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &BTreeSet<SessionId> {
        &self.selected
    }

    pub fn is_selected(&self, id: SessionId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Move the cursor to `index`, clamped to `[0, len - 1]` (0 when empty)
    pub fn move_cursor(&mut self, index: usize, len: usize) {
        self.cursor = clamp_index(index, len);
    }

    pub fn move_up(&mut self, len: usize) {
        self.move_cursor(self.cursor.saturating_sub(1), len);
    }

    pub fn move_down(&mut self, len: usize) {
        self.move_cursor(self.cursor.saturating_add(1), len);
    }

    pub fn page_up(&mut self, len: usize) {
        self.move_cursor(self.cursor.saturating_sub(PAGE_SIZE), len);
    }

    pub fn page_down(&mut self, len: usize) {
        self.move_cursor(self.cursor.saturating_add(PAGE_SIZE), len);
    }

    /// Flip membership of `id`. Sessions that are not markable, or not in
    /// `flat`, are never selected. Returns whether the set changed.
    pub fn toggle_select(&mut self, id: SessionId, flat: &[SessionRecord]) -> bool {
        if self.selected.remove(&id) {
            return true;
        }
        match flat.iter().find(|s| s.id == id) {
            Some(session) if is_markable(&session.session_status) => {
                self.selected.insert(id);
                true
            }
            _ => false,
        }
    }

    /// Add every session id, markable or not
    pub fn select_all(&mut self, flat: &[SessionRecord]) {
        self.selected.extend(flat.iter().map(|s| s.id));
    }

    /// Add only markable sessions; existing members are kept
    pub fn select_actionable(&mut self, flat: &[SessionRecord]) {
        self.selected.extend(
            flat.iter()
                .filter(|s| is_markable(&s.session_status))
                .map(|s| s.id),
        );
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn deselect(&mut self, id: SessionId) {
        self.selected.remove(&id);
    }

    /// Adapt to a new snapshot.
    ///
    /// The cursor follows `follow` (the session it was on) when that id is
    /// still present, otherwise it is clamped. Ids no longer present are
    /// dropped from the selection.
    pub fn reconcile(&mut self, flat: &[SessionRecord], follow: Option<SessionId>) {
        match follow.and_then(|id| flat.iter().position(|s| s.id == id)) {
            Some(index) => self.cursor = index,
            None => self.cursor = clamp_index(self.cursor, flat.len()),
        }
        self.selected.retain(|id| flat.iter().any(|s| s.id == *id));
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> Vec<SessionRecord> {
        vec![
            SessionRecord::new(1, "Scheduled"),
            SessionRecord::new(2, "Cancelled"),
            SessionRecord::new(3, "Trial Class"),
        ]
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut sel = SessionSelection::new();
        sel.move_cursor(10, 3);
        assert_eq!(sel.cursor(), 2);
        sel.move_cursor(1, 0);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn test_move_up_down_stay_in_range() {
        let mut sel = SessionSelection::new();
        sel.move_up(3);
        assert_eq!(sel.cursor(), 0);
        sel.move_down(3);
        sel.move_down(3);
        sel.move_down(3);
        assert_eq!(sel.cursor(), 2);
        sel.page_up(3);
        assert_eq!(sel.cursor(), 0);
        sel.page_down(3);
        assert_eq!(sel.cursor(), 2);
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let flat = flat();
        let mut sel = SessionSelection::new();
        sel.toggle_select(3, &flat);
        let before = sel.clone();

        assert!(sel.toggle_select(1, &flat));
        assert!(sel.is_selected(1));
        assert!(sel.toggle_select(1, &flat));
        assert_eq!(sel, before);
    }

    #[test]
    fn test_toggle_non_markable_is_noop() {
        let flat = flat();
        let mut sel = SessionSelection::new();
        assert!(!sel.toggle_select(2, &flat));
        assert!(!sel.has_selection());
        assert!(!sel.toggle_select(42, &flat));
    }

    #[test]
    fn test_select_actionable_vs_select_all() {
        let flat = vec![
            SessionRecord::new(1, "Scheduled"),
            SessionRecord::new(2, "Cancelled"),
        ];

        let mut actionable = SessionSelection::new();
        actionable.select_actionable(&flat);
        assert_eq!(actionable.selected().iter().copied().collect::<Vec<_>>(), vec![1]);

        let mut all = SessionSelection::new();
        all.select_all(&flat);
        assert_eq!(all.selected().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_clear_selection_empties() {
        let flat = flat();
        let mut sel = SessionSelection::new();
        sel.select_all(&flat);
        sel.clear_selection();
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn test_reconcile_keeps_ids_still_present() {
        let mut sel = SessionSelection::new();
        sel.select_actionable(&flat());

        // re-sorted snapshot without session 1
        let next = vec![SessionRecord::new(3, "Trial Class"), SessionRecord::new(2, "Cancelled")];
        sel.reconcile(&next, None);
        assert!(sel.is_selected(3));
        assert!(!sel.is_selected(1));
    }

    #[test]
    fn test_reconcile_clamps_cursor_when_sequence_shrinks() {
        let mut sel = SessionSelection::new();
        sel.move_cursor(2, 3);
        sel.reconcile(&[SessionRecord::new(9, "Scheduled")], None);
        assert_eq!(sel.cursor(), 0);

        sel.reconcile(&[], None);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn test_reconcile_cursor_follows_session() {
        let mut sel = SessionSelection::new();
        sel.move_cursor(0, 3);
        let resorted = vec![
            SessionRecord::new(3, "Trial Class"),
            SessionRecord::new(2, "Cancelled"),
            SessionRecord::new(1, "Attended"),
        ];
        sel.reconcile(&resorted, Some(1));
        assert_eq!(sel.cursor(), 2);
    }
}
