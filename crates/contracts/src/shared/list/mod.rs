//! Client-side state of an entity list page.
//!
//! The whole collection is fetched once; searching, paging, selection and the
//! bookkeeping of status changes, deletes and manual reordering all happen on
//! this structure. Network calls stay with the caller, which feeds confirmed
//! results back through [`ListState::apply_status`] and
//! [`ListState::remove_ids`].

mod bulk;

pub use bulk::{delete_message, delete_question, status_message, BulkOutcome};

use crate::domain::common::{EntityId, EntityRecord, EntityStatus};
use crate::shared::metadata::EntityMetadataInfo;
use std::collections::HashSet;

/// Rows per page
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    meta: &'static EntityMetadataInfo,
    items: Vec<EntityRecord>,
    search: String,
    selected: HashSet<EntityId>,
    /// 1-based
    current_page: usize,
    page_size: usize,
    delete_targets: Vec<EntityId>,
    viewing: Option<EntityId>,
    order_dirty: bool,
}

impl ListState {
    pub fn new(meta: &'static EntityMetadataInfo) -> Self {
        Self {
            meta,
            items: Vec::new(),
            search: String::new(),
            selected: HashSet::new(),
            current_page: 1,
            page_size: PAGE_SIZE,
            delete_targets: Vec::new(),
            viewing: None,
            order_dirty: false,
        }
    }

    /// Zero is treated as one row per page
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn meta(&self) -> &'static EntityMetadataInfo {
        self.meta
    }

    pub fn items(&self) -> &[EntityRecord] {
        &self.items
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_order_dirty(&self) -> bool {
        self.order_dirty
    }

    // ------------------------------------------------------------------
    // Fetch
    // ------------------------------------------------------------------

    /// Replace the collection with a fresh server answer.
    ///
    /// Terminated rows are dropped, and the selection and pending dialogs are
    /// pruned to ids that still exist. Any unsaved reorder is discarded.
    pub fn replace_items(&mut self, items: Vec<EntityRecord>) {
        self.items = items.into_iter().filter(|r| !r.is_terminated()).collect();
        self.prune_to_items();
        self.order_dirty = false;
        self.clamp_page();
    }

    fn prune_to_items(&mut self) {
        let ids: HashSet<EntityId> = self.items.iter().map(|r| r.id).collect();
        self.selected.retain(|id| ids.contains(id));
        self.delete_targets.retain(|id| ids.contains(id));
        if self.viewing.is_some_and(|id| !ids.contains(&id)) {
            self.viewing = None;
        }
    }

    // ------------------------------------------------------------------
    // Search and paging
    // ------------------------------------------------------------------

    /// Update the search text. Paging restarts at the first page.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.current_page = 1;
    }

    /// Records matching the search text, in collection order
    pub fn filtered(&self) -> Vec<&EntityRecord> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        let fields = self.meta.list.search_fields;
        self.items
            .iter()
            .filter(|r| r.search_text(fields).contains(&needle))
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_len().div_ceil(self.page_size)
    }

    /// Pagination controls are hidden for a single page
    pub fn show_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// Rows of the current page
    pub fn page_items(&self) -> Vec<&EntityRecord> {
        let start = (self.current_page - 1) * self.page_size;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages()).collect()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    fn clamp_page(&mut self) {
        self.go_to_page(self.current_page);
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in collection order
    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.items
            .iter()
            .map(|r| r.id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    /// Selected records in collection order
    pub fn selected_items(&self) -> Vec<&EntityRecord> {
        self.items
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .collect()
    }

    pub fn toggle_select(&mut self, id: EntityId) {
        let checked = !self.selected.contains(&id);
        self.set_selected(id, checked);
    }

    pub fn set_selected(&mut self, id: EntityId, checked: bool) {
        if checked {
            if self.items.iter().any(|r| r.id == id) {
                self.selected.insert(id);
            }
        } else {
            self.selected.remove(&id);
        }
    }

    /// Select or clear the whole loaded collection, regardless of the
    /// current search and page
    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.items.iter().map(|r| r.id).collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.items.is_empty() && self.selected.len() == self.items.len()
    }

    /// A row action applies to the whole selection when the row is part of
    /// it, otherwise to the row alone
    pub fn resolve_targets(&self, id: EntityId) -> Vec<EntityId> {
        if self.selected.contains(&id) {
            self.selected_ids()
        } else {
            vec![id]
        }
    }

    // ------------------------------------------------------------------
    // Status and delete
    // ------------------------------------------------------------------

    /// Record a confirmed status change. Terminated rows leave the collection.
    pub fn apply_status(&mut self, ids: &[EntityId], status: EntityStatus) {
        if status == EntityStatus::Terminated {
            self.remove_ids(ids);
            return;
        }
        for record in self.items.iter_mut().filter(|r| ids.contains(&r.id)) {
            record.status = status;
        }
    }

    /// Last confirmed status of a row; the row dropdown always shows this
    pub fn status_of(&self, id: EntityId) -> Option<EntityStatus> {
        self.items.iter().find(|r| r.id == id).map(|r| r.status)
    }

    /// Open the delete confirmation for a row (or the selection it belongs to)
    pub fn request_delete(&mut self, id: EntityId) -> &[EntityId] {
        self.delete_targets = self.resolve_targets(id);
        &self.delete_targets
    }

    pub fn delete_targets(&self) -> &[EntityId] {
        &self.delete_targets
    }

    pub fn is_delete_pending(&self) -> bool {
        !self.delete_targets.is_empty()
    }

    pub fn cancel_delete(&mut self) {
        self.delete_targets.clear();
    }

    /// Close the confirmation and hand out the ids to terminate
    pub fn take_delete_targets(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.delete_targets)
    }

    /// Drop rows from the collection and the selection
    pub fn remove_ids(&mut self, ids: &[EntityId]) {
        self.items.retain(|r| !ids.contains(&r.id));
        self.prune_to_items();
        self.clamp_page();
    }

    // ------------------------------------------------------------------
    // Detail view
    // ------------------------------------------------------------------

    pub fn open_view(&mut self, id: EntityId) {
        if self.items.iter().any(|r| r.id == id) {
            self.viewing = Some(id);
        }
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    pub fn viewing(&self) -> Option<&EntityRecord> {
        let id = self.viewing?;
        self.items.iter().find(|r| r.id == id)
    }

    // ------------------------------------------------------------------
    // Manual ordering
    // ------------------------------------------------------------------

    /// Move the row at page position `from` to page position `to`.
    ///
    /// Only the slots occupied by the current page change hands; rows on
    /// other pages keep their positions in the collection.
    pub fn reorder_page(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let page_ids: Vec<EntityId> = self.page_items().iter().map(|r| r.id).collect();
        if from >= page_ids.len() || to >= page_ids.len() {
            return;
        }

        let slots: Vec<usize> = page_ids
            .iter()
            .filter_map(|id| self.items.iter().position(|r| r.id == *id))
            .collect();
        let mut rows: Vec<EntityRecord> = slots.iter().map(|&i| self.items[i].clone()).collect();
        let moved = rows.remove(from);
        rows.insert(to, moved);

        for (slot, row) in slots.into_iter().zip(rows) {
            self.items[slot] = row;
        }
        self.order_dirty = true;
    }

    /// Full collection order, as persisted by "Save Changes"
    pub fn ordered_ids(&self) -> Vec<EntityId> {
        self.items.iter().map(|r| r.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_category, a003_banner, a007_portfolio};

    fn banners(count: i64) -> Vec<EntityRecord> {
        (1..=count)
            .map(|id| {
                EntityRecord::new(id, EntityStatus::Active)
                    .with_field("title", format!("Banner {}", id))
                    .with_field("description", "Spring campaign")
            })
            .collect()
    }

    fn banner_state(count: i64) -> ListState {
        let mut state = ListState::new(&a003_banner::ENTITY_METADATA);
        state.replace_items(banners(count));
        state
    }

    #[test]
    fn test_page_count_after_fetch() {
        for (count, pages) in [(0, 0), (1, 1), (10, 1), (11, 2), (25, 3)] {
            let state = banner_state(count);
            assert_eq!(state.total_pages(), pages, "count {}", count);
        }
    }

    #[test]
    fn test_terminated_rows_dropped_on_fetch() {
        let mut state = ListState::new(&a003_banner::ENTITY_METADATA);
        let mut rows = banners(3);
        rows[1].status = EntityStatus::Terminated;
        state.replace_items(rows);
        assert_eq!(state.ordered_ids(), vec![1, 3]);
    }

    #[test]
    fn test_search_by_exact_id() {
        let mut state = banner_state(25);
        state.set_search("17");
        let ids: Vec<_> = state.filtered().iter().map(|r| r.id).collect();
        assert!(ids.contains(&17));
    }

    #[test]
    fn test_search_case_insensitive() {
        let mut state = banner_state(3);
        state.set_search("BANNER 2");
        let ids: Vec<_> = state.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_no_match_shows_placeholder_without_pagination() {
        let mut state = banner_state(25);
        state.set_search("foo");
        assert!(state.page_items().is_empty());
        assert_eq!(state.total_pages(), 0);
        assert!(!state.show_pagination());
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let mut state = banner_state(25);
        state.go_to_page(3);
        assert_eq!(state.current_page(), 3);
        state.set_search("banner 1");
        assert_eq!(state.current_page(), 1);
        assert!(!state.page_items().is_empty());
    }

    #[test]
    fn test_paging_bounds() {
        let mut state = banner_state(25);
        assert!(!state.has_previous());
        state.previous_page();
        assert_eq!(state.current_page(), 1);
        state.go_to_page(99);
        assert_eq!(state.current_page(), 3);
        assert!(!state.has_next());
        assert_eq!(state.page_items().len(), 5);
        assert_eq!(state.page_numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_select_all_covers_whole_collection() {
        let mut state = banner_state(25);
        state.set_search("banner 2");
        state.select_all(true);
        assert_eq!(state.selected_count(), 25);
        assert!(state.all_selected());
        state.select_all(false);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_toggle_select_ignores_unknown_ids() {
        let mut state = banner_state(3);
        state.toggle_select(2);
        state.toggle_select(99);
        assert_eq!(state.selected_ids(), vec![2]);
        state.toggle_select(2);
        assert!(state.selected_ids().is_empty());
    }

    #[test]
    fn test_status_targets_single_row() {
        let mut state = banner_state(5);
        state.toggle_select(1);
        state.toggle_select(2);
        assert_eq!(state.resolve_targets(4), vec![4]);
        state.apply_status(&[4], EntityStatus::Inactive);
        assert_eq!(state.items()[3].status, EntityStatus::Inactive);
        assert_eq!(state.items()[0].status, EntityStatus::Active);
        assert_eq!(state.selected_ids(), vec![1, 2]);
    }

    #[test]
    fn test_status_targets_whole_selection() {
        let mut state = banner_state(5);
        state.toggle_select(3);
        state.toggle_select(1);
        let targets = state.resolve_targets(3);
        assert_eq!(targets, vec![1, 3]);
        state.apply_status(&targets, EntityStatus::Inactive);
        let inactive: Vec<_> = state
            .items()
            .iter()
            .filter(|r| r.status == EntityStatus::Inactive)
            .map(|r| r.id)
            .collect();
        assert_eq!(inactive, vec![1, 3]);
        assert_eq!(state.selected_count(), 2);
    }

    #[test]
    fn test_failed_status_change_keeps_previous_status() {
        let mut state = banner_state(3);
        state.toggle_select(1);
        state.toggle_select(2);
        let results = vec![(1, Err("500")), (2, Ok(()))];
        let outcome = BulkOutcome::from_results(results);
        state.apply_status(&outcome.confirmed, EntityStatus::Inactive);
        assert_eq!(state.status_of(1), Some(EntityStatus::Active));
        assert_eq!(state.status_of(2), Some(EntityStatus::Inactive));

        let outcome = BulkOutcome::from_results(vec![(3, Err::<(), _>("timeout"))]);
        state.apply_status(&outcome.confirmed, EntityStatus::Inactive);
        assert_eq!(state.status_of(3), Some(EntityStatus::Active));
        assert_eq!(state.status_of(99), None);
    }

    #[test]
    fn test_confirm_delete_removes_exact_targets() {
        let mut state = banner_state(5);
        state.toggle_select(2);
        state.toggle_select(4);
        state.toggle_select(5);
        assert_eq!(state.request_delete(2), &[2, 4, 5]);
        let targets = state.take_delete_targets();
        assert!(!state.is_delete_pending());
        state.remove_ids(&targets[..2]);
        assert_eq!(state.ordered_ids(), vec![1, 3, 5]);
        assert_eq!(state.selected_ids(), vec![5]);
    }

    #[test]
    fn test_cancel_delete() {
        let mut state = banner_state(2);
        state.request_delete(1);
        assert!(state.is_delete_pending());
        state.cancel_delete();
        assert!(state.delete_targets().is_empty());
        assert_eq!(state.ordered_ids(), vec![1, 2]);
    }

    #[test]
    fn test_terminated_status_removes_rows() {
        let mut state = banner_state(3);
        state.apply_status(&[2], EntityStatus::Terminated);
        assert_eq!(state.ordered_ids(), vec![1, 3]);
    }

    #[test]
    fn test_removing_last_page_clamps() {
        let mut state = banner_state(11);
        state.go_to_page(2);
        state.remove_ids(&[11]);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_items().len(), 10);
    }

    #[test]
    fn test_refetch_prunes_selection() {
        let mut state = banner_state(4);
        state.select_all(true);
        state.open_view(4);
        state.replace_items(banners(2));
        assert_eq!(state.selected_ids(), vec![1, 2]);
        assert!(state.viewing().is_none());
    }

    #[test]
    fn test_view_details() {
        let mut state = ListState::new(&a001_category::ENTITY_METADATA);
        state.replace_items(vec![EntityRecord::new(7, EntityStatus::Active).with_field("name", "Tech")]);
        state.open_view(7);
        assert_eq!(state.viewing().map(|r| r.text("name")), Some("Tech".to_string()));
        state.close_view();
        assert!(state.viewing().is_none());
    }

    #[test]
    fn test_reorder_then_refetch_restores_server_order() {
        let server = banners(5);
        let mut state = ListState::new(&a007_portfolio::ENTITY_METADATA);
        state.replace_items(server.clone());
        state.reorder_page(0, 2);
        assert_eq!(state.ordered_ids(), vec![2, 3, 1, 4, 5]);
        assert!(state.is_order_dirty());

        state.replace_items(server);
        assert_eq!(state.ordered_ids(), vec![1, 2, 3, 4, 5]);
        assert!(!state.is_order_dirty());
    }

    #[test]
    fn test_reorder_stays_within_current_page() {
        let mut state = ListState::new(&a007_portfolio::ENTITY_METADATA);
        state.replace_items(banners(15));
        state.go_to_page(2);
        state.reorder_page(4, 0);
        let ids = state.ordered_ids();
        assert_eq!(&ids[..10], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(&ids[10..], &[15, 11, 12, 13, 14]);
    }

    #[test]
    fn test_reorder_out_of_range_is_ignored() {
        let mut state = ListState::new(&a007_portfolio::ENTITY_METADATA);
        state.replace_items(banners(3));
        state.reorder_page(0, 7);
        assert_eq!(state.ordered_ids(), vec![1, 2, 3]);
        assert!(!state.is_order_dirty());
    }

    #[test]
    fn test_custom_page_size() {
        let mut state = ListState::new(&a003_banner::ENTITY_METADATA).with_page_size(25);
        state.replace_items(banners(30));
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page_items().len(), 25);
        assert_eq!(ListState::new(&a003_banner::ENTITY_METADATA).with_page_size(0).page_size(), 1);
    }
}
