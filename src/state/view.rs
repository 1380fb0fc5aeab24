// View state controller.
// Owns tab, selection, filter, and consent playback state for one dashboard session.

use std::sync::Arc;

use tracing::{debug, info};

use crate::app::Tab;
use crate::catalog::{ApiGroup, Catalog, ConsentStage, Endpoint};

use super::consent::{ConsentPlayback, PlaybackTransition};
use super::filters::{GroupFilter, StatusFilter, filter_endpoints};
use super::summary::{self, ChecklistProgress, GroupRatio, StatusCounts};

/// Mutable UI state over a read-only catalog.
///
/// Created when the dashboard starts and discarded when it exits. Every
/// mutation is synchronous; the playback timer lives with the owner of this
/// value and is driven by the [`PlaybackTransition`]s the consent operations
/// return.
#[derive(Debug, Clone)]
pub struct ViewState {
    catalog: Arc<Catalog>,
    active_tab: Tab,
    selected_endpoint: Option<u32>,
    hovered_endpoint: Option<u32>,
    filter_group: GroupFilter,
    filter_status: StatusFilter,
    consent: ConsentPlayback,
}

impl ViewState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let consent = ConsentPlayback::new(catalog.stage_count());
        Self {
            catalog,
            active_tab: Tab::default(),
            selected_endpoint: None,
            hovered_endpoint: None,
            filter_group: GroupFilter::default(),
            filter_status: StatusFilter::default(),
            consent,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_endpoint(&self) -> Option<u32> {
        self.selected_endpoint
    }

    pub fn hovered_endpoint(&self) -> Option<u32> {
        self.hovered_endpoint
    }

    pub fn filter_group(&self) -> GroupFilter {
        self.filter_group
    }

    pub fn filter_status(&self) -> StatusFilter {
        self.filter_status
    }

    pub fn consent(&self) -> ConsentPlayback {
        self.consent
    }

    pub fn consent_stage_index(&self) -> usize {
        self.consent.index()
    }

    pub fn is_playing(&self) -> bool {
        self.consent.is_playing()
    }

    pub fn current_stage(&self) -> Option<&ConsentStage> {
        self.catalog.consent_stages.get(self.consent.index())
    }

    // Tabs

    pub fn set_active_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            debug!(from = ?self.active_tab, to = ?tab, "switching tab");
        }
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.set_active_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_active_tab(self.active_tab.prev());
    }

    // Endpoint selection

    /// Toggle selection of `id`. Ids not in the catalog are ignored.
    pub fn select_endpoint(&mut self, id: u32) {
        if self.catalog.endpoint(id).is_none() {
            debug!(id, "ignoring selection of unknown endpoint");
            return;
        }
        self.selected_endpoint = if self.selected_endpoint == Some(id) {
            None
        } else {
            Some(id)
        };
        debug!(selected = ?self.selected_endpoint, "endpoint selection changed");
    }

    pub fn set_hovered_endpoint(&mut self, id: Option<u32>) {
        self.hovered_endpoint = id;
    }

    /// The selected endpoint, only while it passes the current filters.
    pub fn visible_selection(&self) -> Option<&Endpoint> {
        let id = self.selected_endpoint?;
        self.filtered_endpoints().find(|e| e.id == id)
    }

    /// Move the hover cursor down the filtered rows, stopping at the end.
    pub fn hover_next(&mut self) {
        let ids = self.filtered_ids();
        if ids.is_empty() {
            self.hovered_endpoint = None;
            return;
        }
        let i = match self.hovered_position(&ids) {
            Some(i) if i >= ids.len() - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.hovered_endpoint = Some(ids[i]);
    }

    /// Move the hover cursor up the filtered rows, stopping at the start.
    pub fn hover_prev(&mut self) {
        let ids = self.filtered_ids();
        if ids.is_empty() {
            self.hovered_endpoint = None;
            return;
        }
        let i = match self.hovered_position(&ids) {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.hovered_endpoint = Some(ids[i]);
    }

    /// Toggle selection of the hovered row.
    pub fn select_hovered(&mut self) {
        if let Some(id) = self.hovered_endpoint {
            self.select_endpoint(id);
        }
    }

    fn filtered_ids(&self) -> Vec<u32> {
        self.filtered_endpoints().map(|e| e.id).collect()
    }

    fn hovered_position(&self, ids: &[u32]) -> Option<usize> {
        let hovered = self.hovered_endpoint?;
        ids.iter().position(|&id| id == hovered)
    }

    // Filters

    /// Changing a filter keeps the current selection.
    pub fn set_filter_group(&mut self, group: GroupFilter) {
        self.filter_group = group;
        debug!(%group, "group filter set");
    }

    pub fn set_filter_status(&mut self, status: StatusFilter) {
        self.filter_status = status;
        debug!(%status, "status filter set");
    }

    pub fn cycle_filter_group(&mut self) {
        self.set_filter_group(self.filter_group.next());
    }

    pub fn cycle_filter_status(&mut self) {
        self.set_filter_status(self.filter_status.next());
    }

    /// Endpoints passing both filters, in catalog order.
    pub fn filtered_endpoints(&self) -> impl Iterator<Item = &Endpoint> + '_ {
        filter_endpoints(
            &self.catalog.endpoints,
            self.filter_group,
            self.filter_status,
        )
    }

    // Consent playback

    pub fn start_consent_playback(&mut self) -> PlaybackTransition {
        let transition = self.consent.play();
        info!(?transition, "consent simulation started");
        transition
    }

    pub fn step_consent_stage(&mut self) -> PlaybackTransition {
        self.consent.tick()
    }

    pub fn jump_to_consent_stage(&mut self, index: usize) -> PlaybackTransition {
        self.consent.jump(index)
    }

    /// Manual jump relative to the current stage, clamped to the sequence.
    pub fn jump_consent_relative(&mut self, delta: isize) -> PlaybackTransition {
        let target = self.consent.index().saturating_add_signed(delta);
        let last = self.consent.stage_count() - 1;
        self.jump_to_consent_stage(target.min(last))
    }

    // Aggregates

    pub fn total_endpoints(&self) -> usize {
        summary::total_endpoints(&self.catalog.endpoints)
    }

    pub fn status_counts(&self) -> StatusCounts {
        summary::status_counts(&self.catalog.endpoints)
    }

    pub fn compliance_percent(&self) -> u32 {
        summary::compliance_percent(&self.catalog.endpoints)
    }

    pub fn group_ratio(&self, group: ApiGroup) -> GroupRatio {
        summary::group_ratio(&self.catalog.endpoints, group)
    }

    pub fn checklist_progress(&self) -> ChecklistProgress {
        summary::checklist_progress(&self.catalog.compliance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EndpointStatus, sample_catalog};

    fn view() -> ViewState {
        ViewState::new(Arc::new(sample_catalog()))
    }

    fn names(state: &ViewState) -> Vec<String> {
        state.filtered_endpoints().map(|e| e.berlin.clone()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = view();
        assert_eq!(state.active_tab(), Tab::Overview);
        assert_eq!(state.filter_group(), GroupFilter::All);
        assert_eq!(state.filter_status(), StatusFilter::All);
        assert_eq!(state.consent_stage_index(), 0);
        assert!(!state.is_playing());
        assert!(state.selected_endpoint().is_none());
        assert!(state.hovered_endpoint().is_none());
    }

    #[test]
    fn test_pis_filter_scenario() {
        let mut state = view();
        state.set_filter_group(GroupFilter::Only(ApiGroup::Pis));

        assert_eq!(
            names(&state),
            vec![
                "SEPA CT Initiation",
                "Payment Status",
                "Payment Cancellation",
                "Signing Basket",
            ]
        );
        assert!(state.filtered_endpoints().all(|e| e.group == ApiGroup::Pis));
    }

    #[test]
    fn test_filters_are_flat_single_select() {
        let mut state = view();
        let pis = GroupFilter::Only(ApiGroup::Pis);
        state.set_filter_group(pis);
        state.set_filter_group(pis);
        assert_eq!(state.filter_group(), pis);

        state.set_filter_status(StatusFilter::Only(EndpointStatus::InProgress));
        let ids: Vec<u32> = state.filtered_endpoints().map(|e| e.id).collect();
        assert_eq!(ids, vec![7]);
    }

    #[test]
    fn test_select_toggle_law() {
        let mut state = view();
        state.select_endpoint(5);
        assert_eq!(state.selected_endpoint(), Some(5));
        state.select_endpoint(5);
        assert_eq!(state.selected_endpoint(), None);

        state.select_endpoint(5);
        state.select_endpoint(8);
        assert_eq!(state.selected_endpoint(), Some(8));
        assert_eq!(state.visible_selection().unwrap().name, "POST /consents");
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut state = view();
        state.select_endpoint(3);
        state.select_endpoint(404);
        assert_eq!(state.selected_endpoint(), Some(3));
    }

    #[test]
    fn test_filter_change_keeps_selection() {
        let mut state = view();
        state.select_endpoint(1);
        state.set_filter_group(GroupFilter::Only(ApiGroup::Piis));
        state.set_filter_status(StatusFilter::Only(EndpointStatus::Planned));
        assert_eq!(state.selected_endpoint(), Some(1));
    }

    #[test]
    fn test_visible_selection_follows_filters() {
        let mut state = view();
        state.select_endpoint(7);
        assert_eq!(state.visible_selection().unwrap().id, 7);

        state.set_filter_group(GroupFilter::Only(ApiGroup::Ais));
        assert!(state.visible_selection().is_none());
        assert_eq!(state.selected_endpoint(), Some(7));

        state.set_filter_group(GroupFilter::Only(ApiGroup::Pis));
        assert_eq!(state.visible_selection().unwrap().id, 7);
    }

    #[test]
    fn test_hover_cursor_walks_filtered_rows() {
        let mut state = view();
        state.set_filter_group(GroupFilter::Only(ApiGroup::Pis));

        state.hover_next();
        assert_eq!(state.hovered_endpoint(), Some(5));
        state.hover_next();
        state.hover_next();
        state.hover_next();
        state.hover_next();
        assert_eq!(state.hovered_endpoint(), Some(11));

        state.hover_prev();
        assert_eq!(state.hovered_endpoint(), Some(7));

        state.select_hovered();
        assert_eq!(state.selected_endpoint(), Some(7));

        state.set_hovered_endpoint(None);
        state.select_hovered();
        assert_eq!(state.selected_endpoint(), Some(7));
    }

    #[test]
    fn test_hover_with_no_rows_clears() {
        let mut state = view();
        state.set_hovered_endpoint(Some(1));
        state.set_filter_group(GroupFilter::Only(ApiGroup::Piis));
        state.set_filter_status(StatusFilter::Only(EndpointStatus::Compliant));
        state.hover_next();
        assert_eq!(state.hovered_endpoint(), None);
    }

    #[test]
    fn test_tab_cycle() {
        let mut state = view();
        state.prev_tab();
        assert_eq!(state.active_tab(), Tab::Compliance);
        state.next_tab();
        state.next_tab();
        assert_eq!(state.active_tab(), Tab::Endpoints);
        state.set_active_tab(Tab::Sca);
        assert_eq!(state.active_tab(), Tab::Sca);
    }

    #[test]
    fn test_five_steps_reach_terminal_stop() {
        let mut state = view();
        state.start_consent_playback();
        for _ in 0..5 {
            state.step_consent_stage();
        }
        assert_eq!(state.consent_stage_index(), 5);
        assert!(!state.is_playing());

        let before = state.consent();
        assert_eq!(state.step_consent_stage(), PlaybackTransition::Unchanged);
        assert_eq!(state.consent(), before);
    }

    #[test]
    fn test_jump_while_playing() {
        let mut state = view();
        state.start_consent_playback();
        state.step_consent_stage();

        assert_eq!(state.jump_to_consent_stage(3), PlaybackTransition::Stopped);
        assert_eq!((state.consent_stage_index(), state.is_playing()), (3, false));
        assert_eq!(state.current_stage().unwrap().id, "authorised");
    }

    #[test]
    fn test_relative_jump_clamps() {
        let mut state = view();
        state.jump_consent_relative(-1);
        assert_eq!(state.consent_stage_index(), 0);
        state.jump_to_consent_stage(5);
        state.jump_consent_relative(1);
        assert_eq!(state.consent_stage_index(), 5);
        state.jump_consent_relative(-2);
        assert_eq!(state.consent_stage_index(), 3);
    }

    #[test]
    fn test_aggregates() {
        let state = view();
        assert_eq!(state.total_endpoints(), 13);
        assert_eq!(state.status_counts().compliant, 9);
        assert_eq!(state.compliance_percent(), 69);
        assert_eq!(state.group_ratio(ApiGroup::Ais).total, 8);
        assert_eq!(state.checklist_progress().percent(), 80);
    }
}
