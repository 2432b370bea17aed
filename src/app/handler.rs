//! The reducer: pure state transitions for filter actions.
//!
//! [`reduce`] applies one [`FilterAction`] to a [`FilterState`] and reports
//! what the transition invalidated, so the controller knows how much of the
//! derived view to recompute.
//!
//! # Architecture
//!
//! ```text
//! Widget interaction → FilterAction → reduce → FilterState'
//!                                        ↓
//!                                   Transition → controller recompute
//! ```
//!
//! Every transition is synchronous and replaces the state in one step; there
//! is no intermediate state a reader could observe.
//!
//! # Example
//!
//! ```rust
//! use facetkit::{reduce, FilterAction, FilterState, Transition};
//!
//! let initial = FilterState::default();
//! let mut state = initial.clone();
//! let transition = reduce(&mut state, &FilterAction::SetSearchQuery("shoe".into()), &initial);
//! assert_eq!(transition, Transition::Refilter);
//! assert_eq!(state.search_query, "shoe");
//! ```

use super::actions::FilterAction;
use super::state::FilterState;
use crate::domain::FilterValue;

/// What a transition invalidated in the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state is unchanged.
    Unchanged,
    /// Only pagination or display mode changed; the ordered result set stands.
    Paged,
    /// The ordering changed; the matched set stands.
    Resort,
    /// Filters or the query changed; matching and ordering must be redone.
    Refilter,
}

impl Transition {
    /// Returns true unless the state is unchanged.
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Applies `action` to `state`.
///
/// `initial` is the construction-time state restored by
/// [`FilterAction::Reset`]. The returned [`Transition`] describes the widest
/// part of the derived view the change affects; a transition that leaves the
/// state equal to what it was reports [`Transition::Unchanged`].
pub fn reduce(state: &mut FilterState, action: &FilterAction, initial: &FilterState) -> Transition {
    let _span = tracing::debug_span!("reduce", action = ?action).entered();

    let before = state.clone();

    let transition = match action {
        FilterAction::SetFilter { id, value } => {
            state.filters.put(id, value.clone());
            Transition::Refilter
        }
        FilterAction::RemoveFilter { id, value } => {
            match (state.filters.take(id), value) {
                (Some(FilterValue::Set(mut members)), Some(member)) => {
                    members.remove(member);
                    state.filters.put(id, FilterValue::Set(members));
                }
                (Some(_) | None, _) => {}
            }
            Transition::Refilter
        }
        FilterAction::ClearAllFilters => {
            state.filters.clear();
            state.search_query.clear();
            Transition::Refilter
        }
        FilterAction::SetSearchQuery(query) => {
            state.search_query.clone_from(query);
            Transition::Refilter
        }
        FilterAction::SetSort { field, direction } => {
            state.sort_field.clone_from(field);
            state.sort_direction = *direction;
            Transition::Resort
        }
        FilterAction::SetViewMode(mode) => {
            state.view_mode = *mode;
            Transition::Paged
        }
        FilterAction::SetPage(page) => {
            state.page = (*page).max(1);
            Transition::Paged
        }
        FilterAction::SetPageSize(size) => {
            state.page_size = (*size).max(1);
            Transition::Paged
        }
        FilterAction::Reset => {
            state.clone_from(initial);
            Transition::Refilter
        }
    };

    if action.resets_page() {
        state.page = 1;
    }

    if *state == before {
        tracing::trace!("state unchanged");
        return Transition::Unchanged;
    }

    // Matching only depends on filters and query; a reset or clear that left
    // them untouched needs at most a re-sort.
    let transition = match transition {
        Transition::Refilter
            if state.filters == before.filters && state.search_query == before.search_query =>
        {
            if state.sort_field == before.sort_field && state.sort_direction == before.sort_direction {
                Transition::Paged
            } else {
                Transition::Resort
            }
        }
        other => other,
    };

    tracing::trace!(
        ?transition,
        active_filters = state.filters.len(),
        page = state.page,
        "state updated"
    );

    transition
}
