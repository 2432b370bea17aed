//! Composite views built from a controller.
//!
//! These methods turn the controller's state and derived view into the
//! immutable view models of [`crate::ui::viewmodel`]. Nothing here mutates
//! state; widgets hand the actions on the view models back to
//! [`FilterController::dispatch`].

use super::controller::FilterController;
use crate::domain::{FieldValue, FilterDescriptor, FilterKind, FilterValue, Record};
use crate::matching::highlight_ranges;
use crate::ui::viewmodel::{
    BadgeView, ControlView, DateView, EmptyState, FilterBarView, FilterViewModel, OptionView, RangeView,
    ResultCounterView, ResultRow, ResultsView, SearchBoxView, SelectView, SortOptionView, SortView,
};
use std::collections::HashMap;

impl<T: Record> FilterController<T> {
    /// Computes the full view model for rendering.
    #[must_use]
    pub fn compute_viewmodel(&self) -> FilterViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", total = self.total_count()).entered();

        FilterViewModel {
            filter_bar: self.filter_bar(),
            results: self.results_view(),
        }
    }

    /// Computes the filter bar: search box, controls, badges, sort and counter.
    #[must_use]
    pub fn filter_bar(&self) -> FilterBarView {
        let state = self.state();

        let search = self
            .descriptors()
            .iter()
            .find(|d| d.kind == FilterKind::Search)
            .map(|d| SearchBoxView {
                label: d.label.clone(),
                placeholder: d.placeholder.clone().unwrap_or_else(|| format!("Search {}...", d.label.to_lowercase())),
                query: state.search_query.clone(),
            });

        let controls = self
            .descriptors()
            .iter()
            .filter_map(|d| self.control_view(d))
            .collect();

        let sort = SortView {
            options: self
                .config()
                .sort_fields
                .iter()
                .map(|field| SortOptionView {
                    id: field.id.clone(),
                    label: field.label.clone(),
                    active: state.sort_field.as_deref() == Some(field.id.as_str()),
                })
                .collect(),
            field: state.sort_field.clone(),
            direction: state.sort_direction,
        };

        FilterBarView {
            search,
            controls,
            badges: self.active_badges(),
            sort,
            counter: self.result_counter(),
        }
    }

    fn control_view(&self, descriptor: &FilterDescriptor) -> Option<ControlView> {
        let active = self.state().filters.get(&descriptor.id);

        match descriptor.kind {
            FilterKind::Search => None,
            FilterKind::Single | FilterKind::Multiple => {
                let live: HashMap<String, usize> = if descriptor.options.iter().all(|o| o.count.is_some()) {
                    HashMap::new()
                } else {
                    self.facet_counts(&descriptor.id).into_iter().collect()
                };

                let options = descriptor
                    .options
                    .iter()
                    .map(|option| OptionView {
                        id: option.id.clone(),
                        label: option.label.clone(),
                        count: option.count.or_else(|| live.get(&option.id).copied()),
                        selected: active.is_some_and(|value| value.contains(&option.id)),
                    })
                    .collect();

                let members = match active {
                    Some(FilterValue::Set(members)) => members.iter().cloned().collect(),
                    Some(FilterValue::Scalar(s)) => vec![s.clone()],
                    _ => vec![],
                };

                Some(ControlView::Select(SelectView {
                    id: descriptor.id.clone(),
                    label: descriptor.label.clone(),
                    multiple: descriptor.kind == FilterKind::Multiple,
                    options,
                    members,
                }))
            }
            FilterKind::Range => Some(ControlView::Range(RangeView {
                id: descriptor.id.clone(),
                label: descriptor.label.clone(),
                bounds: descriptor.bounds,
                current: match active {
                    Some(FilterValue::Range { min, max }) => Some((*min, *max)),
                    _ => None,
                },
            })),
            FilterKind::Date => {
                let (from, to) = match active {
                    Some(FilterValue::DateRange { from, to }) => (*from, *to),
                    _ => (None, None),
                };
                Some(ControlView::Date(DateView {
                    id: descriptor.id.clone(),
                    label: descriptor.label.clone(),
                    from,
                    to,
                }))
            }
        }
    }

    /// One badge per active value; set filters get one badge per member.
    ///
    /// Declared filters come first in declaration order, then undeclared ones
    /// by id.
    #[must_use]
    pub fn active_badges(&self) -> Vec<BadgeView> {
        let filters = &self.state().filters;

        let declared = self
            .descriptors()
            .iter()
            .filter_map(|d| filters.get(&d.id).map(|value| (d.id.as_str(), value)));
        let undeclared = filters.iter().filter(|(id, _)| self.descriptor(id).is_none());

        declared
            .chain(undeclared)
            .flat_map(|(id, value)| self.badges_for(id, value))
            .collect()
    }

    fn badges_for(&self, id: &str, value: &FilterValue) -> Vec<BadgeView> {
        let descriptor = self.descriptor(id);
        let label = descriptor.map_or_else(|| id.to_string(), |d| d.label.clone());
        let option_label = |member: &str| {
            descriptor
                .and_then(|d| d.option(member))
                .map_or_else(|| member.to_string(), |o| o.label.clone())
        };

        match value {
            FilterValue::Set(members) => members
                .iter()
                .map(|member| BadgeView {
                    filter_id: id.to_string(),
                    label: label.clone(),
                    value_label: option_label(member),
                    member: Some(member.clone()),
                })
                .collect(),
            FilterValue::Scalar(s) => vec![BadgeView {
                filter_id: id.to_string(),
                label,
                value_label: option_label(s),
                member: None,
            }],
            _ => value
                .labels()
                .into_iter()
                .map(|value_label| BadgeView {
                    filter_id: id.to_string(),
                    label: label.clone(),
                    value_label,
                    member: None,
                })
                .collect(),
        }
    }

    /// Computes the "showing x-y of z" readout and pager.
    #[must_use]
    pub fn result_counter(&self) -> ResultCounterView {
        let state = self.state();
        let total = self.total_count();
        let bounds = state.page_bounds(total);
        let (start, end) = if bounds.is_empty() {
            (0, 0)
        } else {
            (bounds.start + 1, bounds.end)
        };

        ResultCounterView {
            start,
            end,
            total,
            page: state.page,
            page_count: self.page_count(),
            filtered: state.is_filtered(),
        }
    }

    /// Computes the rows of the current page.
    #[must_use]
    pub fn results_view(&self) -> ResultsView {
        let config = self.config();
        let state = self.state();
        let query = state.search_query.as_str();

        let rows: Vec<ResultRow> = self
            .filtered_data()
            .into_iter()
            .map(|item| {
                let title = item
                    .field(&config.title_field)
                    .or_else(|| item.field("name"))
                    .map(|value| cell_text(&value))
                    .unwrap_or_default();
                ResultRow {
                    highlight_ranges: highlight_ranges(&title, query, config.search_mode),
                    cells: config
                        .columns
                        .iter()
                        .map(|column| item.field(column).map(|value| cell_text(&value)).unwrap_or_default())
                        .collect(),
                    title,
                }
            })
            .collect();

        let empty_state = rows.is_empty().then(|| self.empty_state());

        ResultsView {
            view_mode: state.view_mode,
            columns: config.columns.clone(),
            rows,
            empty_state,
        }
    }

    fn empty_state(&self) -> EmptyState {
        let state = self.state();
        if self.items().is_empty() {
            EmptyState {
                message: "No items".to_string(),
                subtitle: "There is nothing to filter yet".to_string(),
            }
        } else if self.total_count() == 0 {
            let subtitle = if state.search_query.is_empty() {
                "Try removing some filters".to_string()
            } else {
                format!("Nothing matches '{}'", state.search_query)
            };
            EmptyState {
                message: "No matching items".to_string(),
                subtitle,
            }
        } else {
            let pages = self.page_count();
            EmptyState {
                message: format!("Page {} is empty", state.page),
                subtitle: format!("The last page is {pages}"),
            }
        }
    }
}

/// Renders a field value as plain cell text.
fn cell_text(value: &FieldValue<'_>) -> String {
    match value {
        FieldValue::Null => String::new(),
        FieldValue::Bool(b) => b.to_string(),
        #[allow(clippy::cast_possible_truncation)]
        FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Text(s) => s.to_string(),
        FieldValue::List(values) => values.iter().map(cell_text).collect::<Vec<_>>().join(", "),
    }
}
