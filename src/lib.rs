//! Facetkit: a client-side filter, sort and pagination state machine.
//!
//! Facetkit keeps the filter state of a listing screen (active filters, a
//! free-text query, a sort key and a page window) and derives from it the
//! page of items to display. It provides:
//! - A closed set of [`FilterAction`]s applied by a pure reducer
//! - A [`FilterController`] owning items, state and a memoized derived view
//! - Default matching, ordering and highlighting rules with caller overrides
//! - Display-ready view models for search, select, badge and counter widgets
//! - Theme-driven ANSI rendering of those view models

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Demo binary (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Action reducer                                   │
//! │  - Controller and derived view                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                        │
//! ┌───────────────────────┐           ┌───────────────────────┐
//! │ Matching (matching/)  │           │ UI Layer (ui/)        │
//! │ - Search and filters  │           │ - View models         │
//! │ - Sort keys           │           │ - Theming             │
//! │ - Highlighting        │           │ - Components          │
//! └───────────────────────┘           └───────────────────────┘
//!         │                                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Filter values and descriptors                    │
//! │  - Record access                                    │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Actions, reducer, controller and composite views
//! - [`domain`]: Filter values, descriptors, records and errors
//! - [`matching`]: Default search, filter, sort and highlight rules
//! - [`ui`]: View models, themes and terminal rendering
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Configuration is plain TOML:
//!
//! ```toml
//! page_size = 10
//! view_mode = "table"
//! search_mode = "fuzzy"
//! columns = ["brand", "price"]
//! theme = "catppuccin-latte"
//!
//! [[sort_fields]]
//! id = "price"
//! label = "Price"
//! field_type = "number"
//!
//! [[filters]]
//! id = "brand"
//! label = "Brand"
//! kind = "multiple"
//! options = [{ id = "Acme", label = "Acme" }, { id = "Zeta", label = "Zeta" }]
//! ```
//!
//! # Example
//!
//! ```rust
//! use facetkit::{Config, FilterAction, FilterController};
//! use serde_json::json;
//!
//! let config = Config::from_toml_str("page_size = 1")?;
//! let items = vec![json!({"title": "Red Shirt"}), json!({"title": "Red Hat"})];
//! let mut controller = FilterController::from_config(items, &config);
//!
//! controller.dispatch(FilterAction::from_arg("search=red")?);
//! controller.dispatch(FilterAction::from_arg("page=2")?);
//! assert_eq!(controller.filtered_data()[0]["title"], "Red Hat");
//! # Ok::<(), facetkit::FacetError>(())
//! ```

pub mod app;
pub mod domain;
pub mod matching;
pub mod observability;
pub mod ui;

pub use app::{reduce, FilterAction, FilterController, FilterState, SearchMode, SortDirection, Transition, ViewMode};
pub use domain::{
    ActiveFilters, FacetError, FieldType, FieldValue, FilterDescriptor, FilterKind, FilterOption, FilterValue,
    Record, Result, SortField,
};
pub use ui::Theme;

use matching::{MatchRules, DEFAULT_SEARCH_FIELDS};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Controller, matching and rendering configuration.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per page. Values below 1 are treated as 1. Default: 20
    pub page_size: usize,

    /// Initial display mode. Default: `grid`
    pub view_mode: ViewMode,

    /// Fields the free-text query is checked against.
    ///
    /// Default: `title`, `name`, `description`, `content`, `tags`
    pub search_fields: Vec<String>,

    /// How the query matches a field. Default: `contains`
    pub search_mode: SearchMode,

    /// Field shown as the row title. Default: `"title"`
    pub title_field: String,

    /// Fields shown as extra columns in the results.
    pub columns: Vec<String>,

    /// Fields offered by the sort selector, with their comparison types.
    pub sort_fields: Vec<SortField>,

    /// Filter descriptors used by [`FilterController::from_config`].
    pub filters: Vec<FilterDescriptor>,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(alias = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: app::state::DEFAULT_PAGE_SIZE,
            view_mode: ViewMode::default(),
            search_fields: DEFAULT_SEARCH_FIELDS.iter().map(|f| (*f).to_string()).collect(),
            search_mode: SearchMode::default(),
            title_field: "title".to_string(),
            columns: vec![],
            sort_fields: vec![],
            filters: vec![],
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// Unknown keys are ignored and unparseable values fall back to their
    /// defaults. Descriptors and sort field types need the richer TOML form.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: String → `usize` (falls back to 20)
    /// - `view_mode`, `search_mode`: mode name (falls back to the default)
    /// - `search_fields`, `columns`: comma-separated list (empty values dropped)
    /// - `title_field`, `theme`, `theme_file`, `trace_level`: copied as is
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use facetkit::{Config, ViewMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "5".to_string());
    /// map.insert("view_mode".to_string(), "table".to_string());
    /// map.insert("columns".to_string(), "brand, price".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 5);
    /// assert_eq!(config.view_mode, ViewMode::Table);
    /// assert_eq!(config.columns, vec!["brand", "price"]);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let list = |key: &str| {
            map.get(key)
                .map(|s| {
                    s.split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(String::from)
                        .collect::<Vec<_>>()
                })
                .filter(|v| !v.is_empty())
        };

        Self {
            page_size: map
                .get("page_size")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.page_size),
            view_mode: map
                .get("view_mode")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.view_mode),
            search_fields: list("search_fields").unwrap_or(defaults.search_fields),
            search_mode: map
                .get("search_mode")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.search_mode),
            title_field: map.get("title_field").cloned().unwrap_or(defaults.title_field),
            columns: list("columns").unwrap_or_default(),
            sort_fields: vec![],
            filters: vec![],
            theme_name: map.get("theme").cloned(),
            theme_file: map.get("theme_file").cloned(),
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`FacetError::Toml`] if the document is malformed or a value
    /// has the wrong shape.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`FacetError::Io`] if the file cannot be read and
    /// [`FacetError::Toml`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Builds the default matching rules for `descriptors`.
    ///
    /// Field types come from the descriptors first; declared sort fields
    /// override them.
    #[must_use]
    pub fn match_rules(&self, descriptors: &[FilterDescriptor]) -> MatchRules {
        let field_types = descriptors
            .iter()
            .filter_map(|d| d.field_type.map(|t| (d.id.clone(), t)))
            .chain(self.sort_fields.iter().map(|s| (s.id.clone(), s.field_type)))
            .collect();

        MatchRules {
            search_fields: self.search_fields.clone(),
            search_mode: self.search_mode,
            field_types,
        }
    }

    /// Resolves the configured theme.
    ///
    /// `theme_file` wins over `theme_name`; anything that fails to load falls
    /// back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn toml_declares_descriptors_and_sort_types() {
        let config = Config::from_toml_str(
            r#"
            page_size = 5
            search_mode = "fuzzy"
            theme = "catppuccin-latte"

            [[sort_fields]]
            id = "created_at"
            label = "Created"
            field_type = "timestamp"

            [[filters]]
            id = "price"
            label = "Price"
            kind = "range"
            field_type = "number"
            "#,
        )
        .unwrap();

        assert_eq!(config.page_size, 5);
        assert_eq!(config.search_mode, SearchMode::Fuzzy);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));

        let rules = config.match_rules(&config.filters);
        assert_eq!(rules.field_type("created_at"), Some(FieldType::Timestamp));
        assert_eq!(rules.field_type("price"), Some(FieldType::Number));
        assert_eq!(rules.field_type("title"), None);
    }

    #[test]
    fn sort_field_type_overrides_descriptor() {
        let config = Config {
            sort_fields: vec![SortField::new("code", "Code", FieldType::Text)],
            ..Config::default()
        };
        let descriptors = [FilterDescriptor::range("code", "Code", 0.0, 10.0)];
        assert_eq!(config.match_rules(&descriptors).field_type("code"), Some(FieldType::Text));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = Config::from_toml_str("page_size = \"many\"").unwrap_err();
        assert!(matches!(err, FacetError::Toml(_)));
    }

    #[test]
    fn map_falls_back_on_bad_values() {
        let map: BTreeMap<String, String> = [
            ("page_size", "lots"),
            ("search_mode", "psychic"),
            ("search_fields", " , "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.search_mode, SearchMode::Contains);
        assert_eq!(config.search_fields, Config::default().search_fields);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme(), Theme::default());
    }
}
