//! Viewer controller state machine.
//!
//! `Idle --start--> Loading --success--> Idle`
//! `Loading --failure--> Error --start--> Loading`
//!
//! The controller is the single writer of the working set: only a catalog
//! completion carrying the current ticket replaces records and categories.
//! Search and category changes re-filter synchronously and never fetch.

use std::time::{Duration, Instant};

use catview_engine::{
    Catalog, CategoryOptions, FilterCriteria, Labels, Markers, TableBody, filter_records,
    render_table,
};
use catview_types::{BuildMetadata, ProductRecord};

use crate::config::{Config, DEFAULT_REFRESH_COOLDOWN_MS};

/// Identifies one load so late completions can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading { ticket: LoadTicket },
    Error { message: String },
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Phase::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started(LoadTicket),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A load is already in flight
    InFlight,
    /// The refresh control is still disabled after the last completion
    CoolingDown,
}

/// Completion of one of the two independent requests of a load.
#[derive(Debug, Clone)]
pub enum LoadEvent {
    Metadata(Result<BuildMetadata, String>),
    Catalog(LoadTicket, Result<Catalog, String>),
}

#[derive(Debug, Clone)]
pub struct Controller {
    labels: Labels,
    markers: Markers,
    cooldown: Duration,
    phase: Phase,
    next_ticket: u64,
    refresh_ready_at: Option<Instant>,
    records: Vec<ProductRecord>,
    categories: CategoryOptions,
    query: String,
    view: TableBody,
    visible_count: usize,
    metadata: BuildMetadata,
}

impl Controller {
    pub fn new(labels: Labels, markers: Markers) -> Self {
        let view = render_table(&[], &labels, &markers);
        Self {
            categories: CategoryOptions::new(labels.all_categories.clone()),
            labels,
            markers,
            cooldown: Duration::from_millis(DEFAULT_REFRESH_COOLDOWN_MS),
            phase: Phase::Idle,
            next_ticket: 0,
            refresh_ready_at: None,
            records: Vec::new(),
            query: String::new(),
            view,
            visible_count: 0,
            metadata: BuildMetadata::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.labels.clone(), config.markers.clone())
            .with_cooldown(config.refresh_cooldown())
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    // --- read side -------------------------------------------------------

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn categories(&self) -> &CategoryOptions {
        &self.categories
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            category: self.categories.selected_value().map(str::to_string),
        }
    }

    /// Current table body; replaced wholesale on every change.
    pub fn view(&self) -> &TableBody {
        &self.view
    }

    /// Records shown by the current view.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.categories().len()
    }

    pub fn metadata(&self) -> &BuildMetadata {
        &self.metadata
    }

    pub fn can_refresh(&self, now: Instant) -> bool {
        !self.phase.is_loading() && self.refresh_ready_at.is_none_or(|ready| now >= ready)
    }

    // --- transitions -----------------------------------------------------

    /// Begin a load (initial activation or refresh). Clears any error banner.
    ///
    /// Requests arriving while a load is in flight, or before the refresh
    /// cooldown has elapsed, are ignored.
    pub fn start(&mut self, now: Instant) -> StartOutcome {
        if self.phase.is_loading() {
            return StartOutcome::Ignored(IgnoreReason::InFlight);
        }
        if !self.can_refresh(now) {
            return StartOutcome::Ignored(IgnoreReason::CoolingDown);
        }

        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        self.phase = Phase::Loading { ticket };
        StartOutcome::Started(ticket)
    }

    /// Apply a catalog completion. Returns `false` for a stale ticket.
    ///
    /// On success the working set, category options and counters are
    /// replaced and the full unfiltered table is rendered. On failure the
    /// previous working set stays as-is.
    pub fn finish_catalog(
        &mut self,
        ticket: LoadTicket,
        result: Result<Catalog, String>,
        now: Instant,
    ) -> bool {
        if self.phase != (Phase::Loading { ticket }) {
            return false;
        }

        self.refresh_ready_at = Some(now + self.cooldown);

        match result {
            Ok(catalog) => {
                self.records = catalog.records;
                self.categories.replace(catalog.categories);
                self.query.clear();
                self.phase = Phase::Idle;
                self.rerender();
            }
            Err(message) => {
                self.phase = Phase::Error { message };
            }
        }
        true
    }

    /// Apply a metadata completion; independent of the load phase.
    ///
    /// A failure shows the load-error label in place of the timestamp and
    /// leaves the product count as it was.
    pub fn finish_metadata(&mut self, result: Result<BuildMetadata, String>) {
        match result {
            Ok(metadata) => {
                if metadata.last_updated.is_some() {
                    self.metadata.last_updated = metadata.last_updated;
                }
                if metadata.product_count.is_some() {
                    self.metadata.product_count = metadata.product_count;
                }
                if metadata.category_count.is_some() {
                    self.metadata.category_count = metadata.category_count;
                }
            }
            Err(_) => {
                self.metadata.last_updated = Some(self.labels.load_error.clone());
            }
        }
    }

    pub fn apply(&mut self, event: LoadEvent, now: Instant) -> bool {
        match event {
            LoadEvent::Metadata(result) => {
                self.finish_metadata(result);
                true
            }
            LoadEvent::Catalog(ticket, result) => self.finish_catalog(ticket, result, now),
        }
    }

    // --- filtering -------------------------------------------------------

    /// Replace the search text and re-render. Ignored while loading.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        if self.phase.is_loading() {
            return false;
        }
        self.query = query.into();
        self.rerender();
        true
    }

    /// Select a category by value (`None`/`""` is the sentinel). Ignored
    /// while loading or for unknown categories.
    pub fn select_category(&mut self, category: Option<&str>) -> bool {
        if self.phase.is_loading() || !self.categories.select(category) {
            return false;
        }
        self.rerender();
        true
    }

    pub fn next_category(&mut self) -> bool {
        if self.phase.is_loading() {
            return false;
        }
        self.categories.select_next();
        self.rerender();
        true
    }

    pub fn previous_category(&mut self) -> bool {
        if self.phase.is_loading() {
            return false;
        }
        self.categories.select_previous();
        self.rerender();
        true
    }

    fn rerender(&mut self) {
        let visible = filter_records(&self.records, &self.criteria());
        self.visible_count = visible.len();
        self.view = render_table(&visible, &self.labels, &self.markers);
    }
}
