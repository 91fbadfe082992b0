//! Directory view-model
//!
//! The base advocate list and the criteria are the only sources of truth.
//! Every mutation recomputes the filtered view (and, when the base list
//! changes, the specialty options) before returning, so readers always see
//! views consistent with the current inputs.

use advocates_common::Advocate;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::filter::{filter_advocates, specialty_options, FilterCriteria, FilterField};
use crate::source::{PendingFetch, RecordSource, SourceError};

/// Where the directory is in its single load cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Retrieval outstanding; nothing is filtered yet
    Loading,
    /// Base list received (possibly empty)
    Ready,
    /// Retrieval failed; the message is shown instead of the table
    Failed(String),
}

pub struct Directory {
    advocates: Vec<Advocate>,
    criteria: FilterCriteria,
    filtered: Vec<Advocate>,
    specialty_options: Vec<String>,
    state: LoadState,
    pending: Option<PendingFetch>,
}

impl Directory {
    /// Start the one retrieval and enter [`LoadState::Loading`]
    pub fn mount(source: &RecordSource) -> Self {
        debug!(endpoint = source.endpoint(), "Mounting directory");
        let mut directory = Self::empty(LoadState::Loading);
        directory.pending = Some(source.activate());
        directory
    }

    /// Directory over records already in hand
    pub fn with_advocates(advocates: Vec<Advocate>) -> Self {
        let mut directory = Self::empty(LoadState::Loading);
        directory.apply(Ok(advocates));
        directory
    }

    fn empty(state: LoadState) -> Self {
        Self {
            advocates: Vec::new(),
            criteria: FilterCriteria::new(),
            filtered: Vec::new(),
            specialty_options: Vec::new(),
            state,
            pending: None,
        }
    }

    /// Wait for the outstanding retrieval, if any, and apply its outcome.
    ///
    /// A cancelled retrieval changes nothing.
    pub async fn settle(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending.outcome().await {
            Some(result) => self.apply(result),
            None => debug!("Retrieval cancelled; nothing to apply"),
        }
    }

    fn apply(&mut self, result: Result<Vec<Advocate>, SourceError>) {
        match result {
            Ok(advocates) => {
                debug!(count = advocates.len(), "Advocates loaded");
                self.advocates = advocates;
                self.state = LoadState::Ready;
                self.specialty_options = specialty_options(&self.advocates);
                self.refilter();
            }
            Err(e) => {
                warn!("Failed to load advocates: {}", e);
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }

    fn refilter(&mut self) {
        if self.state == LoadState::Ready {
            self.filtered = filter_advocates(&self.advocates, &self.criteria);
        }
    }

    /// Tear down, abandoning any outstanding retrieval
    pub fn unmount(self) {}

    /// Cancellation token of the outstanding retrieval, if one is pending
    pub fn pending_cancellation(&self) -> Option<CancellationToken> {
        self.pending.as_ref().map(PendingFetch::cancellation_token)
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.criteria.set(field, value);
        self.refilter();
    }

    pub fn toggle_specialty(&mut self, specialty: &str) {
        self.criteria.toggle_specialty(specialty);
        self.refilter();
    }

    /// Clear all criteria; the filtered view becomes the whole list
    pub fn reset(&mut self) {
        self.criteria.reset();
        self.refilter();
    }

    /// Whether a reset would change anything
    pub fn any_filter_active(&self) -> bool {
        self.criteria.is_active()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The full base list as received
    pub fn advocates(&self) -> &[Advocate] {
        &self.advocates
    }

    /// Base list narrowed by the current criteria (empty unless ready)
    pub fn filtered(&self) -> &[Advocate] {
        &self.filtered
    }

    /// Distinct sorted specialties across the base list
    pub fn specialty_options(&self) -> &[String] {
        &self.specialty_options
    }
}

impl Drop for Directory {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("Directory torn down with retrieval outstanding");
            pending.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate(first: &str, specialties: &[&str], years: u32) -> Advocate {
        Advocate {
            id: first.to_lowercase(),
            first_name: first.to_string(),
            last_name: "Smith".to_string(),
            city: "Boston".to_string(),
            degree: "PhD".to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            years_of_experience: years,
            phone_number: "5551112222".to_string(),
        }
    }

    fn names(directory: &Directory) -> Vec<&str> {
        directory
            .filtered()
            .iter()
            .map(|a| a.first_name.as_str())
            .collect()
    }

    fn directory() -> Directory {
        Directory::with_advocates(vec![
            advocate("Ann", &["A"], 3),
            advocate("Ben", &["B"], 8),
            advocate("Cid", &["A", "B"], 1),
        ])
    }

    #[test]
    fn test_loaded_directory_shows_everything() {
        let directory = directory();

        assert_eq!(directory.state(), &LoadState::Ready);
        assert_eq!(names(&directory), vec!["Ann", "Ben", "Cid"]);
        assert_eq!(directory.specialty_options(), &["A".to_string(), "B".to_string()]);
        assert!(!directory.any_filter_active());
    }

    #[test]
    fn test_each_change_recomputes_view() {
        let mut directory = directory();

        directory.toggle_specialty("A");
        assert_eq!(names(&directory), vec!["Ann", "Cid"]);

        directory.set_filter(FilterField::MinYears, "2");
        assert_eq!(names(&directory), vec!["Ann"]);
        assert!(directory.any_filter_active());

        directory.toggle_specialty("A");
        assert_eq!(names(&directory), vec!["Ann", "Ben"]);
    }

    #[test]
    fn test_reset_restores_full_list() {
        let mut directory = directory();
        directory.set_filter(FilterField::FirstName, "zzz");
        directory.toggle_specialty("B");
        assert!(directory.filtered().is_empty());

        directory.reset();
        assert!(!directory.any_filter_active());
        assert_eq!(directory.filtered(), directory.advocates());
    }

    #[test]
    fn test_empty_list_is_ready_not_failed() {
        let directory = Directory::with_advocates(vec![]);

        assert_eq!(directory.state(), &LoadState::Ready);
        assert!(directory.filtered().is_empty());
        assert!(directory.specialty_options().is_empty());
    }

    #[test]
    fn test_failure_preempts_records() {
        let mut directory = Directory::empty(LoadState::Loading);
        directory.apply(Err(SourceError::Status(503, "unavailable".to_string())));

        assert!(matches!(directory.state(), LoadState::Failed(msg) if msg.contains("503")));

        // Criteria still record input but nothing is filtered
        directory.set_filter(FilterField::City, "Boston");
        assert!(directory.filtered().is_empty());
    }

    #[test]
    fn test_no_filtering_while_loading() {
        let mut directory = Directory::empty(LoadState::Loading);
        directory.set_filter(FilterField::Degree, "PhD");

        assert_eq!(directory.state(), &LoadState::Loading);
        assert!(directory.filtered().is_empty());
        assert_eq!(directory.criteria().degree, "PhD");
    }

    #[test]
    fn test_criteria_entered_while_loading_apply_on_arrival() {
        let mut directory = Directory::empty(LoadState::Loading);
        directory.set_filter(FilterField::FirstName, "ben");

        directory.apply(Ok(vec![advocate("Ann", &[], 1), advocate("Ben", &[], 1)]));
        assert_eq!(names(&directory), vec!["Ben"]);
    }

    #[tokio::test]
    async fn test_settle_without_pending_is_noop() {
        let mut directory = directory();
        directory.settle().await;
        assert_eq!(directory.state(), &LoadState::Ready);
        assert!(directory.pending_cancellation().is_none());
    }
}
