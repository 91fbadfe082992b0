//! Multi-field advocate filtering
//!
//! Every active sub-criterion narrows the list (AND across fields). Within the
//! specialty selection a record needs at least one of the selected tags (OR).
//! Empty sub-criteria impose no constraint.

use std::collections::BTreeSet;

use advocates_common::Advocate;

/// Single-valued sub-criteria that are edited as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    FirstName,
    LastName,
    City,
    Degree,
    /// Minimum years of experience; parsed as an integer when applied
    MinYears,
    /// Keyword matched against all searchable fields at once
    Search,
}

/// User-entered filter criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub min_years: String,
    pub search: String,
    /// Required specialties; a record needs any one of them
    pub specialties: BTreeSet<String>,
}

impl FilterCriteria {
    /// Empty criteria: everything matches
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::FirstName => &self.first_name,
            FilterField::LastName => &self.last_name,
            FilterField::City => &self.city,
            FilterField::Degree => &self.degree,
            FilterField::MinYears => &self.min_years,
            FilterField::Search => &self.search,
        }
    }

    /// Replace one sub-criterion, leaving the others untouched
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::FirstName => &mut self.first_name,
            FilterField::LastName => &mut self.last_name,
            FilterField::City => &mut self.city,
            FilterField::Degree => &mut self.degree,
            FilterField::MinYears => &mut self.min_years,
            FilterField::Search => &mut self.search,
        };
        *slot = value.into();
    }

    /// Add the specialty if absent, remove it if present
    pub fn toggle_specialty(&mut self, specialty: &str) {
        if !self.specialties.remove(specialty) {
            self.specialties.insert(specialty.to_string());
        }
    }

    /// Clear every sub-criterion
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True iff any sub-criterion holds a value.
    ///
    /// An unparsable minimum-years entry still counts: the user typed
    /// something and may want to clear it.
    pub fn is_active(&self) -> bool {
        !self.first_name.is_empty()
            || !self.last_name.is_empty()
            || !self.city.is_empty()
            || !self.degree.is_empty()
            || !self.min_years.is_empty()
            || !self.search.is_empty()
            || !self.specialties.is_empty()
    }

    /// Minimum years as an integer, or `None` when empty or not a number
    pub fn min_years(&self) -> Option<i64> {
        self.min_years.trim().parse().ok()
    }

    /// Whether a single advocate satisfies every active sub-criterion
    pub fn matches(&self, advocate: &Advocate) -> bool {
        Matcher::new(self).matches(advocate)
    }
}

/// Criteria with needles lowercased once per filtering pass
struct Matcher<'a> {
    first_name: Option<String>,
    last_name: Option<String>,
    city: Option<String>,
    degree: Option<String>,
    search: Option<String>,
    min_years: Option<i64>,
    specialties: &'a BTreeSet<String>,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        fn needle(value: &str) -> Option<String> {
            (!value.is_empty()).then(|| value.to_lowercase())
        }

        Self {
            first_name: needle(&criteria.first_name),
            last_name: needle(&criteria.last_name),
            city: needle(&criteria.city),
            degree: needle(&criteria.degree),
            search: needle(&criteria.search),
            min_years: criteria.min_years(),
            specialties: &criteria.specialties,
        }
    }

    fn matches(&self, advocate: &Advocate) -> bool {
        contains(&advocate.first_name, self.first_name.as_deref())
            && contains(&advocate.last_name, self.last_name.as_deref())
            && contains(&advocate.city, self.city.as_deref())
            && contains(&advocate.degree, self.degree.as_deref())
            && self
                .min_years
                .map_or(true, |min| i64::from(advocate.years_of_experience) >= min)
            && (self.specialties.is_empty()
                || advocate
                    .specialties
                    .iter()
                    .any(|s| self.specialties.contains(s)))
            && self
                .search
                .as_deref()
                .map_or(true, |term| searchable_content(advocate).contains(term))
    }
}

/// Case-insensitive substring test; `needle` is already lowercase
fn contains(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle),
        None => true,
    }
}

/// Lowercased, space-joined text the keyword search runs against
fn searchable_content(advocate: &Advocate) -> String {
    let years = advocate.years_of_experience.to_string();
    [
        advocate.first_name.as_str(),
        advocate.last_name.as_str(),
        advocate.city.as_str(),
        advocate.degree.as_str(),
        years.as_str(),
    ]
    .into_iter()
    .chain(advocate.specialties.iter().map(String::as_str))
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// Advocates satisfying `criteria`, in base order.
///
/// Pure: `base` is never modified and the same inputs give the same output.
pub fn filter_advocates(base: &[Advocate], criteria: &FilterCriteria) -> Vec<Advocate> {
    let matcher = Matcher::new(criteria);
    base.iter()
        .filter(|advocate| matcher.matches(advocate))
        .cloned()
        .collect()
}

/// Distinct specialties across `base`, sorted
pub fn specialty_options(base: &[Advocate]) -> Vec<String> {
    base.iter()
        .flat_map(|advocate| advocate.specialties.iter())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate(first: &str, last: &str, specialties: &[&str], years: u32) -> Advocate {
        Advocate {
            id: format!("{}-{}", first, last),
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: "New York".to_string(),
            degree: "MD".to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            years_of_experience: years,
            phone_number: "5551234567".to_string(),
        }
    }

    fn names(advocates: &[Advocate]) -> Vec<&str> {
        advocates.iter().map(|a| a.first_name.as_str()).collect()
    }

    fn ann_ben_cid() -> Vec<Advocate> {
        vec![
            advocate("Ann", "Archer", &["A"], 3),
            advocate("Ben", "Baker", &["B"], 8),
            advocate("Cid", "Cole", &["A", "B"], 1),
        ]
    }

    #[test]
    fn test_inactive_criteria_keep_everything() {
        let base = ann_ben_cid();
        let criteria = FilterCriteria::new();

        assert!(!criteria.is_active());
        assert_eq!(filter_advocates(&base, &criteria), base);
    }

    #[test]
    fn test_text_match_is_case_insensitive_substring() {
        let base = vec![
            advocate("John", "smith", &[], 1),
            advocate("Jane", "Doe", &[], 1),
        ];

        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::LastName, "SMITH");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["John"]);

        criteria.reset();
        criteria.set(FilterField::FirstName, "an");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Jane"]);
    }

    #[test]
    fn test_city_and_degree_filters() {
        let mut chicago = advocate("Alice", "Johnson", &[], 5);
        chicago.city = "Chicago".to_string();
        chicago.degree = "MSW".to_string();
        let base = vec![advocate("John", "Doe", &[], 10), chicago];

        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::City, "chic");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Alice"]);

        criteria.reset();
        criteria.set(FilterField::Degree, "md");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["John"]);
    }

    #[test]
    fn test_min_years_is_inclusive() {
        let base = vec![
            advocate("Five", "X", &[], 5),
            advocate("Seven", "X", &[], 7),
            advocate("Four", "X", &[], 4),
        ];

        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::MinYears, "5");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Five", "Seven"]);
    }

    #[test]
    fn test_unparsable_min_years_imposes_no_constraint() {
        let base = vec![advocate("Four", "X", &[], 4), advocate("Zero", "X", &[], 0)];

        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::MinYears, "abc");
        assert_eq!(criteria.min_years(), None);
        assert_eq!(filter_advocates(&base, &criteria), base);
    }

    #[test]
    fn test_min_years_tolerates_surrounding_whitespace() {
        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::MinYears, " 12 ");
        assert_eq!(criteria.min_years(), Some(12));
    }

    #[test]
    fn test_specialty_selection_needs_any_overlap() {
        let base = vec![
            advocate("Both", "X", &["Cardiology", "Oncology"], 1),
            advocate("Onc", "X", &["Oncology"], 1),
        ];

        let mut criteria = FilterCriteria::new();
        criteria.toggle_specialty("Cardiology");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Both"]);

        criteria.toggle_specialty("Oncology");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Both", "Onc"]);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_specialty("A");
        let before = criteria.specialties.clone();

        criteria.toggle_specialty("B");
        criteria.toggle_specialty("B");
        assert_eq!(criteria.specialties, before);

        criteria.toggle_specialty("A");
        criteria.toggle_specialty("A");
        assert_eq!(criteria.specialties, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::FirstName, "Ann");
        criteria.set(FilterField::LastName, "Archer");
        criteria.set(FilterField::City, "York");
        criteria.set(FilterField::Degree, "MD");
        criteria.set(FilterField::MinYears, "3");
        criteria.set(FilterField::Search, "a");
        criteria.toggle_specialty("A");
        assert!(criteria.is_active());

        criteria.reset();
        assert_eq!(criteria, FilterCriteria::new());
        assert!(!criteria.is_active());
    }

    #[test]
    fn test_any_single_field_makes_criteria_active() {
        for field in [
            FilterField::FirstName,
            FilterField::LastName,
            FilterField::City,
            FilterField::Degree,
            FilterField::MinYears,
            FilterField::Search,
        ] {
            let mut criteria = FilterCriteria::new();
            criteria.set(field, "x");
            assert!(criteria.is_active(), "{:?} should activate", field);
            assert_eq!(criteria.get(field), "x");
        }

        let mut criteria = FilterCriteria::new();
        criteria.toggle_specialty("A");
        assert!(criteria.is_active());
    }

    #[test]
    fn test_fields_combine_with_and() {
        let base = ann_ben_cid();

        let mut criteria = FilterCriteria::new();
        criteria.toggle_specialty("A");
        criteria.set(FilterField::MinYears, "2");

        // Cid fails on years, Ben fails on specialty
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Ann"]);
    }

    #[test]
    fn test_search_spans_all_fields() {
        let base = ann_ben_cid();

        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::Search, "ann archer");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Ann"]);

        criteria.set(FilterField::Search, "8");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Ben"]);

        criteria.set(FilterField::Search, "b");
        assert_eq!(names(&filter_advocates(&base, &criteria)), vec!["Ben", "Cid"]);
    }

    #[test]
    fn test_filtering_is_idempotent_and_leaves_base_alone() {
        let base = ann_ben_cid();
        let snapshot = base.clone();

        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::LastName, "a");
        let first = filter_advocates(&base, &criteria);
        let second = filter_advocates(&base, &criteria);

        assert_eq!(first, second);
        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_specialty_options_are_distinct_and_sorted() {
        let base = vec![
            advocate("A", "X", &["Pediatrics", "Bipolar"], 1),
            advocate("B", "X", &["Bipolar", "LGBTQ"], 1),
            advocate("C", "X", &[], 1),
        ];

        assert_eq!(
            specialty_options(&base),
            vec!["Bipolar".to_string(), "LGBTQ".to_string(), "Pediatrics".to_string()]
        );
        assert!(specialty_options(&[]).is_empty());
    }
}
