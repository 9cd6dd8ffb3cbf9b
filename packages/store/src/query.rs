//! # List queries over loaded apartments
//!
//! The apartment list page holds the full collection in memory and derives
//! the visible subset from a search term and a sort option. Everything here
//! is a pure function of its inputs: same records and query in, same
//! sequence out.
//!
//! - [`filter`] keeps records whose name, unit number or project contains
//!   the term, compared case-insensitively. An empty term keeps everything.
//! - [`sort`] orders by one field's lowercased value. The sort is stable in
//!   both directions: descending flips the comparison, so records with equal
//!   keys stay in their input order.
//! - [`ApartmentQuery::apply`] filters first, then sorts.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Apartment;

/// Field used to order the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    UnitName,
    UnitNumber,
    Project,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::UnitName => "unitName",
            SortField::UnitNumber => "unitNumber",
            SortField::Project => "project",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A field/direction pair, addressable as `"unitName-asc"` and friends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOption {
    fn default() -> Self {
        Self {
            field: SortField::UnitName,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortOption {
    /// Every option, in the order the sort menu lists them.
    pub const ALL: [SortOption; 6] = [
        SortOption::new(SortField::UnitName, SortDirection::Ascending),
        SortOption::new(SortField::UnitName, SortDirection::Descending),
        SortOption::new(SortField::UnitNumber, SortDirection::Ascending),
        SortOption::new(SortField::UnitNumber, SortDirection::Descending),
        SortOption::new(SortField::Project, SortDirection::Ascending),
        SortOption::new(SortField::Project, SortDirection::Descending),
    ];

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Human label shown in the sort menu.
    pub fn label(&self) -> &'static str {
        match (self.field, self.direction) {
            (SortField::UnitName, SortDirection::Ascending) => "Name (A → Z)",
            (SortField::UnitName, SortDirection::Descending) => "Name (Z → A)",
            (SortField::UnitNumber, SortDirection::Ascending) => "Unit Number (Asc)",
            (SortField::UnitNumber, SortDirection::Descending) => "Unit Number (Desc)",
            (SortField::Project, SortDirection::Ascending) => "Project (A → Z)",
            (SortField::Project, SortDirection::Descending) => "Project (Z → A)",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field.as_str(), self.direction.as_str())
    }
}

/// Returned when a string names no known sort option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option: {0}")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|opt| opt.to_string() == s)
            .ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}

/// Search and sort state of one list view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApartmentQuery {
    pub term: String,
    pub sort: SortOption,
}

impl ApartmentQuery {
    pub fn new(term: impl Into<String>, sort: SortOption) -> Self {
        Self {
            term: term.into(),
            sort,
        }
    }

    /// Filter by the term, then sort. The input slice is left untouched.
    pub fn apply(&self, records: &[Apartment]) -> Vec<Apartment> {
        let mut visible = filter(records, &self.term);
        sort(&mut visible, self.sort.field, self.sort.direction);
        visible
    }
}

/// Records whose name, unit number or project contains `term`, ignoring case.
pub fn filter(records: &[Apartment], term: &str) -> Vec<Apartment> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|apt| {
            [SortField::UnitName, SortField::UnitNumber, SortField::Project]
                .into_iter()
                .any(|field| apt.field(field).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable in-place sort on one field's lowercased value.
pub fn sort(records: &mut [Apartment], field: SortField, direction: SortDirection) {
    // `sort_by` is stable, and reversing the comparator keeps ties in input order.
    records.sort_by(|a, b| {
        let ord = compare_folded(a.field(field), b.field(field));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
