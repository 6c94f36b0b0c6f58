//! Filter and pagination inputs for the list queries.
//!
//! Every list operation takes one of the filter structs below. Each field is
//! optional: `None` contributes no predicate at all (it never means "match
//! NULL"), and everything that is set is AND-combined.

use crate::cli::types::LeagueId;
use chrono::NaiveDate;
use rusqlite::ToSql;

/// Rows returned when the caller does not ask for a specific page size
pub const DEFAULT_LIMIT: u32 = 100;

/// Offset pagination applied after filtering and primary-key ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Matching rows to discard from the front of the result
    pub skip: u32,
    /// Maximum rows to return after `skip`
    pub limit: u32,
}

impl Page {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// Build a page from optional request values, falling back to the defaults
    pub fn from_options(skip: Option<u32>, limit: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            skip: skip.unwrap_or(defaults.skip),
            limit: limit.unwrap_or(defaults.limit),
        }
    }

    /// A page large enough to hold every row of a table
    pub fn unbounded() -> Self {
        Self {
            skip: 0,
            limit: u32::MAX,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Filters for `get_players`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    /// Exact first name match
    pub first_name: Option<String>,
    /// Exact last name match
    pub last_name: Option<String>,
    /// Inclusive lower bound on `last_changed_date`
    pub min_last_changed_date: Option<NaiveDate>,
    pub page: Page,
}

/// Filters for `get_performances`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceFilter {
    pub min_last_changed_date: Option<NaiveDate>,
    pub page: Page,
}

/// Filters for `get_leagues`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueFilter {
    pub league_name: Option<String>,
    pub min_last_changed_date: Option<NaiveDate>,
    pub page: Page,
}

/// Filters for `get_teams`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamFilter {
    pub team_name: Option<String>,
    pub league_id: Option<LeagueId>,
    pub min_last_changed_date: Option<NaiveDate>,
    pub page: Page,
}

/// Accumulates WHERE predicates and their bound parameters.
///
/// Column names are always static strings from this crate; only values are
/// bound as parameters.
#[derive(Default)]
pub(crate) struct WhereClause {
    predicates: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl WhereClause {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `column = value`, skipped when `value` is `None`
    pub(crate) fn eq<T>(mut self, column: &'static str, value: Option<T>) -> Self
    where
        T: ToSql + 'static,
    {
        if let Some(value) = value {
            self.predicates.push(format!("{} = ?", column));
            self.params.push(Box::new(value));
        }
        self
    }

    /// `column >= date`, skipped when `date` is `None`
    pub(crate) fn on_or_after(mut self, column: &'static str, date: Option<NaiveDate>) -> Self {
        if let Some(date) = date {
            self.predicates.push(format!("{} >= ?", column));
            self.params.push(Box::new(date));
        }
        self
    }

    /// Append WHERE, ORDER BY and LIMIT/OFFSET to `select`.
    ///
    /// `order_by` must name the table's primary key so that pages are stable.
    pub(crate) fn paginate(
        mut self,
        select: &str,
        order_by: &'static str,
        page: Page,
    ) -> (String, Vec<Box<dyn ToSql>>) {
        let mut query = String::from(select);

        if !self.predicates.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.predicates.join(" AND "));
        }

        query.push_str(" ORDER BY ");
        query.push_str(order_by);
        query.push_str(" LIMIT ? OFFSET ?");

        self.params.push(Box::new(i64::from(page.limit)));
        self.params.push(Box::new(i64::from(page.skip)));

        (query, self.params)
    }
}
