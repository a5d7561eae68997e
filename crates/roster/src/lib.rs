//! Search, filter and pagination state for the user-management screen.
//!
//! The controller owns only the interaction state (query text, page index,
//! collapse flag). The roster itself stays with the caller and is passed in
//! whenever a derived view or a page bound is needed, so the derived data can
//! never drift from the state that produced it.

use std::ops::Range;

use shared::{
    domain::{PersonRecord, Role},
    protocol::{NavigationRequest, RoleChangeRequest, ViewTarget},
};

mod tone;

pub use tone::{role_tone, RoleTone};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterViewState {
    search_query: String,
    current_page: usize,
    collapsed: bool,
}

impl Default for RosterViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            current_page: 1,
            collapsed: false,
        }
    }
}

impl RosterViewState {
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterViewController {
    state: RosterViewState,
}

impl RosterViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RosterViewState {
        &self.state
    }

    pub fn search_query(&self) -> &str {
        self.state.search_query()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.collapsed()
    }

    /// Replaces the query and returns to the first page.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.state.search_query = text.into();
        self.state.current_page = 1;
        tracing::debug!(query = %self.state.search_query, "roster search updated");
    }

    pub fn set_collapsed(&mut self, flag: bool) {
        self.state.collapsed = flag;
    }

    pub fn toggle_collapsed(&mut self) {
        self.set_collapsed(!self.state.collapsed);
    }

    /// Stores `page` clamped into `[1, total_pages]` for the current filter.
    pub fn go_to_page(&mut self, roster: &[PersonRecord], page: i64) {
        let filtered_count = filter_roster(roster, &self.state.search_query).len();
        let total = total_pages(filtered_count);
        let clamped = clamp_page(page, total);
        if clamped != self.state.current_page {
            tracing::debug!(
                requested = page,
                page = clamped,
                total_pages = total,
                "roster page changed"
            );
        }
        self.state.current_page = clamped;
    }

    pub fn next_page(&mut self, roster: &[PersonRecord]) {
        let next = self.current_page_i64().saturating_add(1);
        self.go_to_page(roster, next);
    }

    pub fn prev_page(&mut self, roster: &[PersonRecord]) {
        let prev = self.current_page_i64().saturating_sub(1);
        self.go_to_page(roster, prev);
    }

    pub fn select_person(&self, person: &PersonRecord) -> NavigationRequest {
        tracing::info!(person_id = person.id.0, "opening person detail");
        NavigationRequest {
            target: ViewTarget::PersonDetail,
            payload: person.clone(),
        }
    }

    /// Records a role edit as an intent for whoever owns the roster. The
    /// controller never mutates roster entries.
    pub fn request_role_change(&self, person: &PersonRecord, role: Role) -> RoleChangeRequest {
        tracing::info!(
            person_id = person.id.0,
            from = ?person.role,
            to = %role,
            "role change requested"
        );
        RoleChangeRequest {
            person_id: person.id,
            previous: person.role,
            requested: role,
        }
    }

    pub fn view<'a>(&'a self, roster: &'a [PersonRecord]) -> RosterView<'a> {
        let filtered = filter_roster(roster, &self.state.search_query);
        let total_pages = total_pages(filtered.len());
        // The roster may have shrunk since the page was stored.
        let current_page = self.state.current_page.clamp(1, total_pages);
        let start = (current_page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(filtered.len());

        RosterView {
            filtered,
            page_range: start..end,
            total_pages,
            current_page,
            search_query: &self.state.search_query,
            collapsed: self.state.collapsed,
        }
    }

    fn current_page_i64(&self) -> i64 {
        i64::try_from(self.state.current_page).unwrap_or(i64::MAX)
    }
}

/// Derived, read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView<'a> {
    pub filtered: Vec<&'a PersonRecord>,
    page_range: Range<usize>,
    pub total_pages: usize,
    pub current_page: usize,
    pub search_query: &'a str,
    pub collapsed: bool,
}

impl<'a> RosterView<'a> {
    pub fn paginated(&self) -> &[&'a PersonRecord] {
        &self.filtered[self.page_range.clone()]
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// True when nothing matches; the screen shows its "no users found" row.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// Case-insensitive substring match on name or email, keeping roster order.
/// An empty query keeps everyone.
pub fn filter_roster<'a>(roster: &'a [PersonRecord], query: &str) -> Vec<&'a PersonRecord> {
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|person| matches_query(person, &needle))
        .collect()
}

fn matches_query(person: &PersonRecord, needle: &str) -> bool {
    needle.is_empty()
        || person.name.to_lowercase().contains(needle)
        || person.email.to_lowercase().contains(needle)
}

/// Never less than one, so an empty result still has a page to sit on.
pub fn total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE).max(1)
}

pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let upper = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    usize::try_from(page.clamp(1, upper)).unwrap_or(1)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/property_tests.rs"]
mod property_tests;
