//! Incremental "load more" cursor over a [`FilteredSet`].
//!
//! The cursor marks how much of the filtered set is materialized: the
//! paginated slice is always `filtered[0..cursor]`. A cursor is bound to the
//! generation of the filtered set it was seeded on, so a page computed for
//! one filter can never be appended to another.
//!
//! Loading more is split into [`Pagination::begin_load_more`] and
//! [`Pagination::complete_load_more`]. Between the two calls the table reports
//! itself as loading; a filter change in that window reseeds the cursor and the
//! outstanding [`LoadTicket`] is discarded when it completes.

use std::num::NonZeroUsize;

use tracing::{debug, warn};

use crate::filter::FilteredSet;
use crate::record::SharedRecord;

/// Default number of records loaded initially and per "load more".
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(size) => size,
    None => unreachable!(),
};

/// Handle for an in-flight load-more request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    from: usize,
}

impl LoadTicket {
    /// Generation of the filtered set the request was issued against.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cursor position when the request was issued.
    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }
}

/// Pagination cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: NonZeroUsize,
    cursor: usize,
    total: usize,
    generation: Option<u64>,
    loading: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Create an unseeded cursor. Nothing is materialized until
    /// [`Pagination::load_initial`] runs.
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            cursor: 0,
            total: 0,
            generation: None,
            loading: false,
        }
    }

    #[must_use]
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Number of records in the paginated slice.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Size of the filtered set the cursor was last seeded on.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Generation of the filtered set the cursor belongs to, if seeded.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    #[must_use]
    pub fn more_available(&self) -> bool {
        self.generation.is_some() && self.cursor < self.total
    }

    /// Whether a load-more request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Ticket of the in-flight load-more request, if any.
    #[must_use]
    pub fn pending(&self) -> Option<LoadTicket> {
        let generation = self.generation?;
        self.loading.then_some(LoadTicket {
            generation,
            from: self.cursor,
        })
    }

    /// Seed the cursor on `set`, materializing the first page.
    ///
    /// Any in-flight load-more is abandoned.
    pub fn load_initial<'a>(&mut self, set: &'a FilteredSet) -> &'a [SharedRecord] {
        self.generation = Some(set.generation());
        self.total = set.len();
        self.cursor = self.page_size.get().min(self.total);
        self.loading = false;
        debug!(
            generation = set.generation(),
            cursor = self.cursor,
            total = self.total,
            "pagination seeded"
        );
        set.head(self.cursor)
    }

    /// Current paginated slice of `set`.
    ///
    /// Empty when the cursor was seeded on a different generation.
    #[must_use]
    pub fn slice<'a>(&self, set: &'a FilteredSet) -> &'a [SharedRecord] {
        if self.generation == Some(set.generation()) {
            set.head(self.cursor)
        } else {
            &[]
        }
    }

    /// Extend the cursor by one page synchronously.
    ///
    /// A no-op when nothing more is available, when the cursor was never
    /// seeded, or when `set` is not the filtered set the cursor belongs to.
    pub fn load_more<'a>(&mut self, set: &'a FilteredSet) -> &'a [SharedRecord] {
        if let Some(ticket) = self.begin_load_more(set) {
            self.complete_load_more(ticket, set);
        }
        self.slice(set)
    }

    /// Start an asynchronous load-more.
    ///
    /// Returns `None` (and leaves the state untouched) when the request would
    /// be a no-op or another request is already in flight.
    pub fn begin_load_more(&mut self, set: &FilteredSet) -> Option<LoadTicket> {
        let Some(generation) = self.generation else {
            warn!("load more requested before the initial page was loaded");
            return None;
        };
        if generation != set.generation() {
            warn!(
                expected = generation,
                actual = set.generation(),
                "load more requested against a different filtered set"
            );
            return None;
        }
        if self.loading || !self.more_available() {
            return None;
        }

        self.loading = true;
        Some(LoadTicket {
            generation,
            from: self.cursor,
        })
    }

    /// Apply a previously issued ticket. Returns `true` if the cursor moved.
    ///
    /// Tickets issued before the last reseed are dropped.
    pub fn complete_load_more(&mut self, ticket: LoadTicket, set: &FilteredSet) -> bool {
        let current = self.generation == Some(ticket.generation)
            && set.generation() == ticket.generation
            && self.loading
            && self.cursor == ticket.from;
        if !current {
            debug!(
                ticket = ticket.generation,
                generation = ?self.generation,
                "discarding stale load-more"
            );
            return false;
        }

        self.loading = false;
        self.total = set.len();
        self.cursor = self
            .cursor
            .saturating_add(self.page_size.get())
            .min(self.total);
        debug!(cursor = self.cursor, total = self.total, "loaded more records");
        true
    }
}
