//! Listing session: filter changes in, latest page out.
//!
//! Every filter change issues a new request. Responses can land out of order,
//! so each request carries a sequence ticket and only the newest ticket may
//! commit its result; anything older is dropped on arrival.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::PropertiesClient;
use crate::errors::AppError;
use crate::models::{FilterState, PropertyPage};

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out monotonically increasing tickets.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued before it.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// What the listing view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// Nothing requested yet.
    Idle,
    Loaded(PropertyPage),
    /// The request succeeded but the page has no rows. `total > 0` means
    /// listings matched and the page is past the end.
    Empty { total: usize, total_pages: usize },
    /// The last request failed; the result set is cleared until the next change.
    Failed(String),
}

impl FetchState {
    fn from_result(result: Result<PropertyPage, AppError>) -> Self {
        match result {
            Ok(page) if page.is_empty() => FetchState::Empty {
                total: page.total,
                total_pages: page.total_pages,
            },
            Ok(page) => FetchState::Loaded(page),
            Err(e) => FetchState::Failed(e.message().to_string()),
        }
    }
}

/// Outcome of [`ListingSession::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response was committed to the view.
    Committed,
    /// A newer request was issued while this one was in flight.
    Superseded,
}

#[derive(Debug)]
struct View {
    filters: FilterState,
    state: FetchState,
}

/// Drives a listing view from filter changes against a [`PropertiesClient`].
#[derive(Debug, Clone)]
pub struct ListingSession {
    client: PropertiesClient,
    sequencer: Arc<RequestSequencer>,
    view: Arc<RwLock<View>>,
}

impl ListingSession {
    pub fn new(client: PropertiesClient) -> Self {
        Self {
            client,
            sequencer: Arc::new(RequestSequencer::new()),
            view: Arc::new(RwLock::new(View {
                filters: FilterState::default(),
                state: FetchState::Idle,
            })),
        }
    }

    /// Request the page for `filters` and commit it if no newer request exists.
    pub async fn apply(&self, filters: FilterState) -> Applied {
        let ticket = self.sequencer.issue();
        let result = self.client.fetch_page(&filters).await;

        let mut view = self.view.write().await;
        if !self.sequencer.is_latest(ticket) {
            tracing::debug!(?ticket, "Dropping superseded listing response");
            return Applied::Superseded;
        }

        view.filters = filters;
        view.state = FetchState::from_result(result);
        Applied::Committed
    }

    /// Re-request the current filters.
    pub async fn refresh(&self) -> Applied {
        let filters = self.filters().await;
        self.apply(filters).await
    }

    pub async fn filters(&self) -> FilterState {
        self.view.read().await.filters.clone()
    }

    pub async fn state(&self) -> FetchState {
        self.view.read().await.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert!(second > first);
        assert!(!sequencer.is_latest(first));
        assert!(sequencer.is_latest(second));
    }

    #[test]
    fn test_fetch_state_from_result() {
        let empty = PropertyPage {
            data: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 0,
        };
        assert_eq!(
            FetchState::from_result(Ok(empty)),
            FetchState::Empty {
                total: 0,
                total_pages: 0
            }
        );

        let past_the_end = PropertyPage {
            data: Vec::new(),
            total: 16,
            page: 5,
            total_pages: 2,
        };
        assert_eq!(
            FetchState::from_result(Ok(past_the_end)),
            FetchState::Empty {
                total: 16,
                total_pages: 2
            }
        );

        let failed = FetchState::from_result(Err(AppError::Upstream("down".into())));
        assert_eq!(failed, FetchState::Failed("down".to_string()));
    }
}
