use crate::error::{ApiError, REVIEWS_FAILED_MESSAGE};
use crate::models::review::Review;
use leptos::logging::{error, log, warn};

/// Identifies one fetch so that late responses for an older property can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub property_id: String,
    pub generation: u64,
}

/// What the review section should show, in precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewsView {
    Loading,
    Error(String),
    Empty,
    List(Vec<Review>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewsState {
    pub reviews: Vec<Review>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for ReviewsState {
    fn default() -> Self {
        Self {
            reviews: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl ReviewsState {
    /// Starts a fetch for `property_id`. An empty id issues nothing and leaves what is shown as is,
    /// but still supersedes any fetch in flight.
    pub fn request(&mut self, property_id: &str) -> Option<FetchTicket> {
        self.generation += 1;
        if property_id.is_empty() {
            log!("[REVIEWS] No property id, skipping fetch");
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(FetchTicket {
            property_id: property_id.to_string(),
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a fetch result. Returns false if the ticket was superseded and the result dropped.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<Vec<Review>, ApiError>) -> bool {
        if !self.is_current(ticket) {
            warn!(
                "[REVIEWS] Dropping stale response for property {} (generation {}, current {})",
                ticket.property_id, ticket.generation, self.generation
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(reviews) => {
                log!(
                    "[REVIEWS] Loaded {} reviews for property {}",
                    reviews.len(),
                    ticket.property_id
                );
                self.reviews = reviews;
            }
            Err(err) => {
                error!(
                    "[REVIEWS] Error fetching reviews for property {} ({:?}): {}",
                    ticket.property_id,
                    err.kind(),
                    err
                );
                self.error = Some(REVIEWS_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn view(&self) -> ReviewsView {
        if self.loading {
            ReviewsView::Loading
        } else if let Some(message) = &self.error {
            ReviewsView::Error(message.clone())
        } else if self.reviews.is_empty() {
            ReviewsView::Empty
        } else {
            ReviewsView::List(self.reviews.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str, comment: &str) -> Review {
        Review {
            id: id.into(),
            comment: comment.into(),
            name: None,
            rating: None,
            avatar: None,
        }
    }

    #[test]
    fn starts_loading() {
        assert_eq!(ReviewsState::default().view(), ReviewsView::Loading);
    }

    #[test]
    fn empty_property_id_issues_nothing() {
        let mut state = ReviewsState::default();
        assert_eq!(state.request(""), None);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert!(state.reviews.is_empty());
        assert_eq!(state.view(), ReviewsView::Loading);
    }

    #[test]
    fn clearing_property_id_drops_fetch_in_flight() {
        let mut state = ReviewsState::default();
        let in_flight = state.request("p1").unwrap();
        assert_eq!(state.request(""), None);

        assert!(!state.resolve(&in_flight, Ok(vec![review("1", "Great stay")])));
        assert!(state.reviews.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn success_replaces_reviews_in_received_order() {
        let mut state = ReviewsState::default();
        let ticket = state.request("p1").unwrap();
        let reviews = vec![review("2", "Lovely"), review("1", "Great stay")];

        assert!(state.resolve(&ticket, Ok(reviews.clone())));
        assert!(!state.loading);
        assert_eq!(state.view(), ReviewsView::List(reviews));
    }

    #[test]
    fn empty_response_shows_empty_view() {
        let mut state = ReviewsState::default();
        let ticket = state.request("p1").unwrap();
        state.resolve(&ticket, Ok(Vec::new()));
        assert_eq!(state.view(), ReviewsView::Empty);
    }

    #[test]
    fn failure_sets_generic_error_and_keeps_last_reviews() {
        let mut state = ReviewsState::default();
        let first = state.request("p1").unwrap();
        state.resolve(&first, Ok(vec![review("1", "Great stay")]));

        let second = state.request("p2").unwrap();
        state.resolve(
            &second,
            Err(ApiError::Server { status: 500, status_text: "Internal Server Error".into() }),
        );

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch reviews."));
        assert_eq!(state.reviews, vec![review("1", "Great stay")]);
        assert_eq!(state.view(), ReviewsView::Error("Failed to fetch reviews.".into()));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = ReviewsState::default();
        let old = state.request("p1").unwrap();
        let current = state.request("p2").unwrap();

        assert!(state.resolve(&current, Ok(vec![review("2", "Sea view")])));
        assert!(!state.resolve(&old, Ok(vec![review("1", "Old news")])));

        assert_eq!(state.reviews, vec![review("2", "Sea view")]);
    }

    #[test]
    fn stale_failure_does_not_mask_current_load() {
        let mut state = ReviewsState::default();
        let old = state.request("p1").unwrap();
        let _current = state.request("p2").unwrap();

        assert!(!state.resolve(&old, Err(ApiError::Network("aborted".into()))));
        assert_eq!(state.view(), ReviewsView::Loading);
    }

    #[test]
    fn view_precedence_is_loading_then_error_then_empty() {
        let mut state = ReviewsState {
            loading: true,
            error: Some("boom".into()),
            ..ReviewsState::default()
        };
        assert_eq!(state.view(), ReviewsView::Loading);

        state.loading = false;
        assert_eq!(state.view(), ReviewsView::Error("boom".into()));

        state.error = None;
        assert_eq!(state.view(), ReviewsView::Empty);
    }
}
