use futures::future::{FutureExt, LocalBoxFuture};
use staybook::api::{Backend, IdempotencyKey};
use staybook::error::ApiError;
use staybook::models::booking::BookingFormData;
use staybook::models::review::Review;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// In-memory stand-in for the booking backend.
/// Clones share the same recordings, so a test can keep one and hand the other to a component.
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Rc<RefCell<Recorded>>,
}

#[derive(Default)]
struct Recorded {
    bookings: Vec<(BookingFormData, IdempotencyKey)>,
    review_requests: Vec<String>,
    booking_results: VecDeque<Result<(), ApiError>>,
    review_results: VecDeque<Result<Vec<Review>, ApiError>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn push_booking_result(&self, result: Result<(), ApiError>) {
        self.inner.borrow_mut().booking_results.push_back(result);
    }

    pub fn push_review_result(&self, result: Result<Vec<Review>, ApiError>) {
        self.inner.borrow_mut().review_results.push_back(result);
    }

    pub fn bookings(&self) -> Vec<(BookingFormData, IdempotencyKey)> {
        self.inner.borrow().bookings.clone()
    }

    pub fn review_requests(&self) -> Vec<String> {
        self.inner.borrow().review_requests.clone()
    }
}

impl Backend for MockBackend {
    fn submit_booking<'a>(
        &'a self,
        booking: &'a BookingFormData,
        key: &'a IdempotencyKey,
    ) -> LocalBoxFuture<'a, Result<(), ApiError>> {
        let result = {
            let mut inner = self.inner.borrow_mut();
            inner.bookings.push((booking.clone(), key.clone()));
            inner.booking_results.pop_front().unwrap_or(Ok(()))
        };
        async move { result }.boxed_local()
    }

    fn fetch_reviews<'a>(
        &'a self,
        property_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<Review>, ApiError>> {
        let result = {
            let mut inner = self.inner.borrow_mut();
            inner.review_requests.push(property_id.to_string());
            inner
                .review_results
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        };
        async move { result }.boxed_local()
    }
}

#[allow(dead_code)]
pub fn review(id: &str, comment: &str) -> Review {
    Review {
        id: id.to_string(),
        comment: comment.to_string(),
        name: None,
        rating: None,
        avatar: None,
    }
}
