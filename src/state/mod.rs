//! Component state, kept free of any rendering so it can be driven in tests.
pub mod booking;
pub mod reviews;
