use crate::api::{Backend, IdempotencyKey};
use crate::error::{ApiError, BOOKING_FAILED_MESSAGE};
use crate::models::booking::{BookingField, BookingFormData};
use leptos::logging::{error, log};

pub const SUBMIT_LABEL: &str = "Confirm & Pay";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const CONFIRMATION_MESSAGE: &str = "Booking confirmed!";

/// One booking attempt: the data as it was when submit was pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub data: BookingFormData,
    pub key: IdempotencyKey,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFormState {
    pub data: BookingFormData,
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
    /// Key of the last attempt that did not succeed; reused while the data is unchanged.
    pending_key: Option<IdempotencyKey>,
    /// Drop the CVV after a failed attempt.
    clear_cvv_on_failure: bool,
}

impl BookingFormState {
    pub fn new(clear_cvv_on_failure: bool) -> Self {
        Self {
            clear_cvv_on_failure,
            ..Self::default()
        }
    }

    pub fn edit(&mut self, field: BookingField, value: impl Into<String>) {
        if self.data.set(field, value) {
            self.pending_key = None;
        }
    }

    pub fn pending_key(&self) -> Option<&IdempotencyKey> {
        self.pending_key.as_ref()
    }

    /// Starts an attempt. Returns None while a previous attempt is in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.loading {
            log!("[BOOKING] Submit ignored, a booking is already in flight");
            return None;
        }
        self.loading = true;
        self.error = None;
        self.success = false;

        let key = self.pending_key.get_or_insert_with(IdempotencyKey::new).clone();
        Some(SubmitTicket {
            data: self.data.clone(),
            key,
        })
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.loading = false;
        match result {
            Ok(()) => {
                log!("[BOOKING] Booking confirmed");
                self.success = true;
                self.pending_key = None;
            }
            Err(err) => {
                error!("[BOOKING] Error submitting booking ({:?}): {}", err.kind(), err);
                self.success = false;
                self.error = Some(BOOKING_FAILED_MESSAGE.to_string());
                if self.clear_cvv_on_failure && !self.data.cvv.is_empty() {
                    self.data.clear_sensitive();
                    self.pending_key = None;
                }
            }
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            PROCESSING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

/// Sends one attempt, refusing to issue a request while a required field is empty.
pub async fn submit_booking(backend: &dyn Backend, ticket: &SubmitTicket) -> Result<(), ApiError> {
    let missing = ticket.data.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::Validation {
            missing: missing.into_iter().map(BookingField::name).collect(),
        });
    }
    backend.submit_booking(&ticket.data, &ticket.key).await
}
