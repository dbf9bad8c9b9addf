pub mod booking_form;
pub mod form_field;
pub mod review_section;
