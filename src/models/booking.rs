use serde::{Deserialize, Serialize};

/// Guest contact, payment and billing details collected by the booking form.
/// Serialized as-is for `POST /api/bookings`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub billing_address: String, // Single street line for now
}

/// One input of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CardNumber,
    ExpirationDate,
    Cvv,
    BillingAddress,
}

impl BookingField {
    /// Every field, in form order.
    pub const ALL: [BookingField; 8] = [
        BookingField::FirstName,
        BookingField::LastName,
        BookingField::Email,
        BookingField::PhoneNumber,
        BookingField::CardNumber,
        BookingField::ExpirationDate,
        BookingField::Cvv,
        BookingField::BillingAddress,
    ];

    /// Wire name, also used as the input's `id` and `name`.
    pub fn name(self) -> &'static str {
        match self {
            BookingField::FirstName => "firstName",
            BookingField::LastName => "lastName",
            BookingField::Email => "email",
            BookingField::PhoneNumber => "phoneNumber",
            BookingField::CardNumber => "cardNumber",
            BookingField::ExpirationDate => "expirationDate",
            BookingField::Cvv => "cvv",
            BookingField::BillingAddress => "billingAddress",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingField::FirstName => "First Name",
            BookingField::LastName => "Last Name",
            BookingField::Email => "Email",
            BookingField::PhoneNumber => "Phone Number",
            BookingField::CardNumber => "Card Number",
            BookingField::ExpirationDate => "Expiration Date",
            BookingField::Cvv => "CVV",
            BookingField::BillingAddress => "Street Address",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            BookingField::Email => "email",
            _ => "text",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            BookingField::ExpirationDate => Some("MM/YY"),
            _ => None,
        }
    }
}

impl BookingFormData {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FirstName => &self.first_name,
            BookingField::LastName => &self.last_name,
            BookingField::Email => &self.email,
            BookingField::PhoneNumber => &self.phone_number,
            BookingField::CardNumber => &self.card_number,
            BookingField::ExpirationDate => &self.expiration_date,
            BookingField::Cvv => &self.cvv,
            BookingField::BillingAddress => &self.billing_address,
        }
    }

    fn slot(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::FirstName => &mut self.first_name,
            BookingField::LastName => &mut self.last_name,
            BookingField::Email => &mut self.email,
            BookingField::PhoneNumber => &mut self.phone_number,
            BookingField::CardNumber => &mut self.card_number,
            BookingField::ExpirationDate => &mut self.expiration_date,
            BookingField::Cvv => &mut self.cvv,
            BookingField::BillingAddress => &mut self.billing_address,
        }
    }

    /// Replaces a single field, leaving the others untouched.
    /// Returns whether the stored value changed.
    pub fn set(&mut self, field: BookingField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = self.slot(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Empty fields, in form order. Any content counts as present, like an HTML `required` input.
    pub fn missing_fields(&self) -> Vec<BookingField> {
        BookingField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn clear_sensitive(&mut self) {
        self.cvv.clear();
    }
}
