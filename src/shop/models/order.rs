//! Order model
//!
//! The order draft is filled in over the two checkout steps and validated
//! after every edit. Validation never fails with an error; missing fields are
//! reported through [`FormErrors`].

use crate::shop::events::{FieldId, FormId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const PAYMENT_REQUIRED: &str = "Select a payment method";
pub const ADDRESS_REQUIRED: &str = "Address is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PHONE_REQUIRED: &str = "Phone is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Online,
    Cash,
}

impl PaymentMethod {
    /// Parse a payment value as entered by the order form
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "online" | "card" => Some(PaymentMethod::Online),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Online => "online",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Online => "Online",
            PaymentMethod::Cash => "Cash on delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order being assembled by the checkout forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub payment: Option<PaymentMethod>,
    pub address: String,
    pub email: String,
    pub phone: String,
    /// Basket sum, kept in sync by the application state
    pub total: u64,
    /// Basket product ids, kept in sync by the application state
    pub items: Vec<String>,
}

impl OrderDraft {
    /// Write one field. An unrecognised payment value clears the payment.
    pub fn set_field(&mut self, field: FieldId, value: &str) {
        match field {
            FieldId::Payment => self.payment = PaymentMethod::parse(value),
            FieldId::Address => self.address = value.to_string(),
            FieldId::Email => self.email = value.to_string(),
            FieldId::Phone => self.phone = value.to_string(),
        }
    }

    /// Current value of a field as text
    pub fn field(&self, field: FieldId) -> String {
        match field {
            FieldId::Payment => self
                .payment
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            FieldId::Address => self.address.clone(),
            FieldId::Email => self.email.clone(),
            FieldId::Phone => self.phone.clone(),
        }
    }

    /// Required-field check over every order field
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.email.is_empty() {
            errors.insert(FieldId::Email, EMAIL_REQUIRED);
        }
        if self.payment.is_none() {
            errors.insert(FieldId::Payment, PAYMENT_REQUIRED);
        }
        if self.phone.is_empty() {
            errors.insert(FieldId::Phone, PHONE_REQUIRED);
        }
        if self.address.is_empty() {
            errors.insert(FieldId::Address, ADDRESS_REQUIRED);
        }
        errors
    }

    /// Build the request body, or `None` while the draft is incomplete
    pub fn to_request(&self) -> Option<OrderRequest> {
        if !self.validate().is_empty() {
            return None;
        }
        Some(OrderRequest {
            payment: self.payment?,
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            total: self.total,
            items: self.items.clone(),
        })
    }
}

/// Body of `POST /order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub payment: PaymentMethod,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    pub items: Vec<String>,
}

/// Confirmation returned by `POST /order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub id: String,
    pub total: u64,
}

/// Validation messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FieldId, String>);

impl FormErrors {
    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    /// Fields that currently have an error
    pub fn fields(&self) -> Vec<FieldId> {
        self.0.keys().copied().collect()
    }

    /// Whether none of the fields on `form` has an error
    pub fn is_form_valid(&self, form: FormId) -> bool {
        form.fields().iter().all(|field| !self.contains(*field))
    }

    /// Error messages for the fields of `form`, joined for display
    pub fn messages_for(&self, form: FormId) -> String {
        form.fields()
            .iter()
            .filter_map(|field| self.get(*field))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> OrderDraft {
        OrderDraft {
            payment: Some(PaymentMethod::Online),
            address: "Spb, Vosstaniya 1".to_string(),
            email: "buyer@example.com".to_string(),
            phone: "+71234567890".to_string(),
            total: 2200,
            items: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn empty_draft_should_report_every_field() {
        let errors = OrderDraft::default().validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FieldId::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(FieldId::Payment), Some(PAYMENT_REQUIRED));
        assert_eq!(errors.get(FieldId::Phone), Some(PHONE_REQUIRED));
        assert_eq!(errors.get(FieldId::Address), Some(ADDRESS_REQUIRED));
    }

    #[test]
    fn complete_draft_should_validate() {
        assert!(complete_draft().validate().is_empty());
    }

    #[test]
    fn payment_should_parse_known_values_only() {
        assert_eq!(PaymentMethod::parse("Online"), Some(PaymentMethod::Online));
        assert_eq!(PaymentMethod::parse("card"), Some(PaymentMethod::Online));
        assert_eq!(PaymentMethod::parse(" cash "), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse("barter"), None);

        let mut draft = complete_draft();
        draft.set_field(FieldId::Payment, "barter");
        assert_eq!(draft.payment, None);
        assert!(draft.validate().contains(FieldId::Payment));
    }

    #[test]
    fn set_field_should_round_trip_through_field() {
        let mut draft = OrderDraft::default();
        draft.set_field(FieldId::Address, "Moscow");
        draft.set_field(FieldId::Payment, "cash");
        assert_eq!(draft.field(FieldId::Address), "Moscow");
        assert_eq!(draft.field(FieldId::Payment), "cash");
        assert_eq!(draft.field(FieldId::Email), "");
    }

    #[test]
    fn errors_should_split_by_form() {
        let mut draft = OrderDraft::default();
        draft.set_field(FieldId::Address, "Moscow");
        draft.set_field(FieldId::Payment, "online");
        let errors = draft.validate();

        assert!(errors.is_form_valid(FormId::Order));
        assert!(!errors.is_form_valid(FormId::Contacts));
        assert_eq!(errors.messages_for(FormId::Order), "");
        assert_eq!(
            errors.messages_for(FormId::Contacts),
            format!("{EMAIL_REQUIRED}; {PHONE_REQUIRED}")
        );
        assert_eq!(errors.fields(), vec![FieldId::Email, FieldId::Phone]);
    }

    #[test]
    fn to_request_should_require_a_valid_draft() {
        assert!(OrderDraft::default().to_request().is_none());

        let request = complete_draft().to_request().unwrap();
        assert_eq!(request.total, 2200);
        assert_eq!(request.items.len(), 2);
    }

    #[test]
    fn order_request_should_serialize_api_shape() {
        let request = complete_draft().to_request().unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["payment"], "online");
        assert_eq!(json["email"], "buyer@example.com");
        assert_eq!(json["total"], 2200);
        assert_eq!(json["items"][1], "b");
    }
}
