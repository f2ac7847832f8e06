//! # Event Types
//!
//! Shared identifiers carried by storefront events: which checkout form an
//! input belongs to and which order field it edits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two sequential checkout forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormId {
    /// Step one: payment method and delivery address
    Order,
    /// Step two: email and phone
    Contacts,
}

impl FormId {
    /// Fields edited on this form, in display order
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormId::Order => &[FieldId::Payment, FieldId::Address],
            FormId::Contacts => &[FieldId::Email, FieldId::Phone],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormId::Order => "order",
            FormId::Contacts => "contacts",
        }
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable order fields
///
/// Variant order is the order errors are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Payment,
    Address,
    Email,
    Phone,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Payment,
        FieldId::Address,
        FieldId::Email,
        FieldId::Phone,
    ];

    /// The form this field is entered on
    pub fn form(self) -> FormId {
        match self {
            FieldId::Payment | FieldId::Address => FormId::Order,
            FieldId::Email | FieldId::Phone => FormId::Contacts,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Payment => "payment",
            FieldId::Address => "address",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
        }
    }

    /// Human-readable label used by the form views
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Payment => "Payment",
            FieldId::Address => "Address",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field edit coming from one of the checkout forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub form: FormId,
    pub field: FieldId,
    pub value: String,
}

impl FieldChange {
    /// Build a change for `field`, deriving the owning form
    pub fn new(field: FieldId, value: impl Into<String>) -> Self {
        Self {
            form: field.form(),
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_should_belong_to_exactly_one_form() {
        for field in FieldId::ALL {
            let form = field.form();
            assert!(form.fields().contains(&field));
        }
        assert_eq!(FormId::Order.fields().len() + FormId::Contacts.fields().len(), 4);
    }

    #[test]
    fn field_change_should_derive_form_from_field() {
        let change = FieldChange::new(FieldId::Email, "a@b.c");
        assert_eq!(change.form, FormId::Contacts);
        assert_eq!(change.value, "a@b.c");

        let change = FieldChange::new(FieldId::Address, "Main st.");
        assert_eq!(change.form, FormId::Order);
    }

    #[test]
    fn field_id_should_serialize_lowercase() {
        let json = serde_json::to_string(&FieldId::Payment).unwrap();
        assert_eq!(json, "\"payment\"");
    }
}
