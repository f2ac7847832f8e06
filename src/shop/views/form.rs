//! Checkout forms
//!
//! One view type serves both checkout steps. Every edit is reported with the
//! field's full value as a `form:field-changed` intent; whether the step can
//! be submitted is decided outside the view and pushed in with
//! [`FormView::set_valid`].

use super::{button, Component, Line, LineStyle};
use crate::shop::events::{AppEvent, FieldChange, FieldId, FormId};
use crate::shop::models::{OrderDraft, PaymentMethod};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct FormView {
    form: FormId,
    values: BTreeMap<FieldId, String>,
    payment: Option<PaymentMethod>,
    focus: usize,
    valid: bool,
    errors: String,
}

impl FormView {
    pub fn new(form: FormId) -> Self {
        Self {
            form,
            values: BTreeMap::new(),
            payment: None,
            focus: 0,
            valid: false,
            errors: String::new(),
        }
    }

    /// Step one: payment and address
    pub fn order() -> Self {
        Self::new(FormId::Order)
    }

    /// Step two: email and phone
    pub fn contacts() -> Self {
        Self::new(FormId::Contacts)
    }

    pub fn form(&self) -> FormId {
        self.form
    }

    pub fn focused_field(&self) -> FieldId {
        self.form.fields()[self.focus]
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_errors(&mut self, errors: impl Into<String>) {
        self.errors = errors.into();
    }

    pub fn errors(&self) -> &str {
        &self.errors
    }

    /// Show this step's fields as they stand in `draft`.
    ///
    /// Focus returns to the first field and error text is cleared; the step
    /// is valid only when the draft already satisfies it.
    pub fn sync(&mut self, draft: &OrderDraft) {
        self.values = self
            .form
            .fields()
            .iter()
            .filter(|field| **field != FieldId::Payment)
            .map(|field| (*field, draft.field(*field)))
            .collect();
        self.payment = draft.payment;
        self.focus = 0;
        self.valid = draft.validate().is_form_valid(self.form);
        self.errors.clear();
    }

    /// Clear inputs and status after a completed order
    pub fn reset(&mut self) {
        self.values.clear();
        self.payment = None;
        self.focus = 0;
        self.valid = false;
        self.errors.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        let field_count = self.form.fields().len();
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % field_count;
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + field_count - 1) % field_count;
                None
            }
            KeyCode::Enter => self.submit(),
            _ if self.focused_field() == FieldId::Payment => self.choose_payment(key.code),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let field = self.focused_field();
                let value = self.values.entry(field).or_default();
                value.push(c);
                Some(field_changed(field, value.clone()))
            }
            KeyCode::Backspace => {
                let field = self.focused_field();
                let value = self.values.entry(field).or_default();
                value.pop()?;
                Some(field_changed(field, value.clone()))
            }
            _ => None,
        }
    }

    fn choose_payment(&mut self, code: KeyCode) -> Option<AppEvent> {
        let method = match code {
            KeyCode::Left | KeyCode::Char('1') => PaymentMethod::Online,
            KeyCode::Right | KeyCode::Char('2') => PaymentMethod::Cash,
            _ => return None,
        };
        self.payment = Some(method);
        Some(field_changed(FieldId::Payment, method.as_str()))
    }

    fn submit(&self) -> Option<AppEvent> {
        if !self.valid {
            return None;
        }
        match self.form {
            FormId::Order => Some(AppEvent::ContactsOpen),
            FormId::Contacts => Some(AppEvent::ContactsSubmit),
        }
    }

    fn field_line(&self, field: FieldId) -> Line {
        let focused = field == self.focused_field();
        let text = match field {
            FieldId::Payment => {
                let option = |method: PaymentMethod| {
                    let mark = if self.payment == Some(method) { "(*)" } else { "( )" };
                    format!("{mark} {}", method.label())
                };
                format!(
                    "{:<9} {}   {}",
                    format!("{}:", field.label()),
                    option(PaymentMethod::Online),
                    option(PaymentMethod::Cash)
                )
            }
            _ => {
                let cursor = if focused { "_" } else { "" };
                format!(
                    "{:<9} {}{}",
                    format!("{}:", field.label()),
                    self.value(field),
                    cursor
                )
            }
        };
        let style = if focused {
            LineStyle::Selected
        } else {
            LineStyle::Normal
        };
        Line::new(text, style)
    }
}

fn field_changed(field: FieldId, value: impl Into<String>) -> AppEvent {
    AppEvent::FieldChanged(FieldChange::new(field, value))
}

impl Component for FormView {
    fn render(&self) -> Vec<Line> {
        let (title, submit) = match self.form {
            FormId::Order => ("Delivery", "Next"),
            FormId::Contacts => ("Contacts", "Pay"),
        };

        let mut lines = vec![Line::new(title, LineStyle::Title), Line::blank()];
        lines.extend(self.form.fields().iter().map(|f| self.field_line(*f)));
        lines.push(Line::blank());
        if !self.errors.is_empty() {
            lines.push(Line::new(self.errors.clone(), LineStyle::Error));
        }
        lines.push(button(submit, self.valid, true));

        let hint = match self.form {
            FormId::Order => "tab next field  1/2 payment  enter continue  esc close",
            FormId::Contacts => "tab next field  enter pay  esc close",
        };
        lines.push(Line::new(hint, LineStyle::Muted));
        lines
    }
}
