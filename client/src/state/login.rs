//! Login form state: values, displayed errors, and submit lifecycle.
//!
//! DESIGN
//! ======
//! Validation runs in `onBlur` mode. A field shows its error once it has been
//! blurred, and from then on the error follows every change. Submitting an
//! invalid form reveals every field error at once and switches all fields to
//! change-driven revalidation. `is_valid` is always the verdict of the full
//! schema over the current values, independent of what is displayed.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::net::auth::AuthError;
use crate::util::validate::{validate, validate_field};

/// Form fields in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    /// HTML `name` attribute for the field's input.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Field name to error message.
pub type FieldErrors = BTreeMap<Field, String>;

/// Email + password as typed. Transient: built per submit, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Why a submit did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A sign-in request is already in flight.
    #[error("sign-in already in progress")]
    AlreadySubmitting,

    /// The schema rejected the submission before the provider was called.
    #[error("form failed validation: {0:?}")]
    InvalidForm(FieldErrors),

    /// The provider refused the credentials or could not be reached.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The page was torn down before the request resolved.
    #[error("login page unmounted before sign-in resolved")]
    Unmounted,
}

/// Interactive state of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: Credentials,
    field_errors: FieldErrors,
    touched: BTreeSet<Field>,
    submit_count: u32,
    is_submitting: bool,
}

impl FormState {
    pub fn values(&self) -> &Credentials {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn is_dirty(&self) -> bool {
        self.values != Credentials::default()
    }

    pub fn is_valid(&self) -> bool {
        validate(&self.values).is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Submit affordance enabled: `is_dirty && is_valid && !is_submitting`.
    pub fn can_submit(&self) -> bool {
        self.is_dirty() && self.is_valid() && !self.is_submitting
    }

    /// Record a keystroke. Never blocks typing.
    pub fn input(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        if self.touched.contains(&field) || self.submit_count > 0 {
            self.revalidate(field);
        }
    }

    /// Record focus leaving a field.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Start a submit, yielding the credentials to send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::AlreadySubmitting`] while a request is in flight,
    /// [`SubmitError::InvalidForm`] when the schema fails (all field errors
    /// become visible). Defaults are empty and fail the schema, so a form
    /// that passes validation is always dirty.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.submit_count += 1;
        let errors = validate(&self.values);
        if !errors.is_empty() {
            self.field_errors.clone_from(&errors);
            return Err(SubmitError::InvalidForm(errors));
        }
        self.field_errors.clear();
        self.is_submitting = true;
        Ok(self.values.clone())
    }

    /// End the in-flight submit. Values are kept for a retry.
    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(field, self.values.get(field)) {
            Some(message) => {
                self.field_errors.insert(field, message.to_owned());
            }
            None => {
                self.field_errors.remove(&field);
            }
        }
    }
}
