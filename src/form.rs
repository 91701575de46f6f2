//! Editable claim form.
//!
//! Mirrors a `ClaimFields` record for manual correction after OCR. A new
//! extraction replaces the whole form; edits touch one field at a time.

use serde::{Deserialize, Serialize};

use crate::models::{ClaimField, ClaimFields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimForm {
    fields: ClaimFields,
}

impl Default for ClaimForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimForm {
    /// A form with every value empty.
    pub fn new() -> Self {
        Self {
            fields: ClaimFields::blank(),
        }
    }

    /// Replace every value with a fresh extraction result.
    pub fn apply_extraction(&mut self, fields: ClaimFields) {
        self.fields = fields;
    }

    pub fn get(&self, field: ClaimField) -> &str {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn reset(&mut self) {
        self.fields = ClaimFields::blank();
    }

    /// A form with neither a claim id nor a claimant name has nothing to save.
    pub fn is_empty(&self) -> bool {
        self.fields.claim_id.is_empty() && self.fields.claimant_name.is_empty()
    }

    pub fn fields(&self) -> &ClaimFields {
        &self.fields
    }

    pub fn to_fields(&self) -> ClaimFields {
        self.fields.clone()
    }
}
