use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ClaimField;

/// The six-field claim record produced by field extraction.
///
/// Every field is always present: either a value read from the document or
/// the field's fallback default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimFields {
    pub claim_id: String,
    pub claimant_name: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub claim_type: String,
}

impl ClaimFields {
    /// A record holding every field's fallback default.
    pub fn fallbacks() -> Self {
        Self::from_fn(|field| field.fallback().to_string())
    }

    /// A record with every value empty (a fresh form).
    pub fn blank() -> Self {
        Self::from_fn(|_| String::new())
    }

    fn from_fn(mut value: impl FnMut(ClaimField) -> String) -> Self {
        Self {
            claim_id: value(ClaimField::ClaimId),
            claimant_name: value(ClaimField::ClaimantName),
            village: value(ClaimField::Village),
            district: value(ClaimField::District),
            state: value(ClaimField::State),
            claim_type: value(ClaimField::ClaimType),
        }
    }

    pub fn get(&self, field: ClaimField) -> &str {
        match field {
            ClaimField::ClaimId => &self.claim_id,
            ClaimField::ClaimantName => &self.claimant_name,
            ClaimField::Village => &self.village,
            ClaimField::District => &self.district,
            ClaimField::State => &self.state,
            ClaimField::ClaimType => &self.claim_type,
        }
    }

    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) {
        let slot = match field {
            ClaimField::ClaimId => &mut self.claim_id,
            ClaimField::ClaimantName => &mut self.claimant_name,
            ClaimField::Village => &mut self.village,
            ClaimField::District => &mut self.district,
            ClaimField::State => &mut self.state,
            ClaimField::ClaimType => &mut self.claim_type,
        };
        *slot = value.into();
    }

    /// Field/value pairs in record order.
    pub fn entries(&self) -> [(ClaimField, &str); 6] {
        ClaimField::ALL.map(|field| (field, self.get(field)))
    }
}

/// A claim saved from the intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: Uuid,
    pub fields: ClaimFields,
    pub saved_at: DateTime<Utc>,
}

impl ClaimRecord {
    pub fn new(fields: ClaimFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            fields,
            saved_at: Utc::now(),
        }
    }
}
