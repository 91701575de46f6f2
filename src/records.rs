//! In-memory store of saved claim records.

use thiserror::Error;
use uuid::Uuid;

use crate::form::ClaimForm;
use crate::models::ClaimRecord;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Form is empty, fill in a claim id or claimant name before saving")]
    EmptyForm,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<ClaimRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the form into a new record, then reset the form.
    pub fn save(&mut self, form: &mut ClaimForm) -> Result<ClaimRecord, RecordError> {
        if form.is_empty() {
            return Err(RecordError::EmptyForm);
        }

        let record = ClaimRecord::new(form.to_fields());
        tracing::info!(
            record_id = %record.id,
            claim_id = %record.fields.claim_id,
            "Claim record saved"
        );

        self.records.push(record.clone());
        form.reset();
        Ok(record)
    }

    pub fn get(&self, id: &Uuid) -> Option<&ClaimRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// Saved records, oldest first.
    pub fn list(&self) -> &[ClaimRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClaimField;
    use crate::pipeline::extraction::extract_fields;

    #[test]
    fn saving_empty_form_fails() {
        let mut store = RecordStore::new();
        let mut form = ClaimForm::new();
        assert!(matches!(store.save(&mut form), Err(RecordError::EmptyForm)));
        assert!(store.is_empty());
    }

    #[test]
    fn save_snapshots_and_resets_form() {
        let mut store = RecordStore::new();
        let mut form = ClaimForm::new();
        form.apply_extraction(extract_fields("Claim ID: FRA-2024-00099\nName: Meena Bai"));

        let record = store.save(&mut form).unwrap();
        assert_eq!(record.fields.claim_id, "FRA-2024-00099");
        assert_eq!(record.fields.claimant_name, "Meena Bai");
        assert!(form.is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&record.id).unwrap().fields, record.fields);
    }

    #[test]
    fn fallback_values_are_saveable() {
        let mut store = RecordStore::new();
        let mut form = ClaimForm::new();
        form.apply_extraction(extract_fields(""));
        let record = store.save(&mut form).unwrap();
        assert_eq!(record.fields.claim_id, "FRA-XXXX-00000");
    }

    #[test]
    fn list_keeps_save_order() {
        let mut store = RecordStore::new();
        let mut form = ClaimForm::new();
        for id in ["FRA-1", "FRA-2", "FRA-3"] {
            form.set(ClaimField::ClaimId, id);
            store.save(&mut form).unwrap();
        }
        let ids: Vec<&str> = store.list().iter().map(|r| r.fields.claim_id.as_str()).collect();
        assert_eq!(ids, vec!["FRA-1", "FRA-2", "FRA-3"]);
    }

    #[test]
    fn unknown_id_is_none() {
        let store = RecordStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }
}
