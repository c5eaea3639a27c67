use notenab_core::natural::natural_key;
use std::collections::HashMap;

/// A named block of text cut out of a larger input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub name: String,
    pub body: String,
}

/// Note name -> body. A later note with the same name replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMap {
    notes: HashMap<String, String>,
}

impl NoteMap {
    pub fn insert(&mut self, record: NoteRecord) -> Option<String> {
        self.notes.insert(record.name, record.body)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.notes.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.notes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Records in natural order of their names, for display and writing.
    pub fn sorted(&self) -> Vec<NoteRecord> {
        let mut records: Vec<NoteRecord> = self
            .notes
            .iter()
            .map(|(name, body)| NoteRecord { name: name.clone(), body: body.clone() })
            .collect();
        records.sort_by_cached_key(|r| natural_key(&r.name));
        records
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.notes
    }
}

impl FromIterator<(String, String)> for NoteMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { notes: iter.into_iter().collect() }
    }
}
