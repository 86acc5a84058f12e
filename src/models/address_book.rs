//! In-memory address book.

use super::record::Record;
use indexmap::IndexMap;

/// Records keyed by the exact (case-sensitive) contact name.
///
/// Iteration follows insertion order. The book is the only owner of its
/// records; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, overwriting any existing entry.
    pub fn add_record(&mut self, record: Record) -> String {
        let name = record.name().as_str().to_string();
        let message = format!("Contact {} added.", name);
        if self.records.insert(name, record).is_some() {
            tracing::debug!("Overwrote existing record");
        }
        message
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record, keeping the order of the rest.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Snapshot of `(name, phones)` pairs for listing.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, record)| (name.to_string(), record.phones_display()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a String, &'a Record);
    type IntoIter = indexmap::map::Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
