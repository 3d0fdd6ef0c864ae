use crate::serde::DecodedValue;
use derive_more::Deref;

mod deser;
pub use deser::*;

/// Field name to value, in the order fields were first encountered.
#[derive(PartialEq, Eq, Clone, Default, Deref, Debug)]
pub struct Record {
    fields: Vec<(String, DecodedValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins. A repeated name keeps the position of its first insertion.
    pub fn insert(&mut self, name: impl Into<String>, value: DecodedValue) -> Option<DecodedValue> {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&DecodedValue> {
        self.fields
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}

impl IntoIterator for Record {
    type Item = (String, DecodedValue);
    type IntoIter = std::vec::IntoIter<(String, DecodedValue)>;
    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<N: Into<String>> FromIterator<(N, DecodedValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (N, DecodedValue)>>(iter: I) -> Self {
        let mut rec = Self::new();
        for (name, value) in iter {
            rec.insert(name, value);
        }
        rec
    }
}
