use std::collections::btree_map::{self, BTreeMap};

use crate::encoder;

/// A parameter value: one string, or several when the name repeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterValue {
    Single(String),
    Multi(Vec<String>),
}

impl ParameterValue {
    /// Append `value`, turning a single value into a sequence.
    pub fn push(&mut self, value: String) {
        match self {
            ParameterValue::Single(first) => {
                let first = std::mem::take(first);
                *self = ParameterValue::Multi(vec![first, value]);
            }
            ParameterValue::Multi(values) => values.push(value),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParameterValue::Single(v) => Some(v),
            ParameterValue::Multi(_) => None,
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        ParameterValue::Single(s.into())
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        ParameterValue::Single(s)
    }
}

impl From<Vec<String>> for ParameterValue {
    fn from(v: Vec<String>) -> Self {
        ParameterValue::Multi(v)
    }
}

/// Parameter name to value(s), kept in byte-wise key order.
///
/// `String`'s `Ord` compares bytes, which is the ordinal comparison OAuth
/// servers use when they rebuild the base string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: BTreeMap<String, ParameterValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Add a value under `key`; repeated keys collect into [`ParameterValue::Multi`].
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        match self.params.entry(key.into()) {
            btree_map::Entry::Occupied(mut e) => e.get_mut().push(value.into()),
            btree_map::Entry::Vacant(e) => {
                e.insert(ParameterValue::Single(value.into()));
            }
        }
    }

    /// Merge `other` into `self`; entries of `other` win on collision.
    pub fn merge(&mut self, other: ParameterSet) {
        self.params.extend(other.params);
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.params.get(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Percent-encode every key and every value independently.
    pub fn encoded(&self) -> ParameterSet {
        ParameterSet {
            params: self
                .params
                .iter()
                .map(|(k, v)| (encoder::encode(k), encoder::encode_value(v)))
                .collect(),
        }
    }

    /// Serialize as `key=value` pairs joined by `&`.
    ///
    /// Values are written as stored; call on an [`encoded`](Self::encoded) set.
    /// Sibling values of a repeated key are sorted among themselves and each
    /// emitted as its own pair.
    pub fn to_signable_string(&self) -> String {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (k, v) in &self.params {
            match v {
                ParameterValue::Single(v) => pairs.push(format!("{}={}", k, v)),
                ParameterValue::Multi(values) => {
                    let mut values = values.iter().collect::<Vec<&String>>();
                    values.sort();
                    pairs.extend(values.into_iter().map(|v| format!("{}={}", k, v)));
                }
            }
        }
        pairs.join("&")
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, ParameterValue);
    type IntoIter = btree_map::IntoIter<String, ParameterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl FromIterator<(String, ParameterValue)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, ParameterValue)>>(iter: I) -> Self {
        ParameterSet {
            params: iter.into_iter().collect(),
        }
    }
}
