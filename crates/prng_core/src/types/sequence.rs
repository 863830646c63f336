//! Generated number sequences.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An ordered, fixed-length run of generated values.
///
/// Values are nominally confined to [0, 1). A `Sequence` is produced once per
/// generation call and is immutable afterwards: it dereferences to `&[f64]`
/// but offers no mutable access.
///
/// # Examples
/// ```
/// use prng_core::types::Sequence;
///
/// let seq: Sequence = vec![0.5227, 0.3215].into();
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq[0], 0.5227);
/// let mean = seq.iter().sum::<f64>() / seq.len() as f64;
/// assert!((mean - 0.4221).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<f64>);

impl Sequence {
    /// Wrap an owned vector of values.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Borrow the values as a slice.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Consume the sequence, returning the underlying vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Sequence {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Sequence {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Sequence {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for Sequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iterator() {
        let seq: Sequence = (1..=4).map(|i| i as f64 / 10.0).collect();
        assert_eq!(seq.values(), &[0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let seq = Sequence::new(vec![0.25, 0.5]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "[0.25,0.5]");

        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn test_empty_default() {
        let seq = Sequence::default();
        assert!(seq.is_empty());
        assert!(seq.into_inner().is_empty());
    }
}
