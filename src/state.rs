use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::RatingScalar;

/// Current rating of every competitor seen so far.
#[derive(Debug, Default)]
pub(crate) struct RatingState {
    inner: FxHashMap<Box<str>, RatingScalar>,
}

impl RatingState {
    /// Looks up a rating, inserting `base` for competitors that have not
    /// been seen before.
    pub fn rating_or_insert(&mut self, competitor_id: &str, base: RatingScalar) -> RatingScalar {
        if let Some(&rating) = self.inner.get(competitor_id) {
            return rating;
        }
        self.inner.insert(competitor_id.into(), base);
        base
    }

    pub fn set(&mut self, competitor_id: &str, rating: RatingScalar) {
        match self.inner.get_mut(competitor_id) {
            Some(current) => *current = rating,
            None => {
                self.inner.insert(competitor_id.into(), rating);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn snapshot(&self) -> RatingSnapshot {
        RatingSnapshot {
            inner: self
                .inner
                .iter()
                .map(|(id, &rating)| (String::from(&**id), rating))
                .collect(),
        }
    }
}

/// Read-only view of the ratings at the end of a pass, ordered by
/// competitor id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSnapshot {
    inner: BTreeMap<String, RatingScalar>,
}

impl RatingSnapshot {
    pub fn get(&self, competitor_id: &str) -> Option<RatingScalar> {
        self.inner.get(competitor_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RatingScalar)> {
        self.inner.iter().map(|(id, &rating)| (id.as_str(), rating))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
