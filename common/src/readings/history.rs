// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::readings::Observation;

/// An immutable copy of (part of) a history, oldest observation first.
///
/// Snapshots are cheap to clone and can be iterated any number of times. Appending to
/// the history afterwards does not change a snapshot that was already taken.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot(Arc<[Observation]>);

impl Default for Snapshot {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl Snapshot {
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.0.last()
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Observation> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Insertion ordered observations, optionally capped.
///
/// When the cap is exceeded the oldest observations are evicted first.
#[derive(Clone, Debug, Default)]
pub struct History {
    observations: VecDeque<Observation>,
    cap: Option<NonZeroUsize>,
}

impl History {
    /// A history that never evicts.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_cap(cap: NonZeroUsize) -> Self {
        Self {
            observations: VecDeque::with_capacity(cap.get()),
            cap: Some(cap),
        }
    }

    pub fn cap(&self) -> Option<NonZeroUsize> {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Appends `observation`, evicting the oldest entries beyond the cap.
    ///
    /// An observation older than the newest stored one is kept, but stamped with the
    /// newest timestamp so the history stays ordered by time.
    pub fn append(&mut self, observation: Observation) {
        let observation = match self.observations.back() {
            Some(newest) if observation.timestamp() < newest.timestamp() => {
                log::warn!(
                    "Clock went backwards ({} < {}), restamping observation",
                    observation.timestamp(),
                    newest.timestamp()
                );
                observation.restamped(newest.timestamp())
            }
            _ => observation,
        };

        self.observations.push_back(observation);

        if let Some(cap) = self.cap {
            while self.observations.len() > cap.get() {
                if let Some(evicted) = self.observations.pop_front() {
                    log::trace!("Evicted observation from {}", evicted.timestamp());
                }
            }
        }
    }

    pub fn latest(&self) -> Option<&Observation> {
        self.observations.back()
    }

    /// Snapshot of the whole history.
    pub fn all(&self) -> Snapshot {
        self.observations.iter().copied().collect()
    }

    /// Snapshot of the newest `count` observations, still oldest first.
    pub fn recent(&self, count: usize) -> Snapshot {
        let skip = self.observations.len().saturating_sub(count);

        self.observations.iter().skip(skip).copied().collect()
    }

    pub fn clear(&mut self) {
        self.observations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn observations(celsius: &[f64]) -> Vec<Observation> {
        let start = Local::now();
        celsius
            .iter()
            .enumerate()
            .map(|(i, c)| Observation::new(start + Duration::seconds(10 * i as i64), *c, 1000.0))
            .collect()
    }

    fn capped(cap: usize) -> History {
        History::with_cap(NonZeroUsize::new(cap).unwrap())
    }

    #[test]
    fn empty_history_has_no_latest() {
        let history = capped(3);

        assert!(history.latest().is_none());
        assert!(history.all().is_empty());
        assert!(history.is_empty());
    }

    #[test]
    fn appends_keep_call_order_up_to_cap() {
        let input = observations(&[-40.0, -35.0, -30.0]);
        let mut history = capped(5);
        for observation in &input {
            history.append(*observation);
        }

        assert_eq!(history.all().as_slice(), input.as_slice());
        assert_eq!(history.latest(), input.last());
    }

    #[test]
    fn evicts_oldest_first() {
        let input = observations(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let mut history = capped(4);
        for observation in &input {
            history.append(*observation);
        }

        assert_eq!(history.len(), 4);
        assert_eq!(history.all().as_slice(), &input[3..]);
    }

    #[test]
    fn unbounded_history_keeps_everything() {
        let input = observations(&[1.0; 100]);
        let mut history = History::unbounded();
        for observation in &input {
            history.append(*observation);
        }

        assert_eq!(history.len(), 100);
        assert_eq!(history.cap(), None);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_appends() {
        let input = observations(&[-1.0, -2.0, -3.0]);
        let mut history = capped(2);
        history.append(input[0]);
        history.append(input[1]);

        let snapshot = history.all();
        history.append(input[2]);

        assert_eq!(snapshot.as_slice(), &input[..2]);
        // Restartable: iterating twice yields the same elements.
        assert_eq!(snapshot.iter().count(), 2);
        assert_eq!((&snapshot).into_iter().count(), 2);
        assert_eq!(history.all().as_slice(), &input[1..]);
    }

    #[test]
    fn recent_returns_newest_in_insertion_order() {
        let input = observations(&[1.0, 2.0, 3.0, 4.0]);
        let mut history = History::unbounded();
        for observation in &input {
            history.append(*observation);
        }

        assert_eq!(history.recent(2).as_slice(), &input[2..]);
        assert_eq!(history.recent(10).as_slice(), input.as_slice());
        assert!(history.recent(0).is_empty());
    }

    #[test]
    fn out_of_order_timestamps_are_raised() {
        let input = observations(&[-10.0, -20.0]);
        let mut history = capped(5);
        history.append(input[1]);
        history.append(input[0]);

        let all = history.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all.as_slice()[1].timestamp(), input[1].timestamp());
        assert_eq!(all.as_slice()[1].temperature_celsius(), -10.0);
        assert!(all
            .as_slice()
            .windows(2)
            .all(|pair| pair[0].timestamp() <= pair[1].timestamp()));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = capped(2);
        history.append(observations(&[1.0])[0]);
        history.clear();

        assert!(history.is_empty());
    }
}
