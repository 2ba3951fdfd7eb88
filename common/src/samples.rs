//! Bounded FIFO sample buffer.
//!
//! Samples are stored oldest first, which is also their left-to-right order on
//! the chart. Storage is a `heapless::Deque` sized by the const generic `N`;
//! the runtime `limit` (the widget's `max_items`) may be smaller.

use heapless::Deque;

use crate::error::ConfigError;

/// FIFO of at most `limit` samples, backed by `N` slots.
pub struct SampleBuffer<const N: usize> {
    samples: Deque<f32, N>,
    limit: usize,
}

impl<const N: usize> SampleBuffer<N> {
    /// Create an empty buffer holding at most `limit` samples.
    pub fn new(limit: usize) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if limit > N {
            return Err(ConfigError::CapacityExceeded {
                requested: limit,
                capacity: N,
            });
        }
        Ok(Self {
            samples: Deque::new(),
            limit,
        })
    }

    /// Append a sample, evicting and returning the oldest one if at the limit.
    pub fn push(
        &mut self,
        value: f32,
    ) -> Option<f32> {
        let evicted = if self.samples.len() >= self.limit {
            self.samples.pop_front()
        } else {
            None
        };
        // Cannot fail: limit <= N and we just made room
        self.samples.push_back(value).ok();
        evicted
    }

    /// Drop every sample.
    pub fn clear(&mut self) { self.samples.clear(); }

    /// Maximum number of samples retained.
    #[inline]
    pub const fn limit(&self) -> usize { self.limit }

    /// Number of samples currently held.
    #[inline]
    pub fn len(&self) -> usize { self.samples.len() }

    /// Check if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Check if the next push will evict.
    #[inline]
    pub fn is_full(&self) -> bool { self.samples.len() >= self.limit }

    /// Sample at `index`, counting from the oldest.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<f32> {
        self.samples.iter().nth(index).copied()
    }

    /// Oldest retained sample.
    pub fn oldest(&self) -> Option<f32> { self.samples.front().copied() }

    /// Most recent sample.
    pub fn newest(&self) -> Option<f32> { self.samples.back().copied() }

    /// Iterate samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ { self.samples.iter().copied() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_limits() {
        assert!(matches!(SampleBuffer::<4>::new(0), Err(ConfigError::ZeroCapacity)));
        assert!(matches!(
            SampleBuffer::<4>::new(5),
            Err(ConfigError::CapacityExceeded { requested: 5, capacity: 4 })
        ));
    }

    #[test]
    fn test_push_below_limit() {
        let mut buffer = SampleBuffer::<8>::new(3).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.push(1.0), None);
        assert_eq!(buffer.push(2.0), None);
        assert_eq!(buffer.len(), 2);
        assert!(!buffer.is_full());
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut buffer = SampleBuffer::<8>::new(3).unwrap();
        for v in [1.0, 5.0, 9.0] {
            buffer.push(v);
        }
        assert!(buffer.is_full());
        assert_eq!(buffer.push(2.0), Some(1.0));
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![5.0, 9.0, 2.0]);
        assert_eq!(buffer.oldest(), Some(5.0));
        assert_eq!(buffer.newest(), Some(2.0));
    }

    #[test]
    fn test_limit_equal_to_storage() {
        let mut buffer = SampleBuffer::<2>::new(2).unwrap();
        buffer.push(1.0);
        buffer.push(2.0);
        assert_eq!(buffer.push(3.0), Some(1.0));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_get_and_clear() {
        let mut buffer = SampleBuffer::<4>::new(4).unwrap();
        buffer.push(0.5);
        buffer.push(1.5);
        assert_eq!(buffer.get(0), Some(0.5));
        assert_eq!(buffer.get(1), Some(1.5));
        assert_eq!(buffer.get(2), None);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.oldest(), None);
    }
}
