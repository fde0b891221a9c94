//! Median Filter for Sensor Spike Suppression

/// Sliding-window median filter over `f32` readings.
///
/// Cheap ambient sensors occasionally emit single-sample spikes; a median
/// over a small odd window drops them without lagging real trends the way
/// an averaging filter would.
pub struct MedianFilter {
    window: Vec<f32>,
    capacity: usize,
}

impl MedianFilter {
    /// Create a filter with the given window size (odd, at least 1)
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity > 0 && capacity % 2 == 1,
            "window size must be odd and > 0"
        );
        Self {
            window: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a reading and get the current median.
    ///
    /// Until the window fills, the median of the samples seen so far is
    /// returned. NaN sorts after every finite value under `total_cmp`, so
    /// isolated NaN samples are rejected like any other spike.
    pub fn push(&mut self, value: f32) -> f32 {
        if self.window.len() == self.capacity {
            self.window.remove(0);
        }
        self.window.push(value);

        let mut sorted = self.window.clone();
        sorted.sort_unstable_by(f32::total_cmp);
        sorted[sorted.len() / 2]
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the window is empty
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Discard all buffered samples
    pub fn reset(&mut self) {
        self.window.clear();
    }
}
