/// Evenly spaced offsets along one axis of the field, in shuffled order.
///
/// Built from `{0, s, 2s, .., (n-1)s}` with `s = extent / n`, then permuted by a forward scan
/// that swaps every element `i >= 1` with a partner drawn from `0..i`. The partner never equals
/// `i`, so the scan always produces a single cycle and no offset keeps its starting slot.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSequence {
    offsets: Vec<f32>,
}

impl AxisSequence {
    /// Shuffles with a freshly seeded generator; calls share no random state.
    pub fn shuffled(dimension: usize, extent: f32) -> Self {
        Self::shuffled_with(&mut fastrand::Rng::new(), dimension, extent)
    }

    pub fn shuffled_with(rng: &mut fastrand::Rng, dimension: usize, extent: f32) -> Self {
        let mut offsets = Self::ordered(dimension, extent).offsets;
        for i in 1..offsets.len() {
            let j = rng.usize(..i);
            offsets.swap(i, j);
        }
        Self { offsets }
    }

    /// The unshuffled offsets.
    pub fn ordered(dimension: usize, extent: f32) -> Self {
        let step = extent / dimension as f32;
        Self {
            offsets: (0..dimension).map(|i| step * i as f32).collect(),
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl IntoIterator for AxisSequence {
    type Item = f32;
    type IntoIter = std::vec::IntoIter<f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.into_iter()
    }
}
