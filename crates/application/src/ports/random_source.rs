/// Uniform index picker for root and delegation choices. An instance
/// belongs to a single walk.
pub trait RandomSource: Send {
    /// Returns a value in `0..len`. Callers never pass zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Hands each walk its own [`RandomSource`], so concurrent walks share no
/// generator state and a seeded factory replays the same choices per walk.
pub trait RandomSourceFactory: Send + Sync {
    fn for_walk(&self) -> Box<dyn RandomSource>;
}
