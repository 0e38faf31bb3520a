use dnstrace_application::ports::{RandomSource, RandomSourceFactory};

/// `fastrand`-backed factory. Unseeded walks draw from the calling
/// thread's generator; seeded walks each get a fresh `Rng` from the same
/// seed and so replay the same root and delegation choices.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastrandSource {
    seed: Option<u64>,
}

impl FastrandSource {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl RandomSourceFactory for FastrandSource {
    fn for_walk(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(WalkRng::Seeded(fastrand::Rng::with_seed(seed))),
            None => Box::new(WalkRng::ThreadLocal),
        }
    }
}

/// Generator owned by a single walk.
#[derive(Debug)]
enum WalkRng {
    ThreadLocal,
    Seeded(fastrand::Rng),
}

impl RandomSource for WalkRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        match self {
            WalkRng::ThreadLocal => fastrand::usize(..len),
            WalkRng::Seeded(rng) => rng.usize(..len),
        }
    }
}
