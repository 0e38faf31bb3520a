pub mod trace;

// Re-export use cases
pub use trace::TraceLookupUseCase;
