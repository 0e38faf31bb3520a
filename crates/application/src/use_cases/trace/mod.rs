mod trace_lookup;

pub use trace_lookup::TraceLookupUseCase;
