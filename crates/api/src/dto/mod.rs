pub mod trace;

pub use trace::{
    format_elapsed, sorted_additional, sorted_authority, RecordResponse, ServerResponse,
    StepResponse, TraceResponse,
};
