pub mod message;
pub mod transport;

pub use message::{MessageBuilder, RecordTypeMapper, ResponseParser};
pub use transport::IterativeTransport;
