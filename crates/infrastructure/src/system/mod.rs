pub mod address_resolver;
pub mod random;

pub use address_resolver::SystemAddressResolver;
pub use random::FastrandSource;
