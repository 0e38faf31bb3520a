mod referral_resolver;
mod root_server_selector;

pub use referral_resolver::ReferralResolver;
pub use root_server_selector::RootServerSelector;
