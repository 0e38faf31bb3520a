mod lookup;

pub use lookup::Services;
