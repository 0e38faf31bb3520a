mod stub_ports;

pub use stub_ports::*;
