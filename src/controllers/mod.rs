pub mod frame;
pub mod ports;
