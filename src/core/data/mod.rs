pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod pixel_rect;
pub mod point;
pub mod supersampling;
pub mod viewport;
