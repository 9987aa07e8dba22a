pub mod compute_frame;
pub mod frame_request;
pub mod pixel_sampler;
pub mod ports;
