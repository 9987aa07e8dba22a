pub mod compute_frame;
