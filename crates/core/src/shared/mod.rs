pub mod frame;
pub mod viewport;
