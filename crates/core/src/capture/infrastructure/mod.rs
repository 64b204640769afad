pub mod synthetic_capture;
