pub mod polling_runner;
