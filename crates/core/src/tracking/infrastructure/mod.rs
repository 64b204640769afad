pub mod scripted_provider;
pub mod threaded_provider_loader;
