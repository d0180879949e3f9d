//! Interactive catalog browser

mod interactive;

pub use interactive::run_browser;
