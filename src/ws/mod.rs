pub mod handler;

pub use handler::live_handler;
