pub mod header;
pub mod state;

pub use header::bind_header;
pub use state::{HeaderScroll, MobileMenu};
