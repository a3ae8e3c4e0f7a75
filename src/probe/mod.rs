pub mod http;
pub mod prober;

pub use http::HttpProber;
pub use prober::{ProbeError, Prober};
