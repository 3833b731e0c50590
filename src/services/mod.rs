pub mod forecast;
pub mod version;

pub use forecast::{get_forecast_summary, summarize_forecast};
pub use version::get_version;
