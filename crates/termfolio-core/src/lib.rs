pub mod config;
pub mod content;
pub mod error;
pub mod motion;

pub use config::AppConfig;
pub use content::PortfolioContent;
pub use error::{Error, Result};
pub use motion::{MotionEngine, PagePlan};
