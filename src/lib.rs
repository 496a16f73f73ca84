pub mod amount;
pub mod app;
pub mod engine;
pub mod error;
pub mod export;
pub mod state;
pub mod tips;
pub mod ui;

pub use amount::{format_currency, format_display, Amount};
pub use app::App;
pub use engine::{calculate, SavingsResult};
pub use error::{ExportError, ValidationError};
pub use state::{Calculator, DisplayMode, Field};
