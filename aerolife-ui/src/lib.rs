pub mod app;
pub mod form;
pub mod interactive;
pub mod logging;
pub mod render;
pub mod settings;
pub mod utils;

pub use app::{App, Report};
pub use form::InputForm;
pub use render::OutputFormat;
pub use settings::Settings;
