mod env_version;
mod environment;
mod error_banner;
pub mod users;

pub use env_version::env_version;
pub use environment::environment_picker;
pub use error_banner::error_banner;
pub use users::users_panel;
