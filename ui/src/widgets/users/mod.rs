//! Users panel: linked users/sessions tables plus the deletion modal.

mod modals;
mod panel;
pub mod table;

pub use modals::show_delete_user_modal;
pub use panel::users_panel;
