mod calendar_mode;
mod change_mode;
mod cli_mode;
mod editor_utils;
mod read_mode;
mod write_mode;

pub use calendar_mode::calendar_mode;
pub use change_mode::{clear_mode, delete_mode, edit_mode, export_mode};
pub use cli_mode::CliModeResult;
pub use read_mode::read_mode;
pub use write_mode::{editor_mode, write_mode};
