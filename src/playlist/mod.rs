pub mod generator;
pub mod reader;

pub use generator::{render_playlist, set_group_title, write_playlist};
pub use reader::{group_rows, read_playlist, CategoryRow, PlaylistEntry};
