pub mod commands;
pub mod common;

pub use commands::cat::cat_command;
pub use commands::demo::demo_command;
pub use commands::ls::ls_command;
pub use commands::tree::tree_command;
