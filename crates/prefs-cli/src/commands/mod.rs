pub mod common;
pub mod completions;
pub mod edit;
pub mod show;
