pub mod cars;
pub mod drive_script;
pub mod physics;
