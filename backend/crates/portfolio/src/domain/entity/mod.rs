pub mod experience;
pub mod project;
