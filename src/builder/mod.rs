pub mod container_builder;
pub mod screen_builder;
