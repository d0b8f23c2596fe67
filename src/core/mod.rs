pub mod generator;
pub mod lint;
pub mod render;
pub mod tables;
