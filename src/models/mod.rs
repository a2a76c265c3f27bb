pub mod catalog;
pub mod plan;
pub mod points;
pub mod subscription;
