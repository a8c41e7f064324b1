pub mod catalog;
pub mod enrollment;
pub mod seed;
