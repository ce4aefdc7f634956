pub mod summary;
pub mod headless;
