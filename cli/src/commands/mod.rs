pub mod authorities;
pub mod render;
