pub mod draw;
pub mod turtle;
