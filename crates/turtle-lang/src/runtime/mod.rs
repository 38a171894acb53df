pub mod cursor;
pub mod expr;
pub mod interpreter;
pub mod scope;
