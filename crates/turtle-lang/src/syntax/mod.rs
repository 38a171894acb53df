pub mod lexer;
pub mod procedures;
pub mod token;
