pub mod scramble;
pub mod solve;
