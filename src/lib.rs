pub mod board;
pub mod movegen;
pub mod game;
pub mod cli;
