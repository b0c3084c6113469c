pub mod config;
pub mod decorator;
pub mod errors;
pub mod greeting;
pub mod logger;
pub mod output;
pub mod printer;
