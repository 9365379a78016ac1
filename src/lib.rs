pub mod cmd;
pub mod config;
pub mod errors;
pub mod http;
pub mod log;
pub mod pipeline;
pub mod salary;
pub mod utils;
pub mod writer;
