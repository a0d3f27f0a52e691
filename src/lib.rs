pub mod cli;
pub mod consts;
pub mod fs;
pub mod name;
pub mod types;
