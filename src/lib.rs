pub mod checker;
pub mod cli;
pub mod fs;
pub mod gofmt;
pub mod logging;
pub mod parser;
pub mod printer;
pub mod settings;
pub mod sort;
pub mod splice;
