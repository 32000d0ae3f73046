#[macro_use]
mod macros;
mod cli;
mod cmm;
mod colors;
mod conn;
mod formats;
mod ifs;
mod logger;
mod navigator;
mod state;
mod utils;
mod viewer;
mod wire;

fn main() {
    cli::main();
}
