mod io;

pub use io::{Args, metrics_path};
pub use clap::Parser;
