use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "payreg")]
#[command(about = "Console payroll and attendance register", long_about = None)]
pub struct Cli {
    /// Directory holding the table files (defaults to the current directory)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}
