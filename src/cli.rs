use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "viren")]
#[command(author, version, about, long_about = None)]
#[command(about = "Rename the entries of a directory by editing their names in a text editor")]
pub struct Args {
    /// Directory whose entries are renamed
    #[arg(default_value = ".")]
    pub target_dir: PathBuf,

    /// Show the planned renames without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
