use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unmtk")]
#[command(version)]
#[command(about = "Unpack MTK- archive containers", long_about = None)]
#[command(after_help = "Examples:\n  \
  unmtk -o out firmware.mtk          extract all members into out/\n  \
  unmtk -v -o out < firmware.mtk     read from stdin, print header and warnings\n  \
  unmtk -l https://example.com/fw.mtk   list members of a remote archive")]
pub struct Cli {
    /// Archive path, HTTP URL, or '-' for standard input
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Output directory
    #[arg(short = 'o', long = "output", value_name = "DIRECTORY")]
    pub output: Option<PathBuf>,

    /// Print the header/entry report and advisory warnings
    #[arg(short = 'v', long = "verbose", overrides_with = "no_verbose")]
    pub verbose: bool,

    /// Turn off --verbose
    #[arg(long = "no-verbose", overrides_with = "verbose")]
    pub no_verbose: bool,

    /// List member names only, write nothing
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Quiet mode, no per-file messages
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    pub fn is_stdin(&self) -> bool {
        self.file == "-"
    }

    /// The output directory is mandatory unless only listing.
    pub fn needs_output(&self) -> bool {
        !self.list
    }
}
