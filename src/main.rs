use std::path::PathBuf;

use clap::Parser;
use sheetmerge::Result;
use sheetmerge::logging::init_logging;
use sheetmerge::merge::{self, MergeOptions};
use sheetmerge::picker::{ConsolePrompt, FixedFolder, FolderPicker};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let options = MergeOptions {
        dedupe_sheet_names: cli.dedupe_sheet_names,
    };

    let mut picker: Box<dyn FolderPicker> = match cli.root {
        Some(root) => Box::new(FixedFolder(Some(root))),
        None => Box::new(ConsolePrompt::new(
            std::io::stdin().lock(),
            std::io::stdout(),
        )),
    };

    if merge::run(picker.as_mut(), options)?.is_none() {
        println!("No folder was selected. Abort the process.");
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Combine every CSV file below a folder into one Excel workbook."
)]
struct Cli {
    /// Folder holding the CSV files. Prompted for when omitted.
    root: Option<PathBuf>,

    /// Append `_1`, `_2`, ... to colliding sheet names instead of skipping the file.
    #[arg(long)]
    dedupe_sheet_names: bool,

    /// Also report every worksheet as it is added.
    #[arg(short, long)]
    verbose: bool,
}
