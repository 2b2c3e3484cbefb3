use std::fs::File;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use crate::error::{Result, ToolError};
use crate::io::{csv_read, excel_write};
use crate::naming::{SheetNameRegistry, sheet_name_or_fallback};
use crate::picker::FolderPicker;

/// File name of the workbook written into the root folder.
pub const OUTPUT_FILE_NAME: &str = "CombinedWorkbook.xlsx";
const CSV_SUFFIX: &str = ".csv";

/// Switches that change how a merge run behaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Give colliding sheet names a `_N` suffix instead of skipping the file.
    pub dedupe_sheet_names: bool,
}

/// A CSV file that did not make it into the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub output: PathBuf,
    /// Worksheet names in workbook order.
    pub sheets: Vec<String>,
    pub failures: Vec<FileFailure>,
}

/// Asks `picker` for the root folder and merges it.
///
/// Returns `Ok(None)` without touching the filesystem when no folder is
/// chosen; reporting the abort is left to the caller.
pub fn run(picker: &mut dyn FolderPicker, options: MergeOptions) -> Result<Option<MergeReport>> {
    match picker.pick_folder()? {
        Some(root) => merge_directory(&root, options).map(Some),
        None => Ok(None),
    }
}

/// Merges every `.csv` file below `root` into `root/CombinedWorkbook.xlsx`.
///
/// Files that cannot be read or written are reported and skipped. Only a
/// missing root or an unwritable workbook aborts the run; the output file is
/// created before the walk so the latter fails before any CSV is read.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub fn merge_directory(root: &Path, options: MergeOptions) -> Result<MergeReport> {
    if !root.exists() {
        return Err(ToolError::MissingInput(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ToolError::NotADirectory(root.to_path_buf()));
    }

    let output = root.join(OUTPUT_FILE_NAME);
    File::create(&output)?;

    let mut workbook = Workbook::new();
    let mut registry = SheetNameRegistry::default();
    let mut sheets = Vec::new();
    let mut failures = Vec::new();

    for path in find_csv_files(root, &mut failures) {
        match append_sheet(&mut workbook, &mut registry, &path, options) {
            Ok(sheet_name) => {
                debug!(file = %path.display(), sheet = %sheet_name, "worksheet added");
                sheets.push(sheet_name);
            }
            Err(error) => {
                warn!(file = %path.display(), %error, "error while processing CSV file");
                failures.push(FileFailure {
                    path,
                    reason: error.to_string(),
                });
            }
        }
    }

    workbook.save(&output)?;
    info!(
        output = %output.display(),
        sheet_count = sheets.len(),
        skipped = failures.len(),
        "CSV files have been combined into an Excel workbook"
    );

    Ok(MergeReport {
        output,
        sheets,
        failures,
    })
}

/// Collects `.csv` files below `root`, sorted by name within each folder.
/// Symlinks to files are included; linked folders are not descended into.
/// Entries the walk cannot read are recorded in `failures`.
fn find_csv_files(root: &Path, failures: &mut Vec<FileFailure>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                let path = error
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                let error = ToolError::from(error);
                warn!(path = %path.display(), %error, "skipping unreadable entry");
                failures.push(FileFailure {
                    path,
                    reason: error.to_string(),
                });
                continue;
            }
        };

        if entry.path().is_file()
            && entry.file_name().to_string_lossy().ends_with(CSV_SUFFIX)
        {
            files.push(entry.into_path());
        }
    }

    files
}

fn append_sheet(
    workbook: &mut Workbook,
    registry: &mut SheetNameRegistry,
    path: &Path,
    options: MergeOptions,
) -> Result<String> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let derived = sheet_name_or_fallback(&file_name);

    let table = csv_read::read_table(path)?;

    let sheet_name = if options.dedupe_sheet_names {
        registry.free_candidate(&derived)
    } else if registry.contains(&derived) {
        return Err(ToolError::DuplicateSheetName(derived));
    } else {
        derived
    };

    let worksheet = excel_write::build_worksheet(&sheet_name, &table)?;
    registry.claim(&sheet_name);
    workbook.push_worksheet(worksheet);
    Ok(sheet_name)
}
