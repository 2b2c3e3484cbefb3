//! Core library for the sheetmerge command line application.
//!
//! The binary collects every CSV file below a folder into one Excel workbook,
//! one worksheet per file. Naming rules live in [`naming`], file adapters
//! under [`io`], the directory walk and workbook lifecycle in [`merge`], and
//! folder selection behind the [`picker::FolderPicker`] trait.

pub mod error;
pub mod io;
pub mod logging;
pub mod merge;
pub mod model;
pub mod naming;
pub mod picker;

pub use error::{Result, ToolError};
