use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::Result;

/// Source of the root folder to merge.
///
/// `Ok(None)` means the user declined to choose a folder.
pub trait FolderPicker {
    fn pick_folder(&mut self) -> Result<Option<PathBuf>>;
}

/// A folder fixed up front, e.g. from the command line.
#[derive(Debug, Clone)]
pub struct FixedFolder(pub Option<PathBuf>);

impl FolderPicker for FixedFolder {
    fn pick_folder(&mut self) -> Result<Option<PathBuf>> {
        Ok(self.0.take())
    }
}

/// Asks for the folder on an interactive console.
///
/// An empty answer or end of input counts as cancelling. Surrounding quotes,
/// as left by drag and drop into a terminal, are removed.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> FolderPicker for ConsolePrompt<R, W> {
    fn pick_folder(&mut self) -> Result<Option<PathBuf>> {
        write!(
            self.output,
            "Please select the folder where the CSV files are stored: "
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        let answer = answer.trim();
        let answer = strip_quotes(answer).trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (Option<PathBuf>, String) {
        let mut output = Vec::new();
        let picked = ConsolePrompt::new(Cursor::new(input.as_bytes()), &mut output)
            .pick_folder()
            .expect("prompt answered");
        (picked, String::from_utf8(output).expect("prompt is UTF-8"))
    }

    #[test]
    fn reads_path_from_console() {
        let (picked, prompt) = ask("/data/run 1\n");
        assert_eq!(picked, Some(PathBuf::from("/data/run 1")));
        assert!(prompt.contains("select the folder"));
    }

    #[test]
    fn strips_drag_and_drop_quotes() {
        let (picked, _) = ask("\"C:\\data\\run\"\r\n");
        assert_eq!(picked, Some(PathBuf::from("C:\\data\\run")));
    }

    #[test]
    fn blank_answer_or_eof_cancels() {
        assert_eq!(ask("   \n").0, None);
        assert_eq!(ask("").0, None);
    }

    #[test]
    fn fixed_folder_is_handed_out_once() {
        let mut picker = FixedFolder(Some(PathBuf::from("root")));
        assert_eq!(picker.pick_folder().unwrap(), Some(PathBuf::from("root")));
        assert_eq!(picker.pick_folder().unwrap(), None);
    }
}
