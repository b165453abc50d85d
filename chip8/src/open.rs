use std::path::{Path, PathBuf};

use sdl2::event::Event;

/// Extensions accepted for ROMs
pub const ROM_EXTENSIONS: [&str; 2] = ["ch8", "c8"];

/// How a request to open a file ended
#[derive(Debug, PartialEq)]
pub enum OpenOutcome {
    Opened(PathBuf),
    Cancelled,
    Failed(String),
}

/// Checks `path` against `ROM_EXTENSIONS`
pub fn filter(path: &Path) -> OpenOutcome {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ROM_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false);
    if accepted {
        OpenOutcome::Opened(path.to_path_buf())
    } else {
        OpenOutcome::Failed(format!(
            "{} is not a ROM (expected one of: {})",
            path.display(),
            ROM_EXTENSIONS.join(", ")
        ))
    }
}

/// # File Drop
/// Turns drag and drop events on the window into open requests.
///
/// A drop that carries no file (it completes without a `DropFile`) counts as cancelled.
#[derive(Default)]
pub struct FileDrop {
    awaiting_file: bool,
}

impl FileDrop {
    /// Returns an outcome once `event` settles a request
    pub fn handle(&mut self, event: &Event) -> Option<OpenOutcome> {
        match event {
            Event::DropBegin { .. } => {
                self.awaiting_file = true;
                None
            }
            Event::DropFile { filename, .. } => {
                self.awaiting_file = false;
                Some(filter(Path::new(filename)))
            }
            Event::DropText { .. } => {
                self.awaiting_file = false;
                Some(OpenOutcome::Failed(String::from("dropped text, not a file")))
            }
            Event::DropComplete { .. } if self.awaiting_file => {
                self.awaiting_file = false;
                Some(OpenOutcome::Cancelled)
            }
            _ => None,
        }
    }
}
