//! Form model types: `App`, `Focus` and `Status`.

use crate::config::{LibrarySettings, Settings};
use crate::rename::{BatchReport, RenameOptions, RenameRequest, rename_directory};

/// The form element that receives key presses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Directory,
    Track,
    Title,
    Artist,
    Start,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Directory,
        Focus::Track,
        Focus::Title,
        Focus::Artist,
        Focus::Start,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next element, wrapping around to the first.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous element, wrapping around to the last.
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// What the status line shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Warning(String),
    Done(String),
    Error(String),
}

/// The main form model.
pub struct App {
    pub directory: String,
    pub options: RenameOptions,
    pub focus: Focus,
    pub status: Status,
    pub report: Option<BatchReport>,

    library: LibrarySettings,
    done_message: String,
}

impl App {
    /// Create a form prefilled with `directory` and the configured toggles.
    pub fn new(directory: Option<String>, settings: &Settings) -> Self {
        Self {
            directory: directory.unwrap_or_default(),
            options: RenameOptions::from(&settings.rename),
            focus: Focus::Directory,
            status: Status::Idle,
            report: None,
            library: settings.library.clone(),
            done_message: settings.ui.done_message.clone(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Flip the checkbox under focus. Other elements are unaffected.
    pub fn toggle_focused(&mut self) {
        match self.focus {
            Focus::Track => self.options.include_track = !self.options.include_track,
            Focus::Title => self.options.include_title = !self.options.include_title,
            Focus::Artist => self.options.include_artist = !self.options.include_artist,
            Focus::Directory | Focus::Start => {}
        }
    }

    /// Whether the checkbox for `focus` is ticked; `None` for non-checkbox elements.
    pub fn is_checked(&self, focus: Focus) -> Option<bool> {
        match focus {
            Focus::Track => Some(self.options.include_track),
            Focus::Title => Some(self.options.include_title),
            Focus::Artist => Some(self.options.include_artist),
            Focus::Directory | Focus::Start => None,
        }
    }

    pub fn push_dir_char(&mut self, c: char) {
        self.directory.push(c);
    }

    pub fn pop_dir_char(&mut self) {
        self.directory.pop();
    }

    /// The request a start would run, or `None` while no directory is entered.
    pub fn request(&self) -> Option<RenameRequest> {
        let dir = self.directory.trim();
        if dir.is_empty() {
            return None;
        }
        Some(RenameRequest::new(dir, self.options).with_library(self.library.clone()))
    }

    /// Run the batch for the current form values and record the outcome.
    pub fn start(&mut self) {
        let Some(request) = self.request() else {
            self.status = Status::Warning("Choose a directory first".to_string());
            return;
        };

        match rename_directory(&request) {
            Ok(report) => {
                self.status = Status::Done(format!("{}: {}", self.done_message, report.summary()));
                self.report = Some(report);
            }
            Err(e) => {
                self.status = Status::Error(e.to_string());
                self.report = None;
            }
        }
    }
}
