//! Collaborator traits implemented by the host

use std::cell::{Cell, RefCell};

use crate::Settings;

/// Text buffer with a cursor.
///
/// The cursor is opaque here: it is read before a substitution and written
/// back unchanged afterwards.
pub trait Buffer {
    type Position;

    fn cursor(&self) -> Self::Position;

    fn value(&self) -> String;

    fn set_value(&mut self, value: String);

    fn set_cursor(&mut self, position: Self::Position);
}

/// Fire-and-forget user-facing message sink
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Load/save of [`Settings`]
pub trait SettingsStore {
    /// Load persisted settings, `None` meaning nothing has been saved yet
    fn load(&self) -> anyhow::Result<Option<Settings>>;

    /// Persist the full settings record
    fn save(&self, settings: &Settings) -> anyhow::Result<()>;
}

/// Line/column cursor used by [`MemoryBuffer`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// In-memory buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    text: String,
    cursor: Cursor,
}

impl MemoryBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: Cursor::default(),
        }
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Buffer for MemoryBuffer {
    type Position = Cursor;

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, value: String) {
        self.text = value;
    }

    fn set_cursor(&mut self, position: Cursor) {
        self.cursor = position;
    }
}

/// Collects every message, newest last
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Settings store kept in memory
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    saved: RefCell<Option<Settings>>,
    saves: Cell<usize>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            saved: RefCell::new(Some(settings)),
            saves: Cell::new(0),
        }
    }

    pub fn saved(&self) -> Option<Settings> {
        self.saved.borrow().clone()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> anyhow::Result<Option<Settings>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        *self.saved.borrow_mut() = Some(settings.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
