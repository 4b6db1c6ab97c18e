//! The single named durable slot that holds the serialized record list.

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Raw access to one named value. The slot knows nothing about records,
/// it only moves strings in and out.
pub trait StorageSlot {
    /// Current slot contents, or `Ok(None)` if nothing was ever written.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replaces the slot contents in a single step.
    fn write(&self, contents: &str) -> io::Result<()>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for &S {
    fn read(&self) -> io::Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        (**self).write(contents)
    }
}

/// Slot backed by a JSON file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "slot".to_string());
        self.path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        let tmp = self.tmp_path();
        fs::write(&tmp, contents)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600)).ok();
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            fs::remove_file(&tmp).ok();
            return Err(e);
        }
        Ok(())
    }
}

/// In-memory slot for tests and embedding.
///
/// Uses `Cell`/`RefCell` since the vault is single-threaded.
#[derive(Default)]
pub struct MemorySlot {
    value: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `raw`, valid JSON or not.
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(raw.into())),
            fail_writes: Cell::new(false),
        }
    }

    /// Makes every subsequent write fail, like a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn contents(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "storage quota exceeded"));
        }
        *self.value.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}
