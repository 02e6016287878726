//! # Asset Folder Validation
//!
//! Checks that an `assets/` folder sits next to the executable and that it
//! contains `icon.png`. Progress is written as human-readable lines; the
//! returned [`AssetStatus`] tells library callers where the check stopped.

use log::warn;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const ASSETS_DIR: &str = "assets";
pub const ICON_FILE: &str = "icon.png";

/// Where the check ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    MissingFolder,
    NotAFolder,
    Unreadable,
    IconMissing,
    IconFound,
}

impl AssetStatus {
    pub fn is_ok(self) -> bool {
        self == AssetStatus::IconFound
    }
}

/// Directory containing the running executable.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"))
}

/// Join a relative `path` onto `base`; absolute paths are returned as is.
pub fn resolve_beside(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Resolve a configured icon path the way `check-assets` looks for it:
/// relative paths are taken from the executable's directory.
pub fn locate_icon(path: &Path) -> PathBuf {
    match executable_dir() {
        Ok(dir) => resolve_beside(&dir, path),
        Err(e) => {
            warn!(
                "Could not locate executable ({}), icon path {} is relative to the working directory",
                e,
                path.display()
            );
            path.to_path_buf()
        }
    }
}

/// Validate `<dir>/assets` and `<dir>/assets/icon.png`, reporting to `out`.
///
/// Only failures to write to `out` are returned as errors; every filesystem
/// problem is reported in the output and reflected in the status.
pub fn validate_assets_folder(dir: &Path, out: &mut impl Write) -> io::Result<AssetStatus> {
    writeln!(out, "--- Assets Validator ---")?;
    writeln!(out, "\n🔎 Searching in directory: {}\n", dir.display())?;

    let assets_path = dir.join(ASSETS_DIR);

    if !assets_path.exists() {
        writeln!(out, "❌ ERROR: The 'assets' folder was NOT found.")?;
        writeln!(out, "   Expected location: {}", assets_path.display())?;
        writeln!(
            out,
            "\n   ACTION: Please create an 'assets' folder in the same directory as the executable."
        )?;
        return Ok(AssetStatus::MissingFolder);
    }

    if !assets_path.is_dir() {
        writeln!(
            out,
            "❌ ERROR: A file named 'assets' was found, but it is NOT a folder."
        )?;
        writeln!(out, "   Location: {}", assets_path.display())?;
        writeln!(
            out,
            "\n   ACTION: Please remove the 'assets' file and create a folder with that name."
        )?;
        return Ok(AssetStatus::NotAFolder);
    }

    writeln!(out, "✅ SUCCESS: 'assets' folder found at: {}", assets_path.display())?;
    writeln!(out, "\n--- Listing contents of 'assets' folder ---")?;

    if !report_listing(out, list_entries(&assets_path))? {
        return Ok(AssetStatus::Unreadable);
    }

    writeln!(out, "-------------------------------------------\n")?;

    let icon_path = assets_path.join(ICON_FILE);
    if icon_path.is_file() {
        writeln!(out, "✅ SUCCESS: 'icon.png' was found inside the 'assets' folder.")?;
        writeln!(out, "   The path './assets/icon.png' should now work as the window icon.")?;
        Ok(AssetStatus::IconFound)
    } else {
        writeln!(out, "❌ WARNING: 'icon.png' was NOT found inside the 'assets' folder.")?;
        writeln!(out, "   ACTION: Make sure your icon file is:")?;
        writeln!(out, "   1. Placed directly inside the 'assets' folder.")?;
        writeln!(out, "   2. Named exactly 'icon.png' (lowercase).")?;
        Ok(AssetStatus::IconMissing)
    }
}

/// Run the whole check for `dir`. Any I/O failure, including one locating
/// the directory, is reported as an unexpected error and yields `None`.
pub fn check_assets(dir: io::Result<PathBuf>, out: &mut impl Write) -> Option<AssetStatus> {
    match dir.and_then(|dir| validate_assets_folder(&dir, out)) {
        Ok(status) => Some(status),
        Err(e) => {
            // Nothing left to report to if this write fails too
            let _ = report_unexpected_error(out, &e);
            None
        }
    }
}

fn report_unexpected_error(out: &mut impl Write, error: &io::Error) -> io::Result<()> {
    writeln!(out, "\nAn unexpected error occurred: {error}")?;
    writeln!(out, "Please ensure the executable is run from a readable location.")
}

/// Print the folder listing. Returns false when the folder could not be read.
fn report_listing(
    out: &mut impl Write,
    listing: io::Result<Vec<(String, bool)>>,
) -> io::Result<bool> {
    match listing {
        Ok(entries) if entries.is_empty() => {
            writeln!(out, "   The 'assets' folder is empty.")?;
        }
        Ok(entries) => {
            for (name, is_dir) in entries {
                let tag = if is_dir { "[Folder]" } else { "[File]" };
                writeln!(out, "   {:<8} {}", tag, name)?;
            }
        }
        Err(e) => {
            writeln!(
                out,
                "   ❌ ERROR: Could not read the contents of the 'assets' folder due to a permission error: {e}"
            )?;
            return Ok(false);
        }
    }
    Ok(true)
}

/// Entry names with a directory flag, sorted by name.
fn list_entries(dir: &Path) -> io::Result<Vec<(String, bool)>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            Ok((entry.file_name().to_string_lossy().into_owned(), is_dir))
        })
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dir: &Path) -> (AssetStatus, String) {
        let mut out = Vec::new();
        let status = validate_assets_folder(dir, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn icon_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets").join("icon.png"), b"png").unwrap();

        let (status, text) = run(dir.path());
        assert_eq!(status, AssetStatus::IconFound);
        assert!(status.is_ok());
        assert!(text.contains("'icon.png' was found"));
        assert!(text.contains("[File]   icon.png"));
    }

    #[test]
    fn assets_without_icon() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets").join("fonts")).unwrap();

        let (status, text) = run(dir.path());
        assert_eq!(status, AssetStatus::IconMissing);
        assert!(text.contains("WARNING: 'icon.png' was NOT found"));
        assert!(text.contains("[Folder] fonts"));
    }

    #[test]
    fn empty_assets_folder() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();

        let (status, text) = run(dir.path());
        assert_eq!(status, AssetStatus::IconMissing);
        assert!(text.contains("The 'assets' folder is empty."));
    }

    #[test]
    fn no_assets_folder() {
        let dir = tempfile::tempdir().unwrap();

        let (status, text) = run(dir.path());
        assert_eq!(status, AssetStatus::MissingFolder);
        assert!(text.contains("ERROR: The 'assets' folder was NOT found."));
        assert!(!text.contains("icon.png"));
    }

    #[test]
    fn assets_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("assets"), b"not a dir").unwrap();

        let (status, text) = run(dir.path());
        assert_eq!(status, AssetStatus::NotAFolder);
        assert!(text.contains("it is NOT a folder"));
    }

    #[test]
    fn relative_icon_resolves_beside_base() {
        let base = Path::new("/opt/ai-chat");
        assert_eq!(
            resolve_beside(base, Path::new("assets/icon.png")),
            PathBuf::from("/opt/ai-chat/assets/icon.png")
        );
        assert_eq!(
            resolve_beside(base, Path::new("/usr/share/icon.png")),
            PathBuf::from("/usr/share/icon.png")
        );
    }

    #[test]
    fn default_icon_is_looked_up_next_to_executable() {
        let located = locate_icon(Path::new("assets/icon.png"));
        assert!(located.is_absolute());
        assert!(located.ends_with("assets/icon.png"));
        assert_eq!(located.parent().and_then(Path::parent), executable_dir().ok().as_deref());
    }

    /// Fails the first write, then records everything.
    struct FlakyWriter {
        failed: bool,
        written: Vec<u8>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
            }
            self.written.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unreadable_listing_is_reported() {
        let mut out = Vec::new();
        let listed = report_listing(
            &mut out,
            Err(io::Error::from(io::ErrorKind::PermissionDenied)),
        )
        .unwrap();
        assert!(!listed);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(
            "ERROR: Could not read the contents of the 'assets' folder due to a permission error:"
        ));
        assert!(text.contains("permission denied"));
    }

    #[test]
    fn listing_tags_folders_and_files() {
        let mut out = Vec::new();
        let entries = vec![("fonts".to_string(), true), ("icon.png".to_string(), false)];
        assert!(report_listing(&mut out, Ok(entries)).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "   [Folder] fonts\n   [File]   icon.png\n");
    }

    #[test]
    fn check_assets_reports_missing_directory() {
        let mut out = Vec::new();
        let status = check_assets(
            Err(io::Error::new(io::ErrorKind::NotFound, "no executable path")),
            &mut out,
        );
        assert_eq!(status, None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("An unexpected error occurred: no executable path"));
        assert!(!text.contains("Assets Validator"));
    }

    #[test]
    fn check_assets_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = FlakyWriter {
            failed: false,
            written: Vec::new(),
        };
        assert_eq!(check_assets(Ok(dir.path().to_path_buf()), &mut out), None);
        let text = String::from_utf8(out.written).unwrap();
        assert!(text.contains("An unexpected error occurred: stdout closed"));
    }

    #[test]
    fn check_assets_passes_status_through() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        assert_eq!(
            check_assets(Ok(dir.path().to_path_buf()), &mut out),
            Some(AssetStatus::MissingFolder)
        );
    }

    #[test]
    fn icon_png_directory_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets").join("icon.png")).unwrap();

        let (status, _) = run(dir.path());
        assert_eq!(status, AssetStatus::IconMissing);
    }
}
