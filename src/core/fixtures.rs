//! Saves fetched dashboard pages so they can be checked in as test fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `PROMETEO_FIXDIR`, or the crate's `tests/fixtures`.
fn fixture_dir() -> PathBuf {
    match env::var_os("PROMETEO_FIXDIR") {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
    }
}

/// Write `body` to `<fixture dir>/<endpoint>.<ext>`, replacing any previous recording.
pub(crate) fn record_fixture(endpoint: &str, ext: &str, body: &str) -> io::Result<()> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{endpoint}.{ext}"));
    fs::write(&path, body)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), bytes = body.len(), "recorded fixture");
    Ok(())
}
