//! Unmapped-parameter report files.

use crate::{unmapped_path, UNMAPPED_DIR};
use std::io;
use std::path::Path;

/// Write or remove the unmapped report for a device identity.
///
/// A non-empty set overwrites the report wholesale, one name per line in
/// the given (already sorted) order. An empty set removes any stale
/// report, so the file's absence always means nothing is unmapped.
pub fn write_unmapped_report(root: &Path, identity: &str, unmapped: &[String]) -> io::Result<()> {
    let path = unmapped_path(root, identity);

    if unmapped.is_empty() {
        match std::fs::remove_file(&path) {
            Ok(()) => log::debug!("removed stale report {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        return Ok(());
    }

    std::fs::create_dir_all(root.join(UNMAPPED_DIR))?;
    let mut contents = String::new();
    for name in unmapped {
        contents.push_str(name);
        contents.push('\n');
    }
    std::fs::write(&path, contents)?;
    log::debug!(
        "wrote {} unmapped parameter(s) to {}",
        unmapped.len(),
        path.display()
    );
    Ok(())
}
