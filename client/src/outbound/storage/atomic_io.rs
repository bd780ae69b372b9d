//! Atomic replacement of small files inside a capability directory.
//!
//! Contents go to a hidden sibling temp file which is synced and then renamed
//! over the target, so readers never observe a half-written document.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `path` (a bare file name) in `dir` with `contents`.
pub(crate) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> io::Result<()> {
    let file_name = bare_file_name(path)?;
    let tmp_name = temp_name(file_name);

    if let Err(err) = write_temp(dir, &tmp_name, contents) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    if let Err(err) = replace(dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(err);
    }
    // Directory sync is best-effort; some filesystems refuse it.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn bare_file_name(path: &Utf8Path) -> io::Result<&str> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Ok(name),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} is not a bare file name"),
        )),
    }
}

fn temp_name(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn write_temp(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use cap_std::ambient_authority;
    use rstest::rstest;

    fn temp_dir() -> (tempfile::TempDir, Dir) {
        let tmp = tempfile::tempdir().expect("temp dir");
        let dir = Dir::open_ambient_dir(tmp.path(), ambient_authority()).expect("open dir");
        (tmp, dir)
    }

    #[rstest]
    fn replaces_existing_contents_and_leaves_no_temp_files() {
        let (_tmp, dir) = temp_dir();
        let path = Utf8Path::new("storage.json");

        write_atomic(&dir, path, "{}").expect("first write");
        write_atomic(&dir, path, r#"{"theme":"dark"}"#).expect("second write");

        assert_eq!(
            dir.read_to_string(path).expect("read back"),
            r#"{"theme":"dark"}"#
        );
        let names: Vec<String> = dir
            .entries()
            .expect("list dir")
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        assert_eq!(names, vec!["storage.json".to_owned()]);
    }

    #[rstest]
    #[case("nested/storage.json")]
    #[case("../storage.json")]
    #[case("")]
    fn rejects_paths_that_are_not_bare_names(#[case] raw: &str) {
        let (_tmp, dir) = temp_dir();
        let err = write_atomic(&dir, Utf8Path::new(raw), "{}").expect_err("rejected");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
