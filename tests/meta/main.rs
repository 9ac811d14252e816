//! Keeps the unit test tree in step with the source tree
//!
//! Every file under `src/` has a counterpart at the same relative path under
//! `tests/unit/` and vice versa. Crate roots and `mod.rs` files are exempt.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|_strip_error| io::Error::other("path outside root"))?;
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    fn is_exempt(relative: &Path) -> bool {
        relative == Path::new("lib.rs") || relative.ends_with("mod.rs")
    }

    fn missing_from(expected: &BTreeSet<PathBuf>, present: &BTreeSet<PathBuf>) -> Vec<String> {
        expected
            .iter()
            .filter(|path| !is_exempt(path) && !present.contains(*path))
            .map(|path| format!("  - {}", path.display()))
            .collect()
    }

    // Tests every source file has a unit test file at the mirrored path
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = rust_files(Path::new(SOURCE_ROOT)).unwrap();
        let units = rust_files(Path::new(UNIT_ROOT)).unwrap_or_default();

        let missing = missing_from(&sources, &units);
        assert!(
            missing.is_empty(),
            "Source files without a counterpart under {UNIT_ROOT}:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the source file it covers
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = rust_files(Path::new(SOURCE_ROOT)).unwrap();
        let units = rust_files(Path::new(UNIT_ROOT)).unwrap_or_default();

        let orphaned = missing_from(&units, &sources);
        assert!(
            orphaned.is_empty(),
            "Unit test files without a counterpart under {SOURCE_ROOT}:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every non-organizational test file declares at least one test
    #[test]
    fn test_all_test_files_contain_tests() {
        let test_files = rust_files(Path::new("tests")).unwrap();

        let empty: Vec<String> = test_files
            .iter()
            .filter(|path| !path.ends_with("mod.rs"))
            .filter(|path| {
                let content = fs::read_to_string(Path::new("tests").join(path)).unwrap();
                !content.contains("#[test]")
            })
            .map(|path| format!("  - tests/{}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
