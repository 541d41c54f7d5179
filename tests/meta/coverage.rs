//! Keeps `tests/unit` an exact mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module declarations carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn mirrored_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        collect(root, root, &mut paths)?;
        Ok(paths)
    }

    fn collect(dir: &Path, root: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect(&path, root, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs")
                && !is_exempt(&relative)
            {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn source_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = mirrored_paths(Path::new("src")).unwrap_or_else(|error| {
            unreachable!("failed to read src: {error}");
        });
        let unit = mirrored_paths(Path::new("tests/unit")).unwrap_or_default();
        (src, unit)
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/render/raster.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src, unit) = source_and_unit_paths();
        let missing: Vec<_> = src.difference(&unit).collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/io/stale.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src, unit) = source_and_unit_paths();
        let orphaned: Vec<_> = unit.difference(&src).collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without source files:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests every non-module test file declares at least one test
    // Verified by emptying tests/unit/math/geometry.rs
    #[test]
    fn test_all_test_files_contain_tests() {
        let root = Path::new("tests");
        let files = mirrored_paths(root).unwrap_or_default();

        let empty: Vec<_> = files
            .iter()
            .filter(|relative| relative.ends_with(".rs"))
            .filter(|relative| {
                fs::read_to_string(root.join(relative))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty
                .iter()
                .map(|path| format!("  - tests/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}
