use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse to write converter output over the NetJSON document it came from.
pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    let output_path = comparable(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let input_path = comparable(input)
        .with_context(|| format!("failed to resolve input path {}", input.display()))?;

    if output_path == input_path {
        bail!(
            "refusing to overwrite input document: output {} is the same file as {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn comparable(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not on disk yet: anchor relative paths at cwd, `..` stays unresolved.
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir().context("current_dir")?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::ensure_output_not_input;

    #[test]
    fn same_file_through_another_path_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("device.json");
        fs::write(&input, "{}").expect("write");
        let dotted = dir.path().join(".").join("device.json");

        let err = ensure_output_not_input(&dotted, &input).expect_err("same file");
        assert!(err.to_string().contains("refusing to overwrite input document"));
    }

    #[test]
    fn new_output_file_is_accepted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("device.json");
        fs::write(&input, "{}").expect("write");

        ensure_output_not_input(&dir.path().join("blocks.json"), &input).expect("distinct");
    }
}
