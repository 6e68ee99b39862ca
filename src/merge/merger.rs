//! The merger: walk, filter, and append each file behind a banner.

use super::banner::render_block;
use super::reader::read_text;
use crate::domain::{
    default_include_extensions, FileFailure, MergeReport, MergeStats, MergedFile,
};
use crate::scan::FileWalker;
use crate::utils::normalize_path;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Concatenates qualifying source files into one output file.
pub struct Merger {
    include_extensions: Vec<String>,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

impl Merger {
    pub fn new() -> Self {
        Self {
            include_extensions: default_include_extensions()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Set file extensions to merge (e.g., ".java", "xml")
    pub fn include_extensions(mut self, extensions: Vec<String>) -> Self {
        self.include_extensions = extensions;
        self
    }

    /// Merge all qualifying files under `input_dir` into `output_file`.
    ///
    /// The output is truncated and held open for the whole run. Files that
    /// cannot be read are logged and reported in [`MergeReport::failures`];
    /// only problems with the input root or the output itself are errors.
    /// A file is read in full before its banner is written, so a failed file
    /// leaves no banner in the output.
    pub fn merge(&self, input_dir: &Path, output_file: &Path) -> Result<MergeReport> {
        if !input_dir.exists() {
            bail!("Input directory does not exist: {}", input_dir.display());
        }
        if !input_dir.is_dir() {
            bail!("Input path is not a directory: {}", input_dir.display());
        }

        let file = File::create(output_file)
            .with_context(|| format!("Failed to create output file: {}", output_file.display()))?;
        let mut out = BufWriter::new(file);

        let walk = FileWalker::new(input_dir.to_path_buf())
            .include_extensions(self.include_extensions.clone())
            .walk()?;

        let mut stats = MergeStats {
            files_scanned: walk.files_scanned,
            files_skipped_extension: walk.files_skipped_extension,
            ..Default::default()
        };
        let mut failures = walk.failures;
        let mut merged = Vec::with_capacity(walk.files.len());

        for path in walk.files {
            let content = match read_text(&path) {
                Ok(content) => content,
                Err(err) => {
                    tracing::warn!("Error processing {}: {}", path.display(), err);
                    failures.push(FileFailure { path, error: err.to_string() });
                    continue;
                }
            };

            let block = render_block(&path, &content);
            out.write_all(block.as_bytes()).with_context(|| {
                format!("Failed writing to output file: {}", output_file.display())
            })?;

            tracing::debug!("merged {} ({} bytes)", path.display(), content.len());

            stats.bytes_written += block.len() as u64;
            let relative_path = path
                .strip_prefix(input_dir)
                .ok()
                .and_then(|p| p.to_str())
                .map(normalize_path)
                .unwrap_or_else(|| path.display().to_string());
            merged.push(MergedFile { path, relative_path, bytes: content.len() as u64 });
        }

        out.flush()
            .with_context(|| format!("Failed writing to output file: {}", output_file.display()))?;

        stats.files_merged = merged.len();
        stats.files_failed = failures.len();

        Ok(MergeReport {
            input_dir: input_dir.to_path_buf(),
            output_file: output_file.to_path_buf(),
            merged,
            failures,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rule() -> String {
        "=".repeat(80)
    }

    fn banner_count(output: &str) -> usize {
        output.matches("\nFile: ").count()
    }

    #[test]
    fn test_merge_concrete_scenario() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.java"), "class A{}").unwrap();
        fs::write(src.join("b.xml"), "<r/>").unwrap();
        fs::write(src.join("c.txt"), "ignored").unwrap();
        let out_path = tmp.path().join("merged.txt");

        let report = Merger::new().merge(&src, &out_path).unwrap();

        let output = fs::read_to_string(&out_path).unwrap();
        let expected = format!(
            "\n\n{r}\nFile: {a}\n\n{r}\n\nclass A{{}}\n\n\n{r}\nFile: {b}\n\n{r}\n\n<r/>\n",
            r = rule(),
            a = src.join("a.java").display(),
            b = src.join("b.xml").display(),
        );
        similar_asserts::assert_eq!(output, expected);
        assert!(!output.contains("ignored"));
        assert_eq!(report.stats.files_merged, 2);
        assert_eq!(report.stats.files_skipped_extension, 1);
        assert_eq!(report.stats.bytes_written, output.len() as u64);
        assert_eq!(report.merged[0].relative_path, "a.java");
        assert!(!report.has_failures());
    }

    #[test]
    fn test_merge_one_block_per_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("tree");
        fs::create_dir_all(src.join("x/y")).unwrap();
        for (i, rel) in ["A.java", "x/B.java", "x/y/c.xml", "x/y/D.XML"].iter().enumerate() {
            fs::write(src.join(rel), format!("content {i}")).unwrap();
        }
        let out_path = tmp.path().join("out.txt");

        let report = Merger::new().merge(&src, &out_path).unwrap();

        let output = fs::read_to_string(&out_path).unwrap();
        assert_eq!(banner_count(&output), 4);
        assert_eq!(output.matches(&rule()).count(), 8);
        assert_eq!(report.stats.files_merged, 4);
        assert!(output.contains("content 3"));
    }

    #[test]
    fn test_merge_skips_undecodable_file_and_continues() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.java"), "class A{}").unwrap();
        fs::write(src.join("bad.java"), [0x63u8, 0xff, 0xfe, 0x00]).unwrap();
        fs::write(src.join("z.xml"), "<z/>").unwrap();
        let out_path = tmp.path().join("out.txt");

        let report = Merger::new().merge(&src, &out_path).unwrap();

        let output = fs::read_to_string(&out_path).unwrap();
        assert!(output.contains("class A{}"));
        assert!(output.contains("<z/>"));
        assert!(!output.contains("bad.java"));
        assert_eq!(banner_count(&output), 2);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("bad.java"));
        assert!(report.failures[0].error.contains("UTF-8"));
        assert_eq!(report.stats.files_failed, 1);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("pkg")).unwrap();
        fs::write(src.join("Main.java"), "class Main{}\n").unwrap();
        fs::write(src.join("pkg/Util.java"), "class Util{}\n").unwrap();
        fs::write(src.join("AndroidManifest.xml"), "<manifest/>\n").unwrap();
        let first = tmp.path().join("first.txt");
        let second = tmp.path().join("second.txt");

        Merger::new().merge(&src, &first).unwrap();
        Merger::new().merge(&src, &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_merge_truncates_existing_output() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.java"), "class A{}").unwrap();
        let out_path = tmp.path().join("out.txt");
        fs::write(&out_path, "stale content that must disappear").unwrap();

        Merger::new().merge(&src, &out_path).unwrap();

        let output = fs::read_to_string(&out_path).unwrap();
        assert!(!output.contains("stale"));
        assert_eq!(banner_count(&output), 1);
    }

    #[test]
    fn test_merge_custom_extensions() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("lib.rs"), "pub fn x() {}").unwrap();
        fs::write(src.join("A.java"), "class A{}").unwrap();
        let out_path = tmp.path().join("out.txt");

        let report = Merger::new()
            .include_extensions(vec![".rs".to_string()])
            .merge(&src, &out_path)
            .unwrap();

        let output = fs::read_to_string(&out_path).unwrap();
        assert!(output.contains("pub fn x() {}"));
        assert!(!output.contains("class A{}"));
        assert_eq!(report.stats.files_merged, 1);
    }

    #[test]
    fn test_merge_empty_tree_creates_empty_output() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("empty");
        fs::create_dir(&src).unwrap();
        let out_path = tmp.path().join("out.txt");

        let report = Merger::new().merge(&src, &out_path).unwrap();

        assert_eq!(fs::read(&out_path).unwrap(), Vec::<u8>::new());
        assert_eq!(report.stats.files_merged, 0);
    }

    #[test]
    fn test_merge_fails_when_output_cannot_be_created() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir(&src).unwrap();
        let out_path = tmp.path().join("missing-dir/out.txt");

        let err = Merger::new().merge(&src, &out_path).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }

    #[test]
    fn test_merge_rejects_missing_input_without_touching_output() {
        let tmp = TempDir::new().unwrap();
        let out_path = tmp.path().join("out.txt");

        let err = Merger::new().merge(&tmp.path().join("nope"), &out_path).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(!out_path.exists());
    }
}
