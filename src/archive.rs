//! The archive boundary layer around the replacement engine.
//!
//! A ZIP archive goes in; every file inside whose extension marks it as text is run through
//! the mapping list, file and directory names are optionally rewritten the same way, and
//! the result is repacked into a new ZIP. Binary files are copied through byte for byte and
//! never decoded as text. Scratch state lives in a temporary directory that is removed when
//! processing finishes, successfully or not.


use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
#[cfg(feature = "tracing")] use tracing::{instrument, trace};
use walkdir::WalkDir;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::Mapping;
use crate::replace::apply_mappings;
#[cfg(not(feature = "tracing"))] use crate::no_trace as trace;


/// Extensions (lowercase, without the dot) of files treated as text by default.
pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &[
    "css", "env", "html", "java", "js", "json", "jsx", "md",
    "php", "py", "ts", "tsx", "txt", "yml",
];


/// An error from the archive pipeline.
///
/// The replacement engine itself is total and contributes no variants here; everything that
/// can fail is I/O and archive handling.
#[derive(Debug, Error)]
pub enum CloneError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}


/// Options for one archive rewriting run.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CloneOptions {
    /// Extensions (lowercase, without the dot) of files whose content is rewritten. Files
    /// without any extension are treated as text as well; everything else is copied through
    /// unchanged.
    pub text_extensions: Vec<String>,

    /// Whether file and directory names are run through the mapping list too.
    pub rename_paths: bool,
}
impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            text_extensions: DEFAULT_TEXT_EXTENSIONS.iter()
                .map(|e| (*e).to_owned())
                .collect(),
            rename_paths: true,
        }
    }
}


/// What one archive rewriting run did.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CloneReport {
    /// Text files whose content changed.
    pub files_rewritten: usize,

    /// Files carried over unchanged (binary, non-UTF-8, or simply without a match).
    pub files_copied: usize,

    /// Files and directories that were renamed.
    pub entries_renamed: usize,
}


/// Applies the mapping list to every text file and (optionally) every path segment inside
/// the input archive, writing a modified copy to `output`.
#[cfg_attr(feature = "tracing", instrument(skip_all))]
pub fn clone_archive(
    input: &Path,
    output: &Path,
    mappings: &[Mapping],
    options: &CloneOptions,
) -> Result<CloneReport, CloneError> {
    let scratch = tempfile::tempdir()?;
    extract_zip(input, scratch.path())?;
    let mut report = rewrite_tree(scratch.path(), mappings, options)?;
    if options.rename_paths {
        report.entries_renamed = rename_tree(scratch.path(), mappings)?;
    }
    pack_zip(scratch.path(), output)?;
    Ok(report)
}


fn extract_zip(archive_path: &Path, destination: &Path) -> Result<(), CloneError> {
    let file = fs::File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            // entry path escapes the destination; skip it
            None => continue,
        };
        let output_path = destination.join(&entry_path);
        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut output_file = fs::File::create(&output_path)?;
            io::copy(&mut entry, &mut output_file)?;
        }
    }
    Ok(())
}


fn is_text_file(path: &Path, text_extensions: &[String]) -> bool {
    match path.extension() {
        Some(extension) => {
            let extension = extension.to_string_lossy().to_lowercase();
            text_extensions.iter().any(|te| *te == extension)
        },
        // extensionless files (Makefile, Dockerfile, .env-style names) count as text
        None => true,
    }
}


fn rewrite_tree(
    root: &Path,
    mappings: &[Mapping],
    options: &CloneOptions,
) -> Result<CloneReport, CloneError> {
    let mut report = CloneReport::default();
    for dir_entry in WalkDir::new(root) {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type().is_file() {
            continue;
        }
        let path = dir_entry.path();
        if !is_text_file(path, &options.text_extensions) {
            report.files_copied += 1;
            continue;
        }

        let bytes = fs::read(path)?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            // not actually text; carry it over untouched
            Err(_) => {
                report.files_copied += 1;
                continue;
            },
        };

        match apply_mappings(&content, mappings) {
            Cow::Borrowed(_) => report.files_copied += 1,
            Cow::Owned(rewritten) => {
                fs::write(path, rewritten)?;
                report.files_rewritten += 1;
                trace!("rewrote {:?}", path);
            },
        }
    }
    Ok(report)
}


fn rename_tree(root: &Path, mappings: &[Mapping]) -> Result<usize, CloneError> {
    let mut renamed = 0;
    // contents first, so children are renamed before their parent directory moves
    for dir_entry in WalkDir::new(root).contents_first(true) {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        if path == root {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let new_name = match apply_mappings(name, mappings) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(new_name) => new_name,
        };
        let target = path.with_file_name(&new_name);
        if target.exists() {
            // collision; the entry keeps its old name
            trace!("not renaming {:?}, {:?} already exists", path, target);
            continue;
        }
        fs::rename(path, &target)?;
        renamed += 1;
        trace!("renamed {:?} to {:?}", path, new_name);
    }
    Ok(renamed)
}


fn pack_zip(root: &Path, output: &Path) -> Result<(), CloneError> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(output)?;
    let mut writer = ZipWriter::new(file);
    let zip_options = SimpleFileOptions::default();

    for dir_entry in WalkDir::new(root) {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        if path == root {
            continue;
        }
        let relative = match path.strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let entry_name = relative.to_string_lossy().replace('\\', "/");
        if dir_entry.file_type().is_dir() {
            writer.add_directory(entry_name, zip_options)?;
        } else {
            writer.start_file(entry_name, zip_options)?;
            let mut input_file = fs::File::open(path)?;
            io::copy(&mut input_file, &mut writer)?;
        }
    }

    writer.finish()?;
    Ok(())
}


/// Applies the mapping list to one path-segment string (a file or directory name).
///
/// Convenience wrapper for collaborators that manage their own filesystem traversal.
pub fn rename_segment<'a>(segment: &'a str, mappings: &[Mapping]) -> Cow<'a, str> {
    apply_mappings(segment, mappings)
}


#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write as _;
    use std::path::Path;

    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    use super::{clone_archive, is_text_file, CloneOptions, DEFAULT_TEXT_EXTENSIONS};
    use crate::Mapping;

    const BINARY_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x00, 0xFF, 0x01, 0x02];

    fn write_fixture_zip(path: &Path) {
        let file = fs::File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        writer.add_directory("BossLady-Xmd", options).unwrap();

        writer.start_file("BossLady-Xmd/readme.md", options).unwrap();
        writer.write_all("run \u{1D401}\u{1D428}\u{1D42C}\u{1D42C}\u{1D40B}\u{1D41A}\u{1D41D}\u{1D432} now".as_bytes()).unwrap();

        writer.start_file("BossLady-Xmd/bosslady.txt", options).unwrap();
        writer.write_all("plain BossLady mention".as_bytes()).unwrap();

        writer.start_file("logo.png", options).unwrap();
        writer.write_all(BINARY_BYTES).unwrap();

        // .md extension but not valid UTF-8; must be carried over untouched
        writer.start_file("notes.md", options).unwrap();
        writer.write_all(&[0xFF, 0xFE, 0x00]).unwrap();

        writer.finish().unwrap();
    }

    fn read_output_entry(path: &Path, name: &str) -> Vec<u8> {
        let file = fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut entry, &mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_is_text_file() {
        let extensions: Vec<String> = DEFAULT_TEXT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect();
        assert!(is_text_file(Path::new("a/b.md"), &extensions));
        assert!(is_text_file(Path::new("a/B.MD"), &extensions));
        assert!(is_text_file(Path::new("Makefile"), &extensions));
        assert!(!is_text_file(Path::new("logo.png"), &extensions));
        assert!(!is_text_file(Path::new("a.tar.gz"), &extensions));
    }

    #[test]
    fn test_clone_archive_end_to_end() {
        let workspace = tempfile::tempdir().unwrap();
        let input = workspace.path().join("input.zip");
        let output = workspace.path().join("output.zip");
        write_fixture_zip(&input);

        let mappings = [Mapping::new("BossLady", "SuzzyCore")];
        let report = clone_archive(&input, &output, &mappings, &CloneOptions::default()).unwrap();

        assert_eq!(report.files_rewritten, 2);
        assert_eq!(report.files_copied, 2);
        assert_eq!(report.entries_renamed, 2);

        // the matching file and directory names were rewritten along with the content
        let readme = read_output_entry(&output, "SuzzYcore-Xmd/readme.md");
        assert_eq!(
            String::from_utf8(readme).unwrap(),
            "run \u{1D412}\u{1D42E}\u{1D433}\u{1D433}\u{1D432}\u{1D402}\u{1D428}\u{1D42B}e now",
        );
        let renamed_txt = read_output_entry(&output, "SuzzYcore-Xmd/suzzycore.txt");
        assert_eq!(String::from_utf8(renamed_txt).unwrap(), "plain SuzzYcore mention");

        // binary and non-UTF-8 files survive byte for byte
        assert_eq!(read_output_entry(&output, "logo.png"), BINARY_BYTES);
        assert_eq!(read_output_entry(&output, "notes.md"), vec![0xFF, 0xFE, 0x00]);
    }

    #[test]
    fn test_clone_archive_no_renaming() {
        let workspace = tempfile::tempdir().unwrap();
        let input = workspace.path().join("input.zip");
        let output = workspace.path().join("output.zip");
        write_fixture_zip(&input);

        let options = CloneOptions {
            rename_paths: false,
            ..CloneOptions::default()
        };
        let mappings = [Mapping::new("BossLady", "SuzzyCore")];
        let report = clone_archive(&input, &output, &mappings, &options).unwrap();

        assert_eq!(report.entries_renamed, 0);
        let readme = read_output_entry(&output, "BossLady-Xmd/readme.md");
        assert!(String::from_utf8(readme).unwrap().contains("\u{1D412}"));
    }

    #[test]
    fn test_clone_archive_rejects_garbage() {
        let workspace = tempfile::tempdir().unwrap();
        let input = workspace.path().join("input.zip");
        let output = workspace.path().join("output.zip");
        fs::write(&input, b"this is not a zip file").unwrap();

        let result = clone_archive(&input, &output, &[], &CloneOptions::default());
        assert!(matches!(result, Err(super::CloneError::Zip(_))));
    }
}
