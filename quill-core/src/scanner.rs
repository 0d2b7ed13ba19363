use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Debug)]
pub enum ScanError {
    Io(std::io::Error),
    InvalidPath(PathBuf),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        ScanError::Io(err.into())
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "IO error: {}", e),
            ScanError::InvalidPath(p) => write!(f, "Invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for ScanError {}

/// One discovered markdown document and the site-relative path of the
/// page it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub source: PathBuf,
    pub route: PathBuf,
}

pub struct SiteScanner {
    content_dir: PathBuf,
}

impl SiteScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            content_dir: path.as_ref().to_path_buf(),
        }
    }

    /// Collect every markdown file under the content directory.
    /// Entries come back in file-name order so regenerated sites are
    /// stable run to run.
    pub fn scan(&self) -> Result<Vec<Page>, ScanError> {
        let mut pages = Vec::new();
        for entry in WalkDir::new(&self.content_dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().map(|ext| ext == "md").unwrap_or(false)
            {
                let relative = path
                    .strip_prefix(&self.content_dir)
                    .map_err(|_| ScanError::InvalidPath(path.to_path_buf()))?;
                pages.push(Page {
                    source: path.to_path_buf(),
                    route: relative.with_extension("html"),
                });
            }
        }
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nested_markdown_and_maps_routes() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("posts")).unwrap();
        std::fs::write(root.path().join("index.md"), "# Home").unwrap();
        std::fs::write(root.path().join("notes.txt"), "skip me").unwrap();
        std::fs::write(root.path().join("posts/one.md"), "# One").unwrap();

        let pages = SiteScanner::new(root.path()).scan().unwrap();
        let routes: Vec<&Path> = pages.iter().map(|p| p.route.as_path()).collect();
        assert_eq!(
            routes,
            vec![Path::new("index.html"), Path::new("posts/one.html")]
        );
    }

    #[test]
    fn empty_directory_scans_clean() {
        let root = tempfile::tempdir().unwrap();
        let pages = SiteScanner::new(root.path()).scan().unwrap();
        assert!(pages.is_empty());
    }
}
