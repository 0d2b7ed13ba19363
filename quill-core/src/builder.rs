use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::html::StructuralError;
use crate::markdown::{MissingTitleError, extract_title, markdown_to_html_node};
use crate::scanner::{Page, ScanError, SiteScanner};

#[derive(Debug)]
pub enum BuildError {
    MissingTemplate(PathBuf),
    MissingStaticDir(PathBuf),
    MissingTitle(MissingTitleError),
    Structural(StructuralError),
    Scan(ScanError),
    Io(std::io::Error),
}

impl From<MissingTitleError> for BuildError {
    fn from(err: MissingTitleError) -> Self {
        BuildError::MissingTitle(err)
    }
}

impl From<StructuralError> for BuildError {
    fn from(err: StructuralError) -> Self {
        BuildError::Structural(err)
    }
}

impl From<ScanError> for BuildError {
    fn from(err: ScanError) -> Self {
        BuildError::Scan(err)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingTemplate(p) => write!(f, "Template not found: {}", p.display()),
            BuildError::MissingStaticDir(p) => {
                write!(f, "Static directory not found: {}", p.display())
            }
            BuildError::MissingTitle(e) => write!(f, "Title error: {}", e),
            BuildError::Structural(e) => write!(f, "Structural error: {}", e),
            BuildError::Scan(e) => write!(f, "Scan error: {}", e),
            BuildError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BuildError {}

pub struct SiteBuilder {
    content_dir: PathBuf,
    static_dir: PathBuf,
    template_path: PathBuf,
    output_dir: PathBuf,
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            static_dir: PathBuf::from("./static"),
            template_path: PathBuf::from("./template.html"),
            output_dir: PathBuf::from("./public"),
        }
    }

    pub fn content_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.content_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn static_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.static_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn template_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.template_path = path.as_ref().to_path_buf();
        self
    }

    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// Load the template and lock the configuration in.
    pub fn build(self) -> Result<Site, BuildError> {
        if !self.template_path.is_file() {
            return Err(BuildError::MissingTemplate(self.template_path));
        }
        let template = std::fs::read_to_string(&self.template_path)?;
        Ok(Site {
            content_dir: self.content_dir,
            static_dir: self.static_dir,
            output_dir: self.output_dir,
            template,
        })
    }
}

#[derive(Debug)]
pub struct Site {
    content_dir: PathBuf,
    static_dir: PathBuf,
    output_dir: PathBuf,
    template: String,
}

impl Site {
    /// Produce the whole site: wipe the output directory, copy static
    /// assets, then generate one page per markdown file, mirroring the
    /// content tree.
    pub fn generate_all(&self) -> Result<(), BuildError> {
        println!("Cleaning: {}", self.output_dir.display());
        self.reset_output_dir()?;
        println!("Copying static files from: {}", self.static_dir.display());
        self.copy_static()?;
        println!("Scanning: {}", self.content_dir.display());
        let pages = SiteScanner::new(&self.content_dir).scan()?;
        for page in &pages {
            self.generate(page)?;
        }
        Ok(())
    }

    fn reset_output_dir(&self) -> Result<(), BuildError> {
        if self.output_dir.exists() {
            std::fs::remove_dir_all(&self.output_dir)?;
        }
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    fn copy_static(&self) -> Result<(), BuildError> {
        if !self.static_dir.is_dir() {
            return Err(BuildError::MissingStaticDir(self.static_dir.clone()));
        }
        for entry in WalkDir::new(&self.static_dir) {
            let entry = entry.map_err(std::io::Error::from)?;
            let target = self
                .output_dir
                .join(entry.path().strip_prefix(&self.static_dir).unwrap_or(entry.path()));
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)?;
            } else {
                std::fs::copy(entry.path(), &target)?;
            }
        }
        Ok(())
    }

    fn generate(&self, page: &Page) -> Result<(), BuildError> {
        println!(
            "Generating: {} -> {}",
            page.source.display(),
            page.route.display()
        );
        let markdown = std::fs::read_to_string(&page.source)?;
        let html = generate_page(&markdown, &self.template)?;
        let output_path = self.output_dir.join(&page.route);
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, html)?;
        Ok(())
    }
}

/// Render one markdown document through the shared template by
/// substituting the literal `{{ Title }}` and `{{ Content }}`
/// placeholders.
pub fn generate_page(markdown: &str, template: &str) -> Result<String, BuildError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html_node(markdown).to_html()?;
    Ok(template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &content))
}
