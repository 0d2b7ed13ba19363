pub mod block;
pub mod builder;
pub mod html;
pub mod inline;
pub mod markdown;
pub mod scanner;

// Re-export main types
pub use block::{BlockType, classify, split_blocks};
pub use builder::{BuildError, Site, SiteBuilder, generate_page};
pub use html::{HtmlNode, StructuralError};
pub use inline::{SpanStyle, TextSpan, tokenize};
pub use markdown::{MissingTitleError, extract_title, markdown_to_html_node};
pub use scanner::{Page, ScanError, SiteScanner};
