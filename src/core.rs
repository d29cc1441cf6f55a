use chrono::{SecondsFormat, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::env::{logging::NoColor, EnvVar};
use crate::parsers::css::inline_styles;
use crate::parsers::html::{get_title, inline_images};
use crate::parsers::js::inline_scripts;
use crate::utils::url::{containing_dir, read_text};

/// Message shown to the user whenever packing fails on a read
pub const PACK_FAILURE_MESSAGE: &str =
    "An error occurred packaging your file, ensure it is correctly selected";

/// Represents errors that can occur while packing a document
///
/// Every failure to read the source document or one of its local assets is a
/// [`PackError::Read`]. Markup that cannot be scanned is never an error.
#[derive(Error, Debug)]
pub enum PackError {
    /// The source document or a referenced local asset is missing or unreadable
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    /// The packed document could not be saved
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}

impl PackError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        PackError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        PackError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for failures the user should fix by picking another input
    pub fn is_read_error(&self) -> bool {
        matches!(self, PackError::Read { .. })
    }
}

/// A single packing job
///
/// Carries everything the presentation layer used to keep as "currently
/// selected" state: the source document, where to save the result, and
/// whether every asset should become a base64 data URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackRequest {
    pub source: PathBuf,
    /// Output path template, see [`format_output_path`]; `None` keeps the
    /// document in memory only
    pub output: Option<String>,
    pub base64: bool,
}

/// Result of a successful [`PackRequest`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackOutcome {
    pub document: String,
    /// Where the document was saved, if anywhere
    pub destination: Option<PathBuf>,
}

impl PackRequest {
    pub fn new(source: impl Into<PathBuf>, base64: bool) -> Self {
        Self {
            source: source.into(),
            output: None,
            base64,
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Packs the source document and saves it when an output is set.
    ///
    /// Nothing is written unless packing succeeded as a whole.
    pub fn execute(&self) -> Result<PackOutcome, PackError> {
        let document = pack(&self.source, self.base64)?;

        let destination = match &self.output {
            Some(template) => {
                let title = get_title(&document);
                let path = PathBuf::from(format_output_path(template, title.as_deref()));
                fs::write(&path, &document).map_err(|e| PackError::write(&path, e))?;
                Some(path)
            }
            None => None,
        };

        Ok(PackOutcome {
            document,
            destination,
        })
    }
}

/// Packs the HTML document at `source` into a single self-contained document
///
/// Local stylesheets and scripts are always inlined. With `base64` set, CSS
/// assets, shortcut icons and images become base64 data URIs as well.
///
/// # Arguments
///
/// * `source` - Path of the HTML document
/// * `base64` - Whether to embed every asset, not just code
///
/// # Examples
///
/// ```no_run
/// use jhc2html::core::pack;
/// use std::path::Path;
///
/// let html = pack(Path::new("game/index.html"), true).unwrap();
/// ```
pub fn pack(source: &Path, base64: bool) -> Result<String, PackError> {
    let html = read_text(source)?;
    let base_dir = containing_dir(source)?;

    let packed = DocumentProcessor::new(base_dir, base64).process_document(&html)?;

    info!(
        source = %source.display(),
        base64,
        bytes = packed.len(),
        "packed document"
    );

    Ok(packed)
}

/// 文档处理器，负责按固定顺序执行各内联阶段
///
/// 样式表 → 脚本 → 图片（仅 base64 模式）。图片阶段必须最后执行，
/// 才能覆盖前两个阶段新引入文本中的图片路径。
pub struct DocumentProcessor {
    base_dir: PathBuf,
    base64: bool,
}

impl DocumentProcessor {
    pub fn new(base_dir: impl Into<PathBuf>, base64: bool) -> Self {
        Self {
            base_dir: base_dir.into(),
            base64,
        }
    }

    /// 处理文档文本并返回最终结果
    pub fn process_document(&self, html: &str) -> Result<String, PackError> {
        // 1. 内联样式表
        let html = inline_styles(html, &self.base_dir, self.base64)?;

        // 2. 内联脚本
        let html = inline_scripts(&html, &self.base_dir)?;

        // 3. 嵌入图标和图片
        if self.base64 {
            inline_images(&html, &self.base_dir)
        } else {
            Ok(html)
        }
    }
}

/// Formats output path with title substitution and sanitization
pub fn format_output_path(path: &str, document_title: Option<&str>) -> String {
    let datetime: &str = &Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let title = document_title.unwrap_or("");

    path.replace("%timestamp%", &datetime.replace(':', "_"))
        .replace(
            "%title%",
            title
                .replace(['/', '\\'], "_")
                .replace('<', "[")
                .replace('>', "]")
                .replace(':', " - ")
                .replace(['"', '?'], "")
                .replace('|', "-")
                .trim_start_matches('.'),
        )
        .replace("%extension%", "html")
        .replace("%ext%", "htm")
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Prints an error message to stderr, in red when stderr is a terminal
pub fn print_error_message(msg: &str) {
    if atty::is(atty::Stream::Stderr) && !NoColor::get_or_default(false) {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
