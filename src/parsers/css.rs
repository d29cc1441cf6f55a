//! CSS 样式表内联模块
//!
//! 将本地 `<link rel="stylesheet">` 替换为包含样式表原文的 `<style>` 块。
//! 在 base64 模式下，样式表中通过 `url(...)` 引用的本地资源（图片、字体等）
//! 会先相对于**样式表自身所在目录**解析并转换为 data URI，然后再嵌入文档。
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use jhc2html::parsers::css::inline_styles;
//! use std::path::Path;
//!
//! let html = r#"<link rel="stylesheet" href="style.css">"#;
//! let packed = inline_styles(html, Path::new("/srv/game"), true).unwrap();
//! ```

use std::path::Path;
use tracing::{debug, trace};

use crate::core::PackError;
use crate::parsers::html::scanner::{scan, TagKind};
use crate::utils::url::{
    containing_dir, create_data_url, is_inlinable, read_text, resolve_reference,
};

/// Opening token of a CSS asset reference
const CSS_URL_TOKEN: &str = "url(";

/// 将文档中的本地样式表链接替换为内联 `<style>` 块
///
/// # 参数
///
/// * `html` - 文档文本
/// * `base_dir` - 解析 `href` 的基准目录
/// * `base64` - 是否同时嵌入样式表引用的资源
///
/// 每个匹配到的 `<link ...>` 标签文本在整个文档中被全局替换。
pub fn inline_styles(html: &str, base_dir: &Path, base64: bool) -> Result<String, PackError> {
    let mut packed = html.to_string();

    for link in scan(html, TagKind::Stylesheet) {
        if !is_inlinable(link.value) {
            trace!(href = link.value, "leaving stylesheet link untouched");
            continue;
        }

        let css_path = resolve_reference(base_dir, link.value);
        let mut css = read_text(&css_path)?;

        if base64 {
            let css_dir = containing_dir(&css_path)?;
            css = inline_css_images(&css, &css_dir)?;
        }

        debug!(path = %css_path.display(), "inlining stylesheet");
        packed = packed.replace(link.tag, &format!("\n<style>\n{css}\n</style>\n"));
    }

    Ok(packed)
}

/// Embeds local `url(...)` references of a stylesheet as quoted data URIs.
///
/// Only the text between the parentheses is replaced, globally within `css`.
pub fn inline_css_images(css: &str, css_dir: &Path) -> Result<String, PackError> {
    let mut packed = css.to_string();

    for raw in css_url_values(css) {
        let reference = strip_quotes(raw.trim());

        if !is_inlinable(reference) {
            trace!(reference, "leaving CSS url untouched");
            continue;
        }

        let path = resolve_reference(css_dir, reference);
        let data_url = create_data_url(&path)?;

        debug!(path = %path.display(), "embedding CSS asset");
        packed = packed.replace(raw, &format!("\"{data_url}\""));
    }

    Ok(packed)
}

/// Raw text enclosed by each terminated `url(...)`
fn css_url_values(css: &str) -> impl Iterator<Item = &str> {
    css.match_indices(CSS_URL_TOKEN).filter_map(move |(start, token)| {
        let rest = &css[start + token.len()..];
        rest.find(')').map(|end| &rest[..end])
    })
}

fn strip_quotes(value: &str) -> &str {
    match value.strip_prefix(['"', '\'']) {
        Some(unquoted) => unquoted
            .find(['"', '\''])
            .map_or(unquoted, |end| &unquoted[..end]),
        None => value,
    }
}
