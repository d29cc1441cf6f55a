//! HTML 图片资源嵌入模块
//!
//! 仅在 base64 模式下运行，并且必须在样式表和脚本内联之后执行，
//! 这样新内联进来的文本中出现的图片路径也会被替换。处理分两轮：
//!
//! 1. 图标：`<link rel="shortcut icon" href="...">`
//! 2. 图片：`<img src="...">`
//!
//! 替换以引用值本身为键，对整个文档做全局字符串替换。同一路径出现在
//! 多处时全部替换为同一个 data URI；恰好包含该路径文本的无关内容也会被替换。

use std::path::Path;
use tracing::{debug, trace};

use crate::core::PackError;
use crate::utils::url::{create_data_url, is_inlinable, resolve_reference};

use super::scanner::{scan, TagKind};

/// Replaces every local icon and image reference with its base64 data URI
pub fn inline_images(html: &str, base_dir: &Path) -> Result<String, PackError> {
    let mut packed = html.to_string();

    for icon in scan(html, TagKind::Icon) {
        embed_reference(&mut packed, base_dir, icon.value, TagKind::Icon)?;
    }

    for image in scan(html, TagKind::Image) {
        embed_reference(&mut packed, base_dir, image.value, TagKind::Image)?;
    }

    Ok(packed)
}

fn embed_reference(
    packed: &mut String,
    base_dir: &Path,
    reference: &str,
    kind: TagKind,
) -> Result<(), PackError> {
    if !is_inlinable(reference) {
        trace!(?kind, reference, "leaving reference untouched");
        return Ok(());
    }

    let path = resolve_reference(base_dir, reference);
    let data_url = create_data_url(&path)?;

    debug!(?kind, path = %path.display(), "embedding as data URI");
    *packed = packed.replace(reference, &data_url);

    Ok(())
}
