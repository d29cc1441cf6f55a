//! JavaScript 脚本内联模块
//!
//! 将 `<script src="..."></script>` 替换为包含脚本原文的内联 `<script>` 块。
//! 只处理以 `></script>` 紧接着闭合的标签；已经是内联脚本（没有 `src`）
//! 或者 `src` 指向外部资源的标签保持不变。脚本内容不做任何转换。

use std::path::Path;
use tracing::{debug, trace};

use crate::core::PackError;
use crate::parsers::html::scanner::{scan, TagKind};
use crate::utils::url::{is_inlinable, read_text, resolve_reference};

/// Replaces every local external script with an inline script block
pub fn inline_scripts(html: &str, base_dir: &Path) -> Result<String, PackError> {
    let mut packed = html.to_string();

    for script in scan(html, TagKind::Script) {
        if !is_inlinable(script.value) {
            trace!(src = script.value, "leaving script untouched");
            continue;
        }

        let js_path = resolve_reference(base_dir, script.value);
        let js = read_text(&js_path)?;

        debug!(path = %js_path.display(), "inlining script");
        packed = packed.replace(script.tag, &format!("\n<script>\n{js}\n</script>\n"));
    }

    Ok(packed)
}
