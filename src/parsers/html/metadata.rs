//! HTML 文档元数据处理模块
//!
//! 目前只提供标题提取，供输出路径中的 `%title%` 占位符使用。

/// 获取文档标题
///
/// 以文本方式查找第一个 `<title ...>` 与其后的 `</title>` 之间的内容。
///
/// # 返回值
///
/// * `Some(String)` - 去除首尾空白后的标题文本
/// * `None` - 没有 title 标签、标签未闭合或标题为空
///
/// # 示例
///
/// ```
/// use jhc2html::parsers::html::get_title;
///
/// let html = "<html><head><title> Space Game </title></head></html>";
/// assert_eq!(get_title(html), Some("Space Game".to_string()));
/// ```
pub fn get_title(html: &str) -> Option<String> {
    let open = html.find("<title")?;
    let after_open = &html[open..];
    let content_start = after_open.find('>')? + 1;
    let content = &after_open[content_start..];
    let content_end = content.find("</title>")?;
    let title = content[..content_end].trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
