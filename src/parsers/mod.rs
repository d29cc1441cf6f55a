//! # 解析器模块
//!
//! 这个模块包含所有用于识别和内联不同类型本地资源的功能：
//!
//! - HTML 标签扫描、图标与图片嵌入
//! - CSS 样式表内联及其资源嵌入
//! - JavaScript 脚本内联
//!
//! # 模块组织
//!
//! - `html` - 标签扫描、图片嵌入、元数据
//! - `css` - 样式表内联、`url(...)` 资源嵌入
//! - `js` - 外部脚本内联

pub mod css;
pub mod html;
pub mod js;

// Re-export commonly used items for convenience
pub use css::{inline_css_images, inline_styles};
pub use html::{get_title, inline_images, scan, TagKind, TagOccurrence, TagScanner};
pub use js::inline_scripts;
