//! HTML 处理模块
//!
//! - `scanner`: 基于标记的标签扫描
//! - `assets`: 图标与图片的 base64 嵌入
//! - `metadata`: 文档元数据（标题）

pub mod assets;
pub mod metadata;
pub mod scanner;

pub use assets::inline_images;
pub use metadata::get_title;
pub use scanner::{first_quoted_value, scan, TagKind, TagOccurrence, TagScanner};
