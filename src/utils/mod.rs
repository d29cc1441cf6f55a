//! # 工具模块
//!
//! 这个模块包含各种工具函数和实用程序：
//!
//! - 引用分类（本地文件 / 外部资源）
//! - 相对路径解析
//! - 文件到 data URI 的转换
//!
//! # 模块组织
//!
//! - `mime` - 扩展名到 data URI 前缀的映射表
//! - `url` - 引用分类、路径解析、data URI 生成

pub mod mime;
pub mod url;

// Re-export commonly used items for convenience
pub use mime::{mime_prefix_for, MIME_TYPES};
pub use url::{
    classify, containing_dir, create_data_url, is_inlinable, read_text, resolve_reference,
    Reference, EXTERNAL_SCHEMES,
};
