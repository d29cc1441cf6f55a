//! # JHC2HTML Library
//!
//! 将网站或小游戏的多个文件（HTML、样式表、脚本、图片、字体）打包成一个
//! 独立的 HTML 文件。
//!
//! ## 模块组织
//!
//! - `core` - 打包流程、请求与错误类型
//! - `parsers` - 标签扫描与各类资源内联（HTML、CSS、JavaScript）
//! - `utils` - 引用分类、路径解析、data URI 生成
//! - `env` - 环境变量配置

pub mod core;
pub mod env;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::parsers::*;
pub use crate::utils::*;
