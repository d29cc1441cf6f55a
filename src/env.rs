//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问。打包引擎本身不读取任何环境变量，
//! 这些设置只由命令行程序使用。

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 日志与终端输出
pub mod logging {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "JHC2HTML_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// 禁用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何非空值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 打包相关环境变量
pub mod packing {
    use super::*;

    /// 默认是否将所有资源转换为 base64
    pub struct Base64;
    impl EnvVar<bool> for Base64 {
        const NAME: &'static str = "JHC2HTML_BASE64";
        const DEFAULT: Option<bool> = Some(true);
        const DESCRIPTION: &'static str =
            "Convert every asset (images, icons, fonts) into base64 data URIs by default";

        fn parse(value: &str) -> EnvResult<bool> {
            parse_bool(value, Self::NAME)
        }
    }

    /// 默认输出路径模板
    pub struct OutputTemplate;
    impl EnvVar<String> for OutputTemplate {
        const NAME: &'static str = "JHC2HTML_OUTPUT";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str =
            "Default output path; supports %title%, %timestamp%, %extension% and %ext%";

        fn parse(value: &str) -> EnvResult<String> {
            let path = value.trim();
            if path.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Output path cannot be empty".to_string(),
                });
            }
            Ok(path.to_string())
        }
    }
}

/// 辅助函数
fn parse_bool(value: &str, var_name: &str) -> EnvResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
        "false" | "0" | "no" | "off" | "disabled" => Ok(false),
        _ => Err(EnvError {
            variable: var_name.to_string(),
            message: format!(
                "Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off, enabled/disabled",
                value
            ),
        }),
    }
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,
    pub no_color: bool,
    pub base64: bool,
    pub output_template: Option<String>,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: logging::LogLevel::get()?,
            no_color: logging::NoColor::get()?,
            base64: packing::Base64::get()?,
            output_template: match env::var(packing::OutputTemplate::NAME) {
                Ok(value) => Some(packing::OutputTemplate::parse(&value)?),
                Err(_) => None,
            },
        })
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Logging\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        logging::LogLevel::NAME,
        logging::LogLevel::DESCRIPTION,
        "warn"
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        logging::NoColor::NAME,
        logging::NoColor::DESCRIPTION,
        logging::NoColor::DEFAULT
    ));

    docs.push_str("\n## Packing\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        packing::Base64::NAME,
        packing::Base64::DESCRIPTION,
        packing::Base64::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        packing::OutputTemplate::NAME,
        packing::OutputTemplate::DESCRIPTION,
        packing::OutputTemplate::DEFAULT
    ));

    docs
}
