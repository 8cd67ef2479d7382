//! 日志初始化

use anyhow::anyhow;
use tracing::{info, Level};

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            show_target: true,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 按命令行参数创建日志配置
    pub fn from_args(level: &str, json_format: bool) -> Self {
        Self {
            level: parse_log_level(level),
            show_target: !json_format,
            json_format,
        }
    }

    /// 安装全局日志订阅者
    pub fn init(&self) -> anyhow::Result<()> {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(self.level)
            .with_target(self.show_target);

        if self.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        }
        .map_err(|e| anyhow!("日志初始化失败: {}", e))?;

        info!("日志系统初始化完成");
        Ok(())
    }
}

/// 解析日志级别，无法识别时使用 INFO
fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
