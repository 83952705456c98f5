//! Client configuration

use chrono_tz::Tz;

/// 预订客户端配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | API_BASE_URL | http://localhost:5001 | 预订 API 地址 |
/// | REQUEST_TIMEOUT_SECS | 30 | 请求超时(秒) |
/// | BUSINESS_TZ | America/Los_Angeles | 业务时区 |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Reservation API base URL (e.g. "http://localhost:5001")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// 业务时区 — 日期校验锚定到此时区
    pub business_tz: Tz,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            business_tz: chrono_tz::America::Los_Angeles,
        }
    }

    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5001".into()),
            timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            business_tz: std::env::var("BUSINESS_TZ")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::America::Los_Angeles),
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the business time zone
    pub fn with_business_tz(mut self, tz: Tz) -> Self {
        self.business_tz = tz;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
