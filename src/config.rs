// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// 默认值
// ============================================================================

/// 地名数据接口默认地址
pub const DEFAULT_API_URL: &str = "https://tools.yeecord.com/address-to-english.json";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_request_timeout_secs() -> u64 {
    30
}

// ============================================================================
// 应用配置
// ============================================================================

/// 应用配置
///
/// 来源优先级：配置文件（可缺省）→ 环境变量覆盖
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 地名数据接口地址（环境变量 API_URL 覆盖）
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// 快照缓存 TTL，秒（环境变量 CACHE_TTL_SECS 覆盖）
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// HTTP 请求超时，秒（环境变量 REQUEST_TIMEOUT_SECS 覆盖）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// 配置文件路径
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("AddressBot").join("config.json"))
    }

    /// 加载配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    pub(crate) fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("解析配置文件失败: {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// 覆盖规则：空 URL 不覆盖；秒数解析失败记警告并保留原值
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("API_URL") {
            if !url.trim().is_empty() {
                self.api_url = url;
            }
        }
        if let Some(raw) = var("CACHE_TTL_SECS") {
            match raw.parse() {
                Ok(secs) => self.cache_ttl_secs = secs,
                Err(_) => tracing::warn!("CACHE_TTL_SECS 不是合法秒数，忽略: {}", raw),
            }
        }
        if let Some(raw) = var("REQUEST_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => tracing::warn!("REQUEST_TIMEOUT_SECS 不是合法秒数，忽略: {}", raw),
            }
        }
    }
}
