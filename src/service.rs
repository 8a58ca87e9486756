//! 地址翻译服务
//!
//! 持有注入的地名数据源，对外区分三种结果：
//! 翻译成功 / 地址无法识别（业务结果）/ 数据源不可用（基础设施失败），
//! 并为后两者提供固定的用户回复文案。

use anyhow::Result;

use crate::engine;
use crate::gazetteer::{Gazetteer, GazetteerStats};

/// 地址无法识别时的回复文案
pub const REPLY_NO_MATCH: &str = "無法轉換此地址，請確認地址格式是否正確";
/// 服务不可用时的回复文案
pub const REPLY_SERVICE_ERROR: &str = "地址轉換服務暫時無法使用，請稍後再試";

/// 地址翻译服务
pub struct AddressService<G: Gazetteer> {
    gazetteer: G,
}

impl<G: Gazetteer> AddressService<G> {
    pub fn new(gazetteer: G) -> Self {
        Self { gazetteer }
    }

    /// 翻译地址
    ///
    /// - `Ok(Some(_))` 翻译结果（可能含未译出的中文片段）
    /// - `Ok(None)` 找不到任何行政区匹配
    /// - `Err(_)` 地名数据源不可用
    pub async fn translate(&self, text: &str) -> Result<Option<String>> {
        let snapshot = self.gazetteer.snapshot().await?;
        Ok(engine::translate_with(&snapshot, text))
    }

    /// 生成对用户的回复文案（两种失败各用一套固定文案，绝不混淆）
    pub async fn reply(&self, text: &str) -> String {
        match self.translate(text).await {
            Ok(Some(address)) => address,
            Ok(None) => {
                tracing::info!("地址无法识别: {}", text);
                REPLY_NO_MATCH.to_string()
            }
            Err(err) => {
                tracing::error!("地址翻译服务异常: {err:#}");
                REPLY_SERVICE_ERROR.to_string()
            }
        }
    }

    /// 数据规模统计
    pub async fn stats(&self) -> Result<GazetteerStats> {
        Ok(self.gazetteer.snapshot().await?.stats())
    }
}
