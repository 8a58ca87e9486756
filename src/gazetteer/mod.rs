//! 地名数据源（Gazetteer）
//!
//! 只读参照数据：行政区（含邮递区号）、村里、街路的中英对照表。
//! 数据整批载入为不可变快照，刷新只做整体替换；引擎持有 `Arc` 快照，
//! 替换过程中在途请求不会看到半新半旧的表。

mod remote;

pub use remote::RemoteGazetteer;

use std::collections::HashMap;
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::normalize;

/// 远端地名数据文件格式（三张表缺一不可）
#[derive(Debug, Clone, Deserialize)]
pub struct AddressFeed {
    /// [邮递区号, 中文名, 英文名]
    pub county: Vec<(String, String, String)>,
    /// [中文名, 英文名]
    pub villages: Vec<(String, String)>,
    /// [中文名, 英文名]
    pub roads: Vec<(String, String)>,
}

/// 行政区条目（载入时计算归一化匹配键，此后只读）
#[derive(Debug, Clone)]
pub struct RegionEntry {
    pub postal_code: String,
    pub chinese_name: String,
    pub english_name: String,
    /// `normalize(chinese_name)`，异体字折叠后的匹配键
    pub normalized_key: String,
}

/// 数据规模统计（诊断用）
#[derive(Debug, Clone, Copy)]
pub struct GazetteerStats {
    pub regions: usize,
    pub villages: usize,
    pub roads: usize,
}

/// 路表首行是列标题而非数据
const ROADS_HEADER_ROW: &str = "中文街路名稱";

/// 不可变地名快照
pub struct GazetteerSnapshot {
    regions: Vec<RegionEntry>,
    roads: HashMap<String, String>,
    villages: Vec<(String, String)>,
    village_index: AhoCorasick,
}

impl GazetteerSnapshot {
    /// 由数据文件构建快照
    pub fn from_feed(feed: AddressFeed) -> Result<Self> {
        if feed.county.is_empty() {
            anyhow::bail!("地名数据行政区表为空");
        }

        let regions = feed
            .county
            .into_iter()
            .map(|(postal_code, chinese_name, english_name)| {
                let normalized_key = normalize(&chinese_name);
                RegionEntry {
                    postal_code,
                    chinese_name,
                    english_name,
                    normalized_key,
                }
            })
            .collect();

        let roads: HashMap<String, String> = feed
            .roads
            .into_iter()
            .filter(|(chinese, _)| chinese != ROADS_HEADER_ROW)
            .collect();

        let villages = feed.villages;
        let village_index = AhoCorasick::new(villages.iter().map(|(chinese, _)| chinese))
            .context("构建村里名索引失败")?;

        Ok(Self {
            regions,
            roads,
            villages,
            village_index,
        })
    }

    pub fn regions(&self) -> &[RegionEntry] {
        &self.regions
    }

    /// 精确查路表
    pub fn find_road(&self, chinese: &str) -> Option<&str> {
        self.roads.get(chinese).map(String::as_str)
    }

    /// 村里名最长包含匹配：片段中含多个村里名时取最长者
    pub fn find_village(&self, fragment: &str) -> Option<(&str, &str)> {
        let mut best: Option<usize> = None;
        let mut best_len = 0;
        for m in self.village_index.find_overlapping_iter(fragment) {
            let len = m.end() - m.start();
            if len > best_len {
                best_len = len;
                best = Some(m.pattern().as_usize());
            }
        }
        best.map(|idx| {
            let (chinese, english) = &self.villages[idx];
            (chinese.as_str(), english.as_str())
        })
    }

    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            regions: self.regions.len(),
            villages: self.villages.len(),
            roads: self.roads.len(),
        }
    }
}

/// 地名数据源契约
///
/// 引擎只通过快照读数据；基础设施失败（拉取不到、格式损坏）以 `Err`
/// 区别于「地址无法识别」的业务结果。
#[allow(async_fn_in_trait)]
pub trait Gazetteer: Send + Sync {
    /// 取得当前快照
    async fn snapshot(&self) -> Result<Arc<GazetteerSnapshot>>;
}

/// 固定快照数据源（测试注入用，不经过任何进程级共享状态）
#[derive(Clone)]
pub struct StaticGazetteer(Arc<GazetteerSnapshot>);

impl StaticGazetteer {
    pub fn new(snapshot: GazetteerSnapshot) -> Self {
        Self(Arc::new(snapshot))
    }
}

impl Gazetteer for StaticGazetteer {
    async fn snapshot(&self) -> Result<Arc<GazetteerSnapshot>> {
        Ok(self.0.clone())
    }
}
