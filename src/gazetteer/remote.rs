//! 远端地名数据源
//!
//! 从 JSON 数据接口整批拉取三张对照表，解析为内存快照并按 TTL 缓存：
//! - 缓存新鲜：直接返回
//! - 缓存过期：立即返回旧快照，后台刷新（刷新中标志保证单飞）
//! - 刷新失败：继续使用最后一次成功的快照，只记警告
//! - 冷启动：串行化首次拉取，失败向上抛（基础设施错误）

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::sync::{Mutex, RwLock};

use super::{AddressFeed, Gazetteer, GazetteerSnapshot};
use crate::config::AppConfig;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; LINE-Address-Bot/1.0)";

struct CachedSnapshot {
    snapshot: Arc<GazetteerSnapshot>,
    fetched_at: Instant,
}

struct Inner {
    client: reqwest::Client,
    url: String,
    ttl: Duration,
    state: RwLock<Option<CachedSnapshot>>,
    /// 冷启动拉取互斥：并发首访只发一次请求
    cold_fetch: Mutex<()>,
    /// 后台刷新单飞标志
    refreshing: AtomicBool,
}

/// 远端地名数据源（可廉价克隆，共享同一份缓存）
#[derive(Clone)]
pub struct RemoteGazetteer {
    inner: Arc<Inner>,
}

impl RemoteGazetteer {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .context("构建 HTTP 客户端失败")?;

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                url: config.api_url.clone(),
                ttl: Duration::from_secs(config.cache_ttl_secs),
                state: RwLock::new(None),
                cold_fetch: Mutex::new(()),
                refreshing: AtomicBool::new(false),
            }),
        })
    }

    async fn fetch_snapshot(inner: &Inner) -> Result<Arc<GazetteerSnapshot>> {
        tracing::info!("拉取地名数据: {}", inner.url);
        let response = inner
            .client
            .get(&inner.url)
            .send()
            .await
            .context("地名数据请求失败")?
            .error_for_status()
            .context("地名数据响应异常")?;
        let feed: AddressFeed = response.json().await.context("地名数据格式不合法")?;

        let snapshot = GazetteerSnapshot::from_feed(feed)?;
        let stats = snapshot.stats();
        tracing::info!(
            "地名数据加载完成: {} 行政区 / {} 村里 / {} 街路",
            stats.regions,
            stats.villages,
            stats.roads
        );
        Ok(Arc::new(snapshot))
    }

    async fn store(inner: &Inner, snapshot: Arc<GazetteerSnapshot>) {
        let mut state = inner.state.write().await;
        *state = Some(CachedSnapshot {
            snapshot,
            fetched_at: Instant::now(),
        });
    }

    /// 触发后台刷新；已有刷新任务在跑时直接返回
    fn spawn_refresh(&self) {
        if self
            .inner
            .refreshing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let inner = self.inner.clone();
        tokio::spawn(async move {
            match Self::fetch_snapshot(&inner).await {
                Ok(snapshot) => Self::store(&inner, snapshot).await,
                Err(err) => {
                    tracing::warn!("地名数据后台刷新失败，继续使用旧快照: {err:#}");
                }
            }
            inner.refreshing.store(false, Ordering::SeqCst);
        });
    }
}

impl Gazetteer for RemoteGazetteer {
    async fn snapshot(&self) -> Result<Arc<GazetteerSnapshot>> {
        let stale = {
            let state = self.inner.state.read().await;
            match &*state {
                Some(cached) if cached.fetched_at.elapsed() < self.inner.ttl => {
                    return Ok(cached.snapshot.clone());
                }
                Some(cached) => Some(cached.snapshot.clone()),
                None => None,
            }
        };

        if let Some(snapshot) = stale {
            self.spawn_refresh();
            return Ok(snapshot);
        }

        // 冷启动：第一个请求拉数据，等待者复用写入的结果
        let _guard = self.inner.cold_fetch.lock().await;
        {
            let state = self.inner.state.read().await;
            if let Some(cached) = &*state {
                return Ok(cached.snapshot.clone());
            }
        }

        let snapshot = Self::fetch_snapshot(&self.inner).await?;
        Self::store(&self.inner, snapshot.clone()).await;
        Ok(snapshot)
    }
}
