//! 台灣中文地址 → 英文郵政格式翻譯服務
//!
//! 核心是地址解析与罗马化引擎（[`engine`]）：在非结构化输入中定位
//! 行政区、把残串分解为街道层级组件、经多层回退把中文片段译成英文，
//! 最后按台湾邮政惯例装配。地名数据来自远端 JSON 对照表（[`gazetteer`]），
//! 内存快照 + TTL 缓存；[`service`] 把引擎结果映射为对用户的回复文案。

pub mod config;
pub mod engine;
pub mod gazetteer;
pub mod service;

pub use config::AppConfig;
pub use engine::translate_with;
pub use gazetteer::{Gazetteer, GazetteerSnapshot, RemoteGazetteer, StaticGazetteer};
pub use service::AddressService;
