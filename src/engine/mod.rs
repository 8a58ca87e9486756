//! 地址解析与罗马化引擎
//!
//! 将自由格式的台湾中文地址转换为国际邮件可用的英文地址。
//!
//! ## 处理流程
//! 1. 归一化（异体字折叠 + NFC + 去空白）
//! 2. 行政区匹配（四策略取最长，得到残串）
//! 3. 街道分词（有序破坏性抽取）
//! 4. 路名罗马化（六层回退链）
//! 5. 按邮政惯例装配
//!
//! 引擎是（输入串, 不可变快照）→ 输出串的纯函数，不持跨请求状态，
//! 可无锁并发调用。

mod assembler;
mod normalizer;
mod region;
mod resolver;
mod tokenizer;
mod types;

pub use normalizer::normalize;
pub use types::{AddressComponents, RegionMatch, RoadType};

use crate::gazetteer::GazetteerSnapshot;

/// 对给定地名快照翻译一条地址
///
/// 返回 `None` 表示找不到任何行政区匹配（属预期结果，非错误）；
/// 部分片段译不出来时保留中文原文（数据缺口，照常返回）。
pub fn translate_with(snapshot: &GazetteerSnapshot, input: &str) -> Option<String> {
    let (region, residual) = region::match_region(input, snapshot.regions())?;
    tracing::debug!(
        "行政区匹配: {} ({}), 残串: {}",
        region.english_name,
        region.postal_code,
        residual
    );

    let mut components = tokenizer::tokenize(&residual);

    if let Some(fragment) = components.road_name.take() {
        let resolved =
            resolver::resolve_road_name(snapshot, &fragment, components.road_type, components.section);
        if let Some(section) = resolved.section_override {
            components.section = Some(section);
        }
        components.road_name = Some(resolved.name);
    }

    Some(assembler::assemble(&components, &region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::{AddressFeed, GazetteerSnapshot};

    fn fixture_snapshot() -> GazetteerSnapshot {
        let county = [
            ("100", "臺北市中正區", "Zhongzheng Dist., Taipei City"),
            ("110", "臺北市信義區", "Xinyi Dist., Taipei City"),
            ("320", "桃園市中壢區", "Zhongli Dist., Taoyuan City"),
            ("952", "臺東縣蘭嶼鄉", "Lanyu Township, Taitung County"),
        ];
        let roads = [
            ("中文街路名稱", "English Road Name"),
            ("重慶南路一段", "Sec. 1, Chongqing S. Rd."),
            ("忠孝東路五段", "Sec. 5, Zhongxiao E. Rd."),
            ("中山路", "Zhongshan Rd."),
            ("漁人", "Yuren"),
        ];
        let feed = AddressFeed {
            county: county
                .iter()
                .map(|(a, b, c)| (a.to_string(), b.to_string(), c.to_string()))
                .collect(),
            villages: vec![("椰油村".to_string(), "Yeyou Village".to_string())],
            roads: roads
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        };
        GazetteerSnapshot::from_feed(feed).expect("fixture snapshot")
    }

    #[test]
    fn translate_should_handle_section_road_address() {
        let snapshot = fixture_snapshot();
        assert_eq!(
            translate_with(&snapshot, "台北市中正區重慶南路一段122號").as_deref(),
            Some("No. 122, Sec. 1, Chongqing S. Rd., Zhongzheng Dist., Taipei City 100, Taiwan (R.O.C.)")
        );
    }

    #[test]
    fn translate_should_order_room_and_floor_before_number() {
        let snapshot = fixture_snapshot();
        assert_eq!(
            translate_with(&snapshot, "台北市信義區忠孝東路五段297號3樓8室").as_deref(),
            Some("Rm. 8, 3F., No. 297, Sec. 5, Zhongxiao E. Rd., Xinyi Dist., Taipei City 110, Taiwan (R.O.C.)")
        );
    }

    #[test]
    fn translate_should_handle_address_without_section() {
        let snapshot = fixture_snapshot();
        assert_eq!(
            translate_with(&snapshot, "桃園市中壢區中山路1234號").as_deref(),
            Some("No. 1234, Zhongshan Rd., Zhongli Dist., Taoyuan City 320, Taiwan (R.O.C.)")
        );
    }

    #[test]
    fn translate_should_return_none_for_unrecognized_region() {
        let snapshot = fixture_snapshot();
        assert_eq!(translate_with(&snapshot, "invalid address 123"), None);
    }

    #[test]
    fn translate_should_return_none_for_empty_input() {
        let snapshot = fixture_snapshot();
        assert_eq!(translate_with(&snapshot, ""), None);
        assert_eq!(translate_with(&snapshot, "   "), None);
    }

    #[test]
    fn translate_should_join_settlement_with_village_translation() {
        let snapshot = fixture_snapshot();
        assert_eq!(
            translate_with(&snapshot, "台東縣蘭嶼鄉椰油村漁人部落31號").as_deref(),
            Some("No. 31, Yuren, Yeyou Village, Lanyu Township, Taitung County 952, Taiwan (R.O.C.)")
        );
    }

    #[test]
    fn translate_should_accept_region_only_address() {
        let snapshot = fixture_snapshot();
        assert_eq!(
            translate_with(&snapshot, "臺北市中正區").as_deref(),
            Some("Zhongzheng Dist., Taipei City 100, Taiwan (R.O.C.)")
        );
    }

    #[test]
    fn translate_should_pass_through_untranslatable_road_name() {
        let snapshot = fixture_snapshot();
        // 路表缺口：中文原文嵌在英文地址里照常返回
        assert_eq!(
            translate_with(&snapshot, "台北市中正區莫名路99號").as_deref(),
            Some("No. 99, 莫名 Rd., Zhongzheng Dist., Taipei City 100, Taiwan (R.O.C.)")
        );
    }
}
