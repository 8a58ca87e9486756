//! 路名罗马化解析
//!
//! 地名数据的路表规模大但不完备：新路、带村里/部落限定的名称、
//! 方位变体常缺完整条目而存在基础形式。因此按严格优先级逐层回退，
//! 前一层命中即停止：
//! 1. 完整复合名查表（路名 + 类型字 + 段序数）
//! 2. 村里名包含拆分
//! 3. 裸片段查表
//! 4. 聚落后缀剥离后查表
//! 5. 方位后缀分解
//! 6. 原文回传（数据缺口，不视为失败）

use crate::engine::types::RoadType;
use crate::gazetteer::GazetteerSnapshot;

/// 聚落层级后缀（部落/村/里/鄰）
const HAMLET_SUFFIXES: &[&str] = &["部落", "村", "里", "鄰"];

/// 方位后缀与英文缩写
const DIRECTION_SUFFIXES: &[(char, &str)] = &[('南', " S."), ('北', " N."), ('東', " E."), ('西', " W.")];

const SECTION_ORDINALS: &[&str] = &["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// 解析结果：英文路名 + 可能从查表译文中拆出的段号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoad {
    pub name: String,
    pub section_override: Option<u32>,
}

/// 解析路名片段
pub fn resolve_road_name(
    snapshot: &GazetteerSnapshot,
    fragment: &str,
    road_type: Option<RoadType>,
    section: Option<u32>,
) -> ResolvedRoad {
    // 1. 完整复合名：按数据源的存储形态重建（片段 + 类型字 + 段序数 + 段）
    if let Some(road_type) = road_type {
        let mut compound = format!("{fragment}{}", road_type.chinese());
        if let Some(section) = section {
            compound.push_str(&section_ordinal(section));
            compound.push('段');
        }
        if let Some(english) = lookup_road(snapshot, &compound) {
            return split_section_override(strip_type_abbrev(english));
        }
    }

    // 2. 村里名包含：拆成「村里 + 其余」，其余部分继续走 3-5 层
    if let Some((village_zh, village_en)) = snapshot.find_village(fragment) {
        let remainder = fragment.replacen(village_zh, "", 1).trim().to_string();
        let name = if remainder.is_empty() {
            village_en.to_string()
        } else {
            format!("{}, {}", resolve_bare(snapshot, &remainder), village_en)
        };
        return ResolvedRoad {
            name,
            section_override: None,
        };
    }

    ResolvedRoad {
        name: resolve_bare(snapshot, fragment),
        section_override: None,
    }
}

/// 3-6 层：裸查表 → 聚落后缀剥离 → 方位分解 → 原文回传
fn resolve_bare(snapshot: &GazetteerSnapshot, fragment: &str) -> String {
    // 3. 裸片段查表
    if let Some(english) = lookup_road(snapshot, fragment) {
        return strip_type_abbrev(english);
    }

    // 4. 聚落后缀剥离
    for suffix in HAMLET_SUFFIXES {
        if let Some(prefix) = fragment.strip_suffix(suffix) {
            if !prefix.is_empty() {
                if let Some(english) = lookup_road(snapshot, prefix) {
                    return strip_type_abbrev(english);
                }
            }
        }
    }

    // 5. 方位后缀分解：基础名真的译出来了才追加方位缩写
    for (direction, abbrev) in DIRECTION_SUFFIXES {
        if let Some(base) = fragment.strip_suffix(*direction) {
            if base.is_empty() {
                continue;
            }
            let resolved = resolve_bare(snapshot, base);
            if resolved != base {
                return format!("{resolved}{abbrev}");
            }
            return fragment.to_string();
        }
    }

    // 6. 原文回传
    fragment.to_string()
}

/// 查路表；归一化后的残串只会写「台」，落空时回退「臺」写法
fn lookup_road<'a>(snapshot: &'a GazetteerSnapshot, name: &str) -> Option<&'a str> {
    if let Some(english) = snapshot.find_road(name) {
        return Some(english);
    }
    if name.contains('台') {
        return snapshot.find_road(&name.replace('台', "臺"));
    }
    None
}

/// 去掉译文尾部的道路类型缩写（装配时会重新拼上）
fn strip_type_abbrev(english: &str) -> String {
    for road_type in [
        RoadType::Road,
        RoadType::Street,
        RoadType::Lane,
        RoadType::Alley,
        RoadType::Boulevard,
    ] {
        if let Some(prefix) = english.strip_suffix(road_type.abbrev()) {
            return prefix.trim_end().to_string();
        }
    }
    english.trim().to_string()
}

/// 查表译文自带段号（如 "Sec. 1, Chongqing S."）时拆出来覆盖已抽取的段号
fn split_section_override(name: String) -> ResolvedRoad {
    if let Some(rest) = name.strip_prefix("Sec. ") {
        if let Some((section_str, road)) = rest.split_once(", ") {
            if let Ok(section) = section_str.parse::<u32>() {
                return ResolvedRoad {
                    name: road.to_string(),
                    section_override: Some(section),
                };
            }
        }
    }
    ResolvedRoad {
        name,
        section_override: None,
    }
}

fn section_ordinal(n: u32) -> String {
    if (1..=10).contains(&n) {
        SECTION_ORDINALS[(n - 1) as usize].to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::AddressFeed;

    fn snapshot(roads: &[(&str, &str)], villages: &[(&str, &str)]) -> GazetteerSnapshot {
        let feed = AddressFeed {
            county: vec![(
                "100".to_string(),
                "臺北市中正區".to_string(),
                "Zhongzheng Dist., Taipei City".to_string(),
            )],
            villages: villages
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            roads: roads
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        };
        GazetteerSnapshot::from_feed(feed).expect("fixture snapshot")
    }

    #[test]
    fn resolve_should_prefer_exact_compound_over_bare_lookup() {
        let snapshot = snapshot(
            &[("中山路一段", "Sec. 1, Zhongshan Rd."), ("中山", "Chungshan")],
            &[],
        );
        let resolved = resolve_road_name(&snapshot, "中山", Some(RoadType::Road), Some(1));
        assert_eq!(resolved.name, "Zhongshan");
        assert_eq!(resolved.section_override, Some(1));
    }

    #[test]
    fn resolve_should_split_embedded_section_from_translation() {
        let snapshot = snapshot(&[("重慶南路一段", "Sec. 1, Chongqing S. Rd.")], &[]);
        let resolved = resolve_road_name(&snapshot, "重慶南", Some(RoadType::Road), Some(1));
        assert_eq!(resolved.name, "Chongqing S.");
        assert_eq!(resolved.section_override, Some(1));
    }

    #[test]
    fn resolve_should_fall_back_to_traditional_tai_spelling() {
        let snapshot = snapshot(&[("臺灣大道", "Taiwan Blvd.")], &[]);
        let resolved = resolve_road_name(&snapshot, "台灣", Some(RoadType::Boulevard), None);
        assert_eq!(resolved.name, "Taiwan");
    }

    #[test]
    fn resolve_should_join_village_and_translated_remainder() {
        let snapshot = snapshot(&[("漁人", "Yuren")], &[("椰油村", "Yeyou Village")]);
        let resolved = resolve_road_name(&snapshot, "椰油村漁人部落", None, None);
        assert_eq!(resolved.name, "Yuren, Yeyou Village");
    }

    #[test]
    fn resolve_should_return_village_alone_when_no_remainder() {
        let snapshot = snapshot(&[], &[("椰油村", "Yeyou Village")]);
        let resolved = resolve_road_name(&snapshot, "椰油村", None, None);
        assert_eq!(resolved.name, "Yeyou Village");
    }

    #[test]
    fn resolve_should_append_direction_only_when_base_translates() {
        let snapshot = snapshot(&[("羅斯福", "Roosevelt")], &[]);
        let resolved = resolve_road_name(&snapshot, "羅斯福南", None, None);
        assert_eq!(resolved.name, "Roosevelt S.");

        // 基础名译不出来时保留原文，不追加方位缩写
        let resolved = resolve_road_name(&snapshot, "幸福南", None, None);
        assert_eq!(resolved.name, "幸福南");
    }

    #[test]
    fn resolve_should_strip_hamlet_suffix_before_lookup() {
        let snapshot = snapshot(&[("大武", "Dawu")], &[]);
        let resolved = resolve_road_name(&snapshot, "大武部落", None, None);
        assert_eq!(resolved.name, "Dawu");
    }

    #[test]
    fn resolve_should_pass_through_unknown_fragment() {
        let snapshot = snapshot(&[], &[]);
        let resolved = resolve_road_name(&snapshot, "莫名", Some(RoadType::Road), None);
        assert_eq!(resolved.name, "莫名");
        assert_eq!(resolved.section_override, None);
    }
}
