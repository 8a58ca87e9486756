//! 地址装配
//!
//! 按台湾邮政惯例的固定顺序拼装英文地址：
//! 室 → 楼 → 號 → 弄 → 巷 → 段 → 路名+类型，后接行政区英文名，
//! 邮递区号以空格（而非逗号）并入最后一段，最后加国名后缀。

use crate::engine::types::{AddressComponents, RegionMatch};

const COUNTRY_SUFFIX: &str = "Taiwan (R.O.C.)";

/// 装配最终英文地址
///
/// 街道组件全空时输出仅含行政区与邮递区号。
pub fn assemble(components: &AddressComponents, region: &RegionMatch) -> String {
    let mut street: Vec<String> = Vec::new();

    for piece in [
        &components.room,
        &components.floor,
        &components.number,
        &components.alley,
        &components.lane,
    ] {
        if let Some(value) = piece {
            street.push(value.clone());
        }
    }

    if let Some(section) = components.section {
        street.push(format!("Sec. {section}"));
    }

    match (&components.road_name, components.road_type) {
        (Some(name), Some(road_type)) => street.push(format!("{name} {}", road_type.abbrev())),
        (Some(name), None) => street.push(name.clone()),
        _ => {}
    }

    let mut parts: Vec<String> = Vec::new();
    if !street.is_empty() {
        parts.push(street.join(", "));
    }
    parts.push(region.english_name.clone());

    if !region.postal_code.is_empty() {
        if let Some(last) = parts.last_mut() {
            last.push(' ');
            last.push_str(&region.postal_code);
        }
    }

    parts.push(COUNTRY_SUFFIX.to_string());
    parts.join(", ")
}
