//! 行政区匹配
//!
//! 行政区名并非前缀无歧义（短的区名可能是更长「市+区」复合名的子串），
//! 因此对每个条目评估四种策略，取匹配长度严格最长的候选。

use crate::engine::normalizer::normalize;
use crate::engine::types::RegionMatch;
use crate::gazetteer::RegionEntry;

/// 行政区后缀字符（归一化后形态）
const ADMIN_SUFFIXES: &[char] = &['区', '市', '县', '鄉', '鎮', '村', '里'];

/// 候选匹配：长度 + 需要从地址中剔除的子串
struct Candidate<'a> {
    entry: &'a RegionEntry,
    match_length: usize,
    strip_parts: Vec<String>,
}

/// 在地址中寻找最佳行政区匹配，返回匹配结果与剔除行政区后的残串
///
/// 策略（按条目逐一评估，长度严格大于当前最优才替换，保证并列时先到者胜）：
/// 1. 完整包含归一化名称
/// 2. 去掉行政后缀后包含（剩余长度需大于 2 字）
/// 3. 「市」级复合名拆分：市名与区名分别出现（容忍乱序/插字）
/// 4. 仅出现区名（救回省略市名的地址）
pub fn match_region(address: &str, regions: &[RegionEntry]) -> Option<(RegionMatch, String)> {
    let normalized = normalize(address);
    if normalized.is_empty() {
        return None;
    }

    let mut best: Option<Candidate> = None;

    for entry in regions {
        let key = entry.normalized_key.as_str();
        let key_len = key.chars().count();

        // 策略 1：完整包含
        if normalized.contains(key) {
            offer(&mut best, entry, key_len, vec![key.to_string()]);
        }

        // 策略 2：去掉行政后缀再包含
        if let Some(stripped) = strip_admin_suffix(key) {
            let stripped_len = stripped.chars().count();
            if stripped_len > 2 && normalized.contains(stripped) {
                offer(&mut best, entry, stripped_len, vec![stripped.to_string()]);
            }
        }

        // 策略 3/4：市级复合名拆分
        if let Some((city, district)) = split_at_city_marker(key) {
            if !district.is_empty() && normalized.contains(district) {
                let city_marked = format!("{city}市");
                if normalized.contains(city_marked.as_str()) {
                    // 策略 3：市名与区名都出现，按完整复合名长度计
                    offer(
                        &mut best,
                        entry,
                        key_len,
                        vec![city_marked, district.to_string()],
                    );
                }
                // 策略 4：仅区名出现
                offer(
                    &mut best,
                    entry,
                    district.chars().count(),
                    vec![district.to_string()],
                );
            }
        }
    }

    let candidate = best?;
    let mut residual = normalized;
    for part in &candidate.strip_parts {
        residual = residual.replacen(part.as_str(), "", 1);
    }

    let region = RegionMatch {
        postal_code: candidate.entry.postal_code.clone(),
        chinese_name: candidate.entry.chinese_name.clone(),
        english_name: candidate.entry.english_name.clone(),
        match_length: candidate.match_length,
    };
    Some((region, residual.trim().to_string()))
}

fn offer<'a>(
    best: &mut Option<Candidate<'a>>,
    entry: &'a RegionEntry,
    match_length: usize,
    strip_parts: Vec<String>,
) {
    let current = best.as_ref().map(|c| c.match_length).unwrap_or(0);
    if match_length > current {
        *best = Some(Candidate {
            entry,
            match_length,
            strip_parts,
        });
    }
}

fn strip_admin_suffix(key: &str) -> Option<&str> {
    let last = key.chars().last()?;
    if ADMIN_SUFFIXES.contains(&last) {
        Some(&key[..key.len() - last.len_utf8()])
    } else {
        None
    }
}

/// 拆分恰好含一个「市」的复合名（如 臺北市中正區 → 臺北 / 中正區）
fn split_at_city_marker(key: &str) -> Option<(&str, &str)> {
    if key.matches('市').count() != 1 {
        return None;
    }
    let idx = key.find('市')?;
    Some((&key[..idx], &key[idx + '市'.len_utf8()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(postal: &str, chinese: &str, english: &str) -> RegionEntry {
        RegionEntry {
            postal_code: postal.to_string(),
            chinese_name: chinese.to_string(),
            english_name: english.to_string(),
            normalized_key: normalize(chinese),
        }
    }

    #[test]
    fn match_region_should_find_direct_containment() {
        let regions = vec![entry("100", "臺北市中正區", "Zhongzheng Dist., Taipei City")];
        let (matched, residual) =
            match_region("台北市中正區重慶南路一段122號", &regions).expect("match");
        assert_eq!(matched.postal_code, "100");
        assert_eq!(residual, "重慶南路一段122號");
    }

    #[test]
    fn match_region_should_prefer_strictly_longer_match_regardless_of_order() {
        let short = entry("999", "中正區", "Zhongzheng Dist.");
        let long = entry("100", "臺北市中正區", "Zhongzheng Dist., Taipei City");
        let address = "台北市中正區重慶南路一段122號";

        let (a, _) = match_region(address, &[short.clone(), long.clone()]).expect("match");
        let (b, _) = match_region(address, &[long, short]).expect("match");
        assert_eq!(a.postal_code, "100");
        assert_eq!(b.postal_code, "100");
        assert_eq!(a.match_length, 6);
    }

    #[test]
    fn match_region_should_rescue_district_only_address() {
        let regions = vec![entry("100", "臺北市中正區", "Zhongzheng Dist., Taipei City")];
        let (matched, residual) = match_region("中正區重慶南路一段", &regions).expect("match");
        assert_eq!(matched.postal_code, "100");
        assert_eq!(matched.match_length, 3);
        assert_eq!(residual, "重慶南路一段");
    }

    #[test]
    fn match_region_should_tolerate_separated_city_and_district() {
        let regions = vec![entry("110", "臺北市信義區", "Xinyi Dist., Taipei City")];
        // 市名与区名被插字分隔，策略 3 按完整复合名长度计
        let (matched, residual) = match_region("台北市的信義區市府路1號", &regions).expect("match");
        assert_eq!(matched.match_length, 6);
        assert!(!residual.contains("信義區"));
        assert!(!residual.contains("台北市"));
    }

    #[test]
    fn match_region_should_match_with_stripped_admin_suffix() {
        let regions = vec![entry("320", "桃園市中壢區", "Zhongli Dist., Taoyuan City")];
        let (matched, _) = match_region("桃園市中壢中山路100號", &regions).expect("match");
        assert_eq!(matched.postal_code, "320");
        assert_eq!(matched.match_length, 5);
    }

    #[test]
    fn match_region_should_return_none_when_nothing_matches() {
        let regions = vec![entry("100", "臺北市中正區", "Zhongzheng Dist., Taipei City")];
        assert!(match_region("invalid address 123", &regions).is_none());
        assert!(match_region("", &regions).is_none());
    }
}
