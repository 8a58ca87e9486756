//! 街道地址分词
//!
//! 对残串做有序破坏性抽取：每条规则命中后立即从残串中删除匹配子串，
//! 已被消费的数字不会再被后续规则误读（室号不会被当成楼层或段号）。
//! 抽取顺序以规则表显式表达，而非隐含在语句顺序里。

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::types::{AddressComponents, RoadType};

/// 抽取目标字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Room,
    Floor,
    Number,
    Alley,
    Lane,
    Section,
}

/// 抽取规则：匹配模式 + 取值捕获组 + 目标字段
struct ExtractRule {
    field: Field,
    pattern: Regex,
    group: usize,
}

lazy_static! {
    /// 抽取顺序即语义：室 → 楼 → 號 → 弄 → 巷 → 段
    static ref EXTRACT_RULES: Vec<ExtractRule> = vec![
        ExtractRule {
            field: Field::Room,
            // 「8室」与「之8室」都整段消费
            pattern: Regex::new(r"(之)?(\d+)室").unwrap(),
            group: 2,
        },
        ExtractRule {
            field: Field::Floor,
            pattern: Regex::new(r"(\d+)樓").unwrap(),
            group: 1,
        },
        ExtractRule {
            field: Field::Number,
            pattern: Regex::new(r"(\d+)號").unwrap(),
            group: 1,
        },
        ExtractRule {
            field: Field::Alley,
            pattern: Regex::new(r"(\d+)弄").unwrap(),
            group: 1,
        },
        ExtractRule {
            field: Field::Lane,
            pattern: Regex::new(r"(\d+)巷").unwrap(),
            group: 1,
        },
        ExtractRule {
            field: Field::Section,
            pattern: Regex::new(r"([一二三四五六七八九十]|\d+)段").unwrap(),
            group: 1,
        },
    ];

    /// 尾部道路类型后缀（数字巷/弄已在前序规则被消费，
    /// 此处的巷/弄只会是路名本身的一部分）
    static ref RE_ROAD_TYPE: Regex = Regex::new(r"^(.+?)(路|街|巷|弄|大道)$").unwrap();
}

/// 将残串分解为街道组件包
///
/// 没有任何可识别组件的残串（纯行政区地址）返回全空组件包，属合法结果。
pub fn tokenize(residual: &str) -> AddressComponents {
    let mut remaining = residual.trim().to_string();
    let mut components = AddressComponents::default();

    for rule in EXTRACT_RULES.iter() {
        let Some(caps) = rule.pattern.captures(&remaining) else {
            continue;
        };
        let whole = caps.get(0).expect("group 0 always present");
        let value = caps
            .get(rule.group)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let range = whole.range();
        remaining.replace_range(range, "");
        assign(&mut components, rule.field, &value);
    }

    let remaining = remaining.trim();
    if remaining.is_empty() {
        return components;
    }

    if let Some(caps) = RE_ROAD_TYPE.captures(remaining) {
        components.road_name = Some(caps[1].to_string());
        components.road_type = RoadType::from_chinese(&caps[2]);
    } else {
        // 无道路类型后缀时整个残串都作为待翻译路名
        components.road_name = Some(remaining.to_string());
    }

    components
}

fn assign(components: &mut AddressComponents, field: Field, value: &str) {
    match field {
        Field::Room => components.room = Some(format!("Rm. {value}")),
        Field::Floor => components.floor = Some(format!("{value}F.")),
        Field::Number => components.number = Some(format!("No. {value}")),
        Field::Alley => components.alley = Some(format!("Aly. {value}")),
        Field::Lane => components.lane = Some(format!("Ln. {value}")),
        Field::Section => components.section = Some(section_number(value)),
    }
}

/// 段号：汉字序数（一到十）或阿拉伯数字；
/// 超出 u32 范围时取饱和值，已消费的段号仍出现在输出中
fn section_number(raw: &str) -> u32 {
    const ORDINALS: &[(&str, u32)] = &[
        ("一", 1),
        ("二", 2),
        ("三", 3),
        ("四", 4),
        ("五", 5),
        ("六", 6),
        ("七", 7),
        ("八", 8),
        ("九", 9),
        ("十", 10),
    ];
    if let Some((_, n)) = ORDINALS.iter().find(|(zh, _)| *zh == raw) {
        return *n;
    }
    raw.parse().unwrap_or(u32::MAX)
}
