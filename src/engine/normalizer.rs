//! 文本归一化
//!
//! 在匹配之前将异体字折叠为单一形式，保证地名数据与用户输入
//! 使用同一套匹配键。纯函数，无失败路径。

use unicode_normalization::UnicodeNormalization;

/// 异体字折叠表
///
/// 臺/台 为历史书写差异；縣/區 折叠到简体形式只为构造统一匹配键，
/// 输出文本并不依赖该方向。
const VARIANT_FOLDS: &[(char, char)] = &[('臺', '台'), ('縣', '县'), ('區', '区')];

/// 归一化文本：NFC + 异体字折叠 + 去首尾空白
///
/// 幂等：`normalize(normalize(x)) == normalize(x)`
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfc()
        .map(|ch| {
            VARIANT_FOLDS
                .iter()
                .find(|(from, _)| *from == ch)
                .map(|(_, to)| *to)
                .unwrap_or(ch)
        })
        .collect();

    folded.trim().to_string()
}
