//! 引擎类型定义

/// 道路类型（路/街/巷/弄/大道）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadType {
    /// 路
    Road,
    /// 街
    Street,
    /// 巷（作为路名后缀，而非巷号）
    Lane,
    /// 弄（作为路名后缀，而非弄号）
    Alley,
    /// 大道
    Boulevard,
}

impl RoadType {
    /// 从中文后缀解析
    pub fn from_chinese(suffix: &str) -> Option<Self> {
        match suffix {
            "路" => Some(Self::Road),
            "街" => Some(Self::Street),
            "巷" => Some(Self::Lane),
            "弄" => Some(Self::Alley),
            "大道" => Some(Self::Boulevard),
            _ => None,
        }
    }

    /// 中文后缀
    pub fn chinese(&self) -> &'static str {
        match self {
            Self::Road => "路",
            Self::Street => "街",
            Self::Lane => "巷",
            Self::Alley => "弄",
            Self::Boulevard => "大道",
        }
    }

    /// 英文缩写
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Road => "Rd.",
            Self::Street => "St.",
            Self::Lane => "Ln.",
            Self::Alley => "Aly.",
            Self::Boulevard => "Blvd.",
        }
    }
}

/// 街道地址组件包（单次请求内的临时结构）
///
/// 由分词器破坏性抽取逐步填充，数字组件在抽取时即格式化为英文片段；
/// 路名与段号由解析器继续翻译，最后由装配器一次性消费。
#[derive(Debug, Clone, Default)]
pub struct AddressComponents {
    /// 室号（如 "Rm. 8"）
    pub room: Option<String>,
    /// 楼层（如 "3F."）
    pub floor: Option<String>,
    /// 门牌号（如 "No. 122"）
    pub number: Option<String>,
    /// 弄号（如 "Aly. 6"）
    pub alley: Option<String>,
    /// 巷号（如 "Ln. 36"）
    pub lane: Option<String>,
    /// 段号（1-10 或阿拉伯数字）
    pub section: Option<u32>,
    /// 路名（抽取后为中文，解析后为英文或原文回退）
    pub road_name: Option<String>,
    /// 道路类型
    pub road_type: Option<RoadType>,
}

impl AddressComponents {
    /// 是否没有任何街道组件（仅行政区的地址是合法输入）
    pub fn is_empty(&self) -> bool {
        self.room.is_none()
            && self.floor.is_none()
            && self.number.is_none()
            && self.alley.is_none()
            && self.lane.is_none()
            && self.section.is_none()
            && self.road_name.is_none()
            && self.road_type.is_none()
    }
}

/// 行政区匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMatch {
    /// 邮递区号
    pub postal_code: String,
    /// 中文名（原始，未归一化）
    pub chinese_name: String,
    /// 英文名（如 "Zhongzheng Dist., Taipei City"）
    pub english_name: String,
    /// 匹配长度（字符数，仅用于候选间择优）
    pub match_length: usize,
}
