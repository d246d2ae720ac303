//! taipei metro station data and fare estimation tables.
//! lines: BR (Wenhu), R (Tamsui-Xinyi), G (Songshan-Xindian),
//! O (Zhonghe-Xinlu), BL (Bannan).
//!
//! no authoritative fare matrix is bundled for this network; fares come
//! from the common-routes shortcut table below or, failing that, a
//! distance-band estimate over station index differences.

use crate::station::Station;

pub const STATIONS: &[Station] = &[
    // Wenhu line (BR)
    Station::new("BR01", "動物園", "Taipei Zoo", "BR"),
    Station::new("BR02", "木柵", "Muzha", "BR"),
    Station::new("BR03", "萬芳社區", "Wanfang Community", "BR"),
    Station::new("BR04", "萬芳醫院", "Wanfang Hospital", "BR"),
    Station::new("BR05", "辛亥", "Xinhai", "BR"),
    Station::new("BR06", "麟光", "Linguang", "BR"),
    Station::new("BR07", "六張犁", "Liuzhangli", "BR"),
    Station::new("BR08", "科技大樓", "Technology Building", "BR"),
    Station::with_transfers("BR09", "大安", "Daan", "BR", &["R"]),
    Station::with_transfers("BR10", "忠孝復興", "Zhongxiao Fuxing", "BR", &["BL"]),
    Station::with_transfers("BR11", "南京復興", "Nanjing Fuxing", "BR", &["G"]),
    Station::new("BR12", "中山國中", "Zhongshan Junior High School", "BR"),
    Station::new("BR13", "松山機場", "Songshan Airport", "BR"),
    Station::new("BR14", "大直", "Dazhi", "BR"),
    Station::new("BR15", "劍南路", "Jiannan Road", "BR"),
    Station::new("BR16", "西湖", "Xihu", "BR"),
    Station::new("BR17", "港墘", "Gangqian", "BR"),
    Station::new("BR18", "文德", "Wende", "BR"),
    Station::new("BR19", "內湖", "Neihu", "BR"),
    Station::new("BR20", "大湖公園", "Dahu Park", "BR"),
    Station::new("BR21", "葫洲", "Huzhou", "BR"),
    Station::new("BR22", "東湖", "Donghu", "BR"),
    Station::new("BR23", "南港軟體園區", "Nangang Software Park", "BR"),
    Station::with_transfers("BR24", "南港展覽館", "Taipei Nangang Exhibition Center", "BR", &["BL"]),
    // Tamsui-Xinyi line (R)
    Station::new("R02", "淡水", "Tamsui", "R"),
    Station::new("R03", "紅樹林", "Hongshulin", "R"),
    Station::new("R04", "竹圍", "Zhuwei", "R"),
    Station::new("R05", "關渡", "Guandu", "R"),
    Station::new("R06", "忠義", "Zhongyi", "R"),
    Station::new("R07", "復興崗", "Fuxinggang", "R"),
    Station::new("R08", "北投", "Beitou", "R"),
    Station::new("R09", "新北投", "Xinbeitou", "R"),
    Station::new("R10", "奇岩", "Qiyan", "R"),
    Station::new("R11", "唭哩岸", "Qilian", "R"),
    Station::new("R12", "石牌", "Shipai", "R"),
    Station::new("R13", "明德", "Mingde", "R"),
    Station::new("R14", "芝山", "Zhishan", "R"),
    Station::new("R15", "士林", "Shilin", "R"),
    Station::new("R16", "劍潭", "Jiantan", "R"),
    Station::new("R17", "圓山", "Yuanshan", "R"),
    Station::with_transfers("R18", "民權西路", "Minquan W. Rd.", "R", &["O"]),
    Station::new("R19", "雙連", "Shuanglian", "R"),
    Station::with_transfers("R20", "中山", "Zhongshan", "R", &["G"]),
    Station::with_transfers("R21", "台北車站", "Taipei Main Station", "R", &["BL"]),
    Station::new("R22", "台大醫院", "NTU Hospital", "R"),
    Station::with_transfers("R23", "中正紀念堂", "Chiang Kai-Shek Memorial Hall", "R", &["G"]),
    Station::with_transfers("R24", "東門", "Dongmen", "R", &["O"]),
    Station::new("R25", "大安森林公園", "Daan Park", "R"),
    Station::with_transfers("R26", "大安", "Daan", "R", &["BR"]),
    Station::new("R27", "信義安和", "Xinyi Anhe", "R"),
    Station::new("R28", "台北101/世貿", "Taipei 101/World Trade Center", "R"),
    Station::new("R29", "象山", "Xiangshan", "R"),
    // Songshan-Xindian line (G)
    Station::new("G01", "新店", "Xindian", "G"),
    Station::new("G02", "新店區公所", "Xindian District Office", "G"),
    Station::new("G03", "七張", "Qizhang", "G"),
    Station::new("G03A", "小碧潭", "Xiaobitan", "G"),
    Station::new("G04", "大坪林", "Dapinglin", "G"),
    Station::new("G05", "景美", "Jingmei", "G"),
    Station::new("G06", "萬隆", "Wanlong", "G"),
    Station::new("G07", "公館", "Gongguan", "G"),
    Station::new("G08", "台電大樓", "Taipower Building", "G"),
    Station::with_transfers("G09", "古亭", "Guting", "G", &["O"]),
    Station::with_transfers("G10", "中正紀念堂", "Chiang Kai-Shek Memorial Hall", "G", &["R"]),
    Station::new("G11", "小南門", "Xiaonanmen", "G"),
    Station::with_transfers("G12", "西門", "Ximen", "G", &["BL"]),
    Station::new("G13", "北門", "Beimen", "G"),
    Station::with_transfers("G14", "中山", "Zhongshan", "G", &["R"]),
    Station::with_transfers("G15", "松江南京", "Songjiang Nanjing", "G", &["O"]),
    Station::with_transfers("G16", "南京復興", "Nanjing Fuxing", "G", &["BR"]),
    Station::new("G17", "台北小巨蛋", "Taipei Arena", "G"),
    Station::new("G18", "南京三民", "Nanjing Sanmin", "G"),
    Station::new("G19", "松山", "Songshan", "G"),
    // Zhonghe-Xinlu line (O)
    Station::new("O01", "南勢角", "Nanshijiao", "O"),
    Station::new("O02", "景安", "Jingan", "O"),
    Station::new("O03", "永安市場", "Yongan Market", "O"),
    Station::new("O04", "頂溪", "Dingxi", "O"),
    Station::with_transfers("O05", "古亭", "Guting", "O", &["G"]),
    Station::with_transfers("O06", "東門", "Dongmen", "O", &["R"]),
    Station::with_transfers("O07", "忠孝新生", "Zhongxiao Xinsheng", "O", &["BL"]),
    Station::with_transfers("O08", "松江南京", "Songjiang Nanjing", "O", &["G"]),
    Station::new("O09", "行天宮", "Xingtian Temple", "O"),
    Station::new("O10", "中山國小", "Zhongshan Elementary School", "O"),
    Station::with_transfers("O11", "民權西路", "Minquan W. Rd.", "O", &["R"]),
    Station::new("O12", "大橋頭", "Daqiaotou", "O"),
    Station::new("O13", "台北橋", "Taipei Bridge", "O"),
    Station::new("O14", "菜寮", "Cailiao", "O"),
    Station::new("O15", "三重", "Sanchong", "O"),
    Station::new("O16", "先嗇宮", "Xianse Temple", "O"),
    Station::new("O17", "頭前庄", "Touqianzhuang", "O"),
    Station::new("O18", "新莊", "Xinzhuang", "O"),
    Station::new("O19", "輔大", "Fu Jen University", "O"),
    Station::new("O20", "丹鳳", "Danfeng", "O"),
    Station::new("O21", "迴龍", "Huilong", "O"),
    Station::new("O50", "蘆洲", "Luzhou", "O"),
    Station::new("O51", "三民高中", "Sanmin Senior High School", "O"),
    Station::new("O52", "徐匯中學", "St. Ignatius High School", "O"),
    Station::new("O53", "三和國中", "Sanhe Junior High School", "O"),
    Station::new("O54", "三重國小", "Sanchong Elementary School", "O"),
    // Bannan line (BL)
    Station::new("BL01", "頂埔", "Dingpu", "BL"),
    Station::new("BL02", "永寧", "Yongning", "BL"),
    Station::new("BL03", "土城", "Tucheng", "BL"),
    Station::new("BL04", "海山", "Haishan", "BL"),
    Station::new("BL05", "亞東醫院", "Far Eastern Hospital", "BL"),
    Station::new("BL06", "府中", "Fuzhong", "BL"),
    Station::new("BL07", "板橋", "Banqiao", "BL"),
    Station::new("BL08", "新埔", "Xinpu", "BL"),
    Station::new("BL09", "江子翠", "Jiangzicui", "BL"),
    Station::new("BL10", "龍山寺", "Longshan Temple", "BL"),
    Station::with_transfers("BL11", "西門", "Ximen", "BL", &["G"]),
    Station::with_transfers("BL12", "台北車站", "Taipei Main Station", "BL", &["R"]),
    Station::new("BL13", "善導寺", "Shandao Temple", "BL"),
    Station::with_transfers("BL14", "忠孝新生", "Zhongxiao Xinsheng", "BL", &["O"]),
    Station::with_transfers("BL15", "忠孝復興", "Zhongxiao Fuxing", "BL", &["BR"]),
    Station::new("BL16", "忠孝敦化", "Zhongxiao Dunhua", "BL"),
    Station::new("BL17", "國父紀念館", "Sun Yat-Sen Memorial Hall", "BL"),
    Station::new("BL18", "市政府", "Taipei City Hall", "BL"),
    Station::new("BL19", "永春", "Yongchun", "BL"),
    Station::new("BL20", "後山埤", "Houshanpi", "BL"),
    Station::new("BL21", "昆陽", "Kunyang", "BL"),
    Station::new("BL22", "南港", "Nangang", "BL"),
    Station::with_transfers("BL23", "南港展覽館", "Taipei Nangang Exhibition Center", "BL", &["BR"]),
];

/// (max adjusted station-count, fare) breakpoints, monotonic in both
/// columns. anything past the last breakpoint costs `MAX_FARE`.
pub const FARE_BANDS: &[(u32, u32)] = &[
    (2, 20),
    (4, 25),
    (6, 30),
    (8, 35),
    (10, 40),
    (12, 45),
    (15, 50),
    (18, 55),
    (22, 60),
];

pub const MAX_FARE: u32 = 65;

/// hand-curated fares for frequent routes, checked before the distance
/// estimate. keyed one direction, matched in both.
pub const COMMON_ROUTES: &[(&str, &str, u32)] = &[
    ("台北車站", "西門", 20),
    ("台北車站", "忠孝復興", 20),
    ("台北車站", "市政府", 25),
    ("台北車站", "南港展覽館", 30),
    ("台北車站", "板橋", 25),
    ("台北車站", "淡水", 50),
    ("台北車站", "動物園", 35),
    ("西門", "龍山寺", 20),
    ("忠孝復興", "南京復興", 20),
    ("忠孝復興", "台北101/世貿", 25),
];
