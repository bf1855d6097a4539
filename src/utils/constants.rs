/// Calendar months treated as winter
pub const WINTER_MONTHS: [u32; 4] = [11, 12, 1, 2];

/// Pollutant row type selected from the hourly data files
pub const DEFAULT_POLLUTANT: &str = "AQI";

/// Data file discovery
pub const DEFAULT_DATA_DIRS: [&str; 3] = [
    "站点_20220101-20221231",
    "站点_20230101-20231231",
    "站点_20240101-20241231",
];
pub const DEFAULT_FILE_PREFIX: &str = "china_sites_";
pub const DEFAULT_FILE_EXTENSION: &str = "csv";
pub const DEFAULT_STATION_LIST: &str = "站点列表-2022.02.13起.csv";

/// Output defaults
pub const DEFAULT_RANKING_OUTPUT: &str = "winter_aqi_ranking.csv";
pub const DEFAULT_MAP_OUTPUT: &str = "winter_air_quality_map.html";
pub const DEFAULT_TOP_N: usize = 10;

/// Hourly data file layout: date, hour, type, then one column per station
pub const DATE_COLUMN: usize = 0;
pub const HOUR_COLUMN: usize = 1;
pub const TYPE_COLUMN: usize = 2;
pub const FIRST_STATION_COLUMN: usize = 3;

/// Station list headers
pub const STATION_CODE_HEADER: &str = "监测点编码";
pub const STATION_NAME_HEADER: &str = "监测点名称";
pub const STATION_CITY_HEADER: &str = "城市";
pub const STATION_LON_HEADER: &str = "经度";
pub const STATION_LAT_HEADER: &str = "纬度";
pub const STATION_REFERENCE_HEADER: &str = "对照点";

/// City assigned to stations without one
pub const UNKNOWN_CITY: &str = "未知";

/// Reference-site markers, compared case-insensitively
pub const REFERENCE_SITE_MARKERS: [&str; 5] = ["y", "yes", "是", "1", "true"];

/// Ranking CSV headers; the value column is named per run
pub const RANK_HEADER: &str = "名次";
pub const CITY_HEADER: &str = "城市";

/// Map colors
pub const UNIFORM_COLOR: &str = "#00ff00";

/// Map view
pub const MAP_CENTER: (f64, f64) = (35.0, 105.0);
pub const MAP_ZOOM: u8 = 4;
