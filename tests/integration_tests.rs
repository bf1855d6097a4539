use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use winter_aqi::processors::Pipeline;
use winter_aqi::writers::{MapWriter, RankingWriter};
use winter_aqi::{PipelineConfig, ProcessingError};

const STATION_LIST: &str = "\
监测点编码,监测点名称,城市,经度,纬度,对照点
1001A,站点一,北京,116.0,40.0,N
1002A,站点二,北京,117.0,41.0,N
1003A,站点三,北京,118.0,42.0,N
2001A,站点四,上海,121.0,31.0,N
3001A,站点五,广州,113.0,23.0,Y
4001A,站点六,拉萨,91.0,29.0,N
";

// Station 1002A never reports; 4001A is not a column in any file; 9999A has no metadata.
const DEC_FILE: &str = "\
date,hour,type,1001A,1002A,1003A,2001A,3001A,9999A
20221201,0,AQI,10,,20,40,30,500
20221201,0,PM2.5,1,1,1,1,1,1
20221201,1,AQI,,,,,,
20221201,2,AQI,16,,26,40,30,500
";

const MAR_FILE: &str = "\
date,hour,type,1001A,1002A,1003A,2001A,3001A
20230301,0,AQI,900,900,900,900,900
";

const JAN_FILE: &str = "\
date,hour,type,2001A,1001A,1003A
20230101,0,AQI,40,,bad
";

struct Fixture {
    _dir: TempDir,
    config: PipelineConfig,
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture() -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let root = dir.path();

    write(&root.join("stations.csv"), STATION_LIST);
    write(&root.join("2022").join("china_sites_20221201.csv"), DEC_FILE);
    write(&root.join("2023").join("china_sites_20230301.csv"), MAR_FILE);
    write(&root.join("2023").join("china_sites_20230101.csv"), JAN_FILE);
    write(&root.join("2023").join("china_cities_20230101.csv"), DEC_FILE);

    let config = PipelineConfig::default()
        .with_data_dirs(vec![root.join("2022"), root.join("2023"), root.join("2024")])
        .with_station_list(root.join("stations.csv"))
        .with_output_ranking(root.join("out").join("ranking.csv"))
        .with_output_map(root.join("out").join("map.html"));

    Fixture { _dir: dir, config }
}

#[test]
fn test_full_pipeline_ranking() {
    let fixture = fixture();
    let outcome = Pipeline::new(fixture.config.clone())
        .with_silent(true)
        .run()
        .unwrap();

    // Three winter AQI rows in December, one in January; March is out of season
    assert_eq!(outcome.hours, 4);
    assert_eq!(outcome.files_read, 3);

    let analysis = &outcome.analysis;
    let codes: Vec<&str> = analysis
        .station_statistics
        .iter()
        .map(|s| s.code.as_str())
        .collect();
    assert_eq!(codes, vec!["1001A", "1002A", "1003A", "2001A", "3001A"]);

    // 1001A: 10, 13, 16, 16 (trailing gap held) -> 13.75
    // 1003A: 20, 23, 26, 26 -> 23.75
    // 2001A: 40 everywhere
    // 3001A: 30, 30, 30, then missing in January (no column) held at 30
    let mean = |code: &str| {
        analysis
            .station_statistics
            .iter()
            .find(|s| s.code == code)
            .and_then(|s| s.mean)
    };
    assert_eq!(mean("1001A"), Some(13.75));
    assert_eq!(mean("1002A"), None);
    assert_eq!(mean("1003A"), Some(23.75));
    assert_eq!(mean("2001A"), Some(40.0));
    assert_eq!(mean("3001A"), Some(30.0));

    let ranking: Vec<(usize, &str, f64)> = analysis
        .ranking
        .iter()
        .map(|e| (e.rank, e.city.as_str(), e.value))
        .collect();
    assert_eq!(
        ranking,
        vec![(1, "北京", 18.75), (2, "广州", 30.0), (3, "上海", 40.0)]
    );

    // 拉萨 has metadata but no observed station
    assert!(analysis.city_statistics.iter().all(|c| c.city != "拉萨"));
    assert!(!analysis.coordinates.contains_key("拉萨"));

    // 北京 is placed at the mean of all three stations, 1002A included
    let beijing = analysis.coordinates["北京"];
    assert_eq!(beijing.latitude, 41.0);
    assert_eq!(beijing.longitude, 117.0);
}

#[test]
fn test_exclude_reference_sites() {
    let fixture = fixture();
    let config = fixture.config.clone().with_exclude_reference_sites(true);
    let outcome = Pipeline::new(config).with_silent(true).run().unwrap();

    let cities: Vec<&str> = outcome
        .analysis
        .ranking
        .iter()
        .map(|e| e.city.as_str())
        .collect();
    assert_eq!(cities, vec!["北京", "上海"]);
}

#[test]
fn test_outputs_are_byte_identical_across_runs() {
    let fixture = fixture();

    let render = |ranking_path: PathBuf, map_path: PathBuf| {
        let outcome = Pipeline::new(fixture.config.clone())
            .with_silent(true)
            .run()
            .unwrap();
        RankingWriter::new()
            .write_ranking(&outcome.analysis.ranking, &ranking_path)
            .unwrap();
        MapWriter::new()
            .write_map(
                &outcome.analysis.ranking,
                &outcome.analysis.coordinates,
                &map_path,
            )
            .unwrap();
        (
            fs::read(&ranking_path).unwrap(),
            fs::read(&map_path).unwrap(),
        )
    };

    let out = fixture.config.output_ranking.parent().unwrap().to_path_buf();
    let first = render(out.join("a.csv"), out.join("a.html"));
    let second = render(out.join("b.csv"), out.join("b.html"));

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first.0).unwrap(),
        "名次,城市,冬季平均AQI\n1,北京,18.75\n2,广州,30.00\n3,上海,40.00\n"
    );
}

#[test]
fn test_no_data_files_is_fatal() {
    let fixture = fixture();
    let config = fixture
        .config
        .clone()
        .with_data_dirs(vec![PathBuf::from("definitely/not/here")]);

    let result = Pipeline::new(config).with_silent(true).run();
    assert!(matches!(result, Err(ProcessingError::NoDataFiles { .. })));
}

#[test]
fn test_other_pollutant() {
    let fixture = fixture();
    let config = fixture.config.clone().with_pollutant("PM2.5");
    let outcome = Pipeline::new(config).with_silent(true).run().unwrap();

    assert_eq!(outcome.hours, 1);
    // 1002A reports in the PM2.5 row, so every Beijing station is defined
    assert_eq!(outcome.analysis.undefined_stations().count(), 0);
    assert!(outcome.analysis.ranking.iter().all(|e| e.value == 1.0));
}

#[test]
fn test_outputs_are_labelled_with_pollutant_and_months() {
    let fixture = fixture();
    let root = fixture.config.station_list.parent().unwrap().to_path_buf();
    write(
        &root.join("2023").join("china_sites_20230701.csv"),
        "date,hour,type,1001A,1002A,1003A\n20230701,0,PM2.5,12,,\n20230701,0,AQI,99,99,99\n",
    );

    let config = fixture
        .config
        .clone()
        .with_pollutant("PM2.5")
        .with_winter_months(vec![6, 7, 8]);
    let pipeline = Pipeline::new(config.clone()).with_silent(true);
    let outcome = pipeline.run().unwrap();
    assert_eq!(outcome.hours, 1);

    let markers = pipeline.write_outputs(&outcome).unwrap();
    assert_eq!(markers, 1);

    let csv = fs::read_to_string(&config.output_ranking).unwrap();
    assert_eq!(csv, "名次,城市,6/7/8月平均PM2.5\n1,北京,12.00\n");

    let html = fs::read_to_string(&config.output_map).unwrap();
    assert!(html.contains("<h2>6/7/8 月 PM2.5 最佳城市</h2>"));
    assert!(html.contains(r#"const valueLabel = "6/7/8月平均PM2.5";"#));
    assert!(html.contains("${valueLabel}: ${item.aqi}"));
    assert!(!html.contains("冬季"));
    assert!(!html.contains("AQI"));
}

#[test]
fn test_default_run_keeps_winter_labels() {
    let fixture = fixture();
    let pipeline = Pipeline::new(fixture.config.clone()).with_silent(true);
    let outcome = pipeline.run().unwrap();
    pipeline.write_outputs(&outcome).unwrap();

    let csv = fs::read_to_string(&fixture.config.output_ranking).unwrap();
    assert!(csv.starts_with("名次,城市,冬季平均AQI\n"));

    let html = fs::read_to_string(&fixture.config.output_map).unwrap();
    assert!(html.contains("<h2>冬季（11/12/1/2 月）AQI 最佳城市</h2>"));
}
