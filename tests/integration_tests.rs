use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use weather_summary::analyzers::ColumnStatistics;
use weather_summary::processors::BatchProcessor;
use weather_summary::readers::CsvReader;
use weather_summary::settings::Settings;
use weather_summary::{
    calculate_mean, convert_date, fahrenheit_to_celsius, find_max, find_min,
    generate_daily_summary, generate_summary, WeatherError,
};

const FIVE_DAY_TABLE: &str = "\
date,min,max
2021-07-02T07:00:00+08:00,49,67

2021-07-03T07:00:00+08:00,57,68
2021-07-04T07:00:00+08:00,56,62
2021-07-05T07:00:00+08:00,55,61
2021-07-06T07:00:00+08:00,53,62
";

fn write_table(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("Failed to write test table");
    path
}

#[test]
fn test_five_day_overview_from_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_table(&dir, "five_days.csv", FIVE_DAY_TABLE);

    let series = CsvReader::new().read_series(&path).unwrap();
    let expected = "5 Day Overview\n  \
        The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.\n  \
        The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.\n  \
        The average low this week is 12.2°C.\n  \
        The average high this week is 17.8°C.\n";

    assert_eq!(generate_summary(&series).unwrap(), expected);
}

#[test]
fn test_five_day_daily_summary_from_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_table(&dir, "five_days.csv", FIVE_DAY_TABLE);

    let series = CsvReader::new().read_series(&path).unwrap();
    let daily = generate_daily_summary(&series).unwrap();

    assert_eq!(daily.matches("---- ").count(), 5);
    assert!(daily.starts_with(
        "---- Friday 02 July 2021 ----\n  Minimum Temperature: 9.4°C\n  Maximum Temperature: 19.4°C\n\n"
    ));
    assert!(daily.ends_with(
        "---- Tuesday 06 July 2021 ----\n  Minimum Temperature: 11.7°C\n  Maximum Temperature: 16.7°C\n\n"
    ));
}

#[test]
fn test_overview_matches_column_utilities() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_table(&dir, "five_days.csv", FIVE_DAY_TABLE);
    let series = CsvReader::new().read_series(&path).unwrap();

    let lows: Vec<f64> = series.lows().into_iter().map(fahrenheit_to_celsius).collect();
    let highs: Vec<f64> = series.highs().into_iter().map(fahrenheit_to_celsius).collect();

    let overview = generate_summary(&series).unwrap();
    let coldest = find_min(&lows).unwrap().unwrap();
    let hottest = find_max(&highs).unwrap().unwrap();

    assert!(overview.contains(&format!("will be {:.1}°C", coldest.value)));
    assert!(overview.contains(&format!("will be {:.1}°C", hottest.value)));
    assert!(overview.contains(&format!(
        "average low this week is {:.1}°C",
        calculate_mean(&lows).unwrap()
    )));
    assert!(overview.contains(&format!(
        "average high this week is {:.1}°C",
        calculate_mean(&highs).unwrap()
    )));
}

#[test]
fn test_tie_break_rules_differ() {
    // The column finder reports the second occurrence of a repeated extreme,
    // while the overview keeps the first day that reached it.
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_table(
        &dir,
        "ties.csv",
        "date,min,max\n2021-07-05,50,70\n2021-07-06,50,70\n2021-07-07,52,66\n",
    );
    let reader = CsvReader::new();

    let lows = reader.read_column(&path, 1).unwrap();
    assert_eq!(find_min(&lows).unwrap().unwrap().index, 1);

    let overview = generate_summary(&reader.read_series(&path).unwrap()).unwrap();
    assert!(overview.contains("will occur on Monday 05 July 2021.\n  The highest"));
    assert!(overview.contains("21.1°C, and will occur on Monday 05 July 2021."));
}

#[test]
fn test_column_statistics_from_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_table(&dir, "five_days.csv", FIVE_DAY_TABLE);

    let column = CsvReader::new().read_column(&path, 2).unwrap();
    let stats = ColumnStatistics::from_values(&column).unwrap();

    assert_eq!(stats.count, 5);
    assert_eq!(stats.min.as_tuple(), (61.0, 3));
    assert_eq!(stats.max.as_tuple(), (68.0, 1));
    assert!((stats.mean - 64.0).abs() < 1e-9);
}

#[test]
fn test_header_only_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_table(&dir, "empty.csv", "date,min,max\n\n");
    let series = CsvReader::new().read_series(&path).unwrap();

    assert!(series.is_empty());
    assert_eq!(generate_daily_summary(&series).unwrap(), "");
    assert!(matches!(
        generate_summary(&series),
        Err(WeatherError::EmptyInput(_))
    ));
}

#[test]
fn test_non_numeric_temperature_in_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_table(&dir, "bad.csv", "date,min,max\n2021-07-05,mild,68\n");

    assert!(matches!(
        CsvReader::new().read_series(&path),
        Err(WeatherError::TypeMismatch { .. })
    ));
}

#[test]
fn test_batch_with_settings_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_table(&dir, "a.csv", "2021-07-05;59;68\n");
    write_table(&dir, "b.csv", "2021-07-06;57;65\n");
    let settings_path = write_table(
        &dir,
        "settings.toml",
        "delimiter = \";\"\nskip_header = false\nmax_workers = 2\n",
    );

    let settings = Settings::load(Some(settings_path.as_path())).unwrap();
    let reader = CsvReader::from_settings(&settings).unwrap();
    let summaries = BatchProcessor::new(settings.max_workers)
        .with_reader(reader)
        .process_directory(dir.path())
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert!(summaries[0]
        .overview
        .contains("lowest temperature will be 15.0°C, and will occur on Monday 05 July 2021"));
    assert!(summaries[1]
        .overview
        .contains("highest temperature will be 18.3°C, and will occur on Tuesday 06 July 2021"));
}

#[test]
fn test_convert_date_pinned_locale() {
    assert_eq!(
        convert_date("2021-07-06T07:00:00+07:00").unwrap(),
        "Tuesday 06 July 2021"
    );
}
