use super::*;

fn fixture_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_sources").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn texts(m: &MonthEvents, day: u32) -> Vec<String> {
    m.for_day(day).iter().map(EventLabel::display).collect()
}

#[test]
fn category_table_filters_by_month_and_decorates() {
    let dir = fixture_dir("category_basic");
    let events = dir.join("events.csv");
    let emoji = dir.join("emoji.csv");
    std::fs::write(
        &events,
        "month,day,title,type\n\
         # comment line\n\
         2,15,Team Meeting,work\n\
         2,15,Dentist,health\n\
         3,1,Spring,season\n",
    )
    .unwrap();
    std::fs::write(&emoji, "type,emoji\nWork,📅\n").unwrap();

    let src = CategoryTableSource::new(&events, Some(emoji));
    let feb = src.load(2024, 2).unwrap();
    assert_eq!(texts(&feb, 15), vec!["📅 Team Meeting", "Dentist"]);
    assert_eq!(feb.len(), 2);

    let mar = src.load(2024, 3).unwrap();
    assert_eq!(texts(&mar, 1), vec!["Spring"]);
}

#[test]
fn category_table_skips_malformed_rows() {
    let dir = fixture_dir("category_malformed");
    let events = dir.join("events.csv");
    std::fs::write(
        &events,
        "month,day,title,type\n\
         2,x,Bad day,work\n\
         2,30,No such date,work\n\
         2,29,Leap,\n\
         2,10,,work\n\
         2,11\n\
         2,12,Ok,work\n",
    )
    .unwrap();

    let src = CategoryTableSource::new(&events, None);
    let leap = src.load(2024, 2).unwrap();
    assert_eq!(texts(&leap, 29), vec!["Leap"]);
    assert_eq!(texts(&leap, 12), vec!["Ok"]);
    assert_eq!(leap.len(), 2);

    let common = src.load(2023, 2).unwrap();
    assert!(common.for_day(29).is_empty());
    assert_eq!(common.len(), 1);
}

#[test]
fn category_table_missing_columns_is_config_error() {
    let dir = fixture_dir("category_columns");
    let events = dir.join("events.csv");
    std::fs::write(&events, "day,title\n1,New year\n").unwrap();

    let err = CategoryTableSource::new(&events, None)
        .load(2024, 1)
        .unwrap_err();
    match err {
        CalsvgError::Config(msg) => {
            assert!(msg.contains("month"));
            assert!(msg.contains("type"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn emoji_table_missing_columns_is_config_error() {
    let dir = fixture_dir("emoji_columns");
    let events = dir.join("events.csv");
    let emoji = dir.join("emoji.csv");
    std::fs::write(&events, "month,day,title,type\n1,1,New year,holiday\n").unwrap();
    std::fs::write(&emoji, "category,icon\nholiday,🎉\n").unwrap();

    let err = CategoryTableSource::new(&events, Some(emoji))
        .load(2024, 1)
        .unwrap_err();
    assert!(matches!(err, CalsvgError::Config(_)));
}

#[test]
fn missing_files_are_empty_sources() {
    let dir = fixture_dir("missing");
    let src = CategoryTableSource::new(dir.join("nope.csv"), Some(dir.join("nope_emoji.csv")));
    assert!(src.load(2024, 5).unwrap().is_empty());

    let scan = DirectoryScanSource::new(dir.join("no_such_dir"));
    assert!(scan.load(2024, 5).unwrap().is_empty());
}

#[test]
fn directory_scan_matches_iso_dates_across_files() {
    let dir = fixture_dir("scan");
    std::fs::write(
        dir.join("b.csv"),
        "date,title\n2024-12-24,Eve\n2023-12-24,Last year\nnot-a-date,Broken\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("a.csv"),
        "title,date\nParty,2024-12-24T19:00:00\nNew year,2024-01-01\n",
    )
    .unwrap();
    std::fs::write(dir.join("notes.txt"), "date,title\n2024-12-24,Ignored\n").unwrap();

    let src = DirectoryScanSource::new(&dir);
    assert_eq!(src.tables().unwrap().len(), 2);

    let dec = src.load(2024, 12).unwrap();
    assert_eq!(texts(&dec, 24), vec!["Party", "Eve"]);

    let year = src.load_year(2024).unwrap();
    assert_eq!(year.len(), 12);
    assert_eq!(texts(&year[0], 1), vec!["New year"]);
    assert_eq!(year[11].len(), 2);
}

#[test]
fn directory_scan_lists_every_csv_entry_in_order() {
    let dir = fixture_dir("scan_entries");
    std::fs::create_dir_all(dir.join("nested.csv")).unwrap();
    for name in ["c.csv", "A.CSV", "b.csv", "readme.md"] {
        std::fs::write(dir.join(name), "date,title\n").unwrap();
    }

    let tables = DirectoryScanSource::new(&dir).tables().unwrap();
    assert_eq!(
        tables,
        vec![dir.join("A.CSV"), dir.join("b.csv"), dir.join("c.csv")]
    );
}

#[test]
fn directory_scan_missing_columns_is_config_error() {
    let dir = fixture_dir("scan_columns");
    std::fs::write(dir.join("x.csv"), "when,title\n2024-01-01,x\n").unwrap();
    let err = DirectoryScanSource::new(&dir).load(2024, 1).unwrap_err();
    assert!(matches!(err, CalsvgError::Config(_)));
}

#[test]
fn iso_date_parsing() {
    assert_eq!(
        parse_iso_date("2024-02-29"),
        NaiveDate::from_ymd_opt(2024, 2, 29)
    );
    assert_eq!(
        parse_iso_date(" 2024-02-29 08:30:00 "),
        NaiveDate::from_ymd_opt(2024, 2, 29)
    );
    assert_eq!(parse_iso_date("2023-02-29"), None);
    assert_eq!(parse_iso_date("29/02/2024"), None);
}
