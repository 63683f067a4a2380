use super::*;
use crate::foundation::core::WEEKDAYS;

#[test]
fn february_2024_monday_first() {
    let m = CalendarMonth::new(2024, 2, Weekday::Mon).unwrap();
    let matrix = m.week_matrix().unwrap();
    assert_eq!(matrix.week_count(), 5);
    assert_eq!(matrix.position_of(1), Some((0, 3)));
    assert_eq!(matrix.position_of(29), Some((4, 3)));
    assert_eq!(matrix.position_of(30), None);
}

#[test]
fn every_month_covers_each_day_once_in_order() {
    for year in [1900, 2000, 2023, 2024, 2100] {
        for month in 1..=12 {
            for first in WEEKDAYS {
                let m = CalendarMonth::new(year, month, first).unwrap();
                let matrix = m.week_matrix().unwrap();
                let days: Vec<u32> = matrix.days().collect();
                let expected: Vec<u32> = (1..=m.days_in_month().unwrap()).collect();
                assert_eq!(days, expected, "{year}-{month:02} first={first:?}");
                assert!(matrix.week_count() >= 4 && matrix.week_count() <= 6);
            }
        }
    }
}

#[test]
fn days_in_month_handles_leap_years() {
    let len = |y, m| {
        CalendarMonth::new(y, m, Weekday::Mon)
            .unwrap()
            .days_in_month()
            .unwrap()
    };
    assert_eq!(len(2024, 2), 29);
    assert_eq!(len(2023, 2), 28);
    assert_eq!(len(1900, 2), 28);
    assert_eq!(len(2000, 2), 29);
    assert_eq!(len(2024, 12), 31);
    assert_eq!(len(2024, 4), 30);
}

#[test]
fn first_weekday_rotates_columns_only() {
    let mon = CalendarMonth::new(2024, 2, Weekday::Mon)
        .unwrap()
        .week_matrix()
        .unwrap();
    let sun = CalendarMonth::new(2024, 2, Weekday::Sun)
        .unwrap()
        .week_matrix()
        .unwrap();

    // 2024-02-01 is a Thursday either way.
    let (_, mon_col) = mon.position_of(1).unwrap();
    let (_, sun_col) = sun.position_of(1).unwrap();
    assert_eq!(mon.weekday_index(mon_col), 3);
    assert_eq!(sun.weekday_index(sun_col), 3);

    for day in 1..=29 {
        let (_, c0) = mon.position_of(day).unwrap();
        let (_, c1) = sun.position_of(day).unwrap();
        assert_eq!(mon.weekday_index(c0), sun.weekday_index(c1));
        assert_eq!(mon.is_highlighted(c0), sun.is_highlighted(c1));
    }
}

#[test]
fn highlight_lands_on_sunday() {
    let matrix = CalendarMonth::new(2024, 9, Weekday::Mon)
        .unwrap()
        .week_matrix()
        .unwrap();
    // 2024-09-01 is a Sunday.
    assert_eq!(matrix.position_of(1), Some((0, 6)));
    assert!(matrix.is_highlighted(6));
    assert!(!matrix.is_highlighted(0));

    let sunday_first = CalendarMonth::new(2024, 9, Weekday::Sun)
        .unwrap()
        .week_matrix()
        .unwrap();
    assert_eq!(sunday_first.position_of(1), Some((0, 0)));
    assert!(sunday_first.is_highlighted(0));
}

#[test]
fn rejects_invalid_month() {
    assert!(CalendarMonth::new(2024, 0, Weekday::Mon).is_err());
    assert!(CalendarMonth::new(2024, 13, Weekday::Mon).is_err());
}
