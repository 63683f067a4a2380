use super::*;

struct FixedSource(Vec<(u32, u32, &'static str)>);

impl EventSource for FixedSource {
    fn describe(&self) -> String {
        "fixed".to_string()
    }

    fn load(&self, _year: i32, month: u32) -> CalsvgResult<MonthEvents> {
        let mut out = MonthEvents::new();
        for (m, d, t) in &self.0 {
            if *m == month {
                out.push(*d, EventLabel::plain(*t));
            }
        }
        Ok(out)
    }
}

#[test]
fn label_uses_emoji_prefix_for_known_category() {
    let emoji: EmojiMap = [("work", "📅")].into_iter().collect();
    let ev = Event::new(15, "Team Meeting").with_category("Work");
    let label = ev.label(&emoji);
    assert_eq!(label.prefix.as_deref(), Some("📅"));
    assert_eq!(label.display(), "📅 Team Meeting");

    let unknown = Event::new(15, "Lunch").with_category("food").label(&emoji);
    assert_eq!(unknown.prefix, None);
    assert_eq!(unknown.display(), "Lunch");
}

#[test]
fn month_events_keep_insertion_order_per_day() {
    let mut m = MonthEvents::new();
    m.push(3, EventLabel::plain("b"));
    m.push(1, EventLabel::plain("x"));
    m.push(3, EventLabel::plain("a"));
    let texts: Vec<&str> = m.for_day(3).iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["b", "a"]);
    assert_eq!(m.max_events_per_day(), 2);
    assert_eq!(m.len(), 3);
    assert!(m.for_day(2).is_empty());
}

#[test]
fn empty_month_reports_zero_lines() {
    let m = MonthEvents::new();
    assert_eq!(m.max_events_per_day(), 0);
    assert!(m.is_empty());
}

#[test]
fn load_year_fills_all_months() {
    let src = FixedSource(vec![(1, 1, "new year"), (12, 24, "eve"), (12, 24, "dinner")]);
    let index = EventIndex::load_year(&src, 2024).unwrap();
    assert_eq!(index.year(), 2024);
    assert_eq!(index.months().count(), 12);
    assert_eq!(index.month(1).len(), 1);
    assert_eq!(index.month(12).for_day(24).len(), 2);
    assert!(index.month(6).is_empty());
}

#[test]
fn load_month_only_holds_requested_month() {
    let src = FixedSource(vec![(1, 1, "new year"), (2, 14, "valentine")]);
    let index = EventIndex::load_month(&src, 2024, 2).unwrap();
    assert_eq!(index.months().count(), 1);
    assert_eq!(index.month(2).len(), 1);
    assert!(index.month(1).is_empty());
    assert!(EventIndex::load_month(&src, 2024, 13).is_err());
}
