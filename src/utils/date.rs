use chrono::{NaiveDate, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Wall-clock entry time, second precision. One batch save shares one value.
pub fn now_time() -> NaiveTime {
    use chrono::Timelike;
    let now = chrono::Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), now.second())
        .unwrap_or(now)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
