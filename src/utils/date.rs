use chrono::{Datelike, NaiveDate};

/// Current UTC calendar day, the same day a transition made now would land on.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let (Some(&start_date), Some(&end_date)) = (s.first(), e.last()) else {
        return Err(format!("Invalid range: {}:{}", start, end));
    };

    if end_date < start_date {
        return Err(format!("Range end {} is before start {}", end, start));
    }

    Ok(start_date
        .iter_days()
        .take_while(|d| *d <= end_date)
        .collect())
}

/// Resolve a period expression: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `A:B`.
pub fn resolve_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    match p.split_once(':') {
        Some((a, b)) => generate_range(a, b),
        None => generate_from_period(p),
    }
}

pub fn current_month_dates() -> Vec<NaiveDate> {
    let today = today();
    all_days_of_month(today.year(), today.month())
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| {
            first
                .iter_days()
                .take_while(|d| d.month() == month)
                .collect()
        })
        .unwrap_or_default()
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|first| first.iter_days().take_while(|d| d.year() == year).collect())
        .unwrap_or_default()
}
