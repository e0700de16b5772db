use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Long pt-BR date used as the `<time>` title, e.g. `3 de maio às 20:00h`.
/// The date is shown in its own offset.
pub fn format_published<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!(
        "{} de {} às {:02}:{:02}h",
        date.day(),
        MONTHS_PT_BR[date.month0() as usize],
        date.hour(),
        date.minute()
    )
}

pub fn relative_to_now<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    relative_to(date, Utc::now())
}

/// pt-BR distance between `date` and `now` with a suffix, using the
/// same buckets as date-fns `formatDistanceToNow`.
pub fn relative_to<Tz: TimeZone>(date: &DateTime<Tz>, now: DateTime<Utc>) -> String {
    let date = date.with_timezone(&Utc);
    let delta = date - now;
    let in_future = delta.num_seconds() > 0;
    let seconds = delta.num_seconds().abs();
    let minutes = (seconds as f64 / 60.0).round() as i64;
    let (earlier, later) = if in_future { (now, date) } else { (date, now) };

    let distance = distance_in_words(minutes, calendar_months(earlier, later));
    if in_future {
        format!("em {}", distance)
    } else {
        format!("há {}", distance)
    }
}

/// Whole calendar months from `earlier` to `later`; a month only counts
/// once `later` has reached the same day and time of day.
fn calendar_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());
    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months.max(0)
}

fn distance_in_words(minutes: i64, months: i64) -> String {
    if minutes < 2 {
        return if minutes == 0 {
            "menos de um minuto".to_string()
        } else {
            "1 minuto".to_string()
        };
    }
    if minutes < 45 {
        return format!("{} minutos", minutes);
    }
    if minutes < 90 {
        return "cerca de 1 hora".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        return plural(hours, "cerca de 1 hora", "cerca de {} horas");
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 dia".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return plural(days, "1 dia", "{} dias");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(months, "cerca de 1 mês", "cerca de {} meses");
    }

    if months < 12 {
        let nearest = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(nearest, "1 mês", "{} meses");
    }

    let since_start_of_year = months % 12;
    let years = months / 12;
    if since_start_of_year < 3 {
        plural(years, "cerca de 1 ano", "cerca de {} anos")
    } else if since_start_of_year < 9 {
        plural(years, "mais de 1 ano", "mais de {} anos")
    } else {
        plural(years + 1, "quase 1 ano", "quase {} anos")
    }
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{}", &count.to_string())
    }
}
