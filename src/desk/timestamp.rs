use chrono::{Datelike, Local, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
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

/// `DD/MM/YY HH:MM`, shown on package, pickup, loan and visitor events.
pub fn short_timestamp(at: NaiveDateTime) -> String {
    format!("{} {:02}:{:02}", short_date(at), at.hour(), at.minute())
}

/// Date half of [`short_timestamp`].
pub fn short_date(at: NaiveDateTime) -> String {
    format!(
        "{:02}/{:02}/{:02}",
        at.day(),
        at.month(),
        at.year().rem_euclid(100)
    )
}

/// `D de <mês> de YYYY às HH:MM`, shown on occurrences.
pub fn long_timestamp(at: NaiveDateTime) -> String {
    format!(
        "{} de {} de {} às {:02}:{:02}",
        at.day(),
        MONTHS[at.month0() as usize],
        at.year(),
        at.hour(),
        at.minute()
    )
}

/// Wall-clock time at the desk.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
