use chrono::TimeZone;

use super::*;

fn utc_day(year: i32, month: u32, day: u32) -> ParsedDate {
    ParsedDate::At(Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
}

#[test]
fn parses_iso_dates_to_their_calendar_day() {
    for (raw, (y, m, d)) in [
        ("2023-04-04", (2023, 4, 4)),
        ("2004-02-29", (2004, 2, 29)),
        ("1999-12-31", (1999, 12, 31)),
        ("2022-06-15", (2022, 6, 15)),
    ] {
        assert_eq!(parse_bill_date(raw), utc_day(y, m, d), "parsing {raw}");
    }
}

#[test]
fn days_past_the_month_end_roll_over() {
    assert_eq!(parse_bill_date("2023-02-30"), utc_day(2023, 3, 2));
    assert_eq!(parse_bill_date("2023-04-31"), utc_day(2023, 5, 1));
    assert_eq!(parse_bill_date("2023-02-29"), utc_day(2023, 3, 1));
    assert_eq!(parse_bill_date("2023-12-31"), utc_day(2023, 12, 31));
    assert_eq!(parse_bill_date("30 Fév. 23"), utc_day(2023, 3, 2));
    assert_eq!(parse_bill_date("31 Avr. 23"), utc_day(2023, 5, 1));
}

#[test]
fn days_and_months_out_of_range_are_invalid() {
    assert_eq!(parse_bill_date("2023-13-01"), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("2023-00-10"), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("2022-03-32"), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("2023-02-00"), ParsedDate::Invalid);
}

#[test]
fn rolled_over_dates_format_as_the_real_day() {
    assert_eq!(format_bill_date("2023-02-30"), "2 Mar. 23");
    assert_eq!(format_bill_date("2023-04-31"), "1 Mai. 23");
}

#[test]
fn parses_display_dates() {
    assert_eq!(parse_bill_date("4 Avr. 23"), utc_day(2023, 4, 4));
    assert_eq!(parse_bill_date("12 Déc. 21"), utc_day(2021, 12, 12));
    assert_eq!(parse_bill_date("1 Jan. 2002"), utc_day(2002, 1, 1));
}

#[test]
fn parses_full_month_names() {
    assert_eq!(parse_bill_date("4 Avril 2023"), utc_day(2023, 4, 4));
    assert_eq!(parse_bill_date("21 Mars 22"), utc_day(2022, 3, 21));
    assert_eq!(parse_bill_date("3 Août 20"), utc_day(2020, 8, 3));
}

#[test]
fn ambiguous_prefixes_resolve_to_first_table_entry() {
    // "Jui" is a prefix of both "Juin" and "Juil"; June comes first.
    assert_eq!(parse_bill_date("15 Jui. 22"), utc_day(2022, 6, 15));
    // "A" matches "Avr" before "Aoû".
    assert_eq!(parse_bill_date("2 A. 22"), utc_day(2022, 4, 2));
    assert_eq!(parse_bill_date("2 Ma. 22"), utc_day(2022, 3, 2));
}

#[test]
fn unknown_month_is_invalid() {
    assert_eq!(parse_bill_date("3 Foo. 22"), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("3 avr. 22"), ParsedDate::Invalid);
}

#[test]
fn wrong_token_count_is_invalid() {
    assert_eq!(parse_bill_date("FooBar"), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("4 Avr."), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("4  Avr. 23"), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("4 Avr. 23 extra"), ParsedDate::Invalid);
}

#[test]
fn blank_input_is_invalid() {
    assert_eq!(parse_bill_date(""), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("   "), ParsedDate::Invalid);
}

#[test]
fn impossible_display_day_is_invalid() {
    assert_eq!(parse_bill_date("32 Mars 2022"), ParsedDate::Invalid);
    assert_eq!(parse_bill_date("x Mars 2022"), ParsedDate::Invalid);
}

#[test]
fn invalid_sentinel_orders_before_every_date() {
    assert!(ParsedDate::Invalid < utc_day(1970, 1, 1));
    assert!(ParsedDate::Invalid < utc_day(2023, 1, 1));
    assert!(utc_day(2022, 1, 1) < utc_day(2023, 1, 1));
}

#[test]
fn timestamp_millis_of_sentinel_is_none() {
    assert_eq!(ParsedDate::Invalid.timestamp_millis(), None);
    assert_eq!(utc_day(1970, 1, 2).timestamp_millis(), Some(86_400_000));
}

#[test]
fn formats_iso_dates_for_display() {
    assert_eq!(format_bill_date("2023-04-04"), "4 Avr. 23");
    assert_eq!(format_bill_date("2022-02-02"), "2 Fév. 22");
    assert_eq!(format_bill_date("2022-08-09"), "9 Aoû. 22");
    assert_eq!(format_bill_date("2004-12-25"), "25 Déc. 04");
    assert_eq!(format_bill_date("2021-09-30"), "30 Sep. 21");
}

#[test]
fn june_and_july_share_a_display_abbreviation() {
    assert_eq!(format_bill_date("2021-06-01"), "1 Jui. 21");
    assert_eq!(format_bill_date("2022-07-14"), "14 Jui. 22");
}

#[test]
fn formats_timestamps() {
    assert_eq!(format_bill_date("2023-01-05T10:00:00Z"), "5 Jan. 23");
    assert_eq!(format_bill_date("2023-03-08T23:30:00.000"), "8 Mar. 23");
}

#[test]
fn unparsable_input_is_returned_unchanged() {
    assert_eq!(format_bill_date("invalid-date"), "invalid-date");
    assert_eq!(format_bill_date(""), "");
    assert_eq!(format_bill_date("4 Avr. 23"), "4 Avr. 23");
}

#[test]
fn formatted_dates_parse_back_to_the_same_day() {
    for raw in ["2023-04-04", "2022-01-31", "2021-11-11", "2020-03-01"] {
        assert_eq!(
            parse_bill_date(&format_bill_date(raw)),
            parse_bill_date(raw),
            "round trip of {raw}"
        );
    }
}
