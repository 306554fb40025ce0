//! Plain-text rendering of the employee bills table and the dashboard cards.

use chrono::{DateTime, Utc};

use crate::bill::{Bill, DisplayBill};
use crate::dashboard::card_holder;
use crate::dates::format_bill_date;
use crate::sort::{prepare_rows, BillRows};

/// Row shown when bills exist but none has a displayable date.
pub const NO_VALID_BILLS: &str = "Aucune facture valide";

const PAGE_TITLE: &str = "Mes notes de frais";

/// State of the employee bills page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillsPage {
    Loading,
    Error(String),
    Data(Vec<DisplayBill>),
}

/// Renders the whole page for its current state.
#[must_use]
pub fn render_bills_page(page: &BillsPage, now: DateTime<Utc>) -> String {
    match page {
        BillsPage::Loading => "Chargement...\n".to_string(),
        BillsPage::Error(message) => format!("Erreur\n{message}\n"),
        BillsPage::Data(bills) => {
            let header = format!(
                "{:<24}{:<24}{:<12}{:>10}  {:<12}JUSTIFICATIF",
                "TYPE", "NOM", "DATE", "MONTANT", "STATUT"
            );
            let mut lines = vec![PAGE_TITLE.to_string(), String::new(), header];
            lines.extend(render_rows(&prepare_rows(bills, now)));
            lines.iter().map(|line| format!("{line}\n")).collect()
        }
    }
}

/// Renders one line per table row.
///
/// An empty input yields no rows; a non-empty input without valid dates
/// yields the single [`NO_VALID_BILLS`] row.
#[must_use]
pub fn render_rows(rows: &BillRows<DisplayBill>) -> Vec<String> {
    match rows {
        BillRows::Empty => Vec::new(),
        BillRows::NoValidRecords => vec![NO_VALID_BILLS.to_string()],
        BillRows::Rows(bills) => bills.iter().map(render_row).collect(),
    }
}

fn render_row(bill: &DisplayBill) -> String {
    format!(
        "{:<24}{:<24}{:<12}{:>10}  {:<12}{}",
        bill.expense_type,
        bill.name,
        bill.date,
        format_amount(bill.amount),
        bill.status,
        bill.file_url.as_deref().unwrap_or("-"),
    )
}

/// Renders dashboard cards for raw bills, one block per bill.
#[must_use]
pub fn render_cards(bills: &[Bill]) -> String {
    bills.iter().map(render_card).collect()
}

fn render_card(bill: &Bill) -> String {
    let (first, last) = card_holder(&bill.email);
    let holder = format!("{first} {last}");
    format!(
        "[{}] {}\n    {}  {}\n    {}  {}\n",
        bill.id,
        holder.trim(),
        bill.name,
        format_amount(bill.amount),
        format_bill_date(&bill.date),
        bill.expense_type
    )
}

fn format_amount(amount: Option<i64>) -> String {
    amount.map_or_else(|| "- €".to_string(), |a| format!("{a} €"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn shown(date: &str) -> DisplayBill {
        DisplayBill {
            expense_type: "Transports".to_string(),
            name: "Taxi".to_string(),
            date: date.to_string(),
            amount: Some(40),
            status: "En attente".to_string(),
            ..DisplayBill::default()
        }
    }

    #[test]
    fn loading_and_error_states_are_distinct() {
        assert_eq!(render_bills_page(&BillsPage::Loading, now()), "Chargement...\n");
        let error = render_bills_page(&BillsPage::Error("Erreur 404".to_string()), now());
        assert!(error.starts_with("Erreur\n"));
        assert!(error.contains("Erreur 404"));
    }

    #[test]
    fn invalid_dates_render_a_single_marker_row() {
        let bills = vec![
            shown(""),
            shown("invalid-date"),
            shown("FooBar"),
            shown("32 Mars 2022"),
        ];
        let rows = render_rows(&prepare_rows(&bills, now()));
        assert_eq!(rows, vec![NO_VALID_BILLS.to_string()]);

        let page = render_bills_page(&BillsPage::Data(bills), now());
        assert_eq!(page.matches(NO_VALID_BILLS).count(), 1);
    }

    #[test]
    fn no_bills_renders_no_rows() {
        assert!(render_rows(&prepare_rows(&[], now())).is_empty());
        let page = render_bills_page(&BillsPage::Data(Vec::new()), now());
        assert!(!page.contains(NO_VALID_BILLS));
        assert!(page.contains(PAGE_TITLE));
    }

    #[test]
    fn rows_are_most_recent_first() {
        let bills = vec![shown("4 Avr. 22"), shown("1 Jan. 24"), shown("12 Déc. 23")];
        let rows = render_rows(&prepare_rows(&bills, now()));
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("1 Jan. 24"));
        assert!(rows[1].contains("12 Déc. 23"));
        assert!(rows[2].contains("4 Avr. 22"));
        assert!(rows[0].contains("40 €"));
        assert!(rows[0].contains("En attente"));
    }

    #[test]
    fn cards_show_holder_and_formatted_date() {
        let bills = vec![Bill {
            id: "abc".to_string(),
            email: "jane.doe@corp.tld".to_string(),
            name: "Hotel".to_string(),
            amount: Some(120),
            date: "2023-04-04".to_string(),
            expense_type: "Hôtel et logement".to_string(),
            ..Bill::default()
        }];
        let cards = render_cards(&bills);
        assert!(cards.contains("[abc] jane doe"));
        assert!(cards.contains("Hotel  120 €"));
        assert!(cards.contains("4 Avr. 23  Hôtel et logement"));
    }

    #[test]
    fn page_layout_is_title_blank_header_then_rows() {
        let page = render_bills_page(&BillsPage::Data(vec![shown("2024-01-01")]), now());
        let lines: Vec<&str> = page.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], PAGE_TITLE);
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("TYPE"));
        assert!(lines[2].ends_with("JUSTIFICATIF"));
        assert!(lines[3].starts_with("Transports"));
        assert!(page.ends_with('\n'));
    }

    #[test]
    fn each_card_is_three_lines() {
        let bills = vec![
            Bill {
                id: "a".to_string(),
                email: "solo@corp.tld".to_string(),
                date: "2023-04-04".to_string(),
                ..Bill::default()
            },
            Bill {
                id: "b".to_string(),
                date: "invalid-date".to_string(),
                ..Bill::default()
            },
        ];
        let cards = render_cards(&bills);
        let lines: Vec<&str> = cards.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[a] solo");
        assert_eq!(lines[1], "      - €");
        assert_eq!(lines[5], "    invalid-date  ");
        assert!(render_cards(&[]).is_empty());
    }
}
