//! HTML extraction for the booking results page.
//!
//! The results table tags its cells with presentation classes rather than
//! semantic ones, so each field is located by the exact `class` attribute
//! string the page uses. The generic `displace-text` class is shared by the
//! train-type cell and both duration cells; the type pass therefore matches
//! the catch-all class and subtracts the nodes the two duration passes
//! already claimed. Row classes and the price-status cell carry generated
//! suffixes, so those two are matched by regex over the raw attribute.
//!
//! Extraction is infallible: markup that matches nothing produces empty
//! lists, and [`assemble`] zips the five passes positionally, truncating to
//! the shortest.

use std::collections::HashSet;

use itertools::izip;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::TimetableEntry;

const DEPARTURE: &str = r#"div[class="booking-list-element-big-font salida displace-text-xs"]"#;
const ARRIVAL: &str = r#"div[class="booking-list-element-big-font llegada"]"#;
const DURATION: &str =
    r#"div[class="purple-font displace-text duracion hidden-xs"][aria-label="Duración"]"#;
const DURATION_HIDDEN: &str = r#"div[class="purple-font displace-text visible-xs text-nowrap"]"#;
const TYPE_CATCH_ALL: &str = "div.displace-text";
const PRICE: &str = r#"div[class="precio booking-list-element-big-font"]"#;
const TRIP_ROW_CLASS: &str = r"trayectoRow\w*";
const PRICE_STATUS_CLASS: &str = r"booking-list-element-price\w*";

/// Extract one timetable entry per train from a captured results page.
pub fn extract_timetable(html: &str) -> Vec<TimetableEntry> {
    let doc = Html::parse_document(html);
    assemble(
        train_types(&doc),
        departures(&doc),
        arrivals(&doc),
        durations(&doc),
        prices(&doc),
    )
}

/// Departure times ("HH:MM"), trimmed, in document order.
pub fn departures(doc: &Html) -> Vec<String> {
    trimmed_texts(doc, DEPARTURE)
}

/// Arrival times ("HH:MM"), trimmed, in document order.
pub fn arrivals(doc: &Html) -> Vec<String> {
    trimmed_texts(doc, ARRIVAL)
}

/// Trip durations, trimmed, in document order.
pub fn durations(doc: &Html) -> Vec<String> {
    trimmed_texts(doc, DURATION)
}

/// Train service types, trimmed, in document order.
///
/// There is no type-specific class; the type cell shares `displace-text`
/// with the duration cells, so the duration nodes (both the wide and the
/// narrow-viewport variant) are subtracted from the catch-all match.
pub fn train_types(doc: &Html) -> Vec<String> {
    let claimed: HashSet<_> = doc
        .select(&selector(DURATION))
        .chain(doc.select(&selector(DURATION_HIDDEN)))
        .map(|el| el.id())
        .collect();

    doc.select(&selector(TYPE_CATCH_ALL))
        .filter(|el| !claimed.contains(&el.id()))
        .map(|el| element_text(&el).trim().to_string())
        .collect()
}

/// Per-train price lists, in document order.
///
/// Each trip row prefers its price-tagged cells, kept verbatim. A row with
/// none (sold out, not yet bookable) falls back to the first status cell's
/// text, trimmed. A row with neither yields an empty list.
pub fn prices(doc: &Html) -> Vec<Vec<String>> {
    let trip_row = regex(TRIP_ROW_CLASS);
    let price_status = regex(PRICE_STATUS_CLASS);
    let price_sel = selector(PRICE);
    let row_sel = selector("tr");
    let cell_sel = selector("td");

    doc.select(&row_sel)
        .filter(|row| class_matches(row, &trip_row))
        .map(|row| {
            let tagged: Vec<String> = row.select(&price_sel).map(|el| element_text(&el)).collect();
            if !tagged.is_empty() {
                return tagged;
            }
            row.select(&cell_sel)
                .filter(|cell| class_matches(cell, &price_status))
                .take(1)
                .map(|cell| element_text(&cell).trim().to_string())
                .collect()
        })
        .collect()
}

/// Zip the five field sequences into entries, truncating to the shortest.
pub fn assemble(
    types: Vec<String>,
    departures: Vec<String>,
    arrivals: Vec<String>,
    durations: Vec<String>,
    prices: Vec<Vec<String>>,
) -> Vec<TimetableEntry> {
    izip!(types, departures, arrivals, durations, prices)
        .map(
            |(train_type, departure, arrival, duration, price)| TimetableEntry {
                train_type,
                departure,
                arrival,
                duration,
                price,
            },
        )
        .collect()
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector is valid css")
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern is a valid regex")
}

fn trimmed_texts(doc: &Html, css: &str) -> Vec<String> {
    doc.select(&selector(css))
        .map(|el| element_text(&el).trim().to_string())
        .collect()
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect()
}

fn class_matches(el: &ElementRef, re: &Regex) -> bool {
    el.value().attr("class").is_some_and(|class| re.is_match(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two result rows the way the booking page lays them out: one bookable
    /// train with two fares, one sold out with only a status cell.
    const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<table class="booking-list">
  <tr class="trayectoRow">
    <td><div class="displace-text">AVE</div></td>
    <td><div class="booking-list-element-big-font salida displace-text-xs">
        08:30
    </div></td>
    <td><div class="booking-list-element-big-font llegada">11:15</div></td>
    <td>
      <div class="purple-font displace-text duracion hidden-xs" aria-label="Duración">2 h. 45 min.</div>
      <div class="purple-font displace-text visible-xs text-nowrap">2 h. 45 min.</div>
    </td>
    <td class="booking-list-element-price">
      <div class="precio booking-list-element-big-font">45,10 €</div>
      <div class="precio booking-list-element-big-font">60,70 € </div>
    </td>
  </tr>
  <tr class="trayectoRowCompleto">
    <td><div class="displace-text">AVLO</div></td>
    <td><div class="booking-list-element-big-font salida displace-text-xs">09:05</div></td>
    <td><div class="booking-list-element-big-font llegada">11:50</div></td>
    <td>
      <div class="purple-font displace-text duracion hidden-xs" aria-label="Duración">2 h. 45 min.</div>
      <div class="purple-font displace-text visible-xs text-nowrap">2 h. 45 min.</div>
    </td>
    <td class="booking-list-element-priceCompleto">
        Tren Completo
    </td>
  </tr>
</table>
</body></html>"#;

    #[test]
    fn extracts_departures_trimmed() {
        let doc = Html::parse_document(RESULTS_PAGE);
        assert_eq!(departures(&doc), vec!["08:30", "09:05"]);
    }

    #[test]
    fn extracts_arrivals() {
        let doc = Html::parse_document(RESULTS_PAGE);
        assert_eq!(arrivals(&doc), vec!["11:15", "11:50"]);
    }

    #[test]
    fn extracts_durations_only_from_labelled_cells() {
        let doc = Html::parse_document(RESULTS_PAGE);
        assert_eq!(durations(&doc), vec!["2 h. 45 min.", "2 h. 45 min."]);
    }

    #[test]
    fn type_pass_subtracts_both_duration_variants() {
        let doc = Html::parse_document(RESULTS_PAGE);
        assert_eq!(train_types(&doc), vec!["AVE", "AVLO"]);
    }

    #[test]
    fn tagged_prices_are_verbatim() {
        let doc = Html::parse_document(RESULTS_PAGE);
        let all = prices(&doc);
        assert_eq!(all[0], vec!["45,10 €", "60,70 € "]);
    }

    #[test]
    fn rows_without_tagged_prices_fall_back_to_the_status_cell() {
        let doc = Html::parse_document(RESULTS_PAGE);
        let all = prices(&doc);
        assert_eq!(all[1], vec!["Tren Completo"]);
    }

    #[test]
    fn whole_page_extraction_produces_aligned_entries() {
        let entries = extract_timetable(RESULTS_PAGE);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].train_type, "AVE");
        assert_eq!(entries[0].departure, "08:30");
        assert_eq!(entries[0].arrival, "11:15");
        assert_eq!(entries[0].duration, "2 h. 45 min.");
        assert_eq!(entries[0].price, vec!["45,10 €", "60,70 € "]);

        assert_eq!(entries[1].train_type, "AVLO");
        assert_eq!(entries[1].price, vec!["Tren Completo"]);
    }

    #[test]
    fn page_without_results_extracts_nothing() {
        let entries = extract_timetable("<html><body><p>Sin resultados</p></body></html>");
        assert!(entries.is_empty());
    }

    #[test]
    fn assemble_truncates_to_the_shortest_list() {
        let strings = |n: usize| (0..n).map(|i| i.to_string()).collect::<Vec<_>>();
        let entries = assemble(
            strings(3),
            strings(3),
            strings(2),
            strings(3),
            vec![vec![], vec![], vec![]],
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].arrival, "1");
    }

    #[test]
    fn a_missing_arrival_cell_truncates_page_extraction() {
        // Same two rows, but the second train's arrival cell is absent.
        let page = RESULTS_PAGE.replacen(
            r#"<td><div class="booking-list-element-big-font llegada">11:50</div></td>"#,
            "<td></td>",
            1,
        );
        let entries = extract_timetable(&page);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].train_type, "AVE");
    }
}
