use std::fmt::Write;

use v_htmlescape::escape;

use crate::flight::{Flight, Timestamp};
use crate::locale::DisplayOptions;

pub const TABLE_COLUMNS: usize = 7;

/// Builds the `<tr>` markup for the results table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    display: DisplayOptions,
}

impl TableRenderer {
    pub fn new(display: DisplayOptions) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// One row per flight, in input order, or a single placeholder row when empty.
    pub fn rows(&self, flights: &[Flight]) -> String {
        if flights.is_empty() {
            return self.placeholder_row();
        }
        let mut html = String::new();
        for flight in flights {
            self.write_row(&mut html, flight);
        }
        html
    }

    pub fn placeholder_row(&self) -> String {
        format!(
            r#"<tr><td colspan="{}" class="text-center">{}</td></tr>"#,
            TABLE_COLUMNS,
            self.display.locale.no_data_label()
        )
    }

    fn write_row(&self, html: &mut String, flight: &Flight) {
        let route = flight.route.as_ref().map(|r| r.label()).unwrap_or_default();
        let id = flight.id.to_string();
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            concat!(
                "<tr>",
                "<td>{number}</td>",
                "<td>{route}</td>",
                "<td>{departure}</td>",
                "<td>{arrival}</td>",
                "<td>{price}</td>",
                "<td>{seats}</td>",
                r#"<td><a href="/flights/{id}" class="btn btn-sm btn-info">{details}</a></td>"#,
                "</tr>",
            ),
            number = escape(&flight.flight_number),
            route = escape(&route),
            departure = self.timestamp(&flight.departure_time),
            arrival = self.timestamp(&flight.arrival_time),
            price = self.price(flight),
            seats = self.seats(flight),
            id = escape(&id),
            details = self.display.locale.details_label(),
        );
    }

    pub fn timestamp(&self, ts: &Timestamp) -> String {
        self.display.locale.format_datetime(&ts.to_local(self.display.offset))
    }

    /// Empty when the upstream sent no price.
    pub fn price(&self, flight: &Flight) -> String {
        flight
            .price
            .map(|p| self.display.locale.format_number(p))
            .unwrap_or_default()
    }

    pub fn seats(&self, flight: &Flight) -> String {
        flight.available_seats.map(|n| n.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::{FlightId, Route};
    use crate::locale::Locale;

    fn flight(id: i64, number: &str, route: Option<Route>) -> Flight {
        Flight {
            id: FlightId::Numeric(id),
            flight_number: number.to_string(),
            route,
            departure_time: "2024-01-01T08:00:00Z".parse().unwrap(),
            arrival_time: "2024-01-01T10:00:00Z".parse().unwrap(),
            price: Some(1_500_000.0),
            available_seats: Some(12),
            aircraft_model: None,
        }
    }

    #[test]
    fn test_empty_list_renders_single_placeholder() {
        let html = TableRenderer::default().rows(&[]);
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains(r#"colspan="7""#));
        assert!(html.contains("No data"));
    }

    #[test]
    fn test_placeholder_is_localized() {
        let renderer = TableRenderer::new(DisplayOptions::new(Locale::ViVn, 0).unwrap());
        assert!(renderer.rows(&[]).contains("Không có dữ liệu"));
    }

    #[test]
    fn test_one_row_per_flight_in_input_order() {
        let flights = vec![
            flight(3, "VN300", None),
            flight(1, "VN100", None),
            flight(2, "VN200", None),
        ];
        let html = TableRenderer::default().rows(&flights);
        assert_eq!(html.matches("<tr>").count(), 3);

        let p300 = html.find("VN300").unwrap();
        let p100 = html.find("VN100").unwrap();
        let p200 = html.find("VN200").unwrap();
        assert!(p300 < p100 && p100 < p200);
    }

    #[test]
    fn test_row_columns() {
        let html = TableRenderer::default().rows(&[flight(1, "VN100", Some(Route::new("HAN", "SGN")))]);
        assert_eq!(
            html,
            concat!(
                "<tr><td>VN100</td><td>HAN → SGN</td>",
                "<td>1/1/2024, 8:00:00 AM</td><td>1/1/2024, 10:00:00 AM</td>",
                "<td>1,500,000</td><td>12</td>",
                r#"<td><a href="/flights/1" class="btn btn-sm btn-info">Details</a></td></tr>"#,
            )
        );
    }

    #[test]
    fn test_missing_route_renders_empty_cell() {
        let html = TableRenderer::default().rows(&[flight(1, "VN100", None)]);
        assert!(html.contains("<td>VN100</td><td></td>"));
    }

    #[test]
    fn test_missing_price_and_seats_render_empty_cells() {
        let mut f = flight(1, "VN100", None);
        f.price = None;
        f.available_seats = None;
        let html = TableRenderer::default().rows(&[f]);
        assert!(html.contains("10:00:00 AM</td><td></td><td></td><td><a"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = TableRenderer::default().rows(&[flight(
            1,
            "<script>alert(1)</script>",
            Some(Route::new("A&B", "\"C\"")),
        )]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A&amp;B"));
    }

    #[test]
    fn test_vietnamese_display_shifts_timezone() {
        let renderer = TableRenderer::new(DisplayOptions::new(Locale::ViVn, 420).unwrap());
        let html = renderer.rows(&[flight(1, "VN100", None)]);
        assert!(html.contains("<td>15:00:00 1/1/2024</td>"));
        assert!(html.contains("<td>1.500.000</td>"));
        assert!(html.contains("Chi tiết"));
    }
}
