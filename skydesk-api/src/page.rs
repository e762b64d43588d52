use skydesk_core::document::ids;
use skydesk_core::render::TableRenderer;
use skydesk_core::{FilterCriteria, Flight, Locale};
use v_htmlescape::escape;

struct Labels {
    title: &'static str,
    origin: &'static str,
    destination: &'static str,
    departure_date: &'static str,
    search: &'static str,
    headers: [&'static str; 7],
    aircraft: &'static str,
    back: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::EnUs => Labels {
            title: "Flights",
            origin: "Origin",
            destination: "Destination",
            departure_date: "Departure date",
            search: "Search",
            headers: ["Flight", "Route", "Departure", "Arrival", "Price", "Seats", ""],
            aircraft: "Aircraft",
            back: "Back to search",
        },
        Locale::ViVn => Labels {
            title: "Chuyến bay",
            origin: "Điểm đi",
            destination: "Điểm đến",
            departure_date: "Ngày đi",
            search: "Tìm kiếm",
            headers: ["Chuyến bay", "Hành trình", "Khởi hành", "Đến nơi", "Giá", "Ghế trống", ""],
            aircraft: "Máy bay",
            back: "Quay lại tìm kiếm",
        },
    }
}

fn layout(locale: Locale, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<main class="container">
{body}
</main>
</body>
</html>
"#,
        lang = locale.tag(),
        title = escape(title),
        body = body,
    )
}

fn text_input(id: &str, label: &str, kind: &str, value: Option<&str>) -> String {
    format!(
        r#"<label for="{id}">{label}</label><input type="{kind}" id="{id}" name="{id}" value="{value}">"#,
        id = id,
        label = label,
        kind = kind,
        value = escape(value.unwrap_or_default()),
    )
}

/// Search form plus the results table; `rows` goes inside `#flightsList`.
pub fn search_page(locale: Locale, filters: &FilterCriteria, rows: &str) -> String {
    let l = labels(locale);
    let headers: String = l.headers.iter().map(|h| format!("<th>{}</th>", h)).collect();
    let body = format!(
        r#"<h1>{title}</h1>
<form id="{form}" method="get" action="/">
{origin}
{destination}
{date}
<button type="submit" class="btn btn-primary">{search}</button>
</form>
<table class="table">
<thead><tr>{headers}</tr></thead>
<tbody id="{list}">{rows}</tbody>
</table>"#,
        title = l.title,
        form = ids::SEARCH_FORM,
        origin = text_input(ids::ORIGIN, l.origin, "text", filters.origin.as_deref()),
        destination = text_input(ids::DESTINATION, l.destination, "text", filters.destination.as_deref()),
        date = text_input(ids::DEPARTURE_DATE, l.departure_date, "date", filters.departure_date.as_deref()),
        search = l.search,
        headers = headers,
        list = ids::FLIGHTS_LIST,
        rows = rows,
    );
    layout(locale, l.title, &body)
}

pub fn flight_page(renderer: &TableRenderer, flight: &Flight) -> String {
    let locale = renderer.display().locale;
    let l = labels(locale);
    let route = flight.route.as_ref().map(|r| r.label()).unwrap_or_default();
    let aircraft = flight.aircraft_model.as_deref().unwrap_or_default();

    let rows = [
        (l.headers[1], escape(&route).to_string()),
        (l.headers[2], renderer.timestamp(&flight.departure_time)),
        (l.headers[3], renderer.timestamp(&flight.arrival_time)),
        (l.headers[4], renderer.price(flight)),
        (l.headers[5], renderer.seats(flight)),
        (l.aircraft, escape(aircraft).to_string()),
    ];
    let dl: String = rows
        .iter()
        .map(|(term, value)| format!("<dt>{}</dt><dd>{}</dd>", term, value))
        .collect();

    let body = format!(
        r#"<h1>{number}</h1>
<dl>{dl}</dl>
<a href="/" class="btn btn-secondary">{back}</a>"#,
        number = escape(&flight.flight_number),
        dl = dl,
        back = l.back,
    );
    layout(locale, &flight.flight_number, &body)
}
