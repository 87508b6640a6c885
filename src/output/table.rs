//! Endpoint table for `list`.

use crate::feed::Endpoint;

const HEADERS: [&str; 4] = ["PORT", "LAT(ms)", "ST", "NAME"];
const GAP: &str = "  ";

/// Render endpoints as an auto-sized table with a dash separator row.
///
/// PORT, ST and NAME are left-aligned, LAT(ms) is right-aligned. Missing port
/// or latency renders as an empty cell.
pub fn render_endpoint_table(endpoints: &[Endpoint]) -> String {
    let rows: Vec<[String; 4]> = endpoints
        .iter()
        .map(|ep| {
            [
                ep.port.map(|p| p.to_string()).unwrap_or_default(),
                ep.latency_text().unwrap_or_default(),
                ep.status_label().to_string(),
                ep.name.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers = HEADERS.map(str::to_string);
    let dashes = widths.map(|w| "-".repeat(w));

    let mut out = String::new();
    for row in [&headers, &dashes].into_iter().chain(rows.iter()) {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let [port, lat, st, name] = cells;
    let line = format!(
        "{port:<w0$}{GAP}{lat:>w1$}{GAP}{st:<w2$}{GAP}{name:<w3$}",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        let endpoints = vec![
            Endpoint::new(Some(10001), "alpha", Some(50.0), true),
            Endpoint::new(Some(10002), "beta long name", Some(1234.5), false),
            Endpoint::new(None, "", None, false),
        ];

        let table = render_endpoint_table(&endpoints);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines,
            vec![
                "PORT   LAT(ms)  ST    NAME",
                "-----  -------  ----  --------------",
                "10001       50  UP    alpha",
                "10002   1234.5  DOWN  beta long name",
                "                DOWN",
            ]
        );
    }

    #[test]
    fn test_empty_list_has_headers() {
        let table = render_endpoint_table(&[]);
        assert_eq!(table, "PORT  LAT(ms)  ST  NAME\n----  -------  --  ----\n");
    }
}
