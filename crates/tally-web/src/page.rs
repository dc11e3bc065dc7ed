// File: crates/tally-web/src/page.rs
// Summary: HTML for the entry list page (add form, label filter, table, charts).

use maud::{html, Markup, DOCTYPE};
use tally_core::{ChartKind, Domain, Entry};

/// Everything the list page shows.
pub struct IndexView<'a> {
    pub domain: &'a Domain,
    /// Entries after filtering.
    pub entries: &'a [Entry],
    /// Distinct non-empty labels across all entries, sorted.
    pub labels: &'a [String],
    pub selected: Option<&'a str>,
    /// Default for the date input, `YYYY-MM-DD`.
    pub today: &'a str,
}

fn chart_alt(kind: ChartKind, d: &Domain) -> String {
    match kind {
        ChartKind::Pie => format!("Share of {} per {}", d.noun.to_lowercase(), d.label_title.to_lowercase()),
        ChartKind::LabelHistogram => d.label_chart_title(),
        ChartKind::DayHistogram => d.day_chart_title(),
        ChartKind::MonthHistogram => d.month_chart_title(),
    }
}

pub fn index(view: &IndexView<'_>) -> Markup {
    let d = view.domain;
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (d.app_title) }
                style {
                    "body{font-family:sans-serif;margin:2rem;}"
                    "table{border-collapse:collapse;margin:1rem 0;}"
                    "td,th{border:1px solid #ccc;padding:.3rem .6rem;}"
                    ".charts img{max-width:48%;}"
                }
            }
            body {
                h1 { (d.app_title) }

                form method="post" action="/add" {
                    input type="text" name=(d.name_field) placeholder=(d.name_title);
                    input type="number" step="any" name=(d.value_field) placeholder=(d.value_title);
                    input type="text" name=(d.label_field) placeholder=(d.label_title);
                    input type="date" name="date" value=(view.today);
                    button type="submit" { "Add" }
                }

                form method="get" action="/" {
                    select name=(d.label_field) {
                        option value="" { "All" }
                        @for label in view.labels {
                            option value=(label) selected[view.selected == Some(label.as_str())] { (label) }
                        }
                    }
                    button type="submit" { "Filter" }
                }

                table {
                    thead {
                        tr {
                            th { (d.name_title) }
                            th { (d.value_title) }
                            th { (d.label_title) }
                            th { "Date" }
                            th {}
                        }
                    }
                    tbody {
                        @for e in view.entries {
                            tr {
                                td { (e.name) }
                                td { (e.value) }
                                td { (e.label) }
                                td { (e.date_str()) }
                                td { a href=(format!("/delete/{}", e.id)) { "Delete" } }
                            }
                        }
                    }
                }

                div.charts {
                    @for kind in ChartKind::ALL {
                        img src=(kind.route()) alt=(chart_alt(kind, d));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_uses_domain_field_names_and_escapes() {
        let entries = vec![Entry::new("<b>squat</b>", 12.0, "legs", Some("2024-05-17".into()))];
        let labels = vec!["legs".to_string()];
        let html = index(&IndexView {
            domain: &Domain::FITNESS,
            entries: &entries,
            labels: &labels,
            selected: Some("legs"),
            today: "2024-05-18",
        })
        .into_string();

        assert!(html.contains(r#"name="repetitions""#));
        assert!(html.contains(r#"name="muscle""#));
        assert!(html.contains("&lt;b&gt;squat&lt;/b&gt;"));
        assert!(html.contains(&format!("/delete/{}", entries[0].id)));
        assert!(html.contains(r#"<option value="legs" selected>"#));
        assert!(html.contains(r#"src="/entry_month""#));
    }
}
