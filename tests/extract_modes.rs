// tests/extract_modes.rs
//
// Row extraction per mode, including the rows that are skipped on purpose.
//
use rowscrape::config::deployment::PatternSection;
use rowscrape::config::Deployment;
use rowscrape::core::Page;
use rowscrape::engine::types::RowGap;
use rowscrape::engine::{ExtractMode, ExtractedRow, Pipeline};
use rowscrape::row;

fn rows_for(dep: Deployment, html: &str) -> (Vec<ExtractedRow>, usize) {
    let page = Page::parse(html);
    let pipeline = Pipeline::new(dep).unwrap();
    let (rows, report) = pipeline.collect_rows(&page.root());
    (rows, report.skipped())
}

fn fields(rows: &[ExtractedRow]) -> Vec<Vec<String>> {
    rows.iter().map(|r| r.fields.clone()).collect()
}

fn news(date_format: &str, token_regex: Option<&str>) -> Deployment {
    let mut d = Deployment::new("news", &[ExtractMode::Pattern]);
    let mut p = PatternSection::new(date_format);
    p.token_regex = token_regex.map(str::to_string);
    d.pattern = Some(p);
    d
}

/* ---------------- key/value ---------------- */

#[test]
fn key_value_rows_are_label_and_value() {
    let html = r#"<table class="infobox">
        <tr><th>Version</th><td>12.0</td></tr>
        <tr><th>Released</th><td>2024-01-01</td></tr>
    </table>"#;
    let (rows, skipped) = rows_for(Deployment::new("kv", &[ExtractMode::KeyValue]), html);

    assert_eq!(skipped, 0);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.provenance_label == "infobox" && r.fields.len() == 2));
    assert_eq!(fields(&rows), vec![row!["Version", "12.0"], row!["Released", "2024-01-01"]]);
}

#[test]
fn key_value_rows_missing_a_cell_are_skipped() {
    let html = r#"<table class="infobox">
        <tr><th colspan="2">SUSE Linux Enterprise</th></tr>
        <tr><td colspan="2"><img src="logo.png"></td></tr>
        <tr><th>Developer</th><td>SUSE<br>S.A.</td></tr>
    </table>"#;
    let (rows, skipped) = rows_for(Deployment::new("kv", &[ExtractMode::KeyValue]), html);

    assert_eq!(skipped, 2);
    assert_eq!(fields(&rows), vec![row!["Developer", "SUSE S.A."]]);
}

#[test]
fn key_value_marker_can_be_any_attribute() {
    let html = r#"<table role="facts"><tr><th>OS family</th><td>Linux</td></tr></table>
                  <table class="infobox"><tr><th>Ignored</th><td>x</td></tr></table>"#;
    let mut d = Deployment::new("kv", &[ExtractMode::KeyValue]);
    d.key_value.marker = rowscrape::config::deployment::Marker { attr: "role".into(), value: "facts".into() };
    d.key_value.label = "facts".into();
    let (rows, _) = rows_for(d, html);
    assert_eq!(rows, vec![ExtractedRow::new("facts", row!["OS family", "Linux"])]);
}

/* ---------------- tabular ---------------- */

#[test]
fn tabular_skips_the_header_row() {
    let html = r#"<table>
        <tr><th>A</th><th>B</th><th>C</th></tr>
        <tr><td>1</td><td>2</td></tr>
    </table>"#;
    let (rows, _) = rows_for(Deployment::new("t", &[ExtractMode::Tabular]), html);
    assert_eq!(rows, vec![ExtractedRow::new("table_1", row!["1", "2"])]);
}

#[test]
fn tabular_header_in_thead_is_still_the_first_row() {
    let html = r#"<table>
        <thead><tr><th>Version</th><th>Date</th></tr></thead>
        <tbody><tr><td>8.0.0</td><td>2023-11-14</td></tr><tr><td>8.0.1</td><td>2023-12-12</td></tr></tbody>
    </table>"#;
    let (rows, _) = rows_for(Deployment::new("t", &[ExtractMode::Tabular]), html);
    assert_eq!(fields(&rows), vec![row!["8.0.0", "2023-11-14"], row!["8.0.1", "2023-12-12"]]);
}

#[test]
fn tabular_drops_rows_without_data() {
    let html = r#"<table>
        <tr><th>Edition</th><th>Servicing</th></tr>
        <tr><th colspan="2">Section heading</th></tr>
        <tr><td> </td><td>
        </td></tr>
        <tr><td>Enterprise</td><td>Long-term<br/>servicing
            channel</td></tr>
    </table>"#;
    let (rows, skipped) = rows_for(Deployment::new("t", &[ExtractMode::Tabular]), html);
    assert_eq!(skipped, 2);
    assert_eq!(fields(&rows), vec![row!["Enterprise", "Long-term servicing channel"]]);
}

#[test]
fn tabular_row_headers_are_not_data_cells() {
    let html = r#"<table>
        <tr><th>Version</th><th>Build</th><th>Date</th></tr>
        <tr><th>24H2</th><td>26100</td><td>2024-10-01</td></tr>
    </table>"#;
    let (rows, _) = rows_for(Deployment::new("t", &[ExtractMode::Tabular]), html);
    assert_eq!(fields(&rows), vec![row!["26100", "2024-10-01"]]);
}

#[test]
fn fields_never_carry_line_breaks() {
    let html = "<table><tr><th>h</th></tr><tr><td>a\n\nb</td><td><p>c</p><p>d</p></td></tr></table>";
    let (rows, _) = rows_for(Deployment::new("t", &[ExtractMode::Tabular]), html);
    assert_eq!(fields(&rows), vec![row!["a b", "c d"]]);
    assert!(rows.iter().flat_map(|r| &r.fields).all(|f| !f.contains('\n') && !f.contains('\r')));
}

/* ---------------- pattern ---------------- */

#[test]
fn pattern_row_is_token_date_link() {
    let html = r#"<ul><li>05.03.2024 Release <a href="https://example/x">v2.1.0</a></li></ul>"#;
    let (rows, _) = rows_for(news("DD.MM.YYYY", None), html);
    assert_eq!(rows, vec![ExtractedRow::new("news_list", row!["v2.1.0", "2024-03-05", "https://example/x"])]);
}

#[test]
fn pattern_token_regex_narrows_anchor_text() {
    let html = r#"<ul>
        <li>12.01.2024 <a href="/v3.html">DBF Viewer 2000 v3.45 released</a></li>
        <li>02.11.2023 <a href="/faq.html">Updated FAQ</a></li>
    </ul>"#;
    let (rows, _) = rows_for(news("%d.%m.%Y", Some(r"v\d+\.\d+(\.\d+)?")), html);
    assert_eq!(fields(&rows), vec![
        row!["v3.45", "2024-01-12", "/v3.html"],
        row!["Updated FAQ", "2023-11-02", "/faq.html"],
    ]);
}

#[test]
fn pattern_without_leading_date_keeps_row_with_empty_date() {
    let html = r#"<ul><li>Coming soon: <a href="/next">v4.0</a> (01.01.2025)</li></ul>"#;
    let (rows, _) = rows_for(news("DD.MM.YYYY", None), html);
    assert_eq!(fields(&rows), vec![row!["v4.0", "", "/next"]]);
}

#[test]
fn pattern_items_without_anchor_are_skipped_silently() {
    let html = r#"<ul>
        <li>01.01.2024 Happy new year</li>
        <li>05.03.2024 <a href="/x">v2.1.0</a></li>
    </ul>"#;
    let (rows, skipped) = rows_for(news("DD.MM.YYYY", None), html);
    assert_eq!(skipped, 1);
    assert_eq!(fields(&rows), vec![row!["v2.1.0", "2024-03-05", "/x"]]);
}

#[test]
fn pattern_links_resolve_against_deployment_url() {
    let html = r#"<ul><li>05.03.2024 <a href="dbfview.html">v2.1.0</a></li></ul>"#;
    let mut d = news("DD.MM.YYYY", None);
    d.url = Some("https://www.dbf2002.com/news.html".into());
    let (rows, _) = rows_for(d, html);
    assert_eq!(rows[0].fields[2], "https://www.dbf2002.com/dbfview.html");
}

#[test]
fn gap_reasons_are_reported_per_row() {
    use rowscrape::engine::classify::{classify, ClassifyPolicy};
    use rowscrape::engine::extract::Extractor;

    let html = r#"<table class="infobox">
        <tr><th>Only label</th></tr>
        <tr><td>Only value</td></tr>
        <tr><th></th><td></td></tr>
        <tr><th>Kept</th><td>yes</td></tr>
    </table>"#;
    let d = Deployment::new("kv", &[ExtractMode::KeyValue]);
    let page = Page::parse(html);
    let policy = ClassifyPolicy { key_value: Some(&d.key_value), ..ClassifyPolicy::default() };
    let regions = classify(&page.root(), &policy);
    let out = Extractor::default().extract(&regions[0]);

    assert_eq!(out.rows.len(), 1);
    assert_eq!(out.gaps, vec![
        (0, RowGap::MissingValueCell),
        (1, RowGap::MissingLabelCell),
        (2, RowGap::AllFieldsEmpty),
    ]);
}
