// tests/cli_run.rs
//
// The command-line front end over saved page snapshots: exit codes, files, messages.
//
#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use rowscrape::cli::{run_with, Args, EXIT_NO_DATA};
use rowscrape::{csv, row};

const WIKI_PAGE: &str = r#"<html><body>
<table class="infobox">
  <tr><th colspan="2">SUSE Linux Enterprise</th></tr>
  <tr><th>Developer</th><td>SUSE</td></tr>
</table>
<table class="wikitable">
  <tr><th>Version</th><th>Release</th></tr>
  <tr><td>15</td><td>2018-06-25</td></tr>
</table>
</body></html>"#;

const NEWS_PAGE: &str = r#"<html><body><ul>
  <li>14.02.2024 <a href="dbfview.html">DBF Viewer 2000 v8.35</a> released</li>
</ul></body></html>"#;

struct Outcome {
    code: ExitCode,
    out: String,
    err: String,
}

fn run(argv: &[&str]) -> Outcome {
    let args = Args::parse_from(std::iter::once("rowscrape").chain(argv.iter().copied()));
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = run_with(args, &mut out, &mut err).unwrap();
    Outcome {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn snapshot(dir: &Path, name: &str, html: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, html).unwrap();
    path.display().to_string()
}

#[test]
fn page_without_regions_exits_2_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let input = snapshot(tmp.path(), "moved.html", "<html><body><p>Moved.</p></body></html>");
    let target = tmp.path().join("o.csv");

    let got = run(&["--preset", "dotnet-core", "--input", &input, "-o", &target.display().to_string()]);

    assert_eq!(got.code, ExitCode::from(EXIT_NO_DATA));
    assert_eq!(got.code, ExitCode::from(2));
    assert_eq!(got.err, "No data found.\n");
    assert!(got.out.is_empty());
    assert!(!target.exists());
}

#[test]
fn success_writes_file_and_reports_it() {
    let tmp = tempfile::tempdir().unwrap();
    let input = snapshot(tmp.path(), "suse.html", WIKI_PAGE);
    let target = tmp.path().join("out/suse.csv");

    let got = run(&["--preset", "suse", "--input", &input, "-o", &target.display().to_string()]);

    assert_eq!(got.code, ExitCode::SUCCESS);
    assert_eq!(got.out, format!("Scraping complete. 2 rows saved as '{}'.\n", target.display()));
    assert_eq!(got.err, "Skipped 1 malformed rows (run with -v for details).\n");
    assert_eq!(csv::parse_rows(&fs::read_to_string(&target).unwrap(), ','), vec![
        row!["Source", "Key", "Col_1"],
        row!["infobox", "Developer", "SUSE"],
        row!["table_2", "15", "2018-06-25"],
    ]);
}

#[test]
fn print_goes_to_stdout_in_the_chosen_format() {
    let tmp = tempfile::tempdir().unwrap();
    let input = snapshot(tmp.path(), "news.html", NEWS_PAGE);
    let target = tmp.path().join("unused.tsv");

    let got = run(&[
        "--preset", "dbf-news", "--input", &input, "--print", "--format", "tsv", "--no-headers",
        "-o", &target.display().to_string(),
    ]);

    assert_eq!(got.code, ExitCode::SUCCESS);
    assert_eq!(got.out, "news_list\tv8.35\t2024-02-14\thttps://www.dbf2002.com/dbfview.html\n");
    assert!(got.err.is_empty());
    assert!(!target.exists());
}

#[test]
fn base_url_flag_beats_deployment_url() {
    let tmp = tempfile::tempdir().unwrap();
    let input = snapshot(tmp.path(), "news.html", NEWS_PAGE);

    let got = run(&[
        "--preset", "dbf-news", "--input", &input, "--print", "--base-url", "https://mirror.example/dbf/",
    ]);

    let rows = csv::parse_rows(&got.out, ',');
    assert_eq!(rows[1][3], "https://mirror.example/dbf/dbfview.html");
}

#[test]
fn config_file_drives_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let input = snapshot(tmp.path(), "news.html", NEWS_PAGE);
    let config = tmp.path().join("news.toml");
    fs::write(&config, "name = \"news\"\nmodes = [\"pattern\"]\n[pattern]\ndate_format = \"%d.%m.%Y\"\n").unwrap();

    let got = run(&["--config", &config.display().to_string(), "--input", &input, "--print"]);

    assert_eq!(csv::parse_rows(&got.out, ','), vec![
        row!["Source", "Col_1", "Col_2", "Col_3"],
        row!["news_list", "DBF Viewer 2000 v8.35", "2024-02-14", "dbfview.html"],
    ]);
}

#[test]
fn list_presets_prints_names() {
    let got = run(&["--list-presets"]);
    assert_eq!(got.code, ExitCode::SUCCESS);
    let names: Vec<&str> = got.out.lines().collect();
    assert!(names.contains(&"suse") && names.contains(&"dbf-news"));
}

#[test]
fn input_and_url_are_exclusive() {
    let parsed = Args::try_parse_from(["rowscrape", "--preset", "suse", "--input", "a.html", "--url", "https://x/"]);
    assert!(parsed.is_err());
    let parsed = Args::try_parse_from(["rowscrape", "--preset", "suse", "--config", "a.toml"]);
    assert!(parsed.is_err());
}
