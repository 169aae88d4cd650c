// src/specs/dbf.rs
use crate::config::deployment::{Deployment, PatternSection};
use crate::engine::ExtractMode::Pattern;

/// News page: `<ul><li>DD.MM.YYYY <a href=…>Product vX.Y.Z</a> …</li></ul>`
pub fn news() -> Deployment {
    let mut d = Deployment::new("dbf-news", &[Pattern]);
    d.url = Some(s!("https://www.dbf2002.com/news.html"));
    d.output = Some(s!("dbf_news.csv"));

    let mut p = PatternSection::new("DD.MM.YYYY");
    p.token_regex = Some(s!(r"v\d+\.\d+(\.\d+)?"));
    d.pattern = Some(p);

    d.columns.names = row!["Version", "Date", "URL"];
    d
}
