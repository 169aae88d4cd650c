// src/cli.rs
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::warn;

use crate::config::{Deployment, ExportFormat, ExportOptions};
use crate::core::net;
use crate::engine::Pipeline;
use crate::{file, specs, Error};

/// Exit status when the page yielded no rows at all.
pub const EXIT_NO_DATA: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "rowscrape", version, about = "Extract tables, key/value panels and entry lists from a page into CSV/TSV")]
pub struct Args {
    /// Built-in deployment (see --list-presets)
    #[arg(long, conflicts_with = "config")]
    pub preset: Option<String>,

    /// Deployment TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Saved HTML snapshot; `-` reads stdin
    #[arg(long, value_name = "FILE|-", conflicts_with = "url")]
    pub input: Option<String>,

    /// Fetch this page instead of the deployment's URL
    #[arg(long)]
    pub url: Option<String>,

    /// Resolve relative entry links against this URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output file, or a directory ending in a separator
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    pub out: Option<String>,

    #[arg(long, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Leave out the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Write to stdout instead of a file
    #[arg(long)]
    pub print: bool,

    #[arg(long)]
    pub list_presets: bool,

    /// -v debug, -vv trace (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<ExitCode> {
    run_with(args, &mut io::stdout().lock(), &mut io::stderr())
}

/// `run` with the user-facing messages (and `--print` output) sent to `out` and `err`.
pub fn run_with<O: Write, E: Write>(args: Args, out: &mut O, err: &mut E) -> Result<ExitCode> {
    if args.list_presets {
        for name in specs::names() {
            writeln!(out, "{name}")?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let deployment = load_deployment(&args)?;
    let html = read_page(&args, &deployment)?;

    let mut pipeline = Pipeline::new(deployment.clone())?;
    if let Some(base) = args.base_url.as_deref().or(args.url.as_deref()) {
        let base = url::Url::parse(base).wrap_err_with(|| format!("Invalid base URL: {base}"))?;
        pipeline = pipeline.with_base_url(base);
    }

    let extraction = match pipeline.run_html(&html).map_err(Error::from) {
        Ok(x) => x,
        Err(e) if e.is_no_data() => {
            warn!(deployment = %deployment.name, "nothing extracted");
            writeln!(err, "{e}")?;
            return Ok(ExitCode::from(EXIT_NO_DATA));
        }
        Err(e) => return Err(e.into()),
    };

    let mut export = ExportOptions::for_deployment(&deployment);
    export.format = args.format;
    export.include_headers = !args.no_headers;
    if let Some(path) = &args.out {
        export.set_path(path);
    }

    if args.print {
        file::print_dataset(&mut *out, &export, &extraction.dataset)?;
    } else {
        let path = file::write_dataset(&export, &extraction.dataset)
            .wrap_err("Failed to write dataset")?;
        writeln!(
            out,
            "Scraping complete. {} rows saved as '{}'.",
            extraction.dataset.len(),
            path.display()
        )?;
    }
    let skipped = extraction.report.skipped();
    if skipped > 0 {
        writeln!(err, "Skipped {skipped} malformed rows (run with -v for details).")?;
    }
    Ok(ExitCode::SUCCESS)
}

fn load_deployment(args: &Args) -> Result<Deployment> {
    match (&args.preset, &args.config) {
        (Some(name), _) => Ok(specs::preset(name)?),
        (None, Some(path)) => Ok(Deployment::load(path)?),
        (None, None) => Err(eyre!("Specify --preset <name> or --config <file> (see --list-presets)")),
    }
}

fn read_page(args: &Args, deployment: &Deployment) -> Result<String> {
    if let Some(input) = &args.input {
        if input == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).wrap_err("Failed to read stdin")?;
            return Ok(buf);
        }
        return std::fs::read_to_string(input).wrap_err_with(|| format!("Failed to read {input}"));
    }
    let url = args.url.as_deref()
        .or(deployment.url.as_deref())
        .ok_or_else(|| eyre!("No input: pass --input, --url, or use a deployment with a url"))?;
    Ok(net::http_get(url)?)
}
