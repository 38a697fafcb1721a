// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{RosterOptions, SourceOptions};
use crate::config::consts::{DEFAULT_AVATARS_DIR, DEFAULT_OUT_FILE, SHEET_GID, SHEET_ID};
use crate::core::net;
use crate::progress::Progress;
use crate::specs::{roblox::RobloxApi, sheet};

/// Generate the troopers page from the roster spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "generate_roster", version, about, long_about = None)]
pub struct Args {
    /// Re-download all regular trooper avatars (leadership stays cached)
    #[arg(long)]
    pub reload_all: bool,

    /// Spreadsheet id of the roster export
    #[arg(long, default_value = SHEET_ID)]
    pub sheet_id: String,

    /// Sheet tab (gid) of the roster export
    #[arg(long, default_value = SHEET_GID)]
    pub gid: String,

    /// Read a local CSV export instead of fetching the sheet
    #[arg(long, value_name = "PATH", conflicts_with_all = ["sheet_id", "gid"])]
    pub sheet_file: Option<PathBuf>,

    /// Output HTML document
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Avatar cache directory
    #[arg(long, value_name = "DIR", default_value = DEFAULT_AVATARS_DIR)]
    pub avatars_dir: PathBuf,

    /// `src` prefix for avatars in the page (default: avatar dir relative to the page)
    #[arg(long, value_name = "HREF")]
    pub avatars_href: Option<String>,

    /// Also write the parsed records as JSON
    #[arg(long, value_name = "PATH")]
    pub dump_json: Option<PathBuf>,

    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> RosterOptions {
        let mut opts = RosterOptions::default();
        opts.source = match &self.sheet_file {
            Some(path) => SourceOptions::File(path.clone()),
            None => SourceOptions::Sheet { sheet_id: self.sheet_id.clone(), gid: self.gid.clone() },
        };
        opts.avatars.dir = self.avatars_dir.clone();
        opts.avatars.rel_prefix = match &self.avatars_href {
            Some(href) => href.clone(),
            None => opts.avatars.href_from(&self.out).unwrap_or_else(|| {
                logw!(
                    "Can't reach {} from {}; pass --avatars-href. Using the directory as given.",
                    self.avatars_dir.display(),
                    self.out.display()
                );
                self.avatars_dir.to_string_lossy().replace('\\', "/")
            }),
        };
        opts.avatars.reload_all = self.reload_all;
        opts.output.document = self.out.clone();
        opts.output.json_dump = self.dump_json.clone();
        opts
    }
}

/// Prints progress lines straight to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn finish(&mut self) {
        println!("Done.");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    let opts = args.to_options();

    let client = net::client().wrap_err("building HTTP client")?;

    println!("Fetching sheet...");
    let rows = sheet::load_rows(&client, &opts.source).wrap_err("loading roster sheet")?;

    let mut lookup = RobloxApi::new(client.clone());
    let mut avatars = RobloxApi::new(client);
    let summary = crate::runner::run(&opts, &rows, &mut lookup, &mut avatars, &mut ConsoleProgress)
        .wrap_err("generating roster page")?;

    println!("{} troopers listed", summary.records);
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
