// src/cli.rs
//
// Headless front-end: pull one table from the API and print or export it.
// Arg parsing is by hand; the surface is small enough not to want a crate.

use std::env;

use chrono::{Local, NaiveDate};
use color_eyre::{Result, eyre::eyre};

use crate::{
    api::{self, ApiClient},
    config::{
        consts::{RANKING_LIMIT, WEEKLY_RANKING_LIMIT},
        options::{ExportFormat, ExportOptions},
    },
    csv, file,
    table::{self, DataSet},
    week::WeekRef,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CliPage {
    Academies,
    Teachers,
    Ranking,
    Daily,
    Weekly,
    Reputation,
}

struct Params {
    page: CliPage,
    academy: Option<u64>,
    date: Option<NaiveDate>,
    year: Option<i32>,
    week: Option<u32>,
    limit: Option<usize>,
    keyword: Option<String>,
    api_url: Option<String>,
    out: Option<String>,
    format: ExportFormat,
    include_headers: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            page: CliPage::Ranking,
            academy: None,
            date: None,
            year: None,
            week: None,
            limit: None,
            keyword: None,
            api_url: None,
            out: None,
            format: ExportFormat::Csv,
            include_headers: false,
        }
    }
}

pub fn run() -> Result<()> {
    let params = parse_cli()?;

    let api = match &params.api_url {
        Some(url) => ApiClient::new(url)?,
        None => ApiClient::from_env()?,
    };

    // Keyword stats are a report, not a table; print and stop.
    if let Some(keyword) = &params.keyword {
        let stats = api::legacy::stats(&api, keyword)?;
        println!("keyword: {}", stats.keyword);
        println!("posts: {}", stats.total_posts);
        println!("comments: {}", stats.total_comments);
        for m in &stats.monthly_stats {
            println!("{},{}", m.month, m.post_count);
        }
        return Ok(());
    }

    let ds = fetch_table(&api, &params)?;
    logf!("CLI: page fetched, rows={}", ds.row_count());

    match &params.out {
        Some(out) => {
            let resolved = file::resolve_out_path(out, default_stem(params.page))
                .map_err(|e| eyre!("bad output path: {e}"))?;
            let mut export = ExportOptions {
                format: params.format.clone(),
                include_headers: params.include_headers,
                ..ExportOptions::default()
            };
            export.set_path(&resolved.to_string_lossy());
            let path = file::write_export(&export, &ds)
                .map_err(|e| eyre!("export failed: {e}"))?;
            eprintln!("Saved: {}", path.display());
        }
        None => {
            let text = csv::to_export_string(
                &ds.headers,
                &ds.rows,
                params.include_headers,
                params.format.delim(),
            );
            print!("{text}");
        }
    }
    Ok(())
}

fn default_stem(page: CliPage) -> &'static str {
    match page {
        CliPage::Academies => "academies",
        CliPage::Teachers => "teachers",
        CliPage::Ranking => "ranking",
        CliPage::Daily => "daily",
        CliPage::Weekly => "weekly",
        CliPage::Reputation => "reputation",
    }
}

fn fetch_table(api: &ApiClient, params: &Params) -> Result<DataSet> {
    let today = Local::now().date_naive();
    let ds = match params.page {
        CliPage::Academies => table::academies(&api::academies::all(api)?),
        CliPage::Teachers => table::teachers(&api::teachers::all(api, params.academy)?),
        CliPage::Ranking => table::teacher_ranking(&api::analysis::ranking(
            api,
            params.date,
            params.limit.unwrap_or(RANKING_LIMIT),
        )?),
        CliPage::Daily => {
            let report = api::reports::daily(api, params.date.unwrap_or(today))?;
            table::daily_reports(&report.teacher_summaries)
        }
        CliPage::Weekly => {
            let current = WeekRef::current();
            let year = params.year.unwrap_or(current.year);
            let week = params.week.unwrap_or(current.week);
            table::weekly_ranking(&api::weekly::ranking(
                api,
                year,
                week,
                params.limit.unwrap_or(WEEKLY_RANKING_LIMIT),
            )?)
        }
        CliPage::Reputation => table::reputation(&api::legacy::reputation(api)?),
    };
    Ok(ds)
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --page"))?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "academies" => CliPage::Academies,
                    "teachers" => CliPage::Teachers,
                    "ranking" => CliPage::Ranking,
                    "daily" => CliPage::Daily,
                    "weekly" => CliPage::Weekly,
                    "reputation" => CliPage::Reputation,
                    other => return Err(eyre!("Unknown page: {other}")),
                };
            }
            "--academy" => {
                let v = args.next().ok_or_else(|| eyre!("Missing academy id"))?;
                params.academy = Some(v.parse()?);
            }
            "--date" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --date"))?;
                params.date = Some(v.parse()?);
            }
            "--year" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --year"))?;
                params.year = Some(v.parse()?);
            }
            "--week" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --week"))?;
                let w: u32 = v.parse()?;
                if !(1..=53).contains(&w) {
                    return Err(eyre!("Week out of range (1..53)"));
                }
                params.week = Some(w);
            }
            "--limit" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --limit"))?;
                params.limit = Some(v.parse()?);
            }
            "--keyword" => {
                params.keyword = Some(args.next().ok_or_else(|| eyre!("Missing keyword"))?);
            }
            "--api" => {
                params.api_url = Some(args.next().ok_or_else(|| eyre!("Missing API url"))?);
            }
            "-o" | "--out" => {
                params.out = Some(args.next().ok_or_else(|| eyre!("Missing output path"))?);
            }
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(eyre!("Unknown format: {other}")),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }
    Ok(params)
}
