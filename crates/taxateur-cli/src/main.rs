//! Interactive CLI for the taxateur directory scraper
//!
//! Lists the expertise categories, reads a 1-based selection from
//! stdin, scrapes every result page for that category and writes a
//! timestamped CSV into the working directory. Every error ends the
//! run with a single `Something went wrong` line.

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;

use taxateur_core::{
    ClientConfig, DirectoryScraper, Result, ScrapeProgress, select_expertise,
};

#[derive(Parser, Debug)]
#[command(name = "taxateur", about = "Scrape the NRVT taxateur directory to CSV")]
struct Args {
    /// Scheme and host of the directory site
    #[arg(long, default_value = "https://www.nrvt.nl")]
    base_url: String,

    /// Path of the directory page on that host
    #[arg(long, default_value = "/vind-een-taxateur")]
    base_path: String,

    /// Minimum interval between requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            base_path: self.base_path.clone(),
            timeout_secs: self.timeout_secs,
            page_delay_ms: self.delay_ms,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(error) = run(&args).await {
        println!("Something went wrong: {}", error);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let scraper = DirectoryScraper::with_config(args.client_config())?;

    let expertises = scraper.expertises().await?;
    for (index, expertise) in expertises.iter().enumerate() {
        println!("{}. {}", index + 1, expertise.name);
    }

    println!("Select expertise and press ENTER");
    let line = read_selection_line()?;
    let chosen = select_expertise(&expertises, &line)?;

    scraper
        .run(chosen, Path::new("."), |progress| match progress {
            ScrapeProgress::ComputingPageCount => {}
            ScrapeProgress::RetrievingPage { page, total } => {
                println!("Retrieving page {}/{}", page, total);
            }
            ScrapeProgress::Exporting { filename } => {
                println!("Writing {}", filename);
            }
        })
        .await?;

    println!("Completed");
    Ok(())
}

fn read_selection_line() -> Result<String> {
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
