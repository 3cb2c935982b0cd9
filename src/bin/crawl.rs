//! Batch contact crawler.
//!
//! ```text
//! crawl https://example.com
//! crawl --input urls.txt --output results/output.json
//! ```
//!
//! Each URL produces one JSON record; fetch failures are recorded inline as
//! `{"url": ..., "error": ...}` instead of aborting the batch.

use contactrs::{fetch, ContactExtractor};
use serde_json::{json, Value};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut urls: Vec<String> = Vec::new();
    let mut output = PathBuf::from("results/output.json");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let path = args.next().ok_or("--input requires a file path")?;
                for line in fs::read_to_string(&path)?.lines() {
                    let line = line.trim();
                    if !line.is_empty() {
                        urls.push(line.to_string());
                    }
                }
            }
            "--output" | "-o" => {
                output = PathBuf::from(args.next().ok_or("--output requires a file path")?);
            }
            _ => urls.push(arg),
        }
    }

    if urls.is_empty() {
        eprintln!("Usage: crawl [URL ...] [--input urls.txt] [--output results/output.json]");
        process::exit(2);
    }

    let client = fetch::default_client();
    let mut results: Vec<Value> = Vec::new();

    for url in &urls {
        info!("crawling {url}");
        match crawl_one(&client, url).await {
            Ok(record) => results.push(record),
            Err(e) => {
                error!("error crawling {url}: {e}");
                results.push(json!({ "url": url, "error": e.to_string() }));
            }
        }
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output, serde_json::to_string_pretty(&results)?)?;
    info!("saved {}", output.display());

    Ok(())
}

async fn crawl_one(client: &reqwest::Client, url: &str) -> contactrs::Result<Value> {
    let (html, final_url) = fetch::fetch_html(client, url).await?;
    let result = ContactExtractor::new(&html, &final_url, None)?.extract();
    Ok(serde_json::to_value(result)?)
}
