use anyhow::Result;
use dotenvy::dotenv;
use reddit_post_scraper::{Env, config, scrape_post};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // .env is optional; it only carries RUST_LOG
    dotenv().ok();
    env_logger::init();

    log::trace!("scrape_post::main");

    let env = Env::new();

    let mut args: Vec<String> = std::env::args().collect();
    // first arg is exe name; ignore it
    args.remove(0);
    if args.is_empty() {
        args.push(config::EXAMPLE_POST_URL.to_owned());
    }

    let mut failed = false;
    for url in args {
        match scrape_post(&env, &url).await {
            Ok(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
            Err(e) => {
                log::error!["failed to scrape {url}"];
                println!("{e}");
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
