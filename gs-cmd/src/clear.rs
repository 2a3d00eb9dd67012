//! Delete all saved calculations.

use gs_api::ApiClient;
use log::info;
use std::io::{BufRead, Write};

pub async fn run_clear(api: &ApiClient, yes: bool) -> anyhow::Result<()> {
    if !yes {
        print!("Delete all saved calculations? This cannot be undone. [y/N] ");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        if !is_affirmative(&answer) {
            println!("Aborted");
            return Ok(());
        }
    }
    api.clear_calculations().await?;
    info!("History cleared");
    println!("History cleared");
    Ok(())
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
