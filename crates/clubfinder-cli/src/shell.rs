//! Interactive search loop.
//!
//! Mirrors a search form: each round asks for an address and the two
//! optional thresholds, runs one search to completion, then prints the
//! session state. Results from the last successful search remain visible
//! after a rejected or failed one.

use std::io::Write as _;

use clubfinder_core::{AppConfig, SearchSession};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::search::{render_list, Searcher};

const QUIT_COMMANDS: [&str; 3] = [":q", "quit", "exit"];

pub(crate) async fn run_shell(searcher: &Searcher, config: &AppConfig) -> anyhow::Result<()> {
    let session = SearchSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "Searching clubs in {}. Leave a threshold blank for no limit; type :q to quit.",
        config.locality
    );

    loop {
        let Some(address) = prompt(&mut lines, "Address: ").await? else {
            break;
        };
        if QUIT_COMMANDS.contains(&address.trim()) {
            break;
        }
        let Some(min_rating) = prompt(&mut lines, "Minimum rating (0-5): ").await? else {
            break;
        };
        let Some(max_distance) = prompt(&mut lines, "Maximum distance (km): ").await? else {
            break;
        };

        session_round(searcher, &session, &address, &min_rating, &max_distance).await;
    }

    Ok(())
}

async fn session_round(
    searcher: &Searcher,
    session: &SearchSession,
    address: &str,
    min_rating: &str,
    max_distance: &str,
) {
    searcher
        .run(session, address, min_rating, max_distance)
        .await;
    let state = session.snapshot();
    if let Some(notice) = &state.notice {
        println!("! {notice}");
    }
    print!("{}", render_list(&state));
}

async fn prompt<R>(
    lines: &mut tokio::io::Lines<R>,
    label: &str,
) -> anyhow::Result<Option<String>>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}
