//! Search orchestration: validate, geocode, fetch, filter, apply.
//!
//! Every failure is turned into a [`SearchOutcome`] and applied to the
//! session like any other result, so no error escapes a search and the
//! previous results stay on screen when a search fails.

mod render;

use std::process::ExitCode;

use clap::ValueEnum;
use clubfinder_client::{ClientError, ClubsClient, GeocodeClient};
use clubfinder_core::{
    run_pipeline, validate_address, AppConfig, ClubFieldKeys, FilterCriteria, SearchOutcome,
    SearchSession,
};

pub(crate) use render::{render_json, render_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    List,
    Json,
}

/// The two HTTP clients plus the backend field mapping.
pub(crate) struct Searcher {
    geocoder: GeocodeClient,
    clubs: ClubsClient,
    field_keys: ClubFieldKeys,
}

impl Searcher {
    pub(crate) fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self::new(
            GeocodeClient::from_config(config)?,
            ClubsClient::from_config(config)?,
            config.field_keys.clone(),
        ))
    }

    pub(crate) fn new(
        geocoder: GeocodeClient,
        clubs: ClubsClient,
        field_keys: ClubFieldKeys,
    ) -> Self {
        Self {
            geocoder,
            clubs,
            field_keys,
        }
    }

    /// Runs one search. Never fails; problems are reported as outcomes.
    pub(crate) async fn search(
        &self,
        address: &str,
        min_rating: &str,
        max_distance: &str,
    ) -> SearchOutcome {
        let address = match validate_address(address) {
            Ok(a) => a,
            Err(e) => return SearchOutcome::Rejected(e),
        };
        let criteria = match FilterCriteria::parse(min_rating, max_distance) {
            Ok(c) => c,
            Err(e) => return SearchOutcome::Rejected(e),
        };

        let location = match self.geocoder.geocode(address).await {
            Ok(location) => location,
            Err(ClientError::AddressNotFound { .. }) => {
                return SearchOutcome::NotFound {
                    address: address.to_string(),
                };
            }
            Err(e) => {
                tracing::error!(address, error = %e, "geocoding failed");
                return SearchOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let raw = match self.clubs.fetch_all().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(url = %self.clubs.url(), error = %e, "fetching clubs failed");
                return SearchOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let matches = run_pipeline(location, &raw, &self.field_keys, &criteria);
        SearchOutcome::Found { location, matches }
    }

    /// Runs a search under a fresh ticket and applies its outcome to `session`.
    ///
    /// Returns the process exit status matching the outcome.
    pub(crate) async fn run(
        &self,
        session: &SearchSession,
        address: &str,
        min_rating: &str,
        max_distance: &str,
    ) -> u8 {
        let ticket = session.begin();
        let outcome = self.search(address, min_rating, max_distance).await;
        let status = exit_status(&outcome);
        session.complete(ticket, outcome);
        status
    }
}

/// `0` for a completed search, `1` for failures, `2` for rejected input or
/// an unknown address.
pub(crate) fn exit_status(outcome: &SearchOutcome) -> u8 {
    match outcome {
        SearchOutcome::Found { .. } => 0,
        SearchOutcome::Failed { .. } => 1,
        SearchOutcome::Rejected(_) | SearchOutcome::NotFound { .. } => 2,
    }
}

/// Handler for `clubfinder search`.
pub(crate) async fn run_search_command(
    searcher: &Searcher,
    config: &AppConfig,
    address: &str,
    min_rating: &str,
    max_distance: &str,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let session = SearchSession::new();
    let status = searcher
        .run(&session, address, min_rating, max_distance)
        .await;
    let state = session.snapshot();

    if let Some(notice) = &state.notice {
        eprintln!("{notice}");
    }
    match format {
        OutputFormat::List => print!("{}", render_list(&state)),
        OutputFormat::Json => println!("{}", render_json(&state, config)?),
    }
    Ok(ExitCode::from(status))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
