mod adapters;
mod core;
mod global_constants;
mod user_settings;

use std::io::Write;
use std::sync::Arc;

use crate::adapters::DuckDuckGoSearchProvider;
use crate::core::interfaces::adapters::WebSearchProvider;
use crate::core::orchestrators::{SearchOrchestrator, SearchOutcome};
use crate::user_settings::UserSettings;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "{} Starting {}",
        global_constants::LOG_TAG_MAIN,
        global_constants::APPLICATION_NAME
    );

    let arguments: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    let outcome = SearchOrchestrator::run_with_arguments(&arguments, &mut output, || {
        let settings = UserSettings::load()?;
        let search_provider: Arc<dyn WebSearchProvider> =
            Arc::new(DuckDuckGoSearchProvider::build(&settings)?);
        Ok(search_provider)
    })?;
    output.flush()?;

    match outcome {
        SearchOutcome::ResultsPrinted => {
            log::info!("{} Search results written", global_constants::LOG_TAG_MAIN)
        }
        SearchOutcome::UsagePrinted => {
            log::info!("{} No keywords supplied", global_constants::LOG_TAG_MAIN)
        }
    }

    Ok(())
}
