//! Interactive menu for running the tool without memorizing flags.
//!
//! Provides a menu-driven interface using `dialoguer`; defaults come from
//! the same environment variables the flags fall back to.

use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};
use resume_extract_cli_utils::MultiProgress;

use crate::config::ExtractConfig;

/// Top-level actions available in the interactive menu.
enum Action {
    Extract,
    ListFiles,
}

impl Action {
    const ALL: &[Self] = &[Self::Extract, Self::ListFiles];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Extract => "Extract contact details to a spreadsheet",
            Self::ListFiles => "List PDF files in the data folder",
        }
    }
}

/// Prompts the user for an action and its settings, then runs it.
///
/// # Errors
///
/// Returns an error if a prompt fails or the selected action fails.
pub fn run(multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = ExtractConfig::from_env();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    let data_dir: String = Input::new()
        .with_prompt("Resume folder")
        .default(defaults.data_dir.display().to_string())
        .interact_text()?;
    let data_dir = PathBuf::from(data_dir);

    match Action::ALL[idx] {
        Action::ListFiles => crate::run::scan(&data_dir)?,
        Action::Extract => {
            let output: String = Input::new()
                .with_prompt("Output spreadsheet")
                .default(defaults.output.display().to_string())
                .interact_text()?;

            let max_pages: usize = Input::new()
                .with_prompt("Pages to read per resume")
                .default(defaults.max_pages)
                .interact_text()?;

            let summary_json = Confirm::new()
                .with_prompt("Also write a JSON summary next to the spreadsheet?")
                .default(false)
                .interact()?;

            let output = PathBuf::from(output);
            let config = ExtractConfig {
                summary_json: summary_json.then(|| output.with_extension("summary.json")),
                data_dir,
                output,
                max_pages: max_pages.max(1),
            };

            crate::run::extract(&config, multi)?;
        }
    }

    Ok(())
}
