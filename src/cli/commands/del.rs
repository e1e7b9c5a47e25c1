use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_guests;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::view::WaitlistView;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, all } = cmd {
        if id.is_none() && !*all {
            warning("Nothing to delete: pass a guest id or --all.");
            return Ok(());
        }

        let prompt = match id {
            Some(id) => format!(
                "Remove guest #{} from the waitlist? This action is irreversible.",
                id
            ),
            None => "Clear the ENTIRE waitlist? This action is irreversible.".to_string(),
        };

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let mut view = WaitlistView::bind(load_all_guests(&mut pool)?);

        let removed = DeleteLogic::apply(&mut pool, *id)?;

        if removed == 0 {
            match id {
                Some(id) => warning(format!("No guest with id {} on the waitlist.", id)),
                None => warning("The waitlist is already empty."),
            }
            return Ok(());
        }

        match id {
            Some(id) => success(format!("Removed guest #{} from the waitlist.", id)),
            None => success(format!("Cleared {} guest(s) from the waitlist.", removed)),
        }

        view.refresh(load_all_guests(&mut pool)?);
        println!("{}", view.render(cfg.show_notes));
    }

    Ok(())
}
