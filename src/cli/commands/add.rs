use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_guests;
use crate::errors::AppResult;
use crate::ui::view::WaitlistView;

/// Add a guest, then re-read the whole table and replace the displayed
/// snapshot. The view is never patched row by row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, size, notes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let mut view = WaitlistView::bind(load_all_guests(&mut pool)?);

        let inserted = AddLogic::apply(
            &mut pool,
            name,
            size.as_deref().unwrap_or(""),
            notes,
            cfg,
        )?;

        if inserted.is_some() {
            view.refresh(load_all_guests(&mut pool)?);
        }

        println!("{}", view.render(cfg.show_notes));
    }

    Ok(())
}
