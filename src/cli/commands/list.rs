use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_guests;
use crate::errors::AppResult;
use crate::ui::view::WaitlistView;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let mut pool = DbPool::new(&cfg.database)?;

        let view = WaitlistView::bind(load_all_guests(&mut pool)?);
        println!("{}", view.render(cfg.show_notes));
    }

    Ok(())
}
