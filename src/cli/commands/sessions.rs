use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::worktime::total_minutes;
use crate::core::period::PeriodLogic;
use crate::core::worktime::WorktimeLogic;
use crate::errors::AppResult;
use crate::export::range::resolve_range;
use crate::ui::messages::{header, info};
use crate::utils::format_minutes;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sessions { name, range } = cmd {
        let window = resolve_range(range.from.as_ref(), range.to.as_ref(), range.range.as_ref())?;

        let pool = PeriodLogic::open(cfg)?;
        let sessions = WorktimeLogic::sessions_for(&pool, name, &window)?;

        if sessions.is_empty() {
            info(format!("No duty sessions for {} ({}).", name, window));
            return Ok(());
        }

        header(format!("Duty sessions of {} ({})", name, window));

        let mut table = Table::new(&["姓名", "簽到時間", "簽退時間", "值班時長"]);
        for s in &sessions {
            table.add_row(vec![
                s.name.clone(),
                s.clock_in_str(),
                s.clock_out_str(),
                s.duration_str(),
            ]);
        }
        print!("{}", table.render());

        println!(
            "\n{} session(s), total {}",
            sessions.len(),
            format_minutes(total_minutes(&sessions), false)
        );
    }
    Ok(())
}
