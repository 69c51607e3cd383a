use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::PeriodLogic;
use crate::core::worktime::WorktimeLogic;
use crate::errors::AppResult;
use crate::export::range::resolve_range;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_diff};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worktime { range, sort } = cmd {
        let window = resolve_range(range.from.as_ref(), range.to.as_ref(), range.range.as_ref())?;

        let pool = PeriodLogic::open(cfg)?;
        let report = WorktimeLogic::report(&pool, &window, *sort)?;

        if report.summaries.is_empty() {
            info("No staff or attendance in this period.");
            return Ok(());
        }

        header(format!("Worktime ({})", window));

        let mut table = Table::new(&["姓名", "應到工時", "實際工時", "差異"]);
        for s in &report.summaries {
            let mut row = s.to_row();
            if let Some(diff) = row.last_mut() {
                *diff = format!("{}{}{}", color_for_diff(s.diff_minutes), diff, RESET);
            }
            table.add_row(row);
        }
        print!("{}", table.render());
    }
    Ok(())
}
