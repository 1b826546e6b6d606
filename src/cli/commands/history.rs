use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::{RatingBand, filter};
use crate::core::stats::summarize_tastings;
use crate::db::pool::DbPool;
use crate::db::queries::load_tastings_by_status;
use crate::errors::AppResult;
use crate::models::tasting::{Tasting, TastingStatus};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_rating};
use crate::utils::formatting::{bold, rating_dots};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { search, rating } = cmd {
        let band: RatingBand = match rating {
            Some(r) => r.parse()?,
            None => RatingBand::All,
        };

        let pool = DbPool::new(&cfg.database)?;
        let mut completed = load_tastings_by_status(&pool.conn, TastingStatus::Completed)?;
        completed.reverse(); // newest first

        let text = search.as_deref().unwrap_or("");
        let shown = filter(&completed, text, band);

        header(format!("History (rating: {})", band.as_str()));
        if shown.is_empty() {
            info("No tastings match the current filters.");
        } else {
            print_table(&shown, cfg);
        }

        // cards cover the whole history, not just the filtered rows
        let summary = summarize_tastings(&completed);
        println!();
        println!("Tastings       : {}", summary.count);
        println!("Average rating : {}", summary.average_rating);
        println!("Average length : {} min", summary.average_duration);
        println!("Best rating    : {}", rating_dots(summary.best_rating));
    }

    Ok(())
}

fn print_table(rows: &[&Tasting], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("Date", 10),
        Column::new("Name", 24),
        Column::new("Brand", 18),
        Column::new("Rating", 6),
        Column::new("Min", 4),
        Column::new("Flavors", 30),
        Column::new("Again?", 8),
    ]);
    for t in rows {
        table.add_row(vec![
            t.id.to_string(),
            t.started_at.format("%Y-%m-%d").to_string(),
            t.name.clone(),
            t.brand.clone(),
            format!("{}/10", t.rating_or_zero()),
            t.smoke_duration.unwrap_or(0).to_string(),
            t.flavors.join(", "),
            t.repurchase.map(|r| r.label().to_string()).unwrap_or_default(),
        ]);
    }

    let rendered = table.render(cfg.separator_char.chars().next().unwrap_or('-'));
    let mut lines = rendered.lines();
    for line in lines.by_ref().take(2) {
        println!("{}", bold(line));
    }
    for (line, t) in lines.zip(rows) {
        println!("{}{line}{RESET}", color_for_rating(t.rating_or_zero()));
        if let Some(notes) = &t.notes {
            println!("      “{notes}”");
        }
    }
}
