use crate::cli::parser::{Commands, TasteAction};
use crate::config::Config;
use crate::core::stats::summarize_tastings;
use crate::core::tasting::{TastingLogic, elapsed_label};
use crate::db::pool::DbPool;
use crate::db::queries::load_tastings_by_status;
use crate::errors::{AppError, AppResult};
use crate::models::session::{Cut, Draw, Moment, SessionSetup};
use crate::models::tasting::{FinishData, Repurchase, TastingStatus};
use crate::ui::messages::{header, success, warning};
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Taste { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        TasteAction::Start {
            cigar_id,
            cut,
            moment,
            draw,
            vitola,
        } => {
            let setup = SessionSetup {
                cut: parse_choice("cut", cut.as_deref(), Cut::from_code)?,
                moment: parse_choice("moment", moment.as_deref(), Moment::from_code)?,
                draw: parse_choice("draw", draw.as_deref(), Draw::from_code)?,
                vitola: vitola.clone().filter(|v| !v.trim().is_empty()),
            };

            let t = TastingLogic::start(&mut pool, *cigar_id, setup, Local::now())?;
            success(format!("Tasting #{} started: {} / {}", t.id, t.name, t.brand));
        }
        TasteAction::Finish {
            id,
            rating,
            duration,
            repurchase,
            flavors,
            notes,
            band_photo,
        } => {
            let data = FinishData {
                rating: parse_rating(*rating)?,
                smoke_duration: *duration,
                flavors: flavors.clone(),
                repurchase: Repurchase::from_code(repurchase)
                    .ok_or_else(|| AppError::InvalidRepurchase(repurchase.clone()))?,
                notes: notes.clone(),
                band_photo: band_photo.clone(),
            };

            warn_unknown_flavors(&data.flavors, &cfg.flavors);

            let t = TastingLogic::finish(&mut pool, *id, data, Local::now())?;
            success(format!(
                "Tasting #{} finished: {} rated {}/10",
                t.id,
                t.name,
                t.rating_or_zero()
            ));
        }
        TasteAction::Del { id } => {
            let t = TastingLogic::remove(&mut pool, *id)?;
            success(format!("Tasting #{} removed: {} / {}", t.id, t.name, t.brand));
        }
        TasteAction::List => print_sessions(&mut pool, cfg)?,
    }

    Ok(())
}

pub(crate) fn parse_rating(raw: i64) -> AppResult<u8> {
    u8::try_from(raw)
        .ok()
        .filter(|r| *r <= 10)
        .ok_or(AppError::InvalidRating(raw))
}

fn parse_choice<T>(field: &'static str, raw: Option<&str>, parse: fn(&str) -> Option<T>) -> AppResult<Option<T>> {
    match raw {
        None => Ok(None),
        Some(v) => parse(v).map(Some).ok_or_else(|| AppError::InvalidChoice {
            field,
            value: v.to_string(),
        }),
    }
}

/// Tags outside the palette are stored anyway; they just never match a dashboard filter
/// unless typed the same way.
fn warn_unknown_flavors(flavors: &[String], palette: &[String]) {
    for f in flavors {
        if !palette.iter().any(|p| p == f.trim()) {
            warning(format!("'{}' is not in the flavor palette", f.trim()));
        }
    }
}

fn print_sessions(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
    let active = load_tastings_by_status(&pool.conn, TastingStatus::Active)?;
    let completed = load_tastings_by_status(&pool.conn, TastingStatus::Completed)?;
    let now = Local::now();

    header("Active sessions");
    if active.is_empty() {
        println!("No cigar is being smoked right now.");
    } else {
        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Name", 24),
            Column::new("Brand", 18),
            Column::new("Started", 16),
            Column::new("Elapsed", 10),
            Column::new("Setup", 30),
        ]);
        for t in &active {
            let setup: Vec<&str> = [
                t.setup.cut.map(|c| c.label()),
                t.setup.moment.map(|m| m.label()),
                t.setup.draw.map(|d| d.label()),
                t.setup.vitola.as_deref(),
            ]
            .into_iter()
            .flatten()
            .collect();

            table.add_row(vec![
                t.id.to_string(),
                t.name.clone(),
                t.brand.clone(),
                t.started_at.format("%Y-%m-%d %H:%M").to_string(),
                elapsed_label(t.started_at, now),
                setup.join(", "),
            ]);
        }
        print!("{}", table.render(cfg.separator_char.chars().next().unwrap_or('-')));
    }

    let summary = summarize_tastings(&completed);
    println!();
    println!("Completed      : {}", summary.count);
    println!("Average rating : {}", summary.average_rating);
    println!("Average length : {} min", summary.average_duration);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert_eq!(parse_rating(0).unwrap(), 0);
        assert_eq!(parse_rating(10).unwrap(), 10);
        assert!(matches!(parse_rating(11), Err(AppError::InvalidRating(11))));
        assert!(matches!(parse_rating(-2), Err(AppError::InvalidRating(-2))));
    }

    #[test]
    fn unknown_choice_names_the_field() {
        let res = parse_choice("cut", Some("guillotine"), Cut::from_code);
        assert!(matches!(res, Err(AppError::InvalidChoice { field: "cut", .. })));
        assert_eq!(parse_choice("cut", None, Cut::from_code).unwrap(), None);
        assert_eq!(parse_choice("draw", Some("tight"), Draw::from_code).unwrap(), Some(Draw::Tight));
    }
}
