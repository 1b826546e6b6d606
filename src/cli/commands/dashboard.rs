use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recommend::{available_stock, recommend};
use crate::core::stats::{summarize_inventory, summarize_tastings};
use crate::db::pool::DbPool;
use crate::db::queries::{load_cigars, load_tastings_by_status};
use crate::errors::AppResult;
use crate::models::recommendation::Recommendation;
use crate::models::tasting::TastingStatus;
use crate::ui::messages::{header, info};
use crate::utils::formatting::rating_dots;
use crate::utils::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { flavors } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let inventory = load_cigars(&pool.conn)?;
        let completed = load_tastings_by_status(&pool.conn, TastingStatus::Completed)?;

        let stock = summarize_inventory(&inventory);
        let tastings = summarize_tastings(&completed);

        header("Collection");
        println!("Units in stock : {}", stock.total_units);
        println!("Stock value    : {}", money(&stock.total_value, &cfg.currency));
        println!("Tastings       : {}", tastings.count);
        println!("Average rating : {}", tastings.average_rating);
        println!("Average length : {} min", tastings.average_duration);
        println!("Best rating    : {}", rating_dots(tastings.best_rating));
        println!("Favorite       : {}", tastings.favorite_label());

        let selected: Vec<String> = flavors
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();

        if selected.is_empty() {
            println!();
            info(format!(
                "Pass --flavor to get recommendations. Palette: {}",
                cfg.flavors.join(", ")
            ));
            return Ok(());
        }

        // the engine leaves quantity filtering to its caller
        let available = available_stock(&inventory);
        let recs = recommend(&selected, &completed, &available);

        header(format!("Recommendations for {}", selected.join(", ")));
        if recs.is_empty() {
            info("No cigar in stock matches these flavors.");
        }
        for (i, r) in recs.iter().enumerate() {
            print_recommendation(i + 1, r);
        }
    }

    Ok(())
}

fn print_recommendation(rank: usize, r: &Recommendation) {
    let c = &r.cigar;
    let origin = c
        .origin_country
        .as_deref()
        .map(|o| format!(" ({o})"))
        .unwrap_or_default();
    let smoked = if r.already_smoked { "  ✓ already smoked" } else { "" };

    println!(
        "{rank}. #{} {} / {}{origin}  score {:.1}{smoked}",
        c.id, c.name, c.brand, r.score
    );
    if !r.matched_flavors.is_empty() {
        println!("   matches: {}", r.matched_flavors.join(", "));
    }
}
