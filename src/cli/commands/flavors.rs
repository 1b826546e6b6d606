use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// `flavors`: the palette accepted by `taste finish --flavor` and `dashboard --flavor`.
pub fn handle(cfg: &Config) -> AppResult<()> {
    header("Flavor palette");
    for (i, f) in cfg.flavors.iter().enumerate() {
        println!("{:>2}. {f}", i + 1);
    }
    Ok(())
}
