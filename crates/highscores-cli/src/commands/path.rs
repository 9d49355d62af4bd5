use anyhow::Result;
use highscores_core::StoreConfig;

pub fn run(config: &StoreConfig) -> Result<()> {
    println!("{}", config.file_path()?.display());
    Ok(())
}
