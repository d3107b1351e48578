//! Today and check commands
//!
//! Inspect the daily puzzle and the catalog without playing.

use super::session::SessionConfig;
use crate::output::{print_daily, print_malformed};
use anyhow::{Result, bail};

/// Print today's puzzle; `spoil` also prints every round
///
/// # Errors
///
/// Returns an error if no puzzle is available for the configured day.
pub fn run_today(config: &SessionConfig, spoil: bool) -> Result<()> {
    let Some(session) = config.start() else {
        bail!("no puzzle available from {}", config.catalog);
    };

    print_daily(&session, spoil);
    Ok(())
}

/// Parse every catalog line and report the malformed ones
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, is empty, or has malformed lines.
pub fn run_check(config: &SessionConfig) -> Result<()> {
    let catalog = config.catalog()?;
    if catalog.is_empty() {
        bail!("catalog {} has no paths", config.catalog);
    }

    let malformed = catalog.malformed();
    print_malformed(catalog.len(), &malformed);

    if !malformed.is_empty() {
        bail!("{} malformed catalog lines", malformed.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_embedded_catalog() {
        assert!(run_check(&SessionConfig::default()).is_ok());
    }

    #[test]
    fn today_on_missing_catalog_fails() {
        let config = SessionConfig {
            catalog: "/no/such/catalog.txt".to_string(),
            ..SessionConfig::default()
        };
        assert!(run_today(&config, false).is_err());
        assert!(run_check(&config).is_err());
    }
}
