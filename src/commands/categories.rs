//! Scoring category listing.

use crate::{config::AppConfig, Result};

use super::common::print_json;

/// Handle `categories`
pub fn handle_categories(config: &AppConfig, as_json: bool) -> Result<()> {
    let categories = config.categories.categories();

    if as_json {
        return print_json(categories);
    }

    for category in categories {
        let direction = if category.lower_is_better {
            "lower is better"
        } else {
            "higher is better"
        };
        println!("{:<6} {:<28} {}", category.key, category.label, direction);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_need_only_config() {
        let config = AppConfig::default();
        assert!(handle_categories(&config, true).is_ok());
        assert!(handle_categories(&config, false).is_ok());
    }
}
