use anyhow::Context;
use pagination::{PaginationOptions, PaginationState};

/// Pagination settings, read from flags or the environment.
#[derive(Debug, Clone, clap::Args)]
pub struct Settings {
    /// Page to open before applying actions
    #[arg(long, env = "PAGER_PAGE", default_value_t = 1)]
    pub page: u32,

    /// Initial page size
    #[arg(long, env = "PAGER_PAGE_SIZE", default_value_t = 10)]
    pub page_size: u32,

    /// Allowed page sizes, comma separated
    #[arg(
        long,
        env = "PAGER_PAGE_SIZE_OPTIONS",
        value_delimiter = ',',
        default_value = "10,20,50,100"
    )]
    pub page_size_options: Vec<u32>,

    /// Number of page buttons in the page window
    #[arg(long, env = "PAGER_WINDOW", default_value_t = 5)]
    pub window: usize,
}

impl Settings {
    pub fn to_options(&self, total: u64) -> PaginationOptions {
        PaginationOptions::default()
            .with_page(self.page)
            .with_page_size(self.page_size)
            .with_page_size_options(self.page_size_options.clone())
            .with_total(total)
            .with_auto_scroll(false)
    }

    /// Builds the state for `total` items, pulling a `--page` past the end
    /// back to the last page.
    pub fn open_state(&self, total: u64) -> anyhow::Result<PaginationState> {
        let mut state =
            PaginationState::new(self.to_options(total)).context("Invalid pagination settings")?;

        let last_valid_page = state.total_pages().max(1);
        if state.current_page() > last_valid_page {
            tracing::warn!(
                "Page {} is past the last page ({}), showing page {} instead",
                state.current_page(),
                last_valid_page,
                last_valid_page
            );
            state.set_total(total);
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        settings: Settings,
    }

    #[test]
    fn test_defaults_match_library_defaults() {
        let cli = TestCli::parse_from(["pager"]);
        let options = cli.settings.to_options(0);
        assert_eq!(options.initial_page, 1);
        assert_eq!(options.initial_page_size, 10);
        assert_eq!(options.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(cli.settings.window, 5);
        assert!(!options.auto_scroll);
    }

    #[test]
    fn test_comma_separated_page_sizes() {
        let cli = TestCli::parse_from([
            "pager",
            "--page-size",
            "25",
            "--page-size-options",
            "25,50",
        ]);
        let options = cli.settings.to_options(120);
        assert_eq!(options.page_size_options, vec![25, 50]);
        assert_eq!(options.total, 120);
        assert!(PaginationState::new(options).is_ok());
    }

    #[test]
    fn test_page_past_the_end_is_clamped() {
        let cli = TestCli::parse_from(["pager", "--page", "40"]);
        let state = cli.settings.open_state(95).unwrap();
        assert_eq!(state.current_page(), 10);
        assert!(state.start_index() <= state.end_index());

        let empty = cli.settings.open_state(0).unwrap();
        assert_eq!(empty.current_page(), 1);
        assert_eq!(empty.end_index(), 0);
    }

    #[test]
    fn test_invalid_settings_are_reported() {
        let cli = TestCli::parse_from(["pager", "--page-size", "15"]);
        assert!(cli.settings.open_state(95).is_err());
    }
}
