use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "mbti-board",
    version,
    about = "Browse the MBTI board with category filters and pagination"
)]
pub struct Args {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the board service URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the number of posts per page
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub page_size: Option<i64>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.remote.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.defaults.items_per_page = page_size;
        }
    }
}
