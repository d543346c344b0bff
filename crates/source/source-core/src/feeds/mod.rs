//! Parsers for the upstream payload formats.

mod csse;
mod pcm;
mod politologue;

pub use csse::CsseFeed;
pub use pcm::{NationalFeed, RegionalFeed};
pub use politologue::PolitologueFeed;

use source_api::GlobalProvider;
use source_spi::Feed;

/// Parser for the configured per-country provider.
pub fn global_feed(provider: GlobalProvider) -> Box<dyn Feed> {
    match provider {
        GlobalProvider::Csse => Box::new(CsseFeed),
        GlobalProvider::Politologue => Box::new(PolitologueFeed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_feed_by_provider() {
        assert_eq!(global_feed(GlobalProvider::Csse).name(), "csse");
        assert_eq!(global_feed(GlobalProvider::Politologue).name(), "politologue");
    }
}
