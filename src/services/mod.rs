// pageview services
// Services provide side-effecting functionality: page fetching and settings.

pub mod content_fetcher;
pub mod settings_engine;
