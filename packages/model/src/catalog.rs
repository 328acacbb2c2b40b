//! Widget catalog: display metadata and starter payloads per widget type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ast::WidgetType;
use crate::error::UnknownVariantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetCategory {
    Feeds,
    Information,
    Productivity,
    Monitoring,
    Streaming,
    Custom,
    Layout,
}

impl WidgetCategory {
    pub const ALL: [WidgetCategory; 7] = [
        WidgetCategory::Feeds,
        WidgetCategory::Information,
        WidgetCategory::Productivity,
        WidgetCategory::Monitoring,
        WidgetCategory::Streaming,
        WidgetCategory::Custom,
        WidgetCategory::Layout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetCategory::Feeds => "Feeds",
            WidgetCategory::Information => "Information",
            WidgetCategory::Productivity => "Productivity",
            WidgetCategory::Monitoring => "Monitoring",
            WidgetCategory::Streaming => "Streaming",
            WidgetCategory::Custom => "Custom",
            WidgetCategory::Layout => "Layout",
        }
    }
}

impl fmt::Display for WidgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, so `feeds` and `Feeds` both parse
impl FromStr for WidgetCategory {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariantError::new("widget category", s))
    }
}

impl WidgetType {
    /// All widget types, grouped by category
    pub const ALL: [WidgetType; 27] = [
        WidgetType::Rss,
        WidgetType::Videos,
        WidgetType::HackerNews,
        WidgetType::Reddit,
        WidgetType::Lobsters,
        WidgetType::Releases,
        WidgetType::Weather,
        WidgetType::Calendar,
        WidgetType::Markets,
        WidgetType::Clock,
        WidgetType::Search,
        WidgetType::Bookmarks,
        WidgetType::Todo,
        WidgetType::Monitor,
        WidgetType::Repository,
        WidgetType::DockerContainers,
        WidgetType::ServerStats,
        WidgetType::DnsStats,
        WidgetType::ChangeDetection,
        WidgetType::TwitchChannels,
        WidgetType::TwitchGames,
        WidgetType::CustomApi,
        WidgetType::Extension,
        WidgetType::Iframe,
        WidgetType::Html,
        WidgetType::Group,
        WidgetType::SplitColumn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WidgetType::Rss => "RSS Feed",
            WidgetType::Videos => "Videos (YouTube)",
            WidgetType::HackerNews => "Hacker News",
            WidgetType::Reddit => "Reddit",
            WidgetType::Lobsters => "Lobsters",
            WidgetType::Releases => "Releases (GitHub)",
            WidgetType::Weather => "Weather",
            WidgetType::Calendar => "Calendar",
            WidgetType::Markets => "Markets (Stocks)",
            WidgetType::Clock => "Clock",
            WidgetType::Search => "Search",
            WidgetType::Bookmarks => "Bookmarks",
            WidgetType::Todo => "Todo List",
            WidgetType::Monitor => "Monitor (Sites)",
            WidgetType::Repository => "Repository (GitHub)",
            WidgetType::DockerContainers => "Docker Containers",
            WidgetType::ServerStats => "Server Stats",
            WidgetType::DnsStats => "DNS Stats",
            WidgetType::ChangeDetection => "Change Detection",
            WidgetType::TwitchChannels => "Twitch Channels",
            WidgetType::TwitchGames => "Twitch Games",
            WidgetType::CustomApi => "Custom API",
            WidgetType::Extension => "Extension",
            WidgetType::Iframe => "IFrame",
            WidgetType::Html => "HTML",
            WidgetType::Group => "Group (Tabs)",
            WidgetType::SplitColumn => "Split Column",
        }
    }

    pub fn category(&self) -> WidgetCategory {
        use WidgetType::*;

        match self {
            Rss | Videos | HackerNews | Reddit | Lobsters | Releases => WidgetCategory::Feeds,
            Weather | Calendar | Markets | Clock => WidgetCategory::Information,
            Search | Bookmarks | Todo => WidgetCategory::Productivity,
            Monitor | Repository | DockerContainers | ServerStats | DnsStats | ChangeDetection => {
                WidgetCategory::Monitoring
            }
            TwitchChannels | TwitchGames => WidgetCategory::Streaming,
            CustomApi | Extension | Iframe | Html => WidgetCategory::Custom,
            Group | SplitColumn => WidgetCategory::Layout,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WidgetType::Rss => "Display RSS feed items with collapsible sections",
            WidgetType::Videos => "Show latest videos from YouTube channels",
            WidgetType::HackerNews => "Display posts from Hacker News",
            WidgetType::Reddit => "Show posts from a subreddit",
            WidgetType::Lobsters => "Display posts from Lobste.rs",
            WidgetType::Weather => "Current weather and forecast",
            WidgetType::Calendar => "Month view calendar",
            WidgetType::Markets => "Stock and crypto market prices",
            WidgetType::Clock => "Show current time in multiple timezones",
            WidgetType::Search => "Search bar with custom bangs",
            WidgetType::Bookmarks => "Organized bookmark links",
            WidgetType::Todo => "Simple todo list",
            WidgetType::Monitor => "Monitor website uptime and response times",
            WidgetType::Releases => "Latest GitHub repository releases",
            WidgetType::Repository => "GitHub repository info, PRs, and issues",
            WidgetType::DockerContainers => "Monitor Docker containers",
            WidgetType::ServerStats => "CPU, memory, network, and disk usage",
            WidgetType::DnsStats => "DNS query statistics",
            WidgetType::TwitchChannels => "Live Twitch channels",
            WidgetType::TwitchGames => "Top games on Twitch",
            WidgetType::CustomApi => "Fetch data from custom API endpoints",
            WidgetType::Extension => "Custom extension widget",
            WidgetType::ChangeDetection => "Monitor website changes",
            WidgetType::Iframe => "Embed external content via iframe",
            WidgetType::Html => "Display custom HTML content",
            WidgetType::Group => "Create tabbed interface with multiple widgets",
            WidgetType::SplitColumn => "Side-by-side layout with two widget sections",
        }
    }

    /// Example payload YAML offered when a widget's payload is still empty
    pub fn template(&self) -> &'static str {
        match self {
            WidgetType::Rss => {
                "feeds:\n  - url: https://example.com/rss.xml\n    title: Example Feed\nlimit: 10\ncollapse-after: 3\n"
            }
            WidgetType::Videos => {
                "channels:\n  - UCXuqSBlHAE6Xw-yeJA0Tunw # Channel ID\nlimit: 25\ncollapse-after: 5\n"
            }
            WidgetType::HackerNews => {
                "limit: 15\ncollapse-after: 5\ncomments-url-template: https://news.ycombinator.com/item?id={POST-ID}\n"
            }
            WidgetType::Reddit => {
                "subreddit: technology\nlimit: 15\ncollapse-after: 5\nshow-thumbnails: true\ncomments-url-template: https://reddit.com{POST-PATH}\n"
            }
            WidgetType::Lobsters => {
                "limit: 15\ncollapse-after: 5\ncomments-url-template: https://lobste.rs/s/{POST-ID}\n"
            }
            WidgetType::Weather => {
                "location: London, United Kingdom\nunits: metric # or imperial\nhour-format: 24h # or 12h\nhide-location: false\n"
            }
            WidgetType::Calendar => "first-day-of-week: monday # or sunday\n",
            WidgetType::Markets => {
                "markets:\n  - symbol: SPY\n    name: S&P 500\n  - symbol: BTC-USD\n    name: Bitcoin\nsort-by: absolute-change # or change, name\ndisplay-mode: percentage # or value\ndisplay-currency: USD\n"
            }
            WidgetType::Clock => {
                "hour-format: 24h # or 12h\ntimezones:\n  - timezone: Europe/London\n    label: London\n  - timezone: America/New_York\n    label: New York\n"
            }
            WidgetType::Search => {
                "bangs:\n  - title: Google\n    shortcut: g\n    url: https://www.google.com/search?q={QUERY}\n  - title: YouTube\n    shortcut: yt\n    url: https://www.youtube.com/results?search_query={QUERY}\n"
            }
            WidgetType::Bookmarks => {
                "groups:\n  - title: General\n    links:\n      - title: Example\n        url: https://example.com\n        icon: https://example.com/favicon.ico\n"
            }
            WidgetType::Todo => "tasks:\n  - title: Example task\n    done: false\n",
            WidgetType::Monitor => {
                "sites:\n  - title: Example Site\n    url: https://example.com\n    icon: https://example.com/favicon.ico\n    max-response-time: 500\n    allow-insecure-certificate: false\n"
            }
            WidgetType::Releases => {
                "repositories:\n  - glanceapp/glance\n  - go-gitea/gitea\nlimit: 10\ntoken: \"\" # Optional GitHub token for higher rate limits\n"
            }
            WidgetType::Repository => {
                "repository: glanceapp/glance\ntoken: \"\" # Optional GitHub token\npull-requests-limit: 5\nissues-limit: 5\n"
            }
            WidgetType::DockerContainers => {
                "urls:\n  - http://localhost:2375\nlimit: 10\nshow-stopped: true\ncollapse-after: 5\n"
            }
            WidgetType::ServerStats => {
                "interval: 1s # Update interval\nuse-si-units: false\nwidgets:\n  cpu:\n    show: true\n  memory:\n    show: true\n  network:\n    show: true\n  disk:\n    show: true\n"
            }
            WidgetType::DnsStats => "server: 127.0.0.1:53\ninterval: 1s\n",
            WidgetType::TwitchChannels | WidgetType::TwitchGames => {
                "channels:\n  - theprimeagen\n  - j_blow\nsort-by: viewers # or title\ncollapse-after: 5\n"
            }
            WidgetType::CustomApi => {
                "url: https://api.example.com/data\ninterval: 5m\nrequest-timeout: 10s\nallow-insecure-certificate: false\nitems-path: data.items\nfield-mappings:\n  title: title\n  url: url\n  time: published_at\nlimit: 10\ncollapse-after: 5\n"
            }
            WidgetType::Extension => "name: example-extension\nparameters:\n  param1: value1\n",
            WidgetType::ChangeDetection => {
                "token: \"\" # API token from changedetection.io\ninstance-url: https://changedetection.io\nwatches:\n  - uuid: 00000000-0000-0000-0000-000000000000\nlimit: 10\ncollapse-after: 5\n"
            }
            WidgetType::Iframe => "source: https://example.com\nheight: 500\n",
            WidgetType::Html => {
                "content: |\n  <div>\n    <h2>Example HTML Content</h2>\n    <p>Put your HTML here</p>\n  </div>\n"
            }
            WidgetType::Group => {
                "widgets:\n  - type: hacker-news\n  - type: reddit\n    subreddit: technology\n"
            }
            WidgetType::SplitColumn => {
                "left:\n  - type: weather\n    location: London, United Kingdom\nright:\n  - type: clock\n"
            }
        }
    }

    /// Widget types belonging to `category`, in catalog order
    pub fn in_category(category: WidgetCategory) -> impl Iterator<Item = WidgetType> {
        WidgetType::ALL
            .into_iter()
            .filter(move |widget_type| widget_type.category() == category)
    }
}
