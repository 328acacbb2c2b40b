use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownVariantError;

/// Opaque, insertion-ordered widget payload.
///
/// Keys are whatever the widget type defines; the values are never inspected.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Root of a dashboard configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
    /// Top-level keys other than `pages` (theme, branding, server, ...)
    pub extra: Payload,
}

/// A single dashboard page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub width: PageWidth,
    pub center_vertically: bool,
    pub hide_desktop_navigation: bool,
    pub show_mobile_header: bool,
    pub columns: Vec<Column>,
}

/// A column on a page
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: String,
    pub size: ColumnSize,
    pub widgets: Vec<Widget>,
}

/// A widget inside a column
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub id: String,
    pub widget_type: WidgetType,
    pub title: Option<String>,
    pub title_url: Option<String>,
    pub cache: Option<String>,
    pub css_class: Option<String>,
    pub hide_header: bool,
    pub properties: Payload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageWidth {
    #[default]
    Default,
    Slim,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnSize {
    Small,
    Full,
}

/// Closed set of widget kinds understood by the Glance renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    Rss,
    Videos,
    HackerNews,
    Reddit,
    Lobsters,
    Weather,
    Calendar,
    Markets,
    Clock,
    Search,
    Bookmarks,
    Todo,
    Monitor,
    Releases,
    Repository,
    DockerContainers,
    ServerStats,
    DnsStats,
    TwitchChannels,
    TwitchGames,
    CustomApi,
    Extension,
    ChangeDetection,
    Iframe,
    Html,
    Group,
    SplitColumn,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == page_id)
    }

    pub fn find_page_mut(&mut self, page_id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|page| page.id == page_id)
    }

    pub fn page_index(&self, page_id: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.id == page_id)
    }

    pub fn find_column(&self, page_id: &str, column_id: &str) -> Option<&Column> {
        self.find_page(page_id)?.find_column(column_id)
    }

    pub fn find_column_mut(&mut self, page_id: &str, column_id: &str) -> Option<&mut Column> {
        self.find_page_mut(page_id)?.find_column_mut(column_id)
    }

    pub fn find_widget(&self, page_id: &str, column_id: &str, widget_id: &str) -> Option<&Widget> {
        self.find_column(page_id, column_id)?.find_widget(widget_id)
    }

    pub fn find_widget_mut(
        &mut self,
        page_id: &str,
        column_id: &str,
        widget_id: &str,
    ) -> Option<&mut Widget> {
        self.find_column_mut(page_id, column_id)?
            .find_widget_mut(widget_id)
    }

    /// Structural equality that ignores ephemeral identifiers
    pub fn same_structure(&self, other: &Document) -> bool {
        self.extra == other.extra
            && self.pages.len() == other.pages.len()
            && self
                .pages
                .iter()
                .zip(&other.pages)
                .all(|(a, b)| a.same_structure(b))
    }
}

impl Page {
    /// Create an empty page with default display settings
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: None,
            width: PageWidth::Default,
            center_vertically: false,
            hide_desktop_navigation: false,
            show_mobile_header: false,
            columns: Vec::new(),
        }
    }

    /// Ordered column sizes of this page
    pub fn shape(&self) -> Vec<ColumnSize> {
        self.columns.iter().map(|column| column.size).collect()
    }

    pub fn find_column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    pub fn find_column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == column_id)
    }

    pub fn same_structure(&self, other: &Page) -> bool {
        self.name == other.name
            && self.slug == other.slug
            && self.width == other.width
            && self.center_vertically == other.center_vertically
            && self.hide_desktop_navigation == other.hide_desktop_navigation
            && self.show_mobile_header == other.show_mobile_header
            && self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(&other.columns)
                .all(|(a, b)| a.same_structure(b))
    }
}

impl Column {
    pub fn new(id: impl Into<String>, size: ColumnSize) -> Self {
        Self {
            id: id.into(),
            size,
            widgets: Vec::new(),
        }
    }

    pub fn find_widget(&self, widget_id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|widget| widget.id == widget_id)
    }

    pub fn find_widget_mut(&mut self, widget_id: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|widget| widget.id == widget_id)
    }

    pub fn same_structure(&self, other: &Column) -> bool {
        self.size == other.size
            && self.widgets.len() == other.widgets.len()
            && self
                .widgets
                .iter()
                .zip(&other.widgets)
                .all(|(a, b)| a.same_structure(b))
    }
}

impl Widget {
    /// Create a widget with no shared fields and an empty payload
    pub fn new(id: impl Into<String>, widget_type: WidgetType) -> Self {
        Self {
            id: id.into(),
            widget_type,
            title: None,
            title_url: None,
            cache: None,
            css_class: None,
            hide_header: false,
            properties: Payload::new(),
        }
    }

    pub fn same_structure(&self, other: &Widget) -> bool {
        self.widget_type == other.widget_type
            && self.title == other.title
            && self.title_url == other.title_url
            && self.cache == other.cache
            && self.css_class == other.css_class
            && self.hide_header == other.hide_header
            && self.properties == other.properties
    }
}

impl PageWidth {
    pub const ALL: [PageWidth; 3] = [PageWidth::Default, PageWidth::Slim, PageWidth::Wide];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageWidth::Default => "default",
            PageWidth::Slim => "slim",
            PageWidth::Wide => "wide",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == PageWidth::Default
    }
}

impl ColumnSize {
    pub const ALL: [ColumnSize; 2] = [ColumnSize::Small, ColumnSize::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnSize::Small => "small",
            ColumnSize::Full => "full",
        }
    }
}

impl WidgetType {
    /// Tag used in the `type` key of the YAML
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Rss => "rss",
            WidgetType::Videos => "videos",
            WidgetType::HackerNews => "hacker-news",
            WidgetType::Reddit => "reddit",
            WidgetType::Lobsters => "lobsters",
            WidgetType::Weather => "weather",
            WidgetType::Calendar => "calendar",
            WidgetType::Markets => "markets",
            WidgetType::Clock => "clock",
            WidgetType::Search => "search",
            WidgetType::Bookmarks => "bookmarks",
            WidgetType::Todo => "todo",
            WidgetType::Monitor => "monitor",
            WidgetType::Releases => "releases",
            WidgetType::Repository => "repository",
            WidgetType::DockerContainers => "docker-containers",
            WidgetType::ServerStats => "server-stats",
            WidgetType::DnsStats => "dns-stats",
            WidgetType::TwitchChannels => "twitch-channels",
            WidgetType::TwitchGames => "twitch-games",
            WidgetType::CustomApi => "custom-api",
            WidgetType::Extension => "extension",
            WidgetType::ChangeDetection => "change-detection",
            WidgetType::Iframe => "iframe",
            WidgetType::Html => "html",
            WidgetType::Group => "group",
            WidgetType::SplitColumn => "split-column",
        }
    }
}

impl fmt::Display for PageWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ColumnSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageWidth {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageWidth::ALL
            .into_iter()
            .find(|width| width.as_str() == s)
            .ok_or_else(|| UnknownVariantError::new("page width", s))
    }
}

impl FromStr for ColumnSize {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownVariantError::new("column size", s))
    }
}

impl FromStr for WidgetType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetType::ALL
            .into_iter()
            .find(|widget_type| widget_type.as_str() == s)
            .ok_or_else(|| UnknownVariantError::new("widget type", s))
    }
}
