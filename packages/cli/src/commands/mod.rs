pub mod fmt;
pub mod init;
pub mod page;
pub mod validate;
pub mod widget;
pub mod widgets;

pub use fmt::{fmt, FmtArgs};
pub use init::{init, InitArgs};
pub use page::{page, PageCommand};
pub use validate::{validate, ValidateArgs};
pub use widget::{widget, WidgetCommand};
pub use widgets::{widgets, WidgetsArgs};

use crate::config::Config;
use anyhow::{bail, Result};
use glance_editor::{ConfigStore, FileStorage};
use std::path::Path;

/// Load an existing dashboard file into a fresh editing session
pub(crate) fn open_store(path: &Path, config: &Config) -> Result<(ConfigStore, FileStorage)> {
    let storage = FileStorage::new(path);
    let mut store = ConfigStore::with_history_limit(config.history_limit);

    if !store.load_from(&storage)? {
        bail!(
            "{} not found. Run `glance init` to create it",
            path.display()
        );
    }

    Ok((store, storage))
}
