use std::path::PathBuf;

use newsfeed_engine::SnapshotWriter;
use newsfeed_logging::{feed_debug, feed_error};

use super::constants::PAGE_FILENAME;
use super::layout::page_html;
use super::port::{PageModel, ViewCommand, ViewPort};

/// Display surface that keeps the page as an HTML file on disk.
///
/// Every flushed batch rewrites `index.html`; open it in a browser and reload
/// to follow along.
pub struct HtmlPage {
    model: PageModel,
    writer: SnapshotWriter,
}

impl HtmlPage {
    pub fn new(writer: SnapshotWriter) -> Self {
        Self {
            model: PageModel::default(),
            writer,
        }
    }

    pub fn page_path(&self) -> PathBuf {
        self.writer.dir().join(PAGE_FILENAME)
    }
}

impl ViewPort for HtmlPage {
    fn apply(&mut self, command: &ViewCommand) {
        self.model.apply(command);
    }

    fn flush(&mut self) {
        match self.writer.write(PAGE_FILENAME, &page_html(&self.model)) {
            Ok(path) => feed_debug!("Page written to {:?}", path),
            Err(err) => feed_error!("Failed to write page to {:?}: {}", self.writer.dir(), err),
        }
    }
}
