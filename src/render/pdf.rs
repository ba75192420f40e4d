//! HTML to PDF rendering.
//!
//! [`PdfRenderer`] is the seam between the pipeline and the print engine.
//! [`ChromeRenderer`] drives a headless Chrome over the DevTools protocol
//! and prints with the CSS page size, so `@page` rules decide geometry.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::error::{Error, Result};

use super::{HtmlDocument, RenderOptions};

/// Turns one HTML document into PDF bytes.
pub trait PdfRenderer {
    /// Render `document` to a PDF.
    fn render(&self, document: &HtmlDocument) -> Result<Vec<u8>>;
}

impl<T: PdfRenderer + ?Sized> PdfRenderer for &T {
    fn render(&self, document: &HtmlDocument) -> Result<Vec<u8>> {
        (**self).render(document)
    }
}

/// Renderer backed by a single headless Chrome instance.
///
/// Each document gets its own tab, which is closed after printing.
pub struct ChromeRenderer {
    browser: Browser,
    timeout: Duration,
}

impl ChromeRenderer {
    /// Launch a browser configured by `options`.
    pub fn launch(options: &RenderOptions) -> Result<Self> {
        let browser = Browser::new(launch_options(options)?)
            .map_err(|e| Error::Render(format!("failed to launch browser: {}", e)))?;

        log::debug!("headless browser started");
        Ok(Self {
            browser,
            timeout: options.timeout,
        })
    }

    /// Timeout applied to navigation in every tab.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn print(&self, tab: &Arc<Tab>, document: &HtmlDocument) -> Result<Vec<u8>> {
        // Large documents load more reliably from disk than from a data URL
        let mut page = tempfile::Builder::new()
            .prefix("paperback-")
            .suffix(".html")
            .tempfile()?;
        page.write_all(document.html.as_bytes())?;
        page.flush()?;

        let url = format!("file://{}", page.path().display());
        tab.navigate_to(&url)
            .map_err(|e| Error::Render(format!("failed to load page: {}", e)))?;
        tab.wait_until_navigated()
            .map_err(|e| Error::Render(format!("page did not finish loading: {}", e)))?;

        let options = PrintToPdfOptions {
            landscape: Some(false),
            display_header_footer: Some(false),
            print_background: Some(true),
            scale: Some(1.0),
            paper_width: Some(document.page_width_in),
            paper_height: Some(document.page_height_in),
            margin_top: Some(0.0),
            margin_bottom: Some(0.0),
            margin_left: Some(0.0),
            margin_right: Some(0.0),
            prefer_css_page_size: Some(true),
            ..Default::default()
        };

        tab.print_to_pdf(Some(options))
            .map_err(|e| Error::Render(format!("failed to print PDF: {}", e)))
    }
}

impl PdfRenderer for ChromeRenderer {
    fn render(&self, document: &HtmlDocument) -> Result<Vec<u8>> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| Error::Render(format!("failed to open tab: {}", e)))?;
        tab.set_default_timeout(self.timeout);

        let result = self.print(&tab, document);

        if let Err(e) = tab.close(true) {
            log::debug!("failed to close tab: {}", e);
        }

        let bytes = result?;
        log::debug!(
            "rendered {:?} page to {} bytes",
            document.template,
            bytes.len()
        );
        Ok(bytes)
    }
}

fn launch_options(options: &RenderOptions) -> Result<LaunchOptions<'static>> {
    let mut builder = LaunchOptions::default_builder();
    builder
        .headless(true)
        .sandbox(options.sandbox)
        .idle_browser_timeout(options.timeout);
    if let Some(ref path) = options.chrome_path {
        builder.path(Some(path.clone()));
    }

    builder
        .build()
        .map_err(|e| Error::Render(format!("invalid browser options: {}", e)))
}
