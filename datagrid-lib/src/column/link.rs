//! Link column kind.
//!
//! Link cells hold an href and show either the href itself, a literal text,
//! a substring extracted from the href with a regex, or an icon.
//!
//! Configuration is compiled once in [`LinkColumn::new`]:
//! - a broken `validate` pattern turns the whole column into an
//!   always-error column carrying the compile diagnostic;
//! - a broken display regex silently falls back to literal display text.

use regex::Regex;
use serde_json::Value;

use crate::cell::{Alignment, Cell, CellClickEvent, CellData, EventResult, LinkCell};

use super::ColumnDefinition;
use super::config::LinkConfig;
use super::pattern::{ValidatePattern, build_regex, char_len, present, to_safe_string};

const ICON_PREFIX: &str = ":material/";

/// How link cells derive their display text.
#[derive(Debug, Clone)]
pub enum DisplayMode {
    /// Fixed text; empty means "show the href".
    Literal(String),
    /// Extract the display text from the href.
    Regex(Regex),
    /// Render the named icon.
    Icon(String),
}

impl DisplayMode {
    fn parse(display_text: Option<&str>) -> Self {
        let Some(text) = display_text else {
            return Self::Literal(String::new());
        };
        if let Some(icon) = parse_icon(text) {
            return Self::Icon(icon.to_string());
        }
        if text.contains('(') && text.contains(')') {
            match build_regex(text) {
                Ok(regex) => return Self::Regex(regex),
                Err(e) => {
                    log::debug!(
                        "display_text {:?} is not a regex ({}), using it literally",
                        text,
                        e
                    );
                }
            }
        }
        Self::Literal(text.to_string())
    }

    pub fn uses_icon(&self) -> bool {
        matches!(self, Self::Icon(_))
    }
}

/// Parse `:material/<name>:` into `<name>`.
fn parse_icon(text: &str) -> Option<&str> {
    let name = text.strip_prefix(ICON_PREFIX)?.strip_suffix(':')?;
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    valid.then_some(name)
}

/// Link configuration after compilation.
#[derive(Debug, Clone)]
pub struct CompiledLinkConfig {
    pub validate: ValidatePattern,
    pub display: DisplayMode,
}

impl CompiledLinkConfig {
    pub fn compile(config: &LinkConfig) -> Self {
        Self {
            validate: ValidatePattern::compile(config.validate.as_deref()),
            display: DisplayMode::parse(config.display_text.as_deref()),
        }
    }
}

/// Link column built from a definition and its [`LinkConfig`].
#[derive(Debug, Clone)]
pub struct LinkColumn {
    definition: ColumnDefinition,
    config: LinkConfig,
    compiled: CompiledLinkConfig,
}

impl LinkColumn {
    pub const IS_EDITABLE_TYPE: bool = true;

    pub fn new(definition: ColumnDefinition, config: LinkConfig) -> Self {
        let compiled = CompiledLinkConfig::compile(&config);
        Self {
            definition,
            config,
            compiled,
        }
    }

    pub fn definition(&self) -> &ColumnDefinition {
        &self.definition
    }

    pub fn compiled(&self) -> &CompiledLinkConfig {
        &self.compiled
    }

    /// Check an href against the required, length and pattern rules, in
    /// that order.
    pub fn validate_input(&self, href: Option<&Value>) -> bool {
        let Some(href) = present(href) else {
            return !self.definition.is_required;
        };
        let href = to_safe_string(href);

        if self.config.max_chars.is_some_and(|max| char_len(&href) > max) {
            return false;
        }

        self.compiled.validate.allows(&href)
    }

    pub fn get_cell(&self, data: Option<&Value>, validate: bool) -> Cell {
        if let Some(message) = self.compiled.validate.config_error() {
            return Cell::error(message);
        }

        let uses_icon = self.compiled.display.uses_icon();
        let Some(data) = present(data) else {
            let cell = Cell::missing(CellData::Link(LinkCell {
                href: None,
                display_text: String::new(),
                uses_icon,
            }));
            return self.style(cell);
        };

        if validate && !self.validate_input(Some(data)) {
            return Cell::error("Invalid input.");
        }

        let href = to_safe_string(data);
        let display_text = self.display_text(&href);
        let mut cell = Cell::new(
            CellData::Link(LinkCell {
                href: Some(href.clone()),
                display_text: display_text.clone(),
                uses_icon,
            }),
            Some(data.clone()),
            display_text,
        );
        cell.copy_value = href;
        self.style(cell)
    }

    pub fn get_cell_value(&self, cell: &Cell) -> Option<Value> {
        match &cell.data {
            CellData::Link(link) => link.href.clone().map(Value::String),
            _ => None,
        }
    }

    fn display_text(&self, href: &str) -> String {
        match &self.compiled.display {
            DisplayMode::Icon(name) => name.clone(),
            DisplayMode::Regex(regex) => extract_display(regex, href),
            DisplayMode::Literal(text) if !text.is_empty() => text.clone(),
            DisplayMode::Literal(_) => href.to_string(),
        }
    }

    fn style(&self, cell: Cell) -> Cell {
        let cell = cell.with_readonly(!self.definition.is_editable);
        if self.compiled.display.uses_icon() {
            cell.with_align(Alignment::Center).with_overlay(false)
        } else {
            cell
        }
    }
}

/// First capture group if it participated, else the whole match, else empty.
fn extract_display(regex: &Regex, href: &str) -> String {
    regex
        .captures(href)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Opens URLs on behalf of clicked link cells.
pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) {
        if let Err(e) = open::that_detached(url) {
            log::warn!("Failed to open {}: {}", url, e);
        }
    }
}

impl LinkCell {
    /// URL a click navigates to. Hrefs starting with `www.` become absolute
    /// `https://` URLs.
    pub fn target_url(&self) -> Option<String> {
        let href = self.href.as_deref()?;
        if href.starts_with("www.") {
            Some(format!("https://{}", href))
        } else {
            Some(href.to_string())
        }
    }

    /// Handle a click on this cell.
    pub fn on_click(&self, event: &mut CellClickEvent, opener: &dyn LinkOpener) -> EventResult {
        let Some(url) = self.target_url() else {
            return EventResult::Ignored;
        };
        event.prevent_default();
        log::debug!("Opening link {} (row {}, column {})", url, event.row, event.column_id);
        opener.open(&url);
        EventResult::Consumed
    }
}
