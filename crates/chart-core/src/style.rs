// File: crates/chart-core/src/style.rs
// Summary: Style sheet (theme + context + palette) and the process-wide default.
// Notes:
// - `Chart::new()` snapshots `current()`, so set the style before building charts.

use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::context::{self, Context};
use crate::error::Result;
use crate::palette::Palette;
use crate::theme::{self, Theme};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    pub theme: Theme,
    pub context: Context,
    pub palette: Palette,
}

impl StyleSheet {
    /// Build a sheet from preset names, e.g. `("whitegrid", "talk", "Set2")`.
    pub fn from_names(theme: &str, context: &str, palette: &str) -> Result<Self> {
        Ok(Self {
            theme: theme::find(theme)?,
            context: context::find(context)?,
            palette: Palette::named(palette)?,
        })
    }
}

fn global() -> &'static RwLock<StyleSheet> {
    static STYLE: OnceLock<RwLock<StyleSheet>> = OnceLock::new();
    STYLE.get_or_init(|| RwLock::new(StyleSheet::default()))
}

fn read() -> RwLockReadGuard<'static, StyleSheet> {
    global().read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write() -> RwLockWriteGuard<'static, StyleSheet> {
    global().write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Snapshot of the process-wide style.
pub fn current() -> StyleSheet {
    read().clone()
}

pub fn set_theme(name: &str) -> Result<()> {
    let theme = theme::find(name)?;
    write().theme = theme;
    log::debug!("style: theme set to {}", theme.name);
    Ok(())
}

pub fn set_context(name: &str) -> Result<()> {
    let context = context::find(name)?;
    write().context = context;
    log::debug!("style: context set to {}", context.name);
    Ok(())
}

pub fn set_palette(name: &str) -> Result<()> {
    let palette = Palette::named(name)?;
    log::debug!("style: palette set to {} ({} colors)", palette.name, palette.len());
    write().palette = palette;
    Ok(())
}

/// Replace the whole process-wide style at once.
pub fn set(sheet: StyleSheet) {
    *write() = sheet;
}

/// Restore darkgrid / notebook / deep.
pub fn reset() {
    set(StyleSheet::default());
}
