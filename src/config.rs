//! Saved command-line defaults.
//!
//! Defaults are stored as the same flag tokens the command line accepts, one
//! per line, in a global config file and an optional `.bytetaperc` in the
//! working directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::NEWLINE;
use crate::ui::glyph::MAX_TAB_WIDTH;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub tab_width: Option<usize>,
    pub filler: Option<u8>,
    pub log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; values set in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            tab_width: other.tab_width.or(self.tab_width),
            filler: other.filler.or(self.filler),
            log: other.log.clone().or_else(|| self.log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("bytetape").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("bytetape")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("bytetape").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("bytetape")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".bytetaperc")
}

/// Read saved flags. A missing file yields no flags.
///
/// # Errors
///
/// Returns an error if the file exists but can't be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write flags so that [`load_config_flags`] reads them back.
///
/// # Errors
///
/// Returns an error if the config directory or file can't be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# bytetape defaults (saved with --save)".to_string()];
    if let Some(tab_width) = flags.tab_width {
        lines.push(format!("--tab-width {tab_width}"));
    }
    if let Some(filler) = flags.filler {
        lines.push(format!("--filler {filler:#04x}"));
    }
    if let Some(log) = &flags.log {
        lines.push(format!("--log {}", log.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove saved flags, if any.
///
/// # Errors
///
/// Returns an error if the file exists but can't be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of a token list, ignoring everything else.
///
/// Both `--flag value` and `--flag=value` are accepted. Values that don't
/// parse are dropped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        if matches!(name, "--tab-width" | "--filler" | "--log") {
            let value = match inline {
                Some(value) => Some(value),
                None => {
                    i += 1;
                    tokens.get(i).map(String::as_str)
                }
            };
            if let Some(value) = value {
                match name {
                    "--tab-width" => {
                        flags.tab_width = parse_tab_width(value).ok().or(flags.tab_width);
                    }
                    "--filler" => flags.filler = parse_filler(value).ok().or(flags.filler),
                    _ => flags.log = Some(PathBuf::from(value)),
                }
            }
        }
        i += 1;
    }
    flags
}

/// Parse a tab width between 1 and [`MAX_TAB_WIDTH`] cells.
///
/// # Errors
///
/// Returns a message suitable for the command line if the value isn't a
/// number in range.
pub fn parse_tab_width(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(width) if (1..=MAX_TAB_WIDTH).contains(&width) => Ok(width),
        _ => Err(format!("'{value}' is not a tab width (1-{MAX_TAB_WIDTH})")),
    }
}

/// Parse a filler byte.
///
/// A single character stands for itself; longer values are read as decimal
/// or as `0x`-prefixed hex. The newline byte is rejected since it can't
/// live inside a line.
///
/// # Errors
///
/// Returns a message suitable for the command line if the value isn't a
/// usable byte.
pub fn parse_filler(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    let byte = match (chars.next(), chars.next()) {
        (None, _) => return Err("filler can't be empty".to_string()),
        (Some(c), None) => u8::try_from(c).map_err(|_| format!("'{c}' is not a single byte"))?,
        _ => {
            let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
                Some(hex) => u8::from_str_radix(hex, 16),
                None => value.parse(),
            };
            parsed.map_err(|_| format!("'{value}' is not a byte (0-255 or 0x00-0xff)"))?
        }
    };
    if byte == NEWLINE {
        return Err("filler can't be the newline byte".to_string());
    }
    Ok(byte)
}
