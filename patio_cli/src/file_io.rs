//! # Quote Files
//!
//! Saves and loads `.pcq` quote files:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Reject files from an incompatible schema
//!
//! ## Example
//!
//! ```rust,ignore
//! let quote = Quote::build(Configuration::default())?;
//! save_quote(&quote, Path::new("terrace.pcq"))?;
//! let loaded = load_quote(Path::new("terrace.pcq"))?;
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use patio_core::configuration::Configuration;
use patio_core::errors::{CalcError, CalcResult};
use patio_core::quote::{is_compatible_version, Quote, SCHEMA_VERSION};

/// Save a quote with atomic write semantics.
///
/// The quote is written to a sibling `.tmp` file, synced to disk and then
/// renamed over `path`.
pub fn save_quote(quote: &Quote, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(quote)?;

    let tmp_path = path.with_extension("pcq.tmp");

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), id = %quote.meta.id, "saved quote");
    Ok(())
}

/// Load a quote, checking the schema version before decoding the body.
///
/// # Returns
///
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_quote(path: &Path) -> CalcResult<Quote> {
    let contents =
        fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let value: serde_json::Value = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    let file_version = value["meta"]["schema_version"].as_str().unwrap_or_default();
    if !is_compatible_version(file_version) {
        return Err(CalcError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    let quote: Quote = serde_json::from_value(value)?;

    if let Err(e) = quote.verify() {
        tracing::warn!(path = %path.display(), error = %e, "stored results differ from current engines");
    }
    Ok(quote)
}

/// Read a configuration document and validate it.
pub fn load_configuration(path: &Path) -> CalcResult<Configuration> {
    let contents =
        fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let config: Configuration = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid configuration in {}: {}", path.display(), e),
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str, extension: &str) -> PathBuf {
        temp_dir().join(format!("patio_cli_test_{}_{}.{}", name, std::process::id(), extension))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip", "pcq");

        let quote = Quote::build(Configuration::default()).unwrap();
        save_quote(&quote, &path).unwrap();

        let loaded = load_quote(&path).unwrap();
        assert_eq!(loaded, quote);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_off_grid_quote_reloads_current() {
        use patio_core::configuration::{MountType, RoofSlope, SidePanelOption};
        use patio_core::pricing::GridPolicy;

        let path = temp_path("off_grid", "pcq");
        for (w, d) in [(1130.0, 1070.0), (2345.5, 2750.0), (7060.0, 3333.0)] {
            let config = Configuration::default()
                .with_mount_type(MountType::Freestanding)
                .with_roof_slope(RoofSlope::Deg7)
                .with_size(w, d)
                .with_gutter_height(2222.0)
                .with_side_panels(SidePanelOption::FullWall, SidePanelOption::Wedge);
            let quote = Quote::build_with(config, GridPolicy::Bilinear).unwrap();
            save_quote(&quote, &path).unwrap();

            let loaded = load_quote(&path).unwrap();
            assert_eq!(loaded, quote);
            assert!(loaded.verify().is_ok());
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic", "pcq");
        let tmp_path = path.with_extension("pcq.tmp");

        let quote = Quote::build(Configuration::default()).unwrap();
        save_quote(&quote, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_newer_schema_rejected() {
        let path = temp_path("version", "pcq");

        let quote = Quote::build(Configuration::default()).unwrap();
        let mut value = serde_json::to_value(&quote).unwrap();
        value["meta"]["schema_version"] = serde_json::Value::from("7.0.0");
        fs::write(&path, value.to_string()).unwrap();

        let err = load_quote(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_quote(&temp_path("missing", "pcq")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_configuration_validates() {
        let path = temp_path("config", "json");

        let config = Configuration::default().with_size(8000.0, 3000.0);
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let err = load_configuration(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let _ = fs::remove_file(&path);
    }
}
