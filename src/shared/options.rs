//! Zentrale Konfiguration für den Grundriss-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── History ─────────────────────────────────────────────────────────

/// Standard-Obergrenze der History (`None` = unbegrenzt).
pub const HISTORY_LIMIT: Option<usize> = None;

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "floorplan_editor.toml";

/// Verhalten von `UNDO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoCadence {
    /// Bestehendes Verhalten: der erste Undo nach einem Commit kürzt nur die
    /// History, erst der zweite macht den vorherigen Snapshot sichtbar.
    #[default]
    Legacy,
    /// Jeder Undo geht genau einen Commit zurück; danach gilt weiterhin
    /// `history.last() == scene`.
    SingleStep,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floorplan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Undo-Verhalten
    #[serde(default)]
    pub undo_cadence: UndoCadence,
    /// Maximale Anzahl History-Snapshots; älteste werden beim Push verworfen
    #[serde(default = "default_history_limit")]
    pub history_limit: Option<usize>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            undo_cadence: UndoCadence::default(),
            history_limit: HISTORY_LIMIT,
        }
    }
}

/// Serde-Default für `history_limit` (Abwärtskompatibilität).
fn default_history_limit() -> Option<usize> {
    HISTORY_LIMIT
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floorplan-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_legacy_undo_and_unbounded_history() {
        let options = EditorOptions::default();
        assert_eq!(options.undo_cadence, UndoCadence::Legacy);
        assert_eq!(options.history_limit, None);
    }

    #[test]
    fn parses_partial_toml() {
        let options: EditorOptions = toml::from_str("undo_cadence = \"single_step\"").unwrap();
        assert_eq!(options.undo_cadence, UndoCadence::SingleStep);
        assert_eq!(options.history_limit, None);

        let options: EditorOptions = toml::from_str("history_limit = 50").unwrap();
        assert_eq!(options.undo_cadence, UndoCadence::Legacy);
        assert_eq!(options.history_limit, Some(50));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("floorplan_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "floorplan_editor_options_{}.toml",
            std::process::id()
        ));
        let options = EditorOptions {
            undo_cadence: UndoCadence::SingleStep,
            history_limit: Some(10),
        };
        options.save_to_file(&path).unwrap();
        assert_eq!(EditorOptions::load_from_file(&path), options);
        let _ = std::fs::remove_file(&path);
    }
}
