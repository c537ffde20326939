//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von `app` und der Binary
//! gemeinsam genutzt wird.

pub mod options;

pub use options::{EditorOptions, UndoCadence, CONFIG_FILE_NAME};
