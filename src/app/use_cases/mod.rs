//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Alle Use-Cases arbeiten auf `Arc<Scene>` und liefern einen neuen Snapshot;
//! das Committen in die History übernehmen die Handler.

pub mod batch;
pub mod removal;
pub mod selection;
