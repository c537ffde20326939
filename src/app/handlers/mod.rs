//! Feature-Handler für die Action-Verarbeitung.
//!
//! Jeder Handler gruppiert die Actions eines Feature-Bereichs und arbeitet
//! auf der Arbeitskopie des States, die `transition` vorbereitet.

pub mod editing;
pub mod history;
pub mod project;
pub mod selection;
