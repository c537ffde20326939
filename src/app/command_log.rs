//! Verlauf der abgespielten Actions für die Replay-Diagnose.
//!
//! Der Verlauf ist unabhängig von der Szenen-History: er hält auch Actions
//! fest, die nichts committen (Moduswechsel, unbekannte Actions).

use super::ProjectAction;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Fenster der zuletzt verarbeiteten Actions, älteste zuerst.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<ProjectAction>,
    capacity: usize,
    /// Anzahl aller jemals aufgezeichneten Actions, auch der verdrängten
    total: usize,
    commits: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Standard-Fenstergröße
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Verlauf mit eigener Fenstergröße (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            total: 0,
            commits: 0,
        }
    }

    /// Hängt eine Action an; ist das Fenster voll, fällt die älteste heraus.
    pub fn record(&mut self, action: &ProjectAction) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(action.clone());
        self.total += 1;
        if action.commits_scene() {
            self.commits += 1;
        }
    }

    /// Anzahl der Actions im Fenster.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller aufgezeichneten Actions seit Erzeugung.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn entries(&self) -> &VecDeque<ProjectAction> {
        &self.entries
    }

    /// Die letzten `count` Actions, älteste zuerst.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ProjectAction> {
        self.entries.iter().skip(self.entries.len().saturating_sub(count))
    }

    /// Anzahl aller aufgezeichneten Actions, die einen History-Eintrag erzeugen.
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Häufigkeit je Action-Name in Reihenfolge des ersten Auftretens.
    pub fn tally(&self) -> IndexMap<&'static str, usize> {
        let mut tally = IndexMap::new();
        for action in &self.entries {
            *tally.entry(action.name()).or_insert(0) += 1;
        }
        tally
    }

    /// Kurzbeschreibung der letzten `count` Actions für Fehlermeldungen.
    pub fn describe_recent(&self, count: usize) -> String {
        let names: Vec<&str> = self.recent(count).map(ProjectAction::name).collect();
        if names.is_empty() {
            "keine".to_owned()
        } else {
            names.join(" → ")
        }
    }
}
