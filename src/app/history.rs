use crate::core::Scene;
use crate::shared::UndoCadence;
use std::sync::Arc;

/// Lineare Szenen-History (append-only bis auf explizites `pop`).
///
/// Einträge sind `Arc<Scene>`: ein Push ist O(1) ohne Deep-Clone, und jeder
/// Leser darf einen alten Snapshot beliebig lange halten, weil Änderungen
/// immer über `Arc::make_mut` auf einer neuen Kopie passieren.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneHistory {
    entries: Vec<Arc<Scene>>,
}

impl SceneHistory {
    /// Erstellt eine leere History.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Erstellt eine History mit genau einem Snapshot.
    pub fn with_initial(scene: Arc<Scene>) -> Self {
        Self {
            entries: vec![scene],
        }
    }

    /// Anzahl der Snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Snapshots vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Jüngster Snapshot.
    pub fn last(&self) -> Option<&Arc<Scene>> {
        self.entries.last()
    }

    /// Read-only Sicht auf alle Snapshots (ältester zuerst).
    pub fn entries(&self) -> &[Arc<Scene>] {
        &self.entries
    }

    /// Prüft, ob `scene` referenzgleich mit dem jüngsten Snapshot ist.
    pub fn is_top(&self, scene: &Arc<Scene>) -> bool {
        self.last().is_some_and(|top| Arc::ptr_eq(top, scene))
    }

    /// Hängt einen Snapshot an. Mit `limit` werden die ältesten verworfen,
    /// mindestens ein Snapshot bleibt immer erhalten.
    pub fn push(&mut self, scene: Arc<Scene>, limit: Option<usize>) {
        self.entries.push(scene);
        if let Some(limit) = limit {
            let limit = limit.max(1);
            if self.entries.len() > limit {
                let overflow = self.entries.len() - limit;
                self.entries.drain(..overflow);
            }
        }
    }

    /// Entfernt den jüngsten Snapshot.
    pub fn pop(&mut self) -> Option<Arc<Scene>> {
        self.entries.pop()
    }

    /// Führt einen Undo-Schritt auf der History aus und liefert die Szene,
    /// die danach sichtbar sein soll. `None` bei leerer History.
    ///
    /// Mit genau einem Snapshot wird dieser geliefert und behalten.
    pub fn undo_step(&mut self, current: &Arc<Scene>, cadence: UndoCadence) -> Option<Arc<Scene>> {
        match (self.entries.len(), cadence) {
            (0, _) => None,
            (1, _) => self.last().cloned(),
            // Sichtbar wird der jüngste Snapshot, danach wird er entfernt.
            // Direkt nach einem Commit ist das die aktuelle Szene selbst.
            (_, UndoCadence::Legacy) => self.entries.pop(),
            (_, UndoCadence::SingleStep) => {
                if self.is_top(current) {
                    self.entries.pop();
                }
                self.last().cloned()
            }
        }
    }
}
