//! Session — état possédé par l’hôte (mode d’angle + registre mémoire).
//!
//! Le noyau reste sans état global : l’UI (ou le mode sans fenêtre) garde une Session
//! et la passe par référence. Un hôte multi-thread devra l’envelopper dans un Mutex.

use tracing::info;

use super::edition;
use super::eval;
use super::format::DisplayResult;
use super::memoire::{self, MemOp, MemoryEffect, MemoryRegister};
use super::trig::AngleMode;

#[derive(Clone, Debug, Default)]
pub struct Session {
    angle_mode: AngleMode,
    memoire: MemoryRegister,
}

impl Session {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            angle_mode,
            memoire: MemoryRegister::new(),
        }
    }

    pub fn evaluate(&self, text: &str) -> DisplayResult {
        eval::evaluate(text, self.angle_mode)
    }

    pub fn memory_op(&mut self, op: MemOp, text: &str) -> MemoryEffect {
        memoire::memory_op(&mut self.memoire, op, text, self.angle_mode)
    }

    pub fn toggle_sign(&self, text: &str) -> String {
        edition::toggle_sign(text)
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        if mode != self.angle_mode {
            info!(mode = %mode, "mode d’angle");
        }
        self.angle_mode = mode;
    }

    pub fn get_angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn memoire(&self) -> f64 {
        self.memoire.valeur()
    }
}
