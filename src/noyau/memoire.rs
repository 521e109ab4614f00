//! Registre mémoire (MC / MR / M+ / M-)
//!
//! Contrats :
//! - une seule cellule f64, initialisée à 0
//! - la valeur courante vient de l’évaluation du texte affiché ; tout échec vaut 0.0
//! - une opération mémoire ne produit JAMAIS d’erreur visible
//! - le registre reste fini : un M+/M- qui déborderait est ignoré

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use super::eval::valeur;
use super::format::format_nombre;
use super::trig::AngleMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

impl MemOp {
    pub fn label(self) -> &'static str {
        match self {
            MemOp::Clear => "MC",
            MemOp::Recall => "MR",
            MemOp::Add => "M+",
            MemOp::Subtract => "M-",
        }
    }
}

impl fmt::Display for MemOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MemOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MC" => Ok(MemOp::Clear),
            "MR" => Ok(MemOp::Recall),
            "M+" => Ok(MemOp::Add),
            "M-" => Ok(MemOp::Subtract),
            autre => Err(format!("opération mémoire inconnue: '{autre}'")),
        }
    }
}

/// Effet d’une opération mémoire sur l’affichage.
/// `display` n’est présent que pour MR (le texte tapé est alors remplacé).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryEffect {
    pub display: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryRegister {
    valeur: f64,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn valeur(&self) -> f64 {
        self.valeur
    }

    fn cumuler(&mut self, delta: f64) {
        let v = self.valeur + delta;
        if v.is_finite() {
            self.valeur = v;
        } else {
            warn!(registre = self.valeur, delta, "débordement du registre mémoire, ignoré");
        }
    }
}

/// Applique `op` au registre, `current_text` étant le texte affiché.
pub fn memory_op(
    reg: &mut MemoryRegister,
    op: MemOp,
    current_text: &str,
    mode: AngleMode,
) -> MemoryEffect {
    match op {
        MemOp::Clear => reg.valeur = 0.0,
        MemOp::Recall => {
            debug!(registre = reg.valeur, "MR");
            return MemoryEffect {
                display: Some(format_nombre(reg.valeur)),
            };
        }
        MemOp::Add => reg.cumuler(valeur_courante(current_text, mode)),
        MemOp::Subtract => reg.cumuler(-valeur_courante(current_text, mode)),
    }

    debug!(op = %op, registre = reg.valeur, "opération mémoire");
    MemoryEffect::default()
}

/// Valeur du texte affiché ; vide ou invalide => 0.0.
fn valeur_courante(text: &str, mode: AngleMode) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }
    valeur(text, mode).unwrap_or_else(|e| {
        debug!(texte = %text, kind = e.kind(), "valeur courante invalide, 0 utilisé");
        0.0
    })
}
