//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir le texte affiché, la vue (scientifique/standard) et la Session du noyau,
//! et offrir les actions des touches sans logique d’affichage.
//!
//! Contrats :
//! - Taper n’échoue jamais : seul "=" évalue (et peut afficher "Math Error").
//! - Les opérations mémoire ne changent l’affichage que pour MR.
//! - Un échec d’évaluation ne touche ni la mémoire ni le mode d’angle.

use crate::noyau::edition::touche_clavier;
use crate::noyau::{AngleMode, MemOp, Session};

/// Action portée par une touche (pavé ou clavier physique).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Inserer(&'static str),
    Memoire(MemOp),
    Effacer,
    Retour,
    Egal,
    Signe,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- texte affiché (expression en cours ou dernier résultat) ---
    pub affichage: String,

    // --- noyau : mode d’angle + registre mémoire ---
    pub session: Session,

    // --- vue ---
    pub scientifique: bool,

    // Dernière vue pour laquelle la taille minimale de fenêtre a été envoyée.
    pub vue_appliquee: Option<bool>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(AngleMode::Degrees, true)
    }
}

impl AppCalc {
    pub fn new(angle: AngleMode, scientifique: bool) -> Self {
        Self {
            affichage: String::new(),
            session: Session::new(angle),
            scientifique,
            vue_appliquee: None,
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    pub fn appliquer(&mut self, action: Action) {
        match action {
            Action::Inserer(s) => self.affichage.push_str(s),
            Action::Memoire(op) => self.memoire(op),
            Action::Effacer => self.affichage.clear(),
            Action::Retour => {
                self.affichage.pop();
            }
            Action::Egal => self.evaluer(),
            Action::Signe => {
                if !self.affichage.is_empty() {
                    self.affichage = self.session.toggle_sign(&self.affichage);
                }
            }
        }
    }

    /// "=" : remplace l’affichage par le résultat (ou "Math Error").
    /// Affichage vide : rien à faire.
    pub fn evaluer(&mut self) {
        if self.affichage.trim().is_empty() {
            return;
        }
        self.affichage = self.session.evaluate(&self.affichage).texte().to_string();
    }

    pub fn memoire(&mut self, op: MemOp) {
        let effet = self.session.memory_op(op, &self.affichage);
        if let Some(texte) = effet.display {
            self.affichage = texte;
        }
    }

    /// Caractère tapé au clavier physique ; les lettres sont ignorées.
    pub fn touche(&mut self, c: char) {
        if let Some(s) = touche_clavier(c) {
            self.affichage.push_str(&s);
        }
    }

    pub fn basculer_angle(&mut self) {
        let mode = self.session.get_angle_mode().basculer();
        self.session.set_angle_mode(mode);
    }

    pub fn basculer_vue(&mut self) {
        self.scientifique = !self.scientifique;
    }
}
