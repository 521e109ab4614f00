// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Le clavier physique est routé ici (pas de TextEdit : l’affichage est en lecture seule) :
// - Enter évalue, Backspace efface un caractère, Escape vide l’affichage
// - caractères autorisés ajoutés (voir noyau::edition::touche_clavier), lettres ignorées

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Action;

/// Tailles minimales de fenêtre selon la vue.
const MIN_STANDARD: [f32; 2] = [360.0, 560.0];
const MIN_SCIENTIFIQUE: [f32; 2] = [700.0, 560.0];

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let evenements = ctx.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.appliquer(Action::Egal),
                    egui::Key::Backspace => self.appliquer(Action::Retour),
                    egui::Key::Escape => self.appliquer(Action::Effacer),
                    _ => {}
                },
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche(c);
                    }
                }
                _ => {}
            }
        }

        if self.vue_appliquee != Some(self.scientifique) {
            let min = if self.scientifique {
                MIN_SCIENTIFIQUE
            } else {
                MIN_STANDARD
            };
            ctx.send_viewport_cmd(egui::ViewportCommand::MinInnerSize(min.into()));
            self.vue_appliquee = Some(self.scientifique);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
