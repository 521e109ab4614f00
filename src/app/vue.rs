// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Affichage en lecture seule (le clavier passe par app.rs, pas par un TextEdit)
// - Ligne de bascules : Scientifique/Standard + DEG/RAD
// - Pavé scientifique (masquable) à gauche, pavé standard à droite

use eframe::egui;
use egui::Color32;

use super::etat::{Action, AppCalc};
use crate::noyau::MemOp;

const FOND_AFFICHAGE: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);
const TEXTE_AFFICHAGE: Color32 = Color32::from_rgb(0x00, 0xFF, 0xAB);
const FOND_TOUCHE: Color32 = Color32::from_rgb(0x2D, 0x2D, 0x3A);
const FOND_FONCTION: Color32 = Color32::from_rgb(0x4C, 0x4C, 0x6D);
const FOND_EGAL: Color32 = Color32::from_rgb(0xFF, 0x6B, 0x6B);
const FOND_ACCENT: Color32 = Color32::from_rgb(0xFF, 0xB3, 0x47);
const TEXTE_ACCENT: Color32 = Color32::from_rgb(0x2D, 0x1B, 0x00);

const TAILLE_TOUCHE: [f32; 2] = [72.0, 48.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Genre {
    Normal,
    Fonction,
    Egal,
    Accent,
}

struct Touche {
    label: &'static str,
    action: Action,
    genre: Genre,
}

const fn t(label: &'static str, action: Action, genre: Genre) -> Touche {
    Touche {
        label,
        action,
        genre,
    }
}

const fn chiffre(label: &'static str) -> Touche {
    t(label, Action::Inserer(label), Genre::Normal)
}

const fn fonction(label: &'static str, insere: &'static str) -> Touche {
    t(label, Action::Inserer(insere), Genre::Fonction)
}

const PAVE_STANDARD: [[Touche; 4]; 6] = [
    [
        t("MC", Action::Memoire(MemOp::Clear), Genre::Fonction),
        t("MR", Action::Memoire(MemOp::Recall), Genre::Fonction),
        t("M+", Action::Memoire(MemOp::Add), Genre::Fonction),
        t("M-", Action::Memoire(MemOp::Subtract), Genre::Fonction),
    ],
    [
        t("C", Action::Effacer, Genre::Accent),
        t("DEL", Action::Retour, Genre::Accent),
        fonction("(", "("),
        fonction(")", ")"),
    ],
    [chiffre("7"), chiffre("8"), chiffre("9"), fonction("÷", " ÷ ")],
    [chiffre("4"), chiffre("5"), chiffre("6"), fonction("×", " × ")],
    [chiffre("1"), chiffre("2"), chiffre("3"), fonction("-", " - ")],
    [
        chiffre("0"),
        chiffre("."),
        fonction("+", " + "),
        t("=", Action::Egal, Genre::Egal),
    ],
];

const PAVE_SCIENTIFIQUE: [[Touche; 4]; 6] = [
    [
        fonction("sin", "sin("),
        fonction("cos", "cos("),
        fonction("tan", "tan("),
        fonction("^", " ^ "),
    ],
    [
        fonction("asin", "asin("),
        fonction("acos", "acos("),
        fonction("atan", "atan("),
        fonction("√", "sqrt("),
    ],
    [
        fonction("sinh", "sinh("),
        fonction("cosh", "cosh("),
        fonction("tanh", "tanh("),
        fonction("x²", "square("),
    ],
    [
        fonction("log", "log10("),
        fonction("ln", "ln("),
        fonction("exp", "exp("),
        fonction("x³", "cube("),
    ],
    [
        fonction("x!", "factorial("),
        fonction("|x|", "abs("),
        fonction("π", "pi"),
        fonction("e", "e"),
    ],
    [
        fonction("%", "%"),
        fonction("÷", " ÷ "),
        fonction("×", " × "),
        t("+/-", Action::Signe, Genre::Fonction),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);
        ui.add_space(8.0);
        self.ui_bascules(ui);
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            if self.scientifique {
                ui.vertical(|ui| self.ui_pave(ui, "pave_scientifique", &PAVE_SCIENTIFIQUE));
                ui.add_space(10.0);
            }
            ui.vertical(|ui| self.ui_pave(ui, "pave_standard", &PAVE_STANDARD));
        });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(FOND_AFFICHAGE)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .monospace()
                            .size(28.0)
                            .strong()
                            .color(TEXTE_AFFICHAGE),
                    );
                });
            });
    }

    fn ui_bascules(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let vue = if self.scientifique {
                "Scientifique"
            } else {
                "Standard"
            };
            if Self::bouton(ui, vue, Genre::Fonction, [130.0, 38.0]).clicked() {
                self.basculer_vue();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mode = self.session.get_angle_mode().label();
                if Self::bouton(ui, mode, Genre::Fonction, [90.0, 38.0]).clicked() {
                    self.basculer_angle();
                }
            });
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, id: &str, pave: &[[Touche; 4]; 6]) {
        egui::Grid::new(id)
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in pave {
                    for touche in ligne {
                        if Self::bouton(ui, touche.label, touche.genre, TAILLE_TOUCHE).clicked() {
                            self.appliquer(touche.action);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(ui: &mut egui::Ui, label: &str, genre: Genre, taille: [f32; 2]) -> egui::Response {
        let (fond, texte) = match genre {
            Genre::Normal => (FOND_TOUCHE, Color32::WHITE),
            Genre::Fonction => (FOND_FONCTION, Color32::WHITE),
            Genre::Egal => (FOND_EGAL, Color32::WHITE),
            Genre::Accent => (FOND_ACCENT, TEXTE_ACCENT),
        };
        let b = egui::Button::new(
            egui::RichText::new(label)
                .monospace()
                .size(16.0)
                .strong()
                .color(texte),
        )
        .fill(fond);
        ui.add_sized(taille, b)
    }
}
