//! Configuration de lancement (ligne de commande) + journalisation.
//!
//! Aucun fichier de configuration : la mémoire et le mode d’angle ne survivent pas au processus.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::noyau::{AngleMode, DisplayResult, Session};

#[derive(Debug, Parser)]
#[command(author, version, about = "Calculatrice scientifique", long_about = None)]
pub struct Config {
    /// Mode d’angle initial (deg | rad)
    #[arg(long, default_value = "deg")]
    pub angle: AngleMode,

    /// Démarre avec le pavé scientifique masqué
    #[arg(long)]
    pub standard: bool,

    /// Évalue EXPR, affiche le résultat et quitte (sans fenêtre)
    #[arg(long, value_name = "EXPR")]
    pub eval: Option<String>,

    /// Filtre de journalisation par défaut (RUST_LOG est prioritaire)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Installe le subscriber tracing (stderr). Sans effet s’il en existe déjà un.
pub fn init_journal(filtre: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filtre));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Mode sans fenêtre : (texte à afficher, code de sortie).
pub fn evaluer_sans_fenetre(config: &Config, expr: &str) -> (String, i32) {
    let r = Session::new(config.angle).evaluate(expr);
    (r.to_string(), code_sortie(&r))
}

/// 0 si le résultat est affichable, 1 pour "Math Error".
pub fn code_sortie(r: &DisplayResult) -> i32 {
    if r.is_ok() {
        0
    } else {
        1
    }
}
