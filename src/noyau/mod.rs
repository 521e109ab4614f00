//! Noyau de calcul (flottant, bac à sable)
//!
//! Organisation interne :
//! - jetons.rs   : normalisation des glyphes (× ÷ ^ %) + tokenisation
//! - arbre.rs    : AST fermé (5 sortes de nœuds)
//! - analyse.rs  : descente récursive -> AST ; refus hors liste blanche
//! - env.rs      : constantes + fonctions autorisées (table fixe)
//! - trig.rs     : mode d’angle DEG/RAD + adaptation trig
//! - eval.rs     : parcours de l’AST + pipeline `evaluate`
//! - format.rs   : repli entier + "Math Error"
//! - memoire.rs  : registre MC/MR/M+/M-
//! - edition.rs  : +/- et filtrage clavier (texte brut)
//! - session.rs  : état possédé par l’hôte

pub mod analyse;
pub mod arbre;
pub mod edition;
pub mod env;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod memoire;
pub mod session;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use format::DisplayResult;
pub use memoire::MemOp;
pub use session::Session;
pub use trig::AngleMode;
