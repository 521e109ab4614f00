// src/noyau/analyse.rs
//
// Analyse descendante récursive -> AstNode
//
// Grammaire:
//   expr   := term (('+'|'-') term)*
//   term   := factor (('*'|'/'|'%') factor)*
//   factor := ('+'|'-') factor | power
//   power  := atom ('**' factor)?            // associatif à droite ; "2**-1" accepté
//   atom   := number | ident | ident '(' args? ')' | '(' expr ')'
//   args   := expr (',' expr)* ','?        // "f()" refusé (Syntax)
//
// Le moins unaire est plus faible que ** sur sa gauche : "-2**2" = -(2**2).
//
// Règles de refus:
// - Jeton Interdit / '=' / virgule hors appel => DisallowedConstruct
// - argument nommé (f(x=1)) ou dépaquetage (f(*a)) => DisallowedConstruct
// - appel sur autre chose qu’un nom ("2(3)", "sin(1)(2)") => DisallowedConstruct
// - vide, parenthèses, jetons en trop => Syntax

use tracing::trace;

use super::arbre::{AstNode, BinOp, Sign};
use super::erreurs::ParseError;
use super::jetons::{format_tokens, tokenize, Tok};

/// Garde-fou : profondeur d’imbrication maximale (parenthèses + signes unaires).
const PROFONDEUR_MAX: usize = 200;

/// Garde-fou : la profondeur de l’arbre (chaînes "1+1+…") reste bornée par le nombre de jetons.
const JETONS_MAX: usize = 2_000;

/// Analyse un texte DÉJÀ normalisé.
/// Fonction pure : même texte => même arbre ou même erreur.
pub fn parse(text: &str) -> Result<AstNode, ParseError> {
    let tokens = tokenize(text)?;
    trace!(jetons = %format_tokens(&tokens), "tokenisation");
    if tokens.is_empty() {
        return Err(ParseError::Syntax("expression vide".into()));
    }
    if tokens.len() > JETONS_MAX {
        return Err(ParseError::Syntax("expression trop longue".into()));
    }

    let mut p = Parser {
        tokens,
        pos: 0,
        profondeur: 0,
    };
    let racine = p.expr()?;

    match p.peek() {
        None => Ok(racine),
        Some(t) => Err(jeton_inattendu(t, "fin d’expression attendue")),
    }
}

struct Parser {
    tokens: Vec<Tok>,
    pos: usize,
    profondeur: usize,
}

/// Classe un jeton inattendu : hors liste blanche ou simple faute de syntaxe.
fn jeton_inattendu(t: &Tok, contexte: &str) -> ParseError {
    match t {
        Tok::Interdit(s) => ParseError::DisallowedConstruct(format!("'{s}'")),
        Tok::Egal => ParseError::DisallowedConstruct("affectation".into()),
        Tok::Comma => ParseError::DisallowedConstruct("tuple".into()),
        autre => ParseError::Syntax(format!("{contexte}, trouvé {autre:?}")),
    }
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, decalage: usize) -> Option<&Tok> {
        self.tokens.get(self.pos + decalage)
    }

    fn advance(&mut self) -> Option<Tok> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn entrer(&mut self) -> Result<(), ParseError> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ParseError::Syntax("expression trop imbriquée".into()));
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    fn expr(&mut self) -> Result<AstNode, ParseError> {
        let mut gauche = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Tok::Plus) => BinOp::Add,
                Some(Tok::Minus) => BinOp::Sub,
                _ => return Ok(gauche),
            };
            self.pos += 1;
            let droite = self.term()?;
            gauche = AstNode::binaire(op, gauche, droite);
        }
    }

    fn term(&mut self) -> Result<AstNode, ParseError> {
        let mut gauche = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Tok::Star) => BinOp::Mul,
                Some(Tok::Slash) => BinOp::Div,
                Some(Tok::Percent) => BinOp::Mod,
                _ => return Ok(gauche),
            };
            self.pos += 1;
            let droite = self.factor()?;
            gauche = AstNode::binaire(op, gauche, droite);
        }
    }

    fn factor(&mut self) -> Result<AstNode, ParseError> {
        let sign = match self.peek() {
            Some(Tok::Plus) => Sign::Plus,
            Some(Tok::Minus) => Sign::Minus,
            _ => return self.power(),
        };
        self.pos += 1;

        self.entrer()?;
        let x = self.factor();
        self.sortir();
        Ok(AstNode::unaire(sign, x?))
    }

    fn power(&mut self) -> Result<AstNode, ParseError> {
        let base = self.atom()?;

        // appel sur une expression qui n’est pas un nom : l’AST ne sait pas le représenter
        if matches!(self.peek(), Some(Tok::LPar)) {
            return Err(ParseError::DisallowedConstruct(
                "appel sur une expression".into(),
            ));
        }

        if matches!(self.peek(), Some(Tok::DoubleStar)) {
            self.pos += 1;
            self.entrer()?;
            let exposant = self.factor();
            self.sortir();
            return Ok(AstNode::binaire(BinOp::Pow, base, exposant?));
        }

        Ok(base)
    }

    fn atom(&mut self) -> Result<AstNode, ParseError> {
        let Some(tok) = self.advance() else {
            return Err(ParseError::Syntax("opérande manquant en fin d’expression".into()));
        };

        match tok {
            Tok::Num(v) => Ok(AstNode::NumberLiteral(v)),

            Tok::Ident(name) => {
                if matches!(self.peek(), Some(Tok::LPar)) {
                    self.pos += 1;
                    self.entrer()?;
                    let args = self.args();
                    self.sortir();
                    Ok(AstNode::Call(name, args?))
                } else {
                    Ok(AstNode::Identifier(name))
                }
            }

            Tok::LPar => {
                self.entrer()?;
                let inner = self.expr();
                self.sortir();
                let inner = inner?;
                match self.advance() {
                    Some(Tok::RPar) => Ok(inner),
                    None => Err(ParseError::Syntax("parenthèse non fermée".into())),
                    Some(t) => Err(jeton_inattendu(&t, "')' attendue")),
                }
            }

            Tok::Interdit(s) => Err(ParseError::DisallowedConstruct(format!("'{s}'"))),

            autre => Err(ParseError::Syntax(format!("opérande attendu, trouvé {autre:?}"))),
        }
    }

    /// Arguments d’appel, après la '(' ouvrante (consomme la ')' fermante).
    fn args(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut out = Vec::new();

        // toutes les fonctions autorisées prennent au moins un argument
        if matches!(self.peek(), Some(Tok::RPar)) {
            return Err(ParseError::Syntax("appel sans argument".into()));
        }

        loop {
            // f(x=1) : argument nommé
            if matches!(self.peek(), Some(Tok::Ident(_)))
                && matches!(self.peek_at(1), Some(Tok::Egal))
            {
                return Err(ParseError::DisallowedConstruct("argument nommé".into()));
            }
            // f(*a) / f(**k) : dépaquetage
            if matches!(self.peek(), Some(Tok::Star | Tok::DoubleStar)) {
                return Err(ParseError::DisallowedConstruct("dépaquetage d’arguments".into()));
            }

            out.push(self.expr()?);

            match self.advance() {
                Some(Tok::RPar) => return Ok(out),
                Some(Tok::Comma) => {
                    // virgule finale tolérée : f(1,)
                    if matches!(self.peek(), Some(Tok::RPar)) {
                        self.pos += 1;
                        return Ok(out);
                    }
                }
                None => return Err(ParseError::Syntax("appel non fermé".into())),
                Some(Tok::Interdit(s)) => {
                    return Err(ParseError::DisallowedConstruct(format!("'{s}'")))
                }
                Some(Tok::Egal) => {
                    return Err(ParseError::DisallowedConstruct("argument nommé".into()))
                }
                Some(t) => {
                    return Err(ParseError::Syntax(format!(
                        "',' ou ')' attendue, trouvé {t:?}"
                    )))
                }
            }
        }
    }
}
