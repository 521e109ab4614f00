// src/noyau/arbre.rs
//
// AST fermé : exactement cinq sortes de nœuds.
// L’analyseur ne sait construire que celles-ci ; tout le reste est refusé avant.
// Chaque nœud possède ses enfants (Box / Vec), l’arbre est libéré avec sa racine.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AstNode {
    NumberLiteral(f64),
    Identifier(String),
    UnaryOp(Sign, Box<AstNode>),
    BinaryOp(BinOp, Box<AstNode>, Box<AstNode>),
    Call(String, Vec<AstNode>),
}

impl AstNode {
    pub fn binaire(op: BinOp, a: AstNode, b: AstNode) -> Self {
        AstNode::BinaryOp(op, Box::new(a), Box::new(b))
    }

    pub fn unaire(sign: Sign, x: AstNode) -> Self {
        AstNode::UnaryOp(sign, Box::new(x))
    }
}

impl BinOp {
    fn symbole(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "**",
            BinOp::Mod => "%",
        }
    }
}

/// Forme entièrement parenthésée (journaux + tests de précédence).
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::NumberLiteral(v) => write!(f, "{v}"),
            AstNode::Identifier(name) => f.write_str(name),
            AstNode::UnaryOp(Sign::Plus, x) => write!(f, "(+{x})"),
            AstNode::UnaryOp(Sign::Minus, x) => write!(f, "(-{x})"),
            AstNode::BinaryOp(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
            AstNode::Call(name, args) => {
                write!(f, "{name}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{a}")?;
                }
                f.write_str(")")
            }
        }
    }
}
