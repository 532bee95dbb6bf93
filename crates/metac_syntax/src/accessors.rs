//! `data()`/`kind()` accessors for the node enums.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use metac_core::TextSpan;

impl<'a> Member<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Member::FunctionDeclaration(n) => &n.data,
            Member::GlobalStatement(n) => &n.data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Block(n) => &n.data,
            Statement::VariableDeclaration(n) => &n.data,
            Statement::If(n) => &n.data,
            Statement::While(n) => &n.data,
            Statement::DoWhile(n) => &n.data,
            Statement::For(n) => &n.data,
            Statement::Break(n) => &n.data,
            Statement::Continue(n) => &n.data,
            Statement::Return(n) => &n.data,
            Statement::Expression(n) => &n.data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn span(&self) -> TextSpan {
        self.data().span
    }
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Literal(n) => &n.data,
            Expression::Name(n) => &n.data,
            Expression::Unary(n) => &n.data,
            Expression::Single(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Assignment(n) => &n.data,
            Expression::Parenthesized(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::New(n) => &n.data,
            Expression::ArrayDeclaration(n) => &n.data,
            Expression::ArrayAccess(n) => &n.data,
            Expression::VariableDeclaration(n) => &n.data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn span(&self) -> TextSpan {
        self.data().span
    }
}
