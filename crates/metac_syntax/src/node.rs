//! Syntax node definitions.
//!
//! Nodes are allocated in a `bumpalo` arena and reference their children via
//! `&'a` references and arena slices. Nothing here owns heap memory, so the
//! arena never needs to run destructors.

use crate::separated_list::SeparatedList;
use crate::syntax_kind::SyntaxKind;
use crate::token::{LiteralValue, Token};
use crate::tree::SyntaxTreeId;
use metac_core::text::TextSpan;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all syntax nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    pub kind: SyntaxKind,
    /// Span from the first token's start to the last token's end, trivia
    /// excluded.
    pub span: TextSpan,
    /// The tree this node was parsed into.
    pub tree: SyntaxTreeId,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, span: TextSpan, tree: SyntaxTreeId) -> Self {
        Self { kind, span, tree }
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Compilation Unit & Members
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct CompilationUnit<'a> {
    pub data: NodeData,
    pub members: NodeList<'a, Member<'a>>,
    pub end_of_file_token: Token<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    FunctionDeclaration(FunctionDeclaration<'a>),
    GlobalStatement(GlobalStatement<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionDeclaration<'a> {
    pub data: NodeData,
    /// Always present; synthesized as `public` when the source omits it.
    pub access_modifier: Token<'a>,
    /// Modifiers after the first one, e.g. `static` in `public static`.
    pub extra_modifiers: NodeList<'a, Token<'a>>,
    /// `function`, or the return type's keyword when it doubles as intro.
    pub function_keyword: Token<'a>,
    pub return_type: OptionalNode<'a, TypeClause<'a>>,
    pub return_additional_type: OptionalNode<'a, AdditionalType<'a>>,
    pub identifier: Token<'a>,
    pub open_parenthesis_token: Token<'a>,
    pub parameters: SeparatedList<'a, Parameter<'a>>,
    pub close_parenthesis_token: Token<'a>,
    pub body: &'a Block<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct GlobalStatement<'a> {
    pub data: NodeData,
    pub statement: &'a Statement<'a>,
}

// ============================================================================
// Supporting Nodes
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a> {
    pub data: NodeData,
    pub type_clause: TypeClause<'a>,
    pub additional_type: OptionalNode<'a, AdditionalType<'a>>,
    pub identifier: Token<'a>,
}

/// `int`, `string[]`, `Point:` and friends.
#[derive(Debug, Clone, Copy)]
pub struct TypeClause<'a> {
    pub data: NodeData,
    /// The base type token: a type keyword, `var`/`let`, or an identifier.
    pub identifier: Token<'a>,
    pub is_array: bool,
    pub colon_token: Option<Token<'a>>,
}

/// The element types of a generic container, e.g. `<String, int>`.
#[derive(Debug, Clone, Copy)]
pub struct AdditionalType<'a> {
    pub data: NodeData,
    pub less_token: Token<'a>,
    pub types: NodeList<'a, Token<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ElseClause<'a> {
    pub data: NodeData,
    pub else_keyword: Token<'a>,
    pub statement: &'a Statement<'a>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub enum Statement<'a> {
    Block(Block<'a>),
    VariableDeclaration(VariableDeclaration<'a>),
    If(IfStatement<'a>),
    While(WhileStatement<'a>),
    DoWhile(DoWhileStatement<'a>),
    For(ForStatement<'a>),
    Break(BreakStatement<'a>),
    Continue(ContinueStatement<'a>),
    Return(ReturnStatement<'a>),
    Expression(ExpressionStatement<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub data: NodeData,
    pub open_brace_token: Token<'a>,
    pub statements: NodeList<'a, Statement<'a>>,
    pub close_brace_token: Token<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    pub type_clause: TypeClause<'a>,
    pub additional_type: OptionalNode<'a, AdditionalType<'a>>,
    /// The declared-kind slot: `>` after an additional type, an explicit
    /// declaration keyword, or nothing when the type clause already declared.
    pub keyword: Option<Token<'a>>,
    pub identifier: Token<'a>,
    pub equals_token: Token<'a>,
    pub initializer: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub if_keyword: Token<'a>,
    pub condition: &'a Expression<'a>,
    pub then_statement: &'a Statement<'a>,
    pub else_clause: OptionalNode<'a, ElseClause<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub while_keyword: Token<'a>,
    pub condition: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct DoWhileStatement<'a> {
    pub data: NodeData,
    pub do_keyword: Token<'a>,
    pub body: &'a Statement<'a>,
    pub while_keyword: Token<'a>,
    pub condition: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub for_keyword: Token<'a>,
    pub open_parenthesis_token: Token<'a>,
    pub declaration: &'a Statement<'a>,
    pub condition: &'a Expression<'a>,
    pub modifier: &'a Expression<'a>,
    pub close_parenthesis_token: Token<'a>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct BreakStatement<'a> {
    pub data: NodeData,
    pub keyword: Token<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ContinueStatement<'a> {
    pub data: NodeData,
    pub keyword: Token<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub return_keyword: Token<'a>,
    /// Present only when the expression starts on the keyword's line.
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub enum Expression<'a> {
    Literal(LiteralExpression<'a>),
    Name(NameExpression<'a>),
    Unary(UnaryExpression<'a>),
    Single(SingleExpression<'a>),
    Binary(BinaryExpression<'a>),
    Assignment(AssignmentExpression<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    ArrayDeclaration(ArrayDeclarationExpression<'a>),
    ArrayAccess(ArrayAccessExpression<'a>),
    VariableDeclaration(VariableDeclarationExpression<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct LiteralExpression<'a> {
    pub data: NodeData,
    pub literal_token: Token<'a>,
    pub value: Option<LiteralValue<'a>>,
}

/// `a`, `obj.field`, `Math.PI`.
#[derive(Debug, Clone, Copy)]
pub struct NameExpression<'a> {
    pub data: NodeData,
    pub identifier: Token<'a>,
    /// Dotted member tokens, dots excluded.
    pub members: NodeList<'a, Token<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct UnaryExpression<'a> {
    pub data: NodeData,
    pub operator_token: Token<'a>,
    pub operand: &'a Expression<'a>,
}

/// `i++` / `i--`.
#[derive(Debug, Clone, Copy)]
pub struct SingleExpression<'a> {
    pub data: NodeData,
    pub identifier: Token<'a>,
    pub operator_token: Token<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator_token: Token<'a>,
    pub right: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct AssignmentExpression<'a> {
    pub data: NodeData,
    pub identifier: Token<'a>,
    pub operator_token: Token<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub open_parenthesis_token: Token<'a>,
    pub expression: &'a Expression<'a>,
    pub close_parenthesis_token: Token<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub identifier: Token<'a>,
    pub members: NodeList<'a, Token<'a>>,
    pub open_parenthesis_token: Token<'a>,
    pub arguments: SeparatedList<'a, Expression<'a>>,
    pub close_parenthesis_token: Token<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub new_keyword: Token<'a>,
    pub expression: &'a Expression<'a>,
}

/// `int[size]`.
#[derive(Debug, Clone, Copy)]
pub struct ArrayDeclarationExpression<'a> {
    pub data: NodeData,
    pub type_token: Token<'a>,
    pub open_bracket_token: Token<'a>,
    pub size: &'a Expression<'a>,
    pub close_bracket_token: Token<'a>,
}

/// `items[i]`, `grid.rows[i]`.
#[derive(Debug, Clone, Copy)]
pub struct ArrayAccessExpression<'a> {
    pub data: NodeData,
    pub identifier: Token<'a>,
    pub members: NodeList<'a, Token<'a>>,
    pub open_bracket_token: Token<'a>,
    pub index: &'a Expression<'a>,
    pub close_bracket_token: Token<'a>,
}

/// An inline type reference used as a constructor, e.g. `List<int>()`.
#[derive(Debug, Clone, Copy)]
pub struct VariableDeclarationExpression<'a> {
    pub data: NodeData,
    pub type_clause: TypeClause<'a>,
    pub additional_type: OptionalNode<'a, AdditionalType<'a>>,
    pub greater_token: Option<Token<'a>>,
    pub open_parenthesis_token: Token<'a>,
    pub close_parenthesis_token: Token<'a>,
}
