//! SyntaxKind enum - every token, trivia and node kind of the source language.

/// The kind of a token, trivia piece or syntax node.
///
/// Variants are grouped so that range checks work: trivia, punctuation,
/// assignment operators and keywords each occupy a contiguous block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    BadToken,
    EndOfFileToken,

    // Trivia
    WhitespaceTrivia,
    LineBreakTrivia,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    SkippedTextTrivia,

    // Literals
    NumberToken,
    StringToken,
    IdentifierToken,

    // Punctuation
    PlusToken,
    MinusToken,
    StarToken,
    SlashToken,
    BangToken,
    TildeToken,
    HatToken,
    AmpersandToken,
    AmpersandAmpersandToken,
    PipeToken,
    PipePipeToken,
    EqualsEqualsToken,
    BangEqualsToken,
    LessToken,
    LessOrEqualsToken,
    GreaterToken,
    GreaterOrEqualsToken,
    PlusPlusToken,
    MinusMinusToken,
    OpenParenthesisToken,
    CloseParenthesisToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenSquareBracketToken,
    CloseSquareBracketToken,
    ColonToken,
    CommaToken,
    PeriodToken,
    SemicolonToken,

    // Assignment operators
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    StarEqualsToken,
    SlashEqualsToken,
    AmpersandEqualsToken,
    PipeEqualsToken,
    HatEqualsToken,

    // Keywords
    BreakKeyword,
    ContinueKeyword,
    DoKeyword,
    ElseKeyword,
    FalseKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    LetKeyword,
    NewKeyword,
    ReturnKeyword,
    ToKeyword,
    TrueKeyword,
    VarKeyword,
    WhileKeyword,
    IntKeyword,
    FloatKeyword,
    StringKeyword,
    DoubleKeyword,
    ListKeyword,
    DictionaryKeyword,
    PublicKeyword,
    PrivateKeyword,
    SealedKeyword,
    StaticKeyword,
    /// `ContainsKey`, lexed as a keyword so it can be renamed on emission.
    ContainsKeyCall,

    // ========================================================================
    // Nodes
    // ========================================================================
    CompilationUnit,
    FunctionDeclaration,
    GlobalStatement,
    Parameter,
    TypeClause,
    AdditionalType,
    ElseClause,

    // Statements
    BlockStatement,
    VariableDeclaration,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    ExpressionStatement,

    // Expressions
    LiteralExpression,
    NameExpression,
    UnaryExpression,
    SingleExpression,
    BinaryExpression,
    AssignmentExpression,
    ParenthesizedExpression,
    CallExpression,
    NewExpression,
    ArrayDeclarationExpression,
    ArrayAccessExpression,
    VariableDeclarationExpression,
}

impl SyntaxKind {
    #[inline]
    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        let v = self as u16;
        v >= first as u16 && v <= last as u16
    }

    /// Whether this kind represents trivia.
    #[inline]
    pub fn is_trivia(self) -> bool {
        self.in_range(SyntaxKind::WhitespaceTrivia, SyntaxKind::SkippedTextTrivia)
    }

    /// Whether this kind represents a keyword (including `ContainsKey`).
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.in_range(SyntaxKind::BreakKeyword, SyntaxKind::ContainsKeyCall)
    }

    /// Whether this kind is a lexical token rather than a node kind.
    #[inline]
    pub fn is_token(self) -> bool {
        self.in_range(SyntaxKind::BadToken, SyntaxKind::ContainsKeyCall)
    }

    /// `=` and every compound assignment operator.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self.in_range(SyntaxKind::EqualsToken, SyntaxKind::HatEqualsToken)
    }

    /// `++` or `--`.
    #[inline]
    pub fn is_increment_or_decrement(self) -> bool {
        matches!(self, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken)
    }

    /// Built-in type keywords usable as the base of a type clause.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::IntKeyword
                | SyntaxKind::FloatKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::DoubleKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ListKeyword
                | SyntaxKind::DictionaryKeyword
        )
    }

    /// Tokens that may open a variable declaration statement.
    pub fn is_declaration_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::LetKeyword
                | SyntaxKind::VarKeyword
                | SyntaxKind::IntKeyword
                | SyntaxKind::FloatKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::ListKeyword
                | SyntaxKind::DictionaryKeyword
        )
    }

    /// Type tokens that can start a type reference inside an expression
    /// (`int[10]`, `List<int>()`).
    pub fn is_type_syntax(self) -> bool {
        matches!(
            self,
            SyntaxKind::IntKeyword
                | SyntaxKind::FloatKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::DoubleKeyword
                | SyntaxKind::VarKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::ListKeyword
                | SyntaxKind::DictionaryKeyword
        )
    }

    /// Tokens accepted in place of the `function` keyword.
    pub fn is_function_intro(self) -> bool {
        matches!(
            self,
            SyntaxKind::IntKeyword
                | SyntaxKind::FloatKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::FunctionKeyword
        )
    }

    pub fn is_access_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::SealedKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    /// Keywords that always begin a statement, never a member declaration.
    pub fn is_statement_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::IfKeyword
                | SyntaxKind::WhileKeyword
                | SyntaxKind::DoKeyword
                | SyntaxKind::ForKeyword
                | SyntaxKind::BreakKeyword
                | SyntaxKind::ContinueKeyword
                | SyntaxKind::ReturnKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::VarKeyword
                | SyntaxKind::NewKeyword
        )
    }

    /// Source spelling of a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::ToKeyword => Some("to"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::IntKeyword => Some("int"),
            SyntaxKind::FloatKeyword => Some("float"),
            SyntaxKind::StringKeyword => Some("string"),
            SyntaxKind::DoubleKeyword => Some("double"),
            SyntaxKind::ListKeyword => Some("List"),
            SyntaxKind::DictionaryKeyword => Some("Dictionary"),
            SyntaxKind::PublicKeyword => Some("public"),
            SyntaxKind::PrivateKeyword => Some("private"),
            SyntaxKind::SealedKeyword => Some("sealed"),
            SyntaxKind::StaticKeyword => Some("static"),
            SyntaxKind::ContainsKeyCall => Some("ContainsKey"),
            _ => None,
        }
    }

    /// Look up a keyword kind from identifier text. Case-sensitive.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "break" => Some(SyntaxKind::BreakKeyword),
            "continue" => Some(SyntaxKind::ContinueKeyword),
            "do" => Some(SyntaxKind::DoKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "function" => Some(SyntaxKind::FunctionKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "let" => Some(SyntaxKind::LetKeyword),
            "new" => Some(SyntaxKind::NewKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            "to" => Some(SyntaxKind::ToKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            "int" => Some(SyntaxKind::IntKeyword),
            "float" => Some(SyntaxKind::FloatKeyword),
            "string" => Some(SyntaxKind::StringKeyword),
            "double" => Some(SyntaxKind::DoubleKeyword),
            "List" => Some(SyntaxKind::ListKeyword),
            "Dictionary" => Some(SyntaxKind::DictionaryKeyword),
            "public" => Some(SyntaxKind::PublicKeyword),
            "private" => Some(SyntaxKind::PrivateKeyword),
            "sealed" => Some(SyntaxKind::SealedKeyword),
            "static" => Some(SyntaxKind::StaticKeyword),
            "ContainsKey" => Some(SyntaxKind::ContainsKeyCall),
            _ => None,
        }
    }

    /// Source spelling of a punctuation or operator token.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::StarToken => Some("*"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::BangToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::HatToken => Some("^"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::PipeToken => Some("|"),
            SyntaxKind::PipePipeToken => Some("||"),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::BangEqualsToken => Some("!="),
            SyntaxKind::LessToken => Some("<"),
            SyntaxKind::LessOrEqualsToken => Some("<="),
            SyntaxKind::GreaterToken => Some(">"),
            SyntaxKind::GreaterOrEqualsToken => Some(">="),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::OpenParenthesisToken => Some("("),
            SyntaxKind::CloseParenthesisToken => Some(")"),
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenSquareBracketToken => Some("["),
            SyntaxKind::CloseSquareBracketToken => Some("]"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::PeriodToken => Some("."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::StarEqualsToken => Some("*="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::AmpersandEqualsToken => Some("&="),
            SyntaxKind::PipeEqualsToken => Some("|="),
            SyntaxKind::HatEqualsToken => Some("^="),
            _ => None,
        }
    }

    /// Fixed spelling of a token kind, if it has one.
    pub fn text(self) -> Option<&'static str> {
        self.keyword_text().or_else(|| self.punctuation_text())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
