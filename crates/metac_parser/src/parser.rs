//! Recursive descent parser.
//!
//! Every `parse_*` method consumes zero or more tokens and returns a node;
//! none of them fail. Missing tokens come back from `match_token` as
//! zero-width placeholders and the mismatch is reported once. Loops over
//! lists guard against zero progress by skipping the current token.

use crate::lookahead::{ends_with_layout_break, DottedAccess, MemberKind};
use crate::precedence::{binary_operator_precedence, unary_operator_precedence, OperatorPrecedence};
use crate::token_stream::TokenStream;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use metac_core::text::{TextPos, TextSpan};
use metac_core::SourceText;
use metac_diagnostics::{messages, Diagnostic};
use metac_syntax::*;

/// Maximum recursion depth for nested statements and expressions.
const MAX_RECURSION_DEPTH: u32 = 200;

/// Parser settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// After a `for` modifier, always skip one token before matching `)`.
    /// Off by default: only a stray `;` is skipped there.
    pub strict_compat: bool,
}

pub struct Parser<'a> {
    arena: &'a Bump,
    source: &'a SourceText,
    pub(crate) tokens: TokenStream<'a>,
    tree_id: SyntaxTreeId,
    options: ParseOptions,
    lexer_diagnostics: Vec<Diagnostic>,
    recursion_depth: u32,
    reported_too_deep: bool,
}

impl<'a> Parser<'a> {
    /// Lex `source` and prepare to parse it.
    pub fn new(arena: &'a Bump, source: &'a SourceText) -> Self {
        let (tokens, diagnostics) = metac_lexer::lex(arena, source);
        let mut parser = Self::from_tokens(arena, source, tokens);
        parser.lexer_diagnostics = diagnostics;
        parser
    }

    /// Parse an already lexed token stream.
    pub fn from_tokens(arena: &'a Bump, source: &'a SourceText, tokens: Vec<Token<'a>>) -> Self {
        Self {
            arena,
            source,
            tokens: TokenStream::new(arena, source, tokens),
            tree_id: SyntaxTreeId::next(),
            options: ParseOptions::default(),
            lexer_diagnostics: Vec::new(),
            recursion_depth: 0,
            reported_too_deep: false,
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse the whole input into a syntax tree.
    pub fn parse(mut self) -> SyntaxTree<'a> {
        let root = self.parse_compilation_unit();

        let mut diagnostics = self.lexer_diagnostics;
        diagnostics.extend(self.tokens.into_diagnostics());
        tracing::debug!(
            file = self.source.file_name(),
            members = root.members.len(),
            diagnostics = diagnostics.len(),
            "parsed compilation unit"
        );

        SyntaxTree {
            id: self.tree_id,
            source: self.source,
            root,
            diagnostics,
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.tokens.current_kind()
    }

    fn current_start(&self) -> TextPos {
        self.tokens.current().span.start
    }

    /// Node data spanning from `start` to the end of the last consumed token.
    fn node(&self, kind: SyntaxKind, start: TextPos) -> NodeData {
        let end = self.tokens.previous_end().max(start);
        NodeData::new(kind, TextSpan::from_bounds(start, end), self.tree_id)
    }

    fn enter_nesting(&mut self) -> bool {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            if !self.reported_too_deep {
                self.reported_too_deep = true;
                let span = self.tokens.current().span;
                self.tokens
                    .report(Diagnostic::at(self.source, span, &messages::EXPRESSION_TOO_DEEP, &[]));
            }
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    fn leave_nesting(&mut self) {
        self.recursion_depth -= 1;
    }

    fn missing_expression(&self) -> Expression<'a> {
        let start = self.current_start();
        Expression::Name(NameExpression {
            data: NodeData::new(SyntaxKind::NameExpression, TextSpan::empty(start), self.tree_id),
            identifier: Token::missing(SyntaxKind::IdentifierToken, start),
            members: &[],
        })
    }

    fn missing_statement(&self) -> Statement<'a> {
        let expression = self.alloc(self.missing_expression());
        Statement::Expression(ExpressionStatement {
            data: NodeData::new(SyntaxKind::ExpressionStatement, expression.span(), self.tree_id),
            expression,
        })
    }

    // ========================================================================
    // Compilation Unit & Members
    // ========================================================================

    fn parse_compilation_unit(&mut self) -> &'a CompilationUnit<'a> {
        let members = self.parse_members();
        let end_of_file_token = self.tokens.match_token(SyntaxKind::EndOfFileToken);
        let span = TextSpan::new(0, self.source.len() as TextPos);

        self.alloc(CompilationUnit {
            data: NodeData::new(SyntaxKind::CompilationUnit, span, self.tree_id),
            members,
            end_of_file_token,
        })
    }

    fn parse_members(&mut self) -> NodeList<'a, Member<'a>> {
        let mut members = BumpVec::new_in(self.arena);

        while self.current_kind() != SyntaxKind::EndOfFileToken {
            let start_position = self.tokens.position();
            members.push(self.parse_member());

            // Skip the offending token so parsing always makes progress.
            if self.tokens.position() == start_position {
                self.tokens.advance();
            }
        }

        members.into_bump_slice()
    }

    fn parse_member(&mut self) -> Member<'a> {
        match self.classify_member() {
            MemberKind::FunctionDeclaration => Member::FunctionDeclaration(self.parse_function_declaration()),
            MemberKind::GlobalStatement => Member::GlobalStatement(self.parse_global_statement()),
        }
    }

    fn parse_function_declaration(&mut self) -> FunctionDeclaration<'a> {
        let start = self.current_start();
        let access_modifier = self.parse_access_modifier();

        let mut extra_modifiers = BumpVec::new_in(self.arena);
        while self.current_kind().is_access_modifier() {
            extra_modifiers.push(self.tokens.advance());
        }

        let explicit_function_keyword = self.tokens.eat(SyntaxKind::FunctionKeyword);
        let (return_type, return_additional_type) = if self.at_return_type() {
            let type_clause = self.parse_type_clause();
            let additional_type = self.parse_optional_additional_type();
            if additional_type.is_some() {
                self.tokens.match_token(SyntaxKind::GreaterToken);
            }
            (Some(self.alloc(type_clause)), additional_type)
        } else {
            (None, None)
        };

        let function_keyword = match (explicit_function_keyword, return_type) {
            (Some(keyword), _) => keyword,
            (None, Some(ty)) if ty.identifier.kind.is_function_intro() => ty.identifier,
            (None, Some(ty)) => Token::synthesized(SyntaxKind::FunctionKeyword, ty.identifier.span.start),
            (None, None) => self.tokens.match_token(SyntaxKind::FunctionKeyword),
        };

        let identifier = self.tokens.match_token(SyntaxKind::IdentifierToken);
        let open_parenthesis_token = self.tokens.match_token(SyntaxKind::OpenParenthesisToken);
        let parameters = self.parse_parameter_list();
        let close_parenthesis_token = self.tokens.match_token(SyntaxKind::CloseParenthesisToken);
        let body = self.parse_block();
        let body = self.alloc(body);

        FunctionDeclaration {
            data: self.node(SyntaxKind::FunctionDeclaration, start),
            access_modifier,
            extra_modifiers: extra_modifiers.into_bump_slice(),
            function_keyword,
            return_type,
            return_additional_type,
            identifier,
            open_parenthesis_token,
            parameters,
            close_parenthesis_token,
            body,
        }
    }

    /// The leading access modifier, or an implicit `public`.
    fn parse_access_modifier(&mut self) -> Token<'a> {
        if self.current_kind().is_access_modifier() {
            self.tokens.advance()
        } else {
            Token::synthesized(SyntaxKind::PublicKeyword, self.current_start())
        }
    }

    fn parse_parameter_list(&mut self) -> SeparatedList<'a, Parameter<'a>> {
        let mut parameters = BumpVec::new_in(self.arena);
        let mut separators = BumpVec::new_in(self.arena);

        while !matches!(
            self.current_kind(),
            SyntaxKind::CloseParenthesisToken | SyntaxKind::EndOfFileToken
        ) {
            parameters.push(self.parse_parameter());
            match self.tokens.eat(SyntaxKind::CommaToken) {
                Some(comma) => separators.push(comma),
                None => break,
            }
        }

        SeparatedList::new(parameters.into_bump_slice(), separators.into_bump_slice())
    }

    fn parse_parameter(&mut self) -> Parameter<'a> {
        let start = self.current_start();
        let type_clause = self.parse_type_clause();
        let additional_type = self.parse_optional_additional_type();
        if additional_type.is_some() {
            self.tokens.match_token(SyntaxKind::GreaterToken);
        }
        let identifier = self.tokens.match_token(SyntaxKind::IdentifierToken);

        Parameter {
            data: self.node(SyntaxKind::Parameter, start),
            type_clause,
            additional_type,
            identifier,
        }
    }

    fn parse_global_statement(&mut self) -> GlobalStatement<'a> {
        let start = self.current_start();
        let statement = self.parse_statement();

        GlobalStatement {
            data: self.node(SyntaxKind::GlobalStatement, start),
            statement: self.alloc(statement),
        }
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn parse_type_clause(&mut self) -> TypeClause<'a> {
        let start = self.current_start();
        let kind = self.current_kind();
        let identifier = if kind.is_type_keyword() || matches!(kind, SyntaxKind::VarKeyword | SyntaxKind::LetKeyword) {
            self.tokens.advance()
        } else {
            self.tokens.match_token(SyntaxKind::IdentifierToken)
        };
        let is_array = self.parse_array_marker();
        let colon_token = self.tokens.eat(SyntaxKind::ColonToken);

        TypeClause {
            data: self.node(SyntaxKind::TypeClause, start),
            identifier,
            is_array,
            colon_token,
        }
    }

    /// `[]` after a type. A `[` without its `]` is consumed anyway.
    fn parse_array_marker(&mut self) -> bool {
        if self.tokens.eat(SyntaxKind::OpenSquareBracketToken).is_none() {
            return false;
        }
        self.tokens.eat(SyntaxKind::CloseSquareBracketToken).is_some()
    }

    /// `<A, B, ...` up to but not including the closing `>`.
    fn parse_optional_additional_type(&mut self) -> OptionalNode<'a, AdditionalType<'a>> {
        if self.current_kind() != SyntaxKind::LessToken {
            return None;
        }

        let start = self.current_start();
        let less_token = self.tokens.current();
        let mut types = BumpVec::new_in(self.arena);
        loop {
            self.tokens.advance();
            if self.current_kind() == SyntaxKind::EndOfFileToken {
                break;
            }
            types.push(self.tokens.advance());
            if matches!(self.current_kind(), SyntaxKind::GreaterToken | SyntaxKind::EndOfFileToken) {
                break;
            }
        }

        Some(self.alloc(AdditionalType {
            data: self.node(SyntaxKind::AdditionalType, start),
            less_token,
            types: types.into_bump_slice(),
        }))
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statement(&mut self) -> Statement<'a> {
        if !self.enter_nesting() {
            return self.missing_statement();
        }

        let statement = match self.current_kind() {
            SyntaxKind::OpenBraceToken => Statement::Block(self.parse_block()),
            kind if kind.is_declaration_keyword() || kind == SyntaxKind::DoubleKeyword => {
                Statement::VariableDeclaration(self.parse_variable_declaration())
            }
            SyntaxKind::IdentifierToken if self.at_named_type_declaration() => {
                Statement::VariableDeclaration(self.parse_variable_declaration())
            }
            SyntaxKind::IfKeyword => Statement::If(self.parse_if_statement()),
            SyntaxKind::WhileKeyword => Statement::While(self.parse_while_statement()),
            SyntaxKind::DoKeyword => Statement::DoWhile(self.parse_do_while_statement()),
            SyntaxKind::ForKeyword => Statement::For(self.parse_for_statement()),
            SyntaxKind::BreakKeyword => {
                let start = self.current_start();
                let keyword = self.tokens.advance();
                Statement::Break(BreakStatement {
                    data: self.node(SyntaxKind::BreakStatement, start),
                    keyword,
                })
            }
            SyntaxKind::ContinueKeyword => {
                let start = self.current_start();
                let keyword = self.tokens.advance();
                Statement::Continue(ContinueStatement {
                    data: self.node(SyntaxKind::ContinueStatement, start),
                    keyword,
                })
            }
            SyntaxKind::ReturnKeyword => Statement::Return(self.parse_return_statement()),
            _ => Statement::Expression(self.parse_expression_statement()),
        };

        self.leave_nesting();
        statement
    }

    fn parse_block(&mut self) -> Block<'a> {
        let start = self.current_start();
        let open_brace_token = self.tokens.match_token(SyntaxKind::OpenBraceToken);

        let mut statements = BumpVec::new_in(self.arena);
        while !matches!(
            self.current_kind(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.tokens.position();
            statements.push(self.parse_statement());

            if self.tokens.position() == start_position {
                self.tokens.advance();
            }
        }

        let close_brace_token = self.tokens.match_token(SyntaxKind::CloseBraceToken);

        Block {
            data: self.node(SyntaxKind::BlockStatement, start),
            open_brace_token,
            statements: statements.into_bump_slice(),
            close_brace_token,
        }
    }

    fn parse_variable_declaration(&mut self) -> VariableDeclaration<'a> {
        let start = self.current_start();
        let type_clause = self.parse_type_clause();
        let additional_type = self.parse_optional_additional_type();

        let keyword = if additional_type.is_some() {
            Some(self.tokens.match_token(SyntaxKind::GreaterToken))
        } else if self.current_kind().is_declaration_keyword() {
            Some(self.tokens.advance())
        } else {
            None
        };

        let identifier = self.tokens.match_token(SyntaxKind::IdentifierToken);
        let equals_token = self.tokens.match_token(SyntaxKind::EqualsToken);
        let initializer = self.parse_expression();

        VariableDeclaration {
            data: self.node(SyntaxKind::VariableDeclaration, start),
            type_clause,
            additional_type,
            keyword,
            identifier,
            equals_token,
            initializer: self.alloc(initializer),
        }
    }

    fn parse_if_statement(&mut self) -> IfStatement<'a> {
        let start = self.current_start();
        let if_keyword = self.tokens.match_token(SyntaxKind::IfKeyword);
        let condition = self.parse_expression();
        let condition = self.alloc(condition);
        let then_statement = self.parse_statement();
        let then_statement = self.alloc(then_statement);
        let else_clause = self.parse_optional_else_clause();

        IfStatement {
            data: self.node(SyntaxKind::IfStatement, start),
            if_keyword,
            condition,
            then_statement,
            else_clause,
        }
    }

    fn parse_optional_else_clause(&mut self) -> OptionalNode<'a, ElseClause<'a>> {
        if self.current_kind() != SyntaxKind::ElseKeyword {
            return None;
        }

        let start = self.current_start();
        let else_keyword = self.tokens.advance();
        let statement = self.parse_statement();
        let statement = self.alloc(statement);

        Some(self.alloc(ElseClause {
            data: self.node(SyntaxKind::ElseClause, start),
            else_keyword,
            statement,
        }))
    }

    fn parse_while_statement(&mut self) -> WhileStatement<'a> {
        let start = self.current_start();
        let while_keyword = self.tokens.match_token(SyntaxKind::WhileKeyword);
        let condition = self.parse_expression();
        let condition = self.alloc(condition);
        let body = self.parse_statement();

        WhileStatement {
            data: self.node(SyntaxKind::WhileStatement, start),
            while_keyword,
            condition,
            body: self.alloc(body),
        }
    }

    fn parse_do_while_statement(&mut self) -> DoWhileStatement<'a> {
        let start = self.current_start();
        let do_keyword = self.tokens.match_token(SyntaxKind::DoKeyword);
        let body = self.parse_statement();
        let body = self.alloc(body);
        let while_keyword = self.tokens.match_token(SyntaxKind::WhileKeyword);
        let condition = self.parse_expression();

        DoWhileStatement {
            data: self.node(SyntaxKind::DoWhileStatement, start),
            do_keyword,
            body,
            while_keyword,
            condition: self.alloc(condition),
        }
    }

    /// `for (declaration [;] condition [;] modifier) body`
    fn parse_for_statement(&mut self) -> ForStatement<'a> {
        let start = self.current_start();
        let for_keyword = self.tokens.match_token(SyntaxKind::ForKeyword);
        let open_parenthesis_token = self.tokens.match_token(SyntaxKind::OpenParenthesisToken);

        let declaration = Statement::VariableDeclaration(self.parse_variable_declaration());
        let declaration = self.alloc(declaration);
        self.tokens.eat(SyntaxKind::SemicolonToken);
        let condition = self.parse_expression();
        let condition = self.alloc(condition);
        self.tokens.eat(SyntaxKind::SemicolonToken);
        let modifier = self.parse_expression();
        let modifier = self.alloc(modifier);

        if self.options.strict_compat || self.current_kind() == SyntaxKind::SemicolonToken {
            self.tokens.advance();
        }

        let close_parenthesis_token = self.tokens.match_token(SyntaxKind::CloseParenthesisToken);
        let body = self.parse_statement();

        ForStatement {
            data: self.node(SyntaxKind::ForStatement, start),
            for_keyword,
            open_parenthesis_token,
            declaration,
            condition,
            modifier,
            close_parenthesis_token,
            body: self.alloc(body),
        }
    }

    /// The expression belongs to the return only if it starts on the same
    /// line as the keyword.
    fn parse_return_statement(&mut self) -> ReturnStatement<'a> {
        let start = self.current_start();
        let return_keyword = self.tokens.match_token(SyntaxKind::ReturnKeyword);

        let next = self.tokens.current();
        let keyword_line = self.source.line_of(return_keyword.span.start);
        let same_line = self.source.line_of(next.span.start) == keyword_line;
        let expression = if next.kind != SyntaxKind::EndOfFileToken && same_line {
            let expression = self.parse_expression();
            Some(self.alloc(expression))
        } else {
            None
        };

        ReturnStatement {
            data: self.node(SyntaxKind::ReturnStatement, start),
            return_keyword,
            expression,
        }
    }

    fn parse_expression_statement(&mut self) -> ExpressionStatement<'a> {
        let start = self.current_start();
        let expression = self.parse_expression();

        ExpressionStatement {
            data: self.node(SyntaxKind::ExpressionStatement, start),
            expression: self.alloc(expression),
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self) -> Expression<'a> {
        if !self.enter_nesting() {
            return self.missing_expression();
        }
        let expression = self.parse_assignment_expression();
        self.leave_nesting();
        expression
    }

    fn parse_assignment_expression(&mut self) -> Expression<'a> {
        if self.current_kind() == SyntaxKind::IdentifierToken {
            let operator = self.tokens.peek(1).kind;
            let start = self.current_start();

            if operator.is_assignment_operator() {
                let identifier = self.tokens.advance();
                let operator_token = self.tokens.advance();
                let expression = self.parse_expression();
                return Expression::Assignment(AssignmentExpression {
                    data: self.node(SyntaxKind::AssignmentExpression, start),
                    identifier,
                    operator_token,
                    expression: self.alloc(expression),
                });
            }

            if operator.is_increment_or_decrement() {
                let identifier = self.tokens.advance();
                let operator_token = self.tokens.advance();
                return Expression::Single(SingleExpression {
                    data: self.node(SyntaxKind::SingleExpression, start),
                    identifier,
                    operator_token,
                });
            }
        }

        self.parse_binary_expression(OperatorPrecedence::Lowest)
    }

    fn parse_binary_expression(&mut self, parent_precedence: OperatorPrecedence) -> Expression<'a> {
        if !self.enter_nesting() {
            return self.missing_expression();
        }

        let start = self.current_start();
        let unary_precedence = unary_operator_precedence(self.current_kind());
        let mut left = if unary_precedence != OperatorPrecedence::Lowest && unary_precedence >= parent_precedence {
            let operator_token = self.tokens.advance();
            let operand = self.parse_binary_expression(unary_precedence);
            Expression::Unary(UnaryExpression {
                data: self.node(SyntaxKind::UnaryExpression, start),
                operator_token,
                operand: self.alloc(operand),
            })
        } else {
            self.parse_primary_expression()
        };

        loop {
            let precedence = binary_operator_precedence(self.current_kind());
            if precedence == OperatorPrecedence::Lowest || precedence <= parent_precedence {
                break;
            }

            let operator_token = self.tokens.advance();
            let right = self.parse_binary_expression(precedence);
            left = Expression::Binary(BinaryExpression {
                data: self.node(SyntaxKind::BinaryExpression, start),
                left: self.alloc(left),
                operator_token,
                right: self.alloc(right),
            });
        }

        self.leave_nesting();
        left
    }

    fn parse_primary_expression(&mut self) -> Expression<'a> {
        match self.current_kind() {
            SyntaxKind::OpenParenthesisToken => self.parse_parenthesized_expression(),
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => self.parse_literal_expression(self.current_kind()),
            SyntaxKind::NumberToken => self.parse_literal_expression(SyntaxKind::NumberToken),
            SyntaxKind::StringToken => self.parse_literal_expression(SyntaxKind::StringToken),
            _ => self.parse_name_or_call_expression(),
        }
    }

    fn parse_parenthesized_expression(&mut self) -> Expression<'a> {
        let start = self.current_start();
        let open_parenthesis_token = self.tokens.match_token(SyntaxKind::OpenParenthesisToken);
        let expression = self.parse_expression();
        let expression = self.alloc(expression);
        let close_parenthesis_token = self.tokens.match_token(SyntaxKind::CloseParenthesisToken);

        Expression::Parenthesized(ParenthesizedExpression {
            data: self.node(SyntaxKind::ParenthesizedExpression, start),
            open_parenthesis_token,
            expression,
            close_parenthesis_token,
        })
    }

    fn parse_literal_expression(&mut self, kind: SyntaxKind) -> Expression<'a> {
        let start = self.current_start();
        let literal_token = self.tokens.match_token(kind);

        Expression::Literal(LiteralExpression {
            data: self.node(SyntaxKind::LiteralExpression, start),
            literal_token,
            value: literal_token.value,
        })
    }

    fn parse_name_or_call_expression(&mut self) -> Expression<'a> {
        let current = self.tokens.current();
        let next = self.tokens.peek(1).kind;

        if current.kind == SyntaxKind::NewKeyword {
            return self.parse_new_expression();
        }
        if current.kind == SyntaxKind::IdentifierToken && next == SyntaxKind::OpenParenthesisToken {
            return self.parse_call_expression();
        }
        if current.kind.is_type_syntax() {
            match next {
                SyntaxKind::OpenSquareBracketToken => return self.parse_array_declaration_expression(),
                SyntaxKind::LessToken | SyntaxKind::OpenParenthesisToken => {
                    return self.parse_variable_declaration_expression();
                }
                _ => {}
            }
        }
        if next == SyntaxKind::OpenSquareBracketToken {
            return self.parse_array_access_expression();
        }
        if current.kind == SyntaxKind::IdentifierToken && next == SyntaxKind::PeriodToken {
            if ends_with_layout_break(&current) {
                // The `.` is left to start the next statement.
                tracing::trace!(name = current.text, "dotted access broken by layout");
                let start = self.current_start();
                let identifier = self.tokens.advance();
                return Expression::Name(NameExpression {
                    data: self.node(SyntaxKind::NameExpression, start),
                    identifier,
                    members: &[],
                });
            }
            return match self.classify_dotted_access() {
                DottedAccess::Call => self.parse_call_expression(),
                DottedAccess::ArrayAccess => self.parse_array_access_expression(),
                DottedAccess::Name => self.parse_name_expression(),
            };
        }

        self.parse_name_expression()
    }

    /// `.member` tokens following an identifier, dots dropped.
    fn parse_inner_members(&mut self) -> NodeList<'a, Token<'a>> {
        let mut members = BumpVec::new_in(self.arena);
        while self.tokens.eat(SyntaxKind::PeriodToken).is_some() {
            let member = if self.current_kind() == SyntaxKind::EndOfFileToken {
                self.tokens.match_token(SyntaxKind::IdentifierToken)
            } else {
                self.tokens.advance()
            };
            members.push(member);
        }
        members.into_bump_slice()
    }

    fn parse_name_expression(&mut self) -> Expression<'a> {
        let start = self.current_start();
        let identifier = self.tokens.match_token(SyntaxKind::IdentifierToken);
        let members = self.parse_inner_members();

        Expression::Name(NameExpression {
            data: self.node(SyntaxKind::NameExpression, start),
            identifier,
            members,
        })
    }

    fn parse_call_expression(&mut self) -> Expression<'a> {
        let start = self.current_start();
        let identifier = self.tokens.match_token(SyntaxKind::IdentifierToken);
        let members = self.parse_inner_members();
        let open_parenthesis_token = self.tokens.match_token(SyntaxKind::OpenParenthesisToken);
        let arguments = self.parse_arguments();
        let close_parenthesis_token = self.tokens.match_token(SyntaxKind::CloseParenthesisToken);

        Expression::Call(CallExpression {
            data: self.node(SyntaxKind::CallExpression, start),
            identifier,
            members,
            open_parenthesis_token,
            arguments,
            close_parenthesis_token,
        })
    }

    fn parse_arguments(&mut self) -> SeparatedList<'a, Expression<'a>> {
        let mut arguments = BumpVec::new_in(self.arena);
        let mut separators = BumpVec::new_in(self.arena);

        while !matches!(
            self.current_kind(),
            SyntaxKind::CloseParenthesisToken | SyntaxKind::EndOfFileToken
        ) {
            arguments.push(self.parse_expression());
            match self.tokens.eat(SyntaxKind::CommaToken) {
                Some(comma) => separators.push(comma),
                None => break,
            }
        }

        SeparatedList::new(arguments.into_bump_slice(), separators.into_bump_slice())
    }

    fn parse_new_expression(&mut self) -> Expression<'a> {
        let start = self.current_start();
        let new_keyword = self.tokens.match_token(SyntaxKind::NewKeyword);
        let expression = self.parse_expression();

        Expression::New(NewExpression {
            data: self.node(SyntaxKind::NewExpression, start),
            new_keyword,
            expression: self.alloc(expression),
        })
    }

    fn parse_array_declaration_expression(&mut self) -> Expression<'a> {
        let start = self.current_start();
        let type_token = self.tokens.advance();
        let open_bracket_token = self.tokens.match_token(SyntaxKind::OpenSquareBracketToken);
        let size = self.parse_expression();
        let size = self.alloc(size);
        let close_bracket_token = self.tokens.match_token(SyntaxKind::CloseSquareBracketToken);

        Expression::ArrayDeclaration(ArrayDeclarationExpression {
            data: self.node(SyntaxKind::ArrayDeclarationExpression, start),
            type_token,
            open_bracket_token,
            size,
            close_bracket_token,
        })
    }

    fn parse_array_access_expression(&mut self) -> Expression<'a> {
        let start = self.current_start();
        let identifier = self.tokens.match_token(SyntaxKind::IdentifierToken);
        let members = self.parse_inner_members();
        let open_bracket_token = self.tokens.match_token(SyntaxKind::OpenSquareBracketToken);
        let index = self.parse_expression();
        let index = self.alloc(index);
        let close_bracket_token = self.tokens.match_token(SyntaxKind::CloseSquareBracketToken);

        Expression::ArrayAccess(ArrayAccessExpression {
            data: self.node(SyntaxKind::ArrayAccessExpression, start),
            identifier,
            members,
            open_bracket_token,
            index,
            close_bracket_token,
        })
    }

    /// `List<int>()`, `Point()`: a type used as a constructor.
    fn parse_variable_declaration_expression(&mut self) -> Expression<'a> {
        let start = self.current_start();
        let type_clause = self.parse_type_clause();
        let additional_type = self.parse_optional_additional_type();
        let greater_token = additional_type.map(|_| self.tokens.match_token(SyntaxKind::GreaterToken));
        let open_parenthesis_token = self.tokens.match_token(SyntaxKind::OpenParenthesisToken);
        let close_parenthesis_token = self.tokens.match_token(SyntaxKind::CloseParenthesisToken);

        Expression::VariableDeclaration(VariableDeclarationExpression {
            data: self.node(SyntaxKind::VariableDeclarationExpression, start),
            type_clause,
            additional_type,
            greater_token,
            open_parenthesis_token,
            close_parenthesis_token,
        })
    }
}
