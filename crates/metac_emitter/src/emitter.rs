//! Tree-to-text emission.
//!
//! A single pre-order walk over the syntax tree. Statements are terminated
//! with `;` unless the text written so far already ends in `}` or `;`, and
//! blocks always open and close on their own lines.

use crate::translator::TokenTranslator;
use metac_core::SourceText;
use metac_diagnostics::{messages, Diagnostic};
use metac_syntax::*;

/// Emission settings.
#[derive(Debug, Clone, Copy)]
pub struct EmitOptions {
    /// Write `else` clauses. Off in strict-compatibility mode.
    pub emit_else_clauses: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { emit_else_clauses: true }
    }
}

/// The text for one compilation unit and the warnings raised writing it.
#[derive(Debug, Clone, Default)]
pub struct EmitOutput {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Writes target text for a syntax tree.
pub struct Emitter<'e> {
    translator: &'e TokenTranslator,
    options: EmitOptions,
    source: Option<&'e SourceText>,
    output: String,
    diagnostics: Vec<Diagnostic>,
}

impl<'e> Emitter<'e> {
    pub fn new(translator: &'e TokenTranslator) -> Self {
        Self::with_options(translator, EmitOptions::default())
    }

    pub fn with_options(translator: &'e TokenTranslator, options: EmitOptions) -> Self {
        Self {
            translator,
            options,
            source: None,
            output: String::with_capacity(4096),
            diagnostics: Vec::new(),
        }
    }

    /// Emit every member of the tree, each followed by its terminator and a
    /// blank line.
    pub fn emit_compilation_unit(mut self, tree: &SyntaxTree<'e>) -> EmitOutput {
        self.source = Some(tree.source);

        for member in tree.root.members {
            match member {
                Member::FunctionDeclaration(function) => self.emit_function_declaration(function),
                Member::GlobalStatement(global) => self.emit_statement(global.statement),
            }
            self.write_terminator();
            self.write("\n\n");
        }

        tracing::debug!(
            file = tree.source.file_name(),
            bytes = self.output.len(),
            warnings = self.diagnostics.len(),
            "emitted compilation unit"
        );

        EmitOutput {
            text: self.output,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Writing helpers
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// `;` unless the output already ends a statement.
    fn write_terminator(&mut self) {
        if !matches!(self.output.chars().next_back(), Some('}' | ';')) {
            self.write(";");
        }
    }

    /// Write a token through the translator. Non-identifier tokens without
    /// a target lexeme are passed through with a warning.
    fn write_token(&mut self, token: &Token<'e>) {
        let untranslated = TokenTranslator::translate_kind(token.kind).is_empty()
            && token.kind != SyntaxKind::IdentifierToken
            && !token.is_missing();
        if untranslated {
            self.report_untranslated(token);
        }
        let translator = self.translator;
        self.write(translator.translate_token(token));
    }

    /// Declared and referenced names keep their source spelling. Only dotted
    /// members and type tokens go through the translator.
    fn write_name(&mut self, token: &Token<'e>) {
        self.write(token.text);
    }

    fn report_untranslated(&mut self, token: &Token<'e>) {
        let kind = token.kind.to_string();
        let args = [kind.as_str(), token.text];
        let diagnostic = match self.source {
            Some(source) => Diagnostic::at(source, token.span, &messages::NO_TRANSLATION_FOR_TOKEN, &args),
            None => Diagnostic::new(&messages::NO_TRANSLATION_FOR_TOKEN, &args),
        };
        tracing::warn!(kind = %token.kind, text = token.text, "no target translation");
        self.diagnostics.push(diagnostic);
    }

    fn write_members(&mut self, members: &[Token<'e>]) {
        for member in members {
            self.write(".");
            self.write_token(member);
        }
    }

    fn write_type(&mut self, type_clause: &TypeClause<'e>, additional_type: Option<&AdditionalType<'e>>) {
        self.write_token(&type_clause.identifier);
        if let Some(additional) = additional_type {
            self.write("<");
            for (i, ty) in additional.types.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_token(ty);
            }
            self.write(">");
        }
        if type_clause.is_array {
            self.write("[]");
        }
    }

    // ========================================================================
    // Members
    // ========================================================================

    fn emit_function_declaration(&mut self, function: &FunctionDeclaration<'e>) {
        self.write_token(&function.access_modifier);
        self.write(" ");
        for modifier in function.extra_modifiers {
            self.write_token(modifier);
            self.write(" ");
        }

        if let Some(return_type) = function.return_type {
            self.write_type(return_type, function.return_additional_type);
            self.write(" ");
        }

        self.write_name(&function.identifier);
        self.write("(");
        for (i, parameter) in function.parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write_type(&parameter.type_clause, parameter.additional_type);
            self.write(" ");
            self.write_name(&parameter.identifier);
        }
        self.write(")");
        self.write("\n");
        self.emit_block(function.body);
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn emit_statement(&mut self, statement: &Statement<'e>) {
        match statement {
            Statement::Block(block) => self.emit_block(block),
            Statement::VariableDeclaration(declaration) => {
                self.write_type(&declaration.type_clause, declaration.additional_type);
                self.write(" ");
                self.write_name(&declaration.identifier);
                self.write(" = ");
                self.emit_expression(declaration.initializer);
            }
            Statement::If(statement) => self.emit_if_statement(statement),
            Statement::While(statement) => {
                self.write("while");
                self.emit_condition(statement.condition);
                self.emit_statement(statement.body);
            }
            Statement::DoWhile(statement) => {
                self.write("do");
                if matches!(statement.body, Statement::Block(_)) {
                    self.emit_statement(statement.body);
                } else {
                    self.write(" ");
                    self.emit_statement(statement.body);
                    self.write_terminator();
                }
                self.write("while");
                self.emit_condition(statement.condition);
            }
            Statement::For(statement) => {
                self.write("for(");
                self.emit_statement(statement.declaration);
                self.write("; ");
                self.emit_expression(statement.condition);
                self.write("; ");
                self.emit_expression(statement.modifier);
                self.write(")");
                self.emit_statement(statement.body);
            }
            Statement::Break(statement) => self.write_token(&statement.keyword),
            Statement::Continue(statement) => self.write_token(&statement.keyword),
            Statement::Return(statement) => {
                self.write("return ");
                if let Some(expression) = statement.expression {
                    self.emit_expression(expression);
                    self.write(";");
                }
            }
            Statement::Expression(statement) => self.emit_expression(statement.expression),
        }
    }

    fn emit_block(&mut self, block: &Block<'e>) {
        self.write("{\n");
        for statement in block.statements {
            self.emit_statement(statement);
            self.write_terminator();
            self.write("\n");
        }
        self.write("\n}");
    }

    fn emit_if_statement(&mut self, statement: &IfStatement<'e>) {
        self.write("if");
        self.emit_condition(statement.condition);
        self.emit_statement(statement.then_statement);

        let Some(else_clause) = statement.else_clause else {
            return;
        };
        if !self.options.emit_else_clauses {
            return;
        }

        if !matches!(statement.then_statement, Statement::Block(_)) {
            self.write_terminator();
        }
        self.write("else");
        if !matches!(else_clause.statement, Statement::Block(_)) {
            self.write(" ");
        }
        self.emit_statement(else_clause.statement);
    }

    /// `(condition)`, without doubling parentheses the source already has.
    fn emit_condition(&mut self, condition: &Expression<'e>) {
        if matches!(condition, Expression::Parenthesized(_)) {
            self.emit_expression(condition);
        } else {
            self.write("(");
            self.emit_expression(condition);
            self.write(")");
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn emit_expression(&mut self, expression: &Expression<'e>) {
        match expression {
            Expression::Literal(literal) => self.write(literal.literal_token.text),
            Expression::Name(name) => {
                self.write_name(&name.identifier);
                self.write_members(name.members);
            }
            Expression::Unary(unary) => {
                if unary.operator_token.kind == SyntaxKind::MinusToken {
                    self.write_token(&unary.operator_token);
                    self.emit_expression(unary.operand);
                } else {
                    self.emit_expression(unary.operand);
                    self.write_token(&unary.operator_token);
                }
            }
            Expression::Single(single) => {
                self.write_token(&single.identifier);
                self.write_token(&single.operator_token);
            }
            Expression::Binary(binary) => {
                self.emit_expression(binary.left);
                self.write(" ");
                self.write_token(&binary.operator_token);
                self.write(" ");
                self.emit_expression(binary.right);
            }
            Expression::Assignment(assignment) => {
                self.write_name(&assignment.identifier);
                self.write(" ");
                self.write_token(&assignment.operator_token);
                self.write(" ");
                self.emit_expression(assignment.expression);
            }
            Expression::Parenthesized(parenthesized) => {
                self.write("(");
                self.emit_expression(parenthesized.expression);
                self.write(")");
            }
            Expression::Call(call) => {
                self.write_name(&call.identifier);
                self.write_members(call.members);
                self.write("(");
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expression(argument);
                }
                self.write(")");
            }
            Expression::New(new) => {
                self.write("new ");
                self.emit_expression(new.expression);
            }
            Expression::ArrayDeclaration(array) => {
                self.write_token(&array.type_token);
                self.write("[");
                self.emit_expression(array.size);
                self.write("]");
            }
            Expression::ArrayAccess(access) => {
                self.write_name(&access.identifier);
                self.write_members(access.members);
                self.write("[");
                self.emit_expression(access.index);
                self.write("]");
            }
            Expression::VariableDeclaration(declaration) => {
                self.write_type(&declaration.type_clause, declaration.additional_type);
                self.write("()");
            }
        }
    }
}
