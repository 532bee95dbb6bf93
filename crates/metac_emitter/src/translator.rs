//! Token and keyword translation to target lexemes.

use metac_core::FxHashMap;
use metac_syntax::{SyntaxKind, Token};

/// Identifier rewrites applied unless configuration replaces them.
const DEFAULT_IDENTIFIER_OVERRIDES: &[(&str, &str)] = &[("Math", "Math"), ("Max", "max"), ("Length", "length")];

/// Maps token kinds and identifier spellings to their target form.
#[derive(Debug, Clone)]
pub struct TokenTranslator {
    identifier_overrides: FxHashMap<String, String>,
}

impl TokenTranslator {
    pub fn new() -> Self {
        let identifier_overrides = DEFAULT_IDENTIFIER_OVERRIDES
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        Self { identifier_overrides }
    }

    /// The default table extended with `overrides`. Later entries win.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut translator = Self::new();
        translator
            .identifier_overrides
            .extend(overrides.into_iter().map(|(from, to)| (from.into(), to.into())));
        translator
    }

    /// The target lexeme for a token kind, or `""` when the kind has none.
    pub fn translate_kind(kind: SyntaxKind) -> &'static str {
        match kind {
            // Operators translate to themselves.
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::StarToken => "*",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::BangToken => "!",
            SyntaxKind::TildeToken => "~",
            SyntaxKind::HatToken => "^",
            SyntaxKind::AmpersandToken => "&",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::PipeToken => "|",
            SyntaxKind::PipePipeToken => "||",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::BangEqualsToken => "!=",
            SyntaxKind::LessToken => "<",
            SyntaxKind::LessOrEqualsToken => "<=",
            SyntaxKind::GreaterToken => ">",
            SyntaxKind::GreaterOrEqualsToken => ">=",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::StarEqualsToken => "*=",
            SyntaxKind::SlashEqualsToken => "/=",
            SyntaxKind::AmpersandEqualsToken => "&=",
            SyntaxKind::PipeEqualsToken => "|=",
            SyntaxKind::HatEqualsToken => "^=",

            // Punctuation. Braces are doubled for template output.
            SyntaxKind::OpenParenthesisToken => "(",
            SyntaxKind::CloseParenthesisToken => ")",
            SyntaxKind::OpenBraceToken => "{{",
            SyntaxKind::CloseBraceToken => "}}",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::CloseSquareBracketToken => "]",

            SyntaxKind::BreakKeyword => "break",
            SyntaxKind::ContinueKeyword => "continue",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::ForKeyword => "for",
            SyntaxKind::FunctionKeyword => "function",
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::LetKeyword => "let",
            SyntaxKind::ReturnKeyword => "return",
            SyntaxKind::ToKeyword => "to",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::VarKeyword => "var",
            SyntaxKind::IntKeyword => "int",
            SyntaxKind::FloatKeyword => "float",
            SyntaxKind::DoubleKeyword => "double",
            SyntaxKind::WhileKeyword => "while",
            SyntaxKind::DoKeyword => "do",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::SealedKeyword => "sealed",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::ListKeyword => "List",
            SyntaxKind::NewKeyword => "new",

            SyntaxKind::StringKeyword => "String",
            SyntaxKind::DictionaryKeyword => "HashMap",
            SyntaxKind::ContainsKeyCall => "containsKey",

            _ => "",
        }
    }

    /// Apply the identifier override table.
    pub fn translate_identifier<'s>(&'s self, text: &'s str) -> &'s str {
        self.identifier_overrides.get(text).map_or(text, String::as_str)
    }

    /// The kind's lexeme, falling back to the identifier table on the
    /// token's own text.
    pub fn translate_token<'s>(&'s self, token: &Token<'s>) -> &'s str {
        match Self::translate_kind(token.kind) {
            "" => self.translate_identifier(token.text),
            lexeme => lexeme,
        }
    }
}

impl Default for TokenTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metac_core::TextSpan;

    #[test]
    fn test_renamed_keywords() {
        assert_eq!(TokenTranslator::translate_kind(SyntaxKind::StringKeyword), "String");
        assert_eq!(TokenTranslator::translate_kind(SyntaxKind::DictionaryKeyword), "HashMap");
        assert_eq!(TokenTranslator::translate_kind(SyntaxKind::ContainsKeyCall), "containsKey");
        assert_eq!(TokenTranslator::translate_kind(SyntaxKind::ListKeyword), "List");
    }

    #[test]
    fn test_braces_are_doubled() {
        assert_eq!(TokenTranslator::translate_kind(SyntaxKind::OpenBraceToken), "{{");
        assert_eq!(TokenTranslator::translate_kind(SyntaxKind::CloseBraceToken), "}}");
    }

    #[test]
    fn test_unmapped_kinds_are_empty() {
        for kind in [
            SyntaxKind::IdentifierToken,
            SyntaxKind::NumberToken,
            SyntaxKind::StringToken,
            SyntaxKind::PeriodToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::OpenSquareBracketToken,
            SyntaxKind::EndOfFileToken,
        ] {
            assert_eq!(TokenTranslator::translate_kind(kind), "", "{kind}");
        }
    }

    #[test]
    fn test_default_identifier_overrides() {
        let translator = TokenTranslator::new();
        assert_eq!(translator.translate_identifier("Max"), "max");
        assert_eq!(translator.translate_identifier("Length"), "length");
        assert_eq!(translator.translate_identifier("Math"), "Math");
        assert_eq!(translator.translate_identifier("max"), "max");
        assert_eq!(translator.translate_identifier("total"), "total");
    }

    #[test]
    fn test_configured_overrides_extend_and_replace() {
        let translator = TokenTranslator::with_overrides([("Count", "size"), ("Max", "maximum")]);
        assert_eq!(translator.translate_identifier("Count"), "size");
        assert_eq!(translator.translate_identifier("Max"), "maximum");
        assert_eq!(translator.translate_identifier("Length"), "length");
    }

    #[test]
    fn test_translate_token_prefers_kind() {
        let translator = TokenTranslator::with_overrides([("string", "Text")]);
        let keyword = Token::new(SyntaxKind::StringKeyword, TextSpan::new(0, 6), "string");
        assert_eq!(translator.translate_token(&keyword), "String");
        let name = Token::new(SyntaxKind::IdentifierToken, TextSpan::new(0, 3), "Max");
        assert_eq!(translator.translate_token(&name), "max");
    }
}
