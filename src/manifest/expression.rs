//! Constrained parser for expression manifests.
//!
//! A `package.js` file holds a single call of the form
//! `namespace.method("path", "path", ...)`. Only that shape is recognized:
//! a dotted identifier head followed by a parenthesized list of string
//! literals. Nothing is evaluated; anything outside the shape is a parse
//! error rather than executable content.

use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use crate::core::WalkError;

/// Read the manifest at `path` and extract its dependency paths in
/// declaration order.
pub fn parse(path: &Path) -> Result<Vec<String>, WalkError> {
    let content = fs::read_to_string(path).map_err(|err| WalkError::Parse {
        path: path.to_path_buf(),
        reason: format!("could not read file: {}", err),
    })?;

    parse_content(&content).map_err(|reason| WalkError::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

/// Extract the ordered argument list from a dependency-call expression.
///
/// Accepted grammar, with whitespace and script-style comments permitted
/// between tokens:
///
/// ```text
/// ident ("." ident)+ "(" [ string ("," string)* [","] ] ")" [";"]
/// ```
pub fn parse_content(content: &str) -> Result<Vec<String>, String> {
    let mut cur = Cursor::new(content);

    cur.skip_trivia()?;
    cur.expect_ident()?;
    cur.skip_trivia()?;
    if !cur.eat('.') {
        return Err("expected a namespaced call such as `ns.declare(\"...\")`".to_string());
    }
    loop {
        cur.skip_trivia()?;
        cur.expect_ident()?;
        cur.skip_trivia()?;
        if !cur.eat('.') {
            break;
        }
    }
    if !cur.eat('(') {
        return Err("expected '(' after the dependency call name".to_string());
    }

    let mut args = Vec::new();
    cur.skip_trivia()?;
    if !cur.eat(')') {
        loop {
            args.push(cur.string_literal()?);
            cur.skip_trivia()?;
            if cur.eat(',') {
                cur.skip_trivia()?;
                // a trailing comma before the closing paren is allowed
                if cur.eat(')') {
                    break;
                }
                continue;
            }
            if cur.eat(')') {
                break;
            }
            return Err("expected ',' or ')' in the dependency list".to_string());
        }
    }

    cur.skip_trivia()?;
    cur.eat(';');
    cur.skip_trivia()?;
    if !cur.at_end() {
        return Err("unexpected content after the dependency call".to_string());
    }

    Ok(args)
}

struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Cursor<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Skip whitespace plus `//` line and `/* */` block comments.
    fn skip_trivia(&mut self) -> Result<(), String> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let mut ahead = self.chars.clone();
                    ahead.next();
                    match ahead.next() {
                        Some('/') => {
                            self.bump();
                            self.bump();
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            self.bump();
                            self.bump();
                            let mut closed = false;
                            while let Some(c) = self.bump() {
                                if c == '*' && self.eat('/') {
                                    closed = true;
                                    break;
                                }
                            }
                            if !closed {
                                return Err("unterminated block comment".to_string());
                            }
                        }
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn expect_ident(&mut self) -> Result<(), String> {
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                while let Some(c) = self.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                        self.bump();
                    } else {
                        break;
                    }
                }
                Ok(())
            }
            Some(c) => Err(format!("expected an identifier, found '{}'", c)),
            None => Err("expected an identifier, found end of input".to_string()),
        }
    }

    /// Consume one single- or double-quoted string literal and return its
    /// unescaped value.
    fn string_literal(&mut self) -> Result<String, String> {
        let quote = match self.bump() {
            Some(q @ ('"' | '\'')) => q,
            Some(other) => return Err(format!("expected a string literal, found '{}'", other)),
            None => return Err("expected a string literal, found end of input".to_string()),
        };

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err("unterminated string literal".to_string()),
                Some(c) if c == quote => return Ok(value),
                Some('\\') => match self.bump() {
                    None => return Err("unterminated string literal".to_string()),
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('0') => value.push('\0'),
                    // \" \' \\ and any other escaped character map to themselves
                    Some(other) => value.push(other),
                },
                Some(c) => value.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_double_quoted_arguments_in_order() {
        let args =
            parse_content(r#"app.depends("source/s1.js", "source/s2.js", "source/c1.css")"#)
                .unwrap();
        assert_eq!(args, vec!["source/s1.js", "source/s2.js", "source/c1.css"]);
    }

    #[test]
    fn test_parses_single_quotes_and_trailing_semicolon() {
        let args = parse_content("app.depends('style.css');").unwrap();
        assert_eq!(args, vec!["style.css"]);
    }

    #[test]
    fn test_parses_empty_argument_list() {
        assert_eq!(parse_content("app.depends()").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_accepts_trailing_comma_and_multiline_layout() {
        let content = "app.depends(\n  \"a.js\",\n  \"b.css\",\n)\n";
        assert_eq!(parse_content(content).unwrap(), vec!["a.js", "b.css"]);
    }

    #[test]
    fn test_accepts_comments_between_tokens() {
        let content = r#"
            // dependency listing
            app.depends(
                "a.js", /* compiled */ "b.css"
            );
        "#;
        assert_eq!(parse_content(content).unwrap(), vec!["a.js", "b.css"]);
    }

    #[test]
    fn test_accepts_deep_namespaces() {
        let args = parse_content(r#"my.app.pkg.depends("a.js")"#).unwrap();
        assert_eq!(args, vec!["a.js"]);
    }

    #[test]
    fn test_unescapes_literals() {
        let args = parse_content(r#"app.depends("a\\b\"c", 'd\'e')"#).unwrap();
        assert_eq!(args, vec!["a\\b\"c", "d'e"]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_content("garbage").is_err());
        assert!(parse_content("").is_err());
    }

    #[test]
    fn test_rejects_call_without_namespace() {
        assert!(parse_content(r#"depends("a.js")"#).is_err());
    }

    #[test]
    fn test_rejects_non_string_arguments() {
        assert!(parse_content("app.depends(42)").is_err());
        assert!(parse_content(r#"app.depends("a.js", foo)"#).is_err());
    }

    #[test]
    fn test_rejects_unterminated_literal_and_missing_paren() {
        assert!(parse_content(r#"app.depends("a.js"#).is_err());
        assert!(parse_content(r#"app.depends("a.js""#).is_err());
    }

    #[test]
    fn test_rejects_trailing_content() {
        assert!(parse_content("app.depends(\"a.js\"); var x = 1;").is_err());
    }
}
