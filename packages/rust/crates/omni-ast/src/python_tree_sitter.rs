//! Tree-sitter based Python parser lowering into the typed [`Module`] tree.

use tree_sitter::{Language, Node, Parser};

use crate::ast::{ClassDef, Constant, Expr, FunctionDef, Module, Param, ParamKind, Stmt};
use crate::error::ParseError;
use crate::literal::{StringToken, cleandoc, decode_string_token, parse_float, parse_integer};

/// Tree-sitter based Python parser
pub struct TreeSitterPythonParser {
    parser: Parser,
}

impl TreeSitterPythonParser {
    /// Create a new parser
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Language`] if the grammar is incompatible with
    /// the linked tree-sitter runtime.
    pub fn new() -> Result<Self, ParseError> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Language(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse a whole file into a [`Module`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] located at the first offending node if
    /// the source is not valid Python 3. Besides error and missing tokens,
    /// this covers Python 2 `print`/`exec` statements and a parameter
    /// without a default after one with a default.
    pub fn parse_module(&mut self, code: &str) -> Result<Module, ParseError> {
        let tree = self.parser.parse(code, None).ok_or(ParseError::Aborted)?;
        let root = tree.root_node();

        check_syntax(root)?;

        let lowering = Lowering {
            src: code.as_bytes(),
        };
        Ok(Module {
            body: lowering.block(root),
        })
    }
}

/// Parse Python source with a fresh parser.
///
/// # Errors
///
/// See [`TreeSitterPythonParser::parse_module`].
pub fn parse_module(code: &str) -> Result<Module, ParseError> {
    TreeSitterPythonParser::new()?.parse_module(code)
}

const NON_DEFAULT_AFTER_DEFAULT: &str =
    "parameter without a default follows parameter with a default";

fn syntax_error(node: Node<'_>, message: String) -> ParseError {
    let position = node.start_position();
    ParseError::Syntax {
        message,
        line: position.row + 1,
        column: position.column + 1,
    }
}

/// Pre-order check for constructs the grammar accepts but Python 3 rejects.
fn check_syntax(node: Node<'_>) -> Result<(), ParseError> {
    if node.is_missing() {
        return Err(syntax_error(node, format!("expected '{}'", node.kind())));
    }
    if node.is_error() {
        return Err(syntax_error(node, "invalid syntax".to_string()));
    }
    match node.kind() {
        "print_statement" => {
            return Err(syntax_error(
                node,
                "Missing parentheses in call to 'print'".to_string(),
            ));
        }
        "exec_statement" => {
            return Err(syntax_error(
                node,
                "Missing parentheses in call to 'exec'".to_string(),
            ));
        }
        "parameters" | "lambda_parameters" => check_parameter_order(node)?,
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        check_syntax(child)?;
    }
    Ok(())
}

/// Reject a parameter without a default that follows one with a default,
/// unless a `*` or `*args` came in between.
fn check_parameter_order(node: Node<'_>) -> Result<(), ParseError> {
    let mut seen_default = false;
    for child in named_children(node) {
        match child.kind() {
            "default_parameter" | "typed_default_parameter" => seen_default = true,
            "list_splat_pattern" | "keyword_separator" => return Ok(()),
            "typed_parameter" => match named_children(child).first().map(Node::kind) {
                Some("list_splat_pattern") => return Ok(()),
                Some("dictionary_splat_pattern") => {}
                _ if seen_default => {
                    return Err(syntax_error(child, NON_DEFAULT_AFTER_DEFAULT.to_string()));
                }
                _ => {}
            },
            "identifier" if seen_default => {
                return Err(syntax_error(child, NON_DEFAULT_AFTER_DEFAULT.to_string()));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Named, non-comment children of a node.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| !n.is_extra())
        .collect()
}

fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

struct Lowering<'a> {
    src: &'a [u8],
}

impl<'a> Lowering<'a> {
    fn text(&self, node: Node<'_>) -> &'a str {
        node.utf8_text(self.src).unwrap_or("")
    }

    fn block(&self, node: Node<'_>) -> Vec<Stmt> {
        named_children(node)
            .into_iter()
            .map(|child| self.statement(child))
            .collect()
    }

    fn statement(&self, node: Node<'_>) -> Stmt {
        match node.kind() {
            "function_definition" => Stmt::FunctionDef(self.function(node)),
            "class_definition" => Stmt::ClassDef(self.class(node)),
            "decorated_definition" => match node.child_by_field_name("definition") {
                Some(definition) => self.statement(definition),
                None => Stmt::Simple {
                    kind: node.kind(),
                    line: line_of(node),
                },
            },
            kind => {
                let body = self.nested(node);
                if body.is_empty() {
                    Stmt::Simple {
                        kind,
                        line: line_of(node),
                    }
                } else {
                    Stmt::Compound {
                        kind,
                        line: line_of(node),
                        body,
                    }
                }
            }
        }
    }

    /// Definitions found anywhere below a non-definition statement.
    fn nested(&self, node: Node<'_>) -> Vec<Stmt> {
        let mut out = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "function_definition" | "class_definition" | "decorated_definition" => {
                    out.push(self.statement(child));
                }
                _ => out.extend(self.nested(child)),
            }
        }
        out
    }

    fn function(&self, node: Node<'_>) -> FunctionDef {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string())
            .unwrap_or_default();
        let mut cursor = node.walk();
        let is_async = node.children(&mut cursor).any(|c| c.kind() == "async");
        let params = node
            .child_by_field_name("parameters")
            .map(|p| self.parameters(p))
            .unwrap_or_default();
        let returns = node
            .child_by_field_name("return_type")
            .map(|t| self.annotation(t));
        let body_node = node.child_by_field_name("body");

        FunctionDef {
            name,
            is_async,
            params,
            returns,
            docstring: body_node.and_then(|b| self.docstring(b)),
            line: line_of(node),
            body: body_node.map(|b| self.block(b)).unwrap_or_default(),
        }
    }

    fn class(&self, node: Node<'_>) -> ClassDef {
        ClassDef {
            name: node
                .child_by_field_name("name")
                .map(|n| self.text(n).to_string())
                .unwrap_or_default(),
            line: line_of(node),
            body: node
                .child_by_field_name("body")
                .map(|b| self.block(b))
                .unwrap_or_default(),
        }
    }

    fn parameters(&self, node: Node<'_>) -> Vec<Param> {
        let mut params: Vec<Param> = Vec::new();
        let mut keyword_only = false;
        let plain = |keyword_only: bool| {
            if keyword_only {
                ParamKind::KeywordOnly
            } else {
                ParamKind::Positional
            }
        };

        for child in named_children(node) {
            match child.kind() {
                "identifier" => params.push(Param {
                    name: self.text(child).to_string(),
                    kind: plain(keyword_only),
                    annotation: None,
                }),
                "default_parameter" | "typed_default_parameter" => params.push(Param {
                    name: child
                        .child_by_field_name("name")
                        .map(|n| self.text(n).to_string())
                        .unwrap_or_default(),
                    kind: plain(keyword_only),
                    annotation: child
                        .child_by_field_name("type")
                        .map(|t| self.annotation(t)),
                }),
                "typed_parameter" => {
                    let annotation = child
                        .child_by_field_name("type")
                        .map(|t| self.annotation(t));
                    let Some(target) = named_children(child)
                        .into_iter()
                        .find(|n| n.kind() != "type")
                    else {
                        continue;
                    };
                    let (name, kind) = match target.kind() {
                        "list_splat_pattern" => {
                            keyword_only = true;
                            (self.splat_name(target), ParamKind::VarPositional)
                        }
                        "dictionary_splat_pattern" => {
                            (self.splat_name(target), ParamKind::VarKeyword)
                        }
                        _ => (self.text(target).to_string(), plain(keyword_only)),
                    };
                    params.push(Param {
                        name,
                        kind,
                        annotation,
                    });
                }
                "list_splat_pattern" => {
                    keyword_only = true;
                    params.push(Param {
                        name: self.splat_name(child),
                        kind: ParamKind::VarPositional,
                        annotation: None,
                    });
                }
                "dictionary_splat_pattern" => params.push(Param {
                    name: self.splat_name(child),
                    kind: ParamKind::VarKeyword,
                    annotation: None,
                }),
                "keyword_separator" => keyword_only = true,
                "positional_separator" => {
                    for param in &mut params {
                        if param.kind == ParamKind::Positional {
                            param.kind = ParamKind::PositionalOnly;
                        }
                    }
                }
                _ => {}
            }
        }
        params
    }

    fn splat_name(&self, node: Node<'_>) -> String {
        named_children(node)
            .into_iter()
            .next()
            .map(|n| self.text(n).to_string())
            .unwrap_or_default()
    }

    /// Lower a `type` node (parameter or return annotation).
    fn annotation(&self, node: Node<'_>) -> Expr {
        match named_children(node).as_slice() {
            [inner] => self.expr(*inner),
            _ => Expr::Other(node.kind()),
        }
    }

    fn expr(&self, node: Node<'_>) -> Expr {
        let kind = node.kind();
        match kind {
            "identifier" => Expr::Name(self.text(node).to_string()),
            "integer" => parse_integer(self.text(node)).map_or(Expr::Other(kind), Expr::Constant),
            "float" => parse_float(self.text(node)).map_or(Expr::Other(kind), Expr::Constant),
            "true" => Expr::Constant(Constant::Bool(true)),
            "false" => Expr::Constant(Constant::Bool(false)),
            "none" => Expr::Constant(Constant::None),
            "ellipsis" => Expr::Constant(Constant::Ellipsis),
            "string" | "concatenated_string" => self.string(node),
            "parenthesized_expression" => match named_children(node).as_slice() {
                [inner] => self.expr(*inner),
                _ => Expr::Other(kind),
            },
            _ => Expr::Other(kind),
        }
    }

    /// Evaluate a string literal, folding implicit concatenation.
    fn string(&self, node: Node<'_>) -> Expr {
        let parts = if node.kind() == "concatenated_string" {
            named_children(node)
        } else {
            vec![node]
        };

        let mut text = String::new();
        let mut bytes = String::new();
        let (mut saw_str, mut saw_bytes) = (false, false);
        for part in parts {
            match decode_string_token(self.text(part)) {
                Some(StringToken::Str(s)) => {
                    saw_str = true;
                    text.push_str(&s);
                }
                Some(StringToken::Bytes(b)) => {
                    saw_bytes = true;
                    bytes.push_str(&b);
                }
                Some(StringToken::Formatted) | None => return Expr::Other(node.kind()),
            }
        }

        match (saw_str, saw_bytes) {
            (true, false) => Expr::Constant(Constant::Str(text)),
            (false, true) => Expr::Constant(Constant::Bytes(bytes)),
            _ => Expr::Other(node.kind()),
        }
    }

    /// Docstring of a function or class body, cleaned like `ast.get_docstring`.
    fn docstring(&self, body: Node<'_>) -> Option<String> {
        let first = named_children(body).into_iter().next()?;
        if first.kind() != "expression_statement" {
            return None;
        }
        match named_children(first).as_slice() {
            [expr] => match self.expr(*expr) {
                Expr::Constant(Constant::Str(doc)) => Some(cleandoc(&doc)),
                _ => None,
            },
            _ => None,
        }
    }
}
