//! Typed Python syntax tree.
//!
//! A small tagged-variant view of a Python module. Only the
//! shapes the disclosure scanner needs are modelled precisely (functions,
//! classes, parameters, annotation expressions); every other statement is
//! kept as [`Stmt::Simple`] or [`Stmt::Compound`] so that definitions
//! nested inside `if`/`try`/`with`/loops are still reachable.

/// A parsed Python file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    /// Top-level statements in source order.
    pub body: Vec<Stmt>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `def` / `async def`, with or without decorators.
    FunctionDef(FunctionDef),
    /// `class`, with or without decorators.
    ClassDef(ClassDef),
    /// A statement containing nested definitions (`if`, `try`, `with`, ...).
    ///
    /// `body` holds the definitions found anywhere below it, in source order.
    Compound {
        /// tree-sitter node kind, e.g. `if_statement`.
        kind: &'static str,
        /// 1-based line of the statement.
        line: usize,
        /// Nested statements.
        body: Vec<Stmt>,
    },
    /// A statement with no nested definitions.
    Simple {
        /// tree-sitter node kind, e.g. `expression_statement`.
        kind: &'static str,
        /// 1-based line of the statement.
        line: usize,
    },
}

impl Stmt {
    /// 1-based line where the statement starts.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::FunctionDef(f) => f.line,
            Self::ClassDef(c) => c.line,
            Self::Compound { line, .. } | Self::Simple { line, .. } => *line,
        }
    }
}

/// A function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Function name.
    pub name: String,
    /// Whether this is an `async def`.
    pub is_async: bool,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Return annotation, if any.
    pub returns: Option<Expr>,
    /// Docstring as Python's `ast.get_docstring` would return it.
    pub docstring: Option<String>,
    /// 1-based line of the `def` (or `async`) keyword.
    pub line: usize,
    /// Body statements.
    pub body: Vec<Stmt>,
}

/// A class definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    /// Class name.
    pub name: String,
    /// 1-based line of the `class` keyword.
    pub line: usize,
    /// Body statements.
    pub body: Vec<Stmt>,
}

/// How a parameter can be passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Declared before `/`.
    PositionalOnly,
    /// Regular positional-or-keyword parameter.
    Positional,
    /// `*args`.
    VarPositional,
    /// Declared after `*` or `*args`.
    KeywordOnly,
    /// `**kwargs`.
    VarKeyword,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name without `*`/`**`.
    pub name: String,
    /// Passing convention.
    pub kind: ParamKind,
    /// Annotation expression, if any.
    pub annotation: Option<Expr>,
}

/// An expression, as far as annotations are concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Bare identifier.
    Name(String),
    /// Literal constant.
    Constant(Constant),
    /// Anything else (subscript, attribute, union, call, f-string, ...).
    Other(&'static str),
}

/// A literal constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// Integer literal.
    Int(i128),
    /// Float literal.
    Float(f64),
    /// Imaginary literal, kept as written.
    Complex(String),
    /// String literal after escape processing and implicit concatenation.
    Str(String),
    /// Bytes literal, kept as written between the quotes.
    Bytes(String),
    /// `True` / `False`.
    Bool(bool),
    /// `None`.
    None,
    /// `...`.
    Ellipsis,
}
