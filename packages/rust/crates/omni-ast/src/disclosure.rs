//! Disclosure scanner - public function signatures without bodies.
//!
//! Produces one [`FunctionRecord`] per public function, in source order.
//! Annotation handling is shallow: a bare identifier yields
//! its name, a literal constant yields its value, and every other shape
//! falls back to [`ANY_TYPE`] (parameters) or [`UNKNOWN_RETURN`] (returns).

use serde::Serialize;

use crate::ast::{ClassDef, Constant, Expr, FunctionDef, Module, ParamKind, Stmt};
use crate::error::ParseError;
use crate::python_tree_sitter::TreeSitterPythonParser;
use crate::visit::{Visitor, walk_class_def, walk_function_def, walk_stmt};

/// Parameter type used when no recognizable annotation is present.
pub const ANY_TYPE: &str = "Any";

/// Return annotation used when no bare-identifier annotation is present.
pub const UNKNOWN_RETURN: &str = "Unknown";

/// Description used for functions without a docstring.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Names starting with this prefix are private and never disclosed.
pub const PRIVATE_PREFIX: char = '_';

/// Metadata for one disclosed function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionRecord {
    /// Function name.
    pub name: String,
    /// Cleaned docstring or [`NO_DESCRIPTION`].
    pub description: String,
    /// Positional-or-keyword parameters in declaration order.
    pub parameters: Vec<ParameterRecord>,
    /// Bare-identifier return annotation or [`UNKNOWN_RETURN`].
    pub return_annotation: String,
    /// 1-based line of the definition.
    pub line_number: usize,
}

/// Metadata for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRecord {
    /// Parameter name.
    pub name: String,
    /// Extracted annotation.
    #[serde(rename = "type")]
    pub type_annotation: AnnotationValue,
}

/// A parameter annotation as disclosed.
///
/// Serializes as a bare JSON value: `"int"`, `42`, `1.5`, `true`, `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    /// Identifier text, or [`ANY_TYPE`].
    Type(String),
    /// Integer literal value.
    Int(i128),
    /// Float literal value.
    Float(f64),
    /// `True` / `False`.
    Bool(bool),
    /// `None`.
    Null,
}

impl AnnotationValue {
    /// The [`ANY_TYPE`] fallback.
    #[must_use]
    pub fn any() -> Self {
        Self::Type(ANY_TYPE.to_string())
    }

    /// Shallow extraction from an optional annotation expression.
    #[must_use]
    pub fn from_annotation(annotation: Option<&Expr>) -> Self {
        match annotation {
            Some(Expr::Name(name)) => Self::Type(name.clone()),
            Some(Expr::Constant(constant)) => match constant {
                Constant::Int(value) => Self::Int(*value),
                Constant::Float(value) => Self::Float(*value),
                Constant::Bool(value) => Self::Bool(*value),
                Constant::None => Self::Null,
                Constant::Str(_) | Constant::Bytes(_) | Constant::Complex(_) | Constant::Ellipsis => {
                    Self::any()
                }
            },
            Some(Expr::Other(_)) | None => Self::any(),
        }
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        Self::Type(value.to_string())
    }
}

/// Traversal options for [`DisclosureScanner`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Also disclose `async def` functions.
    pub include_async: bool,
    /// Only disclose functions defined directly in the module scope.
    ///
    /// When `false`, functions nested in other functions, classes or
    /// compound statements are disclosed too.
    pub top_level_only: bool,
}

/// Visitor collecting [`FunctionRecord`]s.
#[derive(Debug, Default)]
pub struct DisclosureScanner {
    options: ScanOptions,
    depth: usize,
    records: Vec<FunctionRecord>,
}

impl DisclosureScanner {
    /// Create a scanner with the given options.
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            depth: 0,
            records: Vec::new(),
        }
    }

    /// Records collected so far.
    #[must_use]
    pub fn records(&self) -> &[FunctionRecord] {
        &self.records
    }

    /// Consume the scanner and return its records.
    #[must_use]
    pub fn into_records(self) -> Vec<FunctionRecord> {
        self.records
    }

    fn discloses(&self, func: &FunctionDef) -> bool {
        !func.name.starts_with(PRIVATE_PREFIX)
            && (self.options.include_async || !func.is_async)
            && (self.depth == 0 || !self.options.top_level_only)
    }

    fn nested<F: FnOnce(&mut Self)>(&mut self, walk: F) {
        self.depth += 1;
        walk(self);
        self.depth -= 1;
    }
}

impl Visitor for DisclosureScanner {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Compound { .. } => self.nested(|s| walk_stmt(s, stmt)),
            _ => walk_stmt(self, stmt),
        }
    }

    fn visit_function_def(&mut self, func: &FunctionDef) {
        if self.discloses(func) {
            self.records.push(describe(func));
        }
        self.nested(|s| walk_function_def(s, func));
    }

    fn visit_class_def(&mut self, class: &ClassDef) {
        self.nested(|s| walk_class_def(s, class));
    }
}

/// Build the record for a single function, regardless of visibility.
#[must_use]
pub fn describe(func: &FunctionDef) -> FunctionRecord {
    FunctionRecord {
        name: func.name.clone(),
        description: func
            .docstring
            .clone()
            .filter(|doc| !doc.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        parameters: func
            .params
            .iter()
            .filter(|param| param.kind == ParamKind::Positional)
            .map(|param| ParameterRecord {
                name: param.name.clone(),
                type_annotation: AnnotationValue::from_annotation(param.annotation.as_ref()),
            })
            .collect(),
        return_annotation: match &func.returns {
            Some(Expr::Name(name)) => name.clone(),
            _ => UNKNOWN_RETURN.to_string(),
        },
        line_number: func.line,
    }
}

/// Disclose the public functions of an already parsed module.
#[must_use]
pub fn scan_module(module: &Module, options: ScanOptions) -> Vec<FunctionRecord> {
    let mut scanner = DisclosureScanner::new(options);
    scanner.visit_module(module);
    scanner.into_records()
}

/// Parse Python source and disclose its public functions (default options).
///
/// # Errors
///
/// Returns a [`ParseError`] if the source is not valid Python; nothing is
/// returned for a partially valid file.
pub fn scan_source(source: &str) -> Result<Vec<FunctionRecord>, ParseError> {
    scan_source_with(source, ScanOptions::default())
}

/// Parse Python source and disclose its public functions.
///
/// # Errors
///
/// See [`scan_source`].
pub fn scan_source_with(
    source: &str,
    options: ScanOptions,
) -> Result<Vec<FunctionRecord>, ParseError> {
    let module = TreeSitterPythonParser::new()?.parse_module(source)?;
    let records = scan_module(&module, options);
    log::debug!(
        "disclosed {} functions from {} top-level statements",
        records.len(),
        module.body.len()
    );
    Ok(records)
}
