//! omni-ast - Python structural scanner
//!
//! Parses Python source with tree-sitter, lowers it into a small typed
//! syntax tree, and walks that tree to disclose public function signatures
//! without their bodies.
//!
//! ## Architecture
//!
//! ```text
//! omni-ast/src/
//! ├── lib.rs                 # Re-exports (entry point)
//! ├── error.rs               # ParseError
//! ├── ast.rs                 # Module / Stmt / Expr sum types
//! ├── literal.rs             # String, number and docstring evaluation
//! ├── python_tree_sitter.rs  # tree-sitter CST -> typed AST
//! ├── visit.rs               # Visitor trait and walk_* functions
//! └── disclosure.rs          # DisclosureScanner and FunctionRecord
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use omni_ast::scan_source;
//!
//! let content = "def hello(name: str) -> str:\n    '''Greet.'''\n";
//! let records = scan_source(content).unwrap();
//! assert_eq!(records[0].name, "hello");
//! assert_eq!(records[0].description, "Greet.");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod ast;
mod disclosure;
mod error;
mod literal;
mod python_tree_sitter;
pub mod visit;

#[cfg(test)]
mod python_tree_sitter_tests;

// ============================================================================
// Re-exports
// ============================================================================

// Syntax tree
pub use ast::{ClassDef, Constant, Expr, FunctionDef, Module, Param, ParamKind, Stmt};

// Parsing
pub use error::ParseError;
pub use literal::cleandoc;
pub use python_tree_sitter::{TreeSitterPythonParser, parse_module};

// Disclosure
pub use disclosure::{
    ANY_TYPE, AnnotationValue, DisclosureScanner, FunctionRecord, NO_DESCRIPTION, PRIVATE_PREFIX,
    ParameterRecord, ScanOptions, UNKNOWN_RETURN, describe, scan_module, scan_source,
    scan_source_with,
};
pub use visit::Visitor;
