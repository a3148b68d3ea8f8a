//! Pre-order traversal over the typed syntax tree.
//!
//! Each `visit_*` method defaults to the matching `walk_*` function, which
//! descends into every child. Overriding a `visit_*` method and calling the
//! `walk_*` function from it keeps the traversal going below that node.

use crate::ast::{ClassDef, FunctionDef, Module, Stmt};

/// Syntax tree visitor.
pub trait Visitor {
    /// Visit a whole module.
    fn visit_module(&mut self, module: &Module) {
        walk_module(self, module);
    }

    /// Visit any statement.
    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    /// Visit a function definition.
    fn visit_function_def(&mut self, func: &FunctionDef) {
        walk_function_def(self, func);
    }

    /// Visit a class definition.
    fn visit_class_def(&mut self, class: &ClassDef) {
        walk_class_def(self, class);
    }
}

/// Visit every top-level statement.
pub fn walk_module<V: Visitor + ?Sized>(visitor: &mut V, module: &Module) {
    for stmt in &module.body {
        visitor.visit_stmt(stmt);
    }
}

/// Dispatch on the statement variant.
pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::FunctionDef(func) => visitor.visit_function_def(func),
        Stmt::ClassDef(class) => visitor.visit_class_def(class),
        Stmt::Compound { body, .. } => {
            for inner in body {
                visitor.visit_stmt(inner);
            }
        }
        Stmt::Simple { .. } => {}
    }
}

/// Visit every statement of a function body.
pub fn walk_function_def<V: Visitor + ?Sized>(visitor: &mut V, func: &FunctionDef) {
    for stmt in &func.body {
        visitor.visit_stmt(stmt);
    }
}

/// Visit every statement of a class body.
pub fn walk_class_def<V: Visitor + ?Sized>(visitor: &mut V, class: &ClassDef) {
    for stmt in &class.body {
        visitor.visit_stmt(stmt);
    }
}
