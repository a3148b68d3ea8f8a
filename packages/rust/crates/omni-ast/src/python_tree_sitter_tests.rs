//! Tests for TreeSitter Python Parser
//!
//! Tests lowering of functions, parameters, annotations and docstrings.

#[cfg(test)]
mod tests {
    use crate::{Constant, Expr, ParamKind, ParseError, Stmt, TreeSitterPythonParser};

    fn first_function(code: &str) -> crate::FunctionDef {
        let mut parser = TreeSitterPythonParser::new().unwrap();
        let module = parser.parse_module(code).unwrap();
        module
            .body
            .into_iter()
            .find_map(|stmt| match stmt {
                Stmt::FunctionDef(f) => Some(f),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_parameter_kinds() {
        let func = first_function("def f(a, /, b, c=1, *args, d, e: int = 2, **kw):\n    pass\n");
        let kinds: Vec<(&str, ParamKind)> = func
            .params
            .iter()
            .map(|p| (p.name.as_str(), p.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("a", ParamKind::PositionalOnly),
                ("b", ParamKind::Positional),
                ("c", ParamKind::Positional),
                ("args", ParamKind::VarPositional),
                ("d", ParamKind::KeywordOnly),
                ("e", ParamKind::KeywordOnly),
                ("kw", ParamKind::VarKeyword),
            ]
        );
    }

    #[test]
    fn test_bare_star_separator() {
        let func = first_function("def f(a, *, b):\n    pass\n");
        assert_eq!(func.params.len(), 2);
        assert_eq!(func.params[1].kind, ParamKind::KeywordOnly);
    }

    #[test]
    fn test_typed_splat() {
        let func = first_function("def f(*args: int, **kwargs: str):\n    pass\n");
        assert_eq!(func.params[0].name, "args");
        assert_eq!(func.params[0].kind, ParamKind::VarPositional);
        assert_eq!(func.params[0].annotation, Some(Expr::Name("int".into())));
        assert_eq!(func.params[1].kind, ParamKind::VarKeyword);
    }

    #[test]
    fn test_annotation_lowering() {
        let func = first_function(
            "def f(a: int, b: 42, c: 'Fwd', d: list[int], e: None, f: (str), g: 1.5) -> Out:\n    pass\n",
        );
        let annotations: Vec<Option<Expr>> =
            func.params.iter().map(|p| p.annotation.clone()).collect();
        assert_eq!(annotations[0], Some(Expr::Name("int".into())));
        assert_eq!(annotations[1], Some(Expr::Constant(Constant::Int(42))));
        assert_eq!(
            annotations[2],
            Some(Expr::Constant(Constant::Str("Fwd".into())))
        );
        assert!(matches!(annotations[3], Some(Expr::Other(_))));
        assert_eq!(annotations[4], Some(Expr::Constant(Constant::None)));
        assert_eq!(annotations[5], Some(Expr::Name("str".into())));
        assert_eq!(annotations[6], Some(Expr::Constant(Constant::Float(1.5))));
        assert_eq!(func.returns, Some(Expr::Name("Out".into())));
    }

    #[test]
    fn test_docstring_forms() {
        let func = first_function("def f():\n    'single'\n");
        assert_eq!(func.docstring.as_deref(), Some("single"));

        let func = first_function("def f():\n    # leading comment\n    \"\"\"doc\"\"\"\n");
        assert_eq!(func.docstring.as_deref(), Some("doc"));

        let func = first_function("def f():\n    'part one, ' \"part two\"\n");
        assert_eq!(func.docstring.as_deref(), Some("part one, part two"));

        let func = first_function("def f():\n    x = 1\n    'not a docstring'\n");
        assert_eq!(func.docstring, None);

        let func = first_function("def f():\n    f'{x}'\n");
        assert_eq!(func.docstring, None);

        let func = first_function("def f():\n    b'bytes'\n");
        assert_eq!(func.docstring, None);
    }

    #[test]
    fn test_async_and_decorated_lines() {
        let code = "import x\n\n@decorator\ndef first():\n    pass\n\nasync def second():\n    pass\n";
        let mut parser = TreeSitterPythonParser::new().unwrap();
        let module = parser.parse_module(code).unwrap();
        let funcs: Vec<(String, bool, usize)> = module
            .body
            .iter()
            .filter_map(|stmt| match stmt {
                Stmt::FunctionDef(f) => Some((f.name.clone(), f.is_async, f.line)),
                _ => None,
            })
            .collect();
        assert_eq!(
            funcs,
            vec![("first".to_string(), false, 4), ("second".to_string(), true, 7)]
        );
    }

    #[test]
    fn test_compound_statements_hold_definitions() {
        let code = "try:\n    def a():\n        pass\nexcept ImportError:\n    def b():\n        pass\nx = 1\n";
        let mut parser = TreeSitterPythonParser::new().unwrap();
        let module = parser.parse_module(code).unwrap();
        assert_eq!(module.body.len(), 2);
        match &module.body[0] {
            Stmt::Compound { kind, body, .. } => {
                assert_eq!(*kind, "try_statement");
                assert_eq!(body.len(), 2);
            }
            other => panic!("expected compound statement, got {other:?}"),
        }
        assert!(matches!(module.body[1], Stmt::Simple { line: 7, .. }));
    }

    #[test]
    fn test_syntax_error_location() {
        let mut parser = TreeSitterPythonParser::new().unwrap();
        let err = parser
            .parse_module("def ok():\n    pass\n\ndef broken(:\n    pass\n")
            .unwrap_err();
        match err {
            ParseError::Syntax { line, .. } => assert!((4..=5).contains(&line)),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_source() {
        let mut parser = TreeSitterPythonParser::new().unwrap();
        let module = parser.parse_module("").unwrap();
        assert!(module.body.is_empty());
    }
}
