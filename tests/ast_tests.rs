//! Tests for lowering parse trees into the typed AST

use lispfront::ast::{Expr, LetBinding, Program};
use lispfront::{parse, parse_program};

#[test]
fn test_list_wrappers_are_transparent() {
    let program = parse_program("(+ 1 (* 2 3))").unwrap();
    assert_eq!(
        program.body,
        vec![Expr::Call {
            func: "+".to_string(),
            args: vec![
                Expr::Int(1),
                Expr::Call {
                    func: "*".to_string(),
                    args: vec![Expr::Int(2), Expr::Int(3)],
                },
            ],
        }]
    );
}

#[test]
fn test_literals() {
    let program = parse_program(r#"42 "hi" true false x"#).unwrap();
    assert_eq!(
        program.body,
        vec![
            Expr::Int(42),
            Expr::Str("hi".to_string()),
            Expr::Bool(true),
            Expr::Bool(false),
            Expr::Var("x".to_string()),
        ]
    );
}

#[test]
fn test_let_bindings_keep_order() {
    let program = parse_program("(let (a 1 b a) b)").unwrap();
    match &program.body[0] {
        Expr::Let { bindings, body } => {
            assert_eq!(
                bindings,
                &vec![
                    LetBinding {
                        name: "a".to_string(),
                        value: Expr::Int(1),
                    },
                    LetBinding {
                        name: "b".to_string(),
                        value: Expr::Var("a".to_string()),
                    },
                ]
            );
            assert_eq!(body.as_ref(), &Expr::Var("b".to_string()));
        }
        other => panic!("expected Let, got {}", other),
    }
}

#[test]
fn test_sample_program_dump() {
    let code = r#"
(defn hello (n)
  (if (< n 10)
      (print (str "small: " n))
      (print (str "big: " n))))
(hello 5)
"#;
    let program = parse_program(code).unwrap();
    assert_eq!(program.body.len(), 2);
    assert_eq!(
        program.body[1].to_string(),
        "Call(hello, args=[Int(5)])"
    );
    assert_eq!(
        program.body[0].to_string(),
        "Defn(hello, params=[n], body=If(Call(<, args=[Var(n), Int(10)]), \
         Call(print, args=[Call(str, args=[String(\"small: \"), Var(n)])]), \
         Call(print, args=[Call(str, args=[String(\"big: \"), Var(n)])])))"
    );
}

#[test]
fn test_try_from_parse_tree() {
    let tree = parse("(def x 1)").unwrap();
    let program = Program::try_from(&tree).unwrap();
    assert_eq!(
        program.body[0],
        Expr::Def {
            name: "x".to_string(),
            value: Box::new(Expr::Int(1)),
        }
    );
}

#[test]
fn test_syntax_errors_pass_through() {
    let err = parse_program("(do)").unwrap_err();
    assert!(err.is_syntax());
}
