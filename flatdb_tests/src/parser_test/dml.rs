use super::*;

#[test]
fn parse_insert_with_quotes() {
    let cmd = parse(r#"insert into users values ("ram kumar", 30, 'true')"#).unwrap();

    match cmd {
        Command::Insert { table, values } => {
            assert_eq!(table, "users");
            assert_eq!(
                values,
                vec!["ram kumar".to_string(), "30".to_string(), "true".to_string()]
            );
        }
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_empty_string_value() {
    let cmd = parse(r#"insert into users values ("", 1)"#).unwrap();
    match cmd {
        Command::Insert { values, .. } => assert_eq!(values, vec!["".to_string(), "1".to_string()]),
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_rejects_bad_lists() {
    assert!(parse("insert into users values (a b)").is_err());
    assert!(parse("insert into users values (a,)").is_err());
    assert!(parse("insert into users values (, a)").is_err());
    assert!(parse("insert users values (a)").is_err());
    assert!(parse("insert into users values a").is_err());
}

#[test]
fn parse_select_without_where() {
    assert_eq!(
        parse("select from users").unwrap(),
        Command::Select {
            table: "users".to_string(),
            filter: None
        }
    );
}

#[test]
fn parse_select_where_literals() {
    let cmd = parse(r#"select from users where name = "Alice" and age=30 and active=TRUE"#).unwrap();
    assert_eq!(
        cmd,
        Command::Select {
            table: "users".to_string(),
            filter: Some(clause(&[
                ("name", Value::Str("Alice".to_string())),
                ("age", Value::Int(30)),
                ("active", Value::Bool(true)),
            ])),
        }
    );
}

#[test]
fn parse_select_bad_where() {
    assert!(parse("select from users where").is_err());
    assert!(parse("select from users where name").is_err());
    assert!(parse("select from users where name = ").is_err());
    assert!(parse("select from users where a = 1 or b = 2").is_err());
    assert!(parse("select from users where a = 1 and a = 2").is_err());
    assert!(parse("select users").is_err());
}

#[test]
fn parse_update_basic() {
    let cmd = parse(r#"update users set name = "ravi" where ID = 1"#).unwrap();
    assert_eq!(
        cmd,
        Command::Update {
            table: "users".to_string(),
            assignments: assign(&[("name", "ravi")]),
            filter: Some(clause(&[("ID", Value::Int(1))])),
        }
    );
}

#[test]
fn parse_update_multiple_assignments_no_where() {
    let cmd = parse("update users set name=ravi, age=30").unwrap();
    assert_eq!(
        cmd,
        Command::Update {
            table: "users".to_string(),
            assignments: assign(&[("name", "ravi"), ("age", "30")]),
            filter: None,
        }
    );
}

#[test]
fn parse_update_errors() {
    assert!(parse("update users set where ID = 1").is_err());
    assert!(parse("update users name = x").is_err());
    assert!(parse("update users set a = 1 b = 2").is_err());
}

#[test]
fn parse_delete_requires_where() {
    assert_eq!(
        parse("delete from users where ID = 3").unwrap(),
        Command::Delete {
            table: "users".to_string(),
            filter: clause(&[("ID", Value::Int(3))]),
        }
    );
    assert!(parse("delete from users").is_err());
}

#[test]
fn parse_update_keeps_value_text() {
    let cmd = parse(r#"update t set code = "007", flag = TRUE"#).unwrap();
    assert_eq!(
        cmd,
        Command::Update {
            table: "t".to_string(),
            assignments: assign(&[("code", "007"), ("flag", "TRUE")]),
            filter: None,
        }
    );
}

#[test]
fn parse_update_quoted_where_is_a_value() {
    let cmd = parse(r#"update t set note = "where" where ID = 2"#).unwrap();
    assert_eq!(
        cmd,
        Command::Update {
            table: "t".to_string(),
            assignments: assign(&[("note", "where")]),
            filter: Some(clause(&[("ID", Value::Int(2))])),
        }
    );

    let cmd = parse(r#"update t set note = "where""#).unwrap();
    assert!(matches!(cmd, Command::Update { filter: None, .. }));
}

#[test]
fn parse_quoted_punctuation_is_a_value() {
    let cmd = parse(r#"update t set a = ",", b = "=""#).unwrap();
    assert_eq!(
        cmd,
        Command::Update {
            table: "t".to_string(),
            assignments: assign(&[("a", ","), ("b", "=")]),
            filter: None,
        }
    );

    let cmd = parse(r#"select from t where a = "and" and b = ",""#).unwrap();
    assert_eq!(
        cmd,
        Command::Select {
            table: "t".to_string(),
            filter: Some(clause(&[
                ("a", Value::Str("and".to_string())),
                ("b", Value::Str(",".to_string())),
            ])),
        }
    );
}

#[test]
fn parse_unquoted_punctuation_still_rejected() {
    assert!(parse("update t set a = ,").is_err());
    assert!(parse("update t set a = =").is_err());
    assert!(parse(r#"update t set "a" "=" 1"#).is_err());
    assert!(parse(r#""select" from t"#).is_err());
}
