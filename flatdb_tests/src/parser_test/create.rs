use super::*;

#[test]
fn parse_create_basic() {
    let cmd = parse("create_table users name:str age:int active:bool").unwrap();
    assert_eq!(
        cmd,
        Command::CreateTable {
            table: "users".to_string(),
            columns: vec![
                "name:str".to_string(),
                "age:int".to_string(),
                "active:bool".to_string()
            ],
        }
    );
}

#[test]
fn parse_create_keeps_specs_raw() {
    // Column specs are validated by the catalog, not the parser.
    let cmd = parse("create_table t broken x:float").unwrap();
    match cmd {
        Command::CreateTable { columns, .. } => {
            assert_eq!(columns, vec!["broken".to_string(), "x:float".to_string()]);
        }
        _ => panic!("Expected CreateTable command"),
    }
}

#[test]
fn parse_create_requires_columns() {
    let err = parse("create_table users").unwrap_err();
    assert!(matches!(err, DbError::Parse(ref m) if m.starts_with("Usage: create_table")));
}

#[test]
fn parse_schema_commands() {
    assert_eq!(parse("list_tables").unwrap(), Command::ListTables);
    assert_eq!(parse("LIST_TABLES").unwrap(), Command::ListTables);
    assert_eq!(
        parse("drop_table users").unwrap(),
        Command::DropTable {
            table: "users".to_string()
        }
    );
    assert_eq!(
        parse("info users").unwrap(),
        Command::Info {
            table: "users".to_string()
        }
    );
}

#[test]
fn parse_schema_command_arity() {
    assert!(parse("drop_table").is_err());
    assert!(parse("drop_table a b").is_err());
    assert!(parse("info").is_err());
    assert!(parse("list_tables now").is_err());
}

#[test]
fn parse_unknown_and_empty() {
    assert!(matches!(parse("frobnicate x"), Err(DbError::Parse(m)) if m.contains("frobnicate")));
    assert!(matches!(parse("   "), Err(DbError::Parse(m)) if m == "Empty command"));
}
