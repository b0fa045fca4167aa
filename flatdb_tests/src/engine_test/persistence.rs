use super::*;

#[test]
fn test_persistence_reopen_insert() -> anyhow::Result<()> {
    let path = temp_path("persist_insert");

    {
        let mut db = Database::open(path.clone())?;
        db.execute("create_table users name:str")?;
        db.execute(r#"insert into users values ("ram")"#)?;
    }

    {
        let mut db = Database::open(path.clone())?;
        let out = db.execute("select from users")?;
        assert_eq!(out, "ID\tname\n1\tram");
        assert_eq!(
            db.execute(r#"insert into users values ("sita")"#)?,
            r#"Inserted record with ID=2 into "users""#
        );
    }

    std::fs::remove_dir_all(&path)?;
    Ok(())
}

#[test]
fn test_persistence_reopen_update_delete() {
    let path = temp_path("persist_ud");

    {
        let mut db = Database::open(path.clone()).unwrap();
        db.execute("create_table users name:str age:int").unwrap();
        db.execute("insert into users values (a, 1)").unwrap();
        db.execute("insert into users values (b, 2)").unwrap();
        db.execute("update users set age = 10 where name = a").unwrap();
        db.execute("delete from users where name = b").unwrap();
    }

    {
        let mut db = Database::open(path.clone()).unwrap();
        assert_eq!(db.execute("select from users").unwrap(), "ID\tname\tage\n1\ta\t10");
    }

    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_drop_removes_table_file() {
    let path = temp_path("persist_drop");
    let mut db = Database::open(path.clone()).unwrap();
    db.execute("create_table users name:str").unwrap();
    db.execute("insert into users values (x)").unwrap();
    let table_file = path.join("tables").join("users.json");
    assert!(table_file.exists());

    db.execute("drop_table users").unwrap();
    assert!(!table_file.exists());

    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_corrupted_table_file_is_reported() {
    let path = temp_path("persist_corrupt");
    let mut db = Database::open(path.clone()).unwrap();
    db.execute("create_table users name:str").unwrap();
    std::fs::write(path.join("tables").join("users.json"), "[{\"ID\": 1,").unwrap();

    let err = db.execute("select from users").unwrap_err();
    assert!(matches!(err, DbError::Storage(_)));
    // The session keeps working for other tables.
    db.execute("create_table other n:int").unwrap();
    db.execute("insert into other values (1)").unwrap();

    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_mistyped_table_file_is_reported() {
    let path = temp_path("persist_mistyped");
    let mut db = Database::open(path.clone()).unwrap();
    db.execute("create_table users age:int").unwrap();
    std::fs::write(
        path.join("tables").join("users.json"),
        r#"[{"ID": 1, "age": "old"}]"#,
    )
    .unwrap();

    let err = db.execute("select from users").unwrap_err();
    assert!(matches!(err, DbError::Storage(ref m) if m.contains("age")));

    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_insert_after_max_id_is_rejected() {
    let path = temp_path("persist_max_id");
    let mut db = Database::open(path.clone()).unwrap();
    db.execute("create_table t n:int").unwrap();
    let table_file = path.join("tables").join("t.json");
    let doc = r#"[{"ID": 9223372036854775807, "n": 1}]"#;
    std::fs::write(&table_file, doc).unwrap();

    let err = db.execute("insert into t values (2)").unwrap_err();
    assert!(matches!(err, DbError::Storage(_)));
    assert_eq!(std::fs::read_to_string(&table_file).unwrap(), doc);
    assert_eq!(
        db.execute("select from t").unwrap(),
        "ID\tn\n9223372036854775807\t1"
    );

    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_duplicate_ids_in_table_file_are_reported() {
    let path = temp_path("persist_dup_id");
    let mut db = Database::open(path.clone()).unwrap();
    db.execute("create_table t n:int").unwrap();
    let table_file = path.join("tables").join("t.json");
    let doc = r#"[{"ID":1,"n":1},{"ID":1,"n":2}]"#;
    std::fs::write(&table_file, doc).unwrap();

    let err = db.execute("update t set n = 9 where ID = 1").unwrap_err();
    assert!(matches!(err, DbError::Storage(ref m) if m.contains("ID 1")));
    assert_eq!(std::fs::read_to_string(&table_file).unwrap(), doc);
    assert!(matches!(db.execute("select from t"), Err(DbError::Storage(_))));

    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_create_replaces_stale_table_file() {
    let path = temp_path("persist_stale");
    let mut db = Database::open(path.clone()).unwrap();
    std::fs::write(
        path.join("tables").join("users.json"),
        r#"[{"ID": 5, "name": "ghost"}]"#,
    )
    .unwrap();

    db.execute("create_table users name:str").unwrap();
    assert_eq!(db.execute("select from users").unwrap(), "ID\tname");
    assert_eq!(
        db.execute("insert into users values (ram)").unwrap(),
        r#"Inserted record with ID=1 into "users""#
    );

    let _ = std::fs::remove_dir_all(&path);
}

#[test]
fn test_catalog_with_path_like_name_is_refused() {
    let path = temp_path("persist_traversal");
    let mut db = Database::open(path.clone()).unwrap();
    std::fs::write(
        path.join("catalog.json"),
        r#"{"tables":[{"name":"../x","columns":[{"name":"ID","type":"int"}]}]}"#,
    )
    .unwrap();

    let err = db.execute("insert into ../x values (1)").unwrap_err();
    assert!(matches!(err, DbError::Storage(_)));
    assert!(!path.join("x.json").exists());

    let _ = std::fs::remove_dir_all(&path);
}
