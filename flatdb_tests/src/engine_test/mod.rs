use flatdb_core::{Database, DbError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

fn temp_path(prefix: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut path: PathBuf = std::env::temp_dir();
    path.push(format!("flatdb_test_{}_{}_{}", prefix, std::process::id(), id));
    let _ = std::fs::remove_dir_all(&path);
    path
}

fn test_db() -> Database {
    Database::open(temp_path("engine")).unwrap()
}

fn seed_users_3(db: &mut Database) {
    db.execute("create_table users name:str age:int active:bool")
        .unwrap();
    db.execute(r#"insert into users values ("Alice", 30, true)"#)
        .unwrap();
    db.execute(r#"insert into users values ("Bob", 25, false)"#)
        .unwrap();
    db.execute(r#"insert into users values ("Alice", 41, 1)"#)
        .unwrap();
}

mod persistence;
