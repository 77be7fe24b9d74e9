mod common;

#[test]
#[ignore = "requires TEST_DATABASE_URL"]
fn test_pool_hands_out_connections() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}
