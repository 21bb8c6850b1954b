use entrystore_core::db::open_db_in_memory;
use entrystore_core::{
    DataEntry, DbError, EntryId, EntryRepository, EntryStore, ImageItem, NewDataEntry,
    RepoError, RepoResult, SqliteEntryRepository,
};
use rusqlite::{params, Connection};

fn sample_request() -> NewDataEntry {
    NewDataEntry::new("animals")
        .with_pair("cat", "https://img.example/cat.png")
        .with_pair("dog", "https://img.example/dog.png")
        .with_pair("owl", "https://img.example/owl.png")
}

fn insert_raw(conn: &Connection, queries: &str, img_links: &str) -> EntryId {
    conn.execute(
        "INSERT INTO data_entries (description, queries, img_links) VALUES (?1, ?2, ?3);",
        params!["raw", queries, img_links],
    )
    .unwrap();
    conn.last_insert_rowid()
}

#[test]
fn create_returns_stored_encoded_entry() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let created = store.create_entry(&sample_request()).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.description, "animals");
    assert_eq!(created.queries, "cat,dog,owl");
    assert_eq!(
        created.img_links,
        "https://img.example/cat.png,https://img.example/dog.png,https://img.example/owl.png"
    );
}

#[test]
fn create_assigns_distinct_ids() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let first = store.create_entry(&sample_request()).unwrap();
    let second = store.create_entry(&sample_request()).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn get_entry_decodes_pairs_created_by_create_entry() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));
    let request = sample_request();

    let created = store.create_entry(&request).unwrap();
    let loaded = store.get_entry(created.id).unwrap().unwrap();

    let expected_queries: Vec<String> = request.data.iter().map(|(q, _)| q.clone()).collect();
    let expected_links: Vec<String> = request.data.iter().map(|(_, l)| l.clone()).collect();
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.description, "animals");
    assert_eq!(loaded.queries, expected_queries);
    assert_eq!(loaded.img_links, expected_links);
}

#[test]
fn get_entry_for_unknown_id_returns_none() {
    let mut conn = open_db_in_memory().unwrap();
    let store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    assert!(store.get_entry(404).unwrap().is_none());
    assert!(store.get_raw_entry(404).unwrap().is_none());
}

#[test]
fn get_image_items_for_unknown_id_returns_empty() {
    let mut conn = open_db_in_memory().unwrap();
    let store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    assert!(store.get_image_items(404).unwrap().is_empty());
}

#[test]
fn get_image_items_pairs_positionally() {
    let mut conn = open_db_in_memory().unwrap();
    let id = insert_raw(&conn, "a,b,c", "x,y,z");
    let store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let items = store.get_image_items(id).unwrap();
    assert_eq!(
        items,
        vec![
            ImageItem::new("a", "x"),
            ImageItem::new("b", "y"),
            ImageItem::new("c", "z"),
        ]
    );
}

#[test]
fn get_image_items_stops_at_shorter_list() {
    let mut conn = open_db_in_memory().unwrap();
    let id = insert_raw(&conn, "a,b,c", "x,y");
    let store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let items = store.get_image_items(id).unwrap();
    assert_eq!(
        items,
        vec![ImageItem::new("a", "x"), ImageItem::new("b", "y")]
    );
}

#[test]
fn zero_pairs_store_empty_columns_and_read_paths_disagree() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let created = store.create_entry(&NewDataEntry::new("empty")).unwrap();
    assert_eq!(created.queries, "");
    assert_eq!(created.img_links, "");

    let decoded = store.get_entry(created.id).unwrap().unwrap();
    assert!(decoded.queries.is_empty());
    assert!(decoded.img_links.is_empty());

    // Known discrepancy: the image-item path splits raw columns, so an
    // empty entry produces one blank pair instead of none.
    let items = store.get_image_items(created.id).unwrap();
    assert_eq!(items, vec![ImageItem::new("", "")]);
}

#[test]
fn separator_inside_element_is_not_escaped() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let request = NewDataEntry::new("lossy")
        .with_pair("red, green", "https://img.example/rg.png")
        .with_pair("blue", "https://img.example/b.png");
    let created = store.create_entry(&request).unwrap();
    assert_eq!(created.queries, "red, green,blue");

    let decoded = store.get_entry(created.id).unwrap().unwrap();
    assert_eq!(decoded.queries, vec!["red", " green", "blue"]);
    assert_eq!(decoded.img_links.len(), 2);
}

#[test]
fn get_entry_does_not_alter_stored_row() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let created = store.create_entry(&sample_request()).unwrap();
    store.get_entry(created.id).unwrap();

    let raw = store.get_raw_entry(created.id).unwrap().unwrap();
    assert_eq!(raw, created);
}

#[test]
fn created_entry_serializes_as_flat_record() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let created = store
        .create_entry(&NewDataEntry::new("one").with_pair("sun", "s.png"))
        .unwrap();
    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["description"], "one");
    assert_eq!(json["queries"], "sun");
    assert_eq!(json["img_links"], "s.png");

    let item = serde_json::to_value(ImageItem::new("sun", "s.png")).unwrap();
    assert_eq!(item, serde_json::json!({ "name": "sun", "url": "s.png" }));
}

struct FailingRepository;

impl EntryRepository for FailingRepository {
    fn create_entry(&mut self, _request: &NewDataEntry) -> RepoResult<DataEntry> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::ExecuteReturnedResults,
        )))
    }

    fn get_entry(&self, _id: EntryId) -> RepoResult<Option<DataEntry>> {
        Err(RepoError::Db(DbError::Sqlite(
            rusqlite::Error::QueryReturnedNoRows,
        )))
    }
}

#[test]
fn backend_errors_propagate_unchanged() {
    let mut store = EntryStore::new(FailingRepository);

    let create_err = store.create_entry(&sample_request()).unwrap_err();
    assert!(matches!(
        create_err,
        RepoError::Db(DbError::Sqlite(rusqlite::Error::ExecuteReturnedResults))
    ));

    assert!(matches!(
        store.get_entry(1).unwrap_err(),
        RepoError::Db(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    ));
    assert!(store.get_image_items(1).is_err());
}

#[test]
fn create_fails_when_table_is_missing() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE data_entries;").unwrap();
    let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));

    let err = store.create_entry(&sample_request()).unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
}
