use shaper_core::{
    PageRequest, PagedList, PropertyMappingTable, QueryError,
    mapping::fields_are_valid,
    shaping::{FieldSelection, Shaped, Value, shape_data},
    shaper_model::{AuthorDto, AuthorID},
    sorting::{OrderingTerm, SortOrder, translate_order_by},
};
use uuid::Uuid;

fn scenario_table() -> PropertyMappingTable {
    PropertyMappingTable::builder()
        .map("Id", ["Id"])
        .map_reversed("Age", ["DateOfBirth"])
        .map("Name", ["FirstName", "LastName"])
        .build()
        .expect("valid table")
}

fn dto(name: &str, age: i32, main_category: &str) -> AuthorDto {
    AuthorDto {
        id: AuthorID(Uuid::now_v7()),
        name: name.to_string(),
        age,
        main_category: main_category.to_string(),
    }
}

#[test]
fn unmapped_clause_fails_translation() {
    let table = scenario_table();
    assert!(!fields_are_valid(&table, "age, mainCategory desc"));

    let err = translate_order_by("age, mainCategory desc", &table).unwrap_err();
    assert_eq!(
        err,
        QueryError::UnknownSortField {
            property: "mainCategory".into()
        }
    );
}

#[test]
fn reversed_age_sorts_birth_date_descending() {
    let ordering = translate_order_by("age", &scenario_table()).unwrap();
    assert_eq!(ordering.terms(), [OrderingTerm::descending("DateOfBirth")]);
    assert_eq!(ordering.terms()[0].order, SortOrder::Descending);
}

#[test]
fn translation_concatenates_per_clause() {
    let table = scenario_table();
    let whole = translate_order_by("name, age desc", &table).unwrap();

    let mut pieces = translate_order_by("name", &table).unwrap().terms().to_vec();
    pieces.extend_from_slice(translate_order_by("age desc", &table).unwrap().terms());

    assert_eq!(whole.terms(), pieces.as_slice());
}

#[test]
fn blank_references_are_always_valid() {
    let table = scenario_table();
    assert!(fields_are_valid(&table, ""));
    assert!(fields_are_valid(&table, "   "));
}

#[test]
fn third_page_of_twenty_three() {
    let records: Vec<u32> = (1..=23).collect();
    let page = PagedList::create(records, PageRequest::new(3, 10).unwrap());

    assert_eq!(page.len(), 3);
    assert_eq!(page.total_count(), 23);
    assert_eq!(page.total_pages(), 3);
    assert!(!page.has_next());
    assert!(page.has_previous());
}

#[test]
fn fifth_page_of_twenty_three_is_empty() {
    let records: Vec<u32> = (1..=23).collect();
    let page = PagedList::create(records, PageRequest::new(5, 10).unwrap());

    assert!(page.is_empty());
    assert_eq!(page.total_count(), 23);
    assert!(!page.has_next());
    assert!(page.has_previous());
}

#[test]
fn page_counts_follow_ceiling_division() {
    for total in [0usize, 1, 9, 10, 11, 20, 23, 100] {
        for size in [1i64, 3, 10, 25] {
            let records: Vec<usize> = (0..total).collect();
            let first = PagedList::create(records.clone(), PageRequest::new(1, size).unwrap());
            let expected_pages = total.div_ceil(size as usize);
            assert_eq!(first.total_pages(), expected_pages, "{total}/{size}");

            for current in 1..=(expected_pages as i64 + 1) {
                let page =
                    PagedList::create(records.as_slice(), PageRequest::new(current, size).unwrap());
                assert_eq!(page.has_previous(), current > 1);
                assert_eq!(page.has_next(), (current as usize) < expected_pages);
                assert!(page.len() <= size as usize);
                assert_eq!(page.is_empty(), current as usize > expected_pages);
            }
        }
    }
}

#[test]
fn empty_field_list_projects_declared_fields() {
    let authors = vec![dto("Anne Bonny", 41, "Navigation"), dto("Mary Read", 36, "Swordplay")];
    let shaped: Vec<_> = shape_data::<AuthorDto, _>(&authors, "").unwrap().collect();

    let declared: Vec<_> = AuthorDto::field_set().names().collect();
    for record in &shaped {
        assert_eq!(record.keys().collect::<Vec<_>>(), declared);
    }
}

#[test]
fn requested_fields_come_back_in_request_order() {
    let author = dto("Anne Bonny", 41, "Navigation");
    let selection = FieldSelection::<AuthorDto>::resolve("maincategory,NAME").unwrap();
    let shaped = selection.project(&author);

    assert_eq!(shaped.keys().collect::<Vec<_>>(), vec!["MainCategory", "Name"]);
    assert_eq!(shaped.get("Name"), Some(&Value::Text("Anne Bonny".into())));

    let json = serde_json::to_string(&shaped).unwrap();
    assert_eq!(json, r#"{"MainCategory":"Navigation","Name":"Anne Bonny"}"#);
}

#[test]
fn unknown_projection_field_is_reported() {
    let err = FieldSelection::<AuthorDto>::resolve("name, shoeSize").unwrap_err();
    assert_eq!(err.to_string(), "Property shoeSize was not found on AuthorDto");
    assert!(err.is_client_error());
}
