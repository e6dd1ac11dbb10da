use proptest::prelude::*;
use pulse_admin_cli::api::ApiError;
use pulse_admin_cli::models::User;
use pulse_admin_cli::pages;
use pulse_admin_cli::view::{filter_items, matches, unwrap_envelope, LoadState, RemoteList, ViewError};
use serde_json::{json, Value};

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Zé ]{0,12}", 0..20)
}

fn envelope(names: &[String]) -> Value {
    let rows: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| json!({ "id": idx, "username": name }))
        .collect();
    json!({ "users": rows })
}

/// Mount the users page against a canned gateway response
fn loaded_users(payload: Value, term: &str) -> RemoteList<User> {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let mut list = RemoteList::new(pages::users());
    runtime.block_on(list.load(move || async move { Ok::<_, ApiError>(payload) }));
    list.set_filter_term(term);
    list
}

fn ids(rows: &[&User]) -> Vec<i64> {
    rows.iter().map(|row| row.id).collect()
}

proptest! {
    #[test]
    fn ready_items_match_envelope_length(names in names()) {
        let list = loaded_users(envelope(&names), "");
        match list.state() {
            LoadState::Ready(items) => prop_assert_eq!(items.len(), names.len()),
            other => prop_assert!(false, "expected ready list, got {:?}", other),
        }
    }

    #[test]
    fn empty_term_keeps_every_row(names in names()) {
        let list = loaded_users(envelope(&names), "");
        let all: Vec<i64> = (0..names.len() as i64).collect();
        prop_assert_eq!(ids(&list.visible()), all);
    }

    #[test]
    fn filtering_is_idempotent(names in names(), term in "[a-zA-Z]{0,3}") {
        let list = loaded_users(envelope(&names), &term);
        let once: Vec<User> = list.visible().into_iter().cloned().collect();
        let twice = filter_items(&once, &term);
        prop_assert_eq!(ids(&twice), ids(&list.visible()));
    }

    #[test]
    fn visible_rows_all_match(names in names(), term in "[a-zA-Z]{0,3}") {
        let list = loaded_users(envelope(&names), &term);
        for row in list.visible() {
            prop_assert!(matches(&row.username, &term));
        }
        prop_assert_eq!(list.items().len(), names.len());
    }

    #[test]
    fn matching_ignores_case(text in "[a-zA-Z]{1,10}") {
        prop_assert!(matches(&text, &text.to_uppercase()));
        prop_assert!(matches(&text.to_lowercase(), &text));
    }

    #[test]
    fn non_array_field_is_a_shape_error(value in prop_oneof![
        Just(json!(null)),
        Just(json!("users")),
        any::<i64>().prop_map(|n| json!(n)),
        Just(json!({ "id": 1 })),
    ]) {
        let payload = json!({ "users": value });
        prop_assert_eq!(
            unwrap_envelope(&payload, "users").unwrap_err(),
            ViewError::Shape { field: "users".to_string() }
        );
    }
}
