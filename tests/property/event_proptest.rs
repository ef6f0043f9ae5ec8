//! Property-based tests for change event payload shapes

use proptest::prelude::*;
use serde_json::{json, Value};

use boardcast::shared::{Card, ChangeEvent, Fields};

fn text_fields() -> impl Strategy<Value = Fields> {
    prop::collection::btree_map("[a-z]{1,8}", "[ -~]{0,12}", 0..5).prop_map(|entries| {
        entries
            .into_iter()
            .filter(|(k, _)| k != "id" && k != "list_id")
            .map(|(k, v)| (k, Value::from(v)))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_update_payload_is_raw_patch(id in "[a-f0-9-]{1,36}", updates in text_fields()) {
        let event = ChangeEvent::CardUpdated { id: id.clone(), updates: updates.clone() };
        let value = serde_json::to_value(&event).unwrap();

        prop_assert_eq!(&value["type"], "[CARDS] UPDATE");
        prop_assert_eq!(&value["payload"], &json!({"id": id, "updates": updates}));
    }

    #[test]
    fn test_card_create_list_id_matches_card(
        id in "[a-z0-9]{1,12}",
        list_id in proptest::option::of("[a-z0-9]{1,12}"),
        fields in text_fields(),
    ) {
        let mut fields = fields;
        if let Some(list_id) = &list_id {
            fields.insert("list_id".to_string(), Value::from(list_id.clone()));
        }
        let card = Card { id, fields };
        let value = serde_json::to_value(ChangeEvent::card_created(card.clone())).unwrap();

        prop_assert_eq!(&value["payload"]["card"], &serde_json::to_value(&card).unwrap());
        match list_id {
            Some(list_id) => prop_assert_eq!(&value["payload"]["listId"], &Value::from(list_id)),
            None => prop_assert!(value["payload"].get("listId").is_none()),
        }
    }
}
