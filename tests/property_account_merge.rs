use proptest::prelude::*;
use skland_config::{AccountInputs, ConfigBuilder};
use std::collections::HashSet;

const PREFIX: &str = "未命名账号-";

/// (nickname, token) pairs drawn from small alphabets so that empty
/// values and duplicate tokens show up often.
fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[ab]{0,2}", "[xyz]{0,2}"), 1..24)
}

fn compact_json(entries: &[(String, String)]) -> String {
    let items: Vec<serde_json::Value> = entries
        .iter()
        .map(|(nickname, token)| {
            let mut object = serde_json::Map::new();
            object.insert(nickname.clone(), serde_json::Value::String(token.clone()));
            serde_json::Value::Object(object)
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

fn explicit_json(entries: &[(String, String)]) -> String {
    let items: Vec<serde_json::Value> = entries
        .iter()
        .map(|(nickname, token)| serde_json::json!({ "nickname": nickname, "token": token }))
        .collect();
    serde_json::Value::Array(items).to_string()
}

fn expected_count(entries: &[(String, String)]) -> usize {
    entries
        .iter()
        .filter(|(_, token)| !token.is_empty())
        .map(|(_, token)| token.as_str())
        .collect::<HashSet<_>>()
        .len()
}

fn bulk_inputs(json: String) -> AccountInputs {
    AccountInputs {
        accounts_json: Some(json),
        ..Default::default()
    }
}

proptest! {
    /// Property: compact input yields one account per distinct non-empty token
    #[test]
    fn prop_compact_count_matches_unique_tokens(entries in entries()) {
        let expected = expected_count(&entries);
        let result = ConfigBuilder::default().build(&bulk_inputs(compact_json(&entries)));

        if expected == 0 {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result.unwrap().document.users.len(), expected);
        }
    }

    /// Property: explicit input yields one account per distinct non-empty token
    #[test]
    fn prop_explicit_count_matches_unique_tokens(entries in entries()) {
        let expected = expected_count(&entries);
        let result = ConfigBuilder::default().build(&bulk_inputs(explicit_json(&entries)));

        if expected == 0 {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result.unwrap().document.users.len(), expected);
        }
    }

    /// Property: placeholder suffixes are exactly 1..=N for N accepted unnamed accounts
    #[test]
    fn prop_placeholders_are_contiguous(entries in entries()) {
        let Ok(report) = ConfigBuilder::default().build(&bulk_inputs(explicit_json(&entries))) else {
            return Ok(());
        };

        let mut suffixes: Vec<u32> = report
            .document
            .users
            .iter()
            .filter_map(|u| u.nickname.strip_prefix(PREFIX))
            .map(|n| n.parse().unwrap())
            .collect();
        suffixes.sort_unstable();

        let expected: Vec<u32> = (1..=u32::try_from(suffixes.len()).unwrap()).collect();
        prop_assert_eq!(suffixes, expected);
    }

    /// Property: users are sorted by nickname, equal nicknames keep input order
    #[test]
    fn prop_users_sorted_and_stable(entries in entries()) {
        let Ok(report) = ConfigBuilder::default().build(&bulk_inputs(explicit_json(&entries))) else {
            return Ok(());
        };
        let users = &report.document.users;

        let position = |token: &str| entries.iter().position(|(_, t)| t == token).unwrap();
        for pair in users.windows(2) {
            prop_assert!(pair[0].nickname <= pair[1].nickname);
            if pair[0].nickname == pair[1].nickname {
                prop_assert!(position(&pair[0].token) < position(&pair[1].token));
            }
        }
    }

    /// Property: a standalone token already in the bulk list is never added twice
    #[test]
    fn prop_standalone_duplicate_never_double_counted(
        entries in entries(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (_, token) = pick.get(&entries).clone();
        prop_assume!(!token.is_empty());

        let inputs = AccountInputs {
            accounts_json: Some(compact_json(&entries)),
            token: Some(token.clone()),
            nickname: Some("standalone".to_string()),
        };
        let report = ConfigBuilder::default().build(&inputs).unwrap();

        prop_assert_eq!(report.document.users.len(), expected_count(&entries));
        prop_assert_eq!(
            report.document.users.iter().filter(|u| u.token == token).count(),
            1
        );
        prop_assert!(report.document.users.iter().all(|u| u.nickname != "standalone"));
    }
}
