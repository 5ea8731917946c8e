//! Member references embedded in pushdown SQL
//!
//! Pushdown members carry the SQL they were generated from, where members
//! appear as `${cube.member}` template references.

use std::sync::LazyLock;

use regex::Regex;

use crate::query::PushdownMember;

static MEMBER_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([a-zA-Z0-9_]+\.[a-zA-Z0-9_]+)\}").unwrap());

// `${cube.member} = value`, value running up to whitespace or ')'
static MEMBER_EQUALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z0-9_]+\.[a-zA-Z0-9_]+)\}\s*=\s*([^)\s]+)").unwrap()
});

/// Every `${cube.member}` reference in `expr`, in order of appearance
pub fn extract_members_from_expression(expr: &str) -> Vec<String> {
    MEMBER_REFERENCE
        .captures_iter(expr)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Every `(member, value)` pair compared with `=` in `sql`
///
/// Values are returned as written; no unquoting or type conversion is done.
pub fn extract_member_value_from_sql(sql: &str) -> Vec<(String, String)> {
    MEMBER_EQUALS
        .captures_iter(sql)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Members a pushdown member's SQL references as `${cube.member}`
///
/// The `expression` strings are scanned first; `definition` is only
/// consulted when they reference nothing.
pub(super) fn pushdown_references(pushdown: &PushdownMember<'_>) -> Vec<String> {
    let mut members: Vec<String> = Vec::new();
    for expr in pushdown.expressions() {
        push_unique(&mut members, extract_members_from_expression(expr));
    }
    if members.is_empty() {
        if let Some(definition) = pushdown.definition() {
            push_unique(&mut members, extract_members_from_expression(definition));
        }
    }
    members
}

fn push_unique(members: &mut Vec<String>, found: Vec<String>) {
    for member in found {
        if !members.contains(&member) {
            members.push(member);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_members_from_expression() {
        let expr = "return `COUNT(CASE WHEN (${internet_sales.salesterritorykey} = 1) THEN ${orders.id} END)`";
        assert_eq!(
            extract_members_from_expression(expr),
            vec!["internet_sales.salesterritorykey", "orders.id"]
        );
    }

    #[test]
    fn test_members_from_expression_ignores_malformed() {
        assert!(extract_members_from_expression("${nodot} ${a.b.c} $a.b {a.b}").is_empty());
        assert!(extract_members_from_expression("").is_empty());
    }

    #[test]
    fn test_member_value_pairs() {
        let sql = "CASE WHEN ((${internet_sales.salesterritorykey} = 1) OR (${internet_sales.salesterritorykey}=9)) THEN TRUE END";
        assert_eq!(
            extract_member_value_from_sql(sql),
            vec![
                ("internet_sales.salesterritorykey".to_string(), "1".to_string()),
                ("internet_sales.salesterritorykey".to_string(), "9".to_string()),
            ]
        );
    }

    #[test]
    fn test_member_value_keeps_quoting() {
        let sql = "${orders.status} = `shipped` AND ${orders.total} > 5";
        assert_eq!(
            extract_member_value_from_sql(sql),
            vec![("orders.status".to_string(), "`shipped`".to_string())]
        );
    }

    #[test]
    fn test_pushdown_references_prefers_expression() {
        let value = json!({
            "cubeName": "test_a",
            "expressionName": "foo",
            "expression": ["test_a", "return `MIN(${test_a.active_from_at})`"],
            "definition": "{\"sql\":\"MIN(${test_a.other})\"}"
        });
        let pushdown = PushdownMember::from_value(&value).unwrap();
        assert_eq!(pushdown_references(&pushdown), vec!["test_a.active_from_at"]);
    }

    #[test]
    fn test_pushdown_references_falls_back_to_definition() {
        let value = json!({
            "cubeName": "test_b",
            "expressionName": "bar",
            "expression": ["test_b", "return `1`"],
            "definition": "{\"sql\":\"MAX(${test_b.amount}) + ${test_b.amount}\"}"
        });
        let pushdown = PushdownMember::from_value(&value).unwrap();
        assert_eq!(pushdown_references(&pushdown), vec!["test_b.amount"]);
    }
}
