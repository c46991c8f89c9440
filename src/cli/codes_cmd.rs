//! Handler for the `sqlvm-errors codes` subcommand.

use crate::errors::{Category, Code};

pub(crate) fn run_codes(json: bool) {
    if json {
        println!("{}", codes_json());
    } else {
        print!("{}", codes_table());
    }
}

fn codes_json() -> serde_json::Value {
    let categories: Vec<_> = Category::ALL
        .iter()
        .map(|c| serde_json::json!({ "value": c.value(), "name": c.name() }))
        .collect();
    let codes: Vec<_> = Code::ALL
        .iter()
        .map(|c| serde_json::json!({ "value": c.value(), "name": c.name(), "group": c.group() }))
        .collect();
    serde_json::json!({ "categories": categories, "codes": codes })
}

fn codes_table() -> String {
    let mut output = String::from("Categories:\n");
    for category in Category::ALL {
        output.push_str(&format!("  {:>2}  {}\n", category.value(), category.name()));
    }
    output.push_str("\nCodes:\n");
    for code in Code::ALL {
        let group = code.group().map(|g| g.name()).unwrap_or_default();
        output.push_str(&format!(
            "  {:>2}  {:<34}[{}]\n",
            code.value(),
            code.name(),
            group
        ));
    }
    output
}
