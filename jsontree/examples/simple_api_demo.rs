// SPDX-License-Identifier: Apache-2.0

// Example demonstrating the tree-building API

use jsontree::{parse_str, ParseError, Value};

fn describe(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(members) => {
            println!("{}Object ({} members)", pad, members.len());
            for (key, member) in members {
                println!("{}  Key: '{}'", pad, key);
                describe(member, indent + 2);
            }
        }
        Value::Array(items) => {
            println!("{}Array ({} items)", pad, items.len());
            for item in items {
                describe(item, indent + 1);
            }
        }
        Value::String(s) => println!("{}String: '{}'", pad, s),
        Value::Number(n) => println!("{}Number: {}", pad, n),
        Value::Bool(b) => println!("{}Bool: {}", pad, b),
        Value::Null => println!("{}Null", pad),
    }
}

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": "value", "number": 42, "flag": true, "list": [1.5, null, "x\ty"]}"#;
    println!("Input: {}", json);

    let value = parse_str(json)?;
    describe(&value, 0);

    println!();
    println!("name   = {:?}", value["name"].as_str());
    println!("list.0 = {:?}", value["list"][0].as_f64());
    println!("absent = {:?}", value["absent"]);

    match parse_str("[1, 2,]") {
        Err(e) => println!("Rejected '[1, 2,]': {}", e),
        Ok(v) => println!("Unexpectedly parsed: {:?}", v),
    }
    Ok(())
}
