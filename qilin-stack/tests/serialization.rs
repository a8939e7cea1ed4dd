//! Serde form of stacks: a bottom-to-top JSON array.

use pretty_assertions::assert_eq;
use qilin_stack::{ArrayStack, LinkedStack, Stack};
use serde_json::json;

#[test]
fn array_stack_serializes_bottom_to_top() {
    let mut stack = ArrayStack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(serde_json::to_value(&stack).unwrap(), json!([1, 2, 3]));
}

#[test]
fn linked_stack_serializes_bottom_to_top() {
    let mut stack = LinkedStack::new();
    stack.push("a");
    stack.push("b");
    assert_eq!(serde_json::to_value(&stack).unwrap(), json!(["a", "b"]));
}

#[test]
fn deserialized_sequence_puts_last_on_top() {
    let array: ArrayStack<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
    let linked: LinkedStack<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(array.peek(), Ok(&3));
    assert_eq!(linked.peek(), Ok(&3));
    assert_eq!(array.len(), linked.len());
}

#[test]
fn empty_stacks_serialize_as_empty_arrays() {
    assert_eq!(
        serde_json::to_string(&ArrayStack::<u8>::new()).unwrap(),
        "[]"
    );
    assert_eq!(
        serde_json::to_string(&LinkedStack::<u8>::new()).unwrap(),
        "[]"
    );
}

#[test]
fn non_sequence_input_is_rejected() {
    assert!(serde_json::from_str::<ArrayStack<u8>>("{\"values\": [1]}").is_err());
    assert!(serde_json::from_str::<LinkedStack<u8>>("42").is_err());
}

#[test]
fn stacks_nest_inside_other_documents() {
    let doc = json!({ "name": "plates", "stack": ["bottom", "middle", "top"] });
    #[derive(serde::Deserialize)]
    struct Doc {
        name: String,
        stack: LinkedStack<String>,
    }
    let parsed: Doc = serde_json::from_value(doc).unwrap();
    assert_eq!(parsed.name, "plates");
    assert_eq!(parsed.stack.peek().map(String::as_str), Ok("top"));
}
