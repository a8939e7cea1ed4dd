#![no_main]

//! Fuzz target driving both stack implementations with the same operations.
//!
//! Any divergence in results, errors or contents is a bug.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use qilin_stack::{ArrayStack, LinkedStack, Stack};

#[derive(Debug, Arbitrary)]
enum Op {
    Push(u16),
    Pop,
    Peek,
    PeekMut(u16),
    Clear,
    Extend(Vec<u16>),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut array = ArrayStack::new();
    let mut linked = LinkedStack::new();
    let mut model: Vec<u16> = Vec::new();

    for op in ops {
        match op {
            Op::Push(v) => {
                array.push(v);
                linked.push(v);
                model.push(v);
            }
            Op::Pop => {
                let expected = model.pop();
                assert_eq!(array.pop().ok(), expected);
                assert_eq!(linked.pop().ok(), expected);
            }
            Op::Peek => {
                let expected = model.last();
                assert_eq!(array.peek().ok(), expected);
                assert_eq!(linked.peek().ok(), expected);
            }
            Op::PeekMut(v) => {
                if let Some(top) = model.last_mut() {
                    *top = v;
                }
                if let Ok(top) = array.peek_mut() {
                    *top = v;
                }
                if let Ok(top) = linked.peek_mut() {
                    *top = v;
                }
            }
            Op::Clear => {
                array.clear();
                linked.clear();
                model.clear();
            }
            Op::Extend(values) => {
                array.extend(values.iter().copied());
                linked.extend(values.iter().copied());
                model.extend(values);
            }
        }
        assert_eq!(array.len(), model.len());
        assert_eq!(linked.len(), model.len());
    }

    assert!(array.iter().eq(model.iter().rev()));
    assert!(linked.iter().eq(model.iter().rev()));

    let array_json = serde_json::to_string(&array).expect("serialize array stack");
    let linked_json = serde_json::to_string(&linked).expect("serialize linked stack");
    assert_eq!(array_json, linked_json);
});
