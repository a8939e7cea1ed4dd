#![no_main]

//! Fuzz target for script parsing and execution.
//!
//! Arbitrary text must either fail to parse with a line-numbered error or
//! run to completion in keep-going mode on both backends with equal results.

use libfuzzer_sys::fuzz_target;
use qilin_cli::{Backend, SessionOptions, parse_script, run_script};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    let script = match parse_script(source) {
        Ok(script) => script,
        Err(err) => {
            assert!(err.line() >= 1);
            return;
        }
    };

    let run = |backend| {
        run_script(
            &script,
            SessionOptions {
                backend,
                keep_going: true,
            },
        )
        .expect("keep-going sessions never fail")
    };
    let array = run(Backend::Array);
    let linked = run(Backend::Linked);

    assert_eq!(array.steps.len(), script.len());
    assert_eq!(array.final_stack, linked.final_stack);
    assert_eq!(array.error_count(), linked.error_count());
});
