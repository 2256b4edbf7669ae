#![no_main]

use datastream::fuzz::fixed_point::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| {
    harness(data);
});
