#![no_main]

use libfuzzer_sys::fuzz_target;
use pest_population_projector::io::{read_json_from_bytes, read_toml_from_bytes};

fuzz_target!(|data: &[u8]| {
    for scenario in [read_toml_from_bytes(data), read_json_from_bytes(data)]
        .into_iter()
        .flatten()
    {
        if scenario.validate().is_ok() && scenario.periods <= 10_000 {
            let _ = scenario.projection();
            let _ = scenario.projection_with_trajectory();
        }
    }
});
