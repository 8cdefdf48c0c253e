#![no_main]

use libfuzzer_sys::fuzz_target;
use pest_population_projector::{io::read_interventions_csv_from_bytes, project, Intervention};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(iv) = s.parse::<Intervention>() {
            let _ = iv.validate(52);
            let _ = project(10.0, 0.03, 52, &[iv]);
        }
    }
    if let Ok(ivs) = read_interventions_csv_from_bytes(data) {
        let _ = project(10.0, 0.03, 52, &ivs);
    }
});
