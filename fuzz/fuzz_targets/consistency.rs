#![no_main]
use ahash::RandomState;
use jsonvalue::JsonValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let state = RandomState::with_seeds(1, 2, 3, 4);
        let custom = JsonValue::from(value.clone());
        let wrapped = JsonValue::if_present(Some(custom.clone()));
        assert_eq!(custom, value);
        assert_eq!(wrapped, custom);
        assert_eq!(state.hash_one(&wrapped), state.hash_one(&custom));

        let decoded: JsonValue = serde_json::from_slice(data).expect("Already parsed");
        assert_eq!(decoded, custom);
        assert_eq!(state.hash_one(&decoded), state.hash_one(&custom));

        let back = serde_json::Value::try_from(&custom).expect("Parsed JSON is representable");
        assert_eq!(JsonValue::from(back), custom);
    }
});
