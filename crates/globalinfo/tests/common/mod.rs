use std::io::Write;

pub fn write_namespace(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

pub fn service_namespace() -> &'static str {
    r#"{
        "entries": {
            "service": { "kind": "constant", "value": "billing" },
            "request_id": { "kind": "counter", "start": 1000 },
            "started_at": { "kind": "now" },
            "region": {
                "kind": "alternatives",
                "candidates": {
                    "eu": { "kind": "constant", "value": "eu-west-1" },
                    "us": { "kind": "constant", "value": "us-east-1" }
                }
            }
        }
    }"#
}
