#[cfg(test)]
mod tests {
    use postman_errors::{convert, convert_with_options, ConversionOptions, Error, MalformedBodyPolicy};
    use serde_json::{json, Value};
    use std::{fs, path::Path};
    use tempfile::TempDir;

    const STOREFRONT_COLLECTION: &str = r#"{
        "info": { "name": "Storefront" },
        "variable": [
            { "key": "baseUrl", "value": "https://api.contoso.com" },
            { "key": "version", "value": "v2" }
        ],
        "item": [
            {
                "name": "orders",
                "item": [
                    {
                        "name": "get order",
                        "request": { "method": "GET", "url": { "raw": "{{baseUrl}}/{{version}}/orders/:orderId" } },
                        "response": [
                            { "name": "ok", "code": 200, "body": "{\"id\":1}" },
                            {
                                "name": "throttled",
                                "code": 429,
                                "body": "{\"error\":\"slow down\"}",
                                "header": [{ "key": "Retry-After", "value": "5" }]
                            }
                        ]
                    }
                ]
            },
            {
                "name": "list products",
                "request": { "method": "GET", "url": "{{baseUrl}}/{{version}}/products/featured" },
                "response": [
                    { "name": "down", "code": 503, "body": "{\"error\":\"unavailable\"}" }
                ]
            },
            {
                "name": "health",
                "request": { "method": "GET", "url": "{{baseUrl}}/health" },
                "response": [{ "name": "ok", "code": 200, "body": "\"ok\"" }]
            }
        ]
    }"#;

    fn write_collection(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("collection.json");
        fs::write(&path, contents).unwrap();
        path
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn single_not_found_response_produces_one_group() {
        let dir = TempDir::new().unwrap();
        let input = write_collection(
            &dir,
            r#"{
                "variable": [],
                "item": [{
                    "name": "users",
                    "item": [{
                        "name": "get user",
                        "request": { "method": "GET", "url": { "raw": "https://example.com/users/:id" } },
                        "response": [
                            { "code": 200, "body": "{\"id\":1}" },
                            { "code": 404, "body": "{\"error\":\"not found\"}" }
                        ]
                    }]
                }]
            }"#,
        );
        let output = dir.path().join("Users");

        let report = convert(&input, &output).unwrap().unwrap();

        assert_eq!(report.error_groups, 1);
        assert_eq!(report.errors_file, output.join("errors-users.json"));
        assert_eq!(
            read_json(&report.errors_file),
            json!({
                "errors": [{
                    "request": { "url": "https://example.com/users/*", "method": "GET" },
                    "responses": [{ "statusCode": 404, "body": { "error": "not found" } }]
                }]
            })
        );
    }

    #[test]
    fn writes_sorted_errors_and_rc_file() {
        let dir = TempDir::new().unwrap();
        let input = write_collection(&dir, STOREFRONT_COLLECTION);
        let output = dir.path().join("nested").join("Storefront");

        let report = convert(&input, &output).unwrap().unwrap();

        let errors = read_json(&report.errors_file);
        assert_eq!(
            errors["errors"][0]["request"]["url"],
            "https://api.contoso.com/v2/products/featured"
        );
        assert_eq!(
            errors["errors"][1]["request"]["url"],
            "https://api.contoso.com/v2/orders/*"
        );
        assert_eq!(
            errors["errors"][1]["responses"],
            json!([{
                "statusCode": 429,
                "body": { "error": "slow down" },
                "headers": [{ "name": "Retry-After", "value": "5" }]
            }])
        );

        let rc = read_json(&report.rc_file);
        assert_eq!(report.rc_file, output.join("devproxyrc.json"));
        assert_eq!(rc["urlsToWatch"], json!(["https://api.contoso.com/v2/*"]));
        assert_eq!(rc["plugins"][1]["configSection"], "errorsStorefront");
        assert_eq!(rc["errorsStorefront"], json!({ "errorsFile": "errors-storefront.json" }));
    }

    #[test]
    fn output_is_pretty_printed_with_two_spaces() {
        let dir = TempDir::new().unwrap();
        let input = write_collection(&dir, STOREFRONT_COLLECTION);
        let output = dir.path().join("storefront");

        let report = convert(&input, &output).unwrap().unwrap();
        let rc = fs::read_to_string(&report.rc_file).unwrap();

        assert!(rc.starts_with("{\n  \"$schema\": \"https://raw.githubusercontent.com/"));
        assert!(rc.contains("\n  \"plugins\": [\n    {\n      \"name\": \"RetryAfterPlugin\","));
        assert!(rc.ends_with("\n}"));
    }

    #[test]
    fn collection_without_errors_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = write_collection(
            &dir,
            r#"{
                "variable": [],
                "item": [
                    { "name": "empty", "item": [] },
                    {
                        "name": "ok",
                        "request": { "method": "GET", "url": "/ok" },
                        "response": [{ "code": 200, "body": "{}" }]
                    }
                ]
            }"#,
        );
        let output = dir.path().join("quiet");

        assert_eq!(convert(&input, &output).unwrap(), None);
        assert!(!output.exists());
    }

    #[test]
    fn running_twice_gives_identical_files() {
        let dir = TempDir::new().unwrap();
        let input = write_collection(&dir, STOREFRONT_COLLECTION);
        let output = dir.path().join("storefront");

        let first = convert(&input, &output).unwrap().unwrap();
        let errors = fs::read(&first.errors_file).unwrap();
        let rc = fs::read(&first.rc_file).unwrap();

        let second = convert(&input, &output).unwrap().unwrap();

        assert_eq!(fs::read(&second.errors_file).unwrap(), errors);
        assert_eq!(fs::read(&second.rc_file).unwrap(), rc);
    }

    #[test]
    fn malformed_body_aborts_without_output() {
        let dir = TempDir::new().unwrap();
        let input = write_collection(
            &dir,
            r#"{
                "variable": [],
                "item": [
                    {
                        "name": "good",
                        "request": { "method": "GET", "url": "/good" },
                        "response": [{ "code": 500, "body": "{}" }]
                    },
                    {
                        "name": "bad",
                        "request": { "method": "GET", "url": "/bad" },
                        "response": [{ "code": 500, "body": "Internal Server Error" }]
                    }
                ]
            }"#,
        );
        let output = dir.path().join("broken");

        assert!(matches!(
            convert(&input, &output),
            Err(Error::InvalidResponseBody { .. })
        ));
        assert!(!output.exists());

        let mut options = ConversionOptions::default();
        options.set_malformed_body_policy(MalformedBodyPolicy::Skip);
        let report = convert_with_options(&input, &output, &options)
            .unwrap()
            .unwrap();
        assert_eq!(report.error_groups, 1);
        assert_eq!(read_json(&report.rc_file)["urlsToWatch"], json!(["/good*"]));
    }

    #[test]
    fn missing_input_and_invalid_json_are_errors() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out");

        assert!(matches!(
            convert(dir.path().join("missing.json"), &output),
            Err(Error::IoError(_))
        ));

        let input = write_collection(&dir, "not a collection");
        assert!(matches!(
            convert(&input, &output),
            Err(Error::InvalidCollection(_))
        ));
    }
}
