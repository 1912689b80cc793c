//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or errors. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use serde_json::Value;
use todo_core::{ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, Todo, TodoClient, UpdateTodo};

const BASE_URL: &str = "http://localhost:5000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    match expected.get("body") {
        Some(body) => {
            let headers: Vec<(String, String)> = serde_json::from_value(expected["headers"].clone()).unwrap();
            assert_eq!(req.headers, headers, "{name}: headers");
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(sim["status"].as_u64().unwrap() as u16, sim["body"].as_str().unwrap())
}

/// Compare a parse result with either `expected_result` or `expected_error`.
fn assert_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: PartialEq + std::fmt::Debug + serde::de::DeserializeOwned,
{
    match case.get("expected_error") {
        Some(expected_error) => {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                "Validation" => assert!(matches!(err, ApiError::Validation(_)), "{name}: expected Validation"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        }
        None => {
            let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_todo(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);
        assert_outcome::<Todo>(name, &case, c.parse_create_todo(simulated(&case)));
    }
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_todos();
        assert_request(name, &req, &case["expected_request"]);
        assert_outcome::<Vec<Todo>>(name, &case, c.parse_list_todos(simulated(&case)));
    }
}

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();

        let req = c.build_get_todo(id);
        assert_request(name, &req, &case["expected_request"]);
        assert_outcome::<Todo>(name, &case, c.parse_get_todo(simulated(&case)));
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_todo(id, &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);
        assert_outcome::<Todo>(name, &case, c.parse_update_todo(simulated(&case)));
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();

        let req = c.build_delete_todo(id);
        assert_request(name, &req, &case["expected_request"]);
        assert_outcome::<Todo>(name, &case, c.parse_delete_todo(simulated(&case)));
    }
}
