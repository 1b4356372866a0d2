//! Integration tests for DateTime MCP Server
//!
//! Each test feeds newline-delimited requests through the transport loop and
//! inspects the newline-delimited responses.

use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::{json, Value};

use datetime_mcp::config::ServerConfig;
use datetime_mcp::server::McpServer;

fn serve_with(server: &McpServer, requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|r| format!("{}\n", r)).collect();
    serve_raw(server, &input)
}

fn serve_raw(server: &McpServer, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    server
        .serve(Cursor::new(input.as_bytes().to_vec()), &mut output)
        .unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn serve(requests: &[Value]) -> Vec<Value> {
    serve_with(&McpServer::new(), requests)
}

fn call(id: i64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

/// Parse the JSON text inside a tools/call result
fn tool_payload(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

fn tool_text(response: &Value) -> String {
    assert_eq!(response["result"]["content"][0]["type"], "text");
    response["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_handshake_then_discovery() {
    let responses = serve(&[
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {
            "protocolVersion": "2024-11-05", "capabilities": {},
            "clientInfo": {"name": "test", "version": "0"}
        }}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
    ]);
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["serverInfo"]["version"], datetime_mcp::VERSION);
    assert_eq!(responses[0]["result"]["capabilities"], json!({"tools": {}}));

    let tools = responses[1]["result"]["tools"].as_array().unwrap();
    let mut names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "add_days",
            "get_current_datetime",
            "get_iso8601_timestamp",
            "get_week_number",
            "is_weekend"
        ]
    );
    for tool in tools {
        assert!(!tool["description"].as_str().unwrap().is_empty());
        assert_eq!(tool["inputSchema"]["type"], "object");
    }
}

#[test]
fn test_tools_list_is_byte_identical() {
    let server = McpServer::new();
    let line = "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n";
    let mut outputs = Vec::new();
    for _ in 0..3 {
        let mut output = Vec::new();
        server.serve(Cursor::new(line), &mut output).unwrap();
        outputs.push(output);
    }
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

#[test]
fn test_ids_are_echoed() {
    let ids = vec![json!(0), json!(42), json!(-7), json!("abc"), Value::Null];
    let requests: Vec<Value> = ids
        .iter()
        .map(|id| json!({"jsonrpc": "2.0", "id": id, "method": "tools/list"}))
        .chain(std::iter::once(json!({"jsonrpc": "2.0", "method": "tools/list"})))
        .collect();

    let responses = serve(&requests);
    assert_eq!(responses.len(), ids.len() + 1);
    for (response, id) in responses.iter().zip(ids.iter()) {
        assert_eq!(&response["id"], id);
    }
    assert_eq!(responses[ids.len()]["id"], Value::Null);
}

#[test]
fn test_add_days_across_month_end() {
    let responses = serve(&[call(1, "add_days", json!({"date": "2025-11-29", "days": 2}))]);
    let payload = tool_payload(&responses[0]);
    assert_eq!(payload["original"], "2025-11-29");
    assert_eq!(payload["result"], "2025-12-01");
    assert_eq!(payload["dayOfWeek"], "Monday");
}

#[test]
fn test_add_days_defaults_to_today() {
    let responses = serve(&[call(1, "add_days", json!({}))]);
    let payload = tool_payload(&responses[0]);
    assert_eq!(payload["original"], payload["result"]);
    assert_eq!(payload["daysAdded"], 0);
}

#[test]
fn test_add_days_unparsable_date_uses_today() {
    let server = McpServer::new();
    let today = server.calendar().today().format("%Y-%m-%d").to_string();
    let responses = serve_with(&server, &[call(1, "add_days", json!({"date": "next tuesday"}))]);
    assert!(responses[0].get("error").is_none());
    let payload = tool_payload(&responses[0]);
    assert_eq!(payload["original"], payload["result"]);
    // Tolerate a midnight rollover between the two clock reads
    let original = payload["original"].as_str().unwrap();
    assert!(original >= today.as_str());
}

#[test]
fn test_add_days_bad_type_is_internal_error() {
    let responses = serve(&[call(5, "add_days", json!({"days": [1]}))]);
    assert_eq!(responses[0]["error"]["code"], -32603);
    assert_eq!(responses[0]["id"], 5);
    assert!(responses[0].get("result").is_none());
}

#[test]
fn test_add_days_accepts_timestamps() {
    let responses = serve(&[
        call(1, "add_days", json!({"date": "2025-11-29T00:00:00.000Z", "days": 2})),
        call(2, "is_weekend", json!({"date": "2025-11-29T10:00:00Z"})),
    ]);
    let payload = tool_payload(&responses[0]);
    assert_eq!(payload["original"], "2025-11-29");
    assert_eq!(payload["result"], "2025-12-01");
    assert_eq!(payload["dayOfWeek"], "Monday");

    let payload = tool_payload(&responses[1]);
    assert_eq!(payload["date"], "2025-11-29");
    assert_eq!(payload["dayOfWeek"], "Saturday");
}

#[test]
fn test_timestamp_output_feeds_back_into_date_tools() {
    let server = McpServer::new();
    let stamp = tool_text(&serve_with(&server, &[call(1, "get_iso8601_timestamp", json!({}))])[0]);
    let responses = serve_with(&server, &[call(2, "get_week_number", json!({"date": stamp}))]);
    let payload = tool_payload(&responses[0]);
    assert_eq!(payload["date"].as_str().unwrap(), &stamp[..10]);
}

#[test]
fn test_is_weekend_saturday() {
    let responses = serve(&[call(1, "is_weekend", json!({"date": "2025-11-29"}))]);
    let payload = tool_payload(&responses[0]);
    assert_eq!(payload["isWeekend"], true);
    assert_eq!(payload["dayOfWeek"], "Saturday");
    assert_eq!(payload["date"], "2025-11-29");
}

#[test]
fn test_week_number_iso_rules() {
    let responses = serve(&[
        call(1, "get_week_number", json!({"date": "2025-11-29"})),
        call(2, "get_week_number", json!({"date": "2024-12-30"})),
    ]);
    let payload = tool_payload(&responses[0]);
    assert_eq!(payload["weekNumber"], 48);
    assert_eq!(payload["year"], 2025);

    let payload = tool_payload(&responses[1]);
    assert_eq!(payload["weekNumber"], 1);
}

#[test]
fn test_iso8601_timestamps_non_decreasing() {
    let responses = serve(&[
        call(1, "get_iso8601_timestamp", json!({})),
        call(2, "get_iso8601_timestamp", json!({})),
    ]);
    let first = tool_text(&responses[0]);
    let second = tool_text(&responses[1]);
    assert!(first.ends_with('Z'));

    let first: DateTime<Utc> = DateTime::parse_from_rfc3339(&first).unwrap().into();
    let second: DateTime<Utc> = DateTime::parse_from_rfc3339(&second).unwrap().into();
    assert!(first <= second);
}

#[test]
fn test_current_datetime_uses_configured_default() {
    let config = ServerConfig {
        default_timezone: Tz::Australia__Sydney,
        ..ServerConfig::default()
    };
    let server = McpServer::with_config(&config);
    let responses = serve_with(
        &server,
        &[
            call(1, "get_current_datetime", json!({})),
            call(2, "get_current_datetime", json!({"timezone": "Bogus/Zone"})),
            call(3, "get_current_datetime", json!({"timezone": "UTC"})),
        ],
    );

    assert_eq!(tool_payload(&responses[0])["timezone"], "Australia/Sydney");
    assert_eq!(tool_payload(&responses[1])["timezone"], "Australia/Sydney");
    assert!(responses[1].get("error").is_none());

    let utc = tool_payload(&responses[2]);
    assert_eq!(utc["timezone"], "UTC");
    assert!(utc["datetime"].as_str().unwrap().ends_with("+00:00"));
    for key in ["date", "time", "dayOfWeek", "weekNumber", "year", "month", "day"] {
        assert!(utc.get(key).is_some(), "missing {}", key);
    }
}

#[test]
fn test_unknown_tool() {
    let responses = serve(&[call(8, "get_moon_phase", json!({}))]);
    assert_eq!(responses[0]["error"]["code"], -32603);
    assert_eq!(responses[0]["error"]["message"], "Unknown tool: get_moon_phase");
    assert!(responses[0].get("result").is_none());
}

#[test]
fn test_unknown_methods() {
    let responses = serve(&[
        json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "prompts/list"}),
        json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call"}),
    ]);
    for response in &responses {
        assert_eq!(response["error"]["code"], -32601);
    }
    assert_eq!(responses[1]["error"]["message"], "Method not found: prompts/list");
}

#[test]
fn test_garbage_line_does_not_stop_loop() {
    let input = concat!(
        "this is not json\n",
        "\n",
        "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/call\",",
        "\"params\":{\"name\":\"is_weekend\",\"arguments\":{\"date\":\"2025-11-30\"}}}\n",
    );
    let responses = serve_raw(&McpServer::new(), input);
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert_eq!(responses[0]["id"], Value::Null);
    assert_eq!(tool_payload(&responses[1])["isWeekend"], true);
}

#[test]
fn test_every_response_has_result_xor_error() {
    let responses = serve(&[
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "nope"}),
        call(3, "is_weekend", json!({})),
        call(4, "nope", json!({})),
    ]);
    for response in responses {
        assert_eq!(response["jsonrpc"], "2.0");
        assert!(response.get("result").is_some() != response.get("error").is_some());
    }
}

#[test]
fn test_binary_stdout_carries_only_responses() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_datetime-server"))
        .env("DATETIME_MCP_LOG", "trace")
        .env("DATETIME_MCP_TIMEZONE", "UTC")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let input = [
        call(1, "is_weekend", json!({"date": "2025-11-29"})).to_string(),
        "}{ garbage".to_string(),
        call(2, "get_week_number", json!({"date": "the day after tomorrow"})).to_string(),
        call(3, "get_current_datetime", json!({"timezone": "Nowhere/City"})).to_string(),
    ]
    .join("\n");
    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, "{}", input).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let responses: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 4);
    for response in &responses {
        assert_eq!(response["jsonrpc"], "2.0");
        assert!(response.get("result").is_some() != response.get("error").is_some());
    }
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[1]["error"]["code"], -32700);
    assert_eq!(responses[2]["id"], 2);
    assert_eq!(responses[3]["id"], 3);

    assert!(!output.stderr.is_empty());
}
