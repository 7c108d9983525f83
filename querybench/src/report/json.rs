use querybench_core::TestResult;

/// Machine-readable export of the whole result, pretty-printed.
pub fn export(result: &TestResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
