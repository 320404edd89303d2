//! Runs the standard smoke suite against `API_BASE_URL` (or the first argument) and exits
//! non-zero if any check fails.

use smoke_tests::{init_tracing, standard_checks, ApiTester, CheckError, Summary};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let tester = match std::env::args().nth(1) {
        Some(base_url) => ApiTester::new(base_url),
        None => ApiTester::from_env(),
    };

    println!("Starting Orii-O1 API smoke tests against {}", tester.base_url());
    println!("{}", "=".repeat(50));

    let outcomes = tester.run_suite(&standard_checks()).await;

    for outcome in &outcomes {
        let check = &outcome.check;
        match &outcome.result {
            Ok(report) => {
                println!("✅ {} - {} {}", check.name, report.status, report.url);
                if let Ok(pretty) = serde_json::to_string_pretty(&report.body) {
                    println!("{}", pretty);
                }
            }
            Err(e @ CheckError::Connection { .. }) => {
                println!("❌ {} - {}", check.name, e);
                println!("   Make sure the backend server is running");
            }
            Err(e @ CheckError::StatusMismatch { body, .. }) => {
                println!("❌ {} - {}", check.name, e);
                println!("   Response: {}", body);
            }
            Err(e) => println!("❌ {} - {}", check.name, e),
        }
    }

    let summary = Summary::from_outcomes(&outcomes);
    println!("{}", "=".repeat(50));
    println!("Tests Run: {}", summary.run);
    println!("Tests Passed: {}", summary.passed);
    println!("Tests Failed: {}", summary.failed());
    println!("Success Rate: {:.1}%", summary.success_rate());

    if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
