// Live-network checks, opt-in via `--features integration-tests`.
#![cfg(feature = "integration-tests")]

mod update_checker_test;
