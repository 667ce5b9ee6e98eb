#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = duoslider_harness::run_from_env() {
        tracing::error!(%error, "replay failed");
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
