/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via the `RUST_LOG`
///   environment variable
/// - **Pretty formatting**: Human-readable output with timestamps and log
///   levels
///
/// Lesson output goes to the console abstraction; logging is a separate
/// channel for what the *program* is doing, not what the lesson prints.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Show lesson start/finish events
/// - `RUST_LOG=debug` - Also show rejected user input
/// - `RUST_LOG=oop_recipe=debug` - Debug only for this crate
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
