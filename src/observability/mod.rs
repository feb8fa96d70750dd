//! Observability infrastructure: logging setup, phase tracking, crash reports.
//!
//! ## Usage
//!
//! ```ignore
//! use tonemap::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(verbosity);
//!     // ... rest of application
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, reset_context, set_input_size, set_phase, AnalysisContext,
    AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, level_for_verbosity};
