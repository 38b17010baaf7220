//! Fixed go-infra project layout
//!
//! Every path is relative to the invocation's working directory, which is
//! assumed to be the project root. Nothing here is configurable.

/// The Go toolchain binary.
pub const GO: &str = "go";

/// The external linter binary.
///
/// The build script this tool replaces spelled the program token with a
/// trailing blank (`"golangci-lint "`), which fails executable resolution on
/// strict platforms. Ported trimmed; whether the intended linter is really
/// golangci-lint is pinned as an open question in the action tests.
pub const LINTER: &str = "golangci-lint";

/// Directory holding the main entry point, passed to `go build -C`.
pub const ENTRYPOINT_DIR: &str = "cmd/go-infra";

/// Output directory argument for `go build -o`, relative to
/// [`ENTRYPOINT_DIR`] because `-C` changes the compiler's directory first.
pub const DIST_OUTPUT: &str = "./../../dist/";

/// The built binary, as launched by the `run` action from the project root.
pub const BINARY: &str = "dist/go-infra";

/// Configuration directory handed to the built binary via `-config`.
pub const CONFIG_DIR: &str = "./configs";
