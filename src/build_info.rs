//! Compile-time build metadata exposed to the CLI.

/// Version block shown by `hexchat-themer --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("HEXCHAT_THEMER_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("HEXCHAT_THEMER_BUILD_TIMESTAMP")
);
